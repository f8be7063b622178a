use log::warn;
use tokio::time::{sleep, Duration};

use crate::error::{Error, Result};
use crate::models::ParticulateReading;
use crate::sensors::{ParticulateFactory, ParticulateSensor};

/// Seconds to wait after recreating the sensor before the retry read.
const SETTLE_DELAY_SECS: u64 = 1;

/// Bounded recovery for the one sensor known to time out.
///
/// On a timeout the sensor instance is discarded, a fresh one is built from
/// the factory, and after a fixed settle delay the read is attempted exactly
/// once more. A second failure propagates; unbounded retries would break the
/// fixed-interval cadence.
pub struct ParticulateRetryPolicy {
    sensor: Box<dyn ParticulateSensor + Send>,
    reinit: ParticulateFactory,
}

impl ParticulateRetryPolicy {
    pub fn new(mut reinit: ParticulateFactory) -> Self {
        let sensor = reinit();
        ParticulateRetryPolicy { sensor, reinit }
    }

    pub async fn read_with_retry(&mut self) -> Result<ParticulateReading> {
        match self.sensor.read() {
            Ok(reading) => Ok(reading),
            Err(Error::ReadTimeout) => {
                warn!("Particulate read timed out, reinitializing sensor");
                self.sensor = (self.reinit)();
                sleep(Duration::from_secs(SETTLE_DELAY_SECS)).await;
                self.sensor.read()
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Fails with ReadTimeout for the first `failures` reads across all
    /// instances, then succeeds.
    struct ScriptedParticulates {
        reads: Arc<AtomicUsize>,
        failures: usize,
    }

    impl ParticulateSensor for ScriptedParticulates {
        fn read(&mut self) -> Result<ParticulateReading> {
            let attempt = self.reads.fetch_add(1, Ordering::SeqCst);
            if attempt < self.failures {
                Err(Error::ReadTimeout)
            } else {
                Ok(ParticulateReading {
                    pm1: 2.0,
                    pm25: 5.0,
                    pm10: 11.0,
                })
            }
        }
    }

    fn make_policy(failures: usize) -> (ParticulateRetryPolicy, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let reads = Arc::new(AtomicUsize::new(0));
        let reinits = Arc::new(AtomicUsize::new(0));
        let reads_for_factory = reads.clone();
        let reinits_for_factory = reinits.clone();
        let policy = ParticulateRetryPolicy::new(Box::new(move || {
            reinits_for_factory.fetch_add(1, Ordering::SeqCst);
            Box::new(ScriptedParticulates {
                reads: reads_for_factory.clone(),
                failures,
            }) as Box<dyn ParticulateSensor + Send>
        }));
        (policy, reads, reinits)
    }

    #[tokio::test(start_paused = true)]
    async fn clean_read_needs_no_recovery() {
        let (mut policy, reads, reinits) = make_policy(0);
        let reading = policy.read_with_retry().await.unwrap();
        assert_eq!(reading.pm25, 5.0);
        assert_eq!(reads.load(Ordering::SeqCst), 1);
        // One construction, no reinitialization.
        assert_eq!(reinits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn single_timeout_recovers_after_one_reinit() {
        let (mut policy, reads, reinits) = make_policy(1);
        let reading = policy.read_with_retry().await.unwrap();
        assert_eq!(reading.pm10, 11.0);
        assert_eq!(reads.load(Ordering::SeqCst), 2);
        assert_eq!(reinits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn two_consecutive_timeouts_propagate() {
        let (mut policy, reads, _) = make_policy(2);
        assert!(matches!(
            policy.read_with_retry().await,
            Err(Error::ReadTimeout)
        ));
        // Exactly two attempts, never a third.
        assert_eq!(reads.load(Ordering::SeqCst), 2);
    }
}
