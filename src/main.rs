use log::{error, info};
use time::OffsetDateTime;
use tokio::time::{sleep, Duration};

use envirobot::sensors::cpu::SysfsCpuTemperature;
use envirobot::utils::format_startup_time;
use envirobot::{MetricPublisher, Sampler, SamplerConfig, SensorRig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .init();

    // Load configuration
    let config = match SamplerConfig::new() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting environmental sampler at: {}",
        format_startup_time(&OffsetDateTime::now_utc())
    );
    info!(
        "Writing measurement '{}' to {} every {} seconds",
        config.measurement, config.endpoint, config.read_interval
    );

    // Set up sensors. Hardware drivers plug in behind the sensor traits; the
    // in-tree backend is the deterministic simulated one.
    let rig = SensorRig::simulated(config.sensor_set);
    if rig.particulates.is_some() {
        // Allow particulate sensor to boot
        sleep(Duration::from_secs(1)).await;
    }

    let publisher = MetricPublisher::new(config.endpoint.clone());
    let mut sampler = match Sampler::new(
        config,
        Box::new(SysfsCpuTemperature::new()),
        rig,
        publisher,
    ) {
        Ok(sampler) => sampler,
        Err(e) => {
            error!("Failed to start sampler: {}", e);
            return Err(e.into());
        }
    };

    // Handle Ctrl+C gracefully
    let (tx, mut rx) = tokio::sync::oneshot::channel();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        let _ = tx.send(());
    });

    // Run the sample loop until a fatal error or shutdown signal
    tokio::select! {
        result = sampler.run() => {
            if let Err(e) = result {
                error!("Fatal error: {}", e);
                return Err(e.into());
            }
        }
        _ = &mut rx => {
            info!("Program terminated by user. Exiting gracefully.");
        }
    }

    Ok(())
}
