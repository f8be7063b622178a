//! Sensor capability traits and the per-deployment sensor rig.
//!
//! Hardware drivers live behind these traits: one production implementation
//! per physical part, selected at startup. The in-tree implementations are
//! the sysfs CPU temperature source and a deterministic simulated backend
//! used when no hardware is attached.

pub mod cpu;
pub mod retry;
pub mod simulated;

use crate::config::SensorSet;
use crate::error::Result;
use crate::models::{GasReading, ParticulateReading};
use crate::sensors::retry::ParticulateRetryPolicy;

/// Default noise aggregation band in hertz.
pub const NOISE_BAND_LOW_HZ: f64 = 100.0;
pub const NOISE_BAND_HIGH_HZ: f64 = 1200.0;

/// Host temperature source used for self-heating compensation. A failure
/// here is fatal: without it no compensation is possible.
pub trait CpuTemperatureReader {
    fn read(&mut self) -> Result<f64>;
}

/// Combined temperature/pressure/humidity sensor (one physical part).
pub trait ClimateSensor {
    fn read_temperature(&mut self) -> Result<f64>;
    fn read_pressure(&mut self) -> Result<f64>;
    fn read_humidity(&mut self) -> Result<f64>;
}

pub trait LightSensor {
    fn read_lux(&mut self) -> Result<f64>;
}

pub trait NoiseSensor {
    /// Aggregate amplitude over the given frequency band.
    fn read_amplitude(&mut self, band_low_hz: f64, band_high_hz: f64) -> Result<f64>;
}

pub trait GasSensor {
    fn read_all(&mut self) -> Result<GasReading>;
}

/// Particulate matter counter. The only sensor in the set with a transient
/// failure mode ([`crate::error::Error::ReadTimeout`]); see
/// [`ParticulateRetryPolicy`] for the recovery contract.
pub trait ParticulateSensor {
    fn read(&mut self) -> Result<ParticulateReading>;
}

/// Factory recreating a particulate sensor from scratch, used by the retry
/// policy to reinitialize after a timeout.
pub type ParticulateFactory = Box<dyn FnMut() -> Box<dyn ParticulateSensor + Send> + Send>;

/// The live sensor handles for one deployment variant. The climate sensor is
/// always present (every variant reports temperature); the rest follow the
/// configured [`SensorSet`].
pub struct SensorRig {
    pub climate: Box<dyn ClimateSensor + Send>,
    pub light: Option<Box<dyn LightSensor + Send>>,
    pub noise: Option<Box<dyn NoiseSensor + Send>>,
    pub gas: Option<Box<dyn GasSensor + Send>>,
    pub particulates: Option<ParticulateRetryPolicy>,
}

impl SensorRig {
    /// Build a rig from the simulated backend, populated per the sensor set.
    pub fn simulated(set: SensorSet) -> Self {
        use simulated::{
            SimulatedClimate, SimulatedGas, SimulatedLight, SimulatedNoise, SimulatedParticulates,
        };

        let extended = set == SensorSet::Full;
        SensorRig {
            climate: Box::new(SimulatedClimate::new()),
            light: (set != SensorSet::Minimal)
                .then(|| Box::new(SimulatedLight::new()) as Box<dyn LightSensor + Send>),
            noise: extended
                .then(|| Box::new(SimulatedNoise::new()) as Box<dyn NoiseSensor + Send>),
            gas: extended.then(|| Box::new(SimulatedGas::new()) as Box<dyn GasSensor + Send>),
            particulates: extended.then(|| {
                ParticulateRetryPolicy::new(Box::new(|| {
                    Box::new(SimulatedParticulates::new()) as Box<dyn ParticulateSensor + Send>
                }))
            }),
        }
    }
}
