use std::env;

use url::Url;

use crate::error::Error;

/// Which of the three deployment variants this instance runs as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorSet {
    /// Temperature, pressure, humidity, light, noise, gas, particulates.
    Full,
    /// Temperature, pressure, humidity, light.
    Reduced,
    /// Temperature only.
    Minimal,
}

impl SensorSet {
    fn parse(value: &str) -> Result<Self, Error> {
        match value {
            "full" => Ok(SensorSet::Full),
            "reduced" => Ok(SensorSet::Reduced),
            "minimal" => Ok(SensorSet::Minimal),
            other => Err(Error::Config(format!(
                "ENVIROPLUS_SENSOR_SET must be full, reduced or minimal, got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SamplerConfig {
    /// Divisor applied to the CPU-over-ambient delta during compensation.
    pub temp_factor: f64,
    /// Seconds to sleep between cycles.
    pub read_interval: f64,
    /// InfluxDB write endpoint, `http://HOST:PORT/write?db=DB`.
    pub endpoint: Url,
    /// Measurement name the payload line is written under.
    pub measurement: String,
    pub sensor_set: SensorSet,
}

impl SamplerConfig {
    /// Load configuration from the environment (and `.env` if present).
    ///
    /// Every value is validated here, before any sensor is touched; a missing
    /// or invalid value is fatal.
    pub fn new() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        let temp_factor = parse_float_var("ENVIROPLUS_TEMP_FACTOR")?;
        let read_interval = parse_float_var("ENVIROPLUS_READ_INTERVAL")?;
        let host = require_var("INFLUXDB_HOST")?;
        let port = require_var("INFLUXDB_PORT")?;
        let database = require_var("INFLUXDB_DB")?;
        let measurement = require_var("INFLUXDB_MEASUREMENT")?;
        let sensor_set = match env::var("ENVIROPLUS_SENSOR_SET") {
            Ok(value) => SensorSet::parse(value.trim())?,
            Err(_) => SensorSet::Full,
        };

        Self::from_values(
            temp_factor,
            read_interval,
            &host,
            &port,
            &database,
            measurement,
            sensor_set,
        )
    }

    /// Value-level constructor; `new()` is a thin environment shim over this.
    pub fn from_values(
        temp_factor: f64,
        read_interval: f64,
        host: &str,
        port: &str,
        database: &str,
        measurement: String,
        sensor_set: SensorSet,
    ) -> Result<Self, Error> {
        if temp_factor == 0.0 {
            return Err(Error::Config(
                "ENVIROPLUS_TEMP_FACTOR must be nonzero".into(),
            ));
        }
        if !read_interval.is_finite() || read_interval <= 0.0 {
            return Err(Error::Config(
                "ENVIROPLUS_READ_INTERVAL must be greater than zero".into(),
            ));
        }
        if measurement.trim().is_empty() {
            return Err(Error::Config(
                "INFLUXDB_MEASUREMENT must not be empty".into(),
            ));
        }
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("INFLUXDB_PORT is not a valid port: '{}'", port)))?;

        let raw = format!("http://{}:{}/write?db={}", host, port, database);
        let endpoint = Url::parse(&raw)
            .map_err(|e| Error::Config(format!("invalid endpoint '{}': {}", raw, e)))?;

        Ok(SamplerConfig {
            temp_factor,
            read_interval,
            endpoint,
            measurement,
            sensor_set,
        })
    }
}

fn require_var(name: &str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::Config(format!("{} environment variable not set", name)))
}

fn parse_float_var(name: &str) -> Result<f64, Error> {
    let raw = require_var(name)?;
    raw.trim()
        .parse()
        .map_err(|_| Error::Config(format!("{} is not a number: '{}'", name, raw)))
}
