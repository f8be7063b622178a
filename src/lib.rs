//! Periodic environmental telemetry sampler.
//!
//! Reads a configurable set of environmental sensors once per interval,
//! compensates the ambient temperature for host self-heating using a rolling
//! CPU-temperature window, formats one InfluxDB line-protocol payload and
//! POSTs it to the configured write endpoint. Sensor failures are fatal
//! (except a single bounded retry for the particulate counter); publish
//! failures are logged and ignored.

pub mod compensation;
pub mod config;
pub mod error;
pub mod models;
pub mod payload;
pub mod publish;
pub mod sampler;
pub mod sensors;
pub mod utils;

pub use config::{SamplerConfig, SensorSet};
pub use error::{Error, Result};
pub use models::{GasReading, ParticulateReading, SensorReading};
pub use payload::format_payload;
pub use publish::{MetricPublisher, MetricSink, PublishError, PublishOutcome, PublishResult};
pub use sampler::Sampler;
pub use sensors::SensorRig;
