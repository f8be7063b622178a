use log::{info, warn};
use tokio::time::{sleep, Duration};

use crate::compensation::{compensate, CompensationFilter};
use crate::config::{SamplerConfig, SensorSet};
use crate::error::Result;
use crate::models::SensorReading;
use crate::payload::format_payload;
use crate::publish::MetricSink;
use crate::sensors::{CpuTemperatureReader, SensorRig, NOISE_BAND_HIGH_HZ, NOISE_BAND_LOW_HZ};

/// The process-lifetime sample loop: read, compensate, format, publish,
/// sleep, forever. All mutable loop state (the CPU temperature window, the
/// live sensor handles) lives on this struct; nothing is global.
pub struct Sampler<S: MetricSink> {
    config: SamplerConfig,
    cpu: Box<dyn CpuTemperatureReader + Send>,
    rig: SensorRig,
    filter: CompensationFilter,
    sink: S,
}

impl<S: MetricSink> Sampler<S> {
    /// Seeds the compensation window with the first CPU reading. A CPU
    /// temperature source that cannot be read is fatal here, before the
    /// first cycle starts.
    pub fn new(
        config: SamplerConfig,
        mut cpu: Box<dyn CpuTemperatureReader + Send>,
        rig: SensorRig,
        sink: S,
    ) -> Result<Self> {
        let first_sample = cpu.read()?;
        Ok(Sampler {
            config,
            cpu,
            rig,
            filter: CompensationFilter::seeded(first_sample),
            sink,
        })
    }

    /// One full cycle. Non-particulate sensor failures propagate and end the
    /// process; a publish failure is logged and swallowed.
    pub async fn run_cycle(&mut self) -> Result<()> {
        let cpu_temp = self.cpu.read()?;
        let window_average = self.filter.update(cpu_temp);

        let raw_temp = self.rig.climate.read_temperature()?;
        let mut reading = SensorReading::temperature_only(compensate(
            raw_temp,
            window_average,
            self.config.temp_factor,
        ));

        if self.config.sensor_set != SensorSet::Minimal {
            reading.pressure = Some(self.rig.climate.read_pressure()?);
            reading.humidity = Some(self.rig.climate.read_humidity()?);
        }
        if let Some(light) = self.rig.light.as_mut() {
            reading.lux = Some(light.read_lux()?);
        }
        if let Some(noise) = self.rig.noise.as_mut() {
            reading.amplitude = Some(noise.read_amplitude(NOISE_BAND_LOW_HZ, NOISE_BAND_HIGH_HZ)?);
        }
        if let Some(gas) = self.rig.gas.as_mut() {
            reading.gas = Some(gas.read_all()?);
        }
        if let Some(particulates) = self.rig.particulates.as_mut() {
            reading.particulates = Some(particulates.read_with_retry().await?);
        }

        let payload = format_payload(&self.config.measurement, &reading);
        info!("{}", payload);

        match self.sink.publish(&payload).await {
            Ok(outcome) if outcome.is_success() => {
                info!("Publish accepted with status {}", outcome.status)
            }
            Ok(outcome) => warn!("Publish rejected with status {}", outcome.status),
            Err(e) => warn!("{}", e),
        }

        Ok(())
    }

    /// Run cycles until a fatal error. There is no terminal state in normal
    /// operation; the process exits only on error or external signal.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.run_cycle().await?;
            info!("Waiting {} seconds", self.config.read_interval);
            sleep(Duration::from_secs_f64(self.config.read_interval)).await;
        }
    }
}
