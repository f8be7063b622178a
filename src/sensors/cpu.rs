use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::sensors::CpuTemperatureReader;

const THERMAL_ZONE_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// CPU temperature source backed by the kernel thermal zone pseudo-file.
/// The file holds millidegrees Celsius as plain text.
pub struct SysfsCpuTemperature {
    path: PathBuf,
}

impl SysfsCpuTemperature {
    pub fn new() -> Self {
        Self::with_path(THERMAL_ZONE_PATH.into())
    }

    pub fn with_path(path: PathBuf) -> Self {
        SysfsCpuTemperature { path }
    }
}

impl CpuTemperatureReader for SysfsCpuTemperature {
    fn read(&mut self) -> Result<f64> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| Error::unavailable("cpu temperature", e))?;
        let millidegrees: i64 = raw
            .trim()
            .parse()
            .map_err(|_| Error::unavailable("cpu temperature", format!("bad reading '{}'", raw.trim())))?;
        Ok(millidegrees as f64 / 1000.0)
    }
}
