/// One gas sensor pass over all three channels, resistances in ohms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasReading {
    pub oxidising: f64,
    pub nh3: f64,
    pub reducing: f64,
}

/// Particulate mass concentrations in micrograms per cubic meter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticulateReading {
    pub pm1: f64,
    pub pm25: f64,
    pub pm10: f64,
}

/// Immutable snapshot of one sample cycle. Fields other than temperature are
/// present only when the corresponding sensor is configured.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    /// Compensated ambient temperature in degrees Celsius.
    pub temperature: f64,
    /// Illuminance in lux.
    pub lux: Option<f64>,
    /// Barometric pressure in hPa.
    pub pressure: Option<f64>,
    /// Relative humidity in percent.
    pub humidity: Option<f64>,
    /// Aggregate noise amplitude over the configured frequency band.
    pub amplitude: Option<f64>,
    pub gas: Option<GasReading>,
    pub particulates: Option<ParticulateReading>,
}

impl SensorReading {
    /// A reading carrying only the compensated temperature.
    pub fn temperature_only(temperature: f64) -> Self {
        SensorReading {
            temperature,
            lux: None,
            pressure: None,
            humidity: None,
            amplitude: None,
            gas: None,
            particulates: None,
        }
    }
}
