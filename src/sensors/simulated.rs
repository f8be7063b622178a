/// Deterministic sensor backend for running without hardware attached.
///
/// Each sensor produces a fixed baseline plus a small triangle-wave drift so
/// consecutive cycles are distinguishable but fully reproducible.
use crate::error::Result;
use crate::models::{GasReading, ParticulateReading};
use crate::sensors::{ClimateSensor, GasSensor, LightSensor, NoiseSensor, ParticulateSensor};

/// Triangle wave over `ticks`, amplitude ±1.0, period 8.
fn drift(tick: u64) -> f64 {
    match tick % 8 {
        0 => 0.0,
        1 => 0.5,
        2 => 1.0,
        3 => 0.5,
        4 => 0.0,
        5 => -0.5,
        6 => -1.0,
        _ => -0.5,
    }
}

pub struct SimulatedClimate {
    tick: u64,
}

impl SimulatedClimate {
    pub fn new() -> Self {
        SimulatedClimate { tick: 0 }
    }
}

impl ClimateSensor for SimulatedClimate {
    fn read_temperature(&mut self) -> Result<f64> {
        self.tick += 1;
        Ok(24.0 + drift(self.tick) * 0.4)
    }

    fn read_pressure(&mut self) -> Result<f64> {
        Ok(1013.25 + drift(self.tick) * 1.5)
    }

    fn read_humidity(&mut self) -> Result<f64> {
        Ok(45.0 + drift(self.tick) * 2.0)
    }
}

pub struct SimulatedLight {
    tick: u64,
}

impl SimulatedLight {
    pub fn new() -> Self {
        SimulatedLight { tick: 0 }
    }
}

impl LightSensor for SimulatedLight {
    fn read_lux(&mut self) -> Result<f64> {
        self.tick += 1;
        Ok(320.0 + drift(self.tick) * 25.0)
    }
}

pub struct SimulatedNoise {
    tick: u64,
}

impl SimulatedNoise {
    pub fn new() -> Self {
        SimulatedNoise { tick: 0 }
    }
}

impl NoiseSensor for SimulatedNoise {
    fn read_amplitude(&mut self, _band_low_hz: f64, _band_high_hz: f64) -> Result<f64> {
        self.tick += 1;
        Ok(0.12 + drift(self.tick) * 0.01)
    }
}

pub struct SimulatedGas {
    tick: u64,
}

impl SimulatedGas {
    pub fn new() -> Self {
        SimulatedGas { tick: 0 }
    }
}

impl GasSensor for SimulatedGas {
    fn read_all(&mut self) -> Result<GasReading> {
        self.tick += 1;
        let wobble = drift(self.tick);
        Ok(GasReading {
            oxidising: 12.5 + wobble * 0.3,
            nh3: 81.0 + wobble * 0.8,
            reducing: 240.0 + wobble * 2.0,
        })
    }
}

pub struct SimulatedParticulates {
    tick: u64,
}

impl SimulatedParticulates {
    pub fn new() -> Self {
        SimulatedParticulates { tick: 0 }
    }
}

impl ParticulateSensor for SimulatedParticulates {
    fn read(&mut self) -> Result<ParticulateReading> {
        self.tick += 1;
        let wobble = drift(self.tick);
        Ok(ParticulateReading {
            pm1: 2.0 + wobble,
            pm25: 5.0 + wobble,
            pm10: 11.0 + wobble,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn climate_readings_are_deterministic() {
        let mut a = SimulatedClimate::new();
        let mut b = SimulatedClimate::new();
        for _ in 0..16 {
            assert_eq!(
                a.read_temperature().unwrap(),
                b.read_temperature().unwrap()
            );
            assert_eq!(a.read_pressure().unwrap(), b.read_pressure().unwrap());
        }
    }

    #[test]
    fn pressure_and_humidity_track_the_temperature_tick() {
        let mut climate = SimulatedClimate::new();
        let _ = climate.read_temperature().unwrap();
        // Same cycle, same drift phase.
        assert_eq!(climate.read_pressure().unwrap(), 1013.25 + 0.5 * 1.5);
        assert_eq!(climate.read_humidity().unwrap(), 45.0 + 0.5 * 2.0);
    }
}
