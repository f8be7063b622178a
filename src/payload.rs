/// InfluxDB line-protocol payload assembly.
///
/// Field order and formatting widths are part of the wire contract with the
/// downstream dashboards; changing either is a compatibility break. Widths
/// mirror the original deployment exactly: temperature is zero-padded to
/// width 4 with one decimal, most fields to width 5 with two decimals, the
/// noise amplitude carries four decimals, and particulate values print with
/// default precision.
use crate::models::SensorReading;

pub fn format_payload(measurement: &str, reading: &SensorReading) -> String {
    let mut line = format!("{} temp={:04.1}", measurement, reading.temperature);
    if let Some(lux) = reading.lux {
        line.push_str(&format!(",lux={:05.2}", lux));
    }
    if let Some(pressure) = reading.pressure {
        line.push_str(&format!(",pressure={:05.2}", pressure));
    }
    if let Some(humidity) = reading.humidity {
        line.push_str(&format!(",humidity={:05.2}", humidity));
    }
    if let Some(amplitude) = reading.amplitude {
        line.push_str(&format!(",amp={:05.4}", amplitude));
    }
    if let Some(gas) = reading.gas {
        line.push_str(&format!(
            ",gas_oxidising={:05.2},gas_nh3={:05.2},gas_reducing={:05.2}",
            gas.oxidising, gas.nh3, gas.reducing
        ));
    }
    if let Some(pm) = reading.particulates {
        line.push_str(&format!(",pm_1={},pm25={},pm10={}", pm.pm1, pm.pm25, pm.pm10));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GasReading, ParticulateReading, SensorReading};

    fn full_reading() -> SensorReading {
        SensorReading {
            temperature: 21.266666666666666,
            lux: Some(312.5),
            pressure: Some(1013.25),
            humidity: Some(45.0),
            amplitude: Some(0.1234),
            gas: Some(GasReading {
                oxidising: 12.5,
                nh3: 81.0,
                reducing: 240.0,
            }),
            particulates: Some(ParticulateReading {
                pm1: 2.0,
                pm25: 5.0,
                pm10: 11.5,
            }),
        }
    }

    #[test]
    fn full_variant_line_is_exact() {
        let line = format_payload("enviro", &full_reading());
        assert_eq!(
            line,
            "enviro temp=21.3,lux=312.50,pressure=1013.25,humidity=45.00,amp=0.1234,\
             gas_oxidising=12.50,gas_nh3=81.00,gas_reducing=240.00,pm_1=2,pm25=5,pm10=11.5"
        );
    }

    #[test]
    fn reduced_variant_omits_trailing_fields() {
        let reading = SensorReading {
            amplitude: None,
            gas: None,
            particulates: None,
            ..full_reading()
        };
        assert_eq!(
            format_payload("enviro", &reading),
            "enviro temp=21.3,lux=312.50,pressure=1013.25,humidity=45.00"
        );
    }

    #[test]
    fn minimal_variant_rounds_temperature_to_one_decimal() {
        let reading = SensorReading::temperature_only(21.266666666666666);
        assert_eq!(format_payload("enviro", &reading), "enviro temp=21.3");
    }

    #[test]
    fn small_values_are_zero_padded() {
        let mut reading = SensorReading::temperature_only(3.14);
        reading.lux = Some(7.5);
        assert_eq!(format_payload("m", &reading), "m temp=03.1,lux=07.50");
    }

    #[test]
    fn formatting_is_idempotent() {
        let reading = full_reading();
        assert_eq!(
            format_payload("enviro", &reading),
            format_payload("enviro", &reading)
        );
    }
}
