//! Timestamped air quality report
//!
//! A [`Report`] bundles one sensor sample with the AQI outcome for each
//! pollutant, and renders itself for the console stream and the log file.
//! A failed AQI calculation is kept as an error and rendered as such, never
//! replaced by a made up number.

use core::fmt;

use crate::{compute_aqi, AqiError, Category, PollutantType};

/// Mass concentrations in µg/m³.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MassConcentrations {
    pub pm1_0: u16,
    pub pm2_5: u16,
    pub pm10: u16,
}

/// Number of particles beyond a given diameter in 0.1 L of air.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParticleCounts {
    pub um0_3: u16,
    pub um0_5: u16,
    pub um1_0: u16,
    pub um2_5: u16,
    pub um5_0: u16,
    pub um10: u16,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Seconds since boot
    pub uptime_secs: u64,
    pub mass: MassConcentrations,
    pub counts: ParticleCounts,
    pub aqi_pm25: Result<u16, AqiError>,
    pub aqi_pm10: Result<u16, AqiError>,
}

impl Report {
    pub fn new(uptime_secs: u64, mass: MassConcentrations, counts: ParticleCounts) -> Self {
        Self {
            uptime_secs,
            mass,
            counts,
            aqi_pm25: compute_aqi(f64::from(mass.pm2_5), PollutantType::Pm25),
            aqi_pm10: compute_aqi(f64::from(mass.pm10), PollutantType::Pm10),
        }
    }

    /// The worse of the two pollutant categories, or `None` when neither
    /// AQI could be calculated.
    pub fn worst_category(&self) -> Option<Category> {
        let pm25 = self.aqi_pm25.ok().map(Category::from_aqi);
        let pm10 = self.aqi_pm10.ok().map(Category::from_aqi);
        pm25.max(pm10)
    }

    /// Multi-line rendering for the interactive console.
    pub fn console(&self) -> ConsoleBlock<'_> {
        ConsoleBlock(self)
    }

    /// Single-line rendering for the log file, without a line terminator.
    pub fn log_line(&self) -> LogLine<'_> {
        LogLine(self)
    }
}

/// Time since boot, shown as `<days>d HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uptime(pub u64);

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.0 / 86_400;
        let hours = self.0 % 86_400 / 3_600;
        let minutes = self.0 % 3_600 / 60;
        let seconds = self.0 % 60;
        write!(f, "{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
    }
}

struct AqiValue<'a> {
    value: &'a Result<u16, AqiError>,
    missing: &'static str,
}

impl<'a> AqiValue<'a> {
    fn new(value: &'a Result<u16, AqiError>, missing: &'static str) -> Self {
        Self { value, missing }
    }
}

impl fmt::Display for AqiValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Ok(aqi) => write!(f, "{}", aqi),
            Err(_) => f.write_str(self.missing),
        }
    }
}

pub struct ConsoleBlock<'a>(&'a Report);

impl fmt::Display for ConsoleBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        writeln!(f, "standard concentration units")?;
        writeln!(f, "--------------------")?;
        writeln!(f, "PM 1.0: {}", r.mass.pm1_0)?;
        writeln!(f, "PM 2.5: {}", r.mass.pm2_5)?;
        writeln!(f, "PM 10: {}", r.mass.pm10)?;
        writeln!(f, "--------------------")?;
        writeln!(f, "environmental units")?;
        writeln!(f, "Particles > 0.3um / 0.1L air: {}", r.counts.um0_3)?;
        writeln!(f, "Particles > 0.5um / 0.1L air: {}", r.counts.um0_5)?;
        writeln!(f, "Particles > 1.0um / 0.1L air: {}", r.counts.um1_0)?;
        writeln!(f, "Particles > 2.5um / 0.1L air: {}", r.counts.um2_5)?;
        writeln!(f, "Particles > 5.0um / 0.1L air: {}", r.counts.um5_0)?;
        writeln!(f, "Particles > 10um / 0.1L air: {}", r.counts.um10)?;
        writeln!(f, "--------------------")?;
        writeln!(f, "US EPA AQI")?;
        writeln!(f, "AQI 10: {}", AqiValue::new(&r.aqi_pm10, "out of range"))?;
        write!(f, "AQI 2.5: {}", AqiValue::new(&r.aqi_pm25, "out of range"))
    }
}

pub struct LogLine<'a>(&'a Report);

impl fmt::Display for LogLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        write!(
            f,
            "[{}] pm1.0={} pm2.5={} pm10={} 0.3um={} 0.5um={} 1.0um={} 2.5um={} 5.0um={} 10um={} aqi10={} aqi2.5={}",
            Uptime(r.uptime_secs),
            r.mass.pm1_0,
            r.mass.pm2_5,
            r.mass.pm10,
            r.counts.um0_3,
            r.counts.um0_5,
            r.counts.um1_0,
            r.counts.um2_5,
            r.counts.um5_0,
            r.counts.um10,
            AqiValue::new(&r.aqi_pm10, "oor"),
            AqiValue::new(&r.aqi_pm25, "oor"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> ParticleCounts {
        ParticleCounts {
            um0_3: 1200,
            um0_5: 340,
            um1_0: 56,
            um2_5: 7,
            um5_0: 2,
            um10: 0,
        }
    }

    #[test]
    fn test_new_computes_both_pollutants() {
        let mass = MassConcentrations {
            pm1_0: 3,
            pm2_5: 12,
            pm10: 54,
        };
        let report = Report::new(10, mass, counts());
        assert_eq!(report.aqi_pm25, Ok(50));
        assert_eq!(report.aqi_pm10, Ok(50));
    }

    #[test]
    fn test_pm10_aqi_uses_pm10_not_pm1() {
        let mass = MassConcentrations {
            pm1_0: 0,
            pm2_5: 0,
            pm10: 154,
        };
        let report = Report::new(0, mass, counts());
        assert_eq!(report.aqi_pm10, Ok(100));
    }

    #[test]
    fn test_worst_category() {
        let mass = MassConcentrations {
            pm1_0: 0,
            pm2_5: 40,
            pm10: 20,
        };
        let report = Report::new(0, mass, counts());
        assert_eq!(report.worst_category(), Some(Category::UnhealthyForSensitiveGroups));

        let mass = MassConcentrations {
            pm1_0: 0,
            pm2_5: 600,
            pm10: 700,
        };
        let report = Report::new(0, mass, counts());
        assert_eq!(report.worst_category(), None);

        let mass = MassConcentrations {
            pm1_0: 0,
            pm2_5: 600,
            pm10: 10,
        };
        let report = Report::new(0, mass, counts());
        assert_eq!(report.worst_category(), Some(Category::Good));
    }

    #[test]
    fn test_uptime_display() {
        assert_eq!(Uptime(0).to_string(), "0d 00:00:00");
        assert_eq!(Uptime(3_723).to_string(), "0d 01:02:03");
        assert_eq!(Uptime(2 * 86_400 + 59).to_string(), "2d 00:00:59");
    }

    #[test]
    fn test_log_line() {
        let mass = MassConcentrations {
            pm1_0: 3,
            pm2_5: 600,
            pm10: 54,
        };
        let report = Report::new(3_723, mass, counts());
        assert_eq!(
            report.log_line().to_string(),
            "[0d 01:02:03] pm1.0=3 pm2.5=600 pm10=54 0.3um=1200 0.5um=340 1.0um=56 \
             2.5um=7 5.0um=2 10um=0 aqi10=50 aqi2.5=oor"
        );
    }

    #[test]
    fn test_console_block() {
        let mass = MassConcentrations {
            pm1_0: 3,
            pm2_5: 12,
            pm10: 700,
        };
        let text = Report::new(0, mass, counts()).console().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "standard concentration units");
        assert_eq!(lines[3], "PM 2.5: 12");
        assert_eq!(lines[7], "Particles > 0.3um / 0.1L air: 1200");
        assert_eq!(lines[lines.len() - 2], "AQI 10: out of range");
        assert_eq!(lines[lines.len() - 1], "AQI 2.5: 50");
    }
}
