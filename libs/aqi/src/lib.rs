//! AQI library
//!
//! This library provides supporting functionality for AQI calculations and
//! translations to EPA specified AQI categories and colors. It supports both
//! std and no_std environments, but is best used on systems with hardware
//! floating point support.
//!
//! ```
//! use aqi::{compute_aqi, PollutantType};
//!
//! assert_eq!(compute_aqi(12.1, PollutantType::Pm25), Ok(51));
//! assert_eq!(compute_aqi(54.0, PollutantType::Pm10), Ok(50));
//! assert!(compute_aqi(1000.0, PollutantType::Pm25).is_err());
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod breakpoints;
pub mod category;
pub mod report;

use core::str::FromStr;

use thiserror_no_std::Error;

pub use breakpoints::{AqiTable, PM10_TABLE, PM25_TABLE};
pub use category::{Category, Color};
pub use report::{MassConcentrations, ParticleCounts, Report};

/// The pollutants an AQI can be calculated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollutantType {
    /// Fine particulate matter, ≤ 2.5 µm
    Pm25,
    /// Coarse particulate matter, ≤ 10 µm
    Pm10,
}

impl PollutantType {
    /// The breakpoint table used for this pollutant.
    pub fn table(self) -> &'static AqiTable<'static> {
        match self {
            PollutantType::Pm25 => &PM25_TABLE,
            PollutantType::Pm10 => &PM10_TABLE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PollutantType::Pm25 => "PM2.5",
            PollutantType::Pm10 => "PM10",
        }
    }
}

impl FromStr for PollutantType {
    type Err = AqiError;

    /// Accepts `pm25`, `pm2.5` and `pm10`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pm25") || s.eq_ignore_ascii_case("pm2.5") {
            Ok(PollutantType::Pm25)
        } else if s.eq_ignore_ascii_case("pm10") {
            Ok(PollutantType::Pm10)
        } else {
            Err(AqiError::InvalidPollutant)
        }
    }
}

/// Errors produced while calculating an AQI.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AqiError {
    /// The concentration is not inside any breakpoint row of the table.
    #[error("{concentration} µg/m³ is outside every {} breakpoint", .pollutant.label())]
    OutOfRange {
        concentration: f64,
        pollutant: PollutantType,
    },

    /// The pollutant name does not match a supported pollutant.
    #[error("unrecognized pollutant")]
    InvalidPollutant,

    /// The breakpoint table pair is malformed.
    #[error("invalid breakpoint table: {0}")]
    Table(TableError),
}

/// Structural defects in a breakpoint table pair.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableError {
    #[error("table has no rows")]
    Empty,

    #[error("{concentration_rows} concentration rows paired with {index_rows} index rows")]
    LengthMismatch {
        concentration_rows: usize,
        index_rows: usize,
    },

    #[error("row {row} has low >= high")]
    InvertedRow { row: usize },

    #[error("row {row} overlaps the previous row")]
    Overlap { row: usize },

    #[error("index row {row} does not continue the previous row")]
    IndexGap { row: usize },

    #[error("index row {row} exceeds the AQI scale")]
    IndexAboveScale { row: usize },
}

/// Calculate the AQI for the provided pollutant concentration.
///
/// # Arguments
///
/// * `concentration` - The mass concentration from the sensor, in µg/m³
/// * `pollutant` - Which pollutant the concentration measures
///
/// # Returns
///
/// The AQI in `0..=500`, calculated using the breakpoints and formula
/// provided by the EPA. The interpolated value is rounded to the nearest
/// integer, with exact halves going to the even neighbour.
///
/// Concentrations that fall outside every breakpoint row, including values
/// above the top of the table, negative values, NaN, and values in the
/// rounding gap between two rows (e.g. 12.05 µg/m³ for PM2.5), return
/// [`AqiError::OutOfRange`]. No clamping is done here, callers decide.
///
/// # Examples
///
/// ```
/// use aqi::{compute_aqi, PollutantType};
///
/// assert_eq!(compute_aqi(35.4, PollutantType::Pm25), Ok(100));
/// assert_eq!(compute_aqi(0.0, PollutantType::Pm10), Ok(0));
/// ```
pub fn compute_aqi(concentration: f64, pollutant: PollutantType) -> Result<u16, AqiError> {
    pollutant.table().compute(concentration)
}
