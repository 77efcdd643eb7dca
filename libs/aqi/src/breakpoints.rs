//! Breakpoint tables
//!
//! Concentration and index breakpoints for PM2.5 and PM10. The
//! concentration rows follow the EPA Technical Assistance Document for the
//! Reporting of Daily Air Quality (2012 revision):
//! https://document.airnow.gov/technical-assistance-document-for-the-reporting-of-daily-air-quailty.pdf
//!
//! NOTE: an earlier revision of this monitor paired the seven concentration
//! rows with a five row index table ([0,50] [51,100] [101,150] [201,300]
//! [301,500]), which skipped the Unhealthy category and misaligned every row
//! from the fourth one on. The index table below is the published seven row
//! table. [`AqiTable::validate`] rejects a pairing whose row counts differ.

use crate::{AqiError, PollutantType, TableError};

/// Upper end of the AQI scale.
pub const AQI_SCALE_MAX: u16 = 500;

/// AQI values corresponding to concentration breakpoints
pub const INDEX_BREAKPOINTS: [(u16, u16); 7] = [
    (0, 50),    // Good
    (51, 100),  // Moderate
    (101, 150), // Unhealthy for Sensitive Groups
    (151, 200), // Unhealthy
    (201, 300), // Very Unhealthy
    (301, 400), // Hazardous
    (401, 500), // Hazardous
];

/// PM2.5 breakpoints in µg/m³ (24-hour average)
pub const PM25_BREAKPOINTS: [(f64, f64); 7] = [
    (0.0, 12.0),
    (12.1, 35.4),
    (35.5, 55.4),
    (55.5, 150.4),
    (150.5, 250.4),
    (250.5, 350.4),
    (350.5, 500.4),
];

/// PM10 breakpoints in µg/m³ (24-hour average)
pub const PM10_BREAKPOINTS: [(f64, f64); 7] = [
    (0.0, 54.0),
    (55.0, 154.0),
    (155.0, 254.0),
    (255.0, 354.0),
    (355.0, 424.0),
    (425.0, 504.0),
    (505.0, 604.0),
];

pub static PM25_TABLE: AqiTable<'static> = AqiTable {
    pollutant: PollutantType::Pm25,
    concentration: &PM25_BREAKPOINTS,
    index: &INDEX_BREAKPOINTS,
};

pub static PM10_TABLE: AqiTable<'static> = AqiTable {
    pollutant: PollutantType::Pm10,
    concentration: &PM10_BREAKPOINTS,
    index: &INDEX_BREAKPOINTS,
};

/// A concentration table bound to its positionally aligned index table.
///
/// Row `n` of `concentration` maps onto row `n` of `index`. Both sides are
/// closed intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiTable<'a> {
    pub pollutant: PollutantType,
    pub concentration: &'a [(f64, f64)],
    pub index: &'a [(u16, u16)],
}

impl<'a> AqiTable<'a> {
    /// Returns the row whose closed interval contains `concentration`, if any.
    ///
    /// Rows are scanned in order and the first match wins. NaN never matches.
    pub fn category_of(&self, concentration: f64) -> Option<usize> {
        self.concentration
            .iter()
            .position(|&(low, high)| concentration >= low && concentration <= high)
    }

    /// Calculate the AQI for `concentration` against this table.
    ///
    /// Uses the EPA piecewise linear formula
    ///
    /// AQI = ((AQIhigh - AQIlow) / (Chigh - Clow)) * (C - Clow) + AQIlow
    ///
    /// in `f64` and rounds the result to the nearest integer with ties going
    /// to even.
    pub fn compute(&self, concentration: f64) -> Result<u16, AqiError> {
        let row = self
            .category_of(concentration)
            .ok_or(AqiError::OutOfRange {
                concentration,
                pollutant: self.pollutant,
            })?;
        let (c_low, c_high) = self.concentration[row];
        let (i_low, i_high) = *self.index.get(row).ok_or(AqiError::Table(
            TableError::LengthMismatch {
                concentration_rows: self.concentration.len(),
                index_rows: self.index.len(),
            },
        ))?;

        // Multiply before dividing so exact halves such as 50 * 1.8 / 12
        // stay exact and round as ties
        let aqi = f64::from(i_high - i_low) * (concentration - c_low) / (c_high - c_low)
            + f64::from(i_low);
        Ok(libm::roundeven(aqi) as u16)
    }

    /// Check the table pair for the structural properties the calculator
    /// relies on.
    ///
    /// * both sides non-empty and of equal length
    /// * every concentration row has `low < high`
    /// * concentration rows ascend without overlapping
    /// * index rows ascend contiguously (`next.low == prev.high + 1`),
    ///   starting at 0 and ending at or below [`AQI_SCALE_MAX`]
    pub fn validate(&self) -> Result<(), TableError> {
        if self.concentration.is_empty() || self.index.is_empty() {
            return Err(TableError::Empty);
        }
        if self.concentration.len() != self.index.len() {
            return Err(TableError::LengthMismatch {
                concentration_rows: self.concentration.len(),
                index_rows: self.index.len(),
            });
        }

        for (row, &(low, high)) in self.concentration.iter().enumerate() {
            if !(low < high) {
                return Err(TableError::InvertedRow { row });
            }
            if row > 0 && !(low > self.concentration[row - 1].1) {
                return Err(TableError::Overlap { row });
            }
        }

        for (row, &(low, high)) in self.index.iter().enumerate() {
            if low > high {
                return Err(TableError::InvertedRow { row });
            }
            if high > AQI_SCALE_MAX {
                return Err(TableError::IndexAboveScale { row });
            }
            let expected_low = match row {
                0 => 0,
                _ => self.index[row - 1].1 + 1,
            };
            if low != expected_low {
                return Err(TableError::IndexGap { row });
            }
        }

        Ok(())
    }
}
