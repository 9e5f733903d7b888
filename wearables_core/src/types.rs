//! Core domain types for the wearables dataset generator.
//!
//! - Reading rows and the value ranges they are drawn from
//! - Validated generation parameters

use crate::{Error, Result};
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::ops::RangeInclusive;

// ============================================================================
// Reading Rows
// ============================================================================

/// Daily step count range (inclusive)
pub const STEPS_RANGE: RangeInclusive<u32> = 3000..=15000;

/// Heart-rate variability range in ms (inclusive)
pub const HRV_RANGE: RangeInclusive<u8> = 60..=95;

/// Resting heart rate range in bpm (inclusive)
pub const RESTING_HR_RANGE: RangeInclusive<u8> = 50..=65;

/// Column order expected by the ingestion endpoint
pub const CSV_HEADER: [&str; 4] = ["date", "steps", "hrv", "resting_hr"];

/// Date format used for both input parsing and CSV output
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One synthesized wearable reading.
///
/// Field order matches [`CSV_HEADER`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReadingRow {
    pub date: NaiveDate,
    pub steps: u32,
    pub hrv: u8,
    pub resting_hr: u8,
}

// ============================================================================
// Generation Parameters
// ============================================================================

/// Validated parameters for a generation run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationParams {
    pub start_date: NaiveDate,
    pub rows: u64,
    /// `None` draws from OS entropy and is not reproducible
    pub seed: Option<u64>,
    /// 0 disables wrapping
    pub cycle_days: u64,
}

impl GenerationParams {
    /// Build parameters from raw user input.
    ///
    /// Rejects malformed dates, negative counts, and runs whose dates would
    /// leave the four-digit year range (the output format is `YYYY-MM-DD`).
    pub fn new(start_date: &str, rows: i64, seed: Option<u64>, cycle_days: i64) -> Result<Self> {
        let start_date = parse_date(start_date)?;

        let rows = u64::try_from(rows)
            .map_err(|_| Error::Validation(format!("rows must be >= 0, got {}", rows)))?;
        let cycle_days = u64::try_from(cycle_days).map_err(|_| {
            Error::Validation(format!("cycle-days must be >= 0, got {}", cycle_days))
        })?;

        let params = Self {
            start_date,
            rows,
            seed,
            cycle_days,
        };
        params.check_date_span()?;
        Ok(params)
    }

    /// Number of distinct days visited before the date column wraps (or ends)
    pub fn span_days(&self) -> u64 {
        if self.cycle_days == 0 {
            self.rows
        } else {
            self.rows.min(self.cycle_days)
        }
    }

    /// Latest date that will appear in the output, if any rows are generated
    pub fn last_date(&self) -> Option<NaiveDate> {
        match self.span_days() {
            0 => None,
            span => self.start_date.checked_add_days(Days::new(span - 1)),
        }
    }

    fn check_date_span(&self) -> Result<()> {
        if self.span_days() == 0 {
            return Ok(());
        }

        match self.last_date() {
            Some(last) if last <= max_output_date() => Ok(()),
            _ => Err(Error::Validation(format!(
                "{} days from {} runs past {}; lower rows or set cycle-days",
                self.span_days(),
                self.start_date,
                max_output_date()
            ))),
        }
    }
}

/// Parse a strict ISO-8601 `YYYY-MM-DD` calendar date.
///
/// Unpadded fields and surrounding whitespace are rejected.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    if !is_iso_date_shape(s) {
        return Err(Error::Validation(format!(
            "Invalid start date '{}': expected YYYY-MM-DD",
            s
        )));
    }

    let date = NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| Error::Validation(format!("Invalid start date '{}': {}", s, e)))?;

    if date < min_output_date() || date > max_output_date() {
        return Err(Error::Validation(format!(
            "Start date '{}' must fall between {} and {}",
            s,
            min_output_date(),
            max_output_date()
        )));
    }

    Ok(date)
}

/// Exactly four year digits, two month digits and two day digits
fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn min_output_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn max_output_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX)
}
