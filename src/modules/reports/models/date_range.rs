use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Reporting period as requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

/// Inclusive invoice-date bounds handed to the invoice store.
/// `to == None` means no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateBounds {
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
}

/// How a range with only `from` is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRangeMode {
    /// `from` alone selects that single day. Long-standing report behaviour.
    #[default]
    SingleDay,
    /// `from` alone selects everything from that day onward
    OpenEnded,
}

impl std::str::FromStr for DateRangeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single_day" => Ok(DateRangeMode::SingleDay),
            "open_ended" => Ok(DateRangeMode::OpenEnded),
            _ => Err(format!("Invalid date range mode: {}", s)),
        }
    }
}

impl DateRange {
    pub fn new(from: NaiveDate, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self { from: day, to: None }
    }

    /// Resolve to store bounds, rejecting inverted ranges
    pub fn resolve(&self, mode: DateRangeMode) -> Result<DateBounds> {
        let to = match (self.to, mode) {
            (Some(to), _) => {
                if to < self.from {
                    return Err(AppError::validation(format!(
                        "from ({}) must be before or equal to to ({})",
                        self.from, to
                    )));
                }
                Some(to)
            }
            (None, DateRangeMode::SingleDay) => Some(self.from),
            (None, DateRangeMode::OpenEnded) => None,
        };

        Ok(DateBounds { from: self.from, to })
    }
}

impl DateBounds {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && self.to.map_or(true, |to| date <= to)
    }
}
