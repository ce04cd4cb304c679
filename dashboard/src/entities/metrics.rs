use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::DateRangeError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyReceipt {
    pub date: String,
    /// Minor currency units (cents).
    pub receipt: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthReceipts {
    pub receipt: i64,
    pub diff_from_last_month: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthOrdersAmount {
    pub amount: u64,
    pub diff_from_last_month: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayOrdersAmount {
    pub amount: u64,
    pub diff_from_yesterday: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthCanceledOrdersAmount {
    pub amount: u64,
    pub diff_from_last_month: i64,
}

/// Inclusive period of the revenue chart. Either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct RawDateRange {
    #[serde(default)]
    from: Option<NaiveDate>,
    #[serde(default)]
    to: Option<NaiveDate>,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = DateRangeError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(raw.from, raw.to)
    }
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self, DateRangeError> {
        if let (Some(f), Some(t)) = (from, to) {
            if f > t {
                return Err(DateRangeError::Inverted { from: f, to: t });
            }
        }
        Ok(Self { from, to })
    }

    /// Seven days back through `today`.
    pub fn last_week(today: NaiveDate) -> Self {
        Self {
            from: Some(today - Duration::days(7)),
            to: Some(today),
        }
    }

    pub fn from(&self) -> Option<NaiveDate> {
        self.from
    }

    pub fn to(&self) -> Option<NaiveDate> {
        self.to
    }
}
