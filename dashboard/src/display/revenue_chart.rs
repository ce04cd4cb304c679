use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::api::MetricsApi;
use crate::display::currency::{format_brl_decimal, minor_to_decimal};
use crate::entities::metrics::{DailyReceipt, DateRange};
use crate::errors::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub date: String,
    /// Reais, i.e. the API's receipt divided by 100.
    pub receipt: Decimal,
}

impl ChartPoint {
    pub fn label(&self) -> String {
        format_brl_decimal(self.receipt)
    }
}

impl From<&DailyReceipt> for ChartPoint {
    fn from(d: &DailyReceipt) -> Self {
        Self {
            date: d.date.clone(),
            receipt: minor_to_decimal(d.receipt),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartState {
    Loading,
    Ready(Vec<ChartPoint>),
}

/// Daily revenue line chart for a date range.
#[derive(Debug, Clone)]
pub struct RevenueChart {
    range: DateRange,
    state: ChartState,
}

impl RevenueChart {
    /// Starts on the last seven days through `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self::with_range(DateRange::last_week(today))
    }

    pub fn with_range(range: DateRange) -> Self {
        Self {
            range,
            state: ChartState::Loading,
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ChartState::Loading)
    }

    /// Returns true when the range changed and the chart needs a refresh.
    pub fn set_date_range(&mut self, range: DateRange) -> bool {
        if range == self.range {
            return false;
        }
        self.range = range;
        self.state = ChartState::Loading;
        true
    }

    /// Fetches the series for the current range. On error the chart stays
    /// loading.
    pub async fn refresh<A: MetricsApi + ?Sized>(&mut self, api: &A) -> Result<(), ApiError> {
        let range = self.range;
        let series = api.daily_receipt_in_period(range).await?;
        debug!(points = series.len(), "daily revenue fetched");
        self.state = ChartState::Ready(series.iter().map(ChartPoint::from).collect());
        Ok(())
    }

    /// `ticks` currency labels evenly spaced from zero to the series peak.
    pub fn y_axis_labels(&self, ticks: usize) -> Vec<String> {
        let ChartState::Ready(points) = &self.state else {
            return Vec::new();
        };
        if ticks == 0 {
            return Vec::new();
        }
        let max = points
            .iter()
            .map(|p| p.receipt)
            .max()
            .unwrap_or(Decimal::ZERO)
            .max(Decimal::ZERO);
        if ticks == 1 {
            return vec![format_brl_decimal(max)];
        }
        let steps = Decimal::from(ticks as u64 - 1);
        (0..ticks)
            .map(|i| format_brl_decimal(max * Decimal::from(i as u64) / steps))
            .collect()
    }
}
