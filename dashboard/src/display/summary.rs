use crate::api::MetricsApi;
use crate::display::currency::{format_brl, group_thousands};
use crate::entities::metrics::{
    DayOrdersAmount, MonthCanceledOrdersAmount, MonthOrdersAmount, MonthReceipts,
};
use crate::errors::ApiError;

const VS_LAST_MONTH: &str = "em relação ao mês passado";
const VS_YESTERDAY: &str = "em relação a ontem";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub diff: String,
}

fn diff_line(pct: i64, period: &str) -> String {
    if pct >= 0 {
        format!("+{pct}% {period}")
    } else {
        format!("{pct}% {period}")
    }
}

impl From<MonthReceipts> for MetricCard {
    fn from(m: MonthReceipts) -> Self {
        Self {
            title: "Receita total (mês)",
            value: format_brl(m.receipt),
            diff: diff_line(m.diff_from_last_month, VS_LAST_MONTH),
        }
    }
}

impl From<MonthOrdersAmount> for MetricCard {
    fn from(m: MonthOrdersAmount) -> Self {
        Self {
            title: "Pedidos (mês)",
            value: group_thousands(m.amount),
            diff: diff_line(m.diff_from_last_month, VS_LAST_MONTH),
        }
    }
}

impl From<DayOrdersAmount> for MetricCard {
    fn from(m: DayOrdersAmount) -> Self {
        Self {
            title: "Pedidos (dia)",
            value: group_thousands(m.amount),
            diff: diff_line(m.diff_from_yesterday, VS_YESTERDAY),
        }
    }
}

impl From<MonthCanceledOrdersAmount> for MetricCard {
    fn from(m: MonthCanceledOrdersAmount) -> Self {
        Self {
            title: "Cancelamentos (mês)",
            value: group_thousands(m.amount),
            diff: diff_line(m.diff_from_last_month, VS_LAST_MONTH),
        }
    }
}

/// Fetches the four summary cards concurrently, in display order.
pub async fn load_summary<A: MetricsApi + ?Sized>(api: &A) -> Result<Vec<MetricCard>, ApiError> {
    let (receipts, month_orders, day_orders, canceled) = tokio::try_join!(
        api.month_receipts(),
        api.month_orders_amount(),
        api.day_orders_amount(),
        api.month_canceled_orders_amount(),
    )?;
    Ok(vec![
        receipts.into(),
        month_orders.into(),
        day_orders.into(),
        canceled.into(),
    ])
}
