use crate::repositories::OrderRepository;
use actix_web::web::Data;
use chrono::{Datelike, NaiveDate, Utc};
use restaurant_dashboard::entities::metrics::{
    DailyReceipt, DayOrdersAmount, MonthCanceledOrdersAmount, MonthOrdersAmount, MonthReceipts,
};
use restaurant_dashboard::entities::restaurant::ManagedRestaurant;
use std::num::ParseIntError;
use std::sync::Arc;

pub const DEFAULT_SEED_ORDERS: usize = 40;

/// Number of sample orders to start with, from the raw `SEED_ORDERS` value.
/// Unset means [`DEFAULT_SEED_ORDERS`]; anything set must be a count.
pub fn seed_orders(raw: Option<&str>) -> Result<usize, ParseIntError> {
    match raw {
        None => Ok(DEFAULT_SEED_ORDERS),
        Some(v) => v.trim().parse(),
    }
}

/// Canned metric values served by `/metrics/*`.
#[derive(Debug, Clone)]
pub struct MetricsFixture {
    pub month_receipts: MonthReceipts,
    pub month_orders: MonthOrdersAmount,
    pub day_orders: DayOrdersAmount,
    pub month_canceled: MonthCanceledOrdersAmount,
}

impl Default for MetricsFixture {
    fn default() -> Self {
        Self {
            month_receipts: MonthReceipts {
                receipt: 20_000,
                diff_from_last_month: 10,
            },
            month_orders: MonthOrdersAmount {
                amount: 200,
                diff_from_last_month: 7,
            },
            day_orders: DayOrdersAmount {
                amount: 20,
                diff_from_yesterday: -5,
            },
            month_canceled: MonthCanceledOrdersAmount {
                amount: 5,
                diff_from_last_month: -5,
            },
        }
    }
}

impl MetricsFixture {
    /// One point per day in `from..=to`, labelled `dd/mm`.
    pub fn daily_receipts(&self, from: NaiveDate, to: NaiveDate) -> Vec<DailyReceipt> {
        from.iter_days()
            .take_while(|d| *d <= to)
            .map(|d| DailyReceipt {
                date: d.format("%d/%m").to_string(),
                receipt: 5_000 + (i64::from(d.num_days_from_ce()) * 3_719).rem_euclid(15_000),
            })
            .collect()
    }
}

fn sample_restaurant() -> ManagedRestaurant {
    ManagedRestaurant {
        id: "custom-restaurant-id".into(),
        name: "Pizza Shop".into(),
        description: Some("Custom restaurant description".into()),
        manager_id: Some("custom-user-id".into()),
        created_at: Some(Utc::now()),
        updated_at: None,
    }
}

#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderRepository>,
    pub restaurant: ManagedRestaurant,
    pub metrics: MetricsFixture,
}

impl AppState {
    pub fn new<R: OrderRepository + 'static>(orders: R) -> Data<Self> {
        Data::new(Self {
            orders: Arc::new(orders),
            restaurant: sample_restaurant(),
            metrics: MetricsFixture::default(),
        })
    }
}
