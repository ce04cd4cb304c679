pub mod http;

use async_trait::async_trait;

use crate::engine::Transition;
use crate::entities::metrics::{
    DailyReceipt, DateRange, DayOrdersAmount, MonthCanceledOrdersAmount, MonthOrdersAmount,
    MonthReceipts,
};
use crate::entities::order::{OrderListKey, OrdersPage};
use crate::entities::restaurant::ManagedRestaurant;
use crate::errors::ApiError;

#[async_trait]
pub trait OrderApi: Send + Sync {
    /// `PATCH /orders/{order_id}/{transition}`.
    async fn send_transition(&self, order_id: &str, transition: Transition)
        -> Result<(), ApiError>;
    async fn get_orders(&self, key: &OrderListKey) -> Result<OrdersPage, ApiError>;
}

#[async_trait]
pub trait MetricsApi: Send + Sync {
    async fn daily_receipt_in_period(&self, range: DateRange)
        -> Result<Vec<DailyReceipt>, ApiError>;
    async fn month_receipts(&self) -> Result<MonthReceipts, ApiError>;
    async fn month_orders_amount(&self) -> Result<MonthOrdersAmount, ApiError>;
    async fn day_orders_amount(&self) -> Result<DayOrdersAmount, ApiError>;
    async fn month_canceled_orders_amount(&self) -> Result<MonthCanceledOrdersAmount, ApiError>;
}

#[async_trait]
pub trait RestaurantApi: Send + Sync {
    async fn managed_restaurant(&self) -> Result<ManagedRestaurant, ApiError>;
}
