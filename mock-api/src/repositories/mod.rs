pub mod in_memory;

use async_trait::async_trait;
use restaurant_dashboard::engine::Transition;
use restaurant_dashboard::entities::order::{Order, OrderListKey, OrdersPage};

use crate::errors::RepoErr;

pub const PER_PAGE: u32 = 10;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Newest first, [`PER_PAGE`] per page. `order_id` and `customer_name`
    /// match case-insensitive substrings.
    async fn list(&self, q: &OrderListKey) -> Result<OrdersPage, RepoErr>;
    async fn get_by_id(&self, id: &str) -> Result<Order, RepoErr>;
    /// Applies `transition` if the order's status allows it.
    async fn transition(&self, id: &str, transition: Transition) -> Result<Order, RepoErr>;
}
