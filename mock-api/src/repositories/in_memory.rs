use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use restaurant_dashboard::engine::Transition;
use restaurant_dashboard::entities::order::{
    Order, OrderListKey, OrderStatus, OrdersPage, PageMeta,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::RepoErr;
use crate::repositories::{OrderRepository, PER_PAGE};

const CUSTOMERS: [&str; 8] = [
    "Ana Souza",
    "Bruno Lima",
    "Carla Mendes",
    "Diego Alves",
    "Elisa Rocha",
    "Felipe Costa",
    "Gabriela Dias",
    "Heitor Martins",
];

const STATUSES: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Processing,
    OrderStatus::Delivering,
    OrderStatus::Delivered,
    OrderStatus::Canceled,
];

#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    inner: Arc<RwLock<HashMap<String, Order>>>,
}

impl InMemoryOrderRepository {
    pub fn with_orders(orders: Vec<Order>) -> Self {
        let map = orders.into_iter().map(|o| (o.order_id.clone(), o)).collect();
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// `count` sample orders spread over the hours before `now`.
    pub fn seeded(count: usize, now: DateTime<Utc>) -> Self {
        let orders = (0..count)
            .map(|i| Order {
                order_id: Uuid::new_v4().to_string(),
                created_at: now - Duration::minutes(37 * i as i64),
                status: STATUSES[i % STATUSES.len()],
                customer_name: CUSTOMERS[i % CUSTOMERS.len()].to_string(),
                total: 1_500 + (i as i64 * 7_351) % 18_000,
            })
            .collect();
        Self::with_orders(orders)
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn list(&self, q: &OrderListKey) -> Result<OrdersPage, RepoErr> {
        let map = self.inner.read().await;
        let mut items: Vec<Order> = map.values().cloned().collect();

        if let Some(id) = &q.order_id {
            items.retain(|o| contains_ci(&o.order_id, id));
        }
        if let Some(name) = &q.customer_name {
            items.retain(|o| contains_ci(&o.customer_name, name));
        }
        if let Some(status) = q.status {
            items.retain(|o| o.status == status);
        }
        items.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.order_id.cmp(&b.order_id))
        });

        let total_count = items.len() as u64;
        let orders = items
            .into_iter()
            .skip(q.page_index as usize * PER_PAGE as usize)
            .take(PER_PAGE as usize)
            .collect();

        Ok(OrdersPage {
            orders,
            meta: PageMeta {
                page_index: q.page_index,
                per_page: PER_PAGE,
                total_count,
            },
        })
    }

    async fn get_by_id(&self, id: &str) -> Result<Order, RepoErr> {
        let map = self.inner.read().await;
        map.get(id).cloned().ok_or(RepoErr::NotFound)
    }

    async fn transition(&self, id: &str, transition: Transition) -> Result<Order, RepoErr> {
        let mut map = self.inner.write().await;
        let o = map.get_mut(id).ok_or(RepoErr::NotFound)?;
        if !transition.allowed_from(o.status) {
            return Err(RepoErr::PreconditionFailed {
                from: o.status,
                transition,
            });
        }
        o.status = transition.target();
        Ok(o.clone())
    }
}
