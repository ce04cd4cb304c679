use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Canceled,
    Processing,
    Delivering,
    Delivered,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Canceled => "Cancelado",
            Self::Processing => "Em preparo",
            Self::Delivering => "Em entrega",
            Self::Delivered => "Entregue",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Canceled => "canceled",
            Self::Processing => "processing",
            Self::Delivering => "delivering",
            Self::Delivered => "delivered",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order as listed by `GET /orders`. Only `status` is ever changed client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub customer_name: String,
    /// Minor currency units (cents).
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page_index: u32,
    pub per_page: u32,
    pub total_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OrdersPage {
    pub orders: Vec<Order>,
    pub meta: PageMeta,
}

impl OrdersPage {
    pub fn find(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.order_id == order_id)
    }

    /// Copy of this page with `order_id`'s status replaced, or `None` when the
    /// page does not hold that order or it already has `status`.
    pub fn with_status(&self, order_id: &str, status: OrderStatus) -> Option<Self> {
        let current = self.find(order_id)?;
        if current.status == status {
            return None;
        }
        let orders = self
            .orders
            .iter()
            .map(|o| {
                if o.order_id == order_id {
                    Order {
                        status,
                        ..o.clone()
                    }
                } else {
                    o.clone()
                }
            })
            .collect();
        Some(Self {
            orders,
            meta: self.meta.clone(),
        })
    }
}

/// Query parameters of `GET /orders`; also the key of a cached page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListKey {
    #[serde(default)]
    pub page_index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl OrderListKey {
    pub fn page(page_index: u32) -> Self {
        Self {
            page_index,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            order_id: id.to_string(),
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            status,
            customer_name: "Maria".into(),
            total: 4590,
        }
    }

    #[test]
    fn order_serde_uses_camel_case_fields_and_lowercase_status() {
        let o = order("A1", OrderStatus::Pending);
        let v = serde_json::to_value(&o).unwrap();
        assert_eq!(v["orderId"], "A1");
        assert_eq!(v["customerName"], "Maria");
        assert_eq!(v["status"], "pending");
        assert_eq!(v["total"], 4590);
        let back: Order = serde_json::from_value(v).unwrap();
        assert_eq!(back, o);
    }

    #[test]
    fn with_status_replaces_only_matching_order() {
        let page = OrdersPage {
            orders: vec![order("A1", OrderStatus::Pending), order("B2", OrderStatus::Pending)],
            meta: PageMeta {
                page_index: 0,
                per_page: 10,
                total_count: 2,
            },
        };
        let patched = page.with_status("A1", OrderStatus::Processing).unwrap();
        assert_eq!(patched.orders[0].status, OrderStatus::Processing);
        assert_eq!(patched.orders[0].customer_name, "Maria");
        assert_eq!(patched.orders[1], page.orders[1]);
        assert_eq!(patched.meta, page.meta);
    }

    #[test]
    fn with_status_is_none_for_absent_or_unchanged() {
        let page = OrdersPage {
            orders: vec![order("A1", OrderStatus::Processing)],
            meta: PageMeta::default(),
        };
        assert!(page.with_status("A1", OrderStatus::Processing).is_none());
        assert!(page.with_status("zz", OrderStatus::Canceled).is_none());
    }

    #[test]
    fn list_key_skips_empty_filters() {
        let v = serde_json::to_value(OrderListKey::page(2)).unwrap();
        assert_eq!(v, serde_json::json!({ "pageIndex": 2 }));
    }
}
