use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::entities::order::{OrderListKey, OrdersPage};
use crate::repositories::OrderListCache;

#[derive(Clone, Default)]
pub struct InMemoryOrderListCache {
    inner: Arc<RwLock<HashMap<OrderListKey, OrdersPage>>>,
}

#[async_trait]
impl OrderListCache for InMemoryOrderListCache {
    async fn for_each_collection(
        &self,
        visitor: &mut (dyn for<'a> FnMut(&'a OrderListKey, &'a OrdersPage) + Send),
    ) {
        let map = self.inner.read().await;
        for (key, page) in map.iter() {
            visitor(key, page);
        }
    }

    async fn replace(&self, key: OrderListKey, collection: OrdersPage) {
        let mut map = self.inner.write().await;
        map.insert(key, collection);
    }

    async fn update(
        &self,
        key: &OrderListKey,
        patch: &mut (dyn for<'a> FnMut(&'a OrdersPage) -> Option<OrdersPage> + Send),
    ) -> bool {
        let mut map = self.inner.write().await;
        let Some(current) = map.get_mut(key) else {
            return false;
        };
        match patch(&*current) {
            Some(next) => {
                *current = next;
                true
            }
            None => false,
        }
    }

    async fn get(&self, key: &OrderListKey) -> Option<OrdersPage> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }
}
