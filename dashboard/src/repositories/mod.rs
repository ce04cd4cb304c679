pub mod in_memory;

use async_trait::async_trait;

use crate::entities::order::{OrderListKey, OrdersPage};

/// Named collections of orders, one per list query the client has run.
///
/// The status engine only needs to walk the collections and rewrite one in
/// place, so any query cache can sit behind this.
#[async_trait]
pub trait OrderListCache: Send + Sync {
    /// Calls `visitor` once per held collection.
    async fn for_each_collection(
        &self,
        visitor: &mut (dyn for<'a> FnMut(&'a OrderListKey, &'a OrdersPage) + Send),
    );
    async fn replace(&self, key: OrderListKey, collection: OrdersPage);
    /// Runs `patch` against the collection currently held under `key` and
    /// stores its result, all under one write. Returns whether anything was
    /// stored; a missing key or a `None` from `patch` leaves the entry as is.
    async fn update(
        &self,
        key: &OrderListKey,
        patch: &mut (dyn for<'a> FnMut(&'a OrdersPage) -> Option<OrdersPage> + Send),
    ) -> bool;
    async fn get(&self, key: &OrderListKey) -> Option<OrdersPage>;
}
