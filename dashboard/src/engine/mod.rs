mod transition;

pub use transition::{available_transitions, Transition, TransitionRule, TRANSITIONS};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::api::OrderApi;
use crate::entities::order::{OrderListKey, OrderStatus, OrdersPage};
use crate::errors::EngineError;
use crate::repositories::OrderListCache;

/// What the view should show for one command on one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionState {
    Idle,
    Pending,
    Failed(String),
}

/// Drives orders through the transition table and keeps every cached order
/// list in step with what the API has acknowledged.
///
/// At most one command per order is in flight; a second one is rejected with
/// [`EngineError::TransitionInFlight`]. Commands for different orders run
/// independently and their cache patches land in the order the calls resolve.
pub struct OrderStatusEngine<A, C> {
    api: A,
    cache: C,
    in_flight: DashMap<String, Transition>,
    failures: DashMap<(String, Transition), String>,
    patch_lock: Mutex<()>,
}

struct InFlight<'a> {
    map: &'a DashMap<String, Transition>,
    order_id: String,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.map.remove(&self.order_id);
    }
}

impl<A: OrderApi, C: OrderListCache> OrderStatusEngine<A, C> {
    pub fn new(api: A, cache: C) -> Self {
        Self {
            api,
            cache,
            in_flight: DashMap::new(),
            failures: DashMap::new(),
            patch_lock: Mutex::new(()),
        }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Runs the list query for `key` and stores the result under that key.
    pub async fn load_orders(&self, key: OrderListKey) -> Result<OrdersPage, EngineError> {
        let page = self.api.get_orders(&key).await?;
        debug!(page_index = key.page_index, orders = page.orders.len(), "orders loaded");
        self.cache.replace(key, page.clone()).await;
        Ok(page)
    }

    #[instrument(name = "apply_transition", skip_all, fields(%order_id, %transition))]
    pub async fn apply_transition(
        &self,
        order_id: &str,
        transition: Transition,
    ) -> Result<OrderStatus, EngineError> {
        let _guard = self.begin(order_id, transition)?;

        if let Some(from) = self.cached_status(order_id).await {
            if !transition.allowed_from(from) {
                warn!(%from, "transition not allowed from cached status");
                return Err(EngineError::InvalidTransition {
                    order_id: order_id.to_string(),
                    from,
                    transition,
                });
            }
        }

        let failure_key = (order_id.to_string(), transition);
        self.failures.remove(&failure_key);

        match self.api.send_transition(order_id, transition).await {
            Ok(()) => {
                let status = transition.target();
                self.failures.retain(|(id, _), _| id != order_id);
                let patched = self.patch_cache(order_id, status).await;
                info!(%status, patched, "transition applied");
                Ok(status)
            }
            Err(e) => {
                warn!(err = %e, "transition rejected by api");
                self.failures.insert(failure_key, e.to_string());
                Err(e.into())
            }
        }
    }

    /// Sets `order_id`'s status in every cached collection holding it.
    /// Returns how many collections were rewritten; ones already at `status`
    /// are left alone.
    ///
    /// Each rewrite re-reads the collection under the cache's write lock, so a
    /// page loaded after the walk keeps its fresh contents.
    pub async fn patch_cache(&self, order_id: &str, status: OrderStatus) -> usize {
        let _serial = self.patch_lock.lock().await;

        let mut holding: Vec<OrderListKey> = Vec::new();
        self.cache
            .for_each_collection(&mut |key, page| {
                if page.find(order_id).is_some() {
                    holding.push(key.clone());
                }
            })
            .await;

        let mut n = 0;
        for key in holding {
            if self
                .cache
                .update(&key, &mut |page| page.with_status(order_id, status))
                .await
            {
                n += 1;
            }
        }
        n
    }

    /// Status of `order_id` as held by the cache, if any collection has it.
    pub async fn cached_status(&self, order_id: &str) -> Option<OrderStatus> {
        let mut found = None;
        self.cache
            .for_each_collection(&mut |_, page| {
                if found.is_none() {
                    found = page.find(order_id).map(|o| o.status);
                }
            })
            .await;
        found
    }

    pub fn pending_transition(&self, order_id: &str) -> Option<Transition> {
        self.in_flight.get(order_id).map(|t| *t)
    }

    pub fn transition_state(&self, order_id: &str, transition: Transition) -> TransitionState {
        if self.pending_transition(order_id) == Some(transition) {
            return TransitionState::Pending;
        }
        match self.failures.get(&(order_id.to_string(), transition)) {
            Some(msg) => TransitionState::Failed(msg.value().clone()),
            None => TransitionState::Idle,
        }
    }

    fn begin(&self, order_id: &str, transition: Transition) -> Result<InFlight<'_>, EngineError> {
        match self.in_flight.entry(order_id.to_string()) {
            Entry::Occupied(e) => Err(EngineError::TransitionInFlight {
                order_id: order_id.to_string(),
                pending: *e.get(),
            }),
            Entry::Vacant(v) => {
                v.insert(transition);
                Ok(InFlight {
                    map: &self.in_flight,
                    order_id: order_id.to_string(),
                })
            }
        }
    }
}
