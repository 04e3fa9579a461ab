//! Payload-free change notification for the persisted alarm slot
//!
//! An explicit, cloneable handle owned by the composition root rather than a
//! process-global bus. Observers are told only that the slot changed; they
//! re-load the store to see the new state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

type Handler = Arc<dyn Fn() + Send + Sync>;

/// Proof of a subscription, required to unsubscribe
///
/// Deliberately neither `Copy` nor `Clone`: a token is consumed by
/// `unsubscribe`, so a registration can only be torn down once.
#[derive(Debug)]
pub struct SubscriptionToken(u64);

/// Publish/subscribe fan-out with no payload
///
/// Handles are cheap clones of shared state, so the store and any number of
/// UI observers can hold the same notifier. `publish` dispatches each
/// handler on its own task; a slow subscriber cannot block the rest.
#[derive(Clone)]
pub struct ChangeNotifier {
    subscribers: Arc<DashMap<u64, Handler>>,
    next_token: Arc<AtomicU64>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(DashMap::new()),
            next_token: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Register a handler invoked on every subsequent publish
    pub fn subscribe(&self, handler: impl Fn() + Send + Sync + 'static) -> SubscriptionToken {
        let token = self.next_token.fetch_add(1, Ordering::Relaxed);
        self.subscribers.insert(token, Arc::new(handler));
        SubscriptionToken(token)
    }

    /// Remove a registration; the handler sees no further publishes
    pub fn unsubscribe(&self, token: SubscriptionToken) {
        self.subscribers.remove(&token.0);
    }

    /// Fan out to the subscribers registered at this moment
    ///
    /// Fire-and-forget: each handler runs on its own spawned task, so this
    /// must be called from within a Tokio runtime context. Handlers
    /// registered after the call do not see this publish.
    pub fn publish(&self) {
        for entry in self.subscribers.iter() {
            let handler = Arc::clone(entry.value());
            tokio::spawn(async move {
                handler();
            });
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}
