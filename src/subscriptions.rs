//! Subscription manager for broadcasting offer snapshots.

use crate::types::Offer;
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Unique identifier for a subscription.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

impl fmt::Debug for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriptionId({})", self.0)
    }
}

/// Callback invoked with the full post-mutation snapshot.
pub type Listener = Arc<dyn Fn(&[Offer]) + Send + Sync>;

/// Manages listeners and broadcasts snapshots to them.
///
/// Notification order equals subscription order. A broadcast pass iterates
/// a point-in-time copy of the listener list, so unsubscribing (or
/// subscribing) from inside a callback never skips or double-fires the
/// listeners of the running pass.
pub struct SubscriptionManager {
    /// Active listeners in subscription order.
    listeners: RwLock<Vec<(SubscriptionId, Listener)>>,

    /// Counter for generating subscription IDs.
    next_id: AtomicU64,
}

impl SubscriptionManager {
    /// Create a new subscription manager.
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a listener. Returns the ID used to unsubscribe.
    pub fn subscribe(
        &self,
        listener: impl Fn(&[Offer]) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.listeners.write().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Unknown IDs are a no-op.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.write().retain(|(sub_id, _)| *sub_id != id);
    }

    /// Number of active listeners.
    pub fn subscription_count(&self) -> usize {
        self.listeners.read().len()
    }

    /// Invoke every listener with the snapshot, in subscription order.
    ///
    /// No lock is held while callbacks run, so listeners may re-enter the
    /// manager.
    pub fn broadcast(&self, snapshot: &[Offer]) {
        let listeners: Vec<Listener> = self
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(snapshot);
        }
    }
}

impl Default for SubscriptionManager {
    fn default() -> Self {
        Self::new()
    }
}
