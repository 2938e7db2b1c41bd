//! Main offer store tying collection, subscriptions, and sink together.

use crate::error::{Result, StoreError};
use crate::seed;
use crate::sink::DurableSink;
use crate::subscriptions::{SubscriptionId, SubscriptionManager};
use crate::types::{Offer, OfferDraft, OfferId, StoreStats, Timestamp};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tracing::{debug, warn};

/// Rating at or above which an offer counts as a top offer.
const TOP_RATING: f32 = 4.8;

/// Store configuration.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Offers present at construction.
    pub seed: Vec<Offer>,

    /// Validation applied to inserted drafts.
    pub validation: ValidationPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed: seed::default_offers(),
            validation: ValidationPolicy::Permissive,
        }
    }
}

/// How inserted drafts are validated.
///
/// Permissive accepts any draft, shape unseen; a garbage draft becomes a
/// garbage record rather than a rejection. Strict enforces the two
/// structural rules a draft can actually break.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    #[default]
    Permissive,
    Strict,
}

/// The authoritative in-memory offer collection.
///
/// Owns the canonical mutable set of [`Offer`] records and provides:
/// - Snapshot reads via [`all_offers`](OfferStore::all_offers)
/// - Insertion with ID assignment and subscriber fan-out
/// - Best-effort durability for user-created offers through a
///   [`DurableSink`]
/// - Idempotent rehydration of previously persisted user offers
///
/// There is no update or delete; within a session the set only grows.
/// Consumers receive copies and route every mutation through
/// [`insert`](OfferStore::insert).
pub struct OfferStore {
    /// The offer collection, newest-first.
    offers: RwLock<Vec<Offer>>,

    /// Listener registry.
    subscriptions: SubscriptionManager,

    /// Durable slot for the user-created subset.
    sink: Arc<dyn DurableSink>,

    validation: ValidationPolicy,

    /// Serializes mutating passes so ID assignment, prepend, persist, and
    /// notify happen as one pass per caller.
    write_lock: Mutex<()>,
}

impl OfferStore {
    /// Create a store with the default configuration (18-offer seed set,
    /// permissive validation).
    pub fn new(sink: Arc<dyn DurableSink>) -> Self {
        Self::with_config(StoreConfig::default(), sink)
    }

    /// Create a store with an explicit seed set and validation policy.
    pub fn with_config(config: StoreConfig, sink: Arc<dyn DurableSink>) -> Self {
        Self {
            offers: RwLock::new(config.seed),
            subscriptions: SubscriptionManager::new(),
            sink,
            validation: config.validation,
            write_lock: Mutex::new(()),
        }
    }

    // --- Reads ---

    /// Snapshot of all offers in current order (newest-first, seed offers
    /// beneath in their original relative order). The returned vector is a
    /// copy; mutating it never affects store state.
    pub fn all_offers(&self) -> Vec<Offer> {
        self.offers.read().clone()
    }

    /// Offers rated at or above the top-offer threshold.
    pub fn top_offers(&self) -> Vec<Offer> {
        self.offers
            .read()
            .iter()
            .filter(|offer| offer.rating >= TOP_RATING)
            .cloned()
            .collect()
    }

    /// Number of offers currently in the store.
    pub fn len(&self) -> usize {
        self.offers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.read().is_empty()
    }

    /// Store statistics.
    pub fn stats(&self) -> StoreStats {
        let offers = self.offers.read();
        StoreStats {
            offer_count: offers.len(),
            user_offer_count: offers.iter().filter(|o| o.is_user_created()).count(),
            subscription_count: self.subscriptions.subscription_count(),
        }
    }

    // --- Mutation ---

    /// Insert a new offer.
    ///
    /// Assigns the next ID (max existing + 1, or 1 for an empty store),
    /// stamps the creation time, and prepends the record so it sorts before
    /// everything already present. The user-created subset is then written
    /// to the sink and every subscriber is notified with the full updated
    /// snapshot.
    ///
    /// A sink failure is logged and swallowed; the in-memory state is the
    /// source of truth and is never rolled back. Under
    /// [`ValidationPolicy::Permissive`] (the default) this method cannot
    /// fail; under `Strict` a structurally invalid draft is rejected with
    /// [`StoreError::InvalidOffer`].
    pub fn insert(&self, draft: OfferDraft) -> Result<Offer> {
        self.validate(&draft)?;

        let _lock = self.write_lock.lock();

        let (offer, snapshot) = {
            let mut offers = self.offers.write();
            let next_id = OfferId(offers.iter().map(|o| o.id.0).max().unwrap_or(0) + 1);
            let offer = draft.into_offer(next_id, Timestamp::now());
            offers.insert(0, offer.clone());
            (offer, offers.clone())
        };

        // Persist before notifying: a subscriber callback always observes
        // state for which the durability write has already been attempted.
        self.persist_user_offers(&snapshot);
        self.subscriptions.broadcast(&snapshot);

        Ok(offer)
    }

    /// Merge previously persisted user offers back into memory.
    ///
    /// Reads the sink blob and prepends each stored offer whose ID is not
    /// already present, then notifies subscribers once if anything was
    /// added. Idempotent: a second call with the same blob adds nothing.
    /// A missing blob, read failure, or parse failure is logged and treated
    /// as an empty persisted set.
    ///
    /// Returns the number of offers added.
    pub fn load_user_offers(&self) -> usize {
        let _lock = self.write_lock.lock();

        let blob = match self.sink.get() {
            Ok(Some(blob)) => blob,
            Ok(None) => return 0,
            Err(e) => {
                warn!(error = %e, "failed to read persisted user offers");
                return 0;
            }
        };

        let saved: Vec<Offer> = match serde_json::from_slice(&blob) {
            Ok(saved) => saved,
            Err(e) => {
                warn!(error = %e, "ignoring unparseable user offer blob");
                return 0;
            }
        };

        let (added, snapshot) = {
            let mut offers = self.offers.write();
            let mut added = 0usize;
            for offer in saved {
                if offers.iter().any(|existing| existing.id == offer.id) {
                    continue;
                }
                offers.insert(0, offer);
                added += 1;
            }
            let snapshot = (added > 0).then(|| offers.clone());
            (added, snapshot)
        };

        if let Some(snapshot) = snapshot {
            debug!(added, "rehydrated user offers");
            self.subscriptions.broadcast(&snapshot);
        }

        added
    }

    // --- Subscriptions ---

    /// Register a listener invoked with the full snapshot after every
    /// mutation. Notification order equals subscription order.
    pub fn subscribe(
        &self,
        listener: impl Fn(&[Offer]) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.subscriptions.subscribe(listener)
    }

    /// Remove a listener. Safe to call from inside a notification pass.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscriptions.unsubscribe(id);
    }

    // --- Private helpers ---

    fn validate(&self, draft: &OfferDraft) -> Result<()> {
        match self.validation {
            ValidationPolicy::Permissive => Ok(()),
            ValidationPolicy::Strict => {
                if draft.title.trim().is_empty() {
                    return Err(StoreError::InvalidOffer("title must not be empty".into()));
                }
                if draft.current_participants > draft.max_participants {
                    return Err(StoreError::InvalidOffer(format!(
                        "current participants {} exceed maximum {}",
                        draft.current_participants, draft.max_participants
                    )));
                }
                Ok(())
            }
        }
    }

    /// Write the user-created subset to the sink as one JSON array,
    /// overwriting the previous blob. Failures are logged, never raised.
    fn persist_user_offers(&self, offers: &[Offer]) {
        let user_offers: Vec<&Offer> =
            offers.iter().filter(|o| o.is_user_created()).collect();

        let blob = match serde_json::to_vec(&user_offers) {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, "failed to serialize user offers");
                return;
            }
        };

        if let Err(e) = self.sink.put(&blob) {
            warn!(error = %e, "failed to persist user offers");
        }
    }
}
