//! # Kiezsport Offer Store
//!
//! A reactive in-memory store of sports offers for a local discovery
//! platform: one authoritative collection with snapshot reads, observer
//! fan-out, and best-effort durability for user-created entries.
//!
//! ## Core Concepts
//!
//! - **Offers**: Bookable activity listings; seed offers are fixed at
//!   construction, user offers are inserted at runtime
//! - **Subscriptions**: Listeners receive the full snapshot synchronously
//!   after every mutation
//! - **Sinks**: Pluggable put/get blob storage for the user-created subset
//! - **Filters**: Conjunctive predicates over a snapshot
//!
//! ## Example
//!
//! ```ignore
//! use kiezsport::{FileSink, OfferStore};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(FileSink::open("./user-offers.json")?);
//! let store = Arc::new(OfferStore::new(sink));
//!
//! let id = store.subscribe(|offers| render(offers));
//! store.load_user_offers();
//!
//! let offer = store.insert(draft)?;
//! ```

pub mod error;
pub mod filter;
pub mod seed;
pub mod sink;
pub mod store;
pub mod subscriptions;
pub mod types;

// Re-exports
pub use error::{Result, StoreError};
pub use filter::{DateRange, OfferFilter, ParticipantRange, PriceRange, TimeSlot};
pub use seed::default_offers;
pub use sink::{DurableSink, FileSink, MemorySink};
pub use store::{OfferStore, StoreConfig, ValidationPolicy};
pub use subscriptions::{SubscriptionId, SubscriptionManager};
pub use types::{Offer, OfferDraft, OfferId, Price, StoreStats, Timestamp};
