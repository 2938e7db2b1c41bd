//! Core types for the offer store.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique identifier for an offer.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OfferId(pub u64);

impl fmt::Debug for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OfferId({})", self.0)
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Microseconds since Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Current time.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards");
        Timestamp(duration.as_micros() as i64)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

/// Price in euro cents.
///
/// Kept numeric so range filters and sorting never re-parse a display
/// string.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(pub u32);

impl Price {
    /// Price from whole euros.
    pub fn from_eur(eur: u32) -> Self {
        Price(eur * 100)
    }

    /// Total cents.
    pub fn cents(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price({})", self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}", self.0 / 100)
        } else {
            write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
        }
    }
}

/// A single bookable sports activity listing.
///
/// Field names serialize in camelCase, matching the JSON the web client
/// writes to its durable sink.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Unique identifier (assigned by store).
    pub id: OfferId,

    pub title: String,
    pub provider: String,

    /// Image URI.
    pub image: String,

    pub price: Price,

    /// Billing period label, e.g. "/Tour" or "/Monat".
    pub period: String,

    /// Location tag (open set), e.g. "Nordend".
    pub district: String,

    pub rating: f32,

    /// Display duration, e.g. "90 Min" or "8 Wochen".
    pub duration: String,

    /// Sport type (open set), e.g. "Fußball".
    pub category: String,

    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub current_participants: u32,
    pub max_participants: u32,
    pub location: String,
    pub full_description: String,

    /// Free-text content tags.
    pub content: String,

    /// Creator identifier; present only for user-created offers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Creation time; present only for user-created offers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl Offer {
    /// Whether this offer was created at runtime by a user (as opposed to
    /// belonging to the seed set).
    pub fn is_user_created(&self) -> bool {
        self.created_by.is_some()
    }
}

/// Input for creating a new offer (before id and creation time are
/// assigned by the store).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDraft {
    pub title: String,
    pub provider: String,
    pub image: String,
    pub price: Price,
    pub period: String,
    pub district: String,
    pub rating: f32,
    pub duration: String,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub current_participants: u32,
    pub max_participants: u32,
    pub location: String,
    pub full_description: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl OfferDraft {
    pub(crate) fn into_offer(self, id: OfferId, created_at: Timestamp) -> Offer {
        Offer {
            id,
            title: self.title,
            provider: self.provider,
            image: self.image,
            price: self.price,
            period: self.period,
            district: self.district,
            rating: self.rating,
            duration: self.duration,
            category: self.category,
            description: self.description,
            date: self.date,
            time: self.time,
            current_participants: self.current_participants,
            max_participants: self.max_participants,
            location: self.location,
            full_description: self.full_description,
            content: self.content,
            created_by: self.created_by,
            created_at: Some(created_at),
        }
    }
}

/// Store statistics.
#[derive(Clone, Debug, Default)]
pub struct StoreStats {
    pub offer_count: usize,
    pub user_offer_count: usize,
    pub subscription_count: usize,
}
