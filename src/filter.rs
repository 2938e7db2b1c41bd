//! Conjunctive filtering over offer snapshots.
//!
//! A filter is a pure predicate: an offer matches iff every active
//! criterion matches, and an inactive criterion (empty term, empty
//! selection, no range) is vacuously true. Filtering is a full linear
//! rescan of the snapshot; at tens of records nothing more is warranted.

use crate::types::{Offer, Price};
use chrono::{Datelike, NaiveDate, Timelike, Weekday};

/// Inclusive price range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Price,
    pub max: Price,
}

impl PriceRange {
    fn contains(&self, price: Price) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Inclusive calendar date range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Inclusive range over an offer's maximum capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticipantRange {
    pub min: u32,
    pub max: u32,
}

impl ParticipantRange {
    fn contains(&self, max_participants: u32) -> bool {
        max_participants >= self.min && max_participants <= self.max
    }
}

/// Time-of-day bucket for the schedule criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeSlot {
    /// 06:00 to 11:59.
    Morning,
    /// 12:00 to 17:59.
    Midday,
    /// 18:00 to 21:59.
    Evening,
    /// Offer date falls on a Saturday or Sunday.
    Weekend,
}

impl TimeSlot {
    /// Whether the offer's schedule falls into this bucket.
    pub fn matches(self, offer: &Offer) -> bool {
        match self {
            TimeSlot::Morning => (6..12).contains(&offer.time.hour()),
            TimeSlot::Midday => (12..18).contains(&offer.time.hour()),
            TimeSlot::Evening => (18..22).contains(&offer.time.hour()),
            TimeSlot::Weekend => {
                matches!(offer.date.weekday(), Weekday::Sat | Weekday::Sun)
            }
        }
    }
}

/// Filter criteria over an offer snapshot.
///
/// Within a criterion, selections are alternatives (an offer matches the
/// category criterion if its category is any of the selected ones); across
/// criteria the filter is a conjunction.
#[derive(Clone, Debug, Default)]
pub struct OfferFilter {
    /// Case-insensitive substring match across title, provider,
    /// description, and location. Empty or absent = inactive.
    pub term: Option<String>,

    /// Category selection; empty = inactive.
    pub categories: Vec<String>,

    /// District selection; empty = inactive.
    pub districts: Vec<String>,

    pub price: Option<PriceRange>,
    pub dates: Option<DateRange>,
    pub participants: Option<ParticipantRange>,

    /// Time-of-day buckets; empty = inactive.
    pub time_slots: Vec<TimeSlot>,
}

impl OfferFilter {
    /// Whether the offer satisfies every active criterion.
    pub fn matches(&self, offer: &Offer) -> bool {
        let matches_term = match self.term.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                offer.title.to_lowercase().contains(&term)
                    || offer.provider.to_lowercase().contains(&term)
                    || offer.description.to_lowercase().contains(&term)
                    || offer.location.to_lowercase().contains(&term)
            }
        };

        let matches_category =
            self.categories.is_empty() || self.categories.contains(&offer.category);

        let matches_district =
            self.districts.is_empty() || self.districts.contains(&offer.district);

        let matches_price = self.price.map_or(true, |range| range.contains(offer.price));

        let matches_date = self.dates.map_or(true, |range| range.contains(offer.date));

        let matches_participants = self
            .participants
            .map_or(true, |range| range.contains(offer.max_participants));

        let matches_slot = self.time_slots.is_empty()
            || self.time_slots.iter().any(|slot| slot.matches(offer));

        matches_term
            && matches_category
            && matches_district
            && matches_price
            && matches_date
            && matches_participants
            && matches_slot
    }

    /// Filter a snapshot, preserving its order.
    pub fn apply(&self, offers: &[Offer]) -> Vec<Offer> {
        offers
            .iter()
            .filter(|offer| self.matches(offer))
            .cloned()
            .collect()
    }

    /// Number of active selections and ranges, for a filter count badge.
    pub fn active_criteria(&self) -> usize {
        self.categories.len()
            + self.districts.len()
            + self.time_slots.len()
            + usize::from(self.price.is_some())
            + usize::from(self.dates.is_some())
            + usize::from(self.participants.is_some())
            + usize::from(!matches!(self.term.as_deref(), None | Some("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_offers;
    use crate::types::OfferId;

    fn ids(offers: &[Offer]) -> Vec<u64> {
        offers.iter().map(|o| o.id.0).collect()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let offers = default_offers();
        let filter = OfferFilter::default();
        assert_eq!(filter.apply(&offers).len(), 18);
        assert_eq!(filter.active_criteria(), 0);
    }

    #[test]
    fn test_category_and_district_conjunction() {
        let offers = default_offers();
        let filter = OfferFilter {
            categories: vec!["Fußball".into()],
            districts: vec!["Nordend".into()],
            ..Default::default()
        };

        let hits = filter.apply(&offers);
        assert_eq!(ids(&hits), vec![4]);
    }

    #[test]
    fn test_term_is_case_insensitive() {
        let offers = default_offers();
        let filter = OfferFilter {
            term: Some("BIKE".into()),
            ..Default::default()
        };

        // "Innenstadt Bike Tour", "Mountainbike Taunus", "E-Bike Main-Radweg".
        assert_eq!(ids(&filter.apply(&offers)), vec![1, 2, 3]);
    }

    #[test]
    fn test_term_searches_location() {
        let offers = default_offers();
        let filter = OfferFilter {
            term: Some("grüneburgpark".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&offers)), vec![12]);
    }

    #[test]
    fn test_empty_term_is_inactive() {
        let offers = default_offers();
        let filter = OfferFilter {
            term: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&offers).len(), 18);
        assert_eq!(filter.active_criteria(), 0);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let offers = default_offers();
        let filter = OfferFilter {
            price: Some(PriceRange {
                min: Price::from_eur(20),
                max: Price::from_eur(30),
            }),
            ..Default::default()
        };

        assert_eq!(ids(&filter.apply(&offers)), vec![3, 7, 11, 12, 16, 17, 18]);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let offers = default_offers();
        let filter = OfferFilter {
            dates: Some(DateRange {
                start: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                end: NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
            }),
            ..Default::default()
        };

        assert_eq!(filter.apply(&offers).len(), 12);
    }

    #[test]
    fn test_participant_range_applies_to_capacity() {
        let offers = default_offers();
        let filter = OfferFilter {
            participants: Some(ParticipantRange { min: 20, max: 25 }),
            ..Default::default()
        };

        assert_eq!(ids(&filter.apply(&offers)), vec![4, 6, 16, 17]);
    }

    #[test]
    fn test_time_slots() {
        let offers = default_offers();

        let morning = OfferFilter {
            time_slots: vec![TimeSlot::Morning],
            ..Default::default()
        };
        assert_eq!(ids(&morning.apply(&offers)), vec![1, 2, 13, 15]);

        let evening = OfferFilter {
            time_slots: vec![TimeSlot::Evening],
            ..Default::default()
        };
        assert_eq!(ids(&evening.apply(&offers)), vec![4, 5, 8, 9, 12, 16, 17]);

        // 2024-03-16 is a Saturday, 2024-03-17 a Sunday.
        let weekend = OfferFilter {
            time_slots: vec![TimeSlot::Weekend],
            ..Default::default()
        };
        assert_eq!(weekend.apply(&offers).len(), 12);
    }

    #[test]
    fn test_slots_are_alternatives_within_the_criterion() {
        let offers = default_offers();
        let filter = OfferFilter {
            categories: vec!["Laufen".into()],
            time_slots: vec![TimeSlot::Evening],
            ..Default::default()
        };

        // Laufkurs (id 18) starts 17:00 and drops out.
        assert_eq!(ids(&filter.apply(&offers)), vec![16, 17]);
    }

    #[test]
    fn test_apply_preserves_snapshot_order() {
        let mut offers = default_offers();
        offers.reverse();

        let filter = OfferFilter {
            categories: vec!["Fahrrad".into()],
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&offers)), vec![3, 2, 1]);
    }

    #[test]
    fn test_active_criteria_count() {
        let filter = OfferFilter {
            term: Some("bike".into()),
            categories: vec!["Fahrrad".into(), "Laufen".into()],
            districts: vec!["Nordend".into()],
            price: Some(PriceRange {
                min: Price::from_eur(0),
                max: Price::from_eur(100),
            }),
            dates: None,
            participants: None,
            time_slots: vec![TimeSlot::Weekend],
        };
        assert_eq!(filter.active_criteria(), 6);
    }

    #[test]
    fn test_matches_single_offer() {
        let offers = default_offers();
        let offer = offers.iter().find(|o| o.id == OfferId(4)).unwrap();

        let filter = OfferFilter {
            categories: vec!["Fußball".into()],
            ..Default::default()
        };
        assert!(filter.matches(offer));

        let filter = OfferFilter {
            categories: vec!["Basketball".into()],
            ..Default::default()
        };
        assert!(!filter.matches(offer));
    }
}
