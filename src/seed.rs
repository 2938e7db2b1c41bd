//! The fixed seed set of offers present at store construction.

use crate::types::{Offer, OfferId, Price};
use chrono::{NaiveDate, NaiveTime};

const BIKE_IMAGE: &str = "https://images.pexels.com/photos/100582/pexels-photo-100582.jpeg?auto=compress&cs=tinysrgb&w=400&h=250&fit=crop";
const SOCCER_IMAGE: &str = "https://images.pexels.com/photos/274422/pexels-photo-274422.jpeg?auto=compress&cs=tinysrgb&w=400&h=250&fit=crop";
const BASKETBALL_IMAGE: &str = "https://images.pexels.com/photos/1752757/pexels-photo-1752757.jpeg?auto=compress&cs=tinysrgb&w=400&h=250&fit=crop";
const SKATE_IMAGE: &str = "https://images.pexels.com/photos/1230662/pexels-photo-1230662.jpeg?auto=compress&cs=tinysrgb&w=400&h=250&fit=crop";
const PADDLE_IMAGE: &str = "https://images.pexels.com/photos/416978/pexels-photo-416978.jpeg?auto=compress&cs=tinysrgb&w=400&h=250&fit=crop";
const RUNNING_IMAGE: &str = "https://images.pexels.com/photos/2402777/pexels-photo-2402777.jpeg?auto=compress&cs=tinysrgb&w=400&h=250&fit=crop";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid seed time")
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: u64,
    title: &str,
    provider: &str,
    image: &str,
    price_eur: u32,
    period: &str,
    district: &str,
    rating: f32,
    duration: &str,
    category: &str,
    description: &str,
    date: NaiveDate,
    time: NaiveTime,
    current_participants: u32,
    max_participants: u32,
    location: &str,
    full_description: &str,
    content: &str,
) -> Offer {
    Offer {
        id: OfferId(id),
        title: title.into(),
        provider: provider.into(),
        image: image.into(),
        price: Price::from_eur(price_eur),
        period: period.into(),
        district: district.into(),
        rating,
        duration: duration.into(),
        category: category.into(),
        description: description.into(),
        date,
        time,
        current_participants,
        max_participants,
        location: location.into(),
        full_description: full_description.into(),
        content: content.into(),
        created_by: None,
        created_at: None,
    }
}

/// The default offer set: three offers per category across Frankfurt
/// districts. Seed offers carry no provenance fields.
pub fn default_offers() -> Vec<Offer> {
    vec![
        // Fahrrad
        seed(
            1,
            "Innenstadt Bike Tour",
            "Frankfurt City Cycling",
            BIKE_IMAGE,
            15,
            "/Tour",
            "Innenstadt",
            4.7,
            "2 Std",
            "Fahrrad",
            "Entdecke Frankfurt auf zwei Rädern - geführte Tour durch die Innenstadt.",
            date(2024, 3, 15),
            time(10, 0),
            8,
            15,
            "Römerberg, Frankfurt",
            "Eine entspannte Fahrradtour durch die Frankfurter Innenstadt. Wir besuchen die wichtigsten Sehenswürdigkeiten und versteckten Ecken der Stadt.",
            "Stadtführung, Sightseeing, Anfänger geeignet",
        ),
        seed(
            2,
            "Mountainbike Taunus",
            "Taunus Bike Adventures",
            BIKE_IMAGE,
            35,
            "/Tour",
            "Taunus",
            4.9,
            "4 Std",
            "Fahrrad",
            "Anspruchsvolle Mountainbike-Touren durch den Taunus.",
            date(2024, 3, 16),
            time(9, 0),
            6,
            10,
            "Feldberg Parkplatz",
            "Herausfordernde Mountainbike-Tour durch die schönsten Trails des Taunus. Für erfahrene Biker mit guter Kondition.",
            "Mountainbike, Fortgeschrittene, Taunus, Trails",
        ),
        seed(
            3,
            "E-Bike Main-Radweg",
            "E-Motion Frankfurt",
            BIKE_IMAGE,
            25,
            "/Tour",
            "Sachsenhausen",
            4.6,
            "3 Std",
            "Fahrrad",
            "Entspannte E-Bike Tour entlang des Mains.",
            date(2024, 3, 17),
            time(14, 0),
            4,
            12,
            "Sachsenhäuser Ufer",
            "Gemütliche E-Bike Tour entlang des Mains. Perfekt für alle Altersgruppen und Fitness-Level.",
            "E-Bike, entspannt, Main, Senioren geeignet",
        ),
        // Fußball
        seed(
            4,
            "Erwachsenen Fußball Training",
            "FC Frankfurt Hobby",
            SOCCER_IMAGE,
            45,
            "/Monat",
            "Nordend",
            4.8,
            "90 Min",
            "Fußball",
            "Fußballtraining für Erwachsene jeden Levels.",
            date(2024, 3, 15),
            time(18, 30),
            16,
            22,
            "Sportplatz Nordend",
            "Professionelles Fußballtraining für Erwachsene. Technik, Taktik und Kondition in freundlicher Atmosphäre.",
            "Training, Erwachsene, alle Level, Technik",
        ),
        seed(
            5,
            "Frauen Fußball Gruppe",
            "Ladies FC Frankfurt",
            SOCCER_IMAGE,
            40,
            "/Monat",
            "Westend",
            4.9,
            "90 Min",
            "Fußball",
            "Fußballgruppe nur für Frauen in entspannter Atmosphäre.",
            date(2024, 3, 16),
            time(19, 0),
            12,
            18,
            "Sportplatz Westend",
            "Eine tolle Fußballgruppe nur für Frauen. Egal ob Anfängerin oder erfahrene Spielerin - alle sind willkommen!",
            "Frauen, nur Frauen, entspannt, alle Level",
        ),
        seed(
            6,
            "Ü40 Fußball Runde",
            "Oldies but Goldies FC",
            SOCCER_IMAGE,
            35,
            "/Monat",
            "Bockenheim",
            4.7,
            "90 Min",
            "Fußball",
            "Fußball für die Generation 40+.",
            date(2024, 3, 17),
            time(17, 0),
            14,
            20,
            "Sportplatz Bockenheim",
            "Fußball für Männer über 40. Weniger Tempo, mehr Spaß und Kameradschaft stehen im Vordergrund.",
            "Ü40, Männer, entspannt, Spaß",
        ),
        // Basketball
        seed(
            7,
            "Streetball Sessions",
            "Frankfurt Ballers",
            BASKETBALL_IMAGE,
            30,
            "/Monat",
            "Ostend",
            4.8,
            "2 Std",
            "Basketball",
            "Streetball auf professionellen Outdoor-Courts.",
            date(2024, 3, 15),
            time(16, 0),
            8,
            12,
            "Basketballplatz Ostend",
            "Authentisches Streetball-Erlebnis auf modernen Outdoor-Courts. Perfekt für alle Basketball-Liebhaber.",
            "Streetball, Outdoor, alle Level, Urban",
        ),
        seed(
            8,
            "Basketball Anfänger Kurs",
            "Basketball Academy Frankfurt",
            BASKETBALL_IMAGE,
            55,
            "/Monat",
            "Nordend",
            4.6,
            "90 Min",
            "Basketball",
            "Basketball-Grundlagen für komplette Anfänger.",
            date(2024, 3, 16),
            time(18, 0),
            5,
            15,
            "Sporthalle Nordend",
            "Lerne Basketball von Grund auf! Professionelle Trainer bringen dir alle Basics bei - von Dribbling bis Wurftechnik.",
            "Anfänger, Grundlagen, Training, Indoor",
        ),
        seed(
            9,
            "Basketball Liga Spiele",
            "Frankfurt Basketball League",
            BASKETBALL_IMAGE,
            60,
            "/Saison",
            "Innenstadt",
            4.9,
            "2 Std",
            "Basketball",
            "Wettkampf-Basketball in der Stadtliga.",
            date(2024, 3, 17),
            time(20, 0),
            10,
            12,
            "Sporthalle Innenstadt",
            "Spiele in der offiziellen Frankfurt Basketball League. Für erfahrene Spieler mit Wettkampfambitionen.",
            "Liga, Wettkampf, erfahrene Spieler, Indoor",
        ),
        // Skaten
        seed(
            10,
            "Skateboard Workshop",
            "Frankfurt Skate School",
            SKATE_IMAGE,
            40,
            "/Workshop",
            "Innenstadt",
            4.7,
            "3 Std",
            "Skaten",
            "Skateboard-Grundlagen für Einsteiger.",
            date(2024, 3, 15),
            time(14, 0),
            6,
            10,
            "Skatepark Innenstadt",
            "Lerne Skateboard fahren von professionellen Trainern. Sicherheitsausrüstung wird gestellt.",
            "Skateboard, Anfänger, Workshop, Sicherheit",
        ),
        seed(
            11,
            "Longboard City Tour",
            "Frankfurt Longboard Crew",
            SKATE_IMAGE,
            20,
            "/Tour",
            "Sachsenhausen",
            4.5,
            "2 Std",
            "Skaten",
            "Entspannte Longboard-Tour durch Frankfurt.",
            date(2024, 3, 16),
            time(16, 0),
            4,
            8,
            "Sachsenhäuser Ufer",
            "Cruise durch Frankfurt auf dem Longboard. Eine entspannte Tour für alle, die das Gleiten lieben.",
            "Longboard, entspannt, Tour, Cruising",
        ),
        seed(
            12,
            "Inline-Skating Gruppe",
            "Skate Frankfurt",
            SKATE_IMAGE,
            25,
            "/Monat",
            "Westend",
            4.8,
            "90 Min",
            "Skaten",
            "Inline-Skating für Fitness und Spaß.",
            date(2024, 3, 17),
            time(18, 0),
            7,
            12,
            "Grüneburgpark",
            "Regelmäßige Inline-Skating Gruppe für Fitness und Spaß. Alle Levels willkommen!",
            "Inline-Skating, Fitness, Gruppe, Park",
        ),
        // Paddel
        seed(
            13,
            "Kajak Main Tour",
            "Frankfurt Wassersport",
            PADDLE_IMAGE,
            45,
            "/Tour",
            "Westend",
            4.9,
            "3 Std",
            "Paddel",
            "Geführte Kajak-Tour auf dem Main.",
            date(2024, 3, 15),
            time(11, 0),
            5,
            8,
            "Bootshaus Westend",
            "Erlebe Frankfurt vom Wasser aus! Professionell geführte Kajak-Tour mit kompletter Ausrüstung.",
            "Kajak, Main, geführt, Ausrüstung inklusive",
        ),
        seed(
            14,
            "SUP Anfänger Kurs",
            "Stand Up Paddle Frankfurt",
            PADDLE_IMAGE,
            50,
            "/Kurs",
            "Sachsenhausen",
            4.7,
            "2 Std",
            "Paddel",
            "Stand Up Paddling lernen für Einsteiger.",
            date(2024, 3, 16),
            time(15, 0),
            3,
            6,
            "Mainufer Sachsenhausen",
            "Lerne Stand Up Paddling in einem professionellen Anfängerkurs. Board und Paddle werden gestellt.",
            "SUP, Anfänger, Kurs, Board inklusive",
        ),
        seed(
            15,
            "Kanu Wanderung",
            "Outdoor Frankfurt",
            PADDLE_IMAGE,
            40,
            "/Tour",
            "Höchst",
            4.8,
            "4 Std",
            "Paddel",
            "Mehrstündige Kanu-Wanderung mit Picknick.",
            date(2024, 3, 17),
            time(10, 0),
            6,
            10,
            "Bootsverleih Höchst",
            "Ausgedehnte Kanu-Wanderung mit Picknick-Pause. Ein ganzer Tag auf dem Wasser!",
            "Kanu, Wanderung, Picknick, ganzer Tag",
        ),
        // Laufen
        seed(
            16,
            "Stadtwald Laufgruppe",
            "Frankfurt Runners",
            RUNNING_IMAGE,
            20,
            "/Monat",
            "Sachsenhausen",
            4.6,
            "60 Min",
            "Laufen",
            "Laufgruppe für alle Geschwindigkeiten.",
            date(2024, 3, 15),
            time(19, 0),
            12,
            25,
            "Stadtwald Frankfurt",
            "Regelmäßige Laufgruppe im Stadtwald. Verschiedene Geschwindigkeitsgruppen für alle Niveaus.",
            "Laufen, Gruppe, alle Niveaus, Stadtwald",
        ),
        seed(
            17,
            "Intervall Training",
            "Run Faster Frankfurt",
            RUNNING_IMAGE,
            25,
            "/Monat",
            "Innenstadt",
            4.8,
            "60 Min",
            "Laufen",
            "Professionelles Intervalltraining für Fortgeschrittene.",
            date(2024, 3, 16),
            time(18, 30),
            10,
            20,
            "Sportplatz Innenstadt",
            "Gezieltes Intervalltraining zur Leistungssteigerung. Für ambitionierte Läuferinnen und Läufer.",
            "Intervall, Training, Leistung, Fortgeschrittene",
        ),
        seed(
            18,
            "Anfänger Laufkurs",
            "Laufstart Frankfurt",
            RUNNING_IMAGE,
            30,
            "/Kurs",
            "Nordend",
            4.7,
            "8 Wochen",
            "Laufen",
            "Laufkurs für absolute Anfänger.",
            date(2024, 3, 17),
            time(17, 0),
            8,
            15,
            "Sportplatz Nordend",
            "Starte deine Laufkarriere mit einem strukturierten 8-Wochen-Kurs. Perfekt für absolute Anfänger.",
            "Anfänger, Kurs, Laufen, 8 Wochen Programm",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_shape() {
        let offers = default_offers();
        assert_eq!(offers.len(), 18);

        let ids: HashSet<_> = offers.iter().map(|o| o.id).collect();
        assert_eq!(ids.len(), 18);
        assert_eq!(offers.iter().map(|o| o.id.0).max(), Some(18));
    }

    #[test]
    fn test_seed_has_three_offers_per_category() {
        let offers = default_offers();
        for category in ["Fahrrad", "Fußball", "Basketball", "Skaten", "Paddel", "Laufen"] {
            let count = offers.iter().filter(|o| o.category == category).count();
            assert_eq!(count, 3, "category {category}");
        }
    }

    #[test]
    fn test_seed_offers_have_no_provenance() {
        for offer in default_offers() {
            assert!(offer.created_by.is_none());
            assert!(offer.created_at.is_none());
            assert!(!offer.is_user_created());
        }
    }

    #[test]
    fn test_seed_capacity_is_sane() {
        for offer in default_offers() {
            assert!(offer.current_participants <= offer.max_participants, "{}", offer.title);
        }
    }
}
