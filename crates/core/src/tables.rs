use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{BuildingId, IntentName};

/// Keywords (English + German) that map free text onto a building id.
/// Matching is a case-insensitive substring scan over the whole table, so a
/// message can yield several entities for the same building.
pub static BUILDING_KEYWORDS: &[(BuildingId, &[&str])] = &[
    (
        BuildingId::Library,
        &[
            "library",
            "bibliothek",
            "books",
            "bücher",
            "study",
            "lernen",
            "research",
            "forschung",
        ],
    ),
    (
        BuildingId::Cafeteria,
        &[
            "cafeteria",
            "mensa",
            "food",
            "essen",
            "dining",
            "restaurant",
            "meal",
            "mahlzeit",
        ],
    ),
    (
        BuildingId::StudentCenter,
        &[
            "student center",
            "studierendenzentrum",
            "activities",
            "aktivitäten",
            "organizations",
            "organisationen",
        ],
    ),
    (
        BuildingId::VisaServices,
        &[
            "visa",
            "immigration",
            "einwanderung",
            "permit",
            "genehmigung",
            "documents",
            "dokumente",
        ],
    ),
    (
        BuildingId::Administration,
        &[
            "administration",
            "verwaltung",
            "registration",
            "anmeldung",
            "office",
            "büro",
        ],
    ),
    (
        BuildingId::UdePortals,
        &[
            "portal", "online", "digital", "moodle", "website", "platform", "plattform",
        ],
    ),
];

pub struct IntentPatternSet {
    pub intent: IntentName,
    pub patterns: Vec<Regex>,
}

/// Curated phrase patterns per intent, in candidate evaluation order.
pub static INTENT_PATTERNS: Lazy<Vec<IntentPatternSet>> = Lazy::new(|| {
    vec![
        pattern_set(
            IntentName::FindBuilding,
            &[
                "where is|wo ist|find|finden|locate|lokalisieren",
                "how to get to|wie komme ich zu|direction|richtung",
            ],
        ),
        pattern_set(
            IntentName::GetHours,
            &[
                "hours|öffnungszeiten|time|zeit|open|geöffnet|close|geschlossen",
                "when|wann|schedule|zeitplan",
            ],
        ),
        pattern_set(
            IntentName::GetContact,
            &[
                "contact|kontakt|phone|telefon|email|mail|address|adresse",
                "call|anrufen|reach|erreichen",
            ],
        ),
        pattern_set(
            IntentName::GetServices,
            &[
                "services|dienstleistungen|what can|was kann|help|hilfe|support|unterstützung",
                "available|verfügbar|offer|anbieten",
            ],
        ),
        pattern_set(
            IntentName::GetInfo,
            &[
                "info|information|about|über|tell me|erzähl mir|explain|erklären",
                "what is|was ist|describe|beschreiben",
            ],
        ),
    ]
});

pub static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b\d{1,2}:?(?:\d{2})?\s*(?:am|pm|uhr)?\b").expect("valid time pattern")
});

pub static DAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|montag|dienstag|mittwoch|donnerstag|freitag|samstag|sonntag)\b",
    )
    .expect("valid day pattern")
});

fn pattern_set(intent: IntentName, sources: &[&str]) -> IntentPatternSet {
    IntentPatternSet {
        intent,
        patterns: sources
            .iter()
            .map(|source| Regex::new(&format!("(?i){source}")).expect("valid intent pattern"))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_compile() {
        assert_eq!(INTENT_PATTERNS.len(), 5);
        assert!(TIME_PATTERN.is_match("14:00"));
        assert!(DAY_PATTERN.is_match("Montag"));
    }

    #[test]
    fn every_building_has_keywords() {
        for (building, keywords) in BUILDING_KEYWORDS {
            assert!(!keywords.is_empty(), "no keywords for {:?}", building);
        }
    }
}
