use crate::models::{Entity, EntityKind, Intent, IntentName};
use crate::tables::{BUILDING_KEYWORDS, DAY_PATTERN, INTENT_PATTERNS, TIME_PATTERN};

pub fn normalize_text(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Classifies a chat message into one of the fixed intents.
///
/// Candidates are evaluated in the declaration order of `INTENT_PATTERNS`
/// and a later candidate replaces the current best only on strictly greater
/// confidence, so equal-confidence ties resolve to the earliest declared
/// intent. When nothing matches, the result is `general` at 0.3 with no
/// entities, which any real match (floor 0.6) outranks.
pub fn extract_intent(message: &str) -> Intent {
    let lower = message.to_lowercase();
    let mut best = Intent {
        name: IntentName::General,
        confidence: 0.3,
        entities: Vec::new(),
    };

    for set in INTENT_PATTERNS.iter() {
        for pattern in &set.patterns {
            if let Some(found) = pattern.find(&lower) {
                let confidence = match_confidence(&lower, found.as_str());
                if confidence > best.confidence {
                    best = Intent {
                        name: set.intent,
                        confidence,
                        entities: extract_entities(message),
                    };
                }
            }
        }
    }

    best
}

/// Scans a message for building, time and day mentions. Entities are grouped
/// building, then time, then day; consumers pick the first of each kind.
pub fn extract_entities(message: &str) -> Vec<Entity> {
    let mut entities = Vec::new();
    let lower = message.to_lowercase();

    for (building, keywords) in BUILDING_KEYWORDS {
        for keyword in *keywords {
            for (index, matched) in lower.match_indices(keyword) {
                let start = char_offset(&lower, index);
                entities.push(Entity {
                    kind: EntityKind::Building,
                    value: building.as_str().to_string(),
                    start,
                    end: start + matched.chars().count(),
                });
            }
        }
    }

    for found in TIME_PATTERN.find_iter(message) {
        entities.push(span_entity(message, EntityKind::Time, found));
    }

    for found in DAY_PATTERN.find_iter(message) {
        entities.push(span_entity(message, EntityKind::Day, found));
    }

    entities
}

fn match_confidence(message: &str, matched: &str) -> f64 {
    let mut confidence = 0.6;

    let coverage = matched.chars().count() as f64 / message.chars().count() as f64;
    confidence += coverage * 0.3;

    if matched == message.trim() {
        confidence += 0.2;
    }

    confidence.min(1.0)
}

fn span_entity(message: &str, kind: EntityKind, found: regex::Match<'_>) -> Entity {
    let start = char_offset(message, found.start());
    Entity {
        kind,
        value: found.as_str().to_string(),
        start,
        end: start + found.as_str().chars().count(),
    }
}

fn char_offset(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_stays_in_unit_interval() {
        for message in [
            "hours",
            "where is the library",
            "contact contact contact contact",
            "x",
            "wann hat die mensa geöffnet",
        ] {
            let intent = extract_intent(message);
            assert!(
                (0.0..=1.0).contains(&intent.confidence),
                "confidence {} out of range for {:?}",
                intent.confidence,
                message
            );
        }
    }

    #[test]
    fn unmatched_text_falls_back_to_general() {
        let intent = extract_intent("asdkjasd");
        assert_eq!(intent.name, IntentName::General);
        assert_eq!(intent.confidence, 0.3);
        assert!(intent.entities.is_empty());
    }

    #[test]
    fn empty_input_yields_general() {
        let intent = extract_intent("");
        assert_eq!(intent.name, IntentName::General);
        assert_eq!(intent.confidence, 0.3);
    }

    #[test]
    fn exact_match_scores_higher_than_substring_match() {
        let exact = extract_intent("hours");
        let embedded = extract_intent("what are the hours of the gym today");
        assert_eq!(exact.name, IntentName::GetHours);
        assert_eq!(embedded.name, IntentName::GetHours);
        assert!(exact.confidence > embedded.confidence);
    }

    #[test]
    fn classifies_english_directions_question() {
        let intent = extract_intent("Where is the library?");
        assert_eq!(intent.name, IntentName::FindBuilding);
        assert!(intent
            .entities
            .iter()
            .any(|e| e.kind == EntityKind::Building && e.value == "library"));
    }

    #[test]
    fn classifies_german_hours_question() {
        let intent = extract_intent("Wann hat die Mensa geöffnet?");
        assert_eq!(intent.name, IntentName::GetHours);
        assert!(intent
            .entities
            .iter()
            .any(|e| e.kind == EntityKind::Building && e.value == "cafeteria"));
    }

    #[test]
    fn every_keyword_alone_yields_its_building() {
        for (building, keywords) in crate::tables::BUILDING_KEYWORDS {
            for keyword in *keywords {
                let entities = extract_entities(keyword);
                assert!(
                    entities.iter().any(|e| e.kind == EntityKind::Building
                        && e.value == building.as_str()),
                    "keyword {:?} did not produce {:?}",
                    keyword,
                    building
                );
            }
        }
    }

    #[test]
    fn extraction_is_idempotent() {
        let message = "Find the library and the mensa on Monday at 14:00";
        assert_eq!(extract_entities(message), extract_entities(message));
    }

    #[test]
    fn entities_group_building_then_time_then_day() {
        let entities = extract_entities("contact info monday 14:00");
        let day_position = entities
            .iter()
            .position(|e| e.kind == EntityKind::Day && e.value == "monday")
            .expect("day entity");
        let time_position = entities
            .iter()
            .position(|e| e.kind == EntityKind::Time && e.value == "14:00")
            .expect("time entity");
        assert!(time_position < day_position);
        assert!(entities
            .iter()
            .take(time_position)
            .all(|e| e.kind == EntityKind::Building));
    }

    #[test]
    fn repeated_keyword_occurrences_all_match() {
        let entities = extract_entities("library or library?");
        let libraries = entities
            .iter()
            .filter(|e| e.kind == EntityKind::Building && e.value == "library")
            .count();
        assert_eq!(libraries, 2);
    }

    #[test]
    fn entity_offsets_are_character_positions() {
        let entities = extract_entities("wo ist die bücherei? montag!");
        let day = entities
            .iter()
            .find(|e| e.kind == EntityKind::Day)
            .expect("day entity");
        assert_eq!(day.value, "montag");
        assert_eq!(day.start, 21);
        assert_eq!(day.end, 27);
    }

    #[test]
    fn time_matching_is_non_overlapping_left_to_right() {
        // the raw match keeps the whitespace consumed ahead of the optional
        // am/pm/uhr suffix when another word follows
        let entities = extract_entities("open 9:00 to 17:00");
        let times: Vec<&str> = entities
            .iter()
            .filter(|e| e.kind == EntityKind::Time)
            .map(|e| e.value.as_str())
            .collect();
        assert_eq!(times, vec!["9:00 ", "17:00"]);
    }

    #[test]
    fn time_suffixes_are_captured() {
        let entities = extract_entities("from 9am until 5 pm");
        let times: Vec<&str> = entities
            .iter()
            .filter(|e| e.kind == EntityKind::Time)
            .map(|e| e.value.as_str())
            .collect();
        assert_eq!(times, vec!["9am", "5 pm"]);
    }

    #[test]
    fn normalizes_whitespace() {
        assert_eq!(normalize_text("  where   is\tthe library \n"), "where is the library");
    }
}
