use crate::models::{
    BuildingId, Entity, EntityKind, Intent, IntentName, Language, QuickAction, ResponseBundle,
};

/// Builds the canned reply bundle for a classified message.
///
/// Building-specific branches resolve the first building entity; ids with no
/// template of their own intentionally reuse the library template, which is
/// long-standing behavior the chat UI depends on. Generic branches carry no
/// quick actions.
pub fn generate_contextual_response(
    intent: &Intent,
    entities: &[Entity],
    language: Language,
) -> ResponseBundle {
    let building = entities
        .iter()
        .find(|entity| entity.kind == EntityKind::Building)
        .map(|entity| entity.value.as_str());

    match intent.name {
        IntentName::FindBuilding => match building {
            Some(id) => building_directions(id, language),
            None => general_directions(language),
        },
        IntentName::GetHours => match building {
            Some(id) => building_hours(id, language),
            None => general_hours(language),
        },
        IntentName::GetContact => match building {
            Some(id) => building_contact(id, language),
            None => general_contact(language),
        },
        IntentName::GetServices => match building {
            Some(id) => building_services(id, language),
            None => general_services(language),
        },
        IntentName::GetInfo => match building {
            Some(id) => building_info(id, language),
            None => general_info(language),
        },
        IntentName::General => default_response(language),
    }
}

/// Greeting bundle shown when a chat session opens.
pub fn welcome_bundle(language: Language, user_name: Option<&str>) -> ResponseBundle {
    let name = user_name.filter(|value| !value.trim().is_empty()).unwrap_or("Student");

    let response = match language {
        Language::En => format!(
            "Hello {name}! 👋 I'm your UDE Campus Assistant. I can help you navigate the campus, find buildings, check services, and answer questions about university life. How can I assist you today?"
        ),
        Language::De => format!(
            "Hallo {name}! 👋 Ich bin Ihr UDE Campus-Assistent. Ich kann Ihnen helfen, sich auf dem Campus zurechtzufinden, Gebäude zu finden, Services zu überprüfen und Fragen zum Universitätsleben zu beantworten. Wie kann ich Ihnen heute helfen?"
        ),
    };

    ResponseBundle {
        response,
        suggestions: match language {
            Language::En => vec![
                "Find the library".to_string(),
                "Show dining options".to_string(),
                "Campus map".to_string(),
                "Contact information".to_string(),
            ],
            Language::De => vec![
                "Bibliothek finden".to_string(),
                "Speisemöglichkeiten zeigen".to_string(),
                "Campus-Karte".to_string(),
                "Kontaktinformationen".to_string(),
            ],
        },
        quick_actions: [
            BuildingId::Library,
            BuildingId::Cafeteria,
            BuildingId::StudentCenter,
        ]
        .into_iter()
        .map(|building| QuickAction {
            id: building.as_str().to_string(),
            label: building.display_name(language).to_string(),
            building_id: Some(building.as_str().to_string()),
        })
        .collect(),
    }
}

fn building_directions(building_id: &str, language: Language) -> ResponseBundle {
    let building = BuildingId::parse(building_id).unwrap_or(BuildingId::Library);

    let response = match (language, building) {
        (Language::En, BuildingId::Library) => "The Central Library is located in the main campus area. I can show you the exact location!",
        (Language::En, BuildingId::Cafeteria) => "The Cafeteria/Mensa is in the central dining area. Let me guide you there!",
        (Language::En, BuildingId::StudentCenter) => "The Student Center is the heart of campus life. I'll show you the way!",
        (Language::En, BuildingId::VisaServices) => "Visa Services are in the international student support building. Here's the location!",
        (Language::En, BuildingId::Administration) => "The Administration Building handles all central services. I can direct you there!",
        (Language::En, BuildingId::UdePortals) => "UDE Portals are accessible online, but I can show you computer labs and help centers!",
        (Language::De, BuildingId::Library) => "Die Zentralbibliothek befindet sich im Hauptcampusbereich. Ich kann Ihnen den genauen Standort zeigen!",
        (Language::De, BuildingId::Cafeteria) => "Die Cafeteria/Mensa befindet sich im zentralen Essensbereich. Lassen Sie mich Sie dorthin führen!",
        (Language::De, BuildingId::StudentCenter) => "Das Studierendenzentrum ist das Herz des Campus-Lebens. Ich zeige Ihnen den Weg!",
        (Language::De, BuildingId::VisaServices) => "Die Visa-Services befinden sich im Gebäude für internationale Studierendenbetreuung. Hier ist der Standort!",
        (Language::De, BuildingId::Administration) => "Das Verwaltungsgebäude übernimmt alle zentralen Dienstleistungen. Ich kann Sie dorthin leiten!",
        (Language::De, BuildingId::UdePortals) => "UDE-Portale sind online zugänglich, aber ich kann Ihnen Computerlabore und Hilfezentren zeigen!",
    };

    ResponseBundle {
        response: response.to_string(),
        suggestions: chip_list(
            language,
            &["Show on map", "Get directions", "Building hours", "Contact info"],
            &["Auf Karte zeigen", "Wegbeschreibung", "Öffnungszeiten", "Kontakt-Info"],
        ),
        quick_actions: vec![visit_action(building_id, language)],
    }
}

fn building_hours(building_id: &str, language: Language) -> ResponseBundle {
    let building = BuildingId::parse(building_id).unwrap_or(BuildingId::Library);

    let response = match (language, building) {
        (Language::En, BuildingId::Library) => "Library Hours:\n📚 Monday-Friday: 8AM-10PM\n📚 Saturday: 9AM-8PM\n📚 Sunday: 10AM-6PM",
        (Language::En, BuildingId::Cafeteria) => "Cafeteria Hours:\n🍽️ Monday-Friday: 11AM-3PM\n🍽️ Saturday: 12PM-2PM\n🍽️ Sunday: Closed",
        (Language::En, BuildingId::StudentCenter) => "Student Center Hours:\n👥 Monday-Friday: 8AM-8PM\n👥 Saturday: 10AM-4PM\n👥 Sunday: Closed",
        (Language::En, BuildingId::VisaServices) => "Visa Services Hours:\n📋 Monday-Friday: 9AM-4PM\n📋 Weekends: Closed",
        (Language::En, BuildingId::Administration) => "Administration Hours:\n🏢 Monday-Thursday: 8AM-4PM\n🏢 Friday: 8AM-2PM\n🏢 Weekends: Closed",
        (Language::En, BuildingId::UdePortals) => "Digital Services:\n💻 Available 24/7 online\n💻 IT Support: Monday-Friday 8AM-6PM",
        (Language::De, BuildingId::Library) => "Bibliothekszeiten:\n📚 Montag-Freitag: 8-22 Uhr\n📚 Samstag: 9-20 Uhr\n📚 Sonntag: 10-18 Uhr",
        (Language::De, BuildingId::Cafeteria) => "Cafeteria-Zeiten:\n🍽️ Montag-Freitag: 11-15 Uhr\n🍽️ Samstag: 12-14 Uhr\n🍽️ Sonntag: Geschlossen",
        (Language::De, BuildingId::StudentCenter) => "Studierendenzentrum-Zeiten:\n👥 Montag-Freitag: 8-20 Uhr\n👥 Samstag: 10-16 Uhr\n👥 Sonntag: Geschlossen",
        (Language::De, BuildingId::VisaServices) => "Visa-Services-Zeiten:\n📋 Montag-Freitag: 9-16 Uhr\n📋 Wochenenden: Geschlossen",
        (Language::De, BuildingId::Administration) => "Verwaltungszeiten:\n🏢 Montag-Donnerstag: 8-16 Uhr\n🏢 Freitag: 8-14 Uhr\n🏢 Wochenenden: Geschlossen",
        (Language::De, BuildingId::UdePortals) => "Digitale Services:\n💻 24/7 online verfügbar\n💻 IT-Support: Montag-Freitag 8-18 Uhr",
    };

    ResponseBundle {
        response: response.to_string(),
        suggestions: chip_list(
            language,
            &["Visit building", "Contact info", "Services available"],
            &["Gebäude besuchen", "Kontakt-Info", "Verfügbare Services"],
        ),
        quick_actions: vec![visit_action(building_id, language)],
    }
}

fn building_contact(building_id: &str, language: Language) -> ResponseBundle {
    ResponseBundle {
        response: match language {
            Language::En => "Contact information for this building is available. I can show you the specific contact details and help you get in touch with the right department.",
            Language::De => "Kontaktinformationen für dieses Gebäude sind verfügbar. Ich kann Ihnen die spezifischen Kontaktdaten zeigen und Ihnen helfen, mit der richtigen Abteilung in Kontakt zu treten.",
        }
        .to_string(),
        suggestions: chip_list(
            language,
            &["Visit building", "General contact", "Emergency contact"],
            &["Gebäude besuchen", "Allgemeiner Kontakt", "Notfallkontakt"],
        ),
        quick_actions: vec![visit_action(building_id, language)],
    }
}

fn building_services(building_id: &str, language: Language) -> ResponseBundle {
    ResponseBundle {
        response: match language {
            Language::En => "This building offers various services to support your academic journey. I can show you detailed information about all available services and how to access them.",
            Language::De => "Dieses Gebäude bietet verschiedene Services zur Unterstützung Ihrer akademischen Laufbahn. Ich kann Ihnen detaillierte Informationen über alle verfügbaren Services und deren Zugang zeigen.",
        }
        .to_string(),
        suggestions: chip_list(
            language,
            &["Visit building", "Service hours", "How to access"],
            &["Gebäude besuchen", "Service-Zeiten", "Zugang"],
        ),
        quick_actions: vec![visit_action(building_id, language)],
    }
}

fn building_info(building_id: &str, language: Language) -> ResponseBundle {
    ResponseBundle {
        response: match language {
            Language::En => "I can provide comprehensive information about this building, including its services, hours, location, and how it can support your university experience.",
            Language::De => "Ich kann umfassende Informationen über dieses Gebäude bereitstellen, einschließlich seiner Services, Öffnungszeiten, Lage und wie es Ihre Universitätserfahrung unterstützen kann.",
        }
        .to_string(),
        suggestions: chip_list(
            language,
            &["Visit building", "Building hours", "Available services", "Contact info"],
            &["Gebäude besuchen", "Öffnungszeiten", "Verfügbare Services", "Kontakt-Info"],
        ),
        quick_actions: vec![visit_action(building_id, language)],
    }
}

fn general_directions(language: Language) -> ResponseBundle {
    ResponseBundle {
        response: match language {
            Language::En => "I can help you find any building on campus! Which specific building or service are you looking for?",
            Language::De => "Ich kann Ihnen helfen, jedes Gebäude auf dem Campus zu finden! Welches spezifische Gebäude oder welchen Service suchen Sie?",
        }
        .to_string(),
        suggestions: chip_list(
            language,
            &["Library", "Cafeteria", "Student Center", "Administration"],
            &["Bibliothek", "Cafeteria", "Studierendenzentrum", "Verwaltung"],
        ),
        quick_actions: Vec::new(),
    }
}

fn general_hours(language: Language) -> ResponseBundle {
    ResponseBundle {
        response: match language {
            Language::En => "I can provide operating hours for all campus buildings and services. Which specific building's hours would you like to know?",
            Language::De => "Ich kann Öffnungszeiten für alle Campus-Gebäude und Services bereitstellen. Welche spezifischen Gebäude-Zeiten möchten Sie wissen?",
        }
        .to_string(),
        suggestions: chip_list(
            language,
            &["Library hours", "Cafeteria hours", "Administration hours", "All hours"],
            &["Bibliothekszeiten", "Cafeteria-Zeiten", "Verwaltungszeiten", "Alle Zeiten"],
        ),
        quick_actions: Vec::new(),
    }
}

fn general_contact(language: Language) -> ResponseBundle {
    ResponseBundle {
        response: match language {
            Language::En => "Contact Information:\n\n📞 Main Campus: +49 203 379-0\n📧 General Info: info@uni-due.de\n🌐 Website: www.uni-due.de\n📍 Campus Essen: Universitätsstraße 2, 45141 Essen\n📍 Campus Duisburg: Forsthausweg 2, 47057 Duisburg",
            Language::De => "Kontaktinformationen:\n\n📞 Hauptcampus: +49 203 379-0\n📧 Allgemeine Info: info@uni-due.de\n🌐 Website: www.uni-due.de\n📍 Campus Essen: Universitätsstraße 2, 45141 Essen\n📍 Campus Duisburg: Forsthausweg 2, 47057 Duisburg",
        }
        .to_string(),
        suggestions: chip_list(
            language,
            &["Emergency contact", "Department contacts", "IT support"],
            &["Notfallkontakt", "Abteilungskontakte", "IT-Support"],
        ),
        quick_actions: Vec::new(),
    }
}

fn general_services(language: Language) -> ResponseBundle {
    ResponseBundle {
        response: match language {
            Language::En => "I can help you with information about all campus services including academic support, dining, student life, administrative services, and digital platforms. What specific service are you interested in?",
            Language::De => "Ich kann Ihnen mit Informationen über alle Campus-Services helfen, einschließlich akademischer Unterstützung, Gastronomie, Studentenleben, Verwaltungsservices und digitaler Plattformen. Welcher spezifische Service interessiert Sie?",
        }
        .to_string(),
        suggestions: chip_list(
            language,
            &["Academic services", "Student support", "Dining options", "Digital services"],
            &["Akademische Services", "Studierendenunterstützung", "Speisemöglichkeiten", "Digitale Services"],
        ),
        quick_actions: Vec::new(),
    }
}

fn general_info(language: Language) -> ResponseBundle {
    ResponseBundle {
        response: match language {
            Language::En => "I'm your UDE Campus Assistant! I can provide information about buildings, services, hours, contact details, and help you navigate campus life. What would you like to know about?",
            Language::De => "Ich bin Ihr UDE Campus-Assistent! Ich kann Informationen über Gebäude, Services, Öffnungszeiten, Kontaktdaten bereitstellen und Ihnen helfen, sich im Campus-Leben zurechtzufinden. Was möchten Sie wissen?",
        }
        .to_string(),
        suggestions: chip_list(
            language,
            &["Campus buildings", "Student services", "Operating hours", "Contact information"],
            &["Campus-Gebäude", "Studierendenservices", "Öffnungszeiten", "Kontaktinformationen"],
        ),
        quick_actions: Vec::new(),
    }
}

fn default_response(language: Language) -> ResponseBundle {
    ResponseBundle {
        response: match language {
            Language::En => "I'm here to help you navigate UDE campus! I can provide information about buildings, services, hours, and more. What would you like to know?",
            Language::De => "Ich bin hier, um Ihnen bei der Navigation auf dem UDE-Campus zu helfen! Ich kann Informationen über Gebäude, Services, Öffnungszeiten und mehr bereitstellen. Was möchten Sie wissen?",
        }
        .to_string(),
        suggestions: chip_list(
            language,
            &["Find buildings", "Campus hours", "Contact info", "Student services"],
            &["Gebäude finden", "Campus-Zeiten", "Kontakt-Info", "Studierendenservices"],
        ),
        quick_actions: Vec::new(),
    }
}

fn visit_action(building_id: &str, language: Language) -> QuickAction {
    QuickAction {
        id: "visit".to_string(),
        label: match language {
            Language::En => "Visit Building",
            Language::De => "Gebäude besuchen",
        }
        .to_string(),
        building_id: Some(building_id.to_string()),
    }
}

fn chip_list(language: Language, english: &[&str], german: &[&str]) -> Vec<String> {
    let chips = match language {
        Language::En => english,
        Language::De => german,
    };
    chips.iter().map(|chip| chip.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::{extract_entities, extract_intent};

    #[test]
    fn library_directions_scenario() {
        let message = "Where is the library?";
        let intent = extract_intent(message);
        let bundle = generate_contextual_response(&intent, &intent.entities, Language::En);

        assert!(bundle.response.starts_with("The Central Library"));
        assert_eq!(bundle.quick_actions.len(), 1);
        assert_eq!(bundle.quick_actions[0].id, "visit");
        assert_eq!(
            bundle.quick_actions[0].building_id.as_deref(),
            Some("library")
        );
    }

    #[test]
    fn german_cafeteria_hours_scenario() {
        let message = "Wann hat die Mensa geöffnet?";
        let intent = extract_intent(message);
        let bundle = generate_contextual_response(&intent, &intent.entities, Language::De);

        assert!(bundle.response.starts_with("Cafeteria-Zeiten:"));
        assert!(bundle.response.contains("🍽️ Montag-Freitag: 11-15 Uhr"));
        assert_eq!(
            bundle.quick_actions[0].building_id.as_deref(),
            Some("cafeteria")
        );
    }

    #[test]
    fn gibberish_gets_default_response_without_actions() {
        let intent = extract_intent("asdkjasd");
        let bundle = generate_contextual_response(&intent, &intent.entities, Language::En);

        assert!(bundle.response.starts_with("I'm here to help you navigate"));
        assert!(bundle.quick_actions.is_empty());
        assert!(!bundle.suggestions.is_empty());
    }

    #[test]
    fn unknown_building_id_reuses_library_template() {
        let intent = Intent {
            name: IntentName::GetHours,
            confidence: 0.8,
            entities: Vec::new(),
        };
        let entities = vec![Entity {
            kind: EntityKind::Building,
            value: "observatory".to_string(),
            start: 0,
            end: 11,
        }];

        let bundle = generate_contextual_response(&intent, &entities, Language::En);
        assert!(bundle.response.starts_with("Library Hours:"));
        // quick action still points at what was asked for
        assert_eq!(
            bundle.quick_actions[0].building_id.as_deref(),
            Some("observatory")
        );
    }

    #[test]
    fn missing_building_yields_generic_branch() {
        let intent = extract_intent("how to get to campus");
        assert_eq!(intent.name, IntentName::FindBuilding);
        let bundle = generate_contextual_response(&intent, &intent.entities, Language::En);
        assert!(bundle.quick_actions.is_empty());
        assert!(bundle.suggestions.contains(&"Library".to_string()));
    }

    #[test]
    fn responses_are_deterministic() {
        let message = "contact info monday 14:00";
        let intent = extract_intent(message);
        let entities = extract_entities(message);

        let first = generate_contextual_response(&intent, &entities, Language::De);
        let second = generate_contextual_response(&intent, &entities, Language::De);
        assert_eq!(first, second);
    }

    #[test]
    fn welcome_bundle_addresses_user_by_name() {
        let bundle = welcome_bundle(Language::En, Some("Ada"));
        assert!(bundle.response.starts_with("Hello Ada!"));
        assert_eq!(bundle.quick_actions.len(), 3);

        let anonymous = welcome_bundle(Language::De, None);
        assert!(anonymous.response.starts_with("Hallo Student!"));
    }
}
