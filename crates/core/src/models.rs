use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    De,
}

impl Language {
    pub fn from_optional_str(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "de" || v == "de-de" || v == "german" || v == "deutsch" => Self::De,
            _ => Self::En,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentName {
    FindBuilding,
    GetHours,
    GetContact,
    GetServices,
    GetInfo,
    General,
}

impl IntentName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FindBuilding => "find_building",
            Self::GetHours => "get_hours",
            Self::GetContact => "get_contact",
            Self::GetServices => "get_services",
            Self::GetInfo => "get_info",
            Self::General => "general",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildingId {
    Library,
    Cafeteria,
    StudentCenter,
    VisaServices,
    Administration,
    UdePortals,
}

impl BuildingId {
    pub const ALL: [BuildingId; 6] = [
        Self::Library,
        Self::Cafeteria,
        Self::StudentCenter,
        Self::VisaServices,
        Self::Administration,
        Self::UdePortals,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "library" => Some(Self::Library),
            "cafeteria" => Some(Self::Cafeteria),
            "student-center" => Some(Self::StudentCenter),
            "visa-services" => Some(Self::VisaServices),
            "administration" => Some(Self::Administration),
            "ude-portals" => Some(Self::UdePortals),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Cafeteria => "cafeteria",
            Self::StudentCenter => "student-center",
            Self::VisaServices => "visa-services",
            Self::Administration => "administration",
            Self::UdePortals => "ude-portals",
        }
    }

    pub fn display_name(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Library, Language::En) => "Library",
            (Self::Library, Language::De) => "Bibliothek",
            (Self::Cafeteria, _) => "Cafeteria",
            (Self::StudentCenter, Language::En) => "Student Center",
            (Self::StudentCenter, Language::De) => "Studierendenzentrum",
            (Self::VisaServices, Language::En) => "Visa Services",
            (Self::VisaServices, Language::De) => "Visa-Services",
            (Self::Administration, Language::En) => "Administration",
            (Self::Administration, Language::De) => "Verwaltung",
            (Self::UdePortals, Language::En) => "UDE Portals",
            (Self::UdePortals, Language::De) => "UDE-Portale",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Building,
    Time,
    Day,
}

/// A recognized span inside a chat message. `start`/`end` are character
/// offsets into the message the span was extracted from; for building
/// entities `value` is the canonical building id, for time/day entities it
/// is the raw matched substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub value: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub name: IntentName,
    pub confidence: f64,
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_id: Option<String>,
}

/// What the chat UI renders for one assistant turn: the reply text, clickable
/// follow-up suggestion chips, and building quick actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBundle {
    pub response: String,
    pub suggestions: Vec<String>,
    pub quick_actions: Vec<QuickAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatInput {
    pub session_id: Option<String>,
    pub text: String,
    pub language: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReply {
    pub response: String,
    pub suggestions: Vec<String>,
    pub quick_actions: Vec<QuickAction>,
    pub intent: IntentName,
    pub confidence: f64,
    pub language: Language,
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub at: DateTime<Utc>,
    pub user_text: String,
    pub assistant_text: String,
    pub intent: IntentName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSession {
    pub session_id: String,
    pub user_id: Option<String>,
    pub language: Language,
    pub expires_at: DateTime<Utc>,
    pub turns: Vec<ConversationTurn>,
}
