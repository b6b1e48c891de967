use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use campus_core::{
    extract_intent, generate_contextual_response, normalize_text, welcome_bundle, AssistantReply,
    ChatInput, ConversationSession, ConversationTurn, IntentName, Language, ResponseBundle,
};
use campus_observability::AppMetrics;
use campus_storage::SessionRepository;
use chrono::{Duration, Utc};
use tracing::{info, instrument};
use uuid::Uuid;

const SESSION_TTL_HOURS: i64 = 24;
const MAX_TURNS_PER_SESSION: usize = 40;

/// Per-message orchestration around the stateless NLP core: normalize,
/// classify, compose the reply, then record the turn in the caller's
/// conversation session.
#[derive(Clone)]
pub struct ConciergeAgent<S>
where
    S: SessionRepository,
{
    store: Arc<S>,
    metrics: Arc<AppMetrics>,
}

impl<S> ConciergeAgent<S>
where
    S: SessionRepository,
{
    pub fn new(store: Arc<S>, metrics: Arc<AppMetrics>) -> Self {
        Self { store, metrics }
    }

    #[instrument(skip(self, input))]
    pub async fn handle_chat(&self, input: ChatInput) -> Result<AssistantReply> {
        let started = Instant::now();
        self.metrics.inc_request();

        let normalized = normalize_text(&input.text);
        let language = Language::from_optional_str(input.language.as_deref());

        let intent = extract_intent(&normalized);
        self.metrics.add_entity_matches(intent.entities.len());
        if intent.name == IntentName::General {
            self.metrics.inc_fallback();
        }

        let bundle = generate_contextual_response(&intent, &intent.entities, language);

        let session_id = input
            .session_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        self.persist_turn(
            &session_id,
            input.user_id.as_deref(),
            language,
            &normalized,
            &bundle.response,
            intent.name,
        )
        .await?;

        self.metrics.observe_latency(started.elapsed());
        info!(
            session_id = %session_id,
            language = %language.as_code(),
            intent = %intent.name.as_str(),
            confidence = intent.confidence,
            entities = intent.entities.len(),
            "chat handled"
        );

        Ok(AssistantReply {
            response: bundle.response,
            suggestions: bundle.suggestions,
            quick_actions: bundle.quick_actions,
            intent: intent.name,
            confidence: intent.confidence,
            language,
            session_id,
        })
    }

    pub fn welcome(&self, language: Language, user_name: Option<&str>) -> ResponseBundle {
        welcome_bundle(language, user_name)
    }

    pub async fn purge_expired_sessions(&self) -> Result<u64> {
        self.store.purge_expired(Utc::now()).await
    }

    async fn persist_turn(
        &self,
        session_id: &str,
        user_id: Option<&str>,
        language: Language,
        user_text: &str,
        assistant_text: &str,
        intent: IntentName,
    ) -> Result<()> {
        let mut session = self
            .store
            .load_session(session_id)
            .await?
            .unwrap_or_else(|| ConversationSession {
                session_id: session_id.to_string(),
                user_id: None,
                language,
                expires_at: Utc::now() + Duration::hours(SESSION_TTL_HOURS),
                turns: Vec::new(),
            });

        session.language = language;
        if let Some(user_id) = user_id {
            session.user_id = Some(user_id.to_string());
        }
        session.expires_at = Utc::now() + Duration::hours(SESSION_TTL_HOURS);
        session.turns.push(ConversationTurn {
            at: Utc::now(),
            user_text: user_text.to_string(),
            assistant_text: assistant_text.to_string(),
            intent,
        });

        if session.turns.len() > MAX_TURNS_PER_SESSION {
            let keep_from = session.turns.len() - MAX_TURNS_PER_SESSION;
            session.turns = session.turns.split_off(keep_from);
        }

        self.store.upsert_session(&session).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_storage::MemoryStore;

    fn agent() -> ConciergeAgent<MemoryStore> {
        ConciergeAgent::new(Arc::new(MemoryStore::new()), AppMetrics::shared())
    }

    fn input(text: &str, session_id: Option<&str>) -> ChatInput {
        ChatInput {
            session_id: session_id.map(str::to_string),
            text: text.to_string(),
            language: Some("en".to_string()),
            user_id: None,
        }
    }

    #[tokio::test]
    async fn assigns_session_id_when_missing() {
        let reply = agent()
            .handle_chat(input("where is the library", None))
            .await
            .expect("chat should succeed");

        assert!(!reply.session_id.is_empty());
        assert_eq!(reply.intent, IntentName::FindBuilding);
    }

    #[tokio::test]
    async fn keeps_session_id_across_turns() {
        let agent = agent();

        let first = agent
            .handle_chat(input("hello there", Some("s-1")))
            .await
            .expect("chat should succeed");
        let second = agent
            .handle_chat(input("library hours", Some("s-1")))
            .await
            .expect("chat should succeed");

        assert_eq!(first.session_id, "s-1");
        assert_eq!(second.session_id, "s-1");
    }

    #[tokio::test]
    async fn caps_stored_turns() {
        let agent = agent();
        let store = agent.store.clone();

        for _ in 0..45 {
            agent
                .handle_chat(input("where is the mensa", Some("busy")))
                .await
                .expect("chat should succeed");
        }

        let session = store
            .load_session("busy")
            .await
            .expect("load should succeed")
            .expect("session exists");
        assert_eq!(session.turns.len(), MAX_TURNS_PER_SESSION);
    }

    #[tokio::test]
    async fn welcome_is_language_selected() {
        let agent = agent();
        let english = agent.welcome(Language::En, Some("Kim"));
        let german = agent.welcome(Language::De, Some("Kim"));

        assert!(english.response.starts_with("Hello Kim!"));
        assert!(german.response.starts_with("Hallo Kim!"));
    }
}
