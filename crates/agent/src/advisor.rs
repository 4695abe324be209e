//! Advisor facade
//!
//! Wires the detectors, context store, composer, and knowledge index
//! into the public operations: [`CareerAdvisor::respond`],
//! [`CareerAdvisor::insights`], and [`CareerAdvisor::detailed_answer`].
//!
//! Each turn holds the user's context lock from scoring through
//! recording, so concurrent turns for one user serialize while other
//! users proceed in parallel.

use disha_config::{AdvisorSettings, ConfigError, KnowledgeBase, ResponseCatalog};
use disha_core::{AdvisorReply, ConversationEntry, Intent, InteractionRecord, UserInsights};

use crate::context::ContextStore;
use crate::emotion::EmotionDetector;
use crate::insights;
use crate::intent::IntentMatcher;
use crate::knowledge::KnowledgeIndex;
use crate::response::{RandomSelector, ResponseComposer, TemplateSelector};

/// Rule-based conversation engine for career guidance.
#[derive(Debug)]
pub struct CareerAdvisor {
    settings: AdvisorSettings,
    emotion: EmotionDetector,
    matcher: IntentMatcher,
    composer: ResponseComposer,
    knowledge: KnowledgeIndex,
    store: ContextStore,
}

impl CareerAdvisor {
    /// Build with the shipped catalog, knowledge tables, and settings.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_catalog(ResponseCatalog::default(), AdvisorSettings::default())
    }

    /// Build from an explicit catalog and settings.
    pub fn with_catalog(
        catalog: ResponseCatalog,
        settings: AdvisorSettings,
    ) -> Result<Self, ConfigError> {
        Self::build(
            catalog,
            KnowledgeBase::default(),
            settings,
            Box::new(RandomSelector::new()),
        )
    }

    /// Build with the shipped catalog but custom tunables.
    pub fn with_settings(settings: AdvisorSettings) -> Result<Self, ConfigError> {
        Self::with_catalog(ResponseCatalog::default(), settings)
    }

    /// Build with an injected template selector and shipped content,
    /// for reproducible runs.
    pub fn with_selector(selector: Box<dyn TemplateSelector>) -> Result<Self, ConfigError> {
        Self::build(
            ResponseCatalog::default(),
            KnowledgeBase::default(),
            AdvisorSettings::default(),
            selector,
        )
    }

    /// Full construction. Validates the catalog and settings; malformed
    /// content is fatal here, never at turn time.
    pub fn build(
        catalog: ResponseCatalog,
        knowledge: KnowledgeBase,
        settings: AdvisorSettings,
        selector: Box<dyn TemplateSelector>,
    ) -> Result<Self, ConfigError> {
        catalog.validate()?;
        settings.validate()?;

        let matcher = IntentMatcher::from_catalog(&catalog, settings.scoring.clone())?;
        let emotion = EmotionDetector::new(catalog.emotions.clone());
        let composer = ResponseComposer::new(&catalog, selector)?;
        let store = ContextStore::new(settings.memory.clone());

        tracing::info!(intents = catalog.intents.len(), "Career advisor initialized");

        Ok(Self {
            settings,
            emotion,
            matcher,
            composer,
            knowledge: KnowledgeIndex::new(knowledge),
            store,
        })
    }

    /// Process one user turn and produce a structured reply.
    pub fn respond(&self, user_id: &str, text: &str) -> AdvisorReply {
        let user_context = self.store.user(user_id);
        let mut context = user_context.lock();

        let emotion = self.emotion.detect(text);
        let selected = self.matcher.detect(text, context.last_intent());

        let continued = context.last_intent() == Some(selected.intent);
        let response = self.composer.compose(selected.intent, emotion, continued);

        let entry = ConversationEntry::new(text, selected.intent, selected.confidence, emotion);
        let record = InteractionRecord::from_entry(&entry, response.clone());
        context.push_entry(entry);
        context.push_interaction(record);

        let context_aware = context.memory_len() > 1;

        tracing::debug!(
            user = user_id,
            intent = %selected.intent,
            confidence = selected.confidence,
            emotion = %emotion,
            fallback = selected.from_fallback,
            context_aware,
            "Processed turn"
        );

        AdvisorReply {
            response,
            intent: selected.intent,
            confidence: selected.confidence,
            emotion,
            context_aware,
        }
    }

    /// Aggregate insights for a user. Reports
    /// [`UserInsights::NoData`] for users with no recorded
    /// interactions; never creates a context.
    pub fn insights(&self, user_id: &str) -> UserInsights {
        match self.store.get(user_id) {
            Some(context) => insights::summarize(&context.lock(), &self.settings.insights),
            None => UserInsights::NoData,
        }
    }

    /// Detailed knowledge answer for an intent, refined by the query.
    /// `None` for intents without knowledge tables.
    pub fn detailed_answer(&self, intent: Intent, query: &str) -> Option<String> {
        self.knowledge.detailed_answer(intent, query)
    }

    /// Number of users with recorded context.
    pub fn user_count(&self) -> usize {
        self.store.user_count()
    }
}
