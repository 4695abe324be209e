//! Career Guidance Conversation Engine
//!
//! Features:
//! - Deterministic intent scoring over a validated pattern catalog
//! - Keyword-bucket emotion detection
//! - Bounded per-user conversation memory with continuity boosting
//! - Layered response composition (template, framing, follow-up, proactive)
//! - Interaction insights (top interests, recent emotional trend)
//! - Curated knowledge lookups for detailed topic answers
//!
//! [`CareerAdvisor`] is the facade wiring these together; the individual
//! components are public for embedders that need finer control.

pub mod advisor;
pub mod context;
pub mod emotion;
pub mod insights;
pub mod intent;
pub mod knowledge;
pub mod response;

pub use advisor::CareerAdvisor;
pub use context::{ContextStore, UserContext};
pub use emotion::EmotionDetector;
pub use insights::summarize;
pub use intent::{IntentMatch, IntentMatcher};
pub use knowledge::KnowledgeIndex;
pub use response::{RandomSelector, ResponseComposer, SequenceSelector, TemplateSelector};

// Re-export the shared vocabulary for convenience
pub use disha_config::{AdvisorSettings, ConfigError, KnowledgeBase, ResponseCatalog};
pub use disha_core::{
    AdvisorReply, ConversationEntry, Emotion, InsightsSummary, Intent, InteractionRecord,
    UserInsights,
};
