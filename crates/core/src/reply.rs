//! Structured payloads returned to hosting layers
//!
//! [`AdvisorReply`] is the per-turn output; [`UserInsights`] is the
//! aggregate view over a user's stored interactions. Both serialize
//! with the stable snake_case identifiers from [`Intent`] and
//! [`Emotion`].

use serde::{Deserialize, Serialize};

use crate::{Emotion, Intent};

/// Engine output for a single user turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorReply {
    /// Composed reply text (never empty)
    pub response: String,
    /// Intent selected for the turn
    pub intent: Intent,
    /// Selection confidence (0.0 - 1.0)
    pub confidence: f32,
    /// Emotion detected in the user text
    pub emotion: Emotion,
    /// Whether more than one memory entry backed this turn
    pub context_aware: bool,
}

/// Aggregate view over a user's interaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserInsights {
    /// No interactions recorded for the user yet.
    NoData,
    /// Aggregates over the stored interaction window.
    Summary(InsightsSummary),
}

impl UserInsights {
    /// Whether the user has no recorded interactions.
    pub fn is_no_data(&self) -> bool {
        matches!(self, UserInsights::NoData)
    }

    /// The summary, if any interactions were recorded.
    pub fn summary(&self) -> Option<&InsightsSummary> {
        match self {
            UserInsights::Summary(summary) => Some(summary),
            UserInsights::NoData => None,
        }
    }
}

/// Aggregates over a user's stored interaction records.
///
/// The backing log is bounded, so totals reflect the retained window
/// rather than lifetime activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsSummary {
    /// Interaction records currently stored
    pub total_interactions: usize,
    /// Most frequent intents with their counts, highest first.
    /// Equal counts keep first-encounter order.
    pub top_interests: Vec<(Intent, usize)>,
    /// Emotions of the most recent interactions, oldest first
    pub recent_emotions: Vec<Emotion>,
    /// Conversation memory entries currently held
    pub conversation_length: usize,
}
