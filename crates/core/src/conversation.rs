//! Per-user conversation records
//!
//! Two record shapes back the engine's context decisions and analytics:
//! short-lived [`ConversationEntry`] items for continuity scoring, and
//! [`InteractionRecord`] items that also carry the composed reply for
//! the insights view. Both live in bounded per-user buffers owned by
//! the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Emotion, Intent};

/// One user turn as remembered for context decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationEntry {
    /// When the turn was processed
    pub timestamp: DateTime<Utc>,
    /// Raw user text
    pub text: String,
    /// Intent selected for the turn
    pub intent: Intent,
    /// Confidence reported for the turn (0.0 - 1.0)
    pub confidence: f32,
    /// Emotion detected in the text
    pub emotion: Emotion,
}

impl ConversationEntry {
    /// Create an entry stamped with the current time.
    pub fn new(
        text: impl Into<String>,
        intent: Intent,
        confidence: f32,
        emotion: Emotion,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            text: text.into(),
            intent,
            confidence,
            emotion,
        }
    }
}

/// One full exchange as kept for analytics.
///
/// Superset of [`ConversationEntry`]: the same turn fields plus the
/// reply that was sent back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// When the exchange was processed
    pub timestamp: DateTime<Utc>,
    /// Raw user text
    pub text: String,
    /// Composed reply sent to the user
    pub response: String,
    /// Intent selected for the turn
    pub intent: Intent,
    /// Confidence reported for the turn (0.0 - 1.0)
    pub confidence: f32,
    /// Emotion detected in the text
    pub emotion: Emotion,
}

impl InteractionRecord {
    /// Build the analytics record for an entry and its reply, sharing
    /// the entry's timestamp.
    pub fn from_entry(entry: &ConversationEntry, response: impl Into<String>) -> Self {
        Self {
            timestamp: entry.timestamp,
            text: entry.text.clone(),
            response: response.into(),
            intent: entry.intent,
            confidence: entry.confidence,
            emotion: entry.emotion,
        }
    }
}
