//! Emotion labels
//!
//! Coarse sentiment detected from user text. The label steers reply
//! framing and feeds the recent-trend view in user insights.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dominant emotion detected in a user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    /// Enthusiasm, gratitude, excitement
    Positive,
    /// Worry, stress, frustration
    Negative,
    /// Neither bucket dominates
    Neutral,
}

impl Emotion {
    /// All labels in lexicon bucket order.
    pub const ALL: [Emotion; 3] = [Emotion::Positive, Emotion::Negative, Emotion::Neutral];

    /// Stable identifier used in config files and serialized replies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Positive => "positive",
            Emotion::Negative => "negative",
            Emotion::Neutral => "neutral",
        }
    }

    /// Whether replies to this emotion get a framing prefix.
    pub fn frames_reply(&self) -> bool {
        !matches!(self, Emotion::Neutral)
    }
}

impl Default for Emotion {
    fn default() -> Self {
        Emotion::Neutral
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
