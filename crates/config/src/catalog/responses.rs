//! Response layering tables
//!
//! Everything the composer adds around the base template: emotion
//! framing prefixes, continuity follow-up suffixes, proactive
//! cross-topic suggestions, and the cue phrases recognized by the
//! low-confidence fallback.

use serde::{Deserialize, Serialize};

use disha_core::{Emotion, Intent};

/// Framing prefixes prepended for non-neutral emotions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FramingTexts {
    /// Prefix for negative emotion
    #[serde(default = "default_negative_prefix")]
    pub negative: String,

    /// Prefix for positive emotion
    #[serde(default = "default_positive_prefix")]
    pub positive: String,
}

fn default_negative_prefix() -> String {
    "I understand this might be challenging.".to_string()
}

fn default_positive_prefix() -> String {
    "That's exciting!".to_string()
}

impl Default for FramingTexts {
    fn default() -> Self {
        Self {
            negative: default_negative_prefix(),
            positive: default_positive_prefix(),
        }
    }
}

impl FramingTexts {
    /// Prefix for an emotion. Neutral turns are never framed.
    pub fn prefix(&self, emotion: Emotion) -> Option<&str> {
        match emotion {
            Emotion::Negative => Some(self.negative.as_str()),
            Emotion::Positive => Some(self.positive.as_str()),
            Emotion::Neutral => None,
        }
    }
}

/// Suffix appended when the previous turn carried the same intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowUpSuffix {
    /// Intent the suffix belongs to
    pub intent: Intent,
    /// Suffix text
    pub text: String,
}

/// Cross-topic suggestion slotted into the proactive template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProactiveSuggestion {
    /// Intent the suggestion belongs to
    pub intent: Intent,
    /// Suggestion text
    pub text: String,
}

/// All response layering tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseTables {
    /// Emotion framing prefixes
    #[serde(default)]
    pub framing: FramingTexts,

    /// Continuity suffixes. Intents without an entry get no suffix.
    #[serde(default = "default_follow_ups")]
    pub follow_ups: Vec<FollowUpSuffix>,

    /// Sentence template with a `{suggestion}` placeholder
    #[serde(default = "default_proactive_template")]
    pub proactive_template: String,

    /// Suggestion text per intent. Intents without an entry never get
    /// the proactive sentence.
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<ProactiveSuggestion>,

    /// Phrases that signal the user is continuing the previous topic,
    /// matched by substring containment over lower-cased text
    #[serde(default = "default_cue_phrases")]
    pub cue_phrases: Vec<String>,
}

fn default_follow_ups() -> Vec<FollowUpSuffix> {
    vec![
        FollowUpSuffix {
            intent: Intent::Colleges,
            text: "Based on our previous discussion about colleges, would you like to know about admission requirements or specific courses?".to_string(),
        },
        FollowUpSuffix {
            intent: Intent::Scholarships,
            text: "Since we talked about scholarships, are you interested in application deadlines or eligibility criteria?".to_string(),
        },
    ]
}

fn default_proactive_template() -> String {
    "Based on what you've told me, I think you might also be interested in {suggestion}.".to_string()
}

fn default_suggestions() -> Vec<ProactiveSuggestion> {
    vec![
        ProactiveSuggestion {
            intent: Intent::Colleges,
            text: "scholarship opportunities for your chosen field".to_string(),
        },
        ProactiveSuggestion {
            intent: Intent::Scholarships,
            text: "career guidance to help you plan your future".to_string(),
        },
        ProactiveSuggestion {
            intent: Intent::CareerGuidance,
            text: "specific colleges that offer programs in your area of interest".to_string(),
        },
    ]
}

fn default_cue_phrases() -> Vec<String> {
    [
        "also",
        "and",
        "what about",
        "how about",
        "tell me more",
        "more about",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for ResponseTables {
    fn default() -> Self {
        Self {
            framing: FramingTexts::default(),
            follow_ups: default_follow_ups(),
            proactive_template: default_proactive_template(),
            suggestions: default_suggestions(),
            cue_phrases: default_cue_phrases(),
        }
    }
}

impl ResponseTables {
    /// Continuity suffix for an intent, if one is configured.
    pub fn follow_up(&self, intent: Intent) -> Option<&str> {
        self.follow_ups
            .iter()
            .find(|f| f.intent == intent)
            .map(|f| f.text.as_str())
    }

    /// Proactive suggestion for an intent, if one is configured.
    pub fn suggestion(&self, intent: Intent) -> Option<&str> {
        self.suggestions
            .iter()
            .find(|s| s.intent == intent)
            .map(|s| s.text.as_str())
    }
}
