//! Emotion lexicon
//!
//! Keyword buckets for the three emotion labels. Matching is substring
//! containment over lower-cased text, so keywords stay lower-case.

use serde::{Deserialize, Serialize};

use disha_core::Emotion;

/// Keyword buckets for emotion detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionLexicon {
    /// Enthusiasm and gratitude markers
    #[serde(default = "default_positive_keywords")]
    pub positive: Vec<String>,

    /// Worry and frustration markers
    #[serde(default = "default_negative_keywords")]
    pub negative: Vec<String>,

    /// Flat-tone markers
    #[serde(default = "default_neutral_keywords")]
    pub neutral: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_positive_keywords() -> Vec<String> {
    strings(&[
        "happy",
        "excited",
        "great",
        "wonderful",
        "amazing",
        "fantastic",
        "love",
        "like",
    ])
}

fn default_negative_keywords() -> Vec<String> {
    strings(&[
        "sad",
        "worried",
        "confused",
        "frustrated",
        "angry",
        "disappointed",
        "hate",
        "difficult",
    ])
}

fn default_neutral_keywords() -> Vec<String> {
    strings(&["okay", "fine", "alright", "normal", "regular", "standard"])
}

impl Default for EmotionLexicon {
    fn default() -> Self {
        Self {
            positive: default_positive_keywords(),
            negative: default_negative_keywords(),
            neutral: default_neutral_keywords(),
        }
    }
}

impl EmotionLexicon {
    /// Keywords for one emotion bucket.
    pub fn keywords(&self, emotion: Emotion) -> &[String] {
        match emotion {
            Emotion::Positive => &self.positive,
            Emotion::Negative => &self.negative,
            Emotion::Neutral => &self.neutral,
        }
    }
}
