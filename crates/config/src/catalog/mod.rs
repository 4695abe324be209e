//! Response catalog
//!
//! The static table driving the conversation engine: intent profiles in
//! scoring order, the emotion lexicon, and the response layering
//! tables. Loaded from YAML or built from shipped defaults, validated
//! once at engine construction, and read-only afterwards.

mod emotions;
mod intents;
mod responses;

pub use emotions::EmotionLexicon;
pub use intents::IntentProfile;
pub use responses::{FollowUpSuffix, FramingTexts, ProactiveSuggestion, ResponseTables};

use std::path::Path;

use serde::{Deserialize, Serialize};

use disha_core::Intent;

use crate::ConfigError;
use intents::default_profiles;

/// The full response catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseCatalog {
    /// Intent profiles in scoring order
    #[serde(default = "default_profiles")]
    pub intents: Vec<IntentProfile>,

    /// Emotion keyword buckets
    #[serde(default)]
    pub emotions: EmotionLexicon,

    /// Response layering tables
    #[serde(default)]
    pub responses: ResponseTables,
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        Self {
            intents: default_profiles(),
            emotions: EmotionLexicon::default(),
            responses: ResponseTables::default(),
        }
    }
}

impl ResponseCatalog {
    /// Load a catalog from a YAML file. Sections absent from the file
    /// fall back to the shipped defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::FileNotFound(format!("{}: {}", path.as_ref().display(), e))
        })?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Profile for an intent.
    pub fn profile(&self, intent: Intent) -> Result<&IntentProfile, ConfigError> {
        self.intents
            .iter()
            .find(|p| p.intent == intent)
            .ok_or_else(|| ConfigError::MissingIntent(intent.as_str().to_string()))
    }

    /// Validate the catalog. Called once at engine construction;
    /// malformed content is fatal there, never at turn time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, profile) in self.intents.iter().enumerate() {
            if self.intents[..i].iter().any(|p| p.intent == profile.intent) {
                return Err(ConfigError::InvalidValue {
                    field: format!("intents.{}", profile.intent),
                    message: "Duplicate profile for intent".to_string(),
                });
            }
        }

        for intent in Intent::ALL {
            let profile = self.profile(intent)?;

            if profile.patterns.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("intents.{}.patterns", intent),
                    message: "At least one pattern is required".to_string(),
                });
            }

            if profile.templates.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("intents.{}.templates", intent),
                    message: "At least one template is required".to_string(),
                });
            }

            if !(0.0..=1.0).contains(&profile.weight) {
                return Err(ConfigError::InvalidValue {
                    field: format!("intents.{}.weight", intent),
                    message: format!("Weight {} outside 0.0 - 1.0", profile.weight),
                });
            }

            if profile.weight == 0.0 {
                tracing::warn!(intent = %intent, "Profile weight is 0.0; this intent can never score");
            }
        }

        if !self.responses.proactive_template.contains("{suggestion}") {
            return Err(ConfigError::InvalidValue {
                field: "responses.proactive_template".to_string(),
                message: "Missing {suggestion} placeholder".to_string(),
            });
        }

        if self.responses.cue_phrases.iter().any(|c| c.is_empty()) {
            tracing::warn!("Empty cue phrase matches every turn; fallback will always fire");
        }

        Ok(())
    }
}
