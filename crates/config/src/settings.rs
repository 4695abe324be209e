//! Engine settings
//!
//! Tunables for the conversation engine, loadable from config files and
//! DISHA-prefixed environment variables. Catalog content (patterns,
//! templates, knowledge tables) lives in [`crate::catalog`] and
//! [`crate::knowledge`] instead.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{buffers, insights, scoring};
use crate::ConfigError;

/// Main engine settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdvisorSettings {
    /// Bounded per-user buffer capacities
    #[serde(default)]
    pub memory: MemorySettings,

    /// Intent scoring tunables
    #[serde(default)]
    pub scoring: ScoringSettings,

    /// Insights aggregation windows
    #[serde(default)]
    pub insights: InsightsSettings,
}

/// Per-user buffer capacities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorySettings {
    /// Conversation entries kept per user for context decisions
    #[serde(default = "default_conversation_capacity")]
    pub conversation_capacity: usize,

    /// Interaction records kept per user for insights
    #[serde(default = "default_interaction_capacity")]
    pub interaction_capacity: usize,
}

fn default_conversation_capacity() -> usize {
    buffers::CONVERSATION_CAPACITY
}

fn default_interaction_capacity() -> usize {
    buffers::INTERACTION_CAPACITY
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self {
            conversation_capacity: default_conversation_capacity(),
            interaction_capacity: default_interaction_capacity(),
        }
    }
}

/// Intent scoring tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringSettings {
    /// Multiplier applied when more than one of an intent's patterns
    /// matches the turn
    #[serde(default = "default_multi_match_boost")]
    pub multi_match_boost: f32,

    /// Multiplier applied to the intent carried by the previous turn
    #[serde(default = "default_continuity_boost")]
    pub continuity_boost: f32,

    /// Best scores below this trigger the follow-up cue fallback
    #[serde(default = "default_low_confidence_threshold")]
    pub low_confidence_threshold: f32,

    /// Confidence reported when the fallback adopts the previous intent
    #[serde(default = "default_fallback_confidence")]
    pub fallback_confidence: f32,
}

fn default_multi_match_boost() -> f32 {
    scoring::MULTI_MATCH_BOOST
}

fn default_continuity_boost() -> f32 {
    scoring::CONTINUITY_BOOST
}

fn default_low_confidence_threshold() -> f32 {
    scoring::LOW_CONFIDENCE_THRESHOLD
}

fn default_fallback_confidence() -> f32 {
    scoring::FALLBACK_CONFIDENCE
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            multi_match_boost: default_multi_match_boost(),
            continuity_boost: default_continuity_boost(),
            low_confidence_threshold: default_low_confidence_threshold(),
            fallback_confidence: default_fallback_confidence(),
        }
    }
}

/// Insights aggregation windows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsSettings {
    /// Most recent interactions whose emotions are reported
    #[serde(default = "default_recent_emotions_window")]
    pub recent_emotions_window: usize,

    /// Maximum number of top interests reported
    #[serde(default = "default_top_interests_limit")]
    pub top_interests_limit: usize,
}

fn default_recent_emotions_window() -> usize {
    insights::RECENT_EMOTIONS_WINDOW
}

fn default_top_interests_limit() -> usize {
    insights::TOP_INTERESTS_LIMIT
}

impl Default for InsightsSettings {
    fn default() -> Self {
        Self {
            recent_emotions_window: default_recent_emotions_window(),
            top_interests_limit: default_top_interests_limit(),
        }
    }
}

impl AdvisorSettings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory.conversation_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "memory.conversation_capacity".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }

        if self.memory.interaction_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "memory.interaction_capacity".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }

        if self.scoring.multi_match_boost < 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "scoring.multi_match_boost".to_string(),
                message: "Must be at least 1.0".to_string(),
            });
        }

        if self.scoring.continuity_boost < 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "scoring.continuity_boost".to_string(),
                message: "Must be at least 1.0".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.scoring.low_confidence_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "scoring.low_confidence_threshold".to_string(),
                message: "Must be between 0.0 and 1.0".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.scoring.fallback_confidence) {
            return Err(ConfigError::InvalidValue {
                field: "scoring.fallback_confidence".to_string(),
                message: "Must be between 0.0 and 1.0".to_string(),
            });
        }

        if self.insights.recent_emotions_window == 0 {
            return Err(ConfigError::InvalidValue {
                field: "insights.recent_emotions_window".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }

        if self.insights.top_interests_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "insights.top_interests_limit".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }

        if self.insights.recent_emotions_window > self.memory.interaction_capacity {
            tracing::warn!(
                window = self.insights.recent_emotions_window,
                capacity = self.memory.interaction_capacity,
                "recent_emotions_window exceeds interaction_capacity; the window can never fill"
            );
        }

        Ok(())
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (DISHA prefix, `__` separator)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<AdvisorSettings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder = builder
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("DISHA")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: AdvisorSettings = config.try_deserialize()?;
    settings.validate()?;

    Ok(settings)
}
