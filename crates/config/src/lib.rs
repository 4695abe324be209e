//! Configuration for the disha career guidance engine
//!
//! Supports loading configuration from:
//! - YAML files (response catalog, knowledge tables)
//! - Environment variables with the `DISHA` prefix (engine tunables)
//! - Built-in defaults matching the shipped catalog
//!
//! The catalog is read-only after startup: it is validated once during
//! engine construction and malformed content is fatal there, never at
//! turn time.

pub mod catalog;
pub mod constants;
pub mod knowledge;
pub mod settings;

pub use catalog::{
    EmotionLexicon, FollowUpSuffix, FramingTexts, IntentProfile, ProactiveSuggestion,
    ResponseCatalog, ResponseTables,
};
pub use knowledge::{CareerKnowledge, CollegeKnowledge, KnowledgeBase, ScholarshipKnowledge};
pub use settings::{
    load_settings, AdvisorSettings, InsightsSettings, MemorySettings, ScoringSettings,
};

use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("No profile defined for intent: {0}")]
    MissingIntent(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
