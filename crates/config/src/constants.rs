//! Centralized constants for the career guidance engine
//!
//! This module provides a single source of truth for the engine's
//! tunable defaults. Instead of hardcoding values in multiple files,
//! use these constants to keep settings, validation, and tests
//! consistent.

/// Bounded per-user buffer capacities
pub mod buffers {
    /// Conversation entries kept per user for context decisions
    pub const CONVERSATION_CAPACITY: usize = 10;

    /// Interaction records kept per user for insights
    pub const INTERACTION_CAPACITY: usize = 50;
}

/// Intent scoring tunables
pub mod scoring {
    /// Multiplier applied when more than one of an intent's patterns
    /// matches the turn
    pub const MULTI_MATCH_BOOST: f32 = 1.2;

    /// Multiplier applied to the intent carried by the previous turn
    pub const CONTINUITY_BOOST: f32 = 1.3;

    /// Best scores below this trigger the follow-up cue fallback
    pub const LOW_CONFIDENCE_THRESHOLD: f32 = 0.3;

    /// Confidence reported when the fallback adopts the previous intent
    pub const FALLBACK_CONFIDENCE: f32 = 0.6;
}

/// Insights aggregation windows
pub mod insights {
    /// Most recent interactions whose emotions are reported
    pub const RECENT_EMOTIONS_WINDOW: usize = 5;

    /// Maximum number of top interests reported
    pub const TOP_INTERESTS_LIMIT: usize = 3;
}
