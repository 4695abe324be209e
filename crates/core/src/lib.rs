//! Core types for the disha career guidance engine
//!
//! This crate provides the shared vocabulary used across all other crates:
//! - Closed intent and emotion sets with stable wire identifiers
//! - Conversation memory and interaction log records
//! - Structured reply and insights payloads for hosting layers

pub mod conversation;
pub mod emotion;
pub mod intent;
pub mod reply;

pub use conversation::{ConversationEntry, InteractionRecord};
pub use emotion::Emotion;
pub use intent::Intent;
pub use reply::{AdvisorReply, InsightsSummary, UserInsights};
