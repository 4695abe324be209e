//! Conversation intents
//!
//! The engine recognizes a fixed, closed set of topics. Declaration order
//! is the catalog scoring order; ties between equally scored intents
//! resolve to the earlier variant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversation topic recognized by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Opening pleasantries and check-ins
    Greeting,
    /// College, admission, and course queries
    Colleges,
    /// Scholarship and funding queries
    Scholarships,
    /// Career planning and aptitude queries
    CareerGuidance,
    /// Stress, worry, and reassurance
    EmotionalSupport,
}

impl Intent {
    /// All intents in declaration (scoring) order.
    pub const ALL: [Intent; 5] = [
        Intent::Greeting,
        Intent::Colleges,
        Intent::Scholarships,
        Intent::CareerGuidance,
        Intent::EmotionalSupport,
    ];

    /// Stable identifier used in config files and serialized replies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Colleges => "colleges",
            Intent::Scholarships => "scholarships",
            Intent::CareerGuidance => "career_guidance",
            Intent::EmotionalSupport => "emotional_support",
        }
    }

    /// Human-readable name for UI surfaces.
    pub fn display_name(&self) -> &'static str {
        match self {
            Intent::Greeting => "Greeting",
            Intent::Colleges => "Colleges",
            Intent::Scholarships => "Scholarships",
            Intent::CareerGuidance => "Career Guidance",
            Intent::EmotionalSupport => "Emotional Support",
        }
    }

    /// Parse a stable identifier back into an intent.
    pub fn parse(id: &str) -> Option<Intent> {
        Intent::ALL.iter().copied().find(|intent| intent.as_str() == id)
    }

    /// Whether this intent has curated knowledge tables behind it.
    pub fn has_knowledge(&self) -> bool {
        matches!(
            self,
            Intent::Colleges | Intent::Scholarships | Intent::CareerGuidance
        )
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_identifiers_are_stable() {
        assert_eq!(Intent::Greeting.as_str(), "greeting");
        assert_eq!(Intent::Colleges.as_str(), "colleges");
        assert_eq!(Intent::Scholarships.as_str(), "scholarships");
        assert_eq!(Intent::CareerGuidance.as_str(), "career_guidance");
        assert_eq!(Intent::EmotionalSupport.as_str(), "emotional_support");
    }

    #[test]
    fn test_serde_uses_snake_case_ids() {
        let json = serde_json::to_string(&Intent::CareerGuidance).unwrap();
        assert_eq!(json, "\"career_guidance\"");

        let parsed: Intent = serde_json::from_str("\"emotional_support\"").unwrap();
        assert_eq!(parsed, Intent::EmotionalSupport);
    }

    #[test]
    fn test_parse_round_trips_all_variants() {
        for intent in Intent::ALL {
            assert_eq!(Intent::parse(intent.as_str()), Some(intent));
        }
        assert_eq!(Intent::parse("unknown"), None);
    }

    #[test]
    fn test_declaration_order_starts_with_greeting() {
        assert_eq!(Intent::ALL[0], Intent::Greeting);
        assert_eq!(Intent::ALL.len(), 5);
    }

    #[test]
    fn test_knowledge_backed_intents() {
        assert!(Intent::Colleges.has_knowledge());
        assert!(Intent::Scholarships.has_knowledge());
        assert!(Intent::CareerGuidance.has_knowledge());
        assert!(!Intent::Greeting.has_knowledge());
        assert!(!Intent::EmotionalSupport.has_knowledge());
    }
}
