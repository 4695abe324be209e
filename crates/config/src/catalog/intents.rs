//! Intent profiles
//!
//! The patterns, weight, and reply templates for one recognized intent.
//! Patterns are regular expressions applied to lower-cased text, so the
//! shipped defaults stay lower-case too.

use serde::{Deserialize, Serialize};

use disha_core::Intent;

/// Patterns, weight, and reply templates for one intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentProfile {
    /// Intent this profile belongs to
    pub intent: Intent,
    /// Match patterns (regular expressions over lower-cased text)
    pub patterns: Vec<String>,
    /// Base weight (0.0 - 1.0)
    pub weight: f32,
    /// Candidate reply templates, chosen from uniformly
    pub templates: Vec<String>,
}

impl IntentProfile {
    /// Number of patterns, used as the score denominator.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Shipped profiles in scoring order.
pub(crate) fn default_profiles() -> Vec<IntentProfile> {
    vec![
        IntentProfile {
            intent: Intent::Greeting,
            patterns: strings(&[
                r"\b(hello|hi|hey|good morning|good afternoon|good evening)\b",
                r"\b(how are you|how do you do)\b",
                r"\b(nice to meet you|pleased to meet you)\b",
            ]),
            weight: 0.9,
            templates: strings(&[
                "Hello! I'm your advanced AI assistant. How can I help you today?",
                "Hi there! I'm here to assist you with career guidance and educational planning.",
                "Welcome! I can help you with colleges, scholarships, and career advice.",
            ]),
        },
        IntentProfile {
            intent: Intent::Colleges,
            patterns: strings(&[
                r"\b(college|university|institution|admission|courses|degree)\b",
                r"\b(engineering|medical|arts|commerce|science)\b",
                r"\b(jammu|srinagar|kashmir|district)\b",
                r"\b(undergraduate|postgraduate|bachelor|master)\b",
            ]),
            weight: 0.8,
            templates: strings(&[
                "I can help you find the perfect college! What field of study interests you?",
                "Let me assist you with college information. Are you looking for specific courses or locations?",
                "I have detailed information about colleges across J&K. What would you like to know?",
            ]),
        },
        IntentProfile {
            intent: Intent::Scholarships,
            patterns: strings(&[
                r"\b(scholarship|financial aid|funding|grant|money|tuition)\b",
                r"\b(merit|need-based|government|private)\b",
                r"\b(afford|expensive|cost|fee)\b",
            ]),
            weight: 0.8,
            templates: strings(&[
                "I can help you find scholarships! What's your current education level?",
                "Let me search for funding opportunities. Are you looking for merit-based or need-based scholarships?",
                "I have information about various scholarship programs. What field of study are you pursuing?",
            ]),
        },
        IntentProfile {
            intent: Intent::CareerGuidance,
            patterns: strings(&[
                r"\b(career|job|profession|future|what should i do)\b",
                r"\b(aptitude|quiz|test|guidance|counseling)\b",
                r"\b(confused|unsure|don't know|help me decide)\b",
            ]),
            weight: 0.8,
            templates: strings(&[
                "I can help you discover your career path! Let's start with your interests and strengths.",
                "Career planning is exciting! What subjects or activities do you enjoy most?",
                "I'll help you find the perfect career match. Are you ready to take our aptitude test?",
            ]),
        },
        IntentProfile {
            intent: Intent::EmotionalSupport,
            patterns: strings(&[
                r"\b(stressed|anxious|worried|nervous|scared)\b",
                r"\b(difficult|hard|challenging|struggling)\b",
                r"\b(help|support|advice|guidance)\b",
            ]),
            weight: 0.7,
            templates: strings(&[
                "I understand this can be overwhelming. You're not alone - I'm here to help you through this.",
                "It's completely normal to feel this way. Let's take it one step at a time.",
                "I'm here to support you. What specific aspect would you like help with?",
            ]),
        },
    ]
}
