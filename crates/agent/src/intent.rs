//! Intent matching
//!
//! Scores every intent profile against the turn text, applies the
//! continuity boost for the previous turn's intent, and falls back to
//! that intent when a low-scoring turn carries a follow-up cue.
//!
//! Scoring per profile: matched patterns over total patterns, times the
//! multi-match boost when more than one pattern hits, times the
//! profile weight, capped at 1.0. The continuity boost is applied on
//! top without a re-cap so boosted intents keep their ordering edge;
//! only the reported confidence is clamped back into 0.0 - 1.0.

use regex::Regex;

use disha_config::{ConfigError, ResponseCatalog, ScoringSettings};
use disha_core::Intent;

/// One intent's compiled patterns and weight.
#[derive(Debug)]
struct CompiledProfile {
    intent: Intent,
    patterns: Vec<Regex>,
    weight: f32,
}

/// Intent selection for one turn.
#[derive(Debug, Clone)]
pub struct IntentMatch {
    /// Selected intent
    pub intent: Intent,
    /// Reported confidence (0.0 - 1.0)
    pub confidence: f32,
    /// Whether the cue fallback adopted the previous intent
    pub from_fallback: bool,
    /// Raw boosted score per intent, in scoring order
    pub scores: Vec<(Intent, f32)>,
}

/// Pattern-based intent matcher.
#[derive(Debug)]
pub struct IntentMatcher {
    profiles: Vec<CompiledProfile>,
    scoring: ScoringSettings,
    cue_phrases: Vec<String>,
}

impl IntentMatcher {
    /// Compile the catalog's patterns. Fails on the first invalid
    /// pattern, naming the offending field.
    pub fn from_catalog(
        catalog: &ResponseCatalog,
        scoring: ScoringSettings,
    ) -> Result<Self, ConfigError> {
        let mut profiles = Vec::with_capacity(catalog.intents.len());

        for profile in &catalog.intents {
            let mut patterns = Vec::with_capacity(profile.patterns.len());
            for (idx, pattern) in profile.patterns.iter().enumerate() {
                let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidValue {
                    field: format!("intents.{}.patterns[{}]", profile.intent, idx),
                    message: e.to_string(),
                })?;
                patterns.push(regex);
            }
            profiles.push(CompiledProfile {
                intent: profile.intent,
                patterns,
                weight: profile.weight,
            });
        }

        Ok(Self {
            profiles,
            scoring,
            cue_phrases: catalog.responses.cue_phrases.clone(),
        })
    }

    /// Score one profile against lower-cased text.
    fn score_profile(&self, lower: &str, profile: &CompiledProfile) -> f32 {
        if profile.patterns.is_empty() {
            return 0.0;
        }

        let matches = profile.patterns.iter().filter(|p| p.is_match(lower)).count();

        let mut base = matches as f32 / profile.patterns.len() as f32;
        if matches > 1 {
            base *= self.scoring.multi_match_boost;
        }

        (base * profile.weight).min(1.0)
    }

    /// Select the intent for `text`, given the intent carried by the
    /// user's previous turn.
    pub fn detect(&self, text: &str, last_intent: Option<Intent>) -> IntentMatch {
        let lower = text.to_lowercase();

        let mut scores = Vec::with_capacity(self.profiles.len());
        for profile in &self.profiles {
            let mut score = self.score_profile(&lower, profile);
            if last_intent == Some(profile.intent) {
                score *= self.scoring.continuity_boost;
            }
            scores.push((profile.intent, score));
        }

        // Strictly-greater comparison keeps declaration order on ties
        let (best_intent, best_score) = scores
            .iter()
            .copied()
            .fold(None::<(Intent, f32)>, |best, (intent, score)| match best {
                Some((_, top)) if score <= top => best,
                _ => Some((intent, score)),
            })
            .unwrap_or((Intent::Greeting, 0.0));

        if best_score < self.scoring.low_confidence_threshold {
            if let Some(previous) = last_intent {
                if self.has_cue(&lower) {
                    tracing::debug!(
                        intent = %previous,
                        best_score,
                        "Adopted previous intent via follow-up cue"
                    );
                    return IntentMatch {
                        intent: previous,
                        confidence: self.scoring.fallback_confidence,
                        from_fallback: true,
                        scores,
                    };
                }
            }
        }

        IntentMatch {
            intent: best_intent,
            confidence: best_score.min(1.0),
            from_fallback: false,
            scores,
        }
    }

    fn has_cue(&self, lower: &str) -> bool {
        self.cue_phrases.iter().any(|cue| lower.contains(cue.as_str()))
    }
}
