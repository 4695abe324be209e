//! Response composition
//!
//! Builds the reply text in fixed layers: a base template picked from
//! the selected intent's pool, an emotion framing prefix, a continuity
//! follow-up suffix when the topic repeats, and a proactive cross-topic
//! suggestion for knowledge-backed intents.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use disha_config::{ConfigError, ResponseCatalog, ResponseTables};
use disha_core::{Emotion, Intent};

/// Source of template choices, injectable for deterministic tests.
pub trait TemplateSelector: Send {
    /// Pick an index in `0..len`. Callers guarantee `len >= 1`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform random template selection.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded selection for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSelector for RandomSelector {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed index sequence, wrapping at the end. Out-of-range
/// indices wrap modulo the pool size.
pub struct SequenceSelector {
    indices: Vec<usize>,
    cursor: usize,
}

impl SequenceSelector {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, cursor: 0 }
    }
}

impl TemplateSelector for SequenceSelector {
    fn pick(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        index % len
    }
}

/// Layered response composer.
///
/// Snapshots the per-intent template pools and layering tables at
/// construction so composition stays total at turn time.
pub struct ResponseComposer {
    templates: Vec<(Intent, Vec<String>)>,
    tables: ResponseTables,
    selector: Mutex<Box<dyn TemplateSelector>>,
}

impl std::fmt::Debug for ResponseComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseComposer")
            .field("templates", &self.templates)
            .field("tables", &self.tables)
            .finish_non_exhaustive()
    }
}

impl ResponseComposer {
    /// Build from a catalog. Fails if any intent lacks a profile or has
    /// an empty template pool.
    pub fn new(
        catalog: &ResponseCatalog,
        selector: Box<dyn TemplateSelector>,
    ) -> Result<Self, ConfigError> {
        let mut templates = Vec::with_capacity(Intent::ALL.len());
        for intent in Intent::ALL {
            let profile = catalog.profile(intent)?;
            if profile.templates.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("intents.{}.templates", intent),
                    message: "At least one template is required".to_string(),
                });
            }
            templates.push((intent, profile.templates.clone()));
        }

        Ok(Self {
            templates,
            tables: catalog.responses.clone(),
            selector: Mutex::new(selector),
        })
    }

    /// Compose the reply for a selected intent.
    ///
    /// `continued` is true when the previous turn carried the same
    /// intent; it gates the follow-up suffix only.
    pub fn compose(&self, intent: Intent, emotion: Emotion, continued: bool) -> String {
        let mut response = self.pick_template(intent);

        if let Some(prefix) = self.tables.framing.prefix(emotion) {
            response = format!("{} {}", prefix, response);
        }

        if continued {
            if let Some(suffix) = self.tables.follow_up(intent) {
                response.push(' ');
                response.push_str(suffix);
            }
        }

        if let Some(suggestion) = self.tables.suggestion(intent) {
            let sentence = self
                .tables
                .proactive_template
                .replace("{suggestion}", suggestion);
            response.push(' ');
            response.push_str(&sentence);
        }

        response
    }

    fn pick_template(&self, intent: Intent) -> String {
        self.templates
            .iter()
            .find(|(candidate, _)| *candidate == intent)
            .map(|(_, pool)| {
                let index = self.selector.lock().pick(pool.len());
                pool[index].clone()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer_with(indices: Vec<usize>) -> ResponseComposer {
        ResponseComposer::new(
            &ResponseCatalog::default(),
            Box::new(SequenceSelector::new(indices)),
        )
        .unwrap()
    }

    fn first_template(intent: Intent) -> String {
        ResponseCatalog::default()
            .profile(intent)
            .unwrap()
            .templates[0]
            .clone()
    }

    #[test]
    fn test_plain_greeting_has_no_layers() {
        let composer = composer_with(vec![0]);
        let text = composer.compose(Intent::Greeting, Emotion::Neutral, false);
        assert_eq!(text, first_template(Intent::Greeting));
    }

    #[test]
    fn test_negative_emotion_prepends_framing() {
        let composer = composer_with(vec![0]);
        let text = composer.compose(Intent::EmotionalSupport, Emotion::Negative, false);
        assert!(text.starts_with("I understand this might be challenging. "));
        assert!(text.contains(&first_template(Intent::EmotionalSupport)));
    }

    #[test]
    fn test_positive_emotion_prepends_framing() {
        let composer = composer_with(vec![0]);
        let text = composer.compose(Intent::Greeting, Emotion::Positive, false);
        assert_eq!(
            text,
            format!("That's exciting! {}", first_template(Intent::Greeting))
        );
    }

    #[test]
    fn test_continued_topic_appends_follow_up() {
        let composer = composer_with(vec![0]);
        let text = composer.compose(Intent::Colleges, Emotion::Neutral, true);
        assert!(text.contains("Based on our previous discussion about colleges"));
    }

    #[test]
    fn test_follow_up_requires_continuation() {
        let composer = composer_with(vec![0]);
        let text = composer.compose(Intent::Colleges, Emotion::Neutral, false);
        assert!(!text.contains("Based on our previous discussion"));
    }

    #[test]
    fn test_career_guidance_has_no_follow_up_even_when_continued() {
        let composer = composer_with(vec![0]);
        let text = composer.compose(Intent::CareerGuidance, Emotion::Neutral, true);
        assert!(!text.contains("Based on our previous discussion"));
        assert!(!text.contains("Since we talked"));
        // the proactive sentence still applies
        assert!(text.contains("I think you might also be interested in"));
    }

    #[test]
    fn test_proactive_suggestion_for_knowledge_intents() {
        let composer = composer_with(vec![0, 0, 0]);

        let colleges = composer.compose(Intent::Colleges, Emotion::Neutral, false);
        assert!(colleges.ends_with(
            "I think you might also be interested in scholarship opportunities for your chosen field."
        ));

        let scholarships = composer.compose(Intent::Scholarships, Emotion::Neutral, false);
        assert!(scholarships.contains("career guidance to help you plan your future"));

        let support = composer.compose(Intent::EmotionalSupport, Emotion::Neutral, false);
        assert!(!support.contains("I think you might also be interested in"));
    }

    #[test]
    fn test_all_layers_stack_in_order() {
        let composer = composer_with(vec![1]);
        let text = composer.compose(Intent::Scholarships, Emotion::Negative, true);

        let base = ResponseCatalog::default()
            .profile(Intent::Scholarships)
            .unwrap()
            .templates[1]
            .clone();
        let expected = format!(
            "I understand this might be challenging. {} Since we talked about scholarships, are you interested in application deadlines or eligibility criteria? Based on what you've told me, I think you might also be interested in career guidance to help you plan your future.",
            base
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_sequence_selector_walks_template_pool() {
        let composer = composer_with(vec![0, 1, 2]);

        let catalog = ResponseCatalog::default();
        let pool = &catalog.profile(Intent::Greeting).unwrap().templates;

        for expected in pool.iter() {
            let text = composer.compose(Intent::Greeting, Emotion::Neutral, false);
            assert_eq!(&text, expected);
        }
    }

    #[test]
    fn test_sequence_selector_wraps_out_of_range() {
        let mut selector = SequenceSelector::new(vec![7]);
        assert_eq!(selector.pick(3), 1);
    }

    #[test]
    fn test_seeded_selector_is_reproducible() {
        let mut a = RandomSelector::seeded(42);
        let mut b = RandomSelector::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.pick(3), b.pick(3));
        }
    }

    #[test]
    fn test_empty_template_pool_is_rejected() {
        let mut catalog = ResponseCatalog::default();
        catalog.intents[0].templates.clear();

        let err =
            ResponseComposer::new(&catalog, Box::new(SequenceSelector::new(vec![0]))).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. }
            if field == "intents.greeting.templates"));
    }
}
