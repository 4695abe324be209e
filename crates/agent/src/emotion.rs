//! Emotion detection
//!
//! Keyword-bucket scorer over lower-cased text. A bucket wins only with
//! a strictly highest hit count; zero hits everywhere or a tied lead
//! yields [`Emotion::Neutral`].

use disha_config::EmotionLexicon;
use disha_core::Emotion;

/// Keyword-bucket emotion detector.
#[derive(Debug, Clone)]
pub struct EmotionDetector {
    lexicon: EmotionLexicon,
}

impl EmotionDetector {
    pub fn new(lexicon: EmotionLexicon) -> Self {
        Self { lexicon }
    }

    /// Detect the dominant emotion in `text`. Always returns a label.
    pub fn detect(&self, text: &str) -> Emotion {
        let lower = text.to_lowercase();

        let counts = Emotion::ALL.map(|emotion| {
            let hits = self
                .lexicon
                .keywords(emotion)
                .iter()
                .filter(|keyword| lower.contains(keyword.as_str()))
                .count();
            (emotion, hits)
        });

        let max = counts.iter().map(|(_, hits)| *hits).max().unwrap_or(0);
        if max == 0 {
            return Emotion::Neutral;
        }

        let mut leaders = counts
            .iter()
            .filter(|(_, hits)| *hits == max)
            .map(|(emotion, _)| *emotion);

        match (leaders.next(), leaders.next()) {
            (Some(emotion), None) => emotion,
            // A tied lead is ambiguous
            _ => Emotion::Neutral,
        }
    }
}

impl Default for EmotionDetector {
    fn default() -> Self {
        Self::new(EmotionLexicon::default())
    }
}
