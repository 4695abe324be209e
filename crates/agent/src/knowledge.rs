//! Detailed topic answers
//!
//! Refines a query against the curated knowledge tables: a recognized
//! keyword picks the matching list or step sequence, otherwise the
//! intent's generic prompt asks the user to narrow down. Intents
//! without knowledge tables yield no answer.

use disha_config::KnowledgeBase;
use disha_core::Intent;

/// Keyword-refined lookup over the knowledge tables.
#[derive(Debug, Clone)]
pub struct KnowledgeIndex {
    base: KnowledgeBase,
}

impl KnowledgeIndex {
    pub fn new(base: KnowledgeBase) -> Self {
        Self { base }
    }

    /// Detailed answer for `intent`, refined by keywords in `query`.
    ///
    /// Returns `None` for intents without knowledge tables.
    pub fn detailed_answer(&self, intent: Intent, query: &str) -> Option<String> {
        let lower = query.to_lowercase();

        match intent {
            Intent::Colleges => Some(self.colleges_answer(&lower)),
            Intent::Scholarships => Some(self.scholarships_answer(&lower)),
            Intent::CareerGuidance => Some(self.career_answer(&lower)),
            Intent::Greeting | Intent::EmotionalSupport => None,
        }
    }

    fn colleges_answer(&self, lower: &str) -> String {
        let colleges = &self.base.colleges;

        if lower.contains("jammu") {
            bulleted("Here are some top colleges in Jammu:", &colleges.jammu)
        } else if lower.contains("srinagar") {
            bulleted("Here are some top colleges in Srinagar:", &colleges.srinagar)
        } else if lower.contains("admission") {
            numbered("Here's the general admission process:", &colleges.admission_steps)
        } else {
            "I can provide detailed information about colleges in Jammu, Srinagar, and other districts. What specific information are you looking for?".to_string()
        }
    }

    fn scholarships_answer(&self, lower: &str) -> String {
        let scholarships = &self.base.scholarships;

        if lower.contains("government") {
            bulleted("Government scholarships available:", &scholarships.government)
        } else if lower.contains("private") {
            bulleted("Private scholarships available:", &scholarships.private)
        } else if lower.contains("apply") || lower.contains("application") {
            bulleted("Scholarship application tips:", &scholarships.application_tips)
        } else {
            "I can help you with government scholarships, private funding, and application guidance. What type of scholarship information do you need?".to_string()
        }
    }

    fn career_answer(&self, lower: &str) -> String {
        let careers = &self.base.careers;

        if lower.contains("career") && (lower.contains("popular") || lower.contains("options")) {
            bulleted(
                "Popular career options for J&K students:",
                &careers.popular_careers,
            )
        } else if lower.contains("aptitude") {
            bulleted("Key aptitude areas assessed:", &careers.aptitude_areas)
        } else if lower.contains("plan") {
            numbered("Career planning steps:", &careers.planning_steps)
        } else {
            "I can help with career options, aptitude assessment, and planning guidance. What aspect of career guidance interests you?".to_string()
        }
    }
}

fn bulleted(heading: &str, items: &[String]) -> String {
    let lines: Vec<String> = items.iter().map(|item| format!("• {}", item)).collect();
    format!("{}\n\n{}", heading, lines.join("\n"))
}

fn numbered(heading: &str, steps: &[String]) -> String {
    let lines: Vec<String> = steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect();
    format!("{}\n\n{}", heading, lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> KnowledgeIndex {
        KnowledgeIndex::new(KnowledgeBase::default())
    }

    #[test]
    fn test_city_keyword_selects_college_list() {
        let answer = index()
            .detailed_answer(Intent::Colleges, "Which colleges are in Jammu?")
            .unwrap();
        assert!(answer.starts_with("Here are some top colleges in Jammu:\n\n"));
        assert!(answer.contains("• University of Jammu"));

        let answer = index()
            .detailed_answer(Intent::Colleges, "srinagar options please")
            .unwrap();
        assert!(answer.contains("National Institute of Technology Srinagar"));
    }

    #[test]
    fn test_admission_keyword_numbers_the_steps() {
        let answer = index()
            .detailed_answer(Intent::Colleges, "How does admission work?")
            .unwrap();
        assert!(answer.starts_with("Here's the general admission process:\n\n"));
        assert!(answer.contains("1. Check eligibility criteria for desired course"));
        assert!(answer.contains("5. Wait for merit list and counseling"));
    }

    #[test]
    fn test_city_takes_precedence_over_admission() {
        let answer = index()
            .detailed_answer(Intent::Colleges, "admission in jammu")
            .unwrap();
        assert!(answer.starts_with("Here are some top colleges in Jammu:"));
    }

    #[test]
    fn test_unrefined_college_query_gets_generic_prompt() {
        let answer = index()
            .detailed_answer(Intent::Colleges, "tell me about courses")
            .unwrap();
        assert!(answer.starts_with("I can provide detailed information about colleges"));
    }

    #[test]
    fn test_scholarship_branches() {
        let idx = index();

        let government = idx
            .detailed_answer(Intent::Scholarships, "government schemes?")
            .unwrap();
        assert!(government.contains("Post Matric Scholarship for J&K Students"));

        let private = idx
            .detailed_answer(Intent::Scholarships, "any private funding")
            .unwrap();
        assert!(private.contains("Foundation and NGO scholarships"));

        let tips = idx
            .detailed_answer(Intent::Scholarships, "how do I apply")
            .unwrap();
        assert!(tips.starts_with("Scholarship application tips:"));
        assert!(tips.contains("• Apply before deadlines"));
    }

    #[test]
    fn test_application_keyword_also_selects_tips() {
        let answer = index()
            .detailed_answer(Intent::Scholarships, "application deadline info")
            .unwrap();
        assert!(answer.starts_with("Scholarship application tips:"));
    }

    #[test]
    fn test_career_branches() {
        let idx = index();

        let options = idx
            .detailed_answer(Intent::CareerGuidance, "popular career options")
            .unwrap();
        assert!(options.starts_with("Popular career options for J&K students:"));

        let aptitude = idx
            .detailed_answer(Intent::CareerGuidance, "what does the aptitude test cover")
            .unwrap();
        assert!(aptitude.contains("Logical Reasoning and Problem Solving"));

        let plan = idx
            .detailed_answer(Intent::CareerGuidance, "help me plan my career")
            .unwrap();
        assert!(plan.contains("1. Self-assessment and interest identification"));
    }

    #[test]
    fn test_career_options_needs_both_keywords() {
        // "options" alone without "career" falls through to the generic prompt
        let answer = index()
            .detailed_answer(Intent::CareerGuidance, "what are my options")
            .unwrap();
        assert!(answer.starts_with("I can help with career options"));
    }

    #[test]
    fn test_unbacked_intents_have_no_answer() {
        let idx = index();
        assert!(idx.detailed_answer(Intent::Greeting, "hello").is_none());
        assert!(idx
            .detailed_answer(Intent::EmotionalSupport, "I'm stressed")
            .is_none());
    }

    #[test]
    fn test_custom_tables_flow_through() {
        let mut base = KnowledgeBase::default();
        base.colleges.jammu = vec!["Cluster University Jammu - Multi-disciplinary".to_string()];
        let idx = KnowledgeIndex::new(base);

        let answer = idx.detailed_answer(Intent::Colleges, "jammu").unwrap();
        assert_eq!(
            answer,
            "Here are some top colleges in Jammu:\n\n• Cluster University Jammu - Multi-disciplinary"
        );
    }
}
