//! Integration tests for the advisor flow (intent -> emotion -> response -> memory)
//!
//! These tests drive [`CareerAdvisor`] through multi-turn conversations and
//! verify the contextual behavior that falls out of the combined components.

use std::sync::Arc;
use std::thread;

use disha_agent::{
    AdvisorSettings, CareerAdvisor, Emotion, Intent, KnowledgeBase, RandomSelector,
    ResponseCatalog, SequenceSelector, UserInsights,
};

fn advisor() -> CareerAdvisor {
    CareerAdvisor::with_selector(Box::new(SequenceSelector::new(vec![0]))).unwrap()
}

/// Test that the very first turn is scored without any context
#[test]
fn test_first_greeting_turn() {
    let advisor = advisor();
    let reply = advisor.respond("student-1", "Hello");

    assert_eq!(reply.intent, Intent::Greeting);
    assert_eq!(reply.emotion, Emotion::Neutral);
    assert!(!reply.context_aware);

    // One of three greeting patterns matches, weighted 0.9
    assert!((reply.confidence - (1.0 / 3.0) * 0.9).abs() < 1e-6);

    // First template, no framing, no continuity suffix
    assert_eq!(
        reply.response,
        "Hello! I'm your advanced AI assistant. How can I help you today?"
    );
}

/// Test that an unmatched message defaults to a greeting with zero confidence
#[test]
fn test_zero_match_defaults_to_greeting() {
    let advisor = advisor();
    let reply = advisor.respond("student-1", "zxcv qwerty");

    assert_eq!(reply.intent, Intent::Greeting);
    assert_eq!(reply.confidence, 0.0);
    assert!(!reply.context_aware);
}

/// Test the full follow-up flow: a low-confidence continuation with a cue
/// phrase adopts the previous topic and layers the continuity suffix
#[test]
fn test_follow_up_adopts_previous_topic() {
    let advisor = advisor();

    let first = advisor.respond("student-1", "Tell me about engineering colleges");
    assert_eq!(first.intent, Intent::Colleges);
    assert!((first.confidence - (1.0 / 4.0) * 0.8).abs() < 1e-6);
    assert!(!first.context_aware);

    let second = advisor.respond("student-1", "What about admission requirements?");
    assert_eq!(second.intent, Intent::Colleges);
    assert_eq!(second.confidence, 0.6);
    assert!(second.context_aware);

    // Template, then the continuity suffix, then the proactive suggestion
    assert_eq!(
        second.response,
        "I can help you find the perfect college! What field of study interests you? \
         Based on our previous discussion about colleges, would you like to know about \
         admission requirements or specific courses? Based on what you've told me, I \
         think you might also be interested in scholarship opportunities for your chosen field."
    );
}

/// Test that a cue phrase rescues a turn where no pattern matches at all
#[test]
fn test_cue_fallback_without_any_match() {
    let advisor = advisor();

    let first = advisor.respond("student-1", "I need career counseling");
    assert_eq!(first.intent, Intent::CareerGuidance);
    assert!((first.confidence - (2.0 / 3.0) * 1.2 * 0.8).abs() < 1e-6);

    // "scholarships" misses the singular pattern, but "what about" signals
    // a continuation of the career discussion
    let second = advisor.respond("student-1", "what about scholarships instead");
    assert_eq!(second.intent, Intent::CareerGuidance);
    assert_eq!(second.confidence, 0.6);
    assert!(second.context_aware);

    // Career guidance has no continuity suffix, only the proactive line
    assert!(!second.response.contains("Based on our previous discussion"));
    assert!(second
        .response
        .contains("specific colleges that offer programs in your area of interest"));
}

/// Test that detected emotions frame the response
#[test]
fn test_emotion_framing_prefixes_response() {
    let advisor = advisor();

    let excited = advisor.respond("student-1", "I'm so excited about engineering!");
    assert_eq!(excited.intent, Intent::Colleges);
    assert_eq!(excited.emotion, Emotion::Positive);
    assert!(excited.response.starts_with("That's exciting!"));

    let worried = advisor.respond("student-2", "I'm worried about the difficult exams");
    assert_eq!(worried.intent, Intent::EmotionalSupport);
    assert_eq!(worried.emotion, Emotion::Negative);
    assert!(worried
        .response
        .starts_with("I understand this might be challenging."));
}

/// Test that insights aggregate interests and emotions across turns
#[test]
fn test_insights_track_interests_and_emotions() {
    let advisor = advisor();

    advisor.respond("student-1", "Tell me about engineering colleges");
    advisor.respond("student-1", "admission process for degree courses");
    advisor.respond("student-1", "scholarship for tuition fee");

    let insights = advisor.insights("student-1");
    let summary = insights.summary().unwrap();

    assert_eq!(summary.total_interactions, 3);
    assert_eq!(summary.conversation_length, 3);
    assert_eq!(summary.top_interests[0], (Intent::Colleges, 2));
    assert!(summary.top_interests.contains(&(Intent::Scholarships, 1)));
    assert_eq!(summary.recent_emotions, vec![Emotion::Neutral; 3]);
}

/// Test that asking for insights never creates a user context
#[test]
fn test_insights_without_history_reports_no_data() {
    let advisor = advisor();
    advisor.respond("student-1", "Hello");

    assert!(advisor.insights("stranger").is_no_data());
    assert_eq!(advisor.user_count(), 1);
}

/// Test that both memory buffers stay within their configured bounds
#[test]
fn test_conversation_memory_is_bounded() {
    let advisor = advisor();

    for turn in 0..60 {
        advisor.respond("student-1", &format!("Tell me about engineering colleges {turn}"));
    }

    let insights = advisor.insights("student-1");
    let summary = insights.summary().unwrap();

    assert_eq!(summary.conversation_length, 10);
    assert_eq!(summary.total_interactions, 50);
    assert_eq!(summary.recent_emotions.len(), 5);
    assert_eq!(summary.top_interests[0].0, Intent::Colleges);
}

/// Test that users never see each other's context
#[test]
fn test_users_are_isolated() {
    let advisor = advisor();

    advisor.respond("student-a", "Tell me about engineering colleges");
    advisor.respond("student-a", "What about admission requirements?");

    // A fresh user starts without context even after other conversations
    let first = advisor.respond("student-b", "I need career counseling");
    assert!(!first.context_aware);

    let a = advisor.insights("student-a");
    let b = advisor.insights("student-b");
    assert_eq!(a.summary().unwrap().top_interests[0].0, Intent::Colleges);
    assert_eq!(b.summary().unwrap().top_interests[0].0, Intent::CareerGuidance);
    assert_eq!(advisor.user_count(), 2);
}

/// Test that concurrent turns across threads keep per-user counts consistent
#[test]
fn test_concurrent_turns_stay_consistent() {
    let advisor = Arc::new(advisor());

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let advisor = Arc::clone(&advisor);
            thread::spawn(move || {
                let private = format!("worker-{worker}");
                for _ in 0..10 {
                    advisor.respond("shared", "Tell me about engineering colleges");
                    advisor.respond(&private, "scholarship for tuition fee");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let shared = advisor.insights("shared");
    let summary = shared.summary().unwrap();
    assert_eq!(summary.total_interactions, 40);
    assert_eq!(summary.conversation_length, 10);
    assert_eq!(summary.top_interests[0], (Intent::Colleges, 40));

    for worker in 0..4 {
        let insights = advisor.insights(&format!("worker-{worker}"));
        assert_eq!(insights.summary().unwrap().total_interactions, 10);
    }
    assert_eq!(advisor.user_count(), 5);
}

/// Test that a seeded selector reproduces the same conversation
#[test]
fn test_seeded_selector_is_reproducible() {
    let build = || {
        CareerAdvisor::build(
            ResponseCatalog::default(),
            KnowledgeBase::default(),
            AdvisorSettings::default(),
            Box::new(RandomSelector::seeded(7)),
        )
        .unwrap()
    };
    let left = build();
    let right = build();

    let messages = [
        "Hello",
        "Tell me about engineering colleges",
        "What about admission requirements?",
        "scholarship for tuition fee",
    ];
    for message in messages {
        let l = left.respond("student-1", message);
        let r = right.respond("student-1", message);
        assert_eq!(l.response, r.response);
        assert_eq!(l.intent, r.intent);
    }
}

/// Test that detailed answers can be fetched for the intent a reply carried
#[test]
fn test_detailed_answer_follows_reply_intent() {
    let advisor = advisor();

    let reply = advisor.respond("student-1", "scholarship for tuition fee");
    assert_eq!(reply.intent, Intent::Scholarships);

    let detail = advisor
        .detailed_answer(reply.intent, "government schemes please")
        .unwrap();
    assert!(detail.starts_with("Government scholarships available:"));
    assert!(detail.contains("• Post Matric Scholarship for J&K Students"));

    // Greetings have no backing knowledge tables
    assert!(advisor.detailed_answer(Intent::Greeting, "anything").is_none());
    assert!(matches!(advisor.insights("nobody"), UserInsights::NoData));
}
