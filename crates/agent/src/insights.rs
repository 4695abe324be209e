//! Interaction insights
//!
//! Aggregates a user's stored interaction records into interest counts
//! and a recent emotional trend. Counts reflect the bounded log, so
//! lifetime totals beyond its capacity are undercounted.

use disha_config::InsightsSettings;
use disha_core::{InsightsSummary, Intent, UserInsights};

use crate::context::UserContext;

/// Summarize a user's stored interactions.
pub fn summarize(context: &UserContext, settings: &InsightsSettings) -> UserInsights {
    let total = context.interaction_count();
    if total == 0 {
        return UserInsights::NoData;
    }

    // Stable sort keeps first-encounter order for tied counts
    let mut counts: Vec<(Intent, usize)> = Vec::new();
    for record in context.interactions() {
        match counts.iter_mut().find(|(intent, _)| *intent == record.intent) {
            Some((_, n)) => *n += 1,
            None => counts.push((record.intent, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(settings.top_interests_limit);

    let skip = total.saturating_sub(settings.recent_emotions_window);
    let recent_emotions = context
        .interactions()
        .skip(skip)
        .map(|record| record.emotion)
        .collect();

    UserInsights::Summary(InsightsSummary {
        total_interactions: total,
        top_interests: counts,
        recent_emotions,
        conversation_length: context.memory_len(),
    })
}
