//! Progress aggregation over the lesson snapshot and mastery record.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::lessons::{derive_lesson_order, Lesson};

/// Mastery percentage for one topic: `round(100 * mastered / lessons)`,
/// 0 when the topic has no lessons.
pub fn topic_progress(lessons: &[Lesson], topic: &str, mastered: &BTreeSet<Uuid>) -> u32 {
    let in_topic: Vec<&Lesson> = lessons.iter().filter(|l| l.topic == topic).collect();
    if in_topic.is_empty() {
        return 0;
    }
    let done = in_topic.iter().filter(|l| mastered.contains(&l.id)).count();
    percentage(done, in_topic.len())
}

/// Overall mastery percentage across all lessons, 0 when there are none.
///
/// The numerator is the raw size of the mastered set, so ids of lessons
/// deleted since they were mastered still count.
pub fn overall_progress(lessons: &[Lesson], mastered: &BTreeSet<Uuid>) -> u32 {
    if lessons.is_empty() {
        return 0;
    }
    percentage(mastered.len(), lessons.len())
}

fn percentage(done: usize, total: usize) -> u32 {
    ((done as f64 / total as f64) * 100.0).round() as u32
}

/// A suggested place to resume studying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub topic: String,
    pub lesson_id: Uuid,
}

/// Pick the next lesson to study.
///
/// Scans topics in display order and selects the one with the strictly
/// lowest progress (first wins ties, so earlier-displayed topics are
/// preferred). Within it, the first unmastered lesson in display order is
/// recommended; when every lesson is mastered, the topic's first lesson.
/// `None` when there are no lessons at all.
pub fn recommend_next_lesson(
    ordered_topics: &[String],
    lessons: &[Lesson],
    mastered: &BTreeSet<Uuid>,
) -> Option<Recommendation> {
    if lessons.is_empty() {
        return None;
    }

    let mut best: Option<(&str, f64)> = None;
    for topic in ordered_topics {
        let in_topic: Vec<&Lesson> = lessons.iter().filter(|l| &l.topic == topic).collect();
        // An empty topic counts as fully studied so it is never selected.
        let progress = if in_topic.is_empty() {
            100.0
        } else {
            let done = in_topic.iter().filter(|l| mastered.contains(&l.id)).count();
            done as f64 / in_topic.len() as f64 * 100.0
        };
        if best.map_or(true, |(_, p)| progress < p) {
            best = Some((topic, progress));
        }
    }

    let (topic, _) = best?;
    let ordered = derive_lesson_order(lessons, topic);
    let next = ordered
        .iter()
        .find(|l| !mastered.contains(&l.id))
        .or_else(|| ordered.first())?;

    Some(Recommendation {
        topic: topic.to_string(),
        lesson_id: next.id,
    })
}

/// Per-topic lesson count and progress, for the dashboard grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummary {
    pub topic: String,
    pub lesson_count: usize,
    pub progress: u32,
}

/// Summaries for every topic, in display order.
pub fn topic_summaries(
    ordered_topics: &[String],
    lessons: &[Lesson],
    mastered: &BTreeSet<Uuid>,
) -> Vec<TopicSummary> {
    ordered_topics
        .iter()
        .map(|topic| TopicSummary {
            topic: topic.clone(),
            lesson_count: lessons.iter().filter(|l| &l.topic == topic).count(),
            progress: topic_progress(lessons, topic, mastered),
        })
        .collect()
}
