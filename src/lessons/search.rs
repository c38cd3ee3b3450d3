//! Lesson search over the in-memory snapshot.

use super::models::Lesson;

/// Case-insensitive substring match over lesson titles and topics, in
/// snapshot order. An empty query yields no results.
pub fn search_lessons(lessons: &[Lesson], query: &str) -> Vec<Lesson> {
    if query.is_empty() {
        return Vec::new();
    }
    let q = query.to_lowercase();
    lessons
        .iter()
        .filter(|l| l.title.to_lowercase().contains(&q) || l.topic.to_lowercase().contains(&q))
        .cloned()
        .collect()
}
