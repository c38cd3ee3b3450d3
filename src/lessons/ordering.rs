//! Topic and lesson display ordering.
//!
//! Topic order is a persisted override (a single global record of topic
//! names) merged with whatever topics currently exist. Lesson order within
//! a topic is the `order` field with a title tie-break. Reordering is an
//! adjacent value swap, not a renumbering, so `order` values drift apart
//! over time without affecting relative positions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::models::Lesson;

/// Compute the topic display order from the lesson snapshot and the
/// persisted override.
///
/// Entries of `topic_order` that still name an existing topic come first,
/// in their persisted order; topics the override does not mention follow,
/// sorted lexicographically. An empty override yields the plain sorted
/// topic list. Total over any input: an empty snapshot yields an empty
/// sequence, and the result never contains duplicates.
pub fn derive_topic_order(lessons: &[Lesson], topic_order: &[String]) -> Vec<String> {
    let topics: BTreeSet<&str> = lessons.iter().map(|l| l.topic.as_str()).collect();
    if topic_order.is_empty() {
        return topics.into_iter().map(String::from).collect();
    }

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut ordered: Vec<String> = Vec::new();
    for topic in topic_order {
        if topics.contains(topic.as_str()) && seen.insert(topic.as_str()) {
            ordered.push(topic.clone());
        }
    }
    // BTreeSet iteration keeps the remainder lexicographically sorted.
    for topic in &topics {
        if !topic_order.iter().any(|t| t.as_str() == *topic) {
            ordered.push((*topic).to_string());
        }
    }
    ordered
}

/// Lessons of one topic in display order: ascending `order`, ties broken by
/// case-sensitive title comparison. Idempotent and total.
pub fn derive_lesson_order(lessons: &[Lesson], topic: &str) -> Vec<Lesson> {
    let mut ordered: Vec<Lesson> = lessons.iter().filter(|l| l.topic == topic).cloned().collect();
    ordered.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.title.cmp(&b.title)));
    ordered
}

/// The order slot a newly created lesson gets in `topic`:
/// `max(existing orders) + 1`, so 1 for the first lesson of a topic.
pub fn next_order_for_topic(lessons: &[Lesson], topic: &str) -> i64 {
    lessons
        .iter()
        .filter(|l| l.topic == topic)
        .map(|l| l.order)
        .max()
        .unwrap_or(0)
        + 1
}

/// Direction of an adjacent lesson move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// One half of a planned order swap: a partial update of a single lesson's
/// `order` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderChange {
    pub lesson_id: Uuid,
    pub new_order: i64,
}

/// Plan an adjacent swap of `lesson_id` within its topic.
///
/// Returns the two order updates to apply (target takes the neighbour's
/// order value and vice versa), or `None` when the lesson is unknown or
/// already sits at the requested boundary — a no-op, not an error. The two
/// updates preserve the multiset of order values in the topic.
pub fn plan_lesson_move(
    lessons: &[Lesson],
    lesson_id: Uuid,
    direction: MoveDirection,
) -> Option<[OrderChange; 2]> {
    let lesson = lessons.iter().find(|l| l.id == lesson_id)?;
    let ordered = derive_lesson_order(lessons, &lesson.topic);
    let idx = ordered.iter().position(|l| l.id == lesson_id)?;

    let neighbour = match direction {
        MoveDirection::Up => {
            if idx == 0 {
                return None;
            }
            &ordered[idx - 1]
        }
        MoveDirection::Down => {
            if idx + 1 >= ordered.len() {
                return None;
            }
            &ordered[idx + 1]
        }
    };

    Some([
        OrderChange {
            lesson_id,
            new_order: neighbour.order,
        },
        OrderChange {
            lesson_id: neighbour.id,
            new_order: lesson.order,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(topic: &str, title: &str, order: i64) -> Lesson {
        let mut l = Lesson::new(topic, title, "");
        l.order = order;
        l
    }

    #[test]
    fn test_topic_order_without_override_is_sorted() {
        let lessons = vec![
            lesson("Networking", "a", 0),
            lesson("Algorithms", "b", 0),
            lesson("Databases", "c", 0),
            lesson("Algorithms", "d", 0),
        ];
        assert_eq!(
            derive_topic_order(&lessons, &[]),
            vec!["Algorithms", "Databases", "Networking"]
        );
    }

    #[test]
    fn test_topic_order_override_first_then_rest_sorted() {
        let lessons = vec![
            lesson("Networking", "a", 0),
            lesson("Algorithms", "b", 0),
            lesson("Databases", "c", 0),
        ];
        let order = vec!["Databases".to_string(), "Retired Topic".to_string()];
        assert_eq!(
            derive_topic_order(&lessons, &order),
            vec!["Databases", "Algorithms", "Networking"]
        );
    }

    #[test]
    fn test_topic_order_has_no_duplicates() {
        let lessons = vec![lesson("A", "a", 0), lesson("B", "b", 0)];
        let order = vec!["B".to_string(), "B".to_string()];
        assert_eq!(derive_topic_order(&lessons, &order), vec!["B", "A"]);
    }

    #[test]
    fn test_topic_order_empty_snapshot() {
        let order = vec!["A".to_string()];
        assert!(derive_topic_order(&[], &order).is_empty());
    }

    #[test]
    fn test_lesson_order_ties_broken_by_title() {
        let lessons = vec![
            lesson("T", "Zebra", 1),
            lesson("T", "Apple", 1),
            lesson("Other", "First", 0),
            lesson("T", "Mango", 0),
        ];
        let ordered = derive_lesson_order(&lessons, "T");
        let titles: Vec<&str> = ordered.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Mango", "Apple", "Zebra"]);
    }

    #[test]
    fn test_lesson_order_idempotent() {
        let lessons = vec![
            lesson("T", "b", 2),
            lesson("T", "a", 2),
            lesson("T", "c", 1),
        ];
        let once = derive_lesson_order(&lessons, "T");
        let twice = derive_lesson_order(&once, "T");
        let ids: Vec<Uuid> = once.iter().map(|l| l.id).collect();
        let ids_twice: Vec<Uuid> = twice.iter().map(|l| l.id).collect();
        assert_eq!(ids, ids_twice);
    }

    #[test]
    fn test_next_order_for_topic() {
        assert_eq!(next_order_for_topic(&[], "T"), 1);
        let lessons = vec![lesson("T", "a", 3), lesson("T", "b", 1), lesson("U", "c", 9)];
        assert_eq!(next_order_for_topic(&lessons, "T"), 4);
    }

    #[test]
    fn test_move_at_boundaries_is_noop() {
        let lessons = vec![lesson("T", "a", 1), lesson("T", "b", 2)];
        let top = lessons[0].id;
        let bottom = lessons[1].id;
        assert!(plan_lesson_move(&lessons, top, MoveDirection::Up).is_none());
        assert!(plan_lesson_move(&lessons, bottom, MoveDirection::Down).is_none());
    }

    #[test]
    fn test_move_swaps_order_values() {
        let lessons = vec![
            lesson("T", "a", 1),
            lesson("T", "b", 2),
            lesson("T", "c", 3),
        ];
        let middle = lessons[1].id;
        let first = lessons[0].id;

        let [target, neighbour] =
            plan_lesson_move(&lessons, middle, MoveDirection::Up).unwrap();
        assert_eq!(target, OrderChange { lesson_id: middle, new_order: 1 });
        assert_eq!(neighbour, OrderChange { lesson_id: first, new_order: 2 });
    }

    #[test]
    fn test_move_unknown_lesson_is_noop() {
        let lessons = vec![lesson("T", "a", 1)];
        assert!(plan_lesson_move(&lessons, Uuid::new_v4(), MoveDirection::Down).is_none());
    }
}
