//! Data models for flashcards

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A flashcard with question (front) and answer (back), tagged with the
/// topic it belongs to. Immutable after creation except for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: Uuid,
    pub topic: String,
    pub front: String,
    pub back: String,
    pub created_at: DateTime<Utc>,
}

impl Flashcard {
    pub fn new(topic: impl Into<String>, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            topic: topic.into(),
            front: front.into(),
            back: back.into(),
            created_at: Utc::now(),
        }
    }
}

/// Group the flashcard snapshot by topic, topics in sorted order.
pub fn group_by_topic(cards: &[Flashcard]) -> BTreeMap<String, Vec<Flashcard>> {
    let mut grouped: BTreeMap<String, Vec<Flashcard>> = BTreeMap::new();
    for card in cards {
        grouped.entry(card.topic.clone()).or_default().push(card.clone());
    }
    grouped
}
