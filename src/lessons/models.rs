//! Data models for lessons

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A titled content unit belonging to a topic.
///
/// Topics are not stored entities: the set of topics is derived from the
/// distinct `topic` values across the lesson snapshot. `order` controls the
/// display position within a topic; it defaults to 0 and is not unique —
/// ties are broken by title, so duplicate values (for example after an
/// interrupted reorder swap) degrade gracefully.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: Uuid,
    pub topic: String,
    pub title: String,
    /// Rich-text body as produced by the editor (HTML blob).
    pub body: String,
    #[serde(default)]
    pub order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lesson {
    pub fn new(topic: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            topic: topic.into(),
            title: title.into(),
            body: body.into(),
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Authoring input for creating or editing a lesson.
///
/// `id: None` creates a new lesson (the service assigns it the next order
/// slot in its topic); `id: Some(..)` edits an existing one, leaving its
/// order untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub topic: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}
