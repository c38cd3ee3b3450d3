//! Lessons: the content units of the app, grouped by topic.

mod models;
mod ordering;
mod search;

pub use models::{Lesson, LessonDraft};
pub use ordering::{
    derive_lesson_order, derive_topic_order, next_order_for_topic, plan_lesson_move,
    MoveDirection, OrderChange,
};
pub use search::search_lessons;
