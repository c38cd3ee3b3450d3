//! Per-user mastery tracking and progress aggregation.

mod models;
mod timer;
mod tracker;

pub use models::MasteryRecord;
pub use timer::StudyTimer;
pub use tracker::{
    overall_progress, recommend_next_lesson, topic_progress, topic_summaries, Recommendation,
    TopicSummary,
};
