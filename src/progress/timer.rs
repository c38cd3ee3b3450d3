//! Study timer state.
//!
//! The timer is plain state; the caller drives it by calling [`StudyTimer::tick`]
//! once per second while it is running.

/// A start/stop seconds counter for a study sitting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudyTimer {
    seconds: u64,
    active: bool,
}

impl StudyTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one second if the timer is running.
    pub fn tick(&mut self) {
        if self.active {
            self.seconds += 1;
        }
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    pub fn reset(&mut self) {
        self.active = false;
        self.seconds = 0;
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Elapsed time as `m:ss`.
    pub fn formatted(&self) -> String {
        format!("{}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}
