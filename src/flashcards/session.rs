//! Flashcard study session state machine.
//!
//! A session is an ephemeral, shuffled traversal of one topic's cards. Its
//! three states are idle (no session value exists — the caller holds an
//! `Option<StudySession>` and drops it to exit), active, and complete
//! (cursor has run past the last card). Nothing about a session is
//! persisted: exiting discards partial progress.

use rand::seq::SliceRandom;
use rand::Rng;

use super::models::Flashcard;

/// An in-progress traversal of a shuffled deck.
#[derive(Debug, Clone)]
pub struct StudySession {
    topic: String,
    cards: Vec<Flashcard>,
    cursor: usize,
    flipped: bool,
}

impl StudySession {
    /// Start a session over `cards`, shuffled into a fresh permutation.
    pub fn start(topic: impl Into<String>, cards: Vec<Flashcard>) -> Self {
        Self::start_with(topic, cards, &mut rand::thread_rng())
    }

    /// As [`StudySession::start`], with a caller-supplied RNG.
    pub fn start_with<R: Rng + ?Sized>(
        topic: impl Into<String>,
        mut cards: Vec<Flashcard>,
        rng: &mut R,
    ) -> Self {
        cards.shuffle(rng);
        Self {
            topic: topic.into(),
            cards,
            cursor: 0,
            flipped: false,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Position of the current card. Always in `[0, len]`; `len` means the
    /// deck has been completed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Whether the deck has been traversed. Also guards against a cursor
    /// left out of range by external card deletion: any cursor at or past
    /// the end counts as complete.
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.cards.len()
    }

    /// The card under the cursor, or `None` once the session is complete.
    pub fn current(&self) -> Option<&Flashcard> {
        self.cards.get(self.cursor)
    }

    /// Toggle between front and back of the current card.
    pub fn flip(&mut self) {
        if !self.is_complete() {
            self.flipped = !self.flipped;
        }
    }

    /// Advance to the next card, front side up. Advancing from the last
    /// card completes the session; advancing a complete session is a no-op.
    pub fn next(&mut self) {
        if !self.is_complete() {
            self.cursor += 1;
            self.flipped = false;
        }
    }

    /// Step back one card, front side up. No-op at the first card and once
    /// the session is complete.
    pub fn prev(&mut self) {
        if self.cursor > 0 && !self.is_complete() {
            self.cursor -= 1;
            self.flipped = false;
        }
    }

    /// Marking a card known just moves on; cards are not re-queued.
    pub fn mark_known(&mut self) {
        self.next();
    }

    /// Re-shuffle the whole deck and start over. Callable while active or
    /// complete; the session is active again afterwards unless the deck is
    /// empty.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// As [`StudySession::shuffle`], with a caller-supplied RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.cursor = 0;
        self.flipped = false;
    }
}
