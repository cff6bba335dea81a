//! Input mapping.
//!
//! Pointer, keyboard and touch events all boil down to two logical
//! triggers: start a round, or reset the game. The mapper does not filter
//! repeats; the controller ignores starts while a round is rolling.
//!
//! The mapper also watches for the classic Up Up Down Down Left Right Left
//! Right B A key sequence. Its progress lives in the mapper instance, so two
//! mappers never share it.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// What an event was aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    RollButton,
    ResetButton,
    /// A player's die image.
    Die(Player),
    /// Anywhere else on the page.
    Background,
}

/// Keys the game cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Space,
    R,
    A,
    B,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// A raw input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// Mouse click or tap on a target.
    Pointer(Target),
    /// Key press, with whether Ctrl was held.
    Key { code: KeyCode, ctrl: bool },
    /// Touch start on a target.
    Touch(Target),
}

impl InputEvent {
    /// Plain key press without modifiers.
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        InputEvent::Key { code, ctrl: false }
    }

    /// Key press with Ctrl held.
    #[must_use]
    pub fn ctrl_key(code: KeyCode) -> Self {
        InputEvent::Key { code, ctrl: true }
    }
}

/// Logical action requested by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    StartRound,
    Reset,
    /// The secret key sequence was completed.
    SecretUnlocked,
}

/// Up Up Down Down Left Right Left Right B A.
pub const SECRET_SEQUENCE: [KeyCode; 10] = [
    KeyCode::ArrowUp,
    KeyCode::ArrowUp,
    KeyCode::ArrowDown,
    KeyCode::ArrowDown,
    KeyCode::ArrowLeft,
    KeyCode::ArrowRight,
    KeyCode::ArrowLeft,
    KeyCode::ArrowRight,
    KeyCode::B,
    KeyCode::A,
];

/// Tracks progress through a fixed key sequence.
#[derive(Clone, Debug)]
pub struct SequenceTracker {
    sequence: Vec<KeyCode>,
    matched: usize,
}

impl SequenceTracker {
    /// Track an arbitrary sequence.
    ///
    /// # Panics
    ///
    /// Panics if `sequence` is empty.
    pub fn new(sequence: impl Into<Vec<KeyCode>>) -> Self {
        let sequence = sequence.into();
        assert!(!sequence.is_empty(), "Sequence must not be empty");
        Self { sequence, matched: 0 }
    }

    /// Keys matched so far.
    #[must_use]
    pub fn progress(&self) -> usize {
        self.matched
    }

    /// Feed one key. Returns true when it completes the sequence.
    ///
    /// On a wrong key, progress falls back to the longest start of the
    /// sequence that the most recent keys still spell out. Stray keys before
    /// a full, correct entry never prevent it from completing.
    pub fn feed(&mut self, key: KeyCode) -> bool {
        if self.sequence[self.matched] == key {
            self.matched += 1;
        } else {
            self.matched = self.fallback(key);
        }

        if self.matched == self.sequence.len() {
            self.matched = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.matched = 0;
    }

    /// Length of the longest sequence prefix ending with `key`, given that
    /// the keys before it were `sequence[..matched]`.
    fn fallback(&self, key: KeyCode) -> usize {
        let seen = &self.sequence[..self.matched];
        (1..=self.matched)
            .rev()
            .find(|&len| {
                let (head, last) = self.sequence[..len].split_at(len - 1);
                last[0] == key && seen.ends_with(head)
            })
            .unwrap_or(0)
    }
}

impl Default for SequenceTracker {
    fn default() -> Self {
        Self::new(SECRET_SEQUENCE)
    }
}

/// Maps raw input events to triggers.
#[derive(Clone, Debug, Default)]
pub struct InputMapper {
    secret: SequenceTracker,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Progress through the secret key sequence.
    #[must_use]
    pub fn secret_progress(&self) -> usize {
        self.secret.progress()
    }

    /// Translate an event. Returns `None` for events that do nothing.
    pub fn handle(&mut self, event: InputEvent) -> Option<Trigger> {
        match event {
            InputEvent::Pointer(Target::RollButton) => Some(Trigger::StartRound),
            InputEvent::Pointer(Target::ResetButton) => Some(Trigger::Reset),
            InputEvent::Pointer(_) => None,
            InputEvent::Touch(Target::Die(_)) => Some(Trigger::StartRound),
            InputEvent::Touch(_) => None,
            InputEvent::Key { code, ctrl } => self.handle_key(code, ctrl),
        }
    }

    fn handle_key(&mut self, code: KeyCode, ctrl: bool) -> Option<Trigger> {
        if self.secret.feed(code) {
            return Some(Trigger::SecretUnlocked);
        }

        match (code, ctrl) {
            (KeyCode::Space, _) => Some(Trigger::StartRound),
            (KeyCode::R, true) => Some(Trigger::Reset),
            _ => None,
        }
    }
}
