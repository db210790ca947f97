//! Pitchside - cricket arcade mini-games and trivia quiz engine
//!
//! Core modules:
//! - `sim`: Deterministic mini-game session simulation (batting, catching,
//!   trivia sprint, bowling, memory match)
//! - `quiz`: Trivia quiz session state machine and question bank
//! - `timers`: Deterministic timer queue owned by each session
//! - `scores`: Best-score records over a key-value collaborator
//! - `surface`: Drawing-surface collaborator trait
//! - `confetti`: Celebration particle animation

pub mod confetti;
pub mod quiz;
pub mod scores;
pub mod sim;
pub mod surface;
pub mod timers;

pub use scores::{GameMode, ScoreStore};
pub use sim::{GamePhase, GameSession};

use serde::Serialize;

/// Engine configuration constants
pub mod consts {
    /// Logical playfield size shared by every game canvas
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Session countdowns advance at 1 Hz
    pub const COUNTDOWN_INTERVAL: f32 = 1.0;
}

/// Tiered end-of-session message shown on the results screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub title: &'static str,
    pub detail: &'static str,
}
