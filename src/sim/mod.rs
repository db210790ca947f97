//! Deterministic mini-game simulation
//!
//! All gameplay logic lives here. This module must be pure and
//! deterministic:
//! - Seeded RNG only
//! - Wall-clock time flows in through `tick(dt)` and the session timers
//! - No rendering or platform dependencies (the render pass only emits
//!   commands against the surface trait)

pub mod batting;
pub mod bowling;
pub mod catching;
pub mod memory;
pub mod render;
pub mod session;
pub mod trivia;

pub use batting::BattingState;
pub use bowling::BowlingState;
pub use catching::CatchingState;
pub use memory::{FlipOutcome, MemoryState};
pub use session::{GamePhase, GameSession, GameSummary, Key, ModeState};
pub use trivia::TriviaState;
