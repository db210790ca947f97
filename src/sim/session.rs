//! Shared session lifecycle for the five mini-games
//!
//! `Idle -> Running -> (Paused <-> Running) -> Ended -> Idle`. Exactly one
//! session exists at a time (navigation enforces this); the session owns
//! its timers and RNG, so a reset tears down every pending callback with
//! it and nothing can fire against a superseded run.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Feedback;
use crate::consts::COUNTDOWN_INTERVAL;
use crate::scores::{GameMode, KeyValueStore, ScoreStore};
use crate::timers::{TimerHandle, Timers};

use super::batting::{self, BattingState};
use super::bowling::{self, BowlingState};
use super::catching::{self, CatchingState};
use super::memory::{self, FlipOutcome, MemoryState};
use super::trivia::{self, TriviaState};

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Idle,
    Running,
    Paused,
    Ended,
}

/// Discrete key input the engine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
}

/// Timer events a session can arm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionTimer {
    /// 1 Hz countdown (count-up for memory, per-question for trivia)
    Clock,
    /// Mode cadence: bowl a delivery / drop a catch
    Spawn,
    /// Memory: flip a mismatched pair back face-down
    Unflip,
    /// Trivia: move to the next sprint question
    Advance,
}

/// Per-mode variant state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ModeState {
    Batting(BattingState),
    Catching(CatchingState),
    Trivia(TriviaState),
    Bowling(BowlingState),
    Memory(MemoryState),
}

/// Surfaced once a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub mode: GameMode,
    pub final_score: u32,
    /// Record after this run was submitted
    pub best_score: u32,
    pub is_record: bool,
    pub feedback: Feedback,
}

/// One play-through of a single mini-game
#[derive(Debug)]
pub struct GameSession {
    mode: GameMode,
    phase: GamePhase,
    points: u32,
    /// Remaining seconds for timed modes (per-question for trivia),
    /// elapsed seconds for memory
    clock_secs: u32,
    timers: Timers<SessionTimer>,
    /// Handle of the 1 Hz clock; trivia cancels and rearms it per question
    clock: Option<TimerHandle>,
    rng: Pcg32,
    state: ModeState,
    summary: Option<GameSummary>,
}

impl GameSession {
    /// Start a session: `Idle -> Running`, cadence timers armed
    pub fn start(mode: GameMode, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut timers = Timers::new();
        let clock = timers.repeating(COUNTDOWN_INTERVAL, SessionTimer::Clock);

        let (state, clock_secs) = match mode {
            GameMode::Batting => {
                timers.repeating(batting::BOWL_INTERVAL, SessionTimer::Spawn);
                (ModeState::Batting(BattingState::new()), batting::DURATION_SECS)
            }
            GameMode::Catching => {
                timers.repeating(catching::SPAWN_INTERVAL, SessionTimer::Spawn);
                (
                    ModeState::Catching(CatchingState::new()),
                    catching::DURATION_SECS,
                )
            }
            GameMode::Trivia => (
                ModeState::Trivia(TriviaState::new()),
                trivia::QUESTION_TIME_SECS,
            ),
            GameMode::Bowling => (
                ModeState::Bowling(BowlingState::new()),
                bowling::DURATION_SECS,
            ),
            GameMode::Memory => (ModeState::Memory(MemoryState::new(&mut rng)), 0),
        };

        log::info!("starting {} session (seed {seed})", mode.as_str());
        Self {
            mode,
            phase: GamePhase::Running,
            points: 0,
            clock_secs,
            timers,
            clock: Some(clock),
            rng,
            state,
            summary: None,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Session score under the mode's own metric: points for the timed
    /// modes, elapsed seconds for memory (lower is better there).
    pub fn score(&self) -> u32 {
        match self.mode {
            GameMode::Memory => self.clock_secs,
            _ => self.points,
        }
    }

    /// Seconds left for timed modes, seconds elapsed for memory
    pub fn clock_secs(&self) -> u32 {
        self.clock_secs
    }

    pub fn state(&self) -> &ModeState {
        &self.state
    }

    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    /// Per-frame update while `Running`: pump the timers, apply fired
    /// events, then advance moving entities by `speed * dt`.
    pub fn tick(&mut self, dt: f32) {
        if self.phase != GamePhase::Running {
            return;
        }

        for event in self.timers.advance(dt) {
            match event {
                SessionTimer::Clock => {
                    if self.mode == GameMode::Memory {
                        self.clock_secs += 1;
                    } else if self.mode == GameMode::Trivia {
                        self.trivia_clock();
                    } else {
                        self.clock_secs = self.clock_secs.saturating_sub(1);
                        if self.clock_secs == 0 {
                            self.end();
                            return;
                        }
                    }
                }
                SessionTimer::Spawn => match &mut self.state {
                    ModeState::Batting(s) => s.bowl(&mut self.rng),
                    ModeState::Catching(s) => s.spawn(&mut self.rng),
                    _ => {}
                },
                SessionTimer::Unflip => {
                    if let ModeState::Memory(s) = &mut self.state {
                        s.unflip();
                    }
                }
                SessionTimer::Advance => {
                    if self.advance_trivia() {
                        return;
                    }
                }
            }
        }

        match &mut self.state {
            ModeState::Batting(s) => s.advance(dt),
            ModeState::Catching(s) => s.advance(dt),
            _ => {}
        }
    }

    /// Per-question sprint countdown; a timeout skips the reveal and
    /// schedules the shorter advance delay.
    fn trivia_clock(&mut self) {
        let waiting = matches!(&self.state, ModeState::Trivia(s) if s.awaiting_advance);
        if waiting {
            // Stale fire from a coalesced batch
            return;
        }
        self.clock_secs = self.clock_secs.saturating_sub(1);
        if self.clock_secs == 0 {
            if let ModeState::Trivia(s) = &mut self.state {
                s.timeout();
            }
            self.cancel_clock();
            self.timers
                .once(trivia::TIMEOUT_ADVANCE_DELAY, SessionTimer::Advance);
        }
    }

    /// Step the sprint to its next question, or end the session when the
    /// list is exhausted. Returns whether the session ended.
    fn advance_trivia(&mut self) -> bool {
        let complete = match &mut self.state {
            ModeState::Trivia(s) => {
                s.advance();
                s.is_complete()
            }
            _ => return false,
        };
        if complete {
            self.end();
            return true;
        }
        self.clock_secs = trivia::QUESTION_TIME_SECS;
        self.clock = Some(self.timers.repeating(COUNTDOWN_INTERVAL, SessionTimer::Clock));
        false
    }

    fn cancel_clock(&mut self) {
        if let Some(handle) = self.clock.take() {
            self.timers.cancel(handle);
        }
    }

    /// Pointer-down at playfield coordinates
    pub fn pointer_down(&mut self, pos: Vec2) {
        if self.phase != GamePhase::Running {
            return;
        }
        match &mut self.state {
            ModeState::Batting(s) => {
                if let Some(runs) = s.swing(&mut self.rng) {
                    self.points += runs;
                }
            }
            ModeState::Catching(s) => {
                if s.catch(pos) {
                    self.points += 1;
                }
            }
            ModeState::Bowling(s) => {
                if s.deliver(pos) {
                    self.points += bowling::HIT_POINTS;
                }
            }
            // Memory and trivia input arrives as discrete indices
            ModeState::Memory(_) | ModeState::Trivia(_) => {}
        }
    }

    /// Answer the current sprint question by option index (trivia only).
    /// A correct answer pays ten points; either way the advance delay is
    /// armed and further input is ignored until the next question.
    pub fn answer(&mut self, choice: usize) {
        if self.phase != GamePhase::Running {
            return;
        }
        let ModeState::Trivia(s) = &mut self.state else {
            return;
        };
        let Some(correct) = s.answer(choice) else {
            return;
        };
        if correct {
            self.points += trivia::CORRECT_POINTS;
        }
        self.cancel_clock();
        self.timers
            .once(trivia::ANSWER_ADVANCE_DELAY, SessionTimer::Advance);
    }

    /// Key-down; Space swings the bat in batting
    pub fn key_down(&mut self, key: Key) {
        if self.phase != GamePhase::Running {
            return;
        }
        if let (Key::Space, ModeState::Batting(s)) = (key, &mut self.state) {
            if let Some(runs) = s.swing(&mut self.rng) {
                self.points += runs;
            }
        }
    }

    /// Flip a memory card by grid index. A mismatch arms the unflip
    /// delay; matching the final pair ends the run.
    pub fn flip_card(&mut self, index: usize) {
        if self.phase != GamePhase::Running {
            return;
        }
        let ModeState::Memory(s) = &mut self.state else {
            return;
        };
        match s.flip(index) {
            FlipOutcome::Mismatch => {
                self.timers.once(memory::UNFLIP_DELAY, SessionTimer::Unflip);
            }
            FlipOutcome::Matched if s.is_complete() => self.end(),
            _ => {}
        }
    }

    /// Pause the session. Only batting exposes pause; the call is a no-op
    /// for every other mode.
    pub fn pause(&mut self) {
        if self.mode == GameMode::Batting && self.phase == GamePhase::Running {
            self.phase = GamePhase::Paused;
            log::debug!("batting session paused");
        }
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Running;
            log::debug!("batting session resumed");
        }
    }

    /// Abandon the session from any phase: every pending timer is
    /// canceled and the session goes inert. Subsequent ticks and inputs
    /// are guaranteed no-ops.
    pub fn reset(&mut self) {
        self.timers.clear();
        self.clock = None;
        self.phase = GamePhase::Idle;
        self.points = 0;
        self.summary = None;
        log::debug!("{} session reset", self.mode.as_str());
    }

    fn end(&mut self) {
        self.timers.clear();
        self.clock = None;
        self.phase = GamePhase::Ended;
        log::info!("{} session ended, score {}", self.mode.as_str(), self.score());
    }

    /// `Running -> Ended` aftermath: submit the final score, pick the
    /// tiered message, surface the summary. Idempotent once ended.
    pub fn finalize<S: KeyValueStore>(
        &mut self,
        scores: &mut ScoreStore<S>,
    ) -> Option<GameSummary> {
        if self.phase != GamePhase::Ended {
            return None;
        }
        if let Some(summary) = self.summary {
            return Some(summary);
        }

        let final_score = self.score();
        let submission = scores.submit(self.mode, final_score);
        let summary = GameSummary {
            mode: self.mode,
            final_score,
            best_score: submission.best_after,
            is_record: submission.is_record,
            feedback: feedback_for(self.mode, final_score),
        };
        self.summary = Some(summary);
        Some(summary)
    }
}

/// Fixed score thresholds per mode (memory tiers on elapsed seconds,
/// lower is better).
fn feedback_for(mode: GameMode, score: u32) -> Feedback {
    match mode {
        GameMode::Batting => {
            if score > 50 {
                Feedback {
                    title: "Excellent Batting!",
                    detail: "Fantastic innings! You hit some amazing shots!",
                }
            } else if score > 25 {
                Feedback {
                    title: "Good Performance!",
                    detail: "Nice batting display! Keep practicing!",
                }
            } else {
                Feedback {
                    title: "Keep Practicing!",
                    detail: "Try to time your shots better next time!",
                }
            }
        }
        GameMode::Catching => {
            if score > 30 {
                Feedback {
                    title: "Amazing Catches!",
                    detail: "Your reflexes are incredible! Great fielding!",
                }
            } else if score > 15 {
                Feedback {
                    title: "Good Catching!",
                    detail: "Nice reflexes! Keep training!",
                }
            } else {
                Feedback {
                    title: "Practice More!",
                    detail: "Work on your hand-eye coordination!",
                }
            }
        }
        GameMode::Trivia => {
            if score >= 80 {
                Feedback {
                    title: "Cricket Genius!",
                    detail: "Perfect knowledge! You know everything!",
                }
            } else if score >= 50 {
                Feedback {
                    title: "Great Knowledge!",
                    detail: "You know your cricket trivia well!",
                }
            } else {
                Feedback {
                    title: "Keep Learning!",
                    detail: "Study more cricket facts and records!",
                }
            }
        }
        GameMode::Bowling => {
            if score > 80 {
                Feedback {
                    title: "Perfect Bowling!",
                    detail: "Incredible accuracy! You hit the stumps every time!",
                }
            } else if score > 40 {
                Feedback {
                    title: "Good Bowling!",
                    detail: "Nice accuracy! Keep practicing!",
                }
            } else {
                Feedback {
                    title: "Practice Your Line!",
                    detail: "Work on your bowling accuracy!",
                }
            }
        }
        GameMode::Memory => {
            if score < 60 {
                Feedback {
                    title: "Lightning Fast!",
                    detail: "Amazing memory and speed!",
                }
            } else if score < 120 {
                Feedback {
                    title: "Great Memory!",
                    detail: "Well done! You matched all pairs!",
                }
            } else {
                Feedback {
                    title: "Good Effort!",
                    detail: "Keep practicing to improve your time!",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::InMemoryStore;
    use crate::sim::memory::Icon;

    const FRAME: f32 = 1.0 / 60.0;

    fn catching_objects(session: &GameSession) -> &CatchingState {
        match session.state() {
            ModeState::Catching(s) => s,
            other => panic!("expected catching state, got {other:?}"),
        }
    }

    fn memory_state(session: &GameSession) -> &MemoryState {
        match session.state() {
            ModeState::Memory(s) => s,
            other => panic!("expected memory state, got {other:?}"),
        }
    }

    fn pair_indices(state: &MemoryState, icon: Icon) -> (usize, usize) {
        let mut it = state
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.icon == icon)
            .map(|(i, _)| i);
        (it.next().unwrap(), it.next().unwrap())
    }

    #[test]
    fn test_batting_swing_scores_four_or_six() {
        let mut session = GameSession::start(GameMode::Batting, 5);

        // Frame along until the delivery enters the hittable window
        let mut frames = 0;
        loop {
            session.tick(FRAME);
            let hittable = match session.state() {
                ModeState::Batting(s) => s.hittable(),
                _ => unreachable!(),
            };
            if hittable {
                break;
            }
            frames += 1;
            assert!(frames < 600, "no hittable delivery within 10 seconds");
        }

        session.key_down(Key::Space);
        assert!(session.score() == 4 || session.score() == 6);
    }

    #[test]
    fn test_countdown_reaches_zero_and_ends_session() {
        let mut session = GameSession::start(GameMode::Bowling, 1);
        session.tick(bowling::DURATION_SECS as f32 + 1.0);
        assert_eq!(session.phase(), GamePhase::Ended);
        assert_eq!(session.clock_secs(), 0);
    }

    #[test]
    fn test_bowling_center_click_scores_ten() {
        let mut session = GameSession::start(GameMode::Bowling, 1);
        session.tick(FRAME);
        session.pointer_down(bowling::STUMPS.center());
        assert_eq!(session.score(), 10);

        session.pointer_down(Vec2::new(10.0, 10.0));
        assert_eq!(session.score(), 10);
    }

    #[test]
    fn test_score_is_monotonic_under_random_input() {
        let mut session = GameSession::start(GameMode::Catching, 99);
        let mut last = 0;
        for i in 0..600 {
            session.tick(FRAME);
            session.pointer_down(Vec2::new((i * 13 % 800) as f32, (i * 7 % 600) as f32));
            assert!(session.score() >= last);
            last = session.score();
        }
    }

    #[test]
    fn test_pause_freezes_clock_and_input() {
        let mut session = GameSession::start(GameMode::Batting, 3);
        session.tick(2.5);
        let clock = session.clock_secs();

        session.pause();
        assert_eq!(session.phase(), GamePhase::Paused);
        session.tick(10.0);
        session.key_down(Key::Space);
        assert_eq!(session.clock_secs(), clock);
        assert_eq!(session.score(), 0);

        session.resume();
        assert_eq!(session.phase(), GamePhase::Running);
    }

    #[test]
    fn test_only_batting_exposes_pause() {
        let mut session = GameSession::start(GameMode::Catching, 3);
        session.pause();
        assert_eq!(session.phase(), GamePhase::Running);
    }

    #[test]
    fn test_reset_cancels_timers_and_goes_inert() {
        let mut session = GameSession::start(GameMode::Catching, 8);
        for _ in 0..180 {
            session.tick(FRAME);
        }
        assert!(!catching_objects(&session).objects.is_empty());

        session.reset();
        assert_eq!(session.phase(), GamePhase::Idle);

        // Previously scheduled spawn/clock cadence must be a no-op now
        let objects_before = catching_objects(&session).objects.clone();
        let clock_before = session.clock_secs();
        session.tick(30.0);
        session.pointer_down(Vec2::new(400.0, 300.0));
        assert_eq!(catching_objects(&session).objects, objects_before);
        assert_eq!(session.clock_secs(), clock_before);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_memory_mismatch_unflips_after_delay() {
        let mut session = GameSession::start(GameMode::Memory, 21);
        let (a, _) = pair_indices(memory_state(&session), Icon::Bat);
        let b = memory_state(&session)
            .cards
            .iter()
            .position(|c| c.icon != Icon::Bat)
            .unwrap();

        session.flip_card(a);
        session.flip_card(b);
        assert!(memory_state(&session).cards[a].flipped);

        // Stays face-up until the 1 s delay fires
        session.tick(0.5);
        assert!(memory_state(&session).cards[a].flipped);
        session.tick(0.6);
        assert!(!memory_state(&session).cards[a].flipped);
        assert!(!memory_state(&session).cards[b].flipped);
    }

    #[test]
    fn test_memory_clear_ends_with_elapsed_time_score() {
        let mut session = GameSession::start(GameMode::Memory, 21);
        session.tick(30.0);

        for icon in Icon::ALL {
            let (a, b) = pair_indices(memory_state(&session), icon);
            session.flip_card(a);
            session.flip_card(b);
        }

        assert_eq!(session.phase(), GamePhase::Ended);
        assert_eq!(session.score(), 30);
    }

    #[test]
    fn test_finalize_submits_and_reports_record() {
        let mut scores = ScoreStore::new(InMemoryStore::default());
        let mut session = GameSession::start(GameMode::Bowling, 4);
        session.tick(FRAME);
        session.pointer_down(bowling::STUMPS.center());
        session.tick(120.0);

        let summary = session.finalize(&mut scores).expect("ended");
        assert_eq!(summary.final_score, 10);
        assert_eq!(summary.best_score, 10);
        assert!(summary.is_record);
        assert_eq!(summary.feedback.title, "Practice Your Line!");
        assert_eq!(scores.get_best(GameMode::Bowling), Some(10));

        // Finalize is idempotent
        let again = session.finalize(&mut scores).expect("cached");
        assert_eq!(again, summary);
    }

    #[test]
    fn test_finalize_before_end_is_none() {
        let mut scores = ScoreStore::new(InMemoryStore::default());
        let mut session = GameSession::start(GameMode::Batting, 4);
        assert!(session.finalize(&mut scores).is_none());
    }

    #[test]
    fn test_same_seed_same_inputs_same_state() {
        let mut a = GameSession::start(GameMode::Catching, 1234);
        let mut b = GameSession::start(GameMode::Catching, 1234);

        for i in 0..300 {
            a.tick(FRAME);
            b.tick(FRAME);
            if i % 37 == 0 {
                let p = Vec2::new((i % 800) as f32, 100.0);
                a.pointer_down(p);
                b.pointer_down(p);
            }
        }

        assert_eq!(a.score(), b.score());
        assert_eq!(a.clock_secs(), b.clock_secs());
        assert_eq!(
            catching_objects(&a).objects,
            catching_objects(&b).objects
        );
    }

    fn trivia_state(session: &GameSession) -> &TriviaState {
        match session.state() {
            ModeState::Trivia(s) => s,
            other => panic!("expected trivia state, got {other:?}"),
        }
    }

    #[test]
    fn test_trivia_correct_answer_scores_ten_and_advances() {
        let mut session = GameSession::start(GameMode::Trivia, 1);
        let correct = trivia_state(&session).current().unwrap().correct;

        session.answer(correct);
        assert_eq!(session.score(), 10);
        assert_eq!(trivia_state(&session).revealed, Some(correct));

        // Options are disabled during the advance delay
        session.answer(correct);
        assert_eq!(session.score(), 10);

        session.tick(trivia::ANSWER_ADVANCE_DELAY);
        assert_eq!(trivia_state(&session).index, 1);
        assert_eq!(session.clock_secs(), trivia::QUESTION_TIME_SECS);
    }

    #[test]
    fn test_trivia_timeout_skips_without_reveal() {
        let mut session = GameSession::start(GameMode::Trivia, 1);

        session.tick(trivia::QUESTION_TIME_SECS as f32);
        assert_eq!(trivia_state(&session).revealed, None);
        assert!(trivia_state(&session).awaiting_advance);

        // Input between questions is ignored
        session.answer(0);
        assert_eq!(session.score(), 0);

        session.tick(trivia::TIMEOUT_ADVANCE_DELAY);
        assert_eq!(trivia_state(&session).index, 1);
        assert_eq!(session.phase(), GamePhase::Running);
    }

    #[test]
    fn test_trivia_wrong_answer_scores_nothing() {
        let mut session = GameSession::start(GameMode::Trivia, 1);
        let correct = trivia_state(&session).current().unwrap().correct;

        session.answer((correct + 1) % 4);
        assert_eq!(session.score(), 0);
        // The correct option is still revealed
        assert_eq!(trivia_state(&session).revealed, Some(correct));
    }

    #[test]
    fn test_trivia_sprint_completes_and_finalizes() {
        let mut scores = ScoreStore::new(InMemoryStore::default());
        let mut session = GameSession::start(GameMode::Trivia, 1);

        for _ in 0..trivia::QUESTION_COUNT {
            let correct = trivia_state(&session).current().unwrap().correct;
            session.answer(correct);
            session.tick(trivia::ANSWER_ADVANCE_DELAY);
        }

        assert_eq!(session.phase(), GamePhase::Ended);
        assert_eq!(session.score(), 100);

        let summary = session.finalize(&mut scores).expect("ended");
        assert_eq!(summary.feedback.title, "Cricket Genius!");
        assert!(summary.is_record);
        assert_eq!(scores.get_best(GameMode::Trivia), Some(100));
    }

    #[test]
    fn test_mode_state_round_trips_through_json() {
        let session = GameSession::start(GameMode::Memory, 11);
        let json = serde_json::to_string(session.state()).unwrap();
        let back: ModeState = serde_json::from_str(&json).unwrap();
        match (session.state(), &back) {
            (ModeState::Memory(a), ModeState::Memory(b)) => assert_eq!(a.cards, b.cards),
            _ => panic!("variant changed across serialization"),
        }
    }

    #[test]
    fn test_feedback_tiers() {
        assert_eq!(feedback_for(GameMode::Batting, 51).title, "Excellent Batting!");
        assert_eq!(feedback_for(GameMode::Batting, 26).title, "Good Performance!");
        assert_eq!(feedback_for(GameMode::Batting, 25).title, "Keep Practicing!");
        assert_eq!(feedback_for(GameMode::Trivia, 80).title, "Cricket Genius!");
        assert_eq!(feedback_for(GameMode::Trivia, 79).title, "Great Knowledge!");
        assert_eq!(feedback_for(GameMode::Trivia, 50).title, "Great Knowledge!");
        assert_eq!(feedback_for(GameMode::Trivia, 49).title, "Keep Learning!");
        assert_eq!(feedback_for(GameMode::Memory, 59).title, "Lightning Fast!");
        assert_eq!(feedback_for(GameMode::Memory, 119).title, "Great Memory!");
        assert_eq!(feedback_for(GameMode::Memory, 180).title, "Good Effort!");
    }
}
