//! Quiz session state machine
//!
//! `NotStarted -> AwaitingAnswer -> Revealing -> AwaitingAnswer -> ... ->
//! Finished`. Starting a session samples up to ten questions matching the
//! selected category and difficulty; each question runs a 30-second
//! countdown, and answering (or timing out) reveals the correct option
//! before a short delay advances the session.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::Feedback;
use crate::consts::COUNTDOWN_INTERVAL;
use crate::timers::{TimerHandle, Timers};

use super::bank::{BANK, CategoryFilter, Difficulty, Question};

/// Questions per quiz when the filtered bank is large enough. A filter
/// with fewer matches runs a shorter quiz rather than relaxing itself.
pub const QUIZ_LENGTH: usize = 10;
/// Countdown per question
pub const QUESTION_TIME_SECS: u32 = 30;
/// Reveal delay after a chosen answer
pub const ANSWER_REVEAL_DELAY: f32 = 2.0;
/// Shorter reveal delay after a timeout
pub const TIMEOUT_REVEAL_DELAY: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuizTimer {
    /// 1 Hz question countdown
    Clock,
    /// Reveal delay elapsed; move to the next question
    Advance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    AwaitingAnswer,
    /// Correct option shown, advance delay pending
    Revealing,
    Finished,
}

/// Outcome of one question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub correct: bool,
    pub time_taken_secs: u32,
}

/// Aggregated results once the session finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResults {
    pub score: u32,
    pub total: usize,
    pub correct: usize,
    pub wrong: usize,
    pub total_time_secs: u32,
    /// round(100 * correct / answered)
    pub accuracy: u32,
    pub feedback: Feedback,
    /// Confetti fires only at the top accuracy tier
    pub celebrate: bool,
}

/// One play-through of the trivia quiz
#[derive(Debug)]
pub struct QuizSession {
    category: CategoryFilter,
    difficulty: Difficulty,
    bank: Vec<Question>,
    questions: Vec<Question>,
    index: usize,
    score: u32,
    remaining_secs: u32,
    answers: Vec<AnswerRecord>,
    phase: QuizPhase,
    timers: Timers<QuizTimer>,
    clock: Option<TimerHandle>,
    elapsed: f32,
    revealed: Option<usize>,
}

impl QuizSession {
    /// Selection screen state: category and difficulty chosen, nothing
    /// sampled yet.
    pub fn new(category: CategoryFilter, difficulty: Difficulty) -> Self {
        Self::with_bank(BANK, category, difficulty)
    }

    /// Same as [`Self::new`] against a custom question bank
    pub fn with_bank(
        bank: &[Question],
        category: CategoryFilter,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            category,
            difficulty,
            bank: bank.to_vec(),
            questions: Vec::new(),
            index: 0,
            score: 0,
            remaining_secs: QUESTION_TIME_SECS,
            answers: Vec::new(),
            phase: QuizPhase::NotStarted,
            timers: Timers::new(),
            clock: None,
            elapsed: 0.0,
            revealed: None,
        }
    }

    /// `NotStarted -> AwaitingAnswer`: sample the questions and arm the
    /// first countdown. An empty filtered bank finishes immediately.
    pub fn start(&mut self, seed: u64) {
        if self.phase != QuizPhase::NotStarted {
            return;
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut pool: Vec<Question> = self
            .bank
            .iter()
            .filter(|q| q.difficulty == self.difficulty && self.category.matches(q.category))
            .copied()
            .collect();
        pool.shuffle(&mut rng);
        pool.truncate(QUIZ_LENGTH);
        self.questions = pool;

        log::info!(
            "quiz started: {} questions ({} / {:?})",
            self.questions.len(),
            self.difficulty.as_str(),
            self.category,
        );

        if self.questions.is_empty() {
            self.finish();
        } else {
            self.phase = QuizPhase::AwaitingAnswer;
            self.arm_countdown();
        }
    }

    /// Abandon the quiz and return to the selection screen. Cancels every
    /// pending timer; progress is discarded.
    pub fn reset(&mut self) {
        self.timers.clear();
        self.clock = None;
        self.questions.clear();
        self.answers.clear();
        self.index = 0;
        self.score = 0;
        self.remaining_secs = QUESTION_TIME_SECS;
        self.elapsed = 0.0;
        self.revealed = None;
        self.phase = QuizPhase::NotStarted;
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    /// Zero-based index of the question in play
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Correct option index, shown during `Revealing`
    pub fn revealed(&self) -> Option<usize> {
        self.revealed
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Per-frame update: pump the countdown and the reveal delay
    pub fn tick(&mut self, dt: f32) {
        if matches!(self.phase, QuizPhase::NotStarted | QuizPhase::Finished) {
            return;
        }
        self.elapsed += dt;

        for event in self.timers.advance(dt) {
            match event {
                QuizTimer::Clock if self.phase == QuizPhase::AwaitingAnswer => {
                    self.remaining_secs = self.remaining_secs.saturating_sub(1);
                    if self.remaining_secs == 0 {
                        self.timeout();
                    }
                }
                // Countdown fired during a reveal batch; stale, drop it
                QuizTimer::Clock => {}
                QuizTimer::Advance => self.next_question(),
            }
        }
    }

    /// Answer the current question by option index. Returns whether the
    /// choice was correct; out-of-range choices are ignored.
    pub fn answer(&mut self, choice: usize) -> Option<bool> {
        if self.phase != QuizPhase::AwaitingAnswer || choice >= 4 {
            return None;
        }
        let question = *self.questions.get(self.index)?;

        let correct = choice == question.correct;
        self.answers.push(AnswerRecord {
            correct,
            time_taken_secs: QUESTION_TIME_SECS - self.remaining_secs,
        });
        if correct {
            self.score += 1;
        }

        self.reveal(question.correct, ANSWER_REVEAL_DELAY);
        Some(correct)
    }

    /// Countdown expired: scored as a wrong answer taking the full time
    fn timeout(&mut self) {
        self.answers.push(AnswerRecord {
            correct: false,
            time_taken_secs: QUESTION_TIME_SECS,
        });
        let correct = match self.current_question() {
            Some(q) => q.correct,
            None => return,
        };
        self.reveal(correct, TIMEOUT_REVEAL_DELAY);
    }

    /// Show the correct option and schedule the advance
    fn reveal(&mut self, correct_option: usize, delay: f32) {
        if let Some(clock) = self.clock.take() {
            self.timers.cancel(clock);
        }
        self.revealed = Some(correct_option);
        self.phase = QuizPhase::Revealing;
        self.timers.once(delay, QuizTimer::Advance);
    }

    fn next_question(&mut self) {
        self.index += 1;
        if self.index >= self.questions.len() {
            self.finish();
            return;
        }
        self.remaining_secs = QUESTION_TIME_SECS;
        self.revealed = None;
        self.phase = QuizPhase::AwaitingAnswer;
        self.arm_countdown();
    }

    fn arm_countdown(&mut self) {
        self.clock = Some(self.timers.repeating(COUNTDOWN_INTERVAL, QuizTimer::Clock));
    }

    fn finish(&mut self) {
        self.timers.clear();
        self.clock = None;
        self.revealed = None;
        self.phase = QuizPhase::Finished;
        log::info!(
            "quiz finished: {}/{} correct",
            self.score,
            self.questions.len()
        );
    }

    /// Aggregated results; `None` until the session is `Finished`
    pub fn results(&self) -> Option<QuizResults> {
        if self.phase != QuizPhase::Finished {
            return None;
        }

        let answered = self.answers.len();
        let correct = self.answers.iter().filter(|a| a.correct).count();
        let accuracy = if answered == 0 {
            0
        } else {
            (100.0 * correct as f32 / answered as f32).round() as u32
        };
        let (feedback, celebrate) = results_feedback(accuracy);

        Some(QuizResults {
            score: self.score,
            total: self.questions.len(),
            correct,
            wrong: answered - correct,
            total_time_secs: self.elapsed.floor() as u32,
            accuracy,
            feedback,
            celebrate,
        })
    }
}

/// Fixed accuracy thresholds; confetti only at the top tier
fn results_feedback(accuracy: u32) -> (Feedback, bool) {
    if accuracy >= 90 {
        (
            Feedback {
                title: "Outstanding!",
                detail: "You're a cricket genius! Phenomenal knowledge!",
            },
            true,
        )
    } else if accuracy >= 70 {
        (
            Feedback {
                title: "Excellent!",
                detail: "Great performance! You know your cricket well!",
            },
            false,
        )
    } else if accuracy >= 50 {
        (
            Feedback {
                title: "Good Job!",
                detail: "Decent score! Keep learning more about cricket!",
            },
            false,
        )
    } else {
        (
            Feedback {
                title: "Keep Learning!",
                detail: "Don't give up! There's so much cricket to explore!",
            },
            false,
        )
    }
}
