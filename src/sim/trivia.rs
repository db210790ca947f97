//! Trivia sprint: ten rapid-fire questions against a short clock
//!
//! Unlike the full quiz, the sprint runs a fixed question list in a fixed
//! order, gives ten seconds per question, and pays ten points per correct
//! answer into the game high-score table. Answering reveals the correct
//! option; a timeout just moves on.

use serde::{Deserialize, Serialize};

pub const QUESTION_COUNT: usize = 10;
/// Countdown per question
pub const QUESTION_TIME_SECS: u32 = 10;
/// Points per correct answer
pub const CORRECT_POINTS: u32 = 10;
/// Pause after an answer before the next question
pub const ANSWER_ADVANCE_DELAY: f32 = 1.5;
/// Shorter pause after a timeout
pub const TIMEOUT_ADVANCE_DELAY: f32 = 1.0;

/// One sprint question, fixed at compile time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SprintQuestion {
    pub text: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
}

const fn sq(text: &'static str, options: [&'static str; 4], correct: usize) -> SprintQuestion {
    SprintQuestion {
        text,
        options,
        correct,
    }
}

pub const QUESTIONS: [SprintQuestion; QUESTION_COUNT] = [
    sq("Who has the most Test wickets?", ["Muttiah Muralitharan", "Shane Warne", "James Anderson", "Anil Kumble"], 0),
    sq("Highest ODI score?", ["264", "237", "219", "215"], 0),
    sq("First Cricket World Cup year?", ["1975", "1971", "1983", "1979"], 0),
    sq("Fastest ODI century?", ["AB de Villiers", "Shahid Afridi", "Corey Anderson", "Chris Gayle"], 0),
    sq("Don Bradman's average?", ["99.94", "89.50", "95.75", "101.23"], 0),
    sq("Most ODI runs?", ["Sachin Tendulkar", "Virat Kohli", "Ricky Ponting", "Kumar Sangakkara"], 0),
    sq("First T20 World Cup winner?", ["India", "Pakistan", "Australia", "England"], 0),
    sq("Most sixes in international cricket?", ["Chris Gayle", "Shahid Afridi", "Rohit Sharma", "MS Dhoni"], 0),
    sq("Highest Test score?", ["Brian Lara - 400*", "Matthew Hayden - 380", "Mahela Jayawardene - 374", "Virender Sehwag - 319"], 0),
    sq("Most World Cup wins?", ["Australia - 5", "India - 2", "West Indies - 2", "England - 1"], 0),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriviaState {
    /// Zero-based index into [`QUESTIONS`]
    pub index: usize,
    /// Correct option index, shown after an answer (not after a timeout)
    pub revealed: Option<usize>,
    /// Between questions: input and the countdown are ignored
    pub awaiting_advance: bool,
}

impl TriviaState {
    pub fn new() -> Self {
        Self {
            index: 0,
            revealed: None,
            awaiting_advance: false,
        }
    }

    pub fn current(&self) -> Option<&'static SprintQuestion> {
        QUESTIONS.get(self.index)
    }

    pub fn is_complete(&self) -> bool {
        self.index >= QUESTION_COUNT
    }

    /// Answer the current question by option index; reveals the correct
    /// option and returns whether the choice was right. Ignored between
    /// questions or out of range.
    pub fn answer(&mut self, choice: usize) -> Option<bool> {
        if self.awaiting_advance || choice >= 4 {
            return None;
        }
        let question = self.current()?;
        self.revealed = Some(question.correct);
        self.awaiting_advance = true;
        Some(choice == question.correct)
    }

    /// Countdown expired: no reveal, just move on
    pub fn timeout(&mut self) {
        self.awaiting_advance = true;
    }

    /// Step to the next question (fires on the advance timer)
    pub fn advance(&mut self) {
        self.index += 1;
        self.revealed = None;
        self.awaiting_advance = false;
    }
}

impl Default for TriviaState {
    fn default() -> Self {
        Self::new()
    }
}
