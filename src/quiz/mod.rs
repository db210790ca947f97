//! Trivia quiz: question bank and session state machine

pub mod bank;
pub mod session;

pub use bank::{BANK, Category, CategoryFilter, Difficulty, Question};
pub use session::{AnswerRecord, QuizPhase, QuizResults, QuizSession};
