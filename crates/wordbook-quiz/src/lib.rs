//! Meaning-matching quiz over a wordbook dictionary.
//!
//! `QuizSession` owns one quiz attempt: a random selection of words, an
//! independently shuffled meaning list, a cursor, and the running score.
//! Adapters drive it one answer at a time and render the results; an
//! abandoned session is simply dropped.

mod session;

#[cfg(test)]
mod tests;

pub use session::{AnswerResult, QuizError, QuizScore, QuizSession};
