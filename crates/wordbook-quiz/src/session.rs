use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use wordbook_core::Dictionary;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("dictionary is empty; add words first")]
    EmptyDictionary,
    #[error("question count must be at least 1")]
    InvalidCount,
}

/// Final tally, carried by the answer that completes the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

/// Outcome of one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerResult {
    /// The session was already complete; nothing was graded.
    Finished,
    /// Choice outside `1..=meanings().len()`. The turn is not consumed:
    /// cursor, score, and current word are unchanged.
    OutOfRange,
    Correct {
        finished: Option<QuizScore>,
    },
    Incorrect {
        correct_meaning: String,
        finished: Option<QuizScore>,
    },
}

#[derive(Debug)]
struct Question {
    word: String,
    meaning: String,
}

/// One in-progress quiz attempt.
///
/// The words are asked in selection order; the meanings list is the same
/// multiset in an independent shuffled order, displayed as a numbered list
/// that answers index into.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    meanings: Vec<String>,
    cursor: usize,
    score: usize,
}

impl QuizSession {
    /// Draw `requested` words from the dictionary and start a session.
    ///
    /// Selection shuffles all entries and takes a prefix, so every word is
    /// equally likely to appear. A `requested` larger than the dictionary is
    /// clamped to its size; callers observe the clamp through [`total`].
    ///
    /// [`total`]: QuizSession::total
    pub fn start<R: Rng + ?Sized>(
        dict: &Dictionary,
        requested: usize,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        if dict.is_empty() {
            return Err(QuizError::EmptyDictionary);
        }
        if requested == 0 {
            return Err(QuizError::InvalidCount);
        }

        let mut entries: Vec<(&str, &str)> = dict.iter().collect();
        entries.shuffle(rng);
        entries.truncate(requested.min(entries.len()));

        let mut meanings: Vec<String> = entries.iter().map(|(_, m)| m.to_string()).collect();
        meanings.shuffle(rng);

        let questions: Vec<Question> = entries
            .into_iter()
            .map(|(word, meaning)| Question {
                word: word.to_string(),
                meaning: meaning.to_string(),
            })
            .collect();

        debug!(total = questions.len(), "quiz session started");
        Ok(Self {
            questions,
            meanings,
            cursor: 0,
            score: 0,
        })
    }

    /// Number of questions after clamping.
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Shuffled meanings in display order, shown as a 1-based numbered list.
    pub fn meanings(&self) -> &[String] {
        &self.meanings
    }

    /// The word awaiting an answer, or `None` once the session is complete.
    pub fn current_word(&self) -> Option<&str> {
        self.questions.get(self.cursor).map(|q| q.word.as_str())
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.questions.len()
    }

    /// `(correct so far, total questions)`, readable at any point.
    pub fn score(&self) -> (usize, usize) {
        (self.score, self.questions.len())
    }

    /// Grade the 1-based `choice` against the current word.
    ///
    /// A valid choice advances the cursor whether or not it was right; an
    /// out-of-range choice leaves the session untouched so the caller can
    /// re-prompt for the same word.
    pub fn submit(&mut self, choice: usize) -> AnswerResult {
        let Some(question) = self.questions.get(self.cursor) else {
            return AnswerResult::Finished;
        };
        if choice == 0 || choice > self.meanings.len() {
            return AnswerResult::OutOfRange;
        }

        let is_correct = self.meanings[choice - 1] == question.meaning;
        let correct_meaning = question.meaning.clone();

        if is_correct {
            self.score += 1;
        }
        self.cursor += 1;

        let finished = self.is_complete().then(|| QuizScore {
            correct: self.score,
            total: self.questions.len(),
        });

        if is_correct {
            AnswerResult::Correct { finished }
        } else {
            AnswerResult::Incorrect {
                correct_meaning,
                finished,
            }
        }
    }
}
