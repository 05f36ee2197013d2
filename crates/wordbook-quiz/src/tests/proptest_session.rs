//! Property-based tests for the quiz session state machine.
//!
//! Random requested counts, seeds, and answer sequences; structural
//! invariants must hold after every submission.

use proptest::prelude::*;

use super::{make_test_dict, seeded};
use crate::{AnswerResult, QuizSession};

proptest! {
    #[test]
    fn total_is_request_clamped_to_dictionary(requested in 1usize..40, seed in any::<u64>()) {
        let dict = make_test_dict();
        let mut rng = seeded(seed);
        let session = QuizSession::start(&dict, requested, &mut rng).unwrap();

        prop_assert_eq!(session.total(), requested.min(dict.len()));
        prop_assert_eq!(session.meanings().len(), session.total());
    }

    #[test]
    fn words_are_distinct_dictionary_keys(requested in 1usize..40, seed in any::<u64>()) {
        let dict = make_test_dict();
        let mut rng = seeded(seed);
        let mut session = QuizSession::start(&dict, requested, &mut rng).unwrap();

        let mut seen: Vec<String> = Vec::new();
        while let Some(word) = session.current_word().map(str::to_string) {
            prop_assert!(dict.get(&word).is_some());
            prop_assert!(!seen.contains(&word));
            seen.push(word);
            session.submit(1);
        }
        prop_assert_eq!(seen.len(), session.total());
    }

    #[test]
    fn random_answers_never_break_invariants(
        requested in 1usize..8,
        seed in any::<u64>(),
        choices in proptest::collection::vec(0usize..10, 1..40),
    ) {
        let dict = make_test_dict();
        let mut rng = seeded(seed);
        let mut session = QuizSession::start(&dict, requested, &mut rng).unwrap();
        let total = session.total();

        let mut valid_submissions = 0;
        for &choice in &choices {
            let word_before = session.current_word().map(str::to_string);
            let score_before = session.score().0;

            match session.submit(choice) {
                AnswerResult::OutOfRange => {
                    // Turn not consumed.
                    prop_assert_eq!(session.current_word().map(str::to_string), word_before);
                    prop_assert_eq!(session.score().0, score_before);
                }
                AnswerResult::Finished => {
                    prop_assert!(session.is_complete());
                }
                AnswerResult::Correct { finished } => {
                    valid_submissions += 1;
                    prop_assert_eq!(session.score().0, score_before + 1);
                    prop_assert_eq!(finished.is_some(), session.is_complete());
                }
                AnswerResult::Incorrect { finished, .. } => {
                    valid_submissions += 1;
                    prop_assert_eq!(session.score().0, score_before);
                    prop_assert_eq!(finished.is_some(), session.is_complete());
                }
            }

            let (score, out_of) = session.score();
            prop_assert!(score <= out_of);
            prop_assert_eq!(out_of, total);
            prop_assert_eq!(session.is_complete(), session.current_word().is_none());
        }

        // The session completes after exactly `total` valid submissions.
        prop_assert_eq!(session.is_complete(), valid_submissions >= total);
    }
}
