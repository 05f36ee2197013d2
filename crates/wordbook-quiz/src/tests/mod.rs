mod proptest_session;

use rand::rngs::StdRng;
use rand::SeedableRng;

use wordbook_core::Dictionary;

use super::{AnswerResult, QuizError, QuizSession};

pub(super) fn make_test_dict() -> Dictionary {
    let mut dict = Dictionary::new();
    dict.insert("apple", "a fruit");
    dict.insert("run", "to move fast");
    dict.insert("mill", "a grinder");
    dict.insert("ocean", "a large sea");
    dict.insert("quill", "a writing feather");
    dict
}

pub(super) fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
