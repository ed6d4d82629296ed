//! Attempt domain
//!
//! An attempt is one run through a single test. It owns one [`UserAnswer`]
//! per question, created unanswered when the attempt starts.

pub mod answer;

pub use answer::{AnswerState, UserAnswer};

use crate::bank::entities::Test;

/// Build a fresh answer set for `test`: one unanswered entry per question,
/// in question order.
pub fn fresh_answers(test: &Test) -> Vec<UserAnswer> {
    test.questions.iter().map(UserAnswer::unanswered).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::entities::Question;

    #[test]
    fn test_fresh_answers_match_question_order() {
        let test = Test::new(1, "Practice").with_questions(vec![
            Question::new(5, "Storage", "q5"),
            Question::new(2, "Compute", "q2"),
        ]);
        let answers = fresh_answers(&test);
        assert_eq!(
            answers.iter().map(|a| a.question_id).collect::<Vec<_>>(),
            vec![5, 2]
        );
        assert!(answers.iter().all(|a| !a.is_answered()));
    }
}
