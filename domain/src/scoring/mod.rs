//! Scoring domain
//!
//! [`score`] turns a test and a finished answer set into a [`TestResult`].
//! It is a pure function: no clock, no hidden state, and the inputs are only
//! borrowed, so scoring the same inputs twice yields identical results.

pub mod band;
pub mod result;

pub use band::{ScoreBand, ScoreThresholds};
pub use result::{DomainScore, TestResult};

use crate::attempt::answer::UserAnswer;
use crate::bank::entities::Test;

/// Score an answer set against a test.
///
/// - `score` counts answers marked correct.
/// - `total_questions` is the test's question count, so a short or partly
///   unanswered answer set lowers the percentage instead of failing.
/// - Domain tallies are keyed by each question's `domain` string, in order of
///   first appearance; an unanswered question adds to `total` only.
///
/// # Example
///
/// ```
/// use quiz_domain::{AnswerOption, Question, Test, UserAnswer, score};
///
/// let q = Question::new(1, "Storage", "Pick A")
///     .with_options(vec![AnswerOption::new("A", "a"), AnswerOption::new("B", "b")])
///     .with_correct_answer("A");
/// let test = Test::new(1, "Practice").with_questions(vec![q.clone()]);
///
/// let mut answer = UserAnswer::unanswered(&q);
/// answer.select(&q, "A");
///
/// let result = score(&test, &[answer]);
/// assert_eq!(result.score, 1);
/// assert_eq!(result.percentage, 100);
/// ```
pub fn score(test: &Test, answers: &[UserAnswer]) -> TestResult {
    let correct = answers.iter().filter(|a| a.is_correct).count();
    let total_questions = test.question_count();

    let mut domain_scores: Vec<DomainScore> = Vec::new();
    for question in &test.questions {
        let is_correct = answers
            .iter()
            .find(|a| a.question_id == question.id)
            .is_some_and(|a| a.is_correct);

        let idx = match domain_scores.iter().position(|d| d.domain == question.domain) {
            Some(idx) => idx,
            None => {
                domain_scores.push(DomainScore {
                    domain: question.domain.clone(),
                    correct: 0,
                    total: 0,
                    percentage: 0,
                });
                domain_scores.len() - 1
            }
        };

        let bucket = &mut domain_scores[idx];
        bucket.total += 1;
        if is_correct {
            bucket.correct += 1;
        }
    }

    for bucket in &mut domain_scores {
        bucket.percentage = percentage(bucket.correct, bucket.total);
    }

    TestResult {
        test_id: test.id,
        answers: answers.to_vec(),
        score: correct,
        total_questions,
        percentage: percentage(correct, total_questions),
        domain_scores,
        completed: false,
        started_at: None,
        ended_at: None,
    }
}

/// `round(100 * correct / total)` with halves rounded up, in integer
/// arithmetic. Returns 0 when `total` is 0.
pub fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * correct + total) / (2 * total)) as u32
}
