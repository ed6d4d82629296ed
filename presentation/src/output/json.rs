//! JSON output for scripting

use super::formatter::OutputFormatter;
use quiz_domain::{ScoreBand, ScoreThresholds, Test, TestId, TestResult};
use serde::Serialize;
use std::sync::Arc;

/// Formats listings and results as pretty-printed JSON
pub struct JsonFormatter;

#[derive(Serialize)]
struct TestSummary<'a> {
    id: TestId,
    title: &'a str,
    description: &'a str,
    question_count: usize,
    domains: Vec<&'a str>,
}

#[derive(Serialize)]
struct ResultReport<'a> {
    title: &'a str,
    band: ScoreBand,
    passed: bool,
    #[serde(flatten)]
    result: &'a TestResult,
}

impl JsonFormatter {
    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn test_list(&self, tests: &[Arc<Test>]) -> String {
        let summaries: Vec<TestSummary<'_>> = tests
            .iter()
            .map(|t| TestSummary {
                id: t.id,
                title: &t.title,
                description: &t.description,
                question_count: t.question_count(),
                domains: t.question_domains(),
            })
            .collect();
        Self::to_json(&summaries)
    }

    fn result(&self, test: &Test, result: &TestResult, thresholds: &ScoreThresholds) -> String {
        Self::to_json(&ResultReport {
            title: &test.title,
            band: result.band(thresholds),
            passed: result.passed(thresholds),
            result,
        })
    }
}
