//! Console output formatter for quiz listings, questions and results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use quiz_application::QuizController;
use quiz_domain::{ScoreBand, ScoreThresholds, Test, TestResult};
use std::sync::Arc;

/// Formats quiz output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the list of available tests
    pub fn format_test_list(tests: &[Arc<Test>]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Available Practice Tests"));
        output.push('\n');

        if tests.is_empty() {
            output.push_str(&format!("\n{}\n", "No tests in the question bank.".yellow()));
        }

        for test in tests {
            output.push_str(&format!(
                "\n{} {}  {}\n",
                format!("[{}]", test.id).cyan().bold(),
                test.title.bold(),
                format!("({} questions)", test.question_count()).dimmed()
            ));
            if !test.description.is_empty() {
                output.push_str(&format!("    {}\n", test.description));
            }
            output.push_str(&format!(
                "    {} {}\n",
                "Domains:".dimmed(),
                test.question_domains().join(", ")
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the current question of a running attempt
    pub fn format_question(controller: &QuizController) -> String {
        let mut output = String::new();
        let question = controller.current_question();
        let revealed = controller.is_revealed();
        let selected = controller.current_answer().selected_option.as_deref();

        output.push_str(&format!(
            "\n{} {}\n",
            format!(
                "Question {} of {}",
                controller.current_index() + 1,
                controller.total()
            )
            .cyan()
            .bold(),
            format!("[{}]", question.domain).dimmed()
        ));
        output.push_str(&format!("{}\n", Self::progress_bar(controller.progress(), 30)));
        output.push_str(&format!("\n{}\n\n", question.text.bold()));

        for option in &question.options {
            let is_selected = selected == Some(option.id.as_str());
            let is_correct = question.is_correct(&option.id);

            let marker = match (revealed, is_selected, is_correct) {
                (true, _, true) => "✓".green().bold(),
                (true, true, false) => "✗".red().bold(),
                (_, true, _) => "●".cyan(),
                _ => "○".normal(),
            };
            let label = format!("{}. {}", option.id, option.text);
            let styled = match (revealed, is_selected, is_correct) {
                (true, _, true) => label.as_str().green(),
                (true, true, false) => label.as_str().red(),
                (false, true, _) => label.as_str().cyan(),
                _ => label.as_str().normal(),
            };
            output.push_str(&format!("  {} {}\n", marker, styled));
        }

        if revealed && !question.explanation.is_empty() {
            output.push_str(&format!(
                "\n{}\n{}\n",
                "Explanation:".yellow().bold(),
                Self::indent(&question.explanation, "  ")
            ));
        }

        output
    }

    /// Format a scored attempt
    pub fn format_result(test: &Test, result: &TestResult, thresholds: &ScoreThresholds) -> String {
        let mut output = String::new();
        let band = result.band(thresholds);

        output.push_str(&Self::header("Test Results"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Test:".cyan().bold(), test.title));
        output.push_str(&format!(
            "{} {}/{} ({}%)\n",
            "Score:".cyan().bold(),
            result.score,
            result.total_questions,
            Self::colored_by_band(&result.percentage.to_string(), band)
        ));
        if let Some(secs) = result.duration_secs() {
            output.push_str(&format!(
                "{} {}m {:02}s\n",
                "Time:".cyan().bold(),
                secs / 60,
                secs % 60
            ));
        }
        let unanswered = result.unanswered_count();
        if unanswered > 0 {
            output.push_str(&format!(
                "{}\n",
                format!("{unanswered} question(s) left unanswered").dimmed()
            ));
        }
        output.push_str(&format!(
            "\n{}\n",
            Self::colored_by_band(band.message(), band).bold()
        ));

        output.push_str(&Self::section_header("Performance by Domain"));
        for domain in &result.domain_scores {
            let domain_band = domain.band(thresholds);
            output.push_str(&format!(
                "  {:<32} {} {:>3}% ({}/{})\n",
                domain.domain,
                Self::colored_by_band(&Self::bar(domain.percentage, 20), domain_band),
                domain.percentage,
                domain.correct,
                domain.total
            ));
        }

        let weakest = result.weakest_domains(thresholds);
        if !weakest.is_empty() {
            output.push_str(&format!("\n{}\n", "Focus your study on:".yellow().bold()));
            for domain in weakest {
                output.push_str(&format!("  * {} ({}%)\n", domain.domain, domain.percentage));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a question-by-question review of a scored attempt
    pub fn format_review(test: &Test, result: &TestResult) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Question Review"));

        for (i, question) in test.questions.iter().enumerate() {
            let answer = result.answer(question.id);
            let chosen = answer.and_then(|a| a.selected_option.as_deref());
            let correct = answer.is_some_and(|a| a.is_correct);

            let status = match (chosen, correct) {
                (None, _) => "–".dimmed(),
                (Some(_), true) => "✓".green().bold(),
                (Some(_), false) => "✗".red().bold(),
            };
            output.push_str(&format!("\n{} {}. {}\n", status, i + 1, question.text));
            output.push_str(&format!(
                "    {} {}   {} {}\n",
                "Your answer:".dimmed(),
                chosen.unwrap_or("none"),
                "Correct:".dimmed(),
                question.correct_answer
            ));
            if !correct && !question.explanation.is_empty() {
                output.push_str(&format!(
                    "{}\n",
                    Self::indent(&question.explanation, "    ").as_str().dimmed()
                ));
            }
        }

        output
    }

    /// Text bar of `width` cells filled to `percentage`
    pub fn bar(percentage: u32, width: usize) -> String {
        let filled = (percentage.min(100) as usize * width + 50) / 100;
        format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
    }

    fn progress_bar(fraction: f64, width: usize) -> String {
        let percentage = (fraction.clamp(0.0, 1.0) * 100.0).round() as u32;
        Self::bar(percentage, width).cyan().to_string()
    }

    fn colored_by_band(text: &str, band: ScoreBand) -> ColoredString {
        match band {
            ScoreBand::Excellent => text.green(),
            ScoreBand::Good => text.yellow(),
            ScoreBand::NeedsStudy => text.red(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn test_list(&self, tests: &[Arc<Test>]) -> String {
        Self::format_test_list(tests)
    }

    fn result(&self, test: &Test, result: &TestResult, thresholds: &ScoreThresholds) -> String {
        Self::format_result(test, result, thresholds)
    }
}
