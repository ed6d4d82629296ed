//! TUI widgets: ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Body (flex): selector | question | results ────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod header;
pub mod help;
pub mod question;
pub mod results;
pub mod selector;
pub mod status_bar;

use quiz_domain::ScoreBand;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: vertical[0],
            body: vertical[1],
            status_bar: vertical[2],
        }
    }

    /// Centered overlay rectangle for help dialog
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

/// Color used for a score band in gauges and labels
pub fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Excellent => Color::Green,
        ScoreBand::Good => Color::Yellow,
        ScoreBand::NeedsStudy => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::render;
    use crate::tui::mode::Action;
    use crate::tui::state::TuiState;
    use chrono::{TimeZone, Utc};
    use quiz_application::{FixedClock, QuizSession};
    use quiz_domain::{AnswerOption, Question, Test};
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn state() -> TuiState {
        let q = |id, domain: &str| {
            Question::new(id, domain, format!("Which answer is right for {id}?"))
                .with_options(vec![
                    AnswerOption::new("A", "The first"),
                    AnswerOption::new("B", "The second"),
                ])
                .with_correct_answer("A")
                .with_explanation("The first one always wins.")
        };
        let test = Test::new(1, "Practice Test 1")
            .with_description("Warm-up round")
            .with_questions(vec![q(1, "Storage"), q(2, "Compute")]);
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap());
        TuiState::new(QuizSession::new(vec![Arc::new(test)], Arc::new(clock)))
    }

    fn screen_text(state: &TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_layout_regions() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.body.height, 20);
    }

    #[test]
    fn test_centered_overlay_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let overlay = MainLayout::centered_overlay(60, 50, area);
        assert!(overlay.x > 0 && overlay.y > 0);
        assert!(overlay.right() < area.right());
    }

    #[test]
    fn test_band_colors() {
        assert_eq!(band_color(ScoreBand::Excellent), Color::Green);
        assert_eq!(band_color(ScoreBand::NeedsStudy), Color::Red);
    }

    #[test]
    fn test_render_selector() {
        let text = screen_text(&state());
        assert!(text.contains("Practice Tests"));
        assert!(text.contains("Practice Test 1"));
        assert!(text.contains("Warm-up round"));
        assert!(text.contains("SELECT"));
    }

    #[test]
    fn test_render_question_and_explanation() {
        let mut s = state();
        s.apply(Action::StartTest);
        let text = screen_text(&s);
        assert!(text.contains("Question 1 of 2"));
        assert!(text.contains("Domain: Storage"));
        assert!(text.contains("A. The first"));
        assert!(!text.contains("The first one always wins."));

        s.apply(Action::SelectOption('b'));
        s.apply(Action::Check);
        let text = screen_text(&s);
        assert!(text.contains("Incorrect. The answer is A."));
        assert!(text.contains("The first one always wins."));
    }

    #[test]
    fn test_render_results_and_review() {
        let mut s = state();
        s.apply(Action::StartTest);
        s.apply(Action::SelectOption('a'));
        s.apply(Action::Advance);
        s.apply(Action::Advance);

        let text = screen_text(&s);
        assert!(text.contains("Score: 1/2 (50%)"));
        assert!(text.contains("Performance by Domain"));
        assert!(text.contains("Compute"));
        assert!(text.contains("RESULTS"));

        s.apply(Action::ToggleReview);
        let text = screen_text(&s);
        assert!(text.contains("Question Review"));
        assert!(text.contains("Your answer: none"));
    }

    #[test]
    fn test_render_help_overlay() {
        let mut s = state();
        s.apply(Action::ToggleHelp);
        let text = screen_text(&s);
        assert!(text.contains("Help"));
        assert!(text.contains("Start the highlighted test"));
    }
}
