//! Results widget: overall score, per-domain gauges and the answer review

use crate::tui::state::TuiState;
use quiz_application::FinishedAttempt;
use quiz_domain::ScoreThresholds;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};

use super::band_color;

pub struct ResultsWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ResultsWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn render_summary(
        finished: &FinishedAttempt,
        thresholds: &ScoreThresholds,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let result = &finished.result;
        let band = result.band(thresholds);
        let color = band_color(band);

        let mut lines = vec![
            Line::from(vec![
                Span::raw("Score: "),
                Span::styled(
                    format!(
                        "{}/{} ({}%)",
                        result.score, result.total_questions, result.percentage
                    ),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    if result.passed(thresholds) { "PASS" } else { "FAIL" },
                    Style::default().fg(color),
                ),
            ]),
            Line::from(Span::styled(band.message(), Style::default().fg(color))),
        ];

        let mut details = Vec::new();
        if let Some(secs) = result.duration_secs() {
            details.push(format!("Time {}m {:02}s", secs / 60, secs % 60));
        }
        let unanswered = result.unanswered_count();
        if unanswered > 0 {
            details.push(format!("{unanswered} unanswered"));
        }
        if !details.is_empty() {
            lines.push(Line::from(Span::styled(
                details.join(" · "),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let weakest = result.weakest_domains(thresholds);
        if !weakest.is_empty() {
            let names: Vec<&str> = weakest.iter().map(|d| d.domain.as_str()).collect();
            lines.push(Line::from(vec![
                Span::styled("Focus on: ", Style::default().fg(Color::Yellow)),
                Span::raw(names.join(", ")),
            ]));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", finished.test.title)),
            )
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_domains(
        finished: &FinishedAttempt,
        thresholds: &ScoreThresholds,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Performance by Domain ");
        let inner = block.inner(area);
        block.render(area, buf);

        let scores = &finished.result.domain_scores;
        let rows = Layout::vertical(scores.iter().map(|_| Constraint::Length(1))).split(inner);

        for (domain, row) in scores.iter().zip(rows.iter()) {
            let [name_area, gauge_area] =
                Layout::horizontal([Constraint::Percentage(40), Constraint::Fill(1)]).areas(*row);

            Paragraph::new(domain.domain.clone()).render(name_area, buf);
            Gauge::default()
                .gauge_style(Style::default().fg(band_color(domain.band(thresholds))))
                .ratio(f64::from(domain.percentage.min(100)) / 100.0)
                .label(format!(
                    "{}% ({}/{})",
                    domain.percentage, domain.correct, domain.total
                ))
                .render(gauge_area, buf);
        }
    }

    fn render_review(&self, finished: &FinishedAttempt, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();

        for (i, question) in finished.test.questions.iter().enumerate() {
            let answer = finished.result.answer(question.id);
            let chosen = answer.and_then(|a| a.selected_option.as_deref());
            let correct = answer.is_some_and(|a| a.is_correct);

            let (mark, color) = match (chosen, correct) {
                (None, _) => ("–", Color::DarkGray),
                (Some(_), true) => ("✓", Color::Green),
                (Some(_), false) => ("✗", Color::Red),
            };

            lines.push(Line::from(vec![
                Span::styled(format!("{} ", mark), Style::default().fg(color)),
                Span::styled(
                    format!("{}. {}", i + 1, question.text),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!(
                    "   Your answer: {}   Correct: {}",
                    chosen.unwrap_or("none"),
                    question.correct_answer
                ),
                Style::default().fg(Color::DarkGray),
            )));
            if !correct && !question.explanation.is_empty() {
                lines.push(Line::from(format!("   {}", question.explanation)));
            }
            lines.push(Line::from(""));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Question Review (v to close) "),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.state.review_scroll, 0))
            .render(area, buf);
    }
}

impl<'a> Widget for ResultsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(finished) = self.state.session.finished() else {
            return;
        };

        if self.state.show_review {
            self.render_review(finished, area, buf);
            return;
        }

        let thresholds = self.state.session.thresholds();
        let [summary_area, domains_area] =
            Layout::vertical([Constraint::Length(6), Constraint::Fill(1)]).areas(area);

        Self::render_summary(finished, thresholds, summary_area, buf);
        Self::render_domains(finished, thresholds, domains_area, buf);
    }
}
