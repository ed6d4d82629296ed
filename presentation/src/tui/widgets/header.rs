//! Header widget: shows which test is running and where the user is

use crate::tui::state::TuiState;
use quiz_application::Screen;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let line = match self.state.session.screen() {
            Screen::Selector => Line::from(vec![
                Span::styled("◉ ", Style::default().fg(Color::Green)),
                Span::styled("Choose a practice test", title_style),
                Span::raw(" | "),
                Span::styled(
                    format!("{} available", self.state.session.tests().len()),
                    Style::default().fg(Color::White),
                ),
            ]),
            Screen::Quiz(attempt) => {
                let c = &attempt.controller;
                Line::from(vec![
                    Span::styled("◉ ", Style::default().fg(Color::Green)),
                    Span::styled(c.test().title.clone(), title_style),
                    Span::raw(" | "),
                    Span::styled(
                        format!("Question {} of {}", c.current_index() + 1, c.total()),
                        Style::default().fg(Color::White),
                    ),
                    Span::raw(" | "),
                    Span::styled(
                        format!("{} answered", c.answered_count()),
                        Style::default().fg(Color::Yellow),
                    ),
                ])
            }
            Screen::Results(finished) => Line::from(vec![
                Span::styled("◉ ", Style::default().fg(Color::Green)),
                Span::styled(finished.test.title.clone(), title_style),
                Span::raw(" | "),
                Span::styled(
                    format!(
                        "Score {}/{} ({}%)",
                        finished.result.score,
                        finished.result.total_questions,
                        finished.result.percentage
                    ),
                    Style::default().fg(super::band_color(
                        finished.result.band(self.state.session.thresholds()),
                    )),
                ),
            ]),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" cert-quiz ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
