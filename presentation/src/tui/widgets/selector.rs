//! Test selector widget: the list of practice tests

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct SelectorWidget<'a> {
    state: &'a TuiState,
}

impl<'a> SelectorWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for SelectorWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tests = self.state.session.tests();
        let mut lines = Vec::new();

        if tests.is_empty() {
            lines.push(Line::from(Span::styled(
                "No tests in the question bank.",
                Style::default().fg(Color::Yellow),
            )));
        }

        for (i, test) in tests.iter().enumerate() {
            let highlighted = i == self.state.selector_cursor;
            let pointer = if highlighted { "▶ " } else { "  " };
            let title_style = if highlighted {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };

            lines.push(Line::from(vec![
                Span::styled(pointer, Style::default().fg(Color::Cyan)),
                Span::styled(format!(" {} ", test.title), title_style),
                Span::styled(
                    format!("  {} questions", test.question_count()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            if !test.description.is_empty() {
                lines.push(Line::from(format!("    {}", test.description)));
            }
            lines.push(Line::from(Span::styled(
                format!("    {}", test.question_domains().join(" · ")),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Practice Tests ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
