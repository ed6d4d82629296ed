//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Widget for rendering help overlay
#[derive(Default)]
pub struct HelpWidget;

impl HelpWidget {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn binding(keys: &'static str, description: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {:<10}", keys), Style::default().fg(Color::Yellow)),
            Span::raw(description),
        ])
    }

    fn build_help_text() -> Vec<Line<'static>> {
        vec![
            Self::section("Test Selection"),
            Self::binding("↑/↓ k/j", "Move between tests"),
            Self::binding("Enter", "Start the highlighted test"),
            Self::binding("q", "Quit"),
            Line::from(""),
            Self::section("During a Test"),
            Self::binding("↑/↓", "Move between options"),
            Self::binding("Enter/Space", "Select the highlighted option"),
            Self::binding("a b d …", "Select an option by its letter"),
            Self::binding("Shift+C", "Select option C (c checks)"),
            Self::binding("1-9", "Select an option by position"),
            Self::binding("c", "Check the answer and show the explanation"),
            Self::binding("n/→", "Next question (finishes on the last one)"),
            Self::binding("p/←", "Previous question"),
            Self::binding("x/Esc", "Abandon the test"),
            Line::from(""),
            Self::section("Results"),
            Self::binding("r", "Retake the same test"),
            Self::binding("s", "Choose another test"),
            Self::binding("v", "Toggle the question review"),
            Self::binding("j/k", "Scroll the review"),
            Self::binding("q", "Quit"),
            Line::from(""),
            Self::binding("?", "Toggle this help"),
            Self::binding("Ctrl+C", "Quit from anywhere"),
            Line::from(""),
            Line::from(Span::styled(
                "Press ? or Esc to close",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = Self::build_help_text();

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true });

        paragraph.render(area, buf);
    }
}
