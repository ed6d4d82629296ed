//! Status bar widget: view indicator + key hints + flash messages

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let view = self.state.view();

        // Left: view indicator
        let view_text = view.indicator();
        let view_style = Style::default()
            .fg(Color::Black)
            .bg(view.color())
            .add_modifier(Modifier::BOLD);
        let view_line = Line::from(vec![Span::styled(format!(" {} ", view_text), view_style)]);
        let view_width = view_text.len() as u16 + 2;
        buf.set_line(area.x, area.y, &view_line, view_width);

        // Right: flash message, or key hints
        let (right_text, right_style) = match &self.state.flash_message {
            Some((flash, _)) => (
                flash.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ),
            None => (
                view.hints(),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ),
        };

        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + view_width {
            let right_line = Line::from(vec![Span::styled(right_text, right_style)]);
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
