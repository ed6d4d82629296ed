//! Question widget: progress gauge, prompt, options and explanation

use crate::tui::state::TuiState;
use quiz_application::QuizController;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};

pub struct QuestionWidget<'a> {
    state: &'a TuiState,
}

impl<'a> QuestionWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn option_lines(&self, controller: &QuizController) -> Vec<Line<'static>> {
        let question = controller.current_question();
        let revealed = controller.is_revealed();
        let selected = controller.current_answer().selected_option.as_deref();

        question
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let is_selected = selected == Some(option.id.as_str());
                let is_correct = question.is_correct(&option.id);
                let highlighted = i == self.state.option_cursor && !revealed;

                let (marker, color) = match (revealed, is_selected, is_correct) {
                    (true, _, true) => ("✓", Color::Green),
                    (true, true, false) => ("✗", Color::Red),
                    (true, false, false) => (" ", Color::DarkGray),
                    (false, true, _) => ("●", Color::Cyan),
                    (false, false, _) => ("○", Color::White),
                };

                let mut style = Style::default().fg(color);
                if is_selected {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if highlighted {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                Line::from(vec![
                    Span::styled(format!(" {} ", marker), Style::default().fg(color)),
                    Span::styled(format!("{}. {}", option.id, option.text), style),
                ])
            })
            .collect()
    }
}

impl<'a> Widget for QuestionWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(controller) = self.state.session.controller() else {
            return;
        };
        let question = controller.current_question();

        let [gauge_area, body_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);

        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Progress "))
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .ratio(controller.progress().clamp(0.0, 1.0))
            .label(format!(
                "Question {} of {}",
                controller.current_index() + 1,
                controller.total()
            ))
            .render(gauge_area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                format!("Domain: {}", question.domain),
                Style::default().fg(Color::Magenta),
            )),
            Line::from(""),
            Line::from(Span::styled(
                question.text.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(self.option_lines(controller));

        if controller.is_revealed() {
            let verdict = if controller.current_answer().is_correct {
                Span::styled(
                    "Correct!",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    format!("Incorrect. The answer is {}.", question.correct_answer),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )
            };
            lines.push(Line::from(""));
            lines.push(Line::from(verdict));
            if !question.explanation.is_empty() {
                lines.push(Line::from(Span::styled(
                    "Explanation:",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(question.explanation.clone()));
            }
        } else if controller.can_check() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Press c to check your answer",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", controller.test().title))
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(body_area, buf);
    }
}
