//! TUI view-based key handling
//!
//! Each screen of the session has its own key map:
//! - Selector: choose a test
//! - Quiz: answer, check and move between questions
//! - Results: retake, pick another test, review answers
//! - Help: overlay that swallows keys until closed

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quiz_application::ScreenKind;

/// What the user is looking at (determines the key map)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Selector,
    Quiz,
    Results,
    Help,
}

impl From<ScreenKind> for View {
    fn from(kind: ScreenKind) -> Self {
        match kind {
            ScreenKind::Selector => View::Selector,
            ScreenKind::Quiz => View::Quiz,
            ScreenKind::Results => View::Results,
        }
    }
}

impl View {
    /// Get the view indicator string for status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Selector => "SELECT",
            Self::Quiz => "QUIZ",
            Self::Results => "RESULTS",
            Self::Help => "HELP",
        }
    }

    /// Get the view color for status line
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Selector => Color::Blue,
            Self::Quiz => Color::Green,
            Self::Results => Color::Yellow,
            Self::Help => Color::Magenta,
        }
    }

    /// Key hints for the status line
    pub fn hints(&self) -> &'static str {
        match self {
            Self::Selector => "↑/↓:move  Enter:start  ?:help  q:quit",
            Self::Quiz => "↑/↓:move  Enter:select  c:check  n/p:next/prev  x:exit  ?:help",
            Self::Results => "r:retake  s:select test  v:review  j/k:scroll  q:quit",
            Self::Help => "?/Esc:close",
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move the highlight up (test or option)
    MoveUp,
    /// Move the highlight down (test or option)
    MoveDown,
    /// Start the highlighted test
    StartTest,
    /// Select the highlighted option
    SelectHighlighted,
    /// Select an option by its identifier
    SelectOption(char),
    /// Select the n-th option (1-based)
    SelectNth(usize),
    /// Check the current answer
    Check,
    /// Next question (finishes the test on the last one)
    Advance,
    /// Previous question
    Retreat,
    /// Abandon the running test
    ExitTest,
    /// Same test again from scratch
    Retake,
    /// Back to the test selector
    SelectNewTest,
    /// Toggle the question review on the results screen
    ToggleReview,
    /// Scroll up
    ScrollUp,
    /// Scroll down
    ScrollDown,
    /// Show or hide help
    ToggleHelp,
    /// Quit application
    Quit,
    /// No action
    None,
}

/// Key event handler - maps key events to actions based on current view
pub struct KeyHandler;

impl KeyHandler {
    /// Handle key event in the given view
    pub fn handle(view: View, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match view {
            View::Selector => Self::handle_selector(key),
            View::Quiz => Self::handle_quiz(key),
            View::Results => Self::handle_results(key),
            View::Help => Self::handle_help(key),
        }
    }

    fn handle_selector(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
            KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
            KeyCode::Enter => Action::StartTest,
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ToggleHelp,
            _ => Action::None,
        }
    }

    fn handle_quiz(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => Action::MoveUp,
            KeyCode::Down => Action::MoveDown,
            KeyCode::Enter | KeyCode::Char(' ') => Action::SelectHighlighted,

            KeyCode::Char('c') => Action::Check,
            KeyCode::Char('n') | KeyCode::Right => Action::Advance,
            KeyCode::Char('p') | KeyCode::Left => Action::Retreat,
            KeyCode::Char('x') | KeyCode::Esc => Action::ExitTest,
            KeyCode::Char('?') => Action::ToggleHelp,

            // Option ids: lowercase letters not bound above, or Shift+letter
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Action::SelectOption(c),
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(n) if n > 0 => Action::SelectNth(n as usize),
                _ => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_results(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('r') => Action::Retake,
            KeyCode::Char('s') => Action::SelectNewTest,
            KeyCode::Char('v') => Action::ToggleReview,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ToggleHelp,
            _ => Action::None,
        }
    }

    fn handle_help(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => Action::ToggleHelp,
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_view_from_screen_kind() {
        assert_eq!(View::from(ScreenKind::Selector), View::Selector);
        assert_eq!(View::from(ScreenKind::Quiz), View::Quiz);
        assert_eq!(View::from(ScreenKind::Results), View::Results);
    }

    #[test]
    fn test_view_indicator() {
        assert_eq!(View::Selector.indicator(), "SELECT");
        assert_eq!(View::Quiz.indicator(), "QUIZ");
        assert_eq!(View::Results.indicator(), "RESULTS");
        assert_eq!(View::Help.indicator(), "HELP");
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for view in [View::Selector, View::Quiz, View::Results, View::Help] {
            assert_eq!(KeyHandler::handle(view, ctrl_c), Action::Quit);
        }
    }

    #[test]
    fn test_selector_keys() {
        assert_eq!(KeyHandler::handle(View::Selector, key(KeyCode::Up)), Action::MoveUp);
        assert_eq!(KeyHandler::handle(View::Selector, key(KeyCode::Char('j'))), Action::MoveDown);
        assert_eq!(KeyHandler::handle(View::Selector, key(KeyCode::Enter)), Action::StartTest);
        assert_eq!(KeyHandler::handle(View::Selector, key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(KeyHandler::handle(View::Selector, key(KeyCode::Char('?'))), Action::ToggleHelp);
    }

    #[test]
    fn test_quiz_keys() {
        assert_eq!(KeyHandler::handle(View::Quiz, key(KeyCode::Enter)), Action::SelectHighlighted);
        assert_eq!(KeyHandler::handle(View::Quiz, key(KeyCode::Char(' '))), Action::SelectHighlighted);
        assert_eq!(KeyHandler::handle(View::Quiz, key(KeyCode::Char('c'))), Action::Check);
        assert_eq!(KeyHandler::handle(View::Quiz, key(KeyCode::Right)), Action::Advance);
        assert_eq!(KeyHandler::handle(View::Quiz, key(KeyCode::Char('n'))), Action::Advance);
        assert_eq!(KeyHandler::handle(View::Quiz, key(KeyCode::Left)), Action::Retreat);
        assert_eq!(KeyHandler::handle(View::Quiz, key(KeyCode::Esc)), Action::ExitTest);
        assert_eq!(KeyHandler::handle(View::Quiz, key(KeyCode::Char('x'))), Action::ExitTest);
    }

    #[test]
    fn test_quiz_option_keys() {
        assert_eq!(KeyHandler::handle(View::Quiz, key(KeyCode::Char('a'))), Action::SelectOption('a'));
        assert_eq!(KeyHandler::handle(View::Quiz, key(KeyCode::Char('C'))), Action::SelectOption('C'));
        assert_eq!(KeyHandler::handle(View::Quiz, key(KeyCode::Char('3'))), Action::SelectNth(3));
        assert_eq!(KeyHandler::handle(View::Quiz, key(KeyCode::Char('0'))), Action::None);
        // j/k are not navigation in a quiz, they could be option ids
        assert_eq!(KeyHandler::handle(View::Quiz, key(KeyCode::Char('j'))), Action::SelectOption('j'));
    }

    #[test]
    fn test_results_keys() {
        assert_eq!(KeyHandler::handle(View::Results, key(KeyCode::Char('r'))), Action::Retake);
        assert_eq!(KeyHandler::handle(View::Results, key(KeyCode::Char('s'))), Action::SelectNewTest);
        assert_eq!(KeyHandler::handle(View::Results, key(KeyCode::Char('v'))), Action::ToggleReview);
        assert_eq!(KeyHandler::handle(View::Results, key(KeyCode::Char('j'))), Action::ScrollDown);
        assert_eq!(KeyHandler::handle(View::Results, key(KeyCode::Char('q'))), Action::Quit);
    }

    #[test]
    fn test_help_swallows_keys() {
        assert_eq!(KeyHandler::handle(View::Help, key(KeyCode::Char('r'))), Action::None);
        assert_eq!(KeyHandler::handle(View::Help, key(KeyCode::Esc)), Action::ToggleHelp);
        assert_eq!(KeyHandler::handle(View::Help, key(KeyCode::Char('?'))), Action::ToggleHelp);
    }
}
