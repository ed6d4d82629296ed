//! TUI application state
//!
//! Single source of truth for everything the TUI renders: the quiz session
//! plus the purely visual bits (highlight cursors, overlays, flash line).
//! Updated only through [`TuiState::apply`].

use super::mode::{Action, View};
use quiz_application::{Outcome, QuizSession, ScreenKind};
use tracing::debug;

/// Central TUI state: owned by the TuiApp select! loop
pub struct TuiState {
    // -- Session --
    pub session: QuizSession,

    // -- Highlights --
    pub selector_cursor: usize,
    pub option_cursor: usize,

    // -- Results --
    pub show_review: bool,
    pub review_scroll: u16,

    // -- Overlay --
    pub show_help: bool,
    pub flash_message: Option<(String, std::time::Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            selector_cursor: 0,
            option_cursor: 0,
            show_review: false,
            review_scroll: 0,
            show_help: false,
            flash_message: None,
            should_quit: false,
        }
    }

    /// The key map currently in effect
    pub fn view(&self) -> View {
        if self.show_help {
            View::Help
        } else {
            View::from(self.session.screen_kind())
        }
    }

    /// Apply a user action to the session and view state
    pub fn apply(&mut self, action: Action) {
        debug!("Applying {:?} in {:?}", action, self.view());

        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::ToggleHelp => self.show_help = !self.show_help,

            Action::MoveUp => match self.session.screen_kind() {
                ScreenKind::Selector => {
                    self.selector_cursor = self.selector_cursor.saturating_sub(1);
                }
                _ => self.option_cursor = self.option_cursor.saturating_sub(1),
            },
            Action::MoveDown => match self.session.screen_kind() {
                ScreenKind::Selector => {
                    let last = self.session.tests().len().saturating_sub(1);
                    self.selector_cursor = (self.selector_cursor + 1).min(last);
                }
                _ => {
                    let last = self.option_count().saturating_sub(1);
                    self.option_cursor = (self.option_cursor + 1).min(last);
                }
            },

            Action::StartTest => self.start_highlighted(),
            Action::SelectHighlighted => {
                let index = self.option_cursor;
                self.select_where(|options| options.get(index).cloned());
            }
            Action::SelectOption(c) => {
                let label = c.to_string();
                self.select_where(|options| {
                    options.iter().find(|id| id.eq_ignore_ascii_case(&label)).cloned()
                });
            }
            Action::SelectNth(n) => {
                self.select_where(|options| options.get(n.saturating_sub(1)).cloned());
            }

            Action::Check => {
                let outcome = self.session.check_answer();
                self.after(outcome);
            }
            Action::Advance => {
                let outcome = self.session.advance();
                self.after(outcome);
            }
            Action::Retreat => {
                let outcome = self.session.retreat();
                self.after(outcome);
            }
            Action::ExitTest => {
                let outcome = self.session.exit_test();
                self.after(outcome);
            }

            Action::Retake => match self.session.retake() {
                Ok(()) => self.reset_quiz_view(),
                Err(e) => self.set_flash(e.to_string()),
            },
            Action::SelectNewTest => {
                self.session.select_new_test();
                self.show_review = false;
            }
            Action::ToggleReview => {
                self.show_review = !self.show_review;
                self.review_scroll = 0;
            }
            Action::ScrollUp => self.review_scroll = self.review_scroll.saturating_sub(1),
            Action::ScrollDown => self.review_scroll = self.review_scroll.saturating_add(1),
        }
    }

    fn start_highlighted(&mut self) {
        let Some(id) = self.session.tests().get(self.selector_cursor).map(|t| t.id) else {
            self.set_flash("No tests available");
            return;
        };
        match self.session.select_test(id) {
            Ok(()) => self.reset_quiz_view(),
            Err(e) => self.set_flash(e.to_string()),
        }
    }

    /// Select the option id picked from the current question's option ids
    fn select_where(&mut self, pick: impl FnOnce(&[String]) -> Option<String>) {
        let Some(controller) = self.session.controller() else {
            return;
        };
        let ids: Vec<String> = controller
            .current_question()
            .options
            .iter()
            .map(|o| o.id.clone())
            .collect();

        match pick(&ids) {
            Some(id) => {
                let outcome = self.session.select_option(&id);
                self.after(outcome);
            }
            None => self.set_flash("No such option for this question"),
        }
    }

    /// Sync view state with the session after an intent
    fn after(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Applied => self.sync_option_cursor(),
            Outcome::Ignored(reason) => self.set_flash(capitalize(&reason.to_string())),
            Outcome::Completed(_) => {
                self.show_review = false;
                self.review_scroll = 0;
                self.set_flash("Test complete");
            }
            Outcome::Exited => self.set_flash("Test abandoned"),
        }
    }

    fn reset_quiz_view(&mut self) {
        self.option_cursor = 0;
        self.show_review = false;
        self.review_scroll = 0;
        self.flash_message = None;
    }

    /// Keep the highlight on the chosen option, or the top when none is chosen
    fn sync_option_cursor(&mut self) {
        if let Some(controller) = self.session.controller() {
            let question = controller.current_question();
            self.option_cursor = controller
                .current_answer()
                .selected_option
                .as_deref()
                .and_then(|id| question.option_index(id))
                .unwrap_or(0);
        }
    }

    fn option_count(&self) -> usize {
        self.session
            .controller()
            .map(|c| c.current_question().options.len())
            .unwrap_or(0)
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), std::time::Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: std::time::Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
