//! TUI application: main loop
//!
//! ```text
//! TuiApp (select! loop)
//!   ├─ crossterm EventStream ── KeyHandler::handle(view, key) ── TuiState::apply(action)
//!   └─ tick_interval ────────── TuiState::expire_flash
//! ```
//!
//! Every state change happens synchronously on the loop task; the session
//! is owned by [`TuiState`] and never shared.

use super::mode::KeyHandler;
use super::state::TuiState;
use super::widgets::{
    MainLayout, header::HeaderWidget, help::HelpWidget, question::QuestionWidget,
    results::ResultsWidget, selector::SelectorWidget, status_bar::StatusBarWidget,
};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use quiz_application::{QuizSession, ScreenKind};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

const TICK: Duration = Duration::from_millis(250);
const FLASH_TTL: Duration = Duration::from_secs(4);

/// Main TUI application
pub struct TuiApp {
    state: TuiState,
}

impl TuiApp {
    pub fn new(session: QuizSession) -> Self {
        Self {
            state: TuiState::new(session),
        }
    }

    /// The session, for reading the final screen after the loop exits
    pub fn session(&self) -> &QuizSession {
        &self.state.session
    }

    /// Run the TUI main loop until the user quits
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let result = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(TICK);
        info!("TUI started with {} test(s)", self.state.session.tests().len());

        loop {
            terminal.draw(|frame| render(frame, &self.state))?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_terminal_event(event),
                    Some(Err(e)) => return Err(e),
                    None => break,
                },

                // Tick for flash expiry
                _ = tick.tick() => {
                    self.state.expire_flash(FLASH_TTL);
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) {
        // Resize just triggers the redraw at the top of the loop
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = KeyHandler::handle(self.state.view(), key);
        debug!("Key {:?} -> {:?}", key.code, action);
        self.state.apply(action);
    }
}

/// Render all widgets for the current state
pub fn render(frame: &mut Frame, state: &TuiState) {
    let layout = MainLayout::compute(frame.area());

    frame.render_widget(HeaderWidget::new(state), layout.header);
    match state.session.screen_kind() {
        ScreenKind::Selector => frame.render_widget(SelectorWidget::new(state), layout.body),
        ScreenKind::Quiz => frame.render_widget(QuestionWidget::new(state), layout.body),
        ScreenKind::Results => frame.render_widget(ResultsWidget::new(state), layout.body),
    }
    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

    // Help overlay
    if state.show_help {
        let help_area = MainLayout::centered_overlay(70, 70, frame.area());
        frame.render_widget(ratatui::widgets::Clear, help_area);
        frame.render_widget(HelpWidget::new(), help_area);
    }
}
