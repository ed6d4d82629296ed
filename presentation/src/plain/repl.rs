//! REPL (Read-Eval-Print Loop) over a quiz session

use super::command::PlainCommand;
use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::formatter_for;
use colored::Colorize;
use quiz_application::{Outcome, QuizSession, Screen, ScreenKind};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use tracing::warn;

const HISTORY_CAPACITY: usize = 500;

/// Whether the loop keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive line-mode quiz
pub struct PlainRepl {
    session: QuizSession,
    output: OutputConfig,
    config: ReplConfig,
}

impl PlainRepl {
    pub fn new(session: QuizSession, output: OutputConfig) -> Self {
        Self {
            session,
            output,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> io::Result<()> {
        let mut editor = Reedline::create();

        if let Some(path) = &self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("History disabled: {}", e),
            }
        }

        println!("{}", self.welcome());
        println!("{}", self.render_screen());

        loop {
            let prompt = DefaultPrompt::new(
                DefaultPromptSegment::Basic(self.prompt_label()),
                DefaultPromptSegment::Empty,
            );

            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let (text, flow) = self.dispatch(PlainCommand::parse(&line));
                    if !text.is_empty() {
                        println!("{}", text);
                    }
                    if flow == Flow::Quit {
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                }
                _ => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Apply one command and return the text to print
    pub fn dispatch(&mut self, command: PlainCommand) -> (String, Flow) {
        let text = match command {
            PlainCommand::Empty => String::new(),
            PlainCommand::Quit => return ("Bye!".to_string(), Flow::Quit),
            PlainCommand::Help => self.help(),
            PlainCommand::List => ConsoleFormatter::format_test_list(self.session.tests()),
            PlainCommand::Input(token) => self.handle_input(&token),
            PlainCommand::Check => {
                let outcome = self.session.check_answer();
                self.render_outcome(outcome)
            }
            PlainCommand::Next => {
                let outcome = self.session.advance();
                self.render_outcome(outcome)
            }
            PlainCommand::Prev => {
                let outcome = self.session.retreat();
                self.render_outcome(outcome)
            }
            PlainCommand::ExitTest => {
                let outcome = self.session.exit_test();
                self.render_outcome(outcome)
            }
            PlainCommand::Retake => match self.session.retake() {
                Ok(()) => self.render_screen(),
                Err(e) => e.to_string().yellow().to_string(),
            },
            PlainCommand::NewTest => {
                self.session.select_new_test();
                self.render_screen()
            }
            PlainCommand::Review => match self.session.finished() {
                Some(finished) => ConsoleFormatter::format_review(&finished.test, &finished.result),
                None => "Nothing to review until a test is finished."
                    .yellow()
                    .to_string(),
            },
            PlainCommand::Unknown(line) => {
                format!("Unknown command: {} (try /help)", line)
                    .yellow()
                    .to_string()
            }
        };
        (text, Flow::Continue)
    }

    fn handle_input(&mut self, token: &str) -> String {
        match self.session.screen_kind() {
            ScreenKind::Selector => {
                let Ok(id) = token.parse() else {
                    return format!("Enter a test number, not '{}'", token)
                        .yellow()
                        .to_string();
                };
                match self.session.select_test(id) {
                    Ok(()) => self.render_screen(),
                    Err(e) => e.to_string().yellow().to_string(),
                }
            }
            ScreenKind::Quiz => {
                let option_id = self
                    .session
                    .controller()
                    .and_then(|c| c.current_question().option_by_label(token))
                    .map(|o| o.id.clone());
                match option_id {
                    Some(id) => {
                        let outcome = self.session.select_option(&id);
                        self.render_outcome(outcome)
                    }
                    None => format!("No option '{}' for this question", token)
                        .yellow()
                        .to_string(),
                }
            }
            ScreenKind::Results => "Use /retake, /new or /review".yellow().to_string(),
        }
    }

    fn render_outcome(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Applied | Outcome::Completed(_) => self.render_screen(),
            Outcome::Ignored(reason) => reason.to_string().yellow().to_string(),
            Outcome::Exited => format!("{}\n{}", "Test abandoned.".dimmed(), self.render_screen()),
        }
    }

    fn render_screen(&self) -> String {
        match self.session.screen() {
            Screen::Selector => format!(
                "{}\nEnter a test number to begin.",
                ConsoleFormatter::format_test_list(self.session.tests())
            ),
            Screen::Quiz(attempt) => ConsoleFormatter::format_question(&attempt.controller),
            Screen::Results(finished) => formatter_for(self.output.format).result(
                &finished.test,
                &finished.result,
                self.session.thresholds(),
            ),
        }
    }

    fn prompt_label(&self) -> String {
        match self.session.controller() {
            Some(c) => format!("q{}/{}", c.current_index() + 1, c.total()),
            None => match self.session.screen_kind() {
                ScreenKind::Results => "results".to_string(),
                _ => "select".to_string(),
            },
        }
    }

    fn welcome(&self) -> String {
        format!(
            "{}\nType /help for commands, /quit to leave.",
            "cert-quiz".cyan().bold()
        )
    }

    fn help(&self) -> String {
        let lines: &[&str] = match self.session.screen_kind() {
            ScreenKind::Selector => &["  <number>   Start that test", "  /list      Show tests"],
            ScreenKind::Quiz => &[
                "  <letter>   Select that option",
                "  /check /c  Check the answer and show the explanation",
                "  /next /n   Next question (finishes on the last one)",
                "  /prev /p   Previous question",
                "  /exit /x   Abandon this test",
            ],
            ScreenKind::Results => &[
                "  /retake /r Take the same test again",
                "  /new /s    Choose another test",
                "  /review /v Review every question",
            ],
        };
        format!(
            "{}\n{}\n  /help      Show this help\n  /quit      Leave",
            "Commands:".cyan().bold(),
            lines.join("\n")
        )
    }
}
