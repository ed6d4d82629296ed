//! Line-mode command parsing

/// One parsed line of input.
///
/// Slash-prefixed words are commands; anything else is an [`Input`]
/// whose meaning depends on the screen (a test id on the selector, an
/// option id during a test).
///
/// [`Input`]: PlainCommand::Input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlainCommand {
    /// Bare token: test id or option id
    Input(String),
    Check,
    Next,
    Prev,
    ExitTest,
    Retake,
    NewTest,
    Review,
    List,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl PlainCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }

        let Some(command) = line.strip_prefix('/') else {
            return Self::Input(line.to_string());
        };

        match command.trim().to_ascii_lowercase().as_str() {
            "check" | "c" => Self::Check,
            "next" | "n" => Self::Next,
            "prev" | "p" | "back" => Self::Prev,
            "exit" | "x" => Self::ExitTest,
            "retake" | "r" => Self::Retake,
            "new" | "s" => Self::NewTest,
            "review" | "v" => Self::Review,
            "list" | "l" => Self::List,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_tokens_are_input() {
        assert_eq!(PlainCommand::parse(" b "), PlainCommand::Input("b".into()));
        assert_eq!(PlainCommand::parse("2"), PlainCommand::Input("2".into()));
    }

    #[test]
    fn test_commands_and_aliases() {
        assert_eq!(PlainCommand::parse("/check"), PlainCommand::Check);
        assert_eq!(PlainCommand::parse("/C"), PlainCommand::Check);
        assert_eq!(PlainCommand::parse("/n"), PlainCommand::Next);
        assert_eq!(PlainCommand::parse("/back"), PlainCommand::Prev);
        assert_eq!(PlainCommand::parse("/x"), PlainCommand::ExitTest);
        assert_eq!(PlainCommand::parse("/retake"), PlainCommand::Retake);
        assert_eq!(PlainCommand::parse("/new"), PlainCommand::NewTest);
        assert_eq!(PlainCommand::parse("/v"), PlainCommand::Review);
        assert_eq!(PlainCommand::parse("/?"), PlainCommand::Help);
        assert_eq!(PlainCommand::parse("/quit"), PlainCommand::Quit);
    }

    #[test]
    fn test_empty_and_unknown() {
        assert_eq!(PlainCommand::parse("   "), PlainCommand::Empty);
        assert_eq!(
            PlainCommand::parse("/frobnicate"),
            PlainCommand::Unknown("/frobnicate".into())
        );
    }
}
