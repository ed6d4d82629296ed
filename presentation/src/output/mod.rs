//! Output formatting for the line mode and one-shot commands

pub mod console;
pub mod formatter;
pub mod json;
