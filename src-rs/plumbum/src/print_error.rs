//! Error message formatting and display functionality
//!
//! ```text
//! error: invalid value "sideways" for option `surface form`
//!  --> during options
//!   = help: `surface form` accepts false, "differential", "algebraic"
//! ```

use anstream::eprintln;
use owo_colors::{OwoColorize, Style};
use plumbum_shared::error::{Context, PlumbumError};

use crate::stylesheet;

/// Prints a formatted error message to standard error
pub fn print(error: &PlumbumError, print_debug: bool) {
    if print_debug {
        eprintln!("{error:?}");
    } else {
        let error_string = error_to_string(error);
        eprintln!("{error_string}");
    }
}

/// Prints a warning that is not tied to a pipeline stage
pub fn print_warning(message: &str) {
    let message_line = get_message_line("warning", stylesheet::WARNING_COLOR, message);
    eprintln!("{message_line}");
}

/// Converts an error to a formatted string representation
fn error_to_string(error: &PlumbumError) -> String {
    let message_line = get_message_line("error", stylesheet::ERROR_COLOR, error.message());
    let stage_line = get_stage_line(error);
    let context_lines = error.context().iter().map(get_context_line);

    let mut lines = vec![message_line, stage_line];
    lines.extend(context_lines);

    lines.join("\n")
}

fn get_stage_line(error: &PlumbumError) -> String {
    let arrow = "-->".style(stylesheet::NOTE_COLOR);
    format!(" {arrow} during {}", error.stage())
}

fn get_context_line(context: &Context) -> String {
    let (kind, color, message) = match context {
        Context::Note(message) => ("note", stylesheet::NOTE_COLOR, message),
        Context::Help(message) => ("help", stylesheet::HELP_COLOR, message),
    };

    let equals = "=".style(color);
    let kind = kind.style(color).bold().to_string();
    format!("  {equals} {kind}: {message}")
}

/// Formats a message line such as `error: <message>`
fn get_message_line(kind: &str, color: Style, message: &str) -> String {
    let kind_str = kind.style(color);
    format!("{kind_str}: {message}").bold().to_string()
}
