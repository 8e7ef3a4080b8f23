//! Common helper functions shared across CLI commands
//!
//! This module provides exit codes, logging setup and colored terminal
//! output used by the command runners.

use crate::cli::args::ColorChoice;
use std::io::{IsTerminal, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};
use tracing_subscriber::EnvFilter;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "UPVER_LOG";

/// Install the stderr tracing subscriber
///
/// The filter comes from `UPVER_LOG` (for example `debug` or `upver=trace`)
/// and defaults to `warn`. Calling this twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Resolve the CLI color flag for a stream
pub(crate) fn resolve_color(choice: ColorChoice, is_terminal: bool) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto if is_terminal => termcolor::ColorChoice::Auto,
        ColorChoice::Auto => termcolor::ColorChoice::Never,
    }
}

pub(crate) fn stdout(choice: ColorChoice) -> StandardStream {
    StandardStream::stdout(resolve_color(choice, std::io::stdout().is_terminal()))
}

pub(crate) fn stderr(choice: ColorChoice) -> StandardStream {
    StandardStream::stderr(resolve_color(choice, std::io::stderr().is_terminal()))
}

/// Write `text` in bold with the given color, then reset
pub(crate) fn write_colored<W: WriteColor>(
    out: &mut W,
    color: Color,
    text: &str,
) -> std::io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", text)?;
    out.reset()
}

/// Print `Error: <message>` to stderr
pub(crate) fn report_error(choice: ColorChoice, message: &dyn std::fmt::Display) {
    let mut err = stderr(choice);
    let _ = write_colored(&mut err, Color::Red, "Error:");
    let _ = writeln!(err, " {}", message);
}
