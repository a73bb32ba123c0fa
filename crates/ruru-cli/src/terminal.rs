// Rust guideline compliant 2026-10-16

//! Terminal utilities for the Ruru CLI.

use std::env;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    color_enabled(
        env::var_os("NO_COLOR").is_some(),
        atty::is(atty::Stream::Stderr),
    )
}

/// Decides color from the NO_COLOR setting and whether stderr is a terminal.
#[must_use]
pub fn color_enabled(no_color: bool, is_tty: bool) -> bool {
    !no_color && is_tty
}

/// Prints a status message with a colored prefix to stderr.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
/// * `use_color` - Whether to emit color codes
pub fn print_status(prefix: &str, prefix_color: Color, message: &str, use_color: bool) {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = write_status(&mut stderr, prefix, prefix_color, message);
}

/// Writes `prefix: message` to `out`, coloring the prefix if `out` supports it.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_status<W: WriteColor>(
    out: &mut W,
    prefix: &str,
    prefix_color: Color,
    message: &str,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true))?;
    write!(out, "{}: ", prefix)?;
    out.reset()?;
    writeln!(out, "{}", message)
}

/// Prints an error message to stderr.
pub fn print_error(message: &str, use_color: bool) {
    print_status("error", Color::Red, message, use_color);
}
