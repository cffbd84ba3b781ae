//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! stdout carries command results (the mesh, `config show`, JSON stats).
//! Everything meant for a human watching the run goes to stderr and
//! respects the quiet flag.

use std::fmt::Display;

use crate::core::coloring::ColorUsage;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Default `tracing` filter directive for this level.
    pub fn log_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Debug => "debug",
        }
    }
}

/// Print a command result to stdout.
pub fn print(message: impl Display) {
    println!("{}", message);
}

/// Print a diagnostic line to stderr (respects quiet mode).
pub fn note(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("{}", message);
    }
}

/// Print a debug message to stderr (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format color usage the way the stats report shows it.
///
/// ```
/// use gridcolor::core::coloring::ColorUsage;
/// use gridcolor::ui::output::format_usage;
///
/// let usage = ColorUsage { color_count: 2, counts: vec![3, 2] };
/// assert_eq!(format_usage(&usage), "colors_used = 2\nused = [3, 2]");
/// ```
pub fn format_usage(usage: &ColorUsage) -> String {
    format!(
        "colors_used = {}\nused = [{}]",
        usage.color_count,
        format_list(&usage.counts, ", ")
    )
}

/// Join items with a separator.
pub fn format_list<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
