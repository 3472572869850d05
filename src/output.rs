//! Terminal output formatting for the chromatext CLI.
//!
//! Provides Cargo-style status output with right-aligned coloured verbs.
//! All status output goes to stderr; stdout is reserved for results.
//! Verbs are coloured with the engine's own markup and ANSI encoder.

use std::io::{self, IsTerminal, Write};

use crate::encode::AnsiEncoder;
use crate::engine::Engine;

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

const GREEN: &str = "#55ff55";
const CYAN: &str = "#55ffff";
const YELLOW: &str = "#ffff55";

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    engine: Option<Engine>,
}

impl Printer {
    pub fn new() -> Self {
        Self::with_color(io::stderr().is_terminal())
    }

    pub fn with_color(color: bool) -> Self {
        let engine = color.then(|| Engine::builder().encoder(Box::new(AnsiEncoder::new())).build());
        Self { engine }
    }

    /// Print a status line with a green verb.
    /// e.g. "   Colorized 3 lines"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    /// Print a warning line with a yellow verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Format a status line without printing it.
    pub fn format_line(&self, color: &str, verb: &str, message: &str) -> String {
        let verb = format!("{verb:>VERB_WIDTH$}");
        match &self.engine {
            Some(engine) => format!(
                "{}{} {message}",
                engine.colorize(&format!("{color}{verb}"), true),
                engine.reset()
            ),
            None => format!("{verb} {message}"),
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let line = self.format_line(color, verb, message);
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{line}");
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pluralize a count: `plural(1, "line", "lines")` → "1 line".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}
