//! Collector for diagnostics reported by the scanner, parser and interpreter.
//!
//! Every pass receives the sink by `&mut` and reports into it, so nothing is
//! shared between independent runs. The driver decides what to print and
//! whether to halt.

use std::fmt::Write;

use super::errors::{Error, ErrorTip};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    errors: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { errors: vec![] }
    }

    pub fn report(&mut self, error: Error) {
        tracing::debug!(line = error.get_line(), kind = error.get_error_name(), "diagnostic reported");
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Renders every diagnostic with an excerpt of the line it points at.
    ///
    /// ```text
    /// [line 2] ERROR: Operand must be a number.
    ///   |
    /// 2 | -true
    ///   = Operator `-` expected a number, received `bool`
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut out = String::new();

        for error in &self.errors {
            render_error(&mut out, error, source);
        }

        out
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

fn render_error(out: &mut String, error: &Error, source: &str) {
    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", error);

    if let Some(line_text) = get_line(source, error.get_line()) {
        let _ = writeln!(out, "{:>padding$}", "|");
        let _ = writeln!(out, "{} | {}", line_string, line_text.trim());
    }

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        let _ = writeln!(out, "{:>padding$} {}", "=", tip);
    }
}

/// Returns the text of a 1-based line, if the source has that many lines.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source.split('\n').nth(line - 1)
}
