//! Diagnostic formatting for lexer errors
//!
//! This module renders a [`LexError`] with its location and, when the source
//! text is available, the offending line with a caret under the column.

use super::LexError;
use crate::lexer::Position;
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic<'a> {
    error: &'a LexError,
    source: Option<&'a str>,
    filename: Option<&'a str>,
}

impl<'a> Diagnostic<'a> {
    /// Create a new diagnostic from an error
    pub fn new(error: &'a LexError) -> Self {
        Self {
            error,
            source: None,
            filename: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: &'a LexError, source: &'a str) -> Self {
        Self {
            error,
            source: Some(source),
            filename: None,
        }
    }

    /// Name the file shown in the location line
    pub fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: {}\n", kind, self.error));

        match (self.error.position(), self.filename) {
            (Some(position), Some(filename)) => {
                output.push_str(&format!("  {} {}:{}\n", "-->".blue().bold(), filename, position));
            }
            (Some(position), None) => {
                output.push_str(&format!("  {} {}\n", "-->".blue().bold(), position));
            }
            (None, Some(filename)) => {
                output.push_str(&format!("  {} {}\n", "-->".blue().bold(), filename));
            }
            (None, None) => {}
        }

        if let (Some(position), Some(source)) = (self.error.position(), self.source) {
            output.push_str(&format_source_context(source, position));
        }

        output
    }
}

/// Format source code context around the error position
fn format_source_context(source: &str, position: Position) -> String {
    let mut output = String::new();
    let lines: Vec<&str> = source.lines().collect();

    if position.line == 0 || position.line > lines.len() {
        return output;
    }

    let line_idx = position.line - 1;
    let width = (position.line + 1).to_string().len();

    if line_idx > 0 {
        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", line_idx, width = width).blue(),
            lines[line_idx - 1]
        ));
    }

    output.push_str(&format!(
        "  {} {}\n",
        format!("{:width$}", position.line, width = width).blue().bold(),
        lines[line_idx]
    ));

    // Columns count characters, so pad with one space per character
    let padding = " ".repeat(width + 2 + position.column.saturating_sub(1));
    output.push_str(&format!("{} {}\n", padding, "^".red().bold()));

    if line_idx + 1 < lines.len() {
        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", line_idx + 2, width = width).blue(),
            lines[line_idx + 1]
        ));
    }

    output
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_diagnostic_without_source() {
        let err = LexError::unrecognized('@', Position::new(1, 1));
        let formatted = Diagnostic::new(&err).format();

        assert!(formatted.contains("Lexer Error"));
        assert!(formatted.contains("unrecognized character '@'"));
        assert!(formatted.contains("1:1"));
    }

    #[test]
    fn test_diagnostic_with_source() {
        let source = "int main ( )\n{ return @ ; }\n";
        let err = LexError::unrecognized('@', Position::new(2, 10));
        let formatted = Diagnostic::with_source(&err, source)
            .with_filename("return_2.c")
            .format();

        assert!(formatted.contains("return_2.c:2:10"));
        assert!(formatted.contains("int main ( )"));
        assert!(formatted.contains("{ return @ ; }"));
    }

    #[test]
    fn test_diagnostic_out_of_range_line() {
        let err = LexError::unrecognized('@', Position::new(7, 1));
        let formatted = Diagnostic::with_source(&err, "one line").format();

        assert!(!formatted.contains("one line"));
    }

    #[test]
    fn test_read_error_has_no_location() {
        let err = LexError::from(io::Error::new(io::ErrorKind::Other, "boom"));
        let formatted = Diagnostic::with_source(&err, "x").format();

        assert!(formatted.contains("Read Error"));
        assert!(!formatted.contains("-->"));
    }
}
