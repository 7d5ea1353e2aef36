#![allow(clippy::module_inception)]

use std::{fmt::Display, iter};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

pub use lexer::lexer::{tokenize, Lexer};
pub use parser::parser::{parse, Parser};

/// Character offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the text of that line and the offset of
/// `position` within it. Positions at or past the end of the source resolve to
/// the end of the last line.
pub fn get_line_at_position(source: &str, position: Position) -> (usize, String, usize) {
    let pos = position.0;

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let len = line.chars().count();
        let end = start + len;

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        last = (line_number, line.to_string(), len);
        start = end;
        line_number += 1;
    }

    if source.is_empty() || source.ends_with('\n') {
        return (line_number, String::new(), 0);
    }

    last
}

/// Renders a diagnostic with the offending source line underneath it.
pub fn display_error(error: &Error, source: &str, file: Option<&str>) -> String {
    Report {
        error,
        source,
        file,
    }
    .to_string()
}

struct Report<'a> {
    error: &'a Error,
    source: &'a str,
    file: Option<&'a str>,
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        /*
            Error: expected next token to be ASSIGN, got INT instead (found `5`)
            -> main.dk
              |
            1 | let x 5;
              | ------^
        */

        let (line, line_text, line_pos) =
            get_line_at_position(self.source, *self.error.get_position());

        let line_str = line.to_string();
        let padding = line_str.len() + 2;

        if let ErrorTip::None = self.error.get_tip() {
            writeln!(f, "Error: {}", self.error)?;
        } else {
            writeln!(f, "Error: {} ({})", self.error, self.error.get_tip())?;
        }
        if let Some(file) = self.file {
            writeln!(f, "-> {}", file)?;
        }
        writeln!(f, "{:>padding$}", "|")?;

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        writeln!(f, "{} | {}", line_str, line_text_removed.trim_end())?;

        // Tabs are kept so the caret stays under the offending character
        let marker: String = line_text_removed
            .chars()
            .map(|c| if c == '\t' { '\t' } else { '-' })
            .chain(iter::repeat('-'))
            .take(line_pos.saturating_sub(removed_whitespace))
            .chain(iter::once('^'))
            .collect();

        writeln!(f, "{:>padding$} {}", "|", marker)
    }
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (string.chars().skip(start).collect(), start)
}
