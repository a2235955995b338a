//! Winnow-based parser for the dependency list text format.
//!
//! Grammar:
//! ```text
//! file         = line*
//! line         = comment_line | blank_line | dependency_line
//! comment      = "//" REST_OF_LINE
//! comment_line = WS* comment LINE_END
//! blank_line   = WS* LINE_END
//! dependency   = WS* group WS* "->" WS* group WS* comment? LINE_END
//! group        = (any char except whitespace, '-', '>', '/')*
//! LINE_END     = "\n" | "\r\n" | EOF
//! ```
//!
//! Groups are handed to [`FunctionalDependency::new`] unchanged, so case
//! folding and deduplication follow the core crate. Either group may be empty.

use fdclosure_core::FunctionalDependency;
use winnow::ascii::{line_ending, till_line_ending};
use winnow::combinator::{alt, eof, opt};
use winnow::error::{StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{literal, take_while};
use winnow::ModalResult;

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// A parse error with human-readable location information.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "parse error at line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Parse a dependency list into [`FunctionalDependency`] values, in file order.
///
/// # Errors
///
/// Returns a [`ParseError`] with line/column information when a non-blank,
/// non-comment line is not of the form `group -> group`.
pub fn parse_dependencies(input: &str) -> Result<Vec<FunctionalDependency>, ParseError> {
    let original = input;
    let mut stream: &str = input;
    match dependencies_parser.parse_next(&mut stream) {
        Ok(dependencies) => Ok(dependencies),
        Err(e) => {
            let consumed = original.len().saturating_sub(stream.len());
            let (line, column) = offset_to_line_col(original, consumed);
            Err(ParseError {
                message: e.to_string(),
                line,
                column,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Line/column helper
// ---------------------------------------------------------------------------

/// Convert a byte offset into the original input to 1-based (line, column).
fn offset_to_line_col(input: &str, offset: usize) -> (usize, usize) {
    let safe_offset = offset.min(input.len());
    let prefix = input.get(..safe_offset).unwrap_or(input);
    let line = prefix.bytes().filter(|&b| b == b'\n').count() + 1;
    let column = prefix
        .rfind('\n')
        .map_or_else(|| prefix.chars().count() + 1, |pos| prefix[pos..].chars().count());
    (line, column)
}

// ---------------------------------------------------------------------------
// Leaf parsers
// ---------------------------------------------------------------------------

/// Optional inline whitespace: spaces and tabs only (no newlines).
fn opt_inline_ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c == ' ' || c == '\t')
        .void()
        .parse_next(input)
}

/// End of a line, or end of input for a last line without a newline.
fn line_end(input: &mut &str) -> ModalResult<()> {
    alt((line_ending.void(), eof.void()))
        .context(StrContext::Expected(StrContextValue::Description(
            "end of line",
        )))
        .parse_next(input)
}

fn is_group_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '-' | '>' | '/')
}

/// An attribute group; may be empty.
fn group<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., is_group_char).parse_next(input)
}

fn comment(input: &mut &str) -> ModalResult<()> {
    literal("//").parse_next(input)?;
    till_line_ending.void().parse_next(input)
}

// ---------------------------------------------------------------------------
// Line parsers
// ---------------------------------------------------------------------------

/// A comment line. Produces nothing.
fn comment_line(input: &mut &str) -> ModalResult<Option<FunctionalDependency>> {
    opt_inline_ws.parse_next(input)?;
    comment.parse_next(input)?;
    line_end.parse_next(input)?;
    Ok(None)
}

/// A blank line (only whitespace + line end). Produces nothing.
fn blank_line(input: &mut &str) -> ModalResult<Option<FunctionalDependency>> {
    opt_inline_ws.parse_next(input)?;
    line_end.parse_next(input)?;
    Ok(None)
}

/// `group "->" group`, with optional whitespace and a trailing comment.
fn dependency_line(input: &mut &str) -> ModalResult<Option<FunctionalDependency>> {
    opt_inline_ws.parse_next(input)?;
    let from = group.parse_next(input)?;
    opt_inline_ws.parse_next(input)?;
    literal("->")
        .context(StrContext::Label("dependency"))
        .context(StrContext::Expected(StrContextValue::StringLiteral("->")))
        .parse_next(input)?;
    opt_inline_ws.parse_next(input)?;
    let to = group.parse_next(input)?;
    opt_inline_ws.parse_next(input)?;
    opt(comment).parse_next(input)?;
    line_end.parse_next(input)?;
    Ok(Some(FunctionalDependency::new(from, to)))
}

fn line(input: &mut &str) -> ModalResult<Option<FunctionalDependency>> {
    alt((comment_line, blank_line, dependency_line)).parse_next(input)
}

/// The whole file: lines until end of input.
fn dependencies_parser(input: &mut &str) -> ModalResult<Vec<FunctionalDependency>> {
    let mut dependencies = Vec::new();
    while !input.is_empty() {
        if let Some(dependency) = line.parse_next(input)? {
            dependencies.push(dependency);
        }
    }
    Ok(dependencies)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use fdclosure_core::format_dependencies;

    use super::*;

    fn fd(from: &str, to: &str) -> FunctionalDependency {
        FunctionalDependency::new(from, to)
    }

    #[test]
    fn test_single_dependency() {
        let result = parse_dependencies("A -> B\n").expect("should parse");
        assert_eq!(result, vec![fd("A", "B")]);
    }

    #[test]
    fn test_no_trailing_newline() {
        let result = parse_dependencies("A -> B\nCG -> H").expect("should parse");
        assert_eq!(result, vec![fd("A", "B"), fd("CG", "H")]);
    }

    #[test]
    fn test_whitespace_is_optional() {
        let result = parse_dependencies("cg->h\n  \tI   ->   JM  \n").expect("should parse");
        assert_eq!(result, vec![fd("CG", "H"), fd("I", "JM")]);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let input = "// header\n\nA -> B // first\n   // indented\n\nB -> C\n\n";
        let result = parse_dependencies(input).expect("should parse");
        assert_eq!(result, vec![fd("A", "B"), fd("B", "C")]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let result = parse_dependencies("A -> B\r\nB -> C\r\n").expect("should parse");
        assert_eq!(result, vec![fd("A", "B"), fd("B", "C")]);
    }

    #[test]
    fn test_empty_sides() {
        let result = parse_dependencies("-> Z\nA ->\n").expect("should parse");
        assert_eq!(result, vec![fd("", "Z"), fd("A", "")]);
        assert!(result[0].determiners().is_empty());
        assert!(result[1].determined().is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_dependencies("").expect("should parse").is_empty());
        assert!(parse_dependencies("// nothing\n").expect("should parse").is_empty());
    }

    #[test]
    fn test_non_letter_attributes() {
        let result = parse_dependencies("a1 -> ?\n").expect("should parse");
        assert_eq!(result, vec![fd("A1", "?")]);
    }

    #[test]
    fn test_round_trip_with_formatter() {
        let dependencies = vec![fd("A", "BC"), fd("B", "CE"), fd("", "Z"), fd("AC", "")];
        let text = format_dependencies(&dependencies);
        let result = parse_dependencies(&text).expect("formatted text should parse");
        assert_eq!(result, dependencies);
    }

    // -----------------------------------------------------------------------
    // Error tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_parse_error_has_line() {
        let input = "A -> B\nA = B\n";
        let err = parse_dependencies(input).expect_err("should fail");
        assert_eq!(err.line, 2, "expected error on line 2, got: {err}");
    }

    #[test]
    fn test_missing_arrow_head() {
        let err = parse_dependencies("A - B\n").expect_err("should fail");
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_two_arrows() {
        assert!(parse_dependencies("A -> B -> C\n").is_err());
    }

    #[test]
    fn test_parse_error_display() {
        let err = parse_dependencies("A -> B\n@@\n").expect_err("should fail");
        let msg = err.to_string();
        assert!(
            msg.contains("parse error"),
            "display should contain 'parse error': {msg}"
        );
        assert!(msg.contains("line 2"), "display should contain 'line 2': {msg}");
    }

    #[test]
    fn test_offset_to_line_col_first_line() {
        let (line, col) = offset_to_line_col("A -> B\nC -> D\n", 0);
        assert_eq!(line, 1);
        assert_eq!(col, 1);
    }

    #[test]
    fn test_offset_to_line_col_second_line() {
        // "A -> B\n" is 7 bytes; offset 7 is start of second line.
        let (line, col) = offset_to_line_col("A -> B\nC -> D\n", 7);
        assert_eq!(line, 2);
        assert_eq!(col, 1);
    }
}
