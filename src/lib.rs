#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod constexpr;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod validator;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Returns the 1-based line number, the line text and the column of a byte
/// offset inside `source`, or `None` when the offset lies past the end.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "let a: i8 = 1;\nlet b: i8 = 2;\n\nlet c: str = 3;\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 4).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "let a: i8 = 1;\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 43).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "let c: str = 3;\n");
        assert_eq!(line_pos, 12);

        assert!(super::get_line_at_position(source, 500).is_none());
    }

    #[test]
    fn test_render_error_points_at_column() {
        let source = "let a: i8 = 1;\n    let b: bool = \"x\";\n";
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                token: String::from("\"x\""),
            },
            Position(33, Rc::new(String::from("main.ent"))),
        );

        let rendered = super::render_error(&error, source);
        let lines = rendered.lines().collect::<Vec<&str>>();

        assert!(lines[0].starts_with("Error: UnexpectedToken"));
        assert_eq!(lines[1], "-> main.ent");
        assert_eq!(lines[3], "2 | let b: bool = \"x\";");
        assert_eq!(lines[4], "  | --------------^");
    }

    #[test]
    fn test_render_error_at_end_of_source() {
        let source = "let a: i8 = 1";
        let error = Error::new(
            ErrorImpl::SyntaxError {
                expected: String::from("semicolon"),
                found: String::from("EOF"),
            },
            Position(13, Rc::new(String::from("main.ent"))),
        );

        let rendered = super::render_error(&error, source);
        let lines = rendered.lines().collect::<Vec<&str>>();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "1 | let a: i8 = 1");
        assert_eq!(lines[4], "  | ------------^");
    }

    #[test]
    fn test_render_error_without_source_line() {
        let error = Error::new(ErrorImpl::NoRootProduction, Position::null());
        let rendered = super::render_error(&error, "");

        assert!(rendered.starts_with("Error: NoRootProduction"));
        assert_eq!(rendered.lines().count(), 2);
    }
}

/// Renders a caret diagnostic for `error` against the in-memory `source`.
///
/// ```text
/// Error: OutOfRange (expected valid i8 value in [-128, 127], got 128)
/// -> main.ent
///   |
/// 1 | let a: i8 = 128;
///   | ------------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", position.1));

    // Errors at EOF point one past the last byte
    let offset = position.0.min(source.len().saturating_sub(1) as u32);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, offset) else {
        return rendered;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
