#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.end.0 == self.start.0
    }
}

/// Finds the line holding byte offset `position`. Returns the 1-based line
/// number, the line text and the offset within that line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    // An offset at end of input points just past the last line
    if pos == content.len() {
        let line = content.split_inclusive('\n').last().unwrap_or("");
        let line_number = content.split_inclusive('\n').count().max(1);
        return Some((line_number, line.to_string(), line.len()));
    }

    None
}

pub fn render_error(error: &Error, content: &str) -> String {
    // Error: UnterminatedComment (...)
    // -> main.cm
    //    |
    // 20 | x = 1; /* never closed
    //    | -------^

    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(content, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

pub fn display_error(error: &Error, content: &str) {
    eprint!("{}", render_error(error, content));
}

/// Strips leading whitespace, returning the rest and how many bytes went.
fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let rest = string.trim_start();

    (String::from(rest), string.len() - rest.len())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::errors::errors::{Error, ErrorImpl};
    use crate::Position;

    const CONTENT: &str = "Hello, world!\nint x;\n\n  Testing { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(CONTENT, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(CONTENT, 31).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "  Testing { }\n");
        assert_eq!(line_pos, 9);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, _, line_pos) = super::get_line_at_position("int x", 5).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line_pos, 5);

        assert!(super::get_line_at_position("int x", 6).is_none());
    }

    #[test]
    fn test_render_error_points_at_offset() {
        let content = "int x;\n  x = 1; /* open\n";
        let error = Error::new(
            ErrorImpl::UnterminatedComment,
            Position(16, Rc::new("main.cm".to_string())),
        );

        let rendered = super::render_error(&error, content);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("Error: UnterminatedComment"));
        assert_eq!(lines[1], "-> main.cm");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | x = 1; /* open");
        assert_eq!(lines[4], "  | -------^");
    }

    #[test]
    fn test_render_error_on_tab_indented_line() {
        let content = "void f(void)\n{\n\t\tx = 1; /* open\n";
        let error = Error::new(
            ErrorImpl::UnterminatedComment,
            Position(24, Rc::new("tabs.cm".to_string())),
        );

        let rendered = super::render_error(&error, content);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[3], "3 | x = 1; /* open");
        assert_eq!(lines[4], "  | -------^");
    }
}
