use crate::character_classifier::{line_break_set, CharacterSet};
use crate::line_range::LineRange;
use crate::text_range::{Position, TextRange};

/// A single edit: replace the text in `range` with `text`.
///
/// When `force_move_markers` is set, markers (cursors, decorations,...)
/// located at the boundaries of the range move with the inserted text
/// instead of staying in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOperation {
    pub range: TextRange,
    pub text: Option<String>,
    pub force_move_markers: bool,
}

impl EditOperation {
    pub fn insert(position: Position, text: &str) -> Self {
        EditOperation {
            range: TextRange::empty_at(position),
            text: Some(text.to_string()),
            force_move_markers: true,
        }
    }

    pub fn delete(range: TextRange) -> Self {
        EditOperation {
            range,
            text: None,
            force_move_markers: false,
        }
    }

    pub fn replace(range: TextRange, text: &str) -> Self {
        EditOperation {
            range,
            text: Some(text.to_string()),
            force_move_markers: false,
        }
    }

    pub fn replace_move(range: TextRange, text: &str) -> Self {
        EditOperation {
            range,
            text: Some(text.to_string()),
            force_move_markers: true,
        }
    }

    /// Replace whole lines.  The text should end with a line break, unless
    /// it is meant to be joined with the line that follows the range.
    pub fn replace_lines(lines: &LineRange, text: &str) -> Self {
        EditOperation::replace(lines.to_exclusive_range(), text)
    }

    /// The lines occupied by the new text once the edit has been applied.
    pub fn resulting_lines(&self) -> LineRange {
        let breaks = self
            .text
            .as_deref()
            .map_or(0, |t| count_line_breaks(t, &line_break_set()));
        LineRange::of_length(self.range.start.line, breaks + 1)
    }
}

/// Number of line breaks in text.  A "\r\n" sequence counts as one.
fn count_line_breaks(text: &str, breaks: &CharacterSet) -> u32 {
    let mut count = 0;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if breaks.has(c.into()) {
            if c == '\r' {
                chars.next_if_eq(&'\n');
            }
            count += 1;
        }
    }
    count
}
