//! [`TextBuffer`] support for [`Rope`].

use std::borrow::Cow;

use ropey::Rope;

use crate::buffer::{TextBuffer, TextBufferMut};
use crate::position::Position;
use crate::range::Range;

/// Returns true for every single character ropey treats as a line break.
#[inline]
pub fn is_line_ending(c: char) -> bool {
	matches!(
		c,
		'\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
	)
}

/// Strips one trailing line terminator (`\r\n` counts as one).
pub fn strip_line_ending(line: &str) -> &str {
	if let Some(stripped) = line.strip_suffix("\r\n") {
		return stripped;
	}
	line.strip_suffix(is_line_ending).unwrap_or(line)
}

/// Converts a position to a char index, clipping it into the rope first.
pub fn position_to_char(text: &Rope, pos: Position) -> usize {
	let pos = text.clip_position(pos);
	text.line_to_char(pos.row) + pos.column
}

/// Converts a char index to a position. Indices past the end clip to the end.
pub fn char_to_position(text: &Rope, idx: usize) -> Position {
	let idx = idx.min(text.len_chars());
	let row = text.char_to_line(idx);
	Position::new(row, idx - text.line_to_char(row))
}

impl TextBuffer for Rope {
	fn line_count(&self) -> usize {
		self.len_lines()
	}

	fn line_text(&self, row: usize) -> Option<Cow<'_, str>> {
		let slice = self.get_line(row)?;
		Some(match Cow::from(slice) {
			Cow::Borrowed(s) => Cow::Borrowed(strip_line_ending(s)),
			Cow::Owned(mut s) => {
				let len = strip_line_ending(&s).len();
				s.truncate(len);
				Cow::Owned(s)
			}
		})
	}

	fn line_len(&self, row: usize) -> Option<usize> {
		let slice = self.get_line(row)?;
		let mut len = slice.len_chars();
		let mut chars = slice.chars_at(len);
		if let Some(last) = chars.prev().filter(|c| is_line_ending(*c)) {
			len -= 1;
			if last == '\n' && chars.prev() == Some('\r') {
				len -= 1;
			}
		}
		Some(len)
	}

	fn text_in_range(&self, range: Range) -> String {
		let start = position_to_char(self, range.start);
		let end = position_to_char(self, range.end);
		if start >= end {
			return String::new();
		}
		self.slice(start..end).to_string()
	}
}

impl TextBufferMut for Rope {
	fn replace_range(&mut self, range: Range, text: &str) {
		let start = position_to_char(self, range.start);
		let end = position_to_char(self, range.end);
		if start < end {
			self.remove(start..end);
		}
		self.insert(start, text);
	}
}
