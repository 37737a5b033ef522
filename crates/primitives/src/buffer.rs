//! Line-oriented text buffer capability.
//!
//! The alignment engine only needs line access and a single range replace,
//! so any editor text store can participate by implementing these traits.

use std::borrow::Cow;

use crate::position::Position;
use crate::range::Range;

/// Read access to a buffer organised as rows of text.
pub trait TextBuffer {
	/// Returns the number of rows. An empty buffer still has one (empty) row.
	fn line_count(&self) -> usize;

	/// Returns the text of `row` without its line terminator, or `None` past the last row.
	fn line_text(&self, row: usize) -> Option<Cow<'_, str>>;

	/// Returns the character length of `row`, excluding the terminator.
	fn line_len(&self, row: usize) -> Option<usize> {
		self.line_text(row).map(|line| line.chars().count())
	}

	/// Returns the character immediately after `pos`, if it lies within its row.
	fn char_at(&self, pos: Position) -> Option<char> {
		self.line_text(pos.row)?.chars().nth(pos.column)
	}

	/// Clamps `pos` into the buffer.
	///
	/// Rows past the end clip to the end of the last row; columns past the end of
	/// a row clip to its length.
	fn clip_position(&self, pos: Position) -> Position {
		let Some(last_row) = self.line_count().checked_sub(1) else {
			return Position::zero();
		};
		if pos.row > last_row {
			return Position::new(last_row, self.line_len(last_row).unwrap_or(0));
		}
		let len = self.line_len(pos.row).unwrap_or(0);
		Position::new(pos.row, pos.column.min(len))
	}

	/// Clamps both ends of `range` into the buffer.
	fn clip_range(&self, range: Range) -> Range {
		Range::new(self.clip_position(range.start), self.clip_position(range.end))
	}

	/// Returns the text covered by `range`, joining rows with `\n`.
	fn text_in_range(&self, range: Range) -> String {
		let range = self.clip_range(range);
		if range.is_empty() {
			return String::new();
		}

		let mut out = String::new();
		for row in range.start.row..=range.end.row {
			let Some(line) = self.line_text(row) else {
				break;
			};
			let from = if row == range.start.row { range.start.column } else { 0 };
			let to = if row == range.end.row { range.end.column } else { usize::MAX };
			out.extend(line.chars().skip(from).take(to.saturating_sub(from)));
			if row != range.end.row {
				out.push('\n');
			}
		}
		out
	}
}

/// Write access: a single atomic range replacement.
pub trait TextBufferMut: TextBuffer {
	/// Replaces the text covered by `range` (clipped to the buffer) with `text`.
	fn replace_range(&mut self, range: Range, text: &str);
}
