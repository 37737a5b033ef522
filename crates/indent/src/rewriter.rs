//! Rewrites a line's leading whitespace so its colon lands on the target column.

use kwalign_primitives::{Position, Range, TextBuffer, TextBufferMut};

use crate::error::{AlignError, Result};
use crate::resolver::AlignmentResult;

/// Replacement text for one whole line, terminator excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReplacement {
	pub range: Range,
	pub text: String,
}

/// Edit to apply after a colon insertion.
///
/// The replacement and cursor move must be applied together as one edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteInstruction {
	/// `None` leaves the buffer untouched.
	pub line_replacement: Option<LineReplacement>,
	/// Cursor position after the edit, just past the colon.
	pub cursor: Position,
}

impl RewriteInstruction {
	/// An instruction that only moves the cursor.
	pub fn cursor_only(cursor: Position) -> Self {
		Self {
			line_replacement: None,
			cursor,
		}
	}

	/// Returns true if no text changes.
	pub fn is_noop(&self) -> bool {
		self.line_replacement.is_none()
	}

	/// Applies the replacement to `buffer` and returns the new cursor.
	pub fn apply<B: TextBufferMut + ?Sized>(&self, buffer: &mut B) -> Position {
		if let Some(replacement) = &self.line_replacement {
			buffer.replace_range(replacement.range, &replacement.text);
		}
		self.cursor
	}
}

/// Builds [`RewriteInstruction`]s from alignment verdicts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineRewriter;

impl LineRewriter {
	/// Computes the edit for the colon at `insertion`.
	///
	/// Only spaces are inserted; the stripped line keeps its content. A colon
	/// already right of the target is left-justified instead of moved further.
	pub fn apply<B>(&self, buffer: &B, insertion: Position, result: AlignmentResult) -> Result<RewriteInstruction>
	where
		B: TextBuffer + ?Sized,
	{
		let AlignmentResult::Aligned(target) = result else {
			return Ok(RewriteInstruction::cursor_only(insertion.advanced(1)));
		};

		let line = buffer
			.line_text(insertion.row)
			.ok_or(AlignError::InvalidInput {
				position: insertion,
				found: None,
			})?;
		let stripped = line.trim_start();
		let line_len = line.chars().count();
		let strip_len = line_len - stripped.chars().count();

		let colon_column = insertion.column.saturating_sub(strip_len);
		let indent = target.saturating_sub(colon_column);

		let mut text = " ".repeat(indent);
		text.push_str(stripped);

		Ok(RewriteInstruction {
			line_replacement: Some(LineReplacement {
				range: Range::new(insertion.with_column(0), insertion.with_column(line_len)),
				text,
			}),
			cursor: insertion.with_column(indent + colon_column + 1),
		})
	}
}
