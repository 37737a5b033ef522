//! Backward scanning for key characters.
//!
//! A scan walks a range from its end toward its start (rows descending,
//! columns descending within a row) and reports every character of the
//! [`KEY_CHARACTERS`] alphabet to a visitor. Nothing is classified
//! lexically: a `:` inside a string literal is reported like any other.

use kwalign_primitives::{KEY_CHARACTERS, KeyCharacter, Position, Range, ScanControl, ScanMatch, TextBuffer};
use regex::Regex;

/// A strategy for locating key characters in reverse document order.
pub trait KeyScanner {
	/// Reports key characters in `range` to `visitor`, last first.
	///
	/// The range is clipped to the buffer. An empty or inverted range reports
	/// nothing. Returning [`ScanControl::Stop`] ends the scan immediately.
	fn scan_backward<B, F>(&self, buffer: &B, range: Range, visitor: F)
	where
		B: TextBuffer + ?Sized,
		F: FnMut(ScanMatch) -> ScanControl;
}

/// Scans by comparing each character against the alphabet.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharScanner;

impl KeyScanner for CharScanner {
	fn scan_backward<B, F>(&self, buffer: &B, range: Range, mut visitor: F)
	where
		B: TextBuffer + ?Sized,
		F: FnMut(ScanMatch) -> ScanControl,
	{
		for (row, line, lo, hi) in rows_backward(buffer, range) {
			let len = line.chars().count();
			let hi = hi.min(len);
			if lo >= hi {
				continue;
			}

			for (offset, c) in line.chars().rev().skip(len - hi).take(hi - lo).enumerate() {
				let Some(character) = KeyCharacter::from_char(c) else {
					continue;
				};
				let position = Position::new(row, hi - 1 - offset);
				if visitor(ScanMatch::new(character, position)).is_stop() {
					return;
				}
			}
		}
	}
}

/// Scans with a regular expression matching the alphabet as a character class.
#[derive(Debug, Clone)]
pub struct RegexScanner {
	pattern: Regex,
}

/// Character class equivalent to [`KEY_CHARACTERS`].
pub const KEY_CHARACTER_PATTERN: &str = r"[:\[\]+\-]";

impl RegexScanner {
	/// Compiles [`KEY_CHARACTER_PATTERN`].
	pub fn new() -> Result<Self, regex::Error> {
		debug_assert!(KEY_CHARACTERS.iter().all(|c| KEY_CHARACTER_PATTERN.contains(*c)));
		Ok(Self {
			pattern: Regex::new(KEY_CHARACTER_PATTERN)?,
		})
	}
}

impl KeyScanner for RegexScanner {
	fn scan_backward<B, F>(&self, buffer: &B, range: Range, mut visitor: F)
	where
		B: TextBuffer + ?Sized,
		F: FnMut(ScanMatch) -> ScanControl,
	{
		for (row, line, lo, hi) in rows_backward(buffer, range) {
			let start = char_to_byte_offset(&line, lo);
			let end = char_to_byte_offset(&line, hi);
			if start >= end {
				continue;
			}
			let segment = &line[start..end];

			// Regex search only runs forward, so collect the row before reporting.
			let mut hits = Vec::new();
			let mut column = lo;
			let mut last = 0;
			for m in self.pattern.find_iter(segment) {
				column += segment[last..m.start()].chars().count();
				last = m.start();
				if let Some(character) = m.as_str().chars().next().and_then(KeyCharacter::from_char) {
					hits.push(ScanMatch::new(character, Position::new(row, column)));
				}
			}

			for hit in hits.into_iter().rev() {
				if visitor(hit).is_stop() {
					return;
				}
			}
		}
	}
}

/// Scans `range` with the default [`CharScanner`].
pub fn scan_backward<B, F>(buffer: &B, range: Range, visitor: F)
where
	B: TextBuffer + ?Sized,
	F: FnMut(ScanMatch) -> ScanControl,
{
	CharScanner.scan_backward(buffer, range, visitor);
}

/// Yields `(row, text, lo, hi)` for each row of the clipped range, last row
/// first, where `[lo, hi)` is the column span of the range on that row.
fn rows_backward<'a, B>(
	buffer: &'a B,
	range: Range,
) -> impl Iterator<Item = (usize, std::borrow::Cow<'a, str>, usize, usize)> + 'a
where
	B: TextBuffer + ?Sized,
{
	let range = buffer.clip_range(range);
	let rows = if range.is_empty() {
		None
	} else {
		Some((range.start.row..=range.end.row).rev())
	};

	rows.into_iter().flatten().filter_map(move |row| {
		let line = buffer.line_text(row)?;
		let lo = if row == range.start.row { range.start.column } else { 0 };
		let hi = if row == range.end.row { range.end.column } else { usize::MAX };
		Some((row, line, lo, hi))
	})
}

fn char_to_byte_offset(text: &str, column: usize) -> usize {
	text.char_indices().nth(column).map_or(text.len(), |(i, _)| i)
}
