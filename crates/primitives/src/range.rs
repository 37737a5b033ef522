use crate::position::Position;

/// A half-open span of characters between two positions.
///
/// A well-formed range has `start <= end`. Ranges are not normalized on
/// construction: an inverted range is simply empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Range {
	/// First position covered (inclusive).
	pub start: Position,
	/// Position just past the last covered character (exclusive).
	pub end: Position,
}

impl Range {
	/// Creates a range from `start` to `end`.
	pub const fn new(start: Position, end: Position) -> Self {
		Self { start, end }
	}

	/// Creates a zero-width range at `pos`.
	pub const fn point(pos: Position) -> Self {
		Self::new(pos, pos)
	}

	/// Returns true if the range covers no characters, including inverted ranges.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start >= self.end
	}

	/// Returns true if `pos` lies within `[start, end)`.
	#[inline]
	pub fn contains(&self, pos: Position) -> bool {
		self.start <= pos && pos < self.end
	}

	/// Returns true if the range starts and ends on the same row.
	#[inline]
	pub fn is_single_line(&self) -> bool {
		self.start.row == self.end.row
	}
}

impl From<(Position, Position)> for Range {
	fn from((start, end): (Position, Position)) -> Self {
		Self::new(start, end)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_range_contains_is_half_open() {
		let r = Range::new(Position::new(1, 2), Position::new(3, 0));
		assert!(!r.contains(Position::new(1, 1)));
		assert!(r.contains(Position::new(1, 2)));
		assert!(r.contains(Position::new(2, 80)));
		assert!(!r.contains(Position::new(3, 0)));
	}

	#[test]
	fn test_inverted_range_is_empty() {
		let r = Range::new(Position::new(2, 0), Position::new(1, 5));
		assert!(r.is_empty());
		assert!(!r.contains(Position::new(1, 7)));
	}

	#[test]
	fn test_point_is_empty() {
		let r = Range::point(Position::new(0, 3));
		assert!(r.is_empty());
		assert!(r.is_single_line());
	}
}
