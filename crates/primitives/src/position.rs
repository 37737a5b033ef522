use std::fmt;

/// A location between two characters of a line-oriented buffer.
///
/// `column` is a gap index counted in characters (not bytes) from the start
/// of the line, excluding the line terminator. Ordering is by row first,
/// then by column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
	/// Zero-based line index.
	pub row: usize,
	/// Zero-based character gap within the line.
	pub column: usize,
}

impl Position {
	/// Creates a new position.
	pub const fn new(row: usize, column: usize) -> Self {
		Self { row, column }
	}

	/// The start of the buffer.
	pub const fn zero() -> Self {
		Self::new(0, 0)
	}

	/// Returns this position moved to `column` on the same row.
	pub const fn with_column(self, column: usize) -> Self {
		Self::new(self.row, column)
	}

	/// Returns this position moved `n` columns to the right.
	pub const fn advanced(self, n: usize) -> Self {
		Self::new(self.row, self.column + n)
	}
}

impl From<(usize, usize)> for Position {
	fn from((row, column): (usize, usize)) -> Self {
		Self::new(row, column)
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.row, self.column)
	}
}
