//! Error types for colon alignment.

use kwalign_primitives::Position;
use thiserror::Error;

/// Errors returned by the alignment engine.
///
/// The only failure is a caller contract violation; an absent alignment
/// target is a normal [`crate::AlignmentResult::NotAligned`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
	/// The insertion position does not hold a `:`.
	#[error("expected ':' at {position}, found {}", describe(.found))]
	InvalidInput {
		/// The position the caller claimed holds the colon.
		position: Position,
		/// The character actually there, or `None` when outside the buffer.
		found: Option<char>,
	},
}

fn describe(found: &Option<char>) -> String {
	match found {
		Some(c) => format!("{c:?}"),
		None => "end of line".to_string(),
	}
}

/// Result type for alignment operations.
pub type Result<T> = std::result::Result<T, AlignError>;
