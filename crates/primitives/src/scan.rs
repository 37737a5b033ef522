use crate::key_char::KeyCharacter;
use crate::position::Position;

/// A located occurrence of a key character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanMatch {
	/// Which key character was found.
	pub character: KeyCharacter,
	/// Position of the gap immediately before the character.
	pub position: Position,
}

impl ScanMatch {
	/// Creates a new match.
	pub const fn new(character: KeyCharacter, position: Position) -> Self {
		Self { character, position }
	}
}

/// Returned by scan visitors to continue or end the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanControl {
	/// Keep reporting matches.
	#[default]
	Continue,
	/// End the scan; no further matches are reported.
	Stop,
}

impl ScanControl {
	/// Returns true for [`ScanControl::Stop`].
	#[inline]
	pub fn is_stop(self) -> bool {
		self == Self::Stop
	}
}

impl From<()> for ScanControl {
	fn from(_: ()) -> Self {
		ScanControl::Continue
	}
}
