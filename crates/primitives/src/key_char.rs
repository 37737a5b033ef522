/// Characters the backward scanner stops at, in match-class order.
pub const KEY_CHARACTERS: [char; 5] = [':', '[', ']', '+', '-'];

/// A character with structural meaning for keyword-message alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCharacter {
	/// `:` terminating a keyword label.
	Colon,
	/// `[` opening a message send.
	OpenBracket,
	/// `]` closing a message send.
	CloseBracket,
	/// `+` class method declaration marker.
	Plus,
	/// `-` instance method declaration marker.
	Minus,
}

impl KeyCharacter {
	/// Classifies `c`, returning `None` for characters outside the alphabet.
	#[inline]
	pub const fn from_char(c: char) -> Option<Self> {
		match c {
			':' => Some(Self::Colon),
			'[' => Some(Self::OpenBracket),
			']' => Some(Self::CloseBracket),
			'+' => Some(Self::Plus),
			'-' => Some(Self::Minus),
			_ => None,
		}
	}

	/// Returns the source character.
	#[inline]
	pub const fn as_char(self) -> char {
		match self {
			Self::Colon => ':',
			Self::OpenBracket => '[',
			Self::CloseBracket => ']',
			Self::Plus => '+',
			Self::Minus => '-',
		}
	}

	/// Returns true for the `+`/`-` method declaration markers.
	#[inline]
	pub const fn is_declaration_marker(self) -> bool {
		matches!(self, Self::Plus | Self::Minus)
	}
}
