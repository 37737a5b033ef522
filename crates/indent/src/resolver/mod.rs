//! Decides whether a just-typed colon continues a multi-line keyword message.

use kwalign_primitives::{KeyCharacter, Position, Range, ScanControl, TextBuffer};

use crate::error::{AlignError, Result};
use crate::scanner::{CharScanner, KeyScanner};


/// Number of rows above the insertion row searched for an alignment target.
pub const SEARCH_WINDOW_LINES: usize = 25;

/// Verdict for a colon insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentResult {
	/// The colon should line up with the colon at this column.
	Aligned(usize),
	/// Leave the line alone.
	NotAligned,
}

impl AlignmentResult {
	/// Returns the target column, if aligned.
	pub fn column(self) -> Option<usize> {
		match self {
			Self::Aligned(column) => Some(column),
			Self::NotAligned => None,
		}
	}
}

/// Why the backward scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
	/// A key character shares the row with the inserted colon.
	SingleLine,
	/// A `+`/`-` method declaration marker was reached.
	Declaration,
	/// An unmatched `[` opened the enclosing message send.
	EnclosingBracket,
	/// The window ran out without any stop condition.
	WindowExhausted,
}

/// A verdict together with the condition that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
	pub result: AlignmentResult,
	pub stop: StopReason,
}

/// Finds the first keyword colon of the message enclosing an inserted colon.
#[derive(Debug, Clone)]
pub struct ColonAlignmentResolver<S = CharScanner> {
	scanner: S,
	window: usize,
}

impl ColonAlignmentResolver {
	/// Creates a resolver using [`CharScanner`] and [`SEARCH_WINDOW_LINES`].
	pub fn new() -> Self {
		Self::with_scanner(CharScanner)
	}
}

impl<S: Default> Default for ColonAlignmentResolver<S> {
	fn default() -> Self {
		Self {
			scanner: S::default(),
			window: SEARCH_WINDOW_LINES,
		}
	}
}

impl<S: KeyScanner> ColonAlignmentResolver<S> {
	/// Creates a resolver with a custom scanning strategy.
	pub fn with_scanner(scanner: S) -> Self {
		Self {
			scanner,
			window: SEARCH_WINDOW_LINES,
		}
	}

	/// Sets how many rows above the insertion row are searched.
	pub fn with_window(mut self, lines: usize) -> Self {
		self.window = lines;
		self
	}

	/// Rows searched above the insertion row.
	pub fn window(&self) -> usize {
		self.window
	}

	/// The range scanned for an insertion at `insertion`.
	///
	/// Starts at column 0 of the row `window` rows up (clipped at row 0) and
	/// ends, exclusively, one column before the colon.
	pub fn search_window(&self, insertion: Position) -> Range {
		Range::new(
			Position::new(insertion.row.saturating_sub(self.window), 0),
			insertion.with_column(insertion.column.saturating_sub(1)),
		)
	}

	/// Resolves the alignment column for the colon at `insertion`.
	///
	/// Fails with [`AlignError::InvalidInput`] if `insertion` does not hold a `:`.
	pub fn resolve<B>(&self, buffer: &B, insertion: Position) -> Result<AlignmentResult>
	where
		B: TextBuffer + ?Sized,
	{
		self.resolve_detailed(buffer, insertion).map(|r| r.result)
	}

	/// Like [`Self::resolve`], also reporting why the scan stopped.
	pub fn resolve_detailed<B>(&self, buffer: &B, insertion: Position) -> Result<Resolution>
	where
		B: TextBuffer + ?Sized,
	{
		let found = buffer.char_at(insertion);
		if found != Some(':') {
			return Err(AlignError::InvalidInput {
				position: insertion,
				found,
			});
		}

		let mut bracket_depth: isize = 0;
		let mut candidate = AlignmentResult::NotAligned;
		let mut stop = StopReason::WindowExhausted;

		self.scanner
			.scan_backward(buffer, self.search_window(insertion), |m| {
				if m.position.row == insertion.row {
					candidate = AlignmentResult::NotAligned;
					stop = StopReason::SingleLine;
					return ScanControl::Stop;
				}
				if m.character.is_declaration_marker() {
					stop = StopReason::Declaration;
					return ScanControl::Stop;
				}

				match m.character {
					KeyCharacter::OpenBracket => bracket_depth -= 1,
					KeyCharacter::CloseBracket => bracket_depth += 1,
					_ => {}
				}
				if bracket_depth == -1 {
					stop = StopReason::EnclosingBracket;
					return ScanControl::Stop;
				}

				if m.character == KeyCharacter::Colon {
					candidate = AlignmentResult::Aligned(m.position.column);
				}
				ScanControl::Continue
			});

		tracing::trace!(%insertion, ?stop, ?candidate, "colon scan finished");
		Ok(Resolution {
			result: candidate,
			stop,
		})
	}
}
