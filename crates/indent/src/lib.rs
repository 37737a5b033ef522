//! Colon alignment for multi-line keyword messages.
//!
//! When a `:` is typed inside a bracketed message send that spans several
//! lines, the line is re-indented so the new colon lines up with the first
//! keyword colon of the message:
//!
//! ```text
//! [object doThing:x
//!       withOption:y]
//! ```
//!
//! The work is split in three stages, each usable on its own:
//!
//! 1. [`scanner`] walks a bounded range backward reporting `: [ ] + -`.
//! 2. [`ColonAlignmentResolver`] interprets those matches (bracket depth,
//!    declaration markers, same-line sends) and picks a target column.
//! 3. [`LineRewriter`] turns the verdict into a whole-line replacement plus
//!    cursor position.
//!
//! The engine has no notion of strings or comments: callers are expected to
//! filter out insertions in non-code scopes.

pub mod error;
pub mod resolver;
pub mod rewriter;
pub mod scanner;

use kwalign_primitives::{Position, TextBuffer};

pub use error::{AlignError, Result};
pub use resolver::{AlignmentResult, ColonAlignmentResolver, Resolution, SEARCH_WINDOW_LINES, StopReason};
pub use rewriter::{LineReplacement, LineRewriter, RewriteInstruction};
pub use scanner::{CharScanner, KeyScanner, RegexScanner, scan_backward};

/// Resolves and rewrites in one step.
#[derive(Debug, Clone, Default)]
pub struct ColonAligner<S = CharScanner> {
	resolver: ColonAlignmentResolver<S>,
	rewriter: LineRewriter,
}

impl ColonAligner {
	/// Creates an aligner with the default scanner and window.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an aligner searching `lines` rows above the insertion.
	pub fn with_window(lines: usize) -> Self {
		Self::from_resolver(ColonAlignmentResolver::new().with_window(lines))
	}
}

impl<S: KeyScanner> ColonAligner<S> {
	/// Wraps a configured resolver.
	pub fn from_resolver(resolver: ColonAlignmentResolver<S>) -> Self {
		Self {
			resolver,
			rewriter: LineRewriter,
		}
	}

	/// The underlying resolver.
	pub fn resolver(&self) -> &ColonAlignmentResolver<S> {
		&self.resolver
	}

	/// Computes the edit for a `:` just inserted at `insertion`.
	pub fn align_colon<B>(&self, buffer: &B, insertion: Position) -> Result<RewriteInstruction>
	where
		B: TextBuffer + ?Sized,
	{
		let result = self.resolver.resolve(buffer, insertion)?;
		tracing::debug!(%insertion, ?result, "resolved colon alignment");
		self.rewriter.apply(buffer, insertion, result)
	}
}

/// Computes the edit for a `:` just inserted at `insertion` using defaults.
pub fn align_colon<B>(buffer: &B, insertion: Position) -> Result<RewriteInstruction>
where
	B: TextBuffer + ?Sized,
{
	ColonAligner::new().align_colon(buffer, insertion)
}
