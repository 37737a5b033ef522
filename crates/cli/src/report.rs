//! Runs the alignment engine for the command line and shapes its results.

use std::path::Path;

use anyhow::{Context, Result};
use kwalign_config::{AlignConfig, Config};
use kwalign_indent::{AlignmentResult, ColonAlignmentResolver, StopReason};
use kwalign_primitives::{Position, Rope};
use kwalign_session::{EditorSession, InsertOutcome};
use serde::Serialize;

/// Result of typing a colon into a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertReport {
	pub outcome: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub column: Option<usize>,
	pub cursor: CursorReport,
	pub text: String,
}

/// Verdict for an existing colon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveReport {
	pub aligned: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub column: Option<usize>,
	pub stop: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CursorReport {
	pub row: usize,
	pub column: usize,
}

impl From<Position> for CursorReport {
	fn from(pos: Position) -> Self {
		Self {
			row: pos.row,
			column: pos.column,
		}
	}
}

impl ResolveReport {
	/// One-line human readable summary.
	pub fn summary(&self) -> String {
		match self.column {
			Some(column) => format!("aligned to column {column} ({})", self.stop),
			None => format!("not aligned ({})", self.stop),
		}
	}
}

/// Loads `path`, or the user configuration when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
	match path {
		Some(path) => Config::load(path).with_context(|| format!("loading config {}", path.display())),
		None => Config::discover().context("loading user config"),
	}
}

/// Types `:` at `at` in a session holding `source` and reports the result.
pub fn insert(source: &str, at: Position, grammar: &str, config: AlignConfig) -> Result<InsertReport> {
	let mut session = EditorSession::new(config);
	let id = session.open(source, Some(grammar));
	if !session.is_attached(id) {
		tracing::warn!(grammar, "grammar is not configured for alignment");
	}

	let outcome = session.insert_text(id, at, ":", &[grammar])?;
	let doc = session.document(id).context("document closed during insert")?;
	let (name, column) = match outcome {
		InsertOutcome::Ignored => ("ignored", None),
		InsertOutcome::Unchanged { .. } => ("unchanged", None),
		InsertOutcome::Aligned { column, .. } => ("aligned", Some(column)),
	};
	Ok(InsertReport {
		outcome: name,
		column,
		cursor: doc.cursor().into(),
		text: doc.text().to_string(),
	})
}

/// Resolves the colon already present at `at`.
pub fn resolve(source: &str, at: Position, window: usize) -> Result<ResolveReport> {
	let text = Rope::from(source);
	let resolver = ColonAlignmentResolver::new().with_window(window);
	let resolution = resolver.resolve_detailed(&text, at)?;
	Ok(ResolveReport {
		aligned: matches!(resolution.result, AlignmentResult::Aligned(_)),
		column: resolution.result.column(),
		stop: stop_name(resolution.stop),
	})
}

fn stop_name(stop: StopReason) -> &'static str {
	match stop {
		StopReason::SingleLine => "single-line",
		StopReason::Declaration => "declaration",
		StopReason::EnclosingBracket => "enclosing-bracket",
		StopReason::WindowExhausted => "window-exhausted",
	}
}
