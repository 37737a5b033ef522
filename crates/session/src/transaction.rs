//! Atomic edits with undo support.
//!
//! A [`Transaction`] bundles text changes with the cursor move that goes
//! with them, so a listener observes the replace and the cursor update as a
//! single step and undo restores both together.

use kwalign_indent::RewriteInstruction;
use kwalign_primitives::rope::{char_to_position, position_to_char};
use kwalign_primitives::{Position, Rope};

/// Replaces the char range `[start, end)` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
	/// The starting character index of the change.
	pub start: usize,
	/// The ending character index of the change (exclusive).
	pub end: usize,
	/// Text inserted at `start`; empty for a pure deletion.
	pub replacement: String,
}

/// Non-overlapping changes plus the cursor positions around them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
	/// Changes in ascending, non-overlapping order, in pre-edit coordinates.
	changes: Vec<Change>,
	cursor_before: Position,
	cursor_after: Position,
}

impl Transaction {
	/// Creates a transaction from ordered, non-overlapping changes.
	pub fn new(changes: Vec<Change>, cursor_before: Position, cursor_after: Position) -> Self {
		debug_assert!(changes.windows(2).all(|w| w[0].end <= w[1].start));
		Self {
			changes,
			cursor_before,
			cursor_after,
		}
	}

	/// Inserts `text` at `at`, leaving the cursor after it.
	pub fn insert(doc: &Rope, at: Position, text: &str, cursor_before: Position) -> Self {
		let idx = position_to_char(doc, at);
		let at = char_to_position(doc, idx);
		let change = Change {
			start: idx,
			end: idx,
			replacement: text.to_string(),
		};
		Self::new(vec![change], cursor_before, end_of_insertion(at, text))
	}

	/// Builds the edit described by an alignment rewrite.
	pub fn from_rewrite(doc: &Rope, instruction: &RewriteInstruction, cursor_before: Position) -> Self {
		let changes = instruction
			.line_replacement
			.iter()
			.map(|r| Change {
				start: position_to_char(doc, r.range.start),
				end: position_to_char(doc, r.range.end),
				replacement: r.text.clone(),
			})
			.collect();
		Self::new(changes, cursor_before, instruction.cursor)
	}

	/// Returns the changes in pre-edit coordinates.
	pub fn changes(&self) -> &[Change] {
		&self.changes
	}

	/// Cursor position before the edit.
	pub fn cursor_before(&self) -> Position {
		self.cursor_before
	}

	/// Cursor position after the edit.
	pub fn cursor_after(&self) -> Position {
		self.cursor_after
	}

	/// Returns true if no text changes.
	pub fn is_empty(&self) -> bool {
		self.changes.iter().all(|c| c.start == c.end && c.replacement.is_empty())
	}

	/// Returns true if applying to `doc` would leave its text unchanged.
	pub fn is_identity(&self, doc: &Rope) -> bool {
		self.changes.iter().all(|c| {
			c.end <= doc.len_chars() && doc.slice(c.start..c.end) == c.replacement.as_str()
		})
	}

	/// Applies the changes to `doc`.
	pub fn apply(&self, doc: &mut Rope) {
		// Back to front so earlier indices stay valid.
		for change in self.changes.iter().rev() {
			let end = change.end.min(doc.len_chars());
			let start = change.start.min(end);
			if start < end {
				doc.remove(start..end);
			}
			if !change.replacement.is_empty() {
				doc.insert(start, &change.replacement);
			}
		}
	}

	/// Creates the transaction that undoes this one.
	///
	/// `doc` must be the document as it was before this transaction applied.
	pub fn invert(&self, doc: &Rope) -> Transaction {
		let mut shift: isize = 0;
		let mut changes = Vec::with_capacity(self.changes.len());

		for change in &self.changes {
			let removed: String = doc.slice(change.start..change.end).chars().collect();
			let inserted = change.replacement.chars().count();
			let start = change.start.saturating_add_signed(shift);
			changes.push(Change {
				start,
				end: start + inserted,
				replacement: removed,
			});
			shift += inserted as isize - (change.end - change.start) as isize;
		}

		Transaction {
			changes,
			cursor_before: self.cursor_after,
			cursor_after: self.cursor_before,
		}
	}
}

/// Position just past `text` when inserted at `at`.
fn end_of_insertion(at: Position, text: &str) -> Position {
	let inserted = Rope::from(text);
	let end = char_to_position(&inserted, inserted.len_chars());
	if end.row == 0 {
		at.advanced(end.column)
	} else {
		Position::new(at.row + end.row, end.column)
	}
}

/// An applied transaction and its inverse.
#[derive(Debug, Clone)]
struct HistoryEntry {
	forward: Transaction,
	inverse: Transaction,
}

/// Linear undo/redo history.
#[derive(Debug, Clone, Default)]
pub struct History {
	undo: Vec<HistoryEntry>,
	redo: Vec<HistoryEntry>,
}

impl History {
	/// Applies `tx` to `doc` and records it, clearing the redo stack.
	pub fn commit(&mut self, doc: &mut Rope, tx: Transaction) {
		let inverse = tx.invert(doc);
		tx.apply(doc);
		self.undo.push(HistoryEntry { forward: tx, inverse });
		self.redo.clear();
	}

	/// Reverts the last commit, returning the cursor to restore.
	pub fn undo(&mut self, doc: &mut Rope) -> Option<Position> {
		let entry = self.undo.pop()?;
		entry.inverse.apply(doc);
		let cursor = entry.inverse.cursor_after();
		self.redo.push(entry);
		Some(cursor)
	}

	/// Re-applies the last undone commit, returning the cursor to restore.
	pub fn redo(&mut self, doc: &mut Rope) -> Option<Position> {
		let entry = self.redo.pop()?;
		entry.forward.apply(doc);
		let cursor = entry.forward.cursor_after();
		self.undo.push(entry);
		Some(cursor)
	}

	/// Number of undoable steps.
	pub fn undo_len(&self) -> usize {
		self.undo.len()
	}

	/// Number of redoable steps.
	pub fn redo_len(&self) -> usize {
		self.redo.len()
	}
}
