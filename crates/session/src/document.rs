use std::fmt;

use kwalign_primitives::{Position, Rope, TextBuffer};

use crate::transaction::{History, Transaction};

/// Identifies an open document within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

impl fmt::Display for DocumentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "doc#{}", self.0)
	}
}

/// An open document: text, cursor, grammar scope, and edit history.
#[derive(Debug, Clone)]
pub struct Document {
	id: DocumentId,
	text: Rope,
	cursor: Position,
	grammar: Option<String>,
	/// Incremented once per committed transaction, undo, or redo.
	revision: u64,
	history: History,
}

impl Document {
	pub(crate) fn new(id: DocumentId, text: &str, grammar: Option<&str>) -> Self {
		Self {
			id,
			text: Rope::from(text),
			cursor: Position::zero(),
			grammar: grammar.map(str::to_string),
			revision: 0,
			history: History::default(),
		}
	}

	pub fn id(&self) -> DocumentId {
		self.id
	}

	pub fn text(&self) -> &Rope {
		&self.text
	}

	pub fn cursor(&self) -> Position {
		self.cursor
	}

	/// Grammar scope name, e.g. `source.objc`.
	pub fn grammar(&self) -> Option<&str> {
		self.grammar.as_deref()
	}

	pub fn revision(&self) -> u64 {
		self.revision
	}

	pub fn history(&self) -> &History {
		&self.history
	}

	/// Moves the cursor, clipped into the text.
	pub fn set_cursor(&mut self, cursor: Position) {
		self.cursor = self.text.clip_position(cursor);
	}

	pub(crate) fn set_grammar(&mut self, grammar: Option<&str>) {
		self.grammar = grammar.map(str::to_string);
	}

	/// Applies `tx` as one revision and one undo step.
	pub(crate) fn commit(&mut self, tx: Transaction) {
		let cursor = tx.cursor_after();
		self.history.commit(&mut self.text, tx);
		self.cursor = cursor;
		self.revision += 1;
	}

	pub(crate) fn undo(&mut self) -> bool {
		let Some(cursor) = self.history.undo(&mut self.text) else {
			return false;
		};
		self.cursor = cursor;
		self.revision += 1;
		true
	}

	pub(crate) fn redo(&mut self) -> bool {
		let Some(cursor) = self.history.redo(&mut self.text) else {
			return false;
		};
		self.cursor = cursor;
		self.revision += 1;
		true
	}
}
