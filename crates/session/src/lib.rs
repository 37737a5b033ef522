//! Editor-side glue for colon alignment.
//!
//! [`EditorSession`] owns the open documents and an explicit
//! [`AlignRegistry`] of the documents the feature is attached to. Text
//! insertions are committed to the document first; a single `:` typed in
//! code is then handed to the alignment engine and the resulting rewrite is
//! committed as one more atomic step.

pub mod document;
pub mod error;
pub mod event;
pub mod registry;
pub mod transaction;


use std::collections::HashMap;
use std::time::Instant;

pub use document::{Document, DocumentId};
pub use error::{Result, SessionError};
pub use event::InsertEvent;
use kwalign_config::AlignConfig;
use kwalign_primitives::{Position, Range, TextBuffer};
pub use registry::{AlignContext, AlignRegistry};
pub use transaction::{Change, History, Transaction};

/// What happened to an insertion after it was committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
	/// The document is not attached or the event was filtered out.
	Ignored,
	/// The colon needed no realignment.
	Unchanged { cursor: Position },
	/// The line was rewritten so the colon sits at `column`.
	Aligned { column: usize, cursor: Position },
}

/// Open documents plus the colon alignment lifecycle.
#[derive(Debug)]
pub struct EditorSession {
	config: AlignConfig,
	documents: HashMap<DocumentId, Document>,
	/// `Some` while the feature is enabled.
	registry: Option<AlignRegistry>,
	next_id: u64,
}

impl EditorSession {
	/// Creates a session, enabled if `config.enabled` is set.
	pub fn new(config: AlignConfig) -> Self {
		let enabled = config.enabled;
		let mut session = Self {
			config,
			documents: HashMap::new(),
			registry: None,
			next_id: 1,
		};
		if enabled {
			session.enable();
		}
		session
	}

	pub fn config(&self) -> &AlignConfig {
		&self.config
	}

	/// Attaches every open document with a matching grammar. Idempotent.
	pub fn enable(&mut self) {
		if self.registry.is_some() {
			return;
		}
		let mut registry = AlignRegistry::new();
		for doc in self.documents.values() {
			if let Some(grammar) = doc.grammar().filter(|g| self.config.matches_grammar(g)) {
				registry.attach(doc.id(), grammar, self.config.search_lines);
			}
		}
		tracing::info!(attached = registry.len(), "colon alignment enabled");
		self.registry = Some(registry);
	}

	/// Detaches every document. Idempotent.
	pub fn disable(&mut self) {
		if let Some(registry) = self.registry.take() {
			tracing::info!(detached = registry.len(), "colon alignment disabled");
		}
	}

	pub fn is_enabled(&self) -> bool {
		self.registry.is_some()
	}

	/// The registry of attached documents, while enabled.
	pub fn registry(&self) -> Option<&AlignRegistry> {
		self.registry.as_ref()
	}

	/// Returns true if colon insertions in `id` are aligned.
	pub fn is_attached(&self, id: DocumentId) -> bool {
		self.registry.as_ref().is_some_and(|r| r.contains(id))
	}

	/// Opens a document with the given grammar scope.
	pub fn open(&mut self, text: &str, grammar: Option<&str>) -> DocumentId {
		let id = DocumentId(self.next_id);
		self.next_id += 1;
		self.documents.insert(id, Document::new(id, text, grammar));
		self.sync_attachment(id);
		tracing::debug!(doc = %id, ?grammar, attached = self.is_attached(id), "document opened");
		id
	}

	/// Closes a document, dropping its registry entry.
	pub fn close(&mut self, id: DocumentId) -> Result<Document> {
		let doc = self.documents.remove(&id).ok_or(SessionError::UnknownDocument(id))?;
		if let Some(registry) = &mut self.registry {
			registry.detach(id);
		}
		tracing::debug!(doc = %id, "document closed");
		Ok(doc)
	}

	/// Changes a document's grammar, attaching or detaching as needed.
	pub fn set_grammar(&mut self, id: DocumentId, grammar: Option<&str>) -> Result<()> {
		self.document_mut(id)?.set_grammar(grammar);
		self.sync_attachment(id);
		Ok(())
	}

	pub fn document(&self, id: DocumentId) -> Option<&Document> {
		self.documents.get(&id)
	}

	/// Open document ids in ascending order.
	pub fn document_ids(&self) -> Vec<DocumentId> {
		let mut ids: Vec<_> = self.documents.keys().copied().collect();
		ids.sort();
		ids
	}

	/// Inserts `text` at `at` and runs colon alignment on the resulting event.
	///
	/// `scopes` are the scope descriptors at the insertion point, used to skip
	/// strings and comments.
	pub fn insert_text(&mut self, id: DocumentId, at: Position, text: &str, scopes: &[&str]) -> Result<InsertOutcome> {
		let doc = self.document_mut(id)?;
		let at = doc.text().clip_position(at);
		let tx = Transaction::insert(doc.text(), at, text, doc.cursor());
		let end = tx.cursor_after();
		doc.commit(tx);

		let event = InsertEvent {
			range: Range::new(at, end),
			text: text.to_string(),
			scopes: scopes.iter().map(|s| s.to_string()).collect(),
		};
		self.handle_insert(id, &event)
	}

	/// Runs colon alignment for an insertion already present in the document.
	pub fn handle_insert(&mut self, id: DocumentId, event: &InsertEvent) -> Result<InsertOutcome> {
		let doc = self.documents.get_mut(&id).ok_or(SessionError::UnknownDocument(id))?;
		let Some(context) = self.registry.as_mut().and_then(|r| r.get_mut(id)) else {
			return Ok(InsertOutcome::Ignored);
		};
		if !event.triggers_alignment() {
			return Ok(InsertOutcome::Ignored);
		}

		let _span = tracing::debug_span!("indent_colon", doc = %id).entered();
		let started = Instant::now();

		let colon = event.range.start;
		let instruction = context.aligner().align_colon(doc.text(), colon)?;
		context.record_invocation();

		let outcome = if instruction.is_noop() {
			doc.set_cursor(instruction.cursor);
			InsertOutcome::Unchanged {
				cursor: instruction.cursor,
			}
		} else {
			let tx = Transaction::from_rewrite(doc.text(), &instruction, doc.cursor());
			if tx.is_identity(doc.text()) {
				doc.set_cursor(tx.cursor_after());
			} else {
				doc.commit(tx);
			}
			InsertOutcome::Aligned {
				column: instruction.cursor.column.saturating_sub(1),
				cursor: instruction.cursor,
			}
		};

		tracing::debug!(
			%colon,
			?outcome,
			elapsed_us = started.elapsed().as_micros() as u64,
			"colon insertion handled"
		);
		Ok(outcome)
	}

	/// Undoes the last committed step, returning false if there is none.
	pub fn undo(&mut self, id: DocumentId) -> Result<bool> {
		Ok(self.document_mut(id)?.undo())
	}

	/// Redoes the last undone step, returning false if there is none.
	pub fn redo(&mut self, id: DocumentId) -> Result<bool> {
		Ok(self.document_mut(id)?.redo())
	}

	fn document_mut(&mut self, id: DocumentId) -> Result<&mut Document> {
		self.documents.get_mut(&id).ok_or(SessionError::UnknownDocument(id))
	}

	fn sync_attachment(&mut self, id: DocumentId) {
		let Some(registry) = &mut self.registry else {
			return;
		};
		let grammar = self
			.documents
			.get(&id)
			.and_then(Document::grammar)
			.filter(|g| self.config.matches_grammar(g));
		match grammar {
			Some(grammar) => registry.attach(id, grammar, self.config.search_lines),
			None => {
				registry.detach(id);
			}
		}
	}
}
