//! Per-document alignment contexts.
//!
//! The registry holds one context for every open document the feature is
//! attached to. It is owned by the session; nothing is global.

use std::collections::HashMap;

use kwalign_indent::ColonAligner;

use crate::document::DocumentId;

/// Alignment state for one attached document.
#[derive(Debug, Clone)]
pub struct AlignContext {
	grammar: String,
	aligner: ColonAligner,
	invocations: u64,
}

impl AlignContext {
	fn new(grammar: &str, window: usize) -> Self {
		Self {
			grammar: grammar.to_string(),
			aligner: ColonAligner::with_window(window),
			invocations: 0,
		}
	}

	/// Grammar scope the document had when attached.
	pub fn grammar(&self) -> &str {
		&self.grammar
	}

	pub fn aligner(&self) -> &ColonAligner {
		&self.aligner
	}

	/// Number of colon insertions handled for this document.
	pub fn invocations(&self) -> u64 {
		self.invocations
	}

	pub(crate) fn record_invocation(&mut self) {
		self.invocations += 1;
	}
}

/// Attached documents keyed by id.
#[derive(Debug, Clone, Default)]
pub struct AlignRegistry {
	contexts: HashMap<DocumentId, AlignContext>,
}

impl AlignRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Attaches `id`, replacing any previous context.
	pub fn attach(&mut self, id: DocumentId, grammar: &str, window: usize) {
		self.contexts.insert(id, AlignContext::new(grammar, window));
	}

	/// Detaches `id`, returning whether it was attached.
	pub fn detach(&mut self, id: DocumentId) -> bool {
		self.contexts.remove(&id).is_some()
	}

	pub fn get(&self, id: DocumentId) -> Option<&AlignContext> {
		self.contexts.get(&id)
	}

	pub fn get_mut(&mut self, id: DocumentId) -> Option<&mut AlignContext> {
		self.contexts.get_mut(&id)
	}

	pub fn contains(&self, id: DocumentId) -> bool {
		self.contexts.contains_key(&id)
	}

	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Returns attached ids in ascending order.
	pub fn ids(&self) -> Vec<DocumentId> {
		let mut ids: Vec<_> = self.contexts.keys().copied().collect();
		ids.sort();
		ids
	}
}
