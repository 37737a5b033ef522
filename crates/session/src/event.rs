use kwalign_primitives::Range;

/// Notification that text was inserted into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertEvent {
	/// Where the text now lives.
	pub range: Range,
	/// The inserted text.
	pub text: String,
	/// Scope descriptors at `range.start`, innermost last.
	pub scopes: Vec<String>,
}

impl InsertEvent {
	/// Returns true if the insertion sits inside a string or comment.
	pub fn in_non_code_scope(&self) -> bool {
		self.scopes
			.iter()
			.any(|scope| scope.starts_with("string") || scope.starts_with("comment"))
	}

	/// Returns true if this event should run colon alignment: exactly one `:`
	/// typed in code.
	pub fn triggers_alignment(&self) -> bool {
		self.text == ":" && !self.in_non_code_scope()
	}
}
