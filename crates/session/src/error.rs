use kwalign_indent::AlignError;
use thiserror::Error;

use crate::document::DocumentId;

/// Errors returned by [`crate::EditorSession`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
	/// No open document has this id.
	#[error("unknown document {0}")]
	UnknownDocument(DocumentId),

	/// The alignment engine rejected the insertion.
	#[error(transparent)]
	Align(#[from] AlignError),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
