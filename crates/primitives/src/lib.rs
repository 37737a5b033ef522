//! Core types for keyword-message alignment: positions, ranges, scan matches,
//! and the line-oriented text buffer capability the engine runs against.

/// Line-oriented text buffer traits.
pub mod buffer;
/// The fixed alphabet of characters the backward scanner reports.
pub mod key_char;
/// Row/column positions.
pub mod position;
/// Half-open position ranges.
pub mod range;
/// [`TextBuffer`] implementation for [`ropey::Rope`].
pub mod rope;
/// Scan results and visitor control flow.
pub mod scan;

pub use buffer::{TextBuffer, TextBufferMut};
pub use key_char::{KEY_CHARACTERS, KeyCharacter};
pub use position::Position;
pub use range::Range;
pub use rope::{is_line_ending, strip_line_ending};
pub use ropey::{Rope, RopeSlice};
pub use scan::{ScanControl, ScanMatch};
