//! Rope-backed text buffer with an offset-addressed caret.
//!
//! Exposes the capability set the structural-editing operations require:
//! line lookup by offset, text read/insert/remove by offset, and caret
//! get/set.

mod buffer;

pub use buffer::{LineSpan, RopeBuffer, TextBuffer};
