//! `textcursor` - editable text buffer with a tracked cursor
//!
//! An in-memory character buffer with a single cursor whose absolute index,
//! row and column are maintained incrementally. Edits at the cursor are O(1);
//! line-oriented motion scans only the lines it touches.

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow text::TextBuffer
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::must_use_candidate)] // Queries are annotated where it matters

pub mod error;
pub mod text;

pub use error::{Error, Result};
pub use text::{Chars, CursorPosition, TextBuffer};
