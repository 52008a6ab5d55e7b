//! Cursor-tracking text storage.
//!
//! Key types:
//!
//! - [`TextBuffer`]: editable characters with one cursor and incremental
//!   index/row/column tracking
//! - [`CursorPosition`]: a copy of the cursor's coordinates
//! - [`Chars`]: iterator over the buffer's characters
//!
//! # Examples
//!
//! ```
//! use textcursor::TextBuffer;
//!
//! let mut buf = TextBuffer::new();
//! buf.insert_str("ab\ncd\n");
//! assert_eq!(buf.get_row(), 2);
//!
//! // Sticky column: row 1 is reached at column 0
//! assert!(buf.up());
//! assert_eq!(buf.get_index(), 3);
//!
//! buf.insert('X');
//! assert!(buf.remove());
//! assert_eq!(buf.stringify(), "ab\nXd\n");
//! ```

mod buffer;
mod list;
mod motion;

pub use buffer::{CursorPosition, TextBuffer};
pub use list::Chars;
