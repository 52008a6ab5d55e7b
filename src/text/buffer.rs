//! Editable character buffer with a single tracked cursor.
//!
//! [`TextBuffer`] stores its characters in a linked arena so that edits at
//! the cursor are O(1), and keeps the cursor's absolute index, row and column
//! up to date incrementally as the cursor moves.
//!
//! # Examples
//!
//! ```
//! use textcursor::TextBuffer;
//!
//! let mut buf = TextBuffer::new();
//! buf.insert_str("ab\ncd");
//! assert_eq!((buf.get_row(), buf.get_column()), (1, 2));
//!
//! buf.move_to_row_start();
//! buf.insert('X');
//! assert_eq!(buf.stringify(), "ab\nXcd");
//! assert_eq!(buf.get_index(), 4);
//! ```

use std::fmt;

use ropey::Rope;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::text::list::{CharList, Chars, NodeId};

/// Cursor coordinates in the buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    /// Characters before the cursor.
    pub index: usize,
    /// Line number (0-indexed).
    pub row: usize,
    /// Offset within the line (0-indexed).
    pub column: usize,
}

/// Text buffer with one cursor.
///
/// The cursor sits between two characters. `data_at_cursor` reads the
/// character after it, `insert` places a character before it and `remove`
/// erases the character after it.
///
/// Motion and removal return `false` when the request is impossible from the
/// current position; in that case nothing changes.
#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    pub(super) chars: CharList,
    /// Character after the cursor, `None` at end of buffer.
    pub(super) cursor: Option<NodeId>,
    pub(super) index: usize,
    pub(super) row: usize,
    pub(super) column: usize,
}

impl TextBuffer {
    /// Create a new empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` characters.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chars: CharList::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Create a buffer holding `text`, cursor at the start.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut chars = CharList::with_capacity(text.len());
        for ch in text.chars() {
            chars.insert_before(None, ch);
        }
        let cursor = chars.head();
        Self {
            chars,
            cursor,
            index: 0,
            row: 0,
            column: 0,
        }
    }

    /// Insert `c` before the cursor.
    ///
    /// The cursor keeps pointing at the same character, so `c` ends up
    /// behind it and the index grows by one.
    pub fn insert(&mut self, c: char) {
        self.chars.insert_before(self.cursor, c);
        self.index += 1;
        if c == '\n' {
            self.row += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// Insert every character of `text` before the cursor.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.insert(ch);
        }
    }

    /// Erase the character at the cursor.
    ///
    /// Returns `false` at end of buffer. Only text after the cursor changes,
    /// so index, row and column keep their values.
    pub fn remove(&mut self) -> bool {
        let Some(target) = self.cursor else {
            trace!(index = self.index, "remove at end of buffer");
            return false;
        };
        let (_, next) = self.chars.erase(target);
        self.cursor = next;
        true
    }

    /// Remove all text and reset the cursor.
    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = None;
        self.index = 0;
        self.row = 0;
        self.column = 0;
    }

    /// Whether the cursor is past the last character.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_none()
    }

    /// Character at the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] when the cursor is at end of buffer.
    pub fn data_at_cursor(&self) -> Result<char> {
        self.char_at_cursor().ok_or_else(|| {
            debug!(index = self.index, size = self.size(), "read past end of buffer");
            Error::OutOfBounds {
                index: self.index,
                size: self.size(),
            }
        })
    }

    /// Character at the cursor, `None` at end of buffer.
    #[must_use]
    pub fn char_at_cursor(&self) -> Option<char> {
        self.cursor.map(|id| self.chars.get(id))
    }

    #[must_use]
    pub fn get_row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub fn get_column(&self) -> usize {
        self.column
    }

    #[must_use]
    pub fn get_index(&self) -> usize {
        self.index
    }

    /// Get cursor position info.
    #[must_use]
    pub fn position(&self) -> CursorPosition {
        CursorPosition {
            index: self.index,
            row: self.row,
            column: self.column,
        }
    }

    /// Number of characters in the buffer.
    #[must_use]
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Full buffer content as one string.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.chars.iter().collect()
    }

    /// Iterate over all characters.
    pub fn chars(&self) -> Chars<'_> {
        self.chars.iter()
    }

    /// Snapshot the content as a rope for line-oriented consumers.
    #[must_use]
    pub fn to_rope(&self) -> Rope {
        Rope::from_str(&self.stringify())
    }

    /// Length of the line prefix before the cursor, found by scanning back
    /// to the previous newline or buffer start.
    pub(super) fn compute_column(&self) -> usize {
        let mut column = 0;
        let mut at = self.chars.before(self.cursor);
        while let Some(id) = at {
            if self.chars.get(id) == '\n' {
                break;
            }
            column += 1;
            at = self.chars.prev(id);
        }
        column
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars.iter() {
            fmt::Write::write_char(f, ch)?;
        }
        Ok(())
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::with_text(text)
    }
}
