//! Cursor motion for [`TextBuffer`].
//!
//! Every motion keeps `index`, `row` and `column` consistent with the text
//! before the cursor. Line lengths are never cached; crossing a newline
//! backwards rescans the line to recover the column.

use tracing::trace;

use crate::text::TextBuffer;

impl TextBuffer {
    /// Step over the character at the cursor.
    ///
    /// Returns `false` at end of buffer.
    pub fn forward(&mut self) -> bool {
        let Some(id) = self.cursor else {
            return false;
        };
        let passed = self.chars.get(id);
        self.cursor = self.chars.next(id);
        self.index += 1;
        if passed == '\n' {
            self.row += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        true
    }

    /// Step back over the character before the cursor.
    ///
    /// Returns `false` at start of buffer.
    pub fn backward(&mut self) -> bool {
        let Some(prev) = self.chars.before(self.cursor) else {
            return false;
        };
        self.cursor = Some(prev);
        self.index -= 1;
        if self.chars.get(prev) == '\n' {
            self.row -= 1;
            self.column = self.compute_column();
        } else {
            self.column -= 1;
        }
        true
    }

    /// Move to column 0 of the current line.
    pub fn move_to_row_start(&mut self) {
        while self.step_left_in_row() {}
    }

    /// Move to the end of the current line, just before its newline.
    pub fn move_to_row_end(&mut self) {
        while self.step_right_in_row() {}
    }

    /// Move within the current line to `target`, clamped to the line length.
    pub fn move_to_column(&mut self, target: usize) {
        if target > self.column {
            while self.column < target && self.step_right_in_row() {}
        } else {
            while self.column > target && self.step_left_in_row() {}
        }
    }

    /// Move to the previous line, keeping the column when that line is long
    /// enough and clamping to its end otherwise.
    ///
    /// Returns `false` on the first line.
    pub fn up(&mut self) -> bool {
        if self.row == 0 {
            trace!(column = self.column, "up from first row");
            return false;
        }
        let target = self.column;
        self.move_to_row_start();
        // Crossing the newline leaves the cursor at the end of the previous
        // line with its column rescanned.
        self.backward();
        self.move_to_column(target);
        true
    }

    /// Move to the next line, keeping the column when that line is long
    /// enough and clamping to its end otherwise.
    ///
    /// Returns `false` on the last line.
    pub fn down(&mut self) -> bool {
        let target = self.column;
        self.move_to_row_end();
        if self.is_at_end() {
            trace!(row = self.row, "down from last row");
            self.move_to_column(target);
            return false;
        }
        self.forward();
        self.move_to_column(target);
        true
    }

    /// Jump to the start of the buffer.
    pub fn move_to_start(&mut self) {
        self.cursor = self.chars.head();
        self.index = 0;
        self.row = 0;
        self.column = 0;
    }

    /// Jump past the last character.
    pub fn move_to_end(&mut self) {
        while self.forward() {}
    }

    fn step_left_in_row(&mut self) -> bool {
        match self.chars.before(self.cursor) {
            Some(prev) if self.chars.get(prev) != '\n' => {
                self.cursor = Some(prev);
                self.index -= 1;
                self.column -= 1;
                true
            }
            _ => false,
        }
    }

    fn step_right_in_row(&mut self) -> bool {
        match self.cursor {
            Some(id) if self.chars.get(id) != '\n' => {
                self.cursor = self.chars.next(id);
                self.index += 1;
                self.column += 1;
                true
            }
            _ => false,
        }
    }
}
