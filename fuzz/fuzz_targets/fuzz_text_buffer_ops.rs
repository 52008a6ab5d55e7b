//! Fuzz target for cursor bookkeeping.
//!
//! Replays arbitrary operation sequences and checks that index, row and
//! column always describe the text before the cursor.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textcursor::TextBuffer;

#[derive(Arbitrary, Debug)]
enum Op {
    Forward,
    Backward,
    Up,
    Down,
    RowStart,
    RowEnd,
    Column(u8),
    Insert(char),
    Newline,
    Remove,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut buf = TextBuffer::new();
    for op in ops {
        match op {
            Op::Forward => {
                buf.forward();
            }
            Op::Backward => {
                buf.backward();
            }
            Op::Up => {
                buf.up();
            }
            Op::Down => {
                buf.down();
            }
            Op::RowStart => buf.move_to_row_start(),
            Op::RowEnd => buf.move_to_row_end(),
            Op::Column(col) => buf.move_to_column(usize::from(col)),
            Op::Insert(ch) => buf.insert(ch),
            Op::Newline => buf.insert('\n'),
            Op::Remove => {
                buf.remove();
            }
        }

        let before: Vec<char> = buf.chars().take(buf.get_index()).collect();
        let row = before.iter().filter(|&&ch| ch == '\n').count();
        let column = before.iter().rev().take_while(|&&ch| ch != '\n').count();
        assert_eq!(before.len(), buf.get_index());
        assert_eq!(row, buf.get_row());
        assert_eq!(column, buf.get_column());
        assert_eq!(buf.is_at_end(), buf.get_index() == buf.size());
    }
});
