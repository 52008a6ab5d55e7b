//! Text buffer performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use textcursor::TextBuffer;

/// Document of `lines` lines, each `width` characters wide.
fn document(lines: usize, width: usize) -> String {
    let line = "x".repeat(width);
    vec![line; lines].join("\n")
}

fn text_buffer_creation(c: &mut Criterion) {
    c.bench_function("textbuffer_new", |b| {
        b.iter(|| TextBuffer::new());
    });

    let long_text = document(100, 100);
    c.bench_function("textbuffer_with_text_10k", |b| {
        b.iter(|| TextBuffer::with_text(black_box(&long_text)));
    });
}

fn text_buffer_editing(c: &mut Criterion) {
    c.bench_function("textbuffer_insert_char", |b| {
        let mut buf = TextBuffer::new();
        b.iter(|| buf.insert(black_box('a')));
    });

    c.bench_function("textbuffer_insert_remove_mid_document", |b| {
        let mut buf = TextBuffer::with_text(&document(100, 100));
        for _ in 0..5_000 {
            buf.forward();
        }
        b.iter(|| {
            buf.insert(black_box('a'));
            buf.backward();
            buf.remove();
        })
    });
}

fn text_buffer_motion(c: &mut Criterion) {
    let mut buf = TextBuffer::with_text(&document(100, 80));
    buf.move_to_column(40);

    c.bench_function("textbuffer_down_up", |b| {
        b.iter(|| {
            buf.down();
            buf.up();
        })
    });

    c.bench_function("textbuffer_row_start_end", |b| {
        b.iter(|| {
            buf.move_to_row_end();
            buf.move_to_row_start();
        })
    });

    c.bench_function("textbuffer_stringify", |b| {
        b.iter(|| black_box(&buf).stringify());
    });
}

criterion_group!(
    benches,
    text_buffer_creation,
    text_buffer_editing,
    text_buffer_motion
);
criterion_main!(benches);
