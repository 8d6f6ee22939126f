//! Benchmarks for typewriter editing and painting.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ratatui::style::Color;
use segmatrix::editor::{Direction, Editor, Extent, KeyIntent, TextBuffer, ViewportCursor};
use segmatrix::grid::SegmentGrid;

const PARAGRAPH: &str = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG 0123456789";

fn bench_typing(c: &mut Criterion) {
    c.bench_function("type_paragraph", |b| {
        b.iter(|| {
            let mut buffer = TextBuffer::new();
            let mut view = ViewportCursor::new(Extent::new(3, 10));
            for ch in black_box(PARAGRAPH).chars() {
                view.handle(&mut buffer, KeyIntent::Char(ch));
            }
            buffer
        })
    });
}

fn bench_cursor_sweep(c: &mut Criterion) {
    let mut buffer = TextBuffer::from_text(&PARAGRAPH.repeat(4));
    c.bench_function("cursor_sweep", |b| {
        b.iter(|| {
            let mut view = ViewportCursor::new(Extent::new(3, 10));
            for _ in 0..PARAGRAPH.len() {
                view.move_cursor(&mut buffer, Direction::Right);
            }
            view.handle(&mut buffer, KeyIntent::Home)
        })
    });
}

fn bench_paint(c: &mut Criterion) {
    let mut grid = SegmentGrid::new(8, 20, Color::Red, Color::Reset);
    let mut editor = Editor::new(Extent::new(8, 20), Color::Red);
    for ch in PARAGRAPH.chars() {
        editor.handle_key(KeyIntent::Char(ch), &mut grid, 0);
    }
    c.bench_function("repaint_viewport", |b| {
        b.iter(|| editor.repaint_all(black_box(&mut grid)))
    });
}

criterion_group!(benches, bench_typing, bench_cursor_sweep, bench_paint);
criterion_main!(benches);
