//! Criterion benchmarks for key layout construction and key description
//! resolution.
//!
//! `describe` runs once per key event on the typing hot path, so it should
//! stay a hash lookup plus a handful of branches.
//!
//! Run with:
//! ```bash
//! cargo bench --package remote-input-core --bench keymap_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use remote_input_core::{KeyLayout, Modifiers};

/// Key names covering codes, labels, literal characters and the numpad.
const BENCH_KEY_NAMES: &[&str] = &[
    "KeyA", "a", "A", "Enter", "Shift", "ShiftRight", "Digit1", "!", "Numpad5", "ArrowLeft",
    "F12", " ", "Backslash", "\"", "Escape",
];

fn bench_layout_construction(c: &mut Criterion) {
    c.bench_function("keymap_us_layout_build", |b| b.iter(KeyLayout::us));
}

fn bench_describe(c: &mut Criterion) {
    let layout = KeyLayout::us();
    let mut group = c.benchmark_group("keymap_describe");

    group.bench_function("describe_single", |b| {
        b.iter(|| layout.describe(black_box("KeyA"), Modifiers::NONE))
    });

    group.bench_function("describe_shifted_batch_15", |b| {
        b.iter(|| {
            BENCH_KEY_NAMES
                .iter()
                .map(|name| layout.describe(black_box(name), Modifiers(Modifiers::SHIFT)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("describe_unknown", |b| {
        b.iter(|| layout.describe(black_box("Frobnicate"), Modifiers::NONE))
    });

    group.finish();
}

criterion_group!(benches, bench_layout_construction, bench_describe);
criterion_main!(benches);
