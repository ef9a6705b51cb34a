//! Input parsing performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use line_edit::input::{InputParser, PASTE_END, PASTE_START};
use std::hint::black_box;

/// Benchmark key event parsing for the sequences the editor sees.
fn bench_key_event_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_parsing");

    let key_sequences: &[(&[u8], &str)] = &[
        (b"a", "single_char"),
        (b"A", "single_uppercase"),
        ("é".as_bytes(), "utf8_2byte"),
        (b"\x1b[C", "arrow_right"),
        (b"\x1b[D", "arrow_left"),
        (b"\x1b[1;5C", "ctrl_right"),
        (b"\x1bOD", "ss3_left"),
        (b"\x1b[3~", "delete"),
        (b"\x7f", "backspace"),
        (b"\x11", "ctrl_q"),
        (b"\x1b", "escape"),
    ];

    for (seq, name) in key_sequences {
        group.bench_function(*name, |b| {
            let parser = InputParser::new();
            b.iter(|| parser.parse(black_box(*seq)));
        });
    }

    group.finish();
}

/// Benchmark bracketed paste parsing.
fn bench_paste_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("paste_parsing");

    for size in [64usize, 4_096, 65_536] {
        let mut input = b"\x1b[200~".to_vec();
        input.extend(std::iter::repeat_n(b'x', size));
        input.extend_from_slice(b"\x1b[201~");

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("paste_{size}"), |b| {
            let parser = InputParser::new();
            b.iter(|| parser.parse(black_box(&input)));
        });
    }

    group.finish();
}

/// Benchmark a large paste arriving in terminal-sized reads.
fn bench_paste_in_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("paste_in_reads");
    let size = 1 << 20;
    let mut input = PASTE_START.to_vec();
    input.extend(std::iter::repeat_n(b'x', size));
    input.extend_from_slice(PASTE_END);

    group.throughput(Throughput::Bytes(size as u64));
    group.sample_size(10);
    group.bench_function("paste_1mib_4k_reads", |b| {
        let parser = InputParser::new();
        b.iter(|| {
            let mut scanned = 0;
            for end in (4096..input.len()).step_by(4096).chain([input.len()]) {
                match parser.parse_resuming(&input[..end], scanned) {
                    Ok((event, _)) => return Some(black_box(event)),
                    Err(_) => scanned = end,
                }
            }
            None
        });
    });

    group.finish();
}

/// Benchmark draining a burst of typed input.
fn bench_typing_stream(c: &mut Criterion) {
    let stream: Vec<u8> = b"hello world\x1b[D\x1b[D\x7f".repeat(64);

    c.bench_function("typing_stream_drain", |b| {
        let parser = InputParser::new();
        b.iter(|| {
            let mut offset = 0;
            while let Ok((event, consumed)) = parser.parse(&stream[offset..]) {
                black_box(event);
                offset += consumed;
            }
            offset
        });
    });
}

criterion_group!(
    benches,
    bench_key_event_parsing,
    bench_paste_parsing,
    bench_paste_in_reads,
    bench_typing_stream
);
criterion_main!(benches);
