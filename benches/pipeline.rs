//! Benchmarks for the grimoire pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use grimoire::writer::{write_csv, write_json};
use grimoire::parser::parse_text;

/// Generate a synthetic compendium with `count` spell blocks.
fn synthetic_compendium(count: usize) -> String {
    let mut source = String::new();
    for i in 0..count {
        let level = i % 10;
        if level == 0 {
            source.push_str(&format!("Synthetic Spark {}\nEvocation cantrip\n", i));
        } else {
            source.push_str(&format!(
                "Synthetic Bolt {}\n{}th-level evocation (ritual)\n",
                i, level
            ));
        }
        source.push_str("Casting Time: 1 action\n");
        source.push_str("Range: 60 feet\n");
        source.push_str("Components: V, S, M (a shard of glass)\n");
        source.push_str("Duration: Concentration, up to 1 minute\n");
        for line in 0..6 {
            source.push_str(&format!(
                "Body line {} of spell {} describing the effect in plain prose. \tA second paragraph follows.\n",
                line, i
            ));
        }
    }
    source
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let small = synthetic_compendium(1);
    let medium = synthetic_compendium(50);
    let large = synthetic_compendium(500);

    group.bench_function("parse_single_block", |b| {
        b.iter(|| parse_text(black_box(&small)).unwrap())
    });

    group.bench_function("parse_50_blocks", |b| {
        b.iter(|| parse_text(black_box(&medium)).unwrap())
    });

    group.bench_function("parse_500_blocks", |b| {
        b.iter(|| parse_text(black_box(&large)).unwrap())
    });

    group.finish();
}

// -- Serialization benchmarks --

fn bench_writing(c: &mut Criterion) {
    let mut group = c.benchmark_group("writing");

    let spells = parse_text(&synthetic_compendium(200)).unwrap();

    group.bench_function("write_csv_200", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            write_csv(black_box(&spells), &mut out).unwrap();
            out
        })
    });

    group.bench_function("write_json_200", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            write_json(black_box(&spells), &mut out).unwrap();
            out
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_writing);
criterion_main!(benches);
