//! Benchmarks for bbdelta decode/encode performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates synthetic forum-post markup with the given number of paragraphs.
fn create_test_markup(paragraphs: usize) -> String {
    let mut markup = String::new();

    markup.push_str("[center][header=1]Benchmark post[/header][/center]\n");
    for i in 0..paragraphs {
        markup.push_str(&format!(
            "Paragraph {} with [b]bold[/b], [i]italic[/i] and [color=#336699]colored [u]text[/u][/color].\n",
            i + 1
        ));
        markup.push_str("[indent=1][link=http://example.com/?a=1&amp;b=2]a link[/link] &lsqb;escaped&rsqb;[/indent]\n");
        if i % 5 == 0 {
            markup.push_str("[img width=320 height=200]http://example.com/image.png[/img]\n");
        }
        markup.push('\n');
    }

    markup
}

/// Benchmark decoding at various sizes.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for paragraphs in [10, 100, 1000].iter() {
        let markup = create_test_markup(*paragraphs);

        group.bench_function(format!("{}_paragraphs", paragraphs), |b| {
            b.iter(|| bbdelta::decode(black_box(&markup)));
        });
    }

    group.finish();
}

/// Benchmark encoding a decoded document.
fn bench_encode(c: &mut Criterion) {
    let doc = bbdelta::decode(&create_test_markup(100));

    c.bench_function("encode_100_paragraphs", |b| {
        b.iter(|| bbdelta::encode(black_box(&doc)).unwrap());
    });
}

/// Benchmark parallel versus sequential batch decoding.
fn bench_decode_batch(c: &mut Criterion) {
    let posts: Vec<String> = (0..64).map(|_| create_test_markup(20)).collect();
    let mut group = c.benchmark_group("decode_batch");

    group.bench_function("parallel", |b| {
        let options = bbdelta::DecodeOptions::new();
        b.iter(|| bbdelta::decode_batch(black_box(&posts), &options));
    });

    group.bench_function("sequential", |b| {
        let options = bbdelta::DecodeOptions::new().sequential();
        b.iter(|| bbdelta::decode_batch(black_box(&posts), &options));
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode, bench_decode_batch);
criterion_main!(benches);
