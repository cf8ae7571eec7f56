mod fixtures;

use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use criterion::Throughput;
use graphql_query_parser::parse;
use graphql_query_parser::tokenize;

// ─── Group 1: Tokenizing ─────────────────────────────────

fn tokenize_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for (name, source) in [
        ("simple_query", fixtures::SIMPLE_QUERY),
        ("hero_comparison", fixtures::HERO_COMPARISON),
        ("kitchen_sink", fixtures::KITCHEN_SINK),
    ] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| black_box(tokenize(black_box(source))))
        });
    }

    group.finish();
}

// ─── Group 2: Full parsing ───────────────────────────────

fn parse_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, source) in [
        ("simple_query", fixtures::SIMPLE_QUERY),
        ("hero_comparison", fixtures::HERO_COMPARISON),
        ("kitchen_sink", fixtures::KITCHEN_SINK),
    ] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| black_box(parse(black_box(source))))
        });
    }

    group.finish();
}

criterion_group!(benches, tokenize_benchmarks, parse_benchmarks);
criterion_main!(benches);
