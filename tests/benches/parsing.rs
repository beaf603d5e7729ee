extern crate pathd;
extern crate pathd_tests;
#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use pathd::builder::Build;
use pathd::scanner::Scanner;
use pathd::{parse_path, parse_path_with_options, ParserOptions, PathParser};
use pathd_tests::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

static NUM_COMMANDS: [usize; 3] = [10, 100, 1000];

fn scan(c: &mut Criterion) {
    let data = generate_path_data(0, 1000);
    c.bench_function("scanner", |b| {
        b.iter(|| {
            let mut n = 0;
            for token in Scanner::new(&data) {
                std::hint::black_box(token.unwrap());
                n += 1;
            }
            n
        })
    });
}

fn parse(c: &mut Criterion) {
    let mut g = c.benchmark_group("parse");
    for num in &NUM_COMMANDS {
        let data = generate_path_data(1, *num);
        g.bench_with_input(BenchmarkId::new("expand arcs", num), &data, |b, data| {
            b.iter(|| parse_path(data).unwrap())
        });
        g.bench_with_input(BenchmarkId::new("keep arcs", num), &data, |b, data| {
            let options = ParserOptions {
                expand_arcs: false,
                ..ParserOptions::DEFAULT
            };
            b.iter(|| parse_path_with_options(data, &options).unwrap())
        });
    }
    g.finish();
}

fn reuse_parser(c: &mut Criterion) {
    c.bench_function("icons", |b| {
        let mut parser = PathParser::new();
        b.iter(|| {
            for src in SAMPLE_PATHS {
                let mut builder = pathd::Path::builder();
                parser
                    .parse(&ParserOptions::DEFAULT, &mut Scanner::new(src), &mut builder)
                    .unwrap();
                std::hint::black_box(builder.build());
            }
        })
    });
}

fn arcs(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let arcs: Vec<_> = (0..1000).map(|_| generate_arc(&mut rng)).collect();

    c.bench_function("arc to cubic", |b| {
        b.iter(|| {
            for arc in &arcs {
                arc.for_each_cubic_bezier(&mut |curve| {
                    std::hint::black_box(curve);
                });
            }
        })
    });
}

criterion_group!(parsing, scan, parse, reuse_parser, arcs);

criterion_main!(parsing);
