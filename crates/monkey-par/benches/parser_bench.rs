//! Parser benchmarks.
//! Run with: `cargo bench --package monkey-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use monkey_par::Parser;

fn parse(source: &str) {
    let mut parser = Parser::new(source);
    black_box(parser.parse_program());
}

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    let small = "let x = 42;";
    group.throughput(Throughput::Bytes(small.len() as u64));
    group.bench_function("let_statement", |b| b.iter(|| parse(black_box(small))));

    let fib_source = r#"
        let fibonacci = fn(x) {
            if (x < 2) {
                return x;
            } else {
                fibonacci(x - 1) + fibonacci(x - 2);
            }
        };
        fibonacci(35);
    "#;
    group.throughput(Throughput::Bytes(fib_source.len() as u64));
    group.bench_function("fibonacci_source", |b| b.iter(|| parse(black_box(fib_source))));

    group.finish();
}

criterion_group!(benches, bench_parser);
criterion_main!(benches);
