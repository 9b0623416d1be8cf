//! Benchmarks for big integer arithmetic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bignum_integers::BigInteger;

/// Generates a deterministic integer with the given number of digits.
fn digits_of_len(len: usize) -> BigInteger {
    let rendered: String = (0..len)
        .map(|i| char::from(b'1' + (i * 7 % 9) as u8))
        .collect();
    rendered.parse().unwrap()
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for size in [16, 64, 256, 1024] {
        let a = digits_of_len(size);
        let b = -digits_of_len(size / 2 + 1);

        group.bench_with_input(BenchmarkId::new("mixed_sign", size), &size, |bench, _| {
            bench.iter(|| black_box(&a + &b));
        });
    }

    group.finish();
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");

    for size in [8, 32, 128] {
        let a = digits_of_len(size);
        let b = digits_of_len(size);

        group.bench_with_input(
            BenchmarkId::new("repeated_addition", size),
            &size,
            |bench, _| bench.iter(|| black_box(&a * &b)),
        );
    }

    group.finish();
}

fn bench_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("div");
    group.sample_size(20);

    for size in [16, 32, 64] {
        let dividend = digits_of_len(size * 2);
        let divisor = digits_of_len(size);

        group.bench_with_input(BenchmarkId::new("binary_search", size), &size, |bench, _| {
            bench.iter(|| black_box(&dividend / &divisor));
        });
    }

    group.finish();
}

fn bench_value(c: &mut Criterion) {
    let n = BigInteger::new(i64::MIN);
    c.bench_function("value_i64", |bench| {
        bench.iter(|| black_box(n.value::<i64>()));
    });
}

criterion_group!(benches, bench_add, bench_mul, bench_div, bench_value);
criterion_main!(benches);
