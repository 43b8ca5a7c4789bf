//! Benchmark for function composition.
//!
//! Compares composed functions against the equivalent hand-written calls
//! to measure the overhead (if any) of the combinators.

use andthen::chain;
use andthen::compose::{AndThen, TryAndThen};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// =============================================================================
// and_then Benchmarks
// =============================================================================

fn benchmark_and_then(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("and_then");

    let square = |x: i64| x.wrapping_mul(x);
    let increment = |x: i64| x.wrapping_add(1);
    let halve = |x: i64| x / 2;

    let method_chain = square.and_then(increment).and_then(halve);
    group.bench_function("method_chain", |bencher| {
        bencher.iter(|| black_box(method_chain(black_box(12_345))));
    });

    let macro_chain = chain!(square, increment, halve);
    group.bench_function("chain_macro", |bencher| {
        bencher.iter(|| black_box(macro_chain(black_box(12_345))));
    });

    group.bench_function("manual_calls", |bencher| {
        bencher.iter(|| black_box(halve(increment(square(black_box(12_345))))));
    });

    group.finish();
}

// =============================================================================
// try_and_then Benchmarks
// =============================================================================

fn benchmark_try_and_then(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("try_and_then");

    let checked_square = |x: i64| x.checked_mul(x).ok_or("overflow");
    let checked_increment = |x: i64| x.checked_add(1).ok_or("overflow");

    let composed = checked_square.try_and_then(checked_increment);
    group.bench_function("composed_ok", |bencher| {
        bencher.iter(|| black_box(composed(black_box(12_345))));
    });

    group.bench_function("composed_err", |bencher| {
        bencher.iter(|| black_box(composed(black_box(i64::MAX))));
    });

    group.bench_function("manual_question_mark", |bencher| {
        let manual = |x: i64| -> Result<i64, &'static str> { checked_increment(checked_square(x)?) };
        bencher.iter(|| black_box(manual(black_box(12_345))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_and_then, benchmark_try_and_then);
criterion_main!(benches);
