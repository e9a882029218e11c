// ============================================================================
// Scaled Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - Widened multiply and divide, signed and unsigned
// 2. Rounding - Single digit and multi-digit rounding per mode
// 3. Text - Formatting and parsing across scales and locales
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scaled_arithmetic::prelude::*;

const SCALE: i64 = 1_000_000_000;

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_multiply_divide(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply_divide");

    group.bench_function("multiply_i64", |b| {
        b.iter(|| {
            ScaledArithmetic::multiply(
                black_box(123_456_789_012i64),
                black_box(987_654_321i64),
                SCALE,
            )
        });
    });

    group.bench_function("multiply_u64", |b| {
        b.iter(|| {
            ScaledArithmetic::multiply(
                black_box(123_456_789_012u64),
                black_box(987_654_321u64),
                SCALE as u64,
            )
        });
    });

    group.bench_function("divide_i64", |b| {
        b.iter(|| {
            ScaledArithmetic::divide(
                black_box(123_456_789_012i64),
                black_box(987_654_321i64),
                SCALE,
            )
        });
    });

    group.finish();
}

// ============================================================================
// Rounding Benchmarks
// ============================================================================

fn benchmark_rounding(c: &mut Criterion) {
    let mut group = c.benchmark_group("rounding");

    for mode in MidpointRounding::ALL {
        group.bench_with_input(BenchmarkId::new("round", mode.name()), &mode, |b, mode| {
            b.iter(|| ScaledArithmetic::round(black_box(-123_456_789_015i64), *mode));
        });
    }

    for digits in [1u32, 4, 9].iter() {
        group.bench_with_input(BenchmarkId::new("round_digits", digits), digits, |b, digits| {
            b.iter(|| {
                ScaledArithmetic::round_digits(
                    black_box(123_456_789_015i64),
                    *digits,
                    MidpointRounding::ToEven,
                )
            });
        });
    }

    group.finish();
}

// ============================================================================
// Text Benchmarks
// ============================================================================

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let german = NumberFormatInfo::german();

    for decimals in [2u32, 9, 18].iter() {
        let scale = ScaledArithmetic::scaling_factor::<i64>(*decimals).unwrap();
        group.bench_with_input(BenchmarkId::new("invariant", decimals), &scale, |b, scale| {
            b.iter(|| {
                ScaledArithmetic::format(black_box(-1_234_567_891_234i64), *scale, &InvariantFormat)
            });
        });
    }

    group.bench_function("german", |b| {
        b.iter(|| ScaledArithmetic::format(black_box(-1_234_567_891_234i64), SCALE, &german));
    });

    group.finish();
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for text in ["42", "-1234.567891234", "1,234,567.123456789987654321"].iter() {
        group.bench_with_input(BenchmarkId::new("i64", text), text, |b, text| {
            b.iter(|| {
                ScaledArithmetic::parse::<i64, _>(
                    black_box(*text),
                    SCALE,
                    NumberStyle::NUMBER,
                    &InvariantFormat,
                )
            });
        });
    }

    let ctx = DecimalContext::european(4);
    group.bench_function("context_european", |b| {
        b.iter(|| ctx.parse::<i64>(black_box("-12.345.678,91235")));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_multiply_divide,
    benchmark_rounding,
    benchmark_format,
    benchmark_parse,
);
criterion_main!(benches);
