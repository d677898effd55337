//! Benchmarks for card_form performance testing.
//!
//! Run with: cargo bench

use card_form::{format, ErrorMessages, FieldKind, PaymentForm};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const VALUES: [(FieldKind, &str); 5] = [
    (FieldKind::Number, "4111111111111111"),
    (FieldKind::Name, "Jane Doe"),
    (FieldKind::Month, "07"),
    (FieldKind::Year, "2026"),
    (FieldKind::Cvv, "123"),
];

fn filled_form() -> PaymentForm {
    let mut form = PaymentForm::with_current_year(2024);
    for (kind, value) in VALUES {
        form.input(kind, value);
    }
    form
}

/// Benchmark per-field validation
fn bench_field_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_validation");
    let form = filled_form();

    for kind in FieldKind::ALL {
        group.bench_with_input(BenchmarkId::new("first_error", kind), &kind, |b, &kind| {
            b.iter(|| black_box(&form).first_error(black_box(kind)))
        });
    }

    group.bench_function("is_form_valid", |b| {
        b.iter(|| black_box(&form).is_form_valid())
    });

    group.finish();
}

/// Benchmark a burst of keystrokes into the card number field
fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("typing");

    for len in [4usize, 16, 64] {
        let keystrokes: Vec<String> = (1..=len).map(|n| "4".repeat(n)).collect();

        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("input_and_validate", len),
            &keystrokes,
            |b, keystrokes| {
                let mut form = PaymentForm::with_current_year(2024);
                b.iter(|| {
                    for value in keystrokes {
                        form.input(FieldKind::Number, black_box(value));
                        black_box(form.card_number_error());
                    }
                })
            },
        );
    }

    group.finish();
}

/// Benchmark rendering
fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let form = filled_form();
    let messages = ErrorMessages::for_field(FieldKind::Year);

    group.bench_function("view", |b| b.iter(|| black_box(&form).view()));

    group.bench_function("card_number", |b| {
        b.iter(|| black_box(&form).card_number())
    });

    group.bench_function("error_message", |b| {
        b.iter(|| black_box(&form).error_message(FieldKind::Year, black_box(&messages)))
    });

    group.bench_function("numeric_value", |b| {
        b.iter(|| format::numeric_value(black_box("4111111111111111")))
    });

    group.finish();
}

/// Benchmark form construction (compiles nothing after the first call)
fn bench_construction(c: &mut Criterion) {
    c.bench_function("construct_form", |b| {
        b.iter(|| PaymentForm::with_current_year(black_box(2024)))
    });
}

criterion_group!(
    benches,
    bench_field_validation,
    bench_typing,
    bench_rendering,
    bench_construction,
);

criterion_main!(benches);
