use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::aspects::AspectCalculator;
use urania::{calculate_chart, default_natal_input};

fn bench_calculate_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::new();

    c.bench_function("calculate_aspects", |b| {
        b.iter(|| calculator.calculate_aspects(black_box(100.0), black_box(102.0)))
    });
}

fn bench_compute_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::new();
    let chart = calculate_chart(&default_natal_input()).unwrap();

    c.bench_function("compute_aspects", |b| {
        b.iter(|| calculator.compute_aspects(black_box(&chart.bodies)))
    });
}

criterion_group!(benches, bench_calculate_aspects, bench_compute_aspects);
criterion_main!(benches);
