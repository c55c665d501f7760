use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::{default_natal_input, ChartCalculator};

fn bench_calculate_chart(c: &mut Criterion) {
    let calculator = ChartCalculator::new();
    let input = default_natal_input();

    c.bench_function("calculate_chart", |b| {
        b.iter(|| calculator.calculate(black_box(&input)))
    });
}

criterion_group!(benches, bench_calculate_chart);
criterion_main!(benches);
