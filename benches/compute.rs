use criterion::{black_box, criterion_group, criterion_main, Criterion};
use footprint_estimator::{compute_with_rng, FootprintReport, LifestyleInput};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_compute(c: &mut Criterion) {
    let input = LifestyleInput::default();
    let mut rng = StdRng::seed_from_u64(0);

    c.bench_function("compute_default_form", |b| {
        b.iter(|| compute_with_rng(black_box(&input), &mut rng))
    });

    c.bench_function("compute_and_report", |b| {
        b.iter(|| {
            let result = compute_with_rng(black_box(&input), &mut rng);
            FootprintReport::new(&input, &result)
        })
    });
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
