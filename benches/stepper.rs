//! Benchmarks for the Game of Life stepper.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use conway_life::{
    compute::{GridStore, Stepper},
    schema::{Pattern, Seed},
};

fn bench_stepper_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("stepper_step");

    for size in [16, 64, 256] {
        let mut store = GridStore::create(size, size).unwrap();
        Seed::new(Pattern::Random {
            density: 0.3,
            seed: 42,
        })
        .apply(&mut store)
        .unwrap();

        let stepper = Stepper::new();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| {
                    stepper.step(black_box(&mut store));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_stepper_step);
criterion_main!(benches);
