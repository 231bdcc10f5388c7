use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use worldgen_descriptors::prelude::{AmountSource, VariableAmount};

const DRAWS: usize = 4096;

// Draws are cheap and stable; more samples over a short window.
fn amount_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(50)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(1))
}

fn amounts() -> Vec<(&'static str, VariableAmount)> {
    vec![
        ("fixed", VariableAmount::from(3)),
        ("range", VariableAmount::range(1.0, 8.0).unwrap()),
        (
            "base_with_variance",
            VariableAmount::base_with_variance(4.0, 2.0).unwrap(),
        ),
        (
            "base_with_addition",
            VariableAmount::base_with_addition(1.0, 5.0).unwrap(),
        ),
        (
            "optional_variance",
            VariableAmount::optional_variance(4.0, 2.0, 0.5).unwrap(),
        ),
        (
            "optional_addition",
            VariableAmount::optional_addition(1.0, 5.0, 0.25).unwrap(),
        ),
    ]
}

fn amount_draw_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("amount/draw");
    group.throughput(Throughput::Elements(DRAWS as u64));

    for (name, amount) in amounts() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &amount, |b, amount| {
            let mut rng = StdRng::seed_from_u64(0xC0FFEE);
            b.iter(|| {
                let mut total = 0u64;
                for _ in 0..DRAWS {
                    total += u64::from(amount.floored_amount(&mut rng));
                }
                black_box(total);
            });
        });
    }

    group.finish();
}

fn amount_bounds_benches(c: &mut Criterion) {
    let all = amounts();
    c.bench_function("amount/bounds", |b| {
        b.iter(|| {
            for (_, amount) in &all {
                black_box((amount.minimum(), amount.maximum()));
            }
        });
    });
}

criterion_group! {
    name = benches;
    config = amount_criterion();
    targets = amount_draw_benches, amount_bounds_benches
}
criterion_main!(benches);
