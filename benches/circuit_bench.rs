use criterion::{criterion_group, criterion_main, Criterion};

use genelogic::{
    circuit_builder::CircuitBuilder,
    combinator::Combinator,
    components::{
        and_tree::{ThreeWayAnd, ThreeWayAndParams},
        latch::{LatchParams, SrLatch},
        xor::{Xor, XorParams},
    },
    noise::NoiseSource,
    stimulus::heaviside,
    Circuit,
};

const STEPS: usize = 2000;
const SIGMA: f64 = 0.005;

fn run_bench<F>(c: &mut Criterion, name: &str, build: F)
where
    F: Fn() -> Circuit,
{
    let mut noise = NoiseSource::seeded(0);
    c.bench_function(name, |b| {
        b.iter_batched(
            &build,
            |mut circuit| circuit.run(STEPS, SIGMA, &mut noise).unwrap(),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn component_benches(c: &mut Criterion) {
    run_bench(c, "three-way and", || {
        let mut builder = CircuitBuilder::default();
        ThreeWayAnd::new(&mut builder, &ThreeWayAndParams::default()).unwrap();
        builder.build()
    });
    run_bench(c, "latch", || {
        let mut builder = CircuitBuilder::default();
        SrLatch::new(&mut builder, &LatchParams::default()).unwrap();
        builder.build()
    });
    run_bench(c, "xor", || {
        let mut builder = CircuitBuilder::default();
        Xor::new(&mut builder, &XorParams::default()).unwrap();
        builder.build()
    });
}

/// Chain of `DEPTH` buffers, only the last of which is shown.
fn chain_bench<const DEPTH: usize>(c: &mut Criterion) {
    let name = format!("{DEPTH}-gate chain");
    run_bench(c, &name, || {
        let mut builder = CircuitBuilder::default();
        let mut node = builder.input("A", "grey", heaviside(5.0, 8.0, 0.0));
        for _ in 0..DEPTH {
            node = builder
                .gate("=", "", Combinator::same(), &[node])
                .unwrap();
        }
        builder.show(&[node]).unwrap();
        builder.build()
    });
}

fn chain_benches(c: &mut Criterion) {
    chain_bench::<8>(c);
    chain_bench::<64>(c);
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = component_benches, chain_benches
}
criterion_main!(benches);
