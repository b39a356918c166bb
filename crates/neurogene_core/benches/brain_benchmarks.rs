use criterion::{black_box, criterion_group, criterion_main, Criterion};
use neurogene_core::brain::{Brain, NetLogic, RAW_OUTPUTS};
use neurogene_core::config::AppConfig;
use neurogene_core::genetics::{Dna, DnaLogic};
use neurogene_core::{NeuralLayerNet, Organism, WeightRange};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn constructed_brain(rng: &mut ChaCha8Rng) -> Brain {
    let mut brain =
        Brain::new(&[12, 10, RAW_OUTPUTS], WeightRange::default()).expect("valid topology");
    let dna = Dna::new_random_with_rng(brain.number_of_needed_genes(), 0.0, 1.0, rng)
        .expect("valid range");
    brain.construct(&dna).expect("matching gene count");
    brain
}

/// Benchmark one propagation pass with fresh input.
fn bench_brain_think(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut brain = constructed_brain(&mut rng);
    let inputs = [0.5; 12];

    c.bench_function("brain_think", |b| {
        b.iter(|| {
            let result = brain.think(black_box(&inputs));
            black_box(result)
        })
    });
}

/// Benchmark wiring a wide net from DNA.
fn bench_net_construct(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut net = NeuralLayerNet::new(&[64, 64, 64, RAW_OUTPUTS]).expect("valid topology");
    let dna = Dna::new_random_with_rng(net.number_of_needed_genes(), 0.0, 1.0, &mut rng)
        .expect("valid range");

    c.bench_function("net_construct", |b| {
        b.iter(|| {
            net.construct(black_box(&dna)).expect("matching gene count");
        })
    });
}

/// Benchmark DNA mutation.
fn bench_dna_mutate(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut dna = Dna::new_random_with_rng(4096, 0.0, 1.0, &mut rng).expect("valid range");

    c.bench_function("dna_mutate", |b| {
        b.iter(|| {
            let mutated = dna.mutate(black_box(0.05), 0.1, &mut rng);
            black_box(mutated)
        })
    });
}

/// Benchmark producing an offspring from two parents.
fn bench_offspring(c: &mut Criterion) {
    let config = AppConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let a = Organism::new_random_with_rng(1, &config, &mut rng).expect("valid config");
    let b = Organism::new_random_with_rng(2, &config, &mut rng).expect("valid config");

    c.bench_function("organism_offspring", |bench| {
        bench.iter(|| {
            let child = a.offspring_with_rng(&b, 3, &config, &mut rng);
            black_box(child)
        })
    });
}

criterion_group!(
    benches,
    bench_brain_think,
    bench_net_construct,
    bench_dna_mutate,
    bench_offspring
);
criterion_main!(benches);
