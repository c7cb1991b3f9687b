//! Unrestricted vs banded alignment throughput on random DNA.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nwpair::{banded_align, unrestricted_align, ScoringScheme};
use rand::Rng;

/// Generate a random DNA sequence of the given length.
fn generate_sequence(len: usize) -> Vec<u8> {
    let bases = b"ACGT";
    let mut rng = rand::thread_rng();
    (0..len).map(|_| bases[rng.gen_range(0..4)]).collect()
}

/// Copy of `base` with a few random substitutions, so the optimal alignment
/// stays inside the band.
fn mutate(base: &[u8], substitutions: usize) -> Vec<u8> {
    let bases = b"ACGT";
    let mut rng = rand::thread_rng();
    let mut out = base.to_vec();
    for _ in 0..substitutions {
        let pos = rng.gen_range(0..out.len());
        out[pos] = bases[rng.gen_range(0..4)];
    }
    out
}

fn bench_aligners(c: &mut Criterion) {
    let scheme = ScoringScheme::default();
    let mut group = c.benchmark_group("pairwise_align");

    for len in [100usize, 500, 1000] {
        let a = generate_sequence(len);
        let b = mutate(&a, len / 20);

        group.bench_with_input(
            BenchmarkId::new("unrestricted", format!("{len}bp")),
            &len,
            |bench, &len| {
                bench.iter(|| {
                    black_box(unrestricted_align(
                        black_box(&a),
                        black_box(&b),
                        len,
                        &scheme,
                    ))
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("banded", format!("{len}bp")),
            &len,
            |bench, &len| {
                bench.iter(|| {
                    black_box(banded_align(black_box(&a), black_box(&b), len, &scheme))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_aligners);
criterion_main!(benches);
