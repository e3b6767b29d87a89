//! # Register Benchmarks
//!
//! Measures performance of register construction, composition, collapse and
//! value extraction.
//!
//! Run: `cargo bench --bench register_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sil_qreg::{FixedSequence, Qubit, Register, RngSource};

/// Benchmark register creation
fn bench_register_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("register_creation");

    group.bench_function("epr_pair", |b| b.iter(|| black_box(Register::epr_pair())));

    group.bench_function("from_value_27", |b| {
        b.iter(|| black_box(Register::from_value(black_box(27))))
    });

    for qubits in [4u32, 8, 12, 16] {
        group.bench_with_input(BenchmarkId::new("w_state", qubits), &qubits, |b, &n| {
            b.iter(|| black_box(Register::w_state_of_length(n)))
        });
    }

    group.finish();
}

/// Benchmark tensor composition of qubits
fn bench_register_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("register_composition");

    for qubits in [2usize, 6, 10, 14] {
        let parts: Vec<Qubit> = (0..qubits)
            .map(|i| if i % 2 == 0 { Qubit::zero() } else { Qubit::one() })
            .collect();
        group.bench_with_input(BenchmarkId::new("from_registers", qubits), &parts, |b, p| {
            b.iter(|| black_box(Register::from_registers(p.iter())))
        });
    }

    group.finish();
}

/// Benchmark collapse and value extraction
fn bench_collapse(c: &mut Criterion) {
    let mut group = c.benchmark_group("collapse");

    for qubits in [3u32, 8, 12] {
        let state = Register::w_state_of_length(qubits).unwrap();
        group.bench_with_input(BenchmarkId::new("w_state_fixed", qubits), &state, |b, s| {
            let mut source = FixedSequence::constant(0.5);
            b.iter(|| {
                let mut reg = s.clone();
                black_box(reg.collapse(&mut source))
            })
        });
    }

    let mut rng = RngSource::seeded(42);
    let ghz = Register::ghz_state_of_length(10).unwrap();
    group.bench_function("ghz_10_rng_then_value", |b| {
        b.iter(|| {
            let mut reg = ghz.clone();
            reg.collapse(&mut rng);
            black_box(reg.value())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_register_creation,
    bench_register_composition,
    bench_collapse,
);
criterion_main!(benches);
