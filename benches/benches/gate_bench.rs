//! # Gate Benchmarks
//!
//! Measures performance of gate composition, QFT construction and gate
//! application. Application is a dense O(4^n) product.
//!
//! Run: `cargo bench --bench gate_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sil_qreg::{QuantumGate, Register};

/// Benchmark gate construction
fn bench_gate_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_construction");

    for qubits in [2u32, 4, 6, 8] {
        group.bench_with_input(BenchmarkId::new("hadamard_of_length", qubits), &qubits, |b, &n| {
            b.iter(|| black_box(QuantumGate::hadamard_of_length(n)))
        });
        group.bench_with_input(BenchmarkId::new("qft", qubits), &qubits, |b, &n| {
            b.iter(|| black_box(QuantumGate::quantum_fourier_transform(n)))
        });
    }

    group.bench_function("controlled_not", |b| {
        let not = QuantumGate::not();
        b.iter(|| black_box(QuantumGate::controlled(&not)))
    });

    group.finish();
}

/// Benchmark gate application
fn bench_gate_application(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_application");

    for qubits in [2u32, 4, 6, 8] {
        let gate = QuantumGate::quantum_fourier_transform(qubits).unwrap();
        let register = Register::w_state_of_length(qubits).unwrap();
        group.bench_with_input(
            BenchmarkId::new("qft_apply", qubits),
            &(gate, register),
            |b, (g, r)| b.iter(|| black_box(g.apply(r))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_gate_construction, bench_gate_application);
criterion_main!(benches);
