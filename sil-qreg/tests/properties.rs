//! Property-based tests for sil-qreg using proptest
//!
//! Normalization, dimension checks, collapse outcomes and value extraction
//! must hold regardless of specific input values.

use proptest::prelude::*;
use sil_qreg::{Complex64, ErrorKind, FixedSequence, QuantumGate, Qubit, Register};

fn amplitudes(len: usize) -> impl Strategy<Value = Vec<Complex64>> {
    prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), len)
        .prop_filter("non-zero norm", |parts| parts.iter().any(|&(re, im)| re.abs() + im.abs() > 1e-3))
        .prop_map(|parts| parts.into_iter().map(|(re, im)| Complex64::new(re, im)).collect())
}

// ============================================================================
// Register Properties
// ============================================================================

proptest! {
    /// Property: every constructed register has unit norm
    #[test]
    fn register_unit_norm(amps in (0u32..5).prop_flat_map(|k| amplitudes(1 << k))) {
        let reg = Register::from_amplitudes(amps).unwrap();
        let sum: f64 = reg.probabilities().iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-12, "norm {}", sum);
    }

    /// Property: non-power-of-two lengths are rejected
    #[test]
    fn register_rejects_non_power_of_two(len in 0usize..40) {
        prop_assume!(!len.is_power_of_two());
        let amps = vec![Complex64::new(1.0, 0.0); len];
        let err = Register::from_amplitudes(amps).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Dimension);
    }

    /// Property: a register built from a value gives the value back
    #[test]
    fn value_round_trip(value in 0u64..(1 << 10), extra in 0u32..4) {
        let reg = Register::from_value(value).unwrap();
        prop_assert_eq!(reg.value().unwrap(), value);

        let width = 11 + extra;
        let wide = Register::from_value_with_width(value, width).unwrap();
        prop_assert_eq!(wide.qubit_count(), width);
        prop_assert_eq!(wide.value().unwrap(), value);
    }

    /// Property: a portion equals the same bits taken arithmetically
    #[test]
    fn value_portion_bits(value in 0u64..256, start in 0u32..8, length in 1u32..8) {
        prop_assume!(start + length <= 8);
        let reg = Register::from_value_with_width(value, 8).unwrap();
        let expected = (value >> (8 - start - length)) & ((1 << length) - 1);
        prop_assert_eq!(reg.value_portion(start, length).unwrap(), expected);
    }

    /// Property: collapsing an EPR pair gives |00> or |11>
    #[test]
    fn epr_collapse_outcomes(draw in 0.0f64..1.0) {
        let mut reg = Register::epr_pair();
        let index = reg.collapse(&mut FixedSequence::constant(draw));
        prop_assert!(index == 0 || index == 3);
        prop_assert!(reg.is_pure());
        prop_assert_eq!(reg.value().unwrap(), index as u64);
    }

    /// Property: collapse always yields a pure state with non-zero prior probability
    #[test]
    fn collapse_selects_possible_state(
        amps in amplitudes(8),
        draw in 0.0f64..1.0,
    ) {
        let mut reg = Register::from_amplitudes(amps).unwrap();
        let prior = reg.probabilities();
        let index = reg.collapse(&mut FixedSequence::constant(draw));
        prop_assert!(reg.is_pure());
        prop_assert!(prior[index] > 0.0);
    }
}

// ============================================================================
// Qubit & Gate Properties
// ============================================================================

proptest! {
    /// Property: a qubit's zero amplitude is always real and non-negative
    #[test]
    fn qubit_phase_canonical(theta in 0.0f64..std::f64::consts::PI, phi in 0.0f64..6.28) {
        let q = Qubit::from_bloch(theta, phi).unwrap();
        prop_assert!(q.zero_amplitude().im.abs() < 1e-15);
        prop_assert!(q.zero_amplitude().re >= 0.0);
    }

    /// Property: phase shifts are unitary for every angle
    #[test]
    fn phase_shift_unitary(phi in -10.0f64..10.0) {
        prop_assert!(QuantumGate::phase_shift(phi).is_unitary());
    }

    /// Property: applying a unitary gate keeps the register normalized
    #[test]
    fn apply_preserves_norm(amps in amplitudes(4)) {
        let reg = Register::from_amplitudes(amps).unwrap();
        let gate = QuantumGate::from_gates([QuantumGate::hadamard(), QuantumGate::sqrt_not()]).unwrap();
        let out = gate.apply(&reg).unwrap();
        let sum: f64 = out.probabilities().iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-12);
    }
}
