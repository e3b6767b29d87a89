//! # ⚛️ sil-qreg — Quantum Registers & Gates
//!
//! Simula registradores quânticos como vetores de amplitudes complexas e
//! portas quânticas como matrizes unitárias que atuam sobre eles.
//!
//! ## Computational Complexity
//!
//! **Composition — O(2^n):**
//! - n = total qubits of the resulting register
//! - Kronecker fold of the parts, most significant part first
//!
//! **Gate application — O(4^n):**
//! - Dense matrix × vector product, then renormalization
//!
//! **QFT construction — O(4^n):**
//! - Only 2^n distinct phases are computed; cells index them by `(i·j) mod 2^n`
//!
//! **Collapse — O(2^n):**
//! - One uniform draw, linear scan of the cumulative probability
//!
//! **Scalability:**
//! - Registers up to ~12 qubits: ✓ Excellent
//! - 12–20 qubits: △ Gate application dominates (dense matrices)
//! - Registers above `SIL_QREG_MAX_QUBITS` (default 24): rejected
//! - Gates above half that limit (default 12): rejected
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          QuantumGate (2^k × 2^k)                │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Library · Controlled · QFT · ⊗           │  │
//! │  └───────────────────────────────────────────┘  │
//! │                     │ apply                     │
//! │                     ▼                           │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Register (2^k amplitudes) ⊃ Qubit        │  │
//! │  └───────────────────────────────────────────┘  │
//! │                     │ collapse(RandomSource)    │
//! │                     ▼                           │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Pure state → value()                     │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use sil_qreg::{QuantumGate, Qubit, Register, RngSource};
//!
//! let cnot = QuantumGate::controlled(&QuantumGate::not())?;
//! let input = Register::from_registers([Qubit::one(), Qubit::zero()])?;
//! assert_eq!(cnot.apply(&input)?.value()?, 0b11);
//!
//! // Par de Bell: (H ⊗ I) seguido de CNOT sobre |00>
//! let h_i = QuantumGate::from_gates([QuantumGate::hadamard(), QuantumGate::identity()])?;
//! let mut bell = cnot.apply(&h_i.apply(&Register::from_value_with_width(0, 2)?)?)?;
//! bell.collapse(&mut RngSource::seeded(7));
//! assert!(matches!(bell.value()?, 0 | 3));
//! # Ok::<(), sil_qreg::QuantumError>(())
//! ```

pub mod config;
pub mod equality;
pub mod error;
pub mod gate;
pub mod linalg;
pub mod numeric;
pub mod qubit;
pub mod random;
pub mod register;

pub use config::{QRegConfig, APPROX_DECIMAL_PLACES};
pub use equality::ApproxEq;
pub use error::{ErrorKind, QuantumError, QuantumResult};
pub use gate::{apply, QuantumGate};
pub use linalg::ComplexMatrix;
pub use num_complex::Complex64;
pub use qubit::Qubit;
pub use random::{FixedSequence, RandomSource, RngSource};
pub use register::Register;
