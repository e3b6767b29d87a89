//! # Quantum Gates — Portas quânticas como matrizes
//!
//! Uma porta é uma matriz complexa quadrada de ordem `2^k`. A unitariedade
//! não é validada na construção; [`QuantumGate::is_unitary`] apenas informa.
//!
//! ## Gates Implementadas
//!
//! - **Single-qubit**: I, H, X (NOT), Y, Z, fase φ, √NOT
//! - **Two-qubit**: CNOT, SWAP, √SWAP, controlada de qualquer porta unária
//! - **Three-qubit**: Toffoli, Fredkin
//! - **n-qubit**: H⊗n, QFT
//!
//! ## Composição
//!
//! `QuantumGate::from_gates([a, b])` = `a ⊗ b`, com `a` nos bits mais
//! significativos, na mesma convenção de [`Register::from_registers`].

use num_complex::Complex64;
use num_traits::One;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, PI};
use std::fmt;

use crate::config::MAX_GATE_QUBITS;
use crate::equality::{approx_eq_slice, ApproxEq};
use crate::error::{QuantumError, QuantumResult};
use crate::linalg::ComplexMatrix;
use crate::numeric::{complex_exp, log2};
use crate::qubit::Qubit;
use crate::register::Register;

/// Tolerância da verificação informativa de unitariedade
const UNITARY_TOLERANCE: f64 = 1e-10;

/// Porta quântica
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Complex64>>", into = "Vec<Vec<Complex64>>")]
pub struct QuantumGate {
    matrix: ComplexMatrix,
}

/// Rejeita portas densas acima do limite de qubits de porta
fn check_gate_qubit_limit(qubits: u32) -> QuantumResult<()> {
    let limit = *MAX_GATE_QUBITS;
    if qubits > limit {
        return Err(QuantumError::TooManyQubits { requested: qubits, limit });
    }
    Ok(())
}

impl QuantumGate {
    /// Cria porta a partir de uma matriz
    pub fn from_matrix(matrix: ComplexMatrix) -> QuantumResult<Self> {
        if !matrix.is_square() {
            return Err(QuantumError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }
        if !matrix.rows().is_power_of_two() {
            return Err(QuantumError::NotPowerOfTwo(matrix.rows()));
        }
        check_gate_qubit_limit(log2(matrix.rows()))?;
        Ok(Self { matrix })
    }

    /// Cria porta a partir de linhas de coeficientes
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> QuantumResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        match ComplexMatrix::from_rows(rows) {
            Some(matrix) => Self::from_matrix(matrix),
            None => Err(QuantumError::NotSquare {
                rows: n_rows,
                cols: n_cols,
            }),
        }
    }

    /// Compõe portas pelo produto tensorial, a partir da identidade 1×1
    pub fn from_gates<I>(gates: I) -> QuantumResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<QuantumGate>,
    {
        let gates: Vec<I::Item> = gates.into_iter().collect();
        let qubits = gates
            .iter()
            .fold(0u32, |total, gate| total.saturating_add(gate.as_ref().qubit_count()));
        check_gate_qubit_limit(qubits)?;

        let matrix = gates
            .iter()
            .fold(ComplexMatrix::identity(1), |acc, gate| acc.kron(&gate.as_ref().matrix));
        Ok(Self { matrix })
    }

    /// Porta sobre uma matriz de reais já validada
    fn real(order: usize, values: &[f64]) -> Self {
        Self {
            matrix: ComplexMatrix::from_real(order, order, values),
        }
    }

    /// Porta de permutação: identidade com os pares de estados trocados
    fn permutation(order: usize, swaps: &[(usize, usize)]) -> Self {
        let mut matrix = ComplexMatrix::identity(order);
        let one = Complex64::one();
        let zero = Complex64::new(0.0, 0.0);
        for &(a, b) in swaps {
            matrix.set(a, a, zero);
            matrix.set(b, b, zero);
            matrix.set(a, b, one);
            matrix.set(b, a, one);
        }
        Self { matrix }
    }

    // =========================================================================
    // Consultas
    // =========================================================================

    /// Ordem da matriz (`2^qubits`)
    #[inline]
    pub fn order(&self) -> usize {
        self.matrix.rows()
    }

    /// Número de qubits sobre os quais a porta atua
    #[inline]
    pub fn qubit_count(&self) -> u32 {
        log2(self.matrix.rows())
    }

    /// Matriz da porta
    #[inline]
    pub fn matrix(&self) -> &ComplexMatrix {
        &self.matrix
    }

    /// Coeficiente (linha, coluna)
    pub fn coefficient(&self, row: usize, col: usize) -> Option<Complex64> {
        (row < self.order() && col < self.order()).then(|| self.matrix.get(row, col))
    }

    /// Transposta conjugada (inversa, se unitária)
    pub fn dagger(&self) -> Self {
        Self {
            matrix: self.matrix.dagger(),
        }
    }

    /// Verifica se é unitária (U·U† = I)
    pub fn is_unitary(&self) -> bool {
        let product = self.matrix.mul(&self.matrix.dagger());
        let identity = ComplexMatrix::identity(self.order());
        product
            .as_slice()
            .iter()
            .zip(identity.as_slice())
            .all(|(&p, &i)| (p - i).norm() < UNITARY_TOLERANCE)
    }

    // =========================================================================
    // Aplicação
    // =========================================================================

    /// Aplica a porta a um registrador, produzindo um novo registrador
    pub fn apply(&self, register: &Register) -> QuantumResult<Register> {
        if self.order() != register.len() {
            return Err(QuantumError::DimensionMismatch {
                gate: self.order(),
                register: register.len(),
            });
        }
        tracing::trace!(order = self.order(), "applying gate");
        Register::from_vector(self.matrix.mul_vec(register.amplitudes()))
    }

    /// Aplica uma porta unária a um qubit
    pub fn apply_to_qubit(&self, qubit: &Qubit) -> QuantumResult<Qubit> {
        Qubit::try_from(self.apply(qubit.register())?)
    }

    // =========================================================================
    // Portas Padrão
    // =========================================================================

    /// Identidade de um qubit
    pub fn identity() -> Self {
        Self::real(2, &[1.0, 0.0, 0.0, 1.0])
    }

    /// Identidade de `n` qubits
    pub fn identity_of_length(n: u32) -> QuantumResult<Self> {
        check_gate_qubit_limit(n)?;
        Ok(Self {
            matrix: ComplexMatrix::identity(1 << n),
        })
    }

    /// Porta Hadamard: cria superposição
    pub fn hadamard() -> Self {
        let h = FRAC_1_SQRT_2;
        Self::real(2, &[h, h, h, -h])
    }

    /// H⊗H⊗…⊗H sobre `n` qubits
    pub fn hadamard_of_length(n: u32) -> QuantumResult<Self> {
        if n == 0 {
            return Err(QuantumError::EmptyComposition("Hadamard gate"));
        }
        check_gate_qubit_limit(n)?;
        let h = Self::hadamard();
        Self::from_gates((0..n).map(|_| &h))
    }

    /// Porta NOT (Pauli-X)
    pub fn not() -> Self {
        Self::pauli_x()
    }

    /// Porta Pauli-X
    pub fn pauli_x() -> Self {
        Self::real(2, &[0.0, 1.0, 1.0, 0.0])
    }

    /// Porta Pauli-Y
    pub fn pauli_y() -> Self {
        Self {
            matrix: ComplexMatrix::from_rows_unchecked(
                2,
                vec![
                    Complex64::new(0.0, 0.0),
                    Complex64::new(0.0, -1.0),
                    Complex64::new(0.0, 1.0),
                    Complex64::new(0.0, 0.0),
                ],
            ),
        }
    }

    /// Porta Pauli-Z (phase flip)
    pub fn pauli_z() -> Self {
        Self::real(2, &[1.0, 0.0, 0.0, -1.0])
    }

    /// Porta de fase: |1> ganha e^(iφ)
    pub fn phase_shift(phi: f64) -> Self {
        let mut gate = Self::identity();
        gate.matrix.set(1, 1, complex_exp(phi));
        gate
    }

    /// Porta SWAP
    pub fn swap() -> Self {
        Self::permutation(4, &[(1, 2)])
    }

    /// Porta √SWAP
    pub fn sqrt_swap() -> Self {
        let p = Complex64::new(0.5, 0.5);
        let m = Complex64::new(0.5, -0.5);
        let mut gate = Self::identity_of_two();
        gate.matrix.set(1, 1, p);
        gate.matrix.set(1, 2, m);
        gate.matrix.set(2, 1, m);
        gate.matrix.set(2, 2, p);
        gate
    }

    /// Porta √NOT
    pub fn sqrt_not() -> Self {
        let p = Complex64::new(0.5, 0.5);
        let m = Complex64::new(0.5, -0.5);
        Self {
            matrix: ComplexMatrix::from_rows_unchecked(2, vec![p, m, m, p]),
        }
    }

    /// Porta CNOT
    pub fn controlled_not() -> Self {
        Self::permutation(4, &[(2, 3)])
    }

    /// Porta Toffoli (CCNOT)
    pub fn toffoli() -> Self {
        Self::permutation(8, &[(6, 7)])
    }

    /// Porta Fredkin (CSWAP)
    pub fn fredkin() -> Self {
        Self::permutation(8, &[(5, 6)])
    }

    fn identity_of_two() -> Self {
        Self {
            matrix: ComplexMatrix::identity(4),
        }
    }

    /// Versão controlada de uma porta unária: `[[I, 0], [0, U]]`
    pub fn controlled(inner: &QuantumGate) -> QuantumResult<Self> {
        if inner.order() != 2 {
            return Err(QuantumError::NotUnary(inner.order()));
        }
        let mut gate = Self::identity_of_two();
        for r in 0..2 {
            for c in 0..2 {
                gate.matrix.set(2 + r, 2 + c, inner.matrix.get(r, c));
            }
        }
        Ok(gate)
    }

    /// Transformada quântica de Fourier sobre `n` qubits
    ///
    /// Entrada `(i, j) = e^(2πi·(i·j mod N)/N) / √N`. Só existem `N` fases
    /// distintas, calculadas uma vez e indexadas por `(i·j) mod N`.
    pub fn quantum_fourier_transform(n: u32) -> QuantumResult<Self> {
        check_gate_qubit_limit(n)?;
        let order = 1usize << n;
        let sqrt_order = (order as f64).sqrt();
        let phases: Vec<Complex64> = (0..order)
            .map(|k| complex_exp(2.0 * PI * k as f64 / order as f64) / sqrt_order)
            .collect();

        let mut matrix = ComplexMatrix::zeros(order, order);
        for i in 0..order {
            for j in 0..order {
                matrix.set(i, j, phases[(i * j) % order]);
            }
        }
        tracing::debug!(qubits = n, order, "built quantum fourier transform");
        Ok(Self { matrix })
    }
}

/// Aplica `gate` a `register`, produzindo um novo registrador
pub fn apply(gate: &QuantumGate, register: &Register) -> QuantumResult<Register> {
    gate.apply(register)
}

impl AsRef<QuantumGate> for QuantumGate {
    fn as_ref(&self) -> &QuantumGate {
        self
    }
}

impl TryFrom<Vec<Vec<Complex64>>> for QuantumGate {
    type Error = QuantumError;

    fn try_from(rows: Vec<Vec<Complex64>>) -> QuantumResult<Self> {
        Self::from_rows(rows)
    }
}

impl From<QuantumGate> for Vec<Vec<Complex64>> {
    fn from(gate: QuantumGate) -> Self {
        gate.matrix.to_rows()
    }
}

impl ApproxEq for QuantumGate {
    fn approx_eq(&self, other: &Self) -> bool {
        self.order() == other.order() && approx_eq_slice(self.matrix.as_slice(), other.matrix.as_slice())
    }
}

impl fmt::Display for QuantumGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}

// =============================================================================
// Testes
// =============================================================================
