//! Qubit: registrador de duas amplitudes com fase global canônica
//!
//! Além da normalização de módulo herdada do [`Register`], o qubit gira as
//! duas amplitudes para que a amplitude de |0> tenha fase 0. Registradores
//! compostos a partir de qubits não repetem essa canonicalização.

use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::equality::ApproxEq;
use crate::error::{QuantumError, QuantumResult};
use crate::numeric::complex_exp;
use crate::register::{normalize_magnitudes, Register};

/// Qubit único
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Register", into = "Register")]
pub struct Qubit {
    register: Register,
}

/// Gira as amplitudes para que a de |0> tenha fase 0
///
/// Lê a fase da amplitude já normalizada.
fn canonicalize_phase(amplitudes: &mut [Complex64; 2]) {
    let phase = amplitudes[0].arg();
    if phase != 0.0 {
        let rotation = complex_exp(-phase);
        for a in amplitudes.iter_mut() {
            *a *= rotation;
        }
    }
}

impl Qubit {
    /// Cria qubit a partir das amplitudes de |0> e |1>
    pub fn new(zero: Complex64, one: Complex64) -> QuantumResult<Self> {
        let mut amplitudes = [zero, one];
        if !normalize_magnitudes(&mut amplitudes) {
            return Err(QuantumError::ZeroNorm);
        }
        canonicalize_phase(&mut amplitudes);
        Ok(Self {
            register: Register::from_normalized(amplitudes.to_vec()),
        })
    }

    /// Cria qubit a partir das partes real/imaginária das duas amplitudes
    pub fn from_parts(zero_re: f64, zero_im: f64, one_re: f64, one_im: f64) -> QuantumResult<Self> {
        Self::new(Complex64::new(zero_re, zero_im), Complex64::new(one_re, one_im))
    }

    /// Cria qubit a partir de coordenadas da esfera de Bloch
    ///
    /// `colatitude` θ ∈ [0, π], `longitude` φ ∈ [0, 2π):
    /// `cos(θ/2)|0> + e^(iφ)·sin(θ/2)|1>`.
    pub fn from_bloch(colatitude: f64, longitude: f64) -> QuantumResult<Self> {
        let half = colatitude / 2.0;
        Self::new(
            Complex64::new(half.cos(), 0.0),
            complex_exp(longitude) * half.sin(),
        )
    }

    /// |0>
    pub fn zero() -> Self {
        Self {
            register: Register::from_normalized(vec![Complex64::one(), Complex64::zero()]),
        }
    }

    /// |1>
    pub fn one() -> Self {
        Self {
            register: Register::from_normalized(vec![Complex64::zero(), Complex64::one()]),
        }
    }

    /// Amplitude de |0>
    #[inline]
    pub fn zero_amplitude(&self) -> Complex64 {
        self.register.amplitudes()[0]
    }

    /// Amplitude de |1>
    #[inline]
    pub fn one_amplitude(&self) -> Complex64 {
        self.register.amplitudes()[1]
    }

    /// Registrador subjacente
    #[inline]
    pub fn register(&self) -> &Register {
        &self.register
    }

    /// Consome o qubit e devolve o registrador
    pub fn into_register(self) -> Register {
        self.register
    }
}

impl AsRef<Register> for Qubit {
    fn as_ref(&self) -> &Register {
        &self.register
    }
}

impl From<Qubit> for Register {
    fn from(qubit: Qubit) -> Self {
        qubit.register
    }
}

impl TryFrom<Register> for Qubit {
    type Error = QuantumError;

    fn try_from(register: Register) -> QuantumResult<Self> {
        match register.amplitudes() {
            &[zero, one] => Self::new(zero, one),
            other => Err(QuantumError::NotQubit(other.len())),
        }
    }
}

impl ApproxEq for Qubit {
    fn approx_eq(&self, other: &Self) -> bool {
        self.register.approx_eq(&other.register)
    }
}

impl ApproxEq<Register> for Qubit {
    fn approx_eq(&self, other: &Register) -> bool {
        self.register.approx_eq(other)
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.register, f)
    }
}
