//! # Register — Registrador quântico
//!
//! Vetor ordenado de amplitudes complexas de comprimento `2^k` (k qubits).
//! Toda construção normaliza o vetor; a única mutação pública é
//! [`Register::collapse`].
//!
//! ## Ordem dos qubits
//!
//! O índice da amplitude, lido em binário, é o estado clássico com o bit
//! mais significativo à esquerda. Ao compor registradores, o primeiro
//! operando ocupa os bits mais significativos:
//!
//! ```text
//! Register(|1>, |0>)  →  [0, 0, 1, 0]  →  |10>
//! ```

use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::MAX_QUBITS;
use crate::equality::{approx_eq_slice, ApproxEq};
use crate::error::{QuantumError, QuantumResult};
use crate::linalg::{kron_vec, one_hot};
use crate::numeric::{log2, next_power_of_two};
use crate::random::RandomSource;

/// Registrador quântico
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Complex64>", into = "Vec<Complex64>")]
pub struct Register {
    /// Amplitudes, índice 0 = |0…0>
    amplitudes: Vec<Complex64>,
}

/// Rejeita registradores/portas acima do limite de qubits
pub(crate) fn check_qubit_limit(qubits: u32) -> QuantumResult<()> {
    let limit = *MAX_QUBITS;
    if qubits > limit {
        return Err(QuantumError::TooManyQubits { requested: qubits, limit });
    }
    Ok(())
}

/// Reescala as amplitudes para norma 1
///
/// Retorna `false` se a norma for nula ou não finita; nesse caso o vetor
/// não é alterado.
pub(crate) fn normalize_magnitudes(amplitudes: &mut [Complex64]) -> bool {
    let sum: f64 = amplitudes.iter().map(|a| a.norm_sqr()).sum();
    if sum == 0.0 || !sum.is_finite() {
        return false;
    }
    if sum != 1.0 {
        let norm = sum.sqrt();
        tracing::trace!(sum, "rescaling amplitudes");
        for a in amplitudes.iter_mut() {
            *a /= norm;
        }
    }
    true
}

impl Register {
    /// Cria registrador a partir de amplitudes
    pub fn from_amplitudes(amplitudes: impl IntoIterator<Item = Complex64>) -> QuantumResult<Self> {
        Self::from_vector(amplitudes.into_iter().collect())
    }

    /// Cria registrador a partir de um vetor de amplitudes
    pub fn from_vector(mut amplitudes: Vec<Complex64>) -> QuantumResult<Self> {
        let len = amplitudes.len();
        if !len.is_power_of_two() {
            return Err(QuantumError::NotPowerOfTwo(len));
        }
        check_qubit_limit(log2(len))?;
        if !normalize_magnitudes(&mut amplitudes) {
            return Err(QuantumError::ZeroNorm);
        }
        Ok(Self { amplitudes })
    }

    /// Compõe registradores pelo produto tensorial
    ///
    /// O primeiro registrador ocupa os bits mais significativos. Uma lista
    /// vazia produz o registrador degenerado `[1]`.
    pub fn from_registers<I>(parts: I) -> QuantumResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<Register>,
    {
        let mut amplitudes = vec![Complex64::one()];
        let mut qubits = 0u32;
        for part in parts {
            let part = part.as_ref();
            qubits += part.qubit_count();
            check_qubit_limit(qubits)?;
            amplitudes = kron_vec(&amplitudes, &part.amplitudes);
        }
        Self::from_vector(amplitudes)
    }

    /// Registrador no estado clássico `value`, com o menor número de qubits
    /// que o representa
    pub fn from_value(value: u64) -> QuantumResult<Self> {
        Self::from_value_with_width(value, 0)
    }

    /// Registrador no estado clássico `value` com `bit_width` qubits
    ///
    /// `bit_width == 0` escolhe a menor potência de dois estritamente maior
    /// que `value` (no mínimo 2, ou seja, um qubit).
    pub fn from_value_with_width(value: u64, bit_width: u32) -> QuantumResult<Self> {
        let order = if bit_width == 0 {
            next_power_of_two(value).max(2)
        } else {
            check_qubit_limit(bit_width)?;
            1u64 << bit_width
        };
        if value >= order {
            return Err(QuantumError::ValueOverflow { value, order });
        }
        check_qubit_limit(order.ilog2())?;
        Ok(Self {
            amplitudes: one_hot(value as usize, order as usize),
        })
    }

    /// Registrador sobre amplitudes já normalizadas (comprimento potência de
    /// dois garantido pelo chamador)
    pub(crate) fn from_normalized(amplitudes: Vec<Complex64>) -> Self {
        debug_assert!(amplitudes.len().is_power_of_two());
        Self { amplitudes }
    }

    /// Superposição uniforme dos índices dados
    fn uniform_over(qubits: u32, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut amplitudes = vec![Complex64::zero(); 1 << qubits];
        for index in indices {
            amplitudes[index] = Complex64::one();
        }
        let normalized = normalize_magnitudes(&mut amplitudes);
        debug_assert!(normalized);
        Self { amplitudes }
    }

    /// Par EPR: (|00> + |11>)/√2
    pub fn epr_pair() -> Self {
        Self::uniform_over(2, [0, 3])
    }

    /// Estado W de 3 qubits
    pub fn w_state() -> Self {
        Self::uniform_over(3, [1, 2, 4])
    }

    /// Estado W de `n` qubits: superposição uniforme dos estados com um
    /// único bit 1
    pub fn w_state_of_length(n: u32) -> QuantumResult<Self> {
        if n == 0 {
            return Err(QuantumError::EmptyComposition("W state"));
        }
        check_qubit_limit(n)?;
        Ok(Self::uniform_over(n, (0..n).map(|k| 1usize << k)))
    }

    /// Estado GHZ de 3 qubits
    pub fn ghz_state() -> Self {
        Self::uniform_over(3, [0, 7])
    }

    /// Estado GHZ de `n` qubits: (|0…0> + |1…1>)/√2
    pub fn ghz_state_of_length(n: u32) -> QuantumResult<Self> {
        if n == 0 {
            return Err(QuantumError::EmptyComposition("GHZ state"));
        }
        check_qubit_limit(n)?;
        Ok(Self::uniform_over(n, [0, (1usize << n) - 1]))
    }

    /// Número de amplitudes (`2^qubits`)
    #[inline]
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Registrador degenerado (zero qubits)?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.amplitudes.len() <= 1
    }

    /// Número de qubits
    #[inline]
    pub fn qubit_count(&self) -> u32 {
        log2(self.amplitudes.len())
    }

    /// Amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Amplitude do estado `index`
    pub fn amplitude(&self, index: usize) -> Option<Complex64> {
        self.amplitudes.get(index).copied()
    }

    /// Probabilidade de medição de cada estado
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Estado puro: uma amplitude exatamente 1, todas as outras exatamente 0
    pub fn is_pure(&self) -> bool {
        let mut found = false;
        for a in &self.amplitudes {
            if *a == Complex64::one() && !found {
                found = true;
            } else if !a.is_zero() {
                return false;
            }
        }
        found
    }

    /// Colapsa (mede) o registrador in place
    ///
    /// Consome um sorteio de `source` e percorre as probabilidades
    /// acumuladas; o primeiro índice cuja soma acumulada excede estritamente
    /// o sorteio vira o estado puro resultante. Se o arredondamento impedir
    /// qualquer índice de exceder o sorteio, o último índice com
    /// probabilidade não nula é escolhido. Retorna o índice selecionado.
    ///
    /// Esta é a única operação que altera um registrador existente.
    pub fn collapse<R: RandomSource + ?Sized>(&mut self, source: &mut R) -> usize {
        let draw = source.next_uniform();
        let threshold = if (0.0..1.0).contains(&draw) {
            draw
        } else {
            tracing::warn!(draw, "random draw outside [0, 1), clamping");
            if draw.is_nan() { 0.0 } else { draw.clamp(0.0, 1.0) }
        };

        let mut cumulative = 0.0;
        let hit = self.amplitudes.iter().position(|a| {
            cumulative += a.norm_sqr();
            cumulative > threshold
        });

        let index = match hit {
            Some(index) => index,
            None => {
                let fallback = self
                    .amplitudes
                    .iter()
                    .rposition(|a| !a.is_zero())
                    .unwrap_or(self.amplitudes.len() - 1);
                tracing::warn!(threshold, cumulative, fallback, "collapse exhausted amplitudes, using fallback");
                fallback
            }
        };

        tracing::debug!(index, draw, qubits = self.qubit_count(), "register collapsed");
        self.amplitudes = one_hot(index, self.amplitudes.len());
        index
    }

    /// Valor clássico de um estado puro
    pub fn value(&self) -> QuantumResult<u64> {
        self.value_portion(0, 0)
    }

    /// Valor clássico dos bits `[start, start + length)` de um estado puro
    ///
    /// Bits numerados a partir do mais significativo. `length == 0` lê até o
    /// fim do registrador.
    pub fn value_portion(&self, start: u32, length: u32) -> QuantumResult<u64> {
        let register_length = i64::from(self.qubit_count());
        let portion_start = i64::from(start);
        let portion_length = if length == 0 {
            register_length - portion_start
        } else {
            i64::from(length)
        };

        let trailing_bits = register_length - portion_start - portion_length;
        if trailing_bits < 0 || portion_length < 0 {
            return Err(QuantumError::PortionOverflow {
                start,
                length,
                register: self.qubit_count(),
            });
        }

        if !self.is_pure() {
            return Err(QuantumError::NotPure);
        }
        let index = self
            .amplitudes
            .iter()
            .position(|a| *a == Complex64::one())
            .ok_or(QuantumError::NotPure)?;

        let mut value = (index as u64) >> trailing_bits;
        if start > 0 && portion_length < 64 {
            value &= (1u64 << portion_length) - 1;
        }
        Ok(value)
    }
}

impl AsRef<Register> for Register {
    fn as_ref(&self) -> &Register {
        self
    }
}

impl TryFrom<Vec<Complex64>> for Register {
    type Error = QuantumError;

    fn try_from(amplitudes: Vec<Complex64>) -> QuantumResult<Self> {
        Self::from_vector(amplitudes)
    }
}

impl From<Register> for Vec<Complex64> {
    fn from(register: Register) -> Self {
        register.amplitudes
    }
}

impl ApproxEq for Register {
    fn approx_eq(&self, other: &Self) -> bool {
        approx_eq_slice(&self.amplitudes, &other.amplitudes)
    }
}

/// Formata um número não negativo, omitindo o coeficiente 1
fn magnitude_prefix(magnitude: f64) -> String {
    if magnitude == 1.0 { String::new() } else { format!("{magnitude} ") }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.qubit_count() as usize;
        let mut first = true;

        for (index, a) in self.amplitudes.iter().enumerate() {
            if a.is_zero() {
                continue;
            }

            // (negativo?, coeficiente sem sinal)
            let (negative, coefficient) = if a.im == 0.0 {
                (a.re < 0.0, magnitude_prefix(a.re.abs()))
            } else if a.re == 0.0 {
                let im = a.im.abs();
                let body = if im == 1.0 { "i ".to_string() } else { format!("{im}i ") };
                (a.im < 0.0, body)
            } else {
                (false, format!("({}{:+}i) ", a.re, a.im))
            };

            match (first, negative) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            write!(f, "{coefficient}|{index:0width$b}>")?;
            first = false;
        }
        Ok(())
    }
}
