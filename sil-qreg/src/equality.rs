//! Igualdade aproximada compartilhada por registradores e portas
//!
//! A igualdade exata é o `PartialEq` derivado (bit a bit, mesmas dimensões).
//! A aproximada compara cada par de elementos com a tolerância de
//! [`crate::config::APPROX_DECIMAL_PLACES`] casas decimais.

use num_complex::Complex64;
use crate::config::approx_tolerance;

/// Compara dois complexos dentro da tolerância configurada
///
/// A diferença é escalada por `max(1, |a|, |b|)`, então valores de módulo
/// até 1 (amplitudes, coeficientes de portas) usam tolerância absoluta.
#[inline]
pub fn approx_eq_complex(a: Complex64, b: Complex64) -> bool {
    let scale = a.norm().max(b.norm()).max(1.0);
    (a - b).norm() <= approx_tolerance() * scale
}

/// Compara duas sequências elemento a elemento; comprimentos diferentes
/// nunca são iguais
pub fn approx_eq_slice(a: &[Complex64], b: &[Complex64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| approx_eq_complex(x, y))
}

/// Igualdade aproximada
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Mesmas dimensões e todos os elementos dentro da tolerância
    fn approx_eq(&self, other: &Rhs) -> bool;
}
