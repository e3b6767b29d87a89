//! Utilitários numéricos puros

use num_complex::Complex64;
use std::f64::consts::FRAC_PI_2;

/// Exponencial complexa e^(i*phase)
///
/// Múltiplos inteiros de π/2 retornam exatamente 1, i, -1 ou -i, sem o
/// resíduo de `cos`/`sin` (ex.: `cos(π/2) = 6.1e-17`).
pub fn complex_exp(phase: f64) -> Complex64 {
    let quarters = phase / FRAC_PI_2;
    if quarters.is_finite() && quarters == quarters.round() && quarters.abs() < 1e15 {
        return match (quarters as i64).rem_euclid(4) {
            0 => Complex64::new(1.0, 0.0),
            1 => Complex64::new(0.0, 1.0),
            2 => Complex64::new(-1.0, 0.0),
            _ => Complex64::new(0.0, -1.0),
        };
    }
    Complex64::from_polar(1.0, phase)
}

/// Menor potência de dois estritamente maior que `value`
///
/// Satura em `2^63` quando não há potência maior representável.
pub fn next_power_of_two(value: u64) -> u64 {
    value
        .checked_add(1)
        .and_then(u64::checked_next_power_of_two)
        .unwrap_or(1 << 63)
}

/// Logaritmo binário inteiro (floor); `log2(0)` retorna 0
#[inline]
pub fn log2(value: usize) -> u32 {
    value.checked_ilog2().unwrap_or(0)
}
