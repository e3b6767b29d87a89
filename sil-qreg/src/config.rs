//! Environment configuration loading from .env files
//!
//! Loads configuration values from .env or environment variables.
//! Used for equality tolerance, dense-storage limits and the seed of the
//! production random source.

use std::env;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Casas decimais padrão da igualdade aproximada
pub const APPROX_DECIMAL_PLACES: i32 = 15;

/// Limite padrão de qubits de um registrador denso
pub const DEFAULT_MAX_QUBITS: u32 = 24;

// Automatically load .env when config module is accessed
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Ensure environment is loaded
#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Interpreta casas decimais; fora de 1..=17 vale o padrão
fn parse_decimal_places(raw: Option<&str>) -> i32 {
    raw.and_then(|v| v.trim().parse().ok())
        .filter(|places| (1..=17).contains(places))
        .unwrap_or(APPROX_DECIMAL_PLACES)
}

/// Interpreta o limite de qubits; zero ou acima da largura de `usize` vale o padrão
fn parse_max_qubits(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse().ok())
        .filter(|&limit: &u32| limit > 0 && limit < usize::BITS)
        .unwrap_or(DEFAULT_MAX_QUBITS)
}

/// Limite de qubits de uma porta densa
///
/// Uma porta de `n` qubits guarda 4^n células, o mesmo que um registrador
/// de `2n` qubits.
pub fn gate_qubit_limit(max_qubits: u32) -> u32 {
    (max_qubits / 2).max(1)
}

/// Load approximate-equality decimal places from environment
/// Default: 15
pub fn approx_decimal_places() -> i32 {
    ensure_loaded();
    parse_decimal_places(env::var("SIL_QREG_APPROX_DECIMAL_PLACES").ok().as_deref())
}

/// Load maximum qubit count from environment
/// Default: 24 (2^24 amplitudes)
pub fn max_qubits() -> u32 {
    ensure_loaded();
    parse_max_qubits(env::var("SIL_QREG_MAX_QUBITS").ok().as_deref())
}

/// Load random seed from environment
/// Default: none (entropy)
pub fn seed() -> Option<u64> {
    ensure_loaded();
    env::var("SIL_QREG_SEED").ok().and_then(|v| v.parse().ok())
}

/// Cached values
pub static APPROX_PLACES: Lazy<i32> = Lazy::new(approx_decimal_places);
pub static MAX_QUBITS: Lazy<u32> = Lazy::new(max_qubits);
pub static MAX_GATE_QUBITS: Lazy<u32> = Lazy::new(|| gate_qubit_limit(*MAX_QUBITS));

/// Tolerância absoluta derivada das casas decimais
#[inline]
pub fn approx_tolerance() -> f64 {
    10f64.powi(-*APPROX_PLACES)
}

/// Configuração efetiva do simulador
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QRegConfig {
    /// Casas decimais da igualdade aproximada
    pub approx_decimal_places: i32,
    /// Máximo de qubits por registrador (portas: metade)
    pub max_qubits: u32,
    /// Semente da fonte aleatória (None = entropia)
    pub seed: Option<u64>,
}

impl Default for QRegConfig {
    fn default() -> Self {
        Self {
            approx_decimal_places: APPROX_DECIMAL_PLACES,
            max_qubits: DEFAULT_MAX_QUBITS,
            seed: None,
        }
    }
}

impl QRegConfig {
    /// Configuração lida do ambiente
    pub fn from_env() -> Self {
        Self {
            approx_decimal_places: *APPROX_PLACES,
            max_qubits: *MAX_QUBITS,
            seed: seed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QRegConfig::default();
        assert_eq!(config.approx_decimal_places, 15);
        assert_eq!(config.max_qubits, 24);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_env_values_in_range() {
        let config = QRegConfig::from_env();
        assert!((1..=17).contains(&config.approx_decimal_places));
        assert!(config.max_qubits > 0);
        assert!(approx_tolerance() > 0.0);
        assert_eq!(*MAX_GATE_QUBITS, gate_qubit_limit(*MAX_QUBITS));
    }

    #[test]
    fn test_parse_decimal_places() {
        assert_eq!(parse_decimal_places(None), 15);
        assert_eq!(parse_decimal_places(Some("10")), 10);
        assert_eq!(parse_decimal_places(Some(" 3 ")), 3);
        assert_eq!(parse_decimal_places(Some("1")), 1);
        assert_eq!(parse_decimal_places(Some("17")), 17);
        assert_eq!(parse_decimal_places(Some("0")), 15);
        assert_eq!(parse_decimal_places(Some("18")), 15);
        assert_eq!(parse_decimal_places(Some("-4")), 15);
        assert_eq!(parse_decimal_places(Some("abc")), 15);
    }

    #[test]
    fn test_parse_max_qubits() {
        assert_eq!(parse_max_qubits(None), 24);
        assert_eq!(parse_max_qubits(Some("16")), 16);
        assert_eq!(parse_max_qubits(Some("0")), 24);
        assert_eq!(parse_max_qubits(Some("64")), 24);
        assert_eq!(parse_max_qubits(Some("x")), 24);
    }

    #[test]
    fn test_gate_qubit_limit() {
        assert_eq!(gate_qubit_limit(24), 12);
        assert_eq!(gate_qubit_limit(25), 12);
        assert_eq!(gate_qubit_limit(1), 1);
    }
}
