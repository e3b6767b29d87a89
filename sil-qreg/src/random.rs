//! Fonte aleatória injetada pelo chamador
//!
//! O colapso nunca possui nem semeia um gerador próprio: o chamador passa
//! uma [`RandomSource`]. Em produção, [`RngSource`] adapta qualquer gerador
//! `rand`; em testes, [`FixedSequence`] devolve valores fixos.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Capacidade de sortear um valor uniforme em `[0, 1)`
pub trait RandomSource {
    /// Próximo valor uniforme em `[0, 1)`
    fn next_uniform(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Adaptador de um gerador `rand`
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Envolve um gerador existente
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Gerador interno
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Gerador semeado por entropia do sistema
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Gerador determinístico
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Semente de `SIL_QREG_SEED` quando definida, entropia caso contrário
    pub fn from_env() -> Self {
        match crate::config::seed() {
            Some(seed) => {
                tracing::debug!(seed, "random source seeded from environment");
                Self::seeded(seed)
            }
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Sequência fixa, repetida ciclicamente
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSequence {
    /// Sequência de valores; vazia equivale a `[0.0]`
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, cursor: 0 }
    }

    /// Sempre o mesmo valor
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for FixedSequence {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_sequence_cycles() {
        let mut source = FixedSequence::new(vec![0.1, 0.7]);
        assert_eq!(source.next_uniform(), 0.1);
        assert_eq!(source.next_uniform(), 0.7);
        assert_eq!(source.next_uniform(), 0.1);
    }

    #[test]
    fn test_empty_sequence_defaults_to_zero() {
        let mut source = FixedSequence::new(Vec::new());
        assert_eq!(source.next_uniform(), 0.0);
    }

    #[test]
    fn test_seeded_is_deterministic_and_in_range() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for _ in 0..100 {
            let x = a.next_uniform();
            assert_eq!(x, b.next_uniform());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_into_inner_keeps_generator_state() {
        let mut source = RngSource::seeded(7);
        let first = source.next_uniform();
        let mut rng = source.into_inner();

        let mut replay = RngSource::seeded(7);
        assert_eq!(replay.next_uniform(), first);
        assert_eq!(rng.gen_range(0.0..1.0), replay.next_uniform());
    }

    #[test]
    fn test_borrowed_source() {
        fn draw(mut source: impl RandomSource) -> f64 {
            source.next_uniform()
        }

        let mut source = FixedSequence::new(vec![0.25, 0.5]);
        assert_eq!(draw(&mut source), 0.25);
        assert_eq!(source.next_uniform(), 0.5);
    }
}
