//! # Linear Algebra — Primitivas densas complexas
//!
//! Vetores são `Vec<Complex64>`; matrizes são [`ComplexMatrix`] em ordem
//! row-major. Somente o necessário para registradores e portas:
//! produto de Kronecker, matriz × vetor, matriz × matriz e transposta
//! conjugada.

use num_complex::Complex64;
use num_traits::{One, Zero};
use std::fmt;

/// Produto de Kronecker de dois vetores: `out[i * b.len() + j] = a[i] * b[j]`
pub fn kron_vec(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    let mut out = Vec::with_capacity(a.len() * b.len());
    for &x in a {
        out.extend(b.iter().map(|&y| x * y));
    }
    out
}

/// Vetor one-hot de comprimento `order` com 1 no índice `value`
pub fn one_hot(value: usize, order: usize) -> Vec<Complex64> {
    let mut out = vec![Complex64::zero(); order];
    if let Some(slot) = out.get_mut(value) {
        *slot = Complex64::one();
    }
    out
}

/// Matriz complexa densa (row-major)
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexMatrix {
    rows: usize,
    cols: usize,
    /// Elementos linha a linha
    data: Vec<Complex64>,
}

impl ComplexMatrix {
    /// Matriz de zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![Complex64::zero(); rows * cols],
        }
    }

    /// Matriz identidade n×n
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, Complex64::one());
        }
        m
    }

    /// Cria matriz a partir de linhas
    ///
    /// Retorna `None` se as linhas tiverem comprimentos diferentes.
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> Option<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != n_cols) {
            return None;
        }
        Some(Self {
            rows: n_rows,
            cols: n_cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Matriz quadrada `order`×`order` sobre elementos row-major
    pub(crate) fn from_rows_unchecked(order: usize, data: Vec<Complex64>) -> Self {
        debug_assert_eq!(data.len(), order * order);
        Self {
            rows: order,
            cols: order,
            data,
        }
    }

    /// Cria matriz a partir de reais, linha a linha
    pub(crate) fn from_real(rows: usize, cols: usize, values: &[f64]) -> Self {
        debug_assert_eq!(values.len(), rows * cols);
        Self {
            rows,
            cols,
            data: values.iter().map(|&v| Complex64::new(v, 0.0)).collect(),
        }
    }

    /// Número de linhas
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Número de colunas
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// É quadrada?
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Elemento (r, c)
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Complex64 {
        self.data[r * self.cols + c]
    }

    #[inline]
    pub(crate) fn set(&mut self, r: usize, c: usize, value: Complex64) {
        self.data[r * self.cols + c] = value;
    }

    /// Elementos em ordem row-major
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Linha `r`
    pub fn row(&self, r: usize) -> &[Complex64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Linhas como vetores
    pub fn to_rows(&self) -> Vec<Vec<Complex64>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    /// Produto de Kronecker `self ⊗ other`
    pub fn kron(&self, other: &ComplexMatrix) -> ComplexMatrix {
        let rows = self.rows * other.rows;
        let cols = self.cols * other.cols;
        let mut out = ComplexMatrix::zeros(rows, cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                let a = self.get(i, j);
                if a.is_zero() {
                    continue;
                }
                for k in 0..other.rows {
                    for l in 0..other.cols {
                        out.set(i * other.rows + k, j * other.cols + l, a * other.get(k, l));
                    }
                }
            }
        }
        out
    }

    /// Produto matriz × vetor
    ///
    /// O chamador garante `vector.len() == self.cols()`.
    pub fn mul_vec(&self, vector: &[Complex64]) -> Vec<Complex64> {
        debug_assert_eq!(vector.len(), self.cols);
        (0..self.rows)
            .map(|r| {
                self.row(r)
                    .iter()
                    .zip(vector)
                    .fold(Complex64::zero(), |acc, (&m, &v)| acc + m * v)
            })
            .collect()
    }

    /// Multiplicação de matrizes
    pub fn mul(&self, other: &ComplexMatrix) -> ComplexMatrix {
        debug_assert_eq!(self.cols, other.rows);
        let mut out = ComplexMatrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.get(i, k);
                if a.is_zero() {
                    continue;
                }
                for j in 0..other.cols {
                    let idx = i * out.cols + j;
                    out.data[idx] += a * other.get(k, j);
                }
            }
        }
        out
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> ComplexMatrix {
        let mut out = ComplexMatrix::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.set(c, r, self.get(r, c).conj());
            }
        }
        out
    }

    /// Multiplicação por escalar
    pub fn scale(&self, factor: Complex64) -> ComplexMatrix {
        ComplexMatrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| v * factor).collect(),
        }
    }
}

impl fmt::Display for ComplexMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            let row: Vec<String> = self.row(r).iter().map(|v| v.to_string()).collect();
            write!(f, "[{}]", row.join(" "))?;
        }
        Ok(())
    }
}
