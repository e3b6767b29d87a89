//! Tipos de erro para sil-qreg

use thiserror::Error;

/// Resultado customizado para operações de registrador/porta
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Categoria de um erro quântico
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Dimensão inválida (não potência de dois, não quadrada, incompatível)
    Dimension,
    /// Porção de bits fora do registrador
    Range,
    /// Valor clássico pedido a um estado não puro
    Purity,
    /// Vetor de amplitudes sem norma
    Normalization,
}

/// Erros que podem ocorrer em operações de registrador/porta
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    #[error("Dimension error: amplitude count {0} is not a power of two")]
    NotPowerOfTwo(usize),

    #[error("Dimension error: matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("Dimension error: gate cannot be applied: dimension mismatch (gate order {gate}, register length {register})")]
    DimensionMismatch { gate: usize, register: usize },

    #[error("Dimension error: controlled gate can only be created from a unary gate, got order {0}")]
    NotUnary(usize),

    #[error("Dimension error: value {value} does not fit in a register of order {order}")]
    ValueOverflow { value: u64, order: u64 },

    #[error("Dimension error: {requested} qubits exceed the limit of {limit}")]
    TooManyQubits { requested: u32, limit: u32 },

    #[error("Dimension error: a qubit needs exactly 2 amplitudes, got {0}")]
    NotQubit(usize),

    #[error("Dimension error: {0} requires at least one qubit")]
    EmptyComposition(&'static str),

    #[error("Range error: portion overflows register (start {start}, length {length}, register {register})")]
    PortionOverflow {
        start: u32,
        length: u32,
        register: u32,
    },

    #[error("Purity error: value can only be extracted from a pure state")]
    NotPure,

    #[error("Normalization error: amplitudes have zero or non-finite norm")]
    ZeroNorm,
}

impl QuantumError {
    /// Categoria do erro
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotPowerOfTwo(_)
            | Self::NotSquare { .. }
            | Self::DimensionMismatch { .. }
            | Self::NotUnary(_)
            | Self::NotQubit(_)
            | Self::ValueOverflow { .. }
            | Self::TooManyQubits { .. }
            | Self::EmptyComposition(_) => ErrorKind::Dimension,
            Self::PortionOverflow { .. } => ErrorKind::Range,
            Self::NotPure => ErrorKind::Purity,
            Self::ZeroNorm => ErrorKind::Normalization,
        }
    }
}
