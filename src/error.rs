//! Error type shared by the whole crate.

use crate::variant::Variant;

/// Everything that can go wrong outside the kernels themselves.
///
/// The slice-level kernels panic on malformed input instead; by the time a
/// kernel runs, the [`Matrix`](crate::Matrix) constructors have already
/// checked the shapes.
#[derive(Debug, thiserror::Error)]
pub enum MatmulError {
    #[error("dimension mismatch: {left}x{left} vs {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("expected {expected} elements for a {n}x{n} matrix, got {actual}")]
    InvalidLength {
        n: usize,
        expected: usize,
        actual: usize,
    },

    #[error(
        "{} mismatch at ({row}, {col}): expected {expected}, got {actual}",
        variant.map_or("result", Variant::name)
    )]
    Mismatch {
        variant: Option<Variant>,
        row: usize,
        col: usize,
        expected: i32,
        actual: i32,
    },

    #[error("unknown variant `{0}` (try --list)")]
    UnknownVariant(String),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatmulError>;
