pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("a {rows}x{cols} matrix cannot be built from {actual} values")]
    ValueCount { rows: usize, cols: usize, actual: usize },
    #[error("cannot multiply a matrix of shape {lhs:?} by one of shape {rhs:?}")]
    DimensionMismatch { lhs: (usize, usize), rhs: (usize, usize) },
    #[error("expected a matrix of shape {expected:?}, got {actual:?}")]
    Shape { expected: (usize, usize), actual: (usize, usize) },
    #[error("operation requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix has no elements to operate on")]
    Empty,
    #[error("index ({row}, {col}) is outside a {rows}x{cols} matrix")]
    OutOfBounds { row: usize, col: usize, rows: usize, cols: usize },
    #[error("matrix is not invertible")]
    Singular,
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}
