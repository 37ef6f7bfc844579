use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatmulError {
    #[error("input has {ndim} dimensions, expected 2")]
    InvalidDimensionality { ndim: usize },
    #[error("incompatible shapes: [{a_rows}x{a_cols}] @ [{b_rows}x{b_cols}]")]
    IncompatibleShape {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
    },
    #[error("failed to allocate {rows}x{cols} output buffer")]
    AllocationFailure { rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, MatmulError>;
