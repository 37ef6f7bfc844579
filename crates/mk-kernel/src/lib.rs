//! `mk-kernel` - Zero-copy dense matrix multiplication for mk.
//!
//! This crate provides:
//! - A `MatRef` view over caller-owned, contiguous, row-major buffers
//! - An owned `Mat` result type whose buffer transfers to the caller
//! - A generic `multiply` kernel over a closed element set (i32, f32)
//! - An error taxonomy shared with the FFI boundary
//!
//! The kernel is stateless and reentrant. It never mutates its inputs,
//! retains no reference to them after returning, and initializes every
//! output element before handing the buffer back. Logging goes through the
//! `log` facade; the library installs no logger of its own.

pub mod element;
pub mod error;
pub mod kernel;
pub mod mat;

// Re-export primary types at the crate root for convenience.
pub use element::{DType, Element};
pub use error::{MatmulError, Result};
pub use kernel::multiply;
pub use mat::{Mat, MatRef};

/// `multiply` instantiated for 32-bit signed integers.
pub fn multiply_i32(a: MatRef<'_, i32>, b: MatRef<'_, i32>) -> Result<Mat<i32>> {
    multiply(a, b)
}

/// `multiply` instantiated for 32-bit floats.
pub fn multiply_f32(a: MatRef<'_, f32>, b: MatRef<'_, f32>) -> Result<Mat<f32>> {
    multiply(a, b)
}
