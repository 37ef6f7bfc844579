mod error;
mod types;

pub use error::*;
pub use types::*;

use std::os::raw::c_char;

use mk_kernel::{Element, Mat, MatmulError, MatRef};

/// Execute a closure that returns an `MkStatus`, catching any panics
/// and converting them into `MkStatus::ErrorInternal`.
fn catch_panic<F: FnOnce() -> MkStatus + std::panic::UnwindSafe>(f: F) -> MkStatus {
    match std::panic::catch_unwind(f) {
        Ok(status) => status,
        Err(_) => {
            set_last_error("internal panic".to_string());
            MkStatus::ErrorInternal
        }
    }
}

/// Build a borrowed kernel view from a host array descriptor.
///
/// The boundary owns rank checking: anything that is not 2-D is rejected
/// here with `ErrorInvalidDimensionality` and the kernel is never invoked.
///
/// # Safety
/// `shape` must point to `ndim` readable extents and `data` to
/// `shape[0] * shape[1]` readable elements that outlive the returned view.
unsafe fn view_from_raw<'a, T: Element>(
    data: *const T,
    ndim: u64,
    shape: *const u64,
) -> Result<MatRef<'a, T>, MkStatus> {
    if shape.is_null() {
        set_last_error("shape pointer is null".to_string());
        return Err(MkStatus::ErrorInvalidArgument);
    }
    if ndim != 2 {
        set_last_error(
            MatmulError::InvalidDimensionality {
                ndim: ndim as usize,
            }
            .to_string(),
        );
        return Err(MkStatus::ErrorInvalidDimensionality);
    }

    let rows = *shape as usize;
    let cols = *shape.add(1) as usize;
    let len = match rows.checked_mul(cols) {
        Some(len) => len,
        None => {
            set_last_error(format!("shape {}x{} overflows usize", rows, cols));
            return Err(MkStatus::ErrorInvalidArgument);
        }
    };

    let slice: &[T] = if len == 0 {
        &[]
    } else {
        if data.is_null() {
            set_last_error("data pointer is null".to_string());
            return Err(MkStatus::ErrorInvalidArgument);
        }
        std::slice::from_raw_parts(data, len)
    };
    Ok(MatRef::from_slice(slice, rows, cols))
}

/// Map a kernel error to its status code.
fn status_for(err: &MatmulError) -> MkStatus {
    match err {
        MatmulError::InvalidDimensionality { .. } => MkStatus::ErrorInvalidDimensionality,
        MatmulError::IncompatibleShape { .. } => MkStatus::ErrorIncompatibleShape,
        MatmulError::AllocationFailure { .. } => MkStatus::ErrorOutOfMemory,
    }
}

/// Multiply two borrowed views and box the owned result out to the host.
unsafe fn matmul_out<T, M>(
    a: MatRef<'_, T>,
    b: MatRef<'_, T>,
    wrap: impl FnOnce(Mat<T>) -> M,
    out: *mut *mut M,
) -> MkStatus
where
    T: Element,
{
    match mk_kernel::multiply(a, b) {
        Ok(z) => {
            *out = Box::into_raw(Box::new(wrap(z)));
            MkStatus::Ok
        }
        Err(e) => {
            let status = status_for(&e);
            set_last_error(e.to_string());
            status
        }
    }
}

/// Multiply two int32 matrices: Z = A @ B.
///
/// On success, writes a heap-allocated `MkMatI32` pointer into `*out` and
/// returns `MkStatus::Ok`. The caller owns the result and must later call
/// `mk_mat_i32_free`. On error, `*out` is untouched and `mk_last_error`
/// describes the failure.
#[no_mangle]
pub unsafe extern "C" fn mk_matmul_i32(
    a: MkArrayI32,
    b: MkArrayI32,
    out: *mut *mut MkMatI32,
) -> MkStatus {
    catch_panic(|| {
        if out.is_null() {
            set_last_error("out is null".to_string());
            return MkStatus::ErrorInvalidArgument;
        }
        let av = match unsafe { view_from_raw(a.data, a.ndim, a.shape) } {
            Ok(v) => v,
            Err(status) => return status,
        };
        let bv = match unsafe { view_from_raw(b.data, b.ndim, b.shape) } {
            Ok(v) => v,
            Err(status) => return status,
        };
        unsafe { matmul_out(av, bv, |inner| MkMatI32 { inner }, out) }
    })
}

/// Multiply two float32 matrices: Z = A @ B.
///
/// Same contract as `mk_matmul_i32`, with `mk_mat_f32_free` as the
/// destructor for the result.
#[no_mangle]
pub unsafe extern "C" fn mk_matmul_f32(
    a: MkArrayF32,
    b: MkArrayF32,
    out: *mut *mut MkMatF32,
) -> MkStatus {
    catch_panic(|| {
        if out.is_null() {
            set_last_error("out is null".to_string());
            return MkStatus::ErrorInvalidArgument;
        }
        let av = match unsafe { view_from_raw(a.data, a.ndim, a.shape) } {
            Ok(v) => v,
            Err(status) => return status,
        };
        let bv = match unsafe { view_from_raw(b.data, b.ndim, b.shape) } {
            Ok(v) => v,
            Err(status) => return status,
        };
        unsafe { matmul_out(av, bv, |inner| MkMatF32 { inner }, out) }
    })
}

/// Number of rows of a result matrix. Null yields 0.
#[no_mangle]
pub unsafe extern "C" fn mk_mat_i32_rows(m: *const MkMatI32) -> u64 {
    if m.is_null() {
        return 0;
    }
    (*m).inner.rows() as u64
}

/// Number of columns of a result matrix. Null yields 0.
#[no_mangle]
pub unsafe extern "C" fn mk_mat_i32_cols(m: *const MkMatI32) -> u64 {
    if m.is_null() {
        return 0;
    }
    (*m).inner.cols() as u64
}

/// Pointer to the row-major data of a result matrix.
///
/// Valid until the matrix is freed. Null input yields null.
#[no_mangle]
pub unsafe extern "C" fn mk_mat_i32_data(m: *const MkMatI32) -> *const i32 {
    if m.is_null() {
        return std::ptr::null();
    }
    (*m).inner.as_slice().as_ptr()
}

/// Free a matrix returned by `mk_matmul_i32`.
///
/// Passing a null pointer is a no-op.
#[no_mangle]
pub unsafe extern "C" fn mk_mat_i32_free(m: *mut MkMatI32) {
    if !m.is_null() {
        drop(Box::from_raw(m));
    }
}

/// Number of rows of a result matrix. Null yields 0.
#[no_mangle]
pub unsafe extern "C" fn mk_mat_f32_rows(m: *const MkMatF32) -> u64 {
    if m.is_null() {
        return 0;
    }
    (*m).inner.rows() as u64
}

/// Number of columns of a result matrix. Null yields 0.
#[no_mangle]
pub unsafe extern "C" fn mk_mat_f32_cols(m: *const MkMatF32) -> u64 {
    if m.is_null() {
        return 0;
    }
    (*m).inner.cols() as u64
}

/// Pointer to the row-major data of a result matrix.
///
/// Valid until the matrix is freed. Null input yields null.
#[no_mangle]
pub unsafe extern "C" fn mk_mat_f32_data(m: *const MkMatF32) -> *const f32 {
    if m.is_null() {
        return std::ptr::null();
    }
    (*m).inner.as_slice().as_ptr()
}

/// Free a matrix returned by `mk_matmul_f32`.
///
/// Passing a null pointer is a no-op.
#[no_mangle]
pub unsafe extern "C" fn mk_mat_f32_free(m: *mut MkMatF32) {
    if !m.is_null() {
        drop(Box::from_raw(m));
    }
}

/// Retrieve the last error message.
///
/// Returns a pointer to a C string describing the most recent error, or
/// null if no error has occurred. The caller must free the returned string
/// with `mk_free_string`.
#[no_mangle]
pub extern "C" fn mk_last_error() -> *const c_char {
    match take_last_error() {
        Some(e) => e.into_raw(),
        None => std::ptr::null(),
    }
}

/// Free a string previously returned by `mk_last_error`.
#[no_mangle]
pub unsafe extern "C" fn mk_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(std::ffi::CString::from_raw(s));
    }
}
