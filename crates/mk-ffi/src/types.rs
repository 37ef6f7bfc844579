use mk_kernel::Mat;

/// Status codes returned by all FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MkStatus {
    Ok = 0,
    ErrorInvalidArgument = 1,
    ErrorInvalidDimensionality = 2,
    ErrorIncompatibleShape = 3,
    ErrorOutOfMemory = 4,
    ErrorInternal = 5,
}

/// Borrowed int32 array descriptor supplied by the host.
///
/// `shape` points to `ndim` extents; `data` points to the row-major
/// elements (it may be null when the array is empty). The memory stays
/// owned by the host and is only read for the duration of a call.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MkArrayI32 {
    pub data: *const i32,
    pub ndim: u64,
    pub shape: *const u64,
}

/// Borrowed float32 array descriptor supplied by the host.
///
/// Same conventions as [`MkArrayI32`].
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MkArrayF32 {
    pub data: *const f32,
    pub ndim: u64,
    pub shape: *const u64,
}

/// Owned int32 result matrix, opaque to the host.
///
/// Returned by `mk_matmul_i32`; inspected through the `mk_mat_i32_*`
/// accessors and released with `mk_mat_i32_free`.
pub struct MkMatI32 {
    pub(crate) inner: Mat<i32>,
}

/// Owned float32 result matrix, opaque to the host.
///
/// Returned by `mk_matmul_f32`; inspected through the `mk_mat_f32_*`
/// accessors and released with `mk_mat_f32_free`.
pub struct MkMatF32 {
    pub(crate) inner: Mat<f32>,
}
