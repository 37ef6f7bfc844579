use std::fmt;

/// Runtime tag for the supported element types.
///
/// Only used at the FFI boundary to describe buffers; the kernel itself is
/// generic over [`Element`] and never branches on this at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit signed integer.
    I32,
    /// 32-bit floating point.
    F32,
}

impl DType {
    /// Size in bytes of a single element.
    pub fn size_in_bytes(&self) -> usize {
        match self {
            DType::I32 => 4,
            DType::F32 => 4,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::I32 => write!(f, "i32"),
            DType::F32 => write!(f, "f32"),
        }
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for f32 {}
}

/// Element types the kernel can multiply.
///
/// The trait is sealed: the supported set is exactly `i32` and `f32`, and
/// each gets its own monomorphized kernel rather than a runtime dispatch.
pub trait Element: sealed::Sealed + Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    const ZERO: Self;
    const DTYPE: DType;

    /// One multiply-accumulate step: `acc + a * b` in the type's native
    /// arithmetic.
    fn mul_add_acc(acc: Self, a: Self, b: Self) -> Self;
}

impl Element for i32 {
    const ZERO: Self = 0;
    const DTYPE: DType = DType::I32;

    #[inline(always)]
    fn mul_add_acc(acc: Self, a: Self, b: Self) -> Self {
        // Two's-complement wraparound, matching native int32 overflow.
        acc.wrapping_add(a.wrapping_mul(b))
    }
}

impl Element for f32 {
    const ZERO: Self = 0.0;
    const DTYPE: DType = DType::F32;

    #[inline(always)]
    fn mul_add_acc(acc: Self, a: Self, b: Self) -> Self {
        // Separate multiply then add. `f32::mul_add` rounds once instead of
        // twice and would change the bit pattern of the accumulation.
        acc + a * b
    }
}
