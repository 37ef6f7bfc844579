use std::ops::Index;

use crate::element::Element;

/// Non-owning view over caller-owned, contiguous, row-major matrix data.
///
/// The view borrows the data for its lifetime and never mutates or frees it.
/// Element `(r, c)` lives at flat offset `r * cols + c`.
///
/// Callers must not alias a view's buffer with the output buffer of a
/// multiplication; the kernel assumes the inputs are read-only and disjoint
/// from the freshly allocated output.
#[derive(Debug)]
pub struct MatRef<'a, T: Element> {
    data: &'a [T],
    rows: usize,
    cols: usize,
}

impl<'a, T: Element> Copy for MatRef<'a, T> {}

impl<'a, T: Element> Clone for MatRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: Element> MatRef<'a, T> {
    /// Create a view from a row-major slice.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    pub fn from_slice(data: &'a [T], rows: usize, cols: usize) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "data length {} does not match shape {}x{}",
            data.len(),
            rows,
            cols
        );
        MatRef { data, rows, cols }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The underlying row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data
    }

    /// Element at `(r, c)`.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> T {
        debug_assert!(r < self.rows, "row index {} out of bounds {}", r, self.rows);
        debug_assert!(c < self.cols, "col index {} out of bounds {}", c, self.cols);
        self.data[r * self.cols + c]
    }
}

/// Owned, contiguous, row-major matrix.
///
/// Produced by the kernel as the multiplication result; ownership of the
/// buffer moves to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Mat<T: Element> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Element> Mat<T> {
    /// Create a matrix from row-major data.
    ///
    /// # Panics
    /// Panics if `data.len() != rows * cols`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "data length {} does not match shape {}x{}",
            data.len(),
            rows,
            cols
        );
        Mat { data, rows, cols }
    }

    /// The `n`-by-`n` multiplicative identity.
    pub fn identity(n: usize) -> Self
    where
        T: From<i8>,
    {
        let mut data = vec![T::ZERO; n * n];
        for i in 0..n {
            data[i * n + i] = T::from(1);
        }
        Mat { data, rows: n, cols: n }
    }

    pub(crate) fn from_raw_parts(data: Vec<T>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Mat { data, rows, cols }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The underlying row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Element at `(r, c)`.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> T {
        self[(r, c)]
    }

    /// Borrow as a non-owning view.
    pub fn as_ref(&self) -> MatRef<'_, T> {
        MatRef::from_slice(&self.data, self.rows, self.cols)
    }

    /// Consume the matrix, returning the row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Element> Index<(usize, usize)> for Mat<T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        debug_assert!(r < self.rows, "row index {} out of bounds {}", r, self.rows);
        debug_assert!(c < self.cols, "col index {} out of bounds {}", c, self.cols);
        &self.data[r * self.cols + c]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat_ref_basic() {
        let data = [1i32, 2, 3, 4, 5, 6];
        let m = MatRef::from_slice(&data, 2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.get(0, 0), 1);
        assert_eq!(m.get(1, 2), 6);
        assert_eq!(m.as_slice(), &data);
    }

    #[test]
    #[should_panic]
    fn test_mat_ref_length_mismatch_panics() {
        let data = [1.0f32, 2.0, 3.0];
        let _ = MatRef::from_slice(&data, 2, 2);
    }

    #[test]
    fn test_mat_ref_empty() {
        let data: [f32; 0] = [];
        let m = MatRef::from_slice(&data, 0, 5);
        assert_eq!(m.rows(), 0);
        assert_eq!(m.cols(), 5);
    }

    #[test]
    fn test_mat_from_vec_and_index() {
        let m = Mat::from_vec(vec![1i32, 2, 3, 4], 2, 2);
        assert_eq!(m[(0, 1)], 2);
        assert_eq!(m[(1, 0)], 3);
        assert_eq!(m.into_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_identity() {
        let id = Mat::<i32>::identity(3);
        assert_eq!(id.as_slice(), &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_as_ref_round_trip() {
        let m = Mat::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], 2, 2);
        let r = m.as_ref();
        assert_eq!(r.get(1, 1), 4.0);
    }
}
