use log::debug;

use crate::element::Element;
use crate::error::{MatmulError, Result};
use crate::mat::{Mat, MatRef};

/// Matrix multiplication: Z = A @ B.
///
/// `a` is `[n_row, n_inner]`, `b` is `[n_inner, n_col]`; the result is a
/// freshly allocated `[n_row, n_col]` matrix with
/// `Z[r][c] = sum_i A[r][i] * B[i][c]`.
///
/// The inner sum accumulates strictly in order `i = 0..n_inner`. For f32
/// this fixes the rounding of every partial sum, so identical inputs give
/// bit-identical output across calls. For i32 the arithmetic wraps on
/// overflow.
///
/// Shape validation happens before the output is allocated; an incompatible
/// pair never allocates. Zero-sized extents are legal and produce a
/// correctly shaped result.
pub fn multiply<T: Element>(a: MatRef<T>, b: MatRef<T>) -> Result<Mat<T>> {
    debug!(
        "matmul {}: [{}x{}] @ [{}x{}]",
        T::DTYPE,
        a.rows(),
        a.cols(),
        b.rows(),
        b.cols()
    );

    if a.cols() != b.rows() {
        return Err(MatmulError::IncompatibleShape {
            a_rows: a.rows(),
            a_cols: a.cols(),
            b_rows: b.rows(),
            b_cols: b.cols(),
        });
    }

    let n_row = a.rows();
    let n_inner = a.cols();
    let n_col = b.cols();

    let n_out = n_row
        .checked_mul(n_col)
        .ok_or(MatmulError::AllocationFailure {
            rows: n_row,
            cols: n_col,
        })?;
    let mut out: Vec<T> = Vec::new();
    out.try_reserve_exact(n_out)
        .map_err(|_| MatmulError::AllocationFailure {
            rows: n_row,
            cols: n_col,
        })?;

    let pa = a.as_slice();
    let pb = b.as_slice();

    // A is walked with unit stride across the inner loop and B with stride
    // n_col; each output column restarts the A cursor from the row's base
    // offset, which advances by n_inner once per output row.
    let mut ai_base = 0;
    for _r in 0..n_row {
        for c in 0..n_col {
            let mut ai = ai_base;
            let mut bi = c;
            let mut acc = T::ZERO;
            for _i in 0..n_inner {
                acc = T::mul_add_acc(acc, pa[ai], pb[bi]);
                ai += 1;
                bi += n_col;
            }
            out.push(acc);
        }
        ai_base += n_inner;
    }

    Ok(Mat::from_raw_parts(out, n_row, n_col))
}
