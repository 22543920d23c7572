//! Compressed sparse row matrix.
//!
//! `CsrMatrix` implements only the required read capability plus the product
//! kernels. It deliberately has no raw storage, stride, or builder impls, so
//! views over it exercise the degraded paths: `Layout::Unknown`, indexed
//! element reads, no flat-buffer fast path.

use num_traits::Zero;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::core::scalar::Scalar;
use crate::core::traits::{LayoutQuery, MatAdjVec, MatTransVec, MatVec, MatrixAccess};
use crate::error::ViewError;
use crate::layout::Layout;

/// Sparse matrix in CSR format.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix<T> {
    nrows: usize,
    ncols: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar> CsrMatrix<T> {
    /// Construct from raw CSR arrays.
    pub fn from_csr(
        nrows: usize,
        ncols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(row_ptr.len(), nrows + 1, "row_ptr must have nrows + 1 entries");
        assert_eq!(col_idx.len(), values.len(), "col_idx and values must match");
        assert!(col_idx.iter().all(|&j| j < ncols), "column index out of range");
        Self {
            nrows,
            ncols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    fn row_range(&self, i: usize) -> std::ops::Range<usize> {
        self.row_ptr[i]..self.row_ptr[i + 1]
    }
}

impl<T: Scalar> MatrixAccess for CsrMatrix<T> {
    type Elem = T;

    fn nrows(&self) -> usize {
        self.nrows
    }

    fn ncols(&self) -> usize {
        self.ncols
    }

    fn get(&self, i: usize, j: usize) -> Result<T, ViewError> {
        if i >= self.nrows {
            return Err(ViewError::IndexOutOfRange(i, self.nrows));
        }
        if j >= self.ncols {
            return Err(ViewError::IndexOutOfRange(j, self.ncols));
        }
        for k in self.row_range(i) {
            if self.col_idx[k] == j {
                return Ok(self.values[k]);
            }
        }
        Ok(T::zero())
    }
}

impl<T: Scalar> LayoutQuery for CsrMatrix<T> {
    fn layout(&self) -> Layout {
        Layout::Unknown
    }
}

impl<T: Scalar> MatVec<Vec<T>> for CsrMatrix<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.nrows, y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols, x.len(), "Input vector x has incorrect length");

        #[cfg(feature = "rayon")]
        {
            y.par_iter_mut().enumerate().for_each(|(i, yi)| {
                let mut acc = T::zero();
                for k in self.row_range(i) {
                    acc = acc + self.values[k] * x[self.col_idx[k]];
                }
                *yi = acc;
            });
        }

        #[cfg(not(feature = "rayon"))]
        {
            for i in 0..self.nrows {
                let mut acc = T::zero();
                for k in self.row_range(i) {
                    acc = acc + self.values[k] * x[self.col_idx[k]];
                }
                y[i] = acc;
            }
        }
    }
}

impl<T: Scalar> MatTransVec<Vec<T>> for CsrMatrix<T> {
    /// y = Aᵀ x as a scatter over the rows; serial, since parallel scatter
    /// would race on y.
    fn mattransvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.ncols, y.len(), "Output vector y has incorrect length");
        assert_eq!(self.nrows, x.len(), "Input vector x has incorrect length");
        for yj in y.iter_mut() {
            *yj = T::zero();
        }
        for i in 0..self.nrows {
            let xi = x[i];
            for k in self.row_range(i) {
                y[self.col_idx[k]] = y[self.col_idx[k]] + self.values[k] * xi;
            }
        }
    }
}

impl<T: Scalar> MatAdjVec<Vec<T>> for CsrMatrix<T> {
    fn matadjvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.ncols, y.len(), "Output vector y has incorrect length");
        assert_eq!(self.nrows, x.len(), "Input vector x has incorrect length");
        for yj in y.iter_mut() {
            *yj = T::zero();
        }
        for i in 0..self.nrows {
            let xi = x[i];
            for k in self.row_range(i) {
                y[self.col_idx[k]] = y[self.col_idx[k]] + self.values[k].conj() * xi;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn sample() -> CsrMatrix<f64> {
        // [[1, 0, 2],
        //  [0, 3, 0]]
        CsrMatrix::from_csr(2, 3, vec![0, 2, 3], vec![0, 2, 1], vec![1.0, 2.0, 3.0])
    }

    #[test]
    fn get_reads_stored_and_implicit_zeros() {
        let a = sample();
        assert_eq!(a.get(0, 0).unwrap(), 1.0);
        assert_eq!(a.get(0, 1).unwrap(), 0.0);
        assert_eq!(a.get(0, 2).unwrap(), 2.0);
        assert_eq!(a.get(1, 1).unwrap(), 3.0);
        assert!(matches!(a.get(2, 0), Err(ViewError::IndexOutOfRange(2, 2))));
        assert!(matches!(a.get(0, 3), Err(ViewError::IndexOutOfRange(3, 3))));
    }

    #[test]
    fn spmv_matches_dense_arithmetic() {
        let a = sample();
        let x = vec![1.0, 2.0, 3.0];
        let mut y = vec![0.0; 2];
        a.matvec(&x, &mut y);
        assert_eq!(y, vec![7.0, 6.0]);
    }

    #[test]
    fn transposed_spmv_scatters_into_columns() {
        let a = sample();
        let x = vec![1.0, 2.0];
        let mut y = vec![0.0; 3];
        a.mattransvec(&x, &mut y);
        assert_eq!(y, vec![1.0, 6.0, 2.0]);
    }

    #[test]
    fn adjoint_spmv_conjugates_entries() {
        let i = Complex64::new(0.0, 1.0);
        let a = CsrMatrix::from_csr(1, 2, vec![0, 2], vec![0, 1], vec![i, Complex64::new(2.0, 0.0)]);
        let x = vec![Complex64::new(1.0, 0.0)];
        let mut y = vec![Complex64::zero(); 2];
        a.matadjvec(&x, &mut y);
        assert_eq!(y[0], -i);
        assert_eq!(y[1], Complex64::new(2.0, 0.0));
    }

    #[test]
    fn layout_is_unknown() {
        assert_eq!(sample().layout(), Layout::Unknown);
    }
}
