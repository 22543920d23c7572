//! Owned column-major dense matrix.
//!
//! `DenseMat` is the reference container for the view layer: it implements
//! the full capability set, including the optional ones, over any [`Scalar`]
//! element type (real or complex), so wrapped views over it take every fast
//! path. The direct solve is a partial-pivot LU; rank-deficient systems fail
//! with `ZeroPivot`.

use num_traits::Zero;

use crate::core::scalar::Scalar;
use crate::core::traits::{
    BuildMatrix, DirectSolve, LayoutQuery, MatAdjVec, MatTransVec, MatVec, MatrixAccess,
    MatrixWrite, RawStorage, StridePair, Trans,
};
use crate::error::ViewError;
use crate::layout::Layout;

/// Dense matrix with column-major storage.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMat<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

impl<T: Scalar> DenseMat<T> {
    /// Construct from raw column-major storage.
    pub fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(data.len(), nrows * ncols, "storage length must be nrows * ncols");
        Self { nrows, ncols, data }
    }

    /// Zero-filled matrix.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_raw(nrows, ncols, vec![T::zero(); nrows * ncols])
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        j * self.nrows + i
    }

    fn check(&self, i: usize, j: usize) -> Result<(), ViewError> {
        if i >= self.nrows {
            return Err(ViewError::IndexOutOfRange(i, self.nrows));
        }
        if j >= self.ncols {
            return Err(ViewError::IndexOutOfRange(j, self.ncols));
        }
        Ok(())
    }

    /// Working copy of op(A) in column-major order.
    fn op_copy(&self, trans: Trans) -> Vec<T> {
        let n = self.nrows;
        match trans {
            Trans::NoTrans => self.data.clone(),
            Trans::Trans => {
                let mut out = vec![T::zero(); self.data.len()];
                for j in 0..self.ncols {
                    for i in 0..n {
                        out[i * self.ncols + j] = self.data[self.idx(i, j)];
                    }
                }
                out
            }
            Trans::ConjTrans => {
                let mut out = vec![T::zero(); self.data.len()];
                for j in 0..self.ncols {
                    for i in 0..n {
                        out[i * self.ncols + j] = self.data[self.idx(i, j)].conj();
                    }
                }
                out
            }
        }
    }
}

impl<T: Scalar> MatrixAccess for DenseMat<T> {
    type Elem = T;

    fn nrows(&self) -> usize {
        self.nrows
    }

    fn ncols(&self) -> usize {
        self.ncols
    }

    fn get(&self, i: usize, j: usize) -> Result<T, ViewError> {
        self.check(i, j)?;
        Ok(self.data[self.idx(i, j)])
    }
}

impl<T: Scalar> MatrixWrite for DenseMat<T> {
    fn set(&mut self, i: usize, j: usize, value: T) -> Result<(), ViewError> {
        self.check(i, j)?;
        let k = self.idx(i, j);
        self.data[k] = value;
        Ok(())
    }
}

impl<T: Scalar> RawStorage for DenseMat<T> {
    type Elem = T;

    fn raw_storage(&self) -> &[T] {
        &self.data
    }
}

impl<T: Scalar> StridePair for DenseMat<T> {
    fn stride_pair(&self) -> (isize, isize) {
        (1, self.nrows as isize)
    }
}

impl<T: Scalar> LayoutQuery for DenseMat<T> {
    fn layout(&self) -> Layout {
        Layout::DenseColMajor
    }
}

impl<T: Scalar> BuildMatrix for DenseMat<T> {
    fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for j in 0..ncols {
            for i in 0..nrows {
                data.push(f(i, j));
            }
        }
        Self { nrows, ncols, data }
    }
}

impl<T: Scalar> MatVec<Vec<T>> for DenseMat<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.nrows, y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols, x.len(), "Input vector x has incorrect length");
        for i in 0..self.nrows {
            let mut acc = T::zero();
            for j in 0..self.ncols {
                acc = acc + self.data[self.idx(i, j)] * x[j];
            }
            y[i] = acc;
        }
    }
}

impl<T: Scalar> MatTransVec<Vec<T>> for DenseMat<T> {
    fn mattransvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.ncols, y.len(), "Output vector y has incorrect length");
        assert_eq!(self.nrows, x.len(), "Input vector x has incorrect length");
        for j in 0..self.ncols {
            let mut acc = T::zero();
            for i in 0..self.nrows {
                acc = acc + self.data[self.idx(i, j)] * x[i];
            }
            y[j] = acc;
        }
    }
}

impl<T: Scalar> MatAdjVec<Vec<T>> for DenseMat<T> {
    fn matadjvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.ncols, y.len(), "Output vector y has incorrect length");
        assert_eq!(self.nrows, x.len(), "Input vector x has incorrect length");
        for j in 0..self.ncols {
            let mut acc = T::zero();
            for i in 0..self.nrows {
                acc = acc + self.data[self.idx(i, j)].conj() * x[i];
            }
            y[j] = acc;
        }
    }
}

impl<T: Scalar> DirectSolve<Vec<T>> for DenseMat<T> {
    /// Solve op(A) x = b by LU with partial pivoting (pivot by |·|²).
    fn solve(&self, trans: Trans, b: &Vec<T>) -> Result<Vec<T>, ViewError> {
        if self.nrows != self.ncols {
            return Err(ViewError::InvalidOperandShape(
                "direct solve requires a square matrix",
            ));
        }
        let n = self.nrows;
        if b.len() != n {
            return Err(ViewError::InvalidOperandShape(
                "right-hand side length does not match matrix order",
            ));
        }

        let mut m = self.op_copy(trans);
        let mut x = b.clone();
        let at = |i: usize, j: usize| j * n + i;

        for k in 0..n {
            let mut p = k;
            let mut best = m[at(k, k)].abs_sq();
            for i in (k + 1)..n {
                let cand = m[at(i, k)].abs_sq();
                if cand > best {
                    best = cand;
                    p = i;
                }
            }
            if best.is_zero() {
                return Err(ViewError::ZeroPivot(k));
            }
            if p != k {
                for j in 0..n {
                    m.swap(at(p, j), at(k, j));
                }
                x.swap(p, k);
            }
            let pivot = m[at(k, k)];
            for i in (k + 1)..n {
                let factor = m[at(i, k)] / pivot;
                for j in (k + 1)..n {
                    m[at(i, j)] = m[at(i, j)] - factor * m[at(k, j)];
                }
                x[i] = x[i] - factor * x[k];
            }
        }

        for k in (0..n).rev() {
            let mut acc = x[k];
            for j in (k + 1)..n {
                acc = acc - m[at(k, j)] * x[j];
            }
            x[k] = acc / m[at(k, k)];
        }
        Ok(x)
    }
}
