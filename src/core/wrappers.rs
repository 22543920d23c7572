//! Capability impls for host containers.
//!
//! `Vec<T>` is the canonical column vector: it carries the full capability
//! set, including Rayon-parallel inner products when the `rayon` feature is
//! on. `faer::Mat` is wired in for real element types as an alternative dense
//! backend with a library LU behind [`DirectSolve`].

use num_traits::Zero;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::core::scalar::Scalar;
use crate::core::traits::{
    BuildMatrix, BuildVector, DirectSolve, LayoutQuery, MatAdjVec, MatTransVec, MatVec,
    MatrixAccess, MatrixWrite, RawStorage, Similar, StridePair, Trans, VectorAccess, VectorDot,
    VectorWrite,
};
use crate::error::ViewError;
use crate::layout::Layout;

// ============================================================================
// Vec<T>
// ============================================================================

impl<T: Scalar> VectorAccess for Vec<T> {
    type Elem = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, i: usize) -> Result<T, ViewError> {
        self.as_slice()
            .get(i)
            .copied()
            .ok_or(ViewError::IndexOutOfRange(i, Vec::len(self)))
    }
}

impl<T: Scalar> VectorWrite for Vec<T> {
    fn set(&mut self, i: usize, value: T) -> Result<(), ViewError> {
        let n = Vec::len(self);
        match self.as_mut_slice().get_mut(i) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ViewError::IndexOutOfRange(i, n)),
        }
    }
}

impl<T: Scalar> RawStorage for Vec<T> {
    type Elem = T;

    fn raw_storage(&self) -> &[T] {
        self
    }
}

impl<T: Scalar> LayoutQuery for Vec<T> {
    fn layout(&self) -> Layout {
        Layout::DenseColMajor
    }
}

impl<T: Scalar> Similar for Vec<T> {
    fn similar(&self, len: usize) -> Self {
        vec![T::zero(); len]
    }
}

impl<T: Scalar> BuildVector for Vec<T> {
    fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        (0..len).map(f).collect()
    }
}

impl<T: Scalar> VectorDot for Vec<T> {
    fn dot(&self, other: &Self) -> Result<T, ViewError> {
        if Vec::len(self) != Vec::len(other) {
            return Err(ViewError::InvalidOperandShape(
                "inner product over mismatched lengths",
            ));
        }

        #[cfg(feature = "rayon")]
        {
            Ok(self
                .par_iter()
                .zip(other.par_iter())
                .map(|(&a, &b)| a * b)
                .reduce(T::zero, |a, b| a + b))
        }

        #[cfg(not(feature = "rayon"))]
        {
            Ok(self
                .iter()
                .zip(other.iter())
                .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
        }
    }

    fn dotc(&self, other: &Self) -> Result<T, ViewError> {
        if Vec::len(self) != Vec::len(other) {
            return Err(ViewError::InvalidOperandShape(
                "inner product over mismatched lengths",
            ));
        }

        #[cfg(feature = "rayon")]
        {
            Ok(self
                .par_iter()
                .zip(other.par_iter())
                .map(|(&a, &b)| a.conj() * b)
                .reduce(T::zero, |a, b| a + b))
        }

        #[cfg(not(feature = "rayon"))]
        {
            Ok(self
                .iter()
                .zip(other.iter())
                .fold(T::zero(), |acc, (&a, &b)| acc + a.conj() * b))
        }
    }
}

// ============================================================================
// faer::Mat (real element types)
// ============================================================================

use faer::linalg::solvers::{FullPivLu, SolveCore};
use faer::traits::{ComplexField, RealField};
use faer::{Conj, Mat, MatMut};

impl<T> MatrixAccess for Mat<T>
where
    T: Scalar + num_traits::Float + ComplexField + RealField,
{
    type Elem = T;

    fn nrows(&self) -> usize {
        Mat::nrows(self)
    }

    fn ncols(&self) -> usize {
        Mat::ncols(self)
    }

    fn get(&self, i: usize, j: usize) -> Result<T, ViewError> {
        if i >= Mat::nrows(self) {
            return Err(ViewError::IndexOutOfRange(i, Mat::nrows(self)));
        }
        if j >= Mat::ncols(self) {
            return Err(ViewError::IndexOutOfRange(j, Mat::ncols(self)));
        }
        Ok(self[(i, j)])
    }
}

impl<T> MatrixWrite for Mat<T>
where
    T: Scalar + num_traits::Float + ComplexField + RealField,
{
    fn set(&mut self, i: usize, j: usize, value: T) -> Result<(), ViewError> {
        if i >= Mat::nrows(self) {
            return Err(ViewError::IndexOutOfRange(i, Mat::nrows(self)));
        }
        if j >= Mat::ncols(self) {
            return Err(ViewError::IndexOutOfRange(j, Mat::ncols(self)));
        }
        self[(i, j)] = value;
        Ok(())
    }
}

impl<T> LayoutQuery for Mat<T>
where
    T: Scalar + num_traits::Float + ComplexField + RealField,
{
    fn layout(&self) -> Layout {
        Layout::DenseColMajor
    }
}

impl<T> StridePair for Mat<T>
where
    T: Scalar + num_traits::Float + ComplexField + RealField,
{
    fn stride_pair(&self) -> (isize, isize) {
        let r = self.as_ref();
        (r.row_stride(), r.col_stride())
    }
}

impl<T> BuildMatrix for Mat<T>
where
    T: Scalar + num_traits::Float + ComplexField + RealField,
{
    fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        Mat::from_fn(nrows, ncols, |i, j| f(i, j))
    }
}

impl<T> MatVec<Vec<T>> for Mat<T>
where
    T: Scalar + num_traits::Float + ComplexField + RealField,
{
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(Mat::nrows(self), y.len(), "Output vector y has incorrect length");
        assert_eq!(Mat::ncols(self), x.len(), "Input vector x has incorrect length");
        for i in 0..Mat::nrows(self) {
            let mut acc = T::zero();
            for j in 0..Mat::ncols(self) {
                acc = acc + self[(i, j)] * x[j];
            }
            y[i] = acc;
        }
    }
}

impl<T> MatTransVec<Vec<T>> for Mat<T>
where
    T: Scalar + num_traits::Float + ComplexField + RealField,
{
    fn mattransvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(Mat::ncols(self), y.len(), "Output vector y has incorrect length");
        assert_eq!(Mat::nrows(self), x.len(), "Input vector x has incorrect length");
        for j in 0..Mat::ncols(self) {
            let mut acc = T::zero();
            for i in 0..Mat::nrows(self) {
                acc = acc + self[(i, j)] * x[i];
            }
            y[j] = acc;
        }
    }
}

/// Real elements, so the adjoint kernel is the transposed kernel.
impl<T> MatAdjVec<Vec<T>> for Mat<T>
where
    T: Scalar + num_traits::Float + ComplexField + RealField,
{
    fn matadjvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        self.mattransvec(x, y);
    }
}

impl<T> DirectSolve<Vec<T>> for Mat<T>
where
    T: Scalar + num_traits::Float + ComplexField + RealField,
{
    fn solve(&self, trans: Trans, b: &Vec<T>) -> Result<Vec<T>, ViewError> {
        let n = Mat::nrows(self);
        if n != Mat::ncols(self) {
            return Err(ViewError::InvalidOperandShape(
                "direct solve requires a square matrix",
            ));
        }
        if b.len() != n {
            return Err(ViewError::InvalidOperandShape(
                "right-hand side length does not match matrix order",
            ));
        }
        // ConjTrans coincides with Trans over real elements.
        let factor = match trans {
            Trans::NoTrans => FullPivLu::new(self.as_ref()),
            Trans::Trans | Trans::ConjTrans => FullPivLu::new(self.as_ref().transpose()),
        };
        let mut x = b.clone();
        let x_mat: MatMut<'_, T> = MatMut::from_column_major_slice_mut(&mut x, n, 1);
        factor.solve_in_place_with_conj(Conj::No, x_mat);
        Ok(x)
    }
}
