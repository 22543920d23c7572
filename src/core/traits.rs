//! Core capability traits for adjview.
//!
//! A view works over any parent container that satisfies the required
//! capabilities (`VectorAccess` / `MatrixAccess`); the remaining traits are
//! optional and only enable extra behavior when the parent provides them.
//! The kernel traits at the bottom are the seams to the host numeric layer:
//! views and the operator layer dispatch into them with already-unwrapped
//! operands wherever unwrapping is safe.

use crate::core::scalar::Scalar;
use crate::error::ViewError;
use crate::layout::Layout;

/// Required: indexed read access to a 1-D container.
pub trait VectorAccess {
    /// Associated element type.
    type Elem: Scalar;
    /// Number of elements.
    fn len(&self) -> usize;
    /// Read element `i`, failing with `IndexOutOfRange` past the end.
    fn get(&self, i: usize) -> Result<Self::Elem, ViewError>;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Optional: indexed writes; absence makes views over the container read-only.
pub trait VectorWrite: VectorAccess {
    fn set(&mut self, i: usize, value: Self::Elem) -> Result<(), ViewError>;
}

/// Required: indexed read access to a 2-D container.
pub trait MatrixAccess {
    /// Associated element type.
    type Elem: Scalar;
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
    /// Read element `(i, j)`, failing with `IndexOutOfRange` off either axis.
    fn get(&self, i: usize, j: usize) -> Result<Self::Elem, ViewError>;
}

/// Optional: indexed writes into a 2-D container.
pub trait MatrixWrite: MatrixAccess {
    fn set(&mut self, i: usize, j: usize, value: Self::Elem) -> Result<(), ViewError>;
}

/// Optional: flat access to the underlying buffer for kernel fast paths.
///
/// Views forward this unchanged; they add no storage indirection of their own.
pub trait RawStorage {
    type Elem;
    fn raw_storage(&self) -> &[Self::Elem];
}

/// Optional: (row stride, column stride) of the underlying buffer.
pub trait StridePair {
    fn stride_pair(&self) -> (isize, isize);
}

/// Optional: memory-layout descriptor of the container.
pub trait LayoutQuery {
    fn layout(&self) -> Layout;
}

/// Optional: allocate a zeroed container of the same family.
pub trait Similar {
    fn similar(&self, len: usize) -> Self;
}

/// Optional: build a 1-D container from a fill function.
pub trait BuildVector: VectorAccess + Sized {
    fn from_fn(len: usize, f: impl FnMut(usize) -> Self::Elem) -> Self;
}

/// Optional: build a 2-D container from a fill function.
pub trait BuildMatrix: MatrixAccess + Sized {
    fn from_fn(nrows: usize, ncols: usize, f: impl FnMut(usize, usize) -> Self::Elem) -> Self;
}

/// Preferred traversal order reported by containers and views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IterOrder {
    /// Simple linear iteration is cheapest.
    Linear,
    /// Multi-index iteration is cheapest (axis swap defeats linear order).
    Indexed,
}

/// Matrix–vector product kernel: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}

/// Transposed product kernel: y ← Aᵀ x.
pub trait MatTransVec<V> {
    /// Compute y = Aᵀ · x.
    fn mattransvec(&self, x: &V, y: &mut V);
}

/// Conjugate-transposed product kernel: y ← Aᴴ x.
pub trait MatAdjVec<V> {
    /// Compute y = Aᴴ · x.
    fn matadjvec(&self, x: &V, y: &mut V);
}

/// Inner-product kernels.
pub trait VectorDot: VectorAccess {
    /// xᵀ y, no conjugation.
    fn dot(&self, other: &Self) -> Result<Self::Elem, ViewError>;
    /// xᴴ y, conjugating `self`.
    fn dotc(&self, other: &Self) -> Result<Self::Elem, ViewError>;
}

/// Which form of the coefficient matrix a direct solve runs against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trans {
    NoTrans,
    Trans,
    ConjTrans,
}

/// Direct linear-solve kernel: find x with op(A) x = b.
pub trait DirectSolve<V> {
    fn solve(&self, trans: Trans, b: &V) -> Result<V, ViewError>;
}
