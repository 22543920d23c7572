//! Lazy transpose and conjugate-transpose views.
//!
//! A view borrows a parent container and forwards every operation to it after
//! an index swap and an element transform; it owns no storage of its own.
//! Mutation goes through the exclusive `*Mut` variants, so aliasing follows
//! ordinary borrow rules: writes through a view land in the parent and are
//! visible to every later reader.
//!
//! Wrapping is involutive: applying the matching kind to an existing view
//! yields the parent reference itself (see [`RowView::unwrap`]), never a new
//! allocation. For real element types the two kinds coincide, because
//! conjugation collapses to the identity.

use crate::core::scalar::{Scalar, ScalarKind};
use crate::core::traits::{
    BuildMatrix, IterOrder, LayoutQuery, MatAdjVec, MatTransVec, MatVec, MatrixAccess,
    MatrixWrite, RawStorage, Similar, StridePair, VectorAccess, VectorWrite,
};
use crate::error::ViewError;
use crate::layout::{adjoint_layout, transpose_layout, Layout};

pub mod rowvec;
pub use rowvec::{hcat, map_row, zip_map_rows, RowCat};

/// The two wrapper kinds: axis swap only, or axis swap plus conjugation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapKind {
    Transpose,
    ConjugateTranspose,
}

impl WrapKind {
    /// Transform an element read through a wrapper of this kind.
    #[inline]
    pub fn apply<T: Scalar>(self, value: T) -> T {
        match self {
            WrapKind::Transpose => value,
            WrapKind::ConjugateTranspose => value.conj(),
        }
    }

    /// Inverse transform for writes. Conjugation is self-inverse, so this is
    /// the same map as [`WrapKind::apply`].
    #[inline]
    pub fn apply_inv<T: Scalar>(self, value: T) -> T {
        self.apply(value)
    }

    /// Layout of a wrapper of this kind over a parent with layout `parent`.
    pub fn layout_of<T: Scalar>(self, parent: Layout) -> Layout {
        match self {
            WrapKind::Transpose => transpose_layout(parent),
            WrapKind::ConjugateTranspose => adjoint_layout(T::KIND, parent),
        }
    }
}

fn check_elem_kind<T: Scalar>(declared: ScalarKind) -> Result<(), ViewError> {
    // Conjugation maps an element type to itself, so the derived element kind
    // of any wrapper equals the parent's.
    let derived = T::KIND;
    if declared != derived {
        return Err(ViewError::ElementTypeMismatch(declared, derived));
    }
    Ok(())
}

fn mixed_kinds() -> ViewError {
    ViewError::Unsupported("mixed transpose/adjoint nesting over complex elements")
}

// ============================================================================
// RowView: wrapped 1-D container, logical shape (1, n)
// ============================================================================

/// Shared view of a vector as a logical row.
#[derive(Debug)]
pub struct RowView<'a, V> {
    parent: &'a V,
    kind: WrapKind,
}

impl<V> Clone for RowView<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for RowView<'_, V> {}

impl<'a, V: VectorAccess> RowView<'a, V> {
    pub fn new(kind: WrapKind, parent: &'a V) -> Self {
        Self { parent, kind }
    }

    /// Construct with an explicitly declared element kind, failing with
    /// `ElementTypeMismatch` if it disagrees with the derived one.
    pub fn with_elem_kind(
        kind: WrapKind,
        parent: &'a V,
        declared: ScalarKind,
    ) -> Result<Self, ViewError> {
        check_elem_kind::<V::Elem>(declared)?;
        Ok(Self::new(kind, parent))
    }

    #[inline]
    pub fn kind(&self) -> WrapKind {
        self.kind
    }

    #[inline]
    pub fn parent(&self) -> &'a V {
        self.parent
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Logical shape: one row of the parent's length.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (1, self.parent.len())
    }

    /// Read element `i` with the wrapper transform applied.
    pub fn get(&self, i: usize) -> Result<V::Elem, ViewError> {
        self.parent.get(i).map(|v| self.kind.apply(v))
    }

    /// Transpose/adjoint of this already-wrapped row.
    ///
    /// A matching kind, or any kind over real elements, strips the wrapper
    /// and yields the parent reference. Mismatched kinds over complex
    /// elements have no lazy representation here and are unsupported.
    pub fn unwrap(&self, kind: WrapKind) -> Result<&'a V, ViewError> {
        if kind == self.kind || V::Elem::KIND == ScalarKind::Real {
            Ok(self.parent)
        } else {
            Err(mixed_kinds())
        }
    }

    /// Row views iterate cheapest in linear order.
    #[inline]
    pub fn preferred_iter(&self) -> IterOrder {
        IterOrder::Linear
    }

    /// Allocate a fresh same-kind row over a zeroed parent-like buffer.
    pub fn similar(&self) -> OwnedRow<V>
    where
        V: Similar,
    {
        OwnedRow::new(self.kind, self.parent.similar(self.parent.len()))
    }
}

impl<V: VectorAccess> VectorAccess for RowView<'_, V> {
    type Elem = V::Elem;

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn get(&self, i: usize) -> Result<Self::Elem, ViewError> {
        RowView::get(self, i)
    }
}

/// A wrapped vector is also a 1×n matrix.
impl<V: VectorAccess> MatrixAccess for RowView<'_, V> {
    type Elem = V::Elem;

    fn nrows(&self) -> usize {
        1
    }

    fn ncols(&self) -> usize {
        self.parent.len()
    }

    fn get(&self, i: usize, j: usize) -> Result<Self::Elem, ViewError> {
        if i != 0 {
            return Err(ViewError::IndexOutOfRange(i, 1));
        }
        RowView::get(self, j)
    }
}

impl<V: RawStorage> RawStorage for RowView<'_, V> {
    type Elem = V::Elem;

    fn raw_storage(&self) -> &[Self::Elem] {
        self.parent.raw_storage()
    }
}

impl<V: VectorAccess + LayoutQuery> LayoutQuery for RowView<'_, V> {
    fn layout(&self) -> Layout {
        self.kind.layout_of::<V::Elem>(self.parent.layout())
    }
}

// ============================================================================
// RowViewMut
// ============================================================================

/// Exclusive view of a vector as a logical row; writes go to the parent.
pub struct RowViewMut<'a, V> {
    parent: &'a mut V,
    kind: WrapKind,
}

impl<'a, V: VectorAccess> RowViewMut<'a, V> {
    pub fn new(kind: WrapKind, parent: &'a mut V) -> Self {
        Self { parent, kind }
    }

    pub fn with_elem_kind(
        kind: WrapKind,
        parent: &'a mut V,
        declared: ScalarKind,
    ) -> Result<Self, ViewError> {
        check_elem_kind::<V::Elem>(declared)?;
        Ok(Self::new(kind, parent))
    }

    #[inline]
    pub fn kind(&self) -> WrapKind {
        self.kind
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (1, self.parent.len())
    }

    pub fn get(&self, i: usize) -> Result<V::Elem, ViewError> {
        self.parent.get(i).map(|v| self.kind.apply(v))
    }

    /// Reborrow as a shared view.
    pub fn as_view(&self) -> RowView<'_, V> {
        RowView::new(self.kind, self.parent)
    }

    /// Unwrap by value, preserving exclusivity of the parent borrow.
    pub fn unwrap(self, kind: WrapKind) -> Result<&'a mut V, ViewError> {
        if kind == self.kind || V::Elem::KIND == ScalarKind::Real {
            Ok(self.parent)
        } else {
            Err(mixed_kinds())
        }
    }
}

impl<V: VectorWrite> RowViewMut<'_, V> {
    /// Write element `i`: the value is inverse-transformed and stored in the
    /// parent. Returns the view so writes can chain.
    pub fn set(&mut self, i: usize, value: V::Elem) -> Result<&mut Self, ViewError> {
        self.parent.set(i, self.kind.apply_inv(value))?;
        Ok(self)
    }
}

// ============================================================================
// MatView: wrapped 2-D container, logical shape (c, r)
// ============================================================================

/// Shared view of a matrix with its axes swapped and elements transformed.
pub struct MatView<'a, M> {
    parent: &'a M,
    kind: WrapKind,
}

impl<M> Clone for MatView<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for MatView<'_, M> {}

impl<'a, M: MatrixAccess> MatView<'a, M> {
    pub fn new(kind: WrapKind, parent: &'a M) -> Self {
        Self { parent, kind }
    }

    /// Construct with an explicitly declared element kind, failing with
    /// `ElementTypeMismatch` if it disagrees with the derived one.
    pub fn with_elem_kind(
        kind: WrapKind,
        parent: &'a M,
        declared: ScalarKind,
    ) -> Result<Self, ViewError> {
        check_elem_kind::<M::Elem>(declared)?;
        Ok(Self::new(kind, parent))
    }

    #[inline]
    pub fn kind(&self) -> WrapKind {
        self.kind
    }

    #[inline]
    pub fn parent(&self) -> &'a M {
        self.parent
    }

    /// Logical shape: the parent's shape reversed.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.parent.ncols(), self.parent.nrows())
    }

    /// Read element `(i, j)`: forwarded as `(j, i)` with the transform
    /// applied. Bounds failures come from the parent unchanged.
    pub fn get(&self, i: usize, j: usize) -> Result<M::Elem, ViewError> {
        self.parent.get(j, i).map(|v| self.kind.apply(v))
    }

    /// Transpose/adjoint of this already-wrapped matrix; see
    /// [`RowView::unwrap`] for the simplification rules.
    pub fn unwrap(&self, kind: WrapKind) -> Result<&'a M, ViewError> {
        if kind == self.kind || M::Elem::KIND == ScalarKind::Real {
            Ok(self.parent)
        } else {
            Err(mixed_kinds())
        }
    }

    /// Matrix views prefer multi-index iteration; the axis swap defeats the
    /// parent's linear order.
    #[inline]
    pub fn preferred_iter(&self) -> IterOrder {
        IterOrder::Indexed
    }

    /// Allocate a plain, unwrapped zeroed container of this view's logical
    /// shape. Matrices gain nothing from staying wrapped post-allocation.
    pub fn similar(&self) -> M
    where
        M: BuildMatrix,
    {
        let (r, c) = self.shape();
        M::from_fn(r, c, |_, _| num_traits::Zero::zero())
    }
}

impl<M: MatrixAccess> MatrixAccess for MatView<'_, M> {
    type Elem = M::Elem;

    fn nrows(&self) -> usize {
        self.parent.ncols()
    }

    fn ncols(&self) -> usize {
        self.parent.nrows()
    }

    fn get(&self, i: usize, j: usize) -> Result<Self::Elem, ViewError> {
        MatView::get(self, i, j)
    }
}

impl<M: RawStorage> RawStorage for MatView<'_, M> {
    type Elem = M::Elem;

    fn raw_storage(&self) -> &[Self::Elem] {
        self.parent.raw_storage()
    }
}

impl<M: StridePair> StridePair for MatView<'_, M> {
    fn stride_pair(&self) -> (isize, isize) {
        let (rs, cs) = self.parent.stride_pair();
        (cs, rs)
    }
}

impl<M: MatrixAccess + LayoutQuery> LayoutQuery for MatView<'_, M> {
    fn layout(&self) -> Layout {
        self.kind.layout_of::<M::Elem>(self.parent.layout())
    }
}

/// A wrapped matrix multiplies by dispatching into the parent's transposed
/// or adjoint kernel; the transpose itself is never materialized.
impl<M, V> MatVec<V> for MatView<'_, M>
where
    M: MatrixAccess + MatTransVec<V> + MatAdjVec<V>,
{
    fn matvec(&self, x: &V, y: &mut V) {
        match self.kind {
            WrapKind::Transpose => self.parent.mattransvec(x, y),
            WrapKind::ConjugateTranspose => self.parent.matadjvec(x, y),
        }
    }
}

// ============================================================================
// MatViewMut
// ============================================================================

/// Exclusive view of a matrix with swapped axes; writes go to the parent.
pub struct MatViewMut<'a, M> {
    parent: &'a mut M,
    kind: WrapKind,
}

impl<'a, M: MatrixAccess> MatViewMut<'a, M> {
    pub fn new(kind: WrapKind, parent: &'a mut M) -> Self {
        Self { parent, kind }
    }

    pub fn with_elem_kind(
        kind: WrapKind,
        parent: &'a mut M,
        declared: ScalarKind,
    ) -> Result<Self, ViewError> {
        check_elem_kind::<M::Elem>(declared)?;
        Ok(Self::new(kind, parent))
    }

    #[inline]
    pub fn kind(&self) -> WrapKind {
        self.kind
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.parent.ncols(), self.parent.nrows())
    }

    pub fn get(&self, i: usize, j: usize) -> Result<M::Elem, ViewError> {
        self.parent.get(j, i).map(|v| self.kind.apply(v))
    }

    /// Reborrow as a shared view.
    pub fn as_view(&self) -> MatView<'_, M> {
        MatView::new(self.kind, self.parent)
    }

    /// Unwrap by value, preserving exclusivity of the parent borrow.
    pub fn unwrap(self, kind: WrapKind) -> Result<&'a mut M, ViewError> {
        if kind == self.kind || M::Elem::KIND == ScalarKind::Real {
            Ok(self.parent)
        } else {
            Err(mixed_kinds())
        }
    }
}

impl<M: MatrixWrite> MatViewMut<'_, M> {
    /// Write element `(i, j)`: inverse-transformed and stored at `(j, i)` in
    /// the parent. Returns the view so writes can chain.
    pub fn set(&mut self, i: usize, j: usize, value: M::Elem) -> Result<&mut Self, ViewError> {
        self.parent.set(j, i, self.kind.apply_inv(value))?;
        Ok(self)
    }
}

// ============================================================================
// OwnedRow: allocating operations return these
// ============================================================================

/// A wrapped row that owns its parent buffer.
///
/// Produced by allocating operations (`similar`, concatenation, element-wise
/// maps, operator results); borrow it back into a [`RowView`] to read.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedRow<V> {
    kind: WrapKind,
    parent: V,
}

impl<V: VectorAccess> OwnedRow<V> {
    pub fn new(kind: WrapKind, parent: V) -> Self {
        Self { kind, parent }
    }

    #[inline]
    pub fn kind(&self) -> WrapKind {
        self.kind
    }

    #[inline]
    pub fn parent(&self) -> &V {
        &self.parent
    }

    pub fn into_parent(self) -> V {
        self.parent
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (1, self.parent.len())
    }

    pub fn get(&self, i: usize) -> Result<V::Elem, ViewError> {
        self.view().get(i)
    }

    pub fn view(&self) -> RowView<'_, V> {
        RowView::new(self.kind, &self.parent)
    }

    pub fn view_mut(&mut self) -> RowViewMut<'_, V> {
        RowViewMut::new(self.kind, &mut self.parent)
    }
}
