//! Memory-layout tags and their transpose/conjugate algebra.
//!
//! Layout descriptors are plain data: a closed enum plus two pure total
//! transforms. The view layer composes them to answer layout queries without
//! touching the parent's storage, and numeric callers use the result to pick
//! fast code paths. There are no failure modes; anything a transform cannot
//! classify comes out as [`Layout::Unknown`].

use crate::core::scalar::ScalarKind;

/// How a container's elements are arranged in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    /// No layout information available.
    Unknown,
    /// Regular strides along both axes, not necessarily contiguous.
    Strided,
    /// Rows are contiguous-ish (row stride dominates).
    RowMajor,
    /// Columns are contiguous-ish (column stride dominates).
    ColMajor,
    /// Fully contiguous, rows first.
    DenseRowMajor,
    /// Fully contiguous, columns first.
    DenseColMajor,
    /// The wrapped layout with every element conjugated on access.
    Conjugated(Box<Layout>),
}

/// Layout of the transpose of a container with layout `layout`.
///
/// Row and column orders swap, strided stays strided (with the stride pair
/// conceptually swapped), and the conjugation modifier passes through
/// transparently.
pub fn transpose_layout(layout: Layout) -> Layout {
    match layout {
        Layout::RowMajor => Layout::ColMajor,
        Layout::ColMajor => Layout::RowMajor,
        Layout::DenseRowMajor => Layout::DenseColMajor,
        Layout::DenseColMajor => Layout::DenseRowMajor,
        Layout::Strided => Layout::Strided,
        Layout::Conjugated(inner) => Layout::Conjugated(Box::new(transpose_layout(*inner))),
        Layout::Unknown => Layout::Unknown,
    }
}

/// Layout of the element-wise conjugate of a container with layout `layout`.
///
/// Real element kinds conjugate to themselves. Complex kinds gain a
/// `Conjugated` modifier, or lose one if already conjugated (double
/// conjugation cancels).
pub fn conjugate_layout(kind: ScalarKind, layout: Layout) -> Layout {
    match kind {
        ScalarKind::Real => layout,
        ScalarKind::Complex => match layout {
            Layout::Conjugated(inner) => *inner,
            other => Layout::Conjugated(Box::new(other)),
        },
    }
}

/// Layout of the conjugate transpose: `transpose_layout ∘ conjugate_layout`.
pub fn adjoint_layout(kind: ScalarKind, layout: Layout) -> Layout {
    transpose_layout(conjugate_layout(kind, layout))
}
