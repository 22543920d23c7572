//! Algebraic operators over plain and wrapped operands.
//!
//! Operator behavior depends on the runtime shape class of both operands, so
//! each operand is tagged with an [`Operand`] variant and every operator is a
//! single ordered match over the pair. Combinations with no sound algebraic
//! definition fail with `InvalidOperandShape` instead of falling through to a
//! generic numeric routine.
//!
//! The rules exploit wrapping to avoid materializing transposes: a wrapper is
//! pushed onto the smaller operand, or cancelled against a matching wrapper,
//! before any kernel runs.

use crate::core::scalar::Scalar;
use crate::core::traits::{
    BuildMatrix, BuildVector, MatAdjVec, MatTransVec, MatVec, MatrixAccess, Similar,
    VectorAccess, VectorDot,
};
use crate::error::ViewError;
use crate::view::{MatView, OwnedRow, RowView, WrapKind};

pub mod divide;
pub mod pinv;

pub use divide::{ldiv, rdiv};
pub use pinv::pinv;

/// Shape class of an operand, per the dispatch-table design.
pub enum Operand<'a, V, M> {
    /// Plain column vector.
    Vector(&'a V),
    /// Plain matrix.
    Matrix(&'a M),
    /// Wrapped vector (logical row).
    Row(RowView<'a, V>),
    /// Wrapped matrix.
    WrappedMatrix(MatView<'a, M>),
}

impl<V, M> Clone for Operand<'_, V, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, M> Copy for Operand<'_, V, M> {}

/// Result of an operator: a scalar, a fresh column, a fresh wrapped row, or a
/// fresh matrix, depending on the operand pair.
#[derive(Debug)]
pub enum OpOutput<T, V, M> {
    Scalar(T),
    Vector(V),
    Row(OwnedRow<V>),
    Matrix(M),
}

impl<T, V, M> OpOutput<T, V, M> {
    pub fn into_scalar(self) -> Option<T> {
        match self {
            OpOutput::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_vector(self) -> Option<V> {
        match self {
            OpOutput::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_row(self) -> Option<OwnedRow<V>> {
        match self {
            OpOutput::Row(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_matrix(self) -> Option<M> {
        match self {
            OpOutput::Matrix(m) => Some(m),
            _ => None,
        }
    }
}

/// Multiplication over tagged operands.
///
/// Dispatch rules, in match order:
/// - row × vector: inner product (`dot` for Transpose rows, `dotc` for
///   ConjugateTranspose rows, which conjugates the left entries);
/// - vector × row: outer product, materialized through the matrix builder;
/// - row × row: rejected, two rows have no defined product;
/// - row × matrix: the wrapper moves onto the vector, `y = op(A) · parent`,
///   and the result is re-wrapped;
/// - row × wrapped matrix of the same kind (or real elements): both wrappers
///   cancel and the plain kernel runs on the parents;
/// - plain matrix (or wrapped matrix) × vector: the corresponding kernel.
///
/// Everything else fails with `InvalidOperandShape`.
pub fn mul<'a, T, V, M>(
    lhs: &Operand<'a, V, M>,
    rhs: &Operand<'a, V, M>,
) -> Result<OpOutput<T, V, M>, ViewError>
where
    T: Scalar,
    V: VectorAccess<Elem = T> + VectorDot + BuildVector + Similar,
    M: MatrixAccess<Elem = T>
        + BuildMatrix
        + MatVec<V>
        + MatTransVec<V>
        + MatAdjVec<V>,
{
    match (lhs, rhs) {
        (Operand::Row(u), Operand::Vector(v)) => {
            if u.len() != v.len() {
                return Err(ViewError::InvalidOperandShape(
                    "inner product over mismatched lengths",
                ));
            }
            let s = match u.kind() {
                WrapKind::Transpose => u.parent().dot(v)?,
                WrapKind::ConjugateTranspose => u.parent().dotc(v)?,
            };
            Ok(OpOutput::Scalar(s))
        }
        (Operand::Vector(v), Operand::Row(u)) => {
            let (n, k) = (v.len(), u.len());
            let mut col = Vec::with_capacity(n);
            for i in 0..n {
                col.push(v.get(i)?);
            }
            let mut row = Vec::with_capacity(k);
            for j in 0..k {
                row.push(u.get(j)?);
            }
            Ok(OpOutput::Matrix(M::from_fn(n, k, |i, j| col[i] * row[j])))
        }
        (Operand::Row(_), Operand::Row(_)) => Err(ViewError::InvalidOperandShape(
            "row-vector times row-vector",
        )),
        (Operand::Row(u), Operand::Matrix(a)) => {
            if u.len() != a.nrows() {
                return Err(ViewError::InvalidOperandShape(
                    "row length does not match matrix row count",
                ));
            }
            let mut y = u.parent().similar(a.ncols());
            match u.kind() {
                WrapKind::Transpose => a.mattransvec(u.parent(), &mut y),
                WrapKind::ConjugateTranspose => a.matadjvec(u.parent(), &mut y),
            }
            Ok(OpOutput::Row(OwnedRow::new(u.kind(), y)))
        }
        (Operand::Row(u), Operand::WrappedMatrix(w)) => {
            let a = w.unwrap(u.kind()).map_err(|_| {
                ViewError::InvalidOperandShape("row and wrapped matrix of incompatible kinds")
            })?;
            if u.len() != a.ncols() {
                return Err(ViewError::InvalidOperandShape(
                    "row length does not match wrapped matrix row count",
                ));
            }
            let mut y = u.parent().similar(a.nrows());
            a.matvec(u.parent(), &mut y);
            Ok(OpOutput::Row(OwnedRow::new(u.kind(), y)))
        }
        (Operand::Matrix(a), Operand::Vector(x)) => {
            if x.len() != a.ncols() {
                return Err(ViewError::InvalidOperandShape(
                    "vector length does not match matrix column count",
                ));
            }
            let mut y = x.similar(a.nrows());
            a.matvec(x, &mut y);
            Ok(OpOutput::Vector(y))
        }
        (Operand::WrappedMatrix(w), Operand::Vector(x)) => {
            if x.len() != w.ncols() {
                return Err(ViewError::InvalidOperandShape(
                    "vector length does not match wrapped matrix column count",
                ));
            }
            let mut y = x.similar(w.nrows());
            w.matvec(x, &mut y);
            Ok(OpOutput::Vector(y))
        }
        _ => Err(ViewError::InvalidOperandShape(
            "no dispatch rule for this operand combination",
        )),
    }
}
