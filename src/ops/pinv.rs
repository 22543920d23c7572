//! Pseudo-inverse of vectors and wrapped rows.
//!
//! The pseudo-inverse of a nonzero column v is the row vᴴ/‖v‖², and the
//! pseudo-inverse of a row is the matching column. For a Transpose row the
//! conjugate of the parent materializes into the result (the conjugate of a
//! pseudo-inverse is the pseudo-inverse of the conjugate, not vice versa);
//! for a ConjugateTranspose row the two conjugations cancel. The zero vector
//! pseudo-inverts to zero.

use num_traits::Zero;

use crate::core::scalar::Scalar;
use crate::core::traits::{BuildVector, MatrixAccess, VectorAccess};
use crate::error::ViewError;
use crate::ops::{OpOutput, Operand};
use crate::view::{OwnedRow, RowView, WrapKind};

/// Parent buffer of pinv(v) for a plain column v: v/‖v‖², read through a
/// ConjugateTranspose wrapper by the caller.
pub(crate) fn vector_pinv_parent<V>(v: &V) -> Result<V, ViewError>
where
    V: VectorAccess + BuildVector,
{
    let n = v.len();
    let mut den = <V::Elem as Scalar>::Real::zero();
    let mut buf = Vec::with_capacity(n);
    for i in 0..n {
        let x = v.get(i)?;
        den = den + x.abs_sq();
        buf.push(x);
    }
    if den.is_zero() {
        return Ok(V::from_fn(n, |_| V::Elem::zero()));
    }
    let d = V::Elem::from_real(den);
    Ok(V::from_fn(n, |i| buf[i] / d))
}

/// Column pinv(u) for a wrapped row u, with the row's conjugation resolved
/// into the materialized result.
pub(crate) fn row_pinv_parent<V>(u: &RowView<'_, V>) -> Result<V, ViewError>
where
    V: VectorAccess + BuildVector,
{
    let parent = u.parent();
    let n = parent.len();
    let mut den = <V::Elem as Scalar>::Real::zero();
    let mut buf = Vec::with_capacity(n);
    for i in 0..n {
        let x = parent.get(i)?;
        den = den + x.abs_sq();
        buf.push(x);
    }
    if den.is_zero() {
        return Ok(V::from_fn(n, |_| V::Elem::zero()));
    }
    let d = V::Elem::from_real(den);
    match u.kind() {
        WrapKind::Transpose => Ok(V::from_fn(n, |i| buf[i].conj() / d)),
        WrapKind::ConjugateTranspose => Ok(V::from_fn(n, |i| buf[i] / d)),
    }
}

/// Pseudo-inverse of a vector operand.
///
/// A plain column yields a ConjugateTranspose-wrapped row over v/‖v‖²; a
/// wrapped row yields a plain column. Matrix pseudo-inverses belong to the
/// host numeric layer and are not provided here.
pub fn pinv<'a, T, V, M>(operand: &Operand<'a, V, M>) -> Result<OpOutput<T, V, M>, ViewError>
where
    T: Scalar,
    V: VectorAccess<Elem = T> + BuildVector,
    M: MatrixAccess<Elem = T>,
{
    match operand {
        Operand::Vector(v) => Ok(OpOutput::Row(OwnedRow::new(
            WrapKind::ConjugateTranspose,
            vector_pinv_parent(*v)?,
        ))),
        Operand::Row(u) => Ok(OpOutput::Vector(row_pinv_parent(u)?)),
        _ => Err(ViewError::Unsupported(
            "pseudo-inverse is provided for vectors and wrapped rows",
        )),
    }
}
