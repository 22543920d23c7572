//! Left and right division involving wrapped rows.

use crate::core::scalar::Scalar;
use crate::core::traits::{
    BuildMatrix, BuildVector, DirectSolve, MatAdjVec, MatTransVec, MatVec, MatrixAccess,
    Similar, Trans, VectorAccess, VectorDot,
};
use crate::error::ViewError;
use crate::ops::pinv::row_pinv_parent;
use crate::ops::{mul, OpOutput, Operand};
use crate::view::{OwnedRow, RowView, WrapKind};

/// Left division `u \ v` for two wrapped rows: reduces to `pinv(u) * v`,
/// which is an outer product of the pseudo-inverse column with `v`.
pub fn ldiv<'a, T, V, M>(
    u: &RowView<'a, V>,
    v: &RowView<'a, V>,
) -> Result<OpOutput<T, V, M>, ViewError>
where
    T: Scalar,
    V: VectorAccess<Elem = T> + VectorDot + BuildVector + Similar,
    M: MatrixAccess<Elem = T> + BuildMatrix + MatVec<V> + MatTransVec<V> + MatAdjVec<V>,
{
    let p = row_pinv_parent(u)?;
    mul(&Operand::Vector(&p), &Operand::Row(*v))
}

/// Right division `u / A` for a wrapped row and a matrix denominator.
///
/// Against a plain matrix the wrapper moves into the solve's `Trans` flag:
/// `x = op(A)⁻¹ · parent(u)`, re-wrapped with the row's kind. Against a
/// wrapped matrix of the same kind both wrappers cancel and the solve runs
/// untransposed on the parent. Against a wrapped matrix of the other kind
/// the denominator's parent is conjugated before an untransposed solve; the
/// exact formulation would copy and double-wrap the denominator, and the
/// cheaper conjugate-only form is kept deliberately.
pub fn rdiv<'a, T, V, M>(
    u: &RowView<'a, V>,
    denom: &Operand<'a, V, M>,
) -> Result<OpOutput<T, V, M>, ViewError>
where
    T: Scalar,
    V: VectorAccess<Elem = T>,
    M: MatrixAccess<Elem = T> + BuildMatrix + DirectSolve<V>,
{
    match denom {
        Operand::Matrix(a) => {
            if a.nrows() != a.ncols() || u.len() != a.ncols() {
                return Err(ViewError::InvalidOperandShape(
                    "right division requires a square matrix matching the row length",
                ));
            }
            let trans = match u.kind() {
                WrapKind::Transpose => Trans::Trans,
                WrapKind::ConjugateTranspose => Trans::ConjTrans,
            };
            let x = a.solve(trans, u.parent())?;
            Ok(OpOutput::Row(OwnedRow::new(u.kind(), x)))
        }
        Operand::WrappedMatrix(w) => {
            let parent = w.parent();
            if parent.nrows() != parent.ncols() || u.len() != parent.nrows() {
                return Err(ViewError::InvalidOperandShape(
                    "right division requires a square matrix matching the row length",
                ));
            }
            match w.unwrap(u.kind()) {
                Ok(a) => {
                    let x = a.solve(Trans::NoTrans, u.parent())?;
                    Ok(OpOutput::Row(OwnedRow::new(u.kind(), x)))
                }
                Err(_) => {
                    // Mismatched kinds: solve against conj(A) instead of the
                    // exact double-wrapped form, which would copy A twice.
                    let (r, c) = (parent.nrows(), parent.ncols());
                    let mut buf = Vec::with_capacity(r * c);
                    for i in 0..r {
                        for j in 0..c {
                            buf.push(parent.get(i, j)?.conj());
                        }
                    }
                    let conjugated = M::from_fn(r, c, |i, j| buf[i * c + j]);
                    let x = conjugated.solve(Trans::NoTrans, u.parent())?;
                    Ok(OpOutput::Row(OwnedRow::new(u.kind(), x)))
                }
            }
        }
        _ => Err(ViewError::InvalidOperandShape(
            "right division requires a matrix denominator",
        )),
    }
}
