//! Row-vector semantics across bulk operations.
//!
//! Generic concatenation and element-wise application run over raw parent
//! storage, which would silently turn a logical row back into a column. The
//! functions here intercept the all-same-kind cases: they unwrap the
//! operands, run the bulk operation on the parents, and re-wrap the result,
//! so a row stays a row. Mixed wrapper kinds are not unified; those fall back
//! to generic behavior and materialize a plain 1×N matrix of logical values.

use crate::core::traits::{BuildMatrix, BuildVector, VectorAccess};
use crate::error::ViewError;
use crate::view::{OwnedRow, RowView};

/// Result of a row-level bulk operation: either the wrapper was preserved, or
/// the generic fallback produced a plain 1×N matrix.
#[derive(Debug)]
pub enum RowCat<V, M> {
    Row(OwnedRow<V>),
    Matrix(M),
}

/// Horizontal concatenation of wrapped rows.
///
/// When every operand carries the same kind, concatenating logical rows
/// horizontally equals stacking the parent columns vertically: the parents
/// are concatenated and the result re-wrapped. Mixed kinds fall back to a
/// plain 1×N matrix of logical values.
pub fn hcat<V, M>(rows: &[RowView<'_, V>]) -> Result<RowCat<V, M>, ViewError>
where
    V: VectorAccess + BuildVector,
    M: BuildMatrix<Elem = V::Elem>,
{
    let Some(first) = rows.first() else {
        return Err(ViewError::InvalidOperandShape("empty concatenation"));
    };
    let kind = first.kind();
    let total: usize = rows.iter().map(|r| r.len()).sum();

    if rows.iter().all(|r| r.kind() == kind) {
        let mut buf = Vec::with_capacity(total);
        for row in rows {
            let parent = row.parent();
            for i in 0..parent.len() {
                buf.push(parent.get(i)?);
            }
        }
        return Ok(RowCat::Row(OwnedRow::new(kind, V::from_fn(total, |i| buf[i]))));
    }

    // Generic fallback: logical values, wrapper discarded.
    let mut buf = Vec::with_capacity(total);
    for row in rows {
        for i in 0..row.len() {
            buf.push(row.get(i)?);
        }
    }
    Ok(RowCat::Matrix(M::from_fn(1, total, |_, j| buf[j])))
}

/// Element-wise application over one wrapped row.
///
/// `f` observes logical (transformed) values, exactly as indexed access
/// through the view would show it, and its result is inverse-transformed
/// before landing in the raw result buffer; the output stays wrapped with
/// the operand's kind. Scalar operands mix in through closure capture.
pub fn map_row<V, F>(f: F, row: &RowView<'_, V>) -> Result<OwnedRow<V>, ViewError>
where
    V: VectorAccess + BuildVector,
    F: Fn(V::Elem) -> V::Elem,
{
    let kind = row.kind();
    let parent = row.parent();
    let n = parent.len();
    let mut buf = Vec::with_capacity(n);
    for i in 0..n {
        let raw = parent.get(i)?;
        buf.push(kind.apply_inv(f(kind.apply(raw))));
    }
    Ok(OwnedRow::new(kind, V::from_fn(n, |i| buf[i])))
}

/// Element-wise application over two wrapped rows.
///
/// Same-kind operands keep the wrapper as in [`map_row`]; mixed kinds fall
/// back to a plain 1×N matrix of logical results.
pub fn zip_map_rows<V, M, F>(
    f: F,
    a: &RowView<'_, V>,
    b: &RowView<'_, V>,
) -> Result<RowCat<V, M>, ViewError>
where
    V: VectorAccess + BuildVector,
    M: BuildMatrix<Elem = V::Elem>,
    F: Fn(V::Elem, V::Elem) -> V::Elem,
{
    if a.len() != b.len() {
        return Err(ViewError::InvalidOperandShape(
            "element-wise map over rows of different lengths",
        ));
    }
    let n = a.len();

    if a.kind() == b.kind() {
        let kind = a.kind();
        let (pa, pb) = (a.parent(), b.parent());
        let mut buf = Vec::with_capacity(n);
        for i in 0..n {
            let x = kind.apply(pa.get(i)?);
            let y = kind.apply(pb.get(i)?);
            buf.push(kind.apply_inv(f(x, y)));
        }
        return Ok(RowCat::Row(OwnedRow::new(kind, V::from_fn(n, |i| buf[i]))));
    }

    let mut buf = Vec::with_capacity(n);
    for i in 0..n {
        buf.push(f(a.get(i)?, b.get(i)?));
    }
    Ok(RowCat::Matrix(M::from_fn(1, n, |_, j| buf[j])))
}
