//! Wrapped-row arithmetic walkthrough: inner products, row-matrix products,
//! and a right division, all without materializing a transpose.

use adjview::matrix::DenseMat;
use adjview::ops::{mul, pinv, rdiv, OpOutput, Operand};
use adjview::view::{RowView, WrapKind};

type Out = OpOutput<f64, Vec<f64>, DenseMat<f64>>;

fn main() {
    let u = vec![1.0, 2.0, 3.0];
    let v = vec![4.0, 5.0, 6.0];
    let row = RowView::new(WrapKind::Transpose, &u);

    let out: Out = mul(&Operand::Row(row), &Operand::Vector(&v)).expect("inner product");
    println!("u' * v = {:?}", out.into_scalar());

    // [[1,2,3],[4,5,6]] column-major
    let a = DenseMat::from_raw(2, 3, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    let w = vec![1.0, 1.0];
    let wrow = RowView::new(WrapKind::Transpose, &w);
    let out: Out = mul(&Operand::Row(wrow), &Operand::Matrix(&a)).expect("row-matrix product");
    if let Some(r) = out.into_row() {
        println!("w' * A = {:?} (kind {:?})", r.parent(), r.kind());
    }

    let out: Out = pinv(&Operand::Vector(&u)).expect("pseudo-inverse");
    if let Some(r) = out.into_row() {
        println!("pinv(u) = {:?} (kind {:?})", r.parent(), r.kind());
    }

    let b = DenseMat::from_raw(2, 2, vec![1.0, 3.0, 2.0, 4.0]);
    let rhs = vec![5.0, 6.0];
    let rrow = RowView::new(WrapKind::Transpose, &rhs);
    let out: Out = rdiv(&rrow, &Operand::Matrix(&b)).expect("right division");
    if let Some(r) = out.into_row() {
        println!("rhs' / B = {:?}", r.parent());
    }
}
