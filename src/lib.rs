//! adjview: lazy transpose and adjoint views over generic containers
//!
//! This crate provides zero-copy transpose and conjugate-transpose wrappers
//! for vector and matrix containers, a layout tag algebra that tracks memory
//! layout through wrapping, and an operator layer that dispatches products,
//! divisions, and pseudo-inverses on the runtime shape class of its operands.
//!
//! # Example
//! ```rust
//! use adjview::view::{RowView, WrapKind};
//! use adjview::ops::{mul, Operand, OpOutput};
//! use adjview::matrix::DenseMat;
//!
//! let v = vec![1.0, 2.0, 3.0];
//! let w = vec![4.0, 5.0, 6.0];
//! let row = RowView::new(WrapKind::Transpose, &v);
//! let out: OpOutput<f64, Vec<f64>, DenseMat<f64>> =
//!     mul(&Operand::Row(row), &Operand::Vector(&w)).unwrap();
//! assert_eq!(out.into_scalar(), Some(32.0));
//! ```

pub mod core;
pub mod error;
pub mod layout;
pub mod matrix;
pub mod ops;
pub mod view;

pub use crate::core::scalar::{Scalar, ScalarKind};
pub use crate::error::ViewError;
pub use crate::layout::{adjoint_layout, conjugate_layout, transpose_layout, Layout};
pub use crate::matrix::{CsrMatrix, DenseMat};
pub use crate::ops::{ldiv, mul, pinv, rdiv, OpOutput, Operand};
pub use crate::view::{
    hcat, map_row, zip_map_rows, MatView, MatViewMut, OwnedRow, RowCat, RowView, RowViewMut,
    WrapKind,
};
