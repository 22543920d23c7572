//! Core module: scalar transforms, capability traits, and backend impls.

pub mod scalar;
pub mod traits;
pub mod wrappers;

pub use scalar::{Scalar, ScalarKind};
pub use traits::*;
