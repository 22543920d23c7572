use thiserror::Error;

use crate::core::scalar::ScalarKind;

// Unified error type for adjview

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ViewError {
    #[error("element type mismatch: declared {0:?}, derived {1:?}")]
    ElementTypeMismatch(ScalarKind, ScalarKind),
    #[error("index {0} out of range for axis of length {1}")]
    IndexOutOfRange(usize, usize),
    #[error("invalid operand shape: {0}")]
    InvalidOperandShape(&'static str),
    #[error("zero pivot at row {0}")]
    ZeroPivot(usize),
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
