//! Concrete parent containers: dense column-major and CSR sparse.

pub mod dense;
pub mod sparse;

pub use dense::DenseMat;
pub use sparse::CsrMatrix;
