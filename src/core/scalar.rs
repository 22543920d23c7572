//! Scalar element types and the conjugation transform.
//!
//! The view layer needs exactly two facts about an element type: whether it is
//! real or complex (for layout conjugation and construction-time validation),
//! and how to conjugate a value. Conjugation is its own inverse, and the
//! transpose of a scalar is the scalar itself, so no further transforms are
//! required here.

use num_complex::Complex;

/// Runtime tag for an element type: real or complex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarKind {
    Real,
    Complex,
}

/// Element types usable behind a view.
///
/// Real types conjugate to themselves; `Complex<T>` conjugates for real.
pub trait Scalar:
    Copy + Send + Sync + std::fmt::Debug + PartialEq + num_traits::Num
{
    /// Underlying real field, used for magnitudes and pivot comparisons.
    type Real: num_traits::Float;

    /// Whether values of this type carry an imaginary part.
    const KIND: ScalarKind;

    /// Complex conjugate; the identity for real types.
    fn conj(self) -> Self;

    /// |x|² as a value of the real field.
    fn abs_sq(self) -> Self::Real;

    /// Embed a real value into this type.
    fn from_real(re: Self::Real) -> Self;
}

macro_rules! impl_scalar_real {
    ($($t:ty),*) => {
        $(impl Scalar for $t {
            type Real = $t;
            const KIND: ScalarKind = ScalarKind::Real;
            #[inline(always)]
            fn conj(self) -> Self {
                self
            }
            #[inline(always)]
            fn abs_sq(self) -> Self {
                self * self
            }
            #[inline(always)]
            fn from_real(re: Self) -> Self {
                re
            }
        })*
    };
}

impl_scalar_real!(f32, f64);

impl<T> Scalar for Complex<T>
where
    T: num_traits::Float + Send + Sync + std::fmt::Debug,
{
    type Real = T;
    const KIND: ScalarKind = ScalarKind::Complex;

    #[inline(always)]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }

    #[inline(always)]
    fn abs_sq(self) -> T {
        self.norm_sqr()
    }

    #[inline(always)]
    fn from_real(re: T) -> Self {
        Complex::new(re, T::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn real_conj_is_identity() {
        assert_eq!(3.5f64.conj(), 3.5);
        assert_eq!(f64::KIND, ScalarKind::Real);
    }

    #[test]
    fn complex_conj_flips_imag() {
        let z = Complex64::new(1.0, 2.0);
        assert_eq!(Scalar::conj(z), Complex64::new(1.0, -2.0));
        assert_eq!(Complex64::KIND, ScalarKind::Complex);
    }

    #[test]
    fn conj_is_self_inverse() {
        let z = Complex64::new(-4.0, 7.0);
        assert_eq!(Scalar::conj(Scalar::conj(z)), z);
    }

    #[test]
    fn abs_sq_matches_norm() {
        assert_eq!(3.0f64.abs_sq(), 9.0);
        assert_eq!(Complex64::new(3.0, 4.0).abs_sq(), 25.0);
    }
}
