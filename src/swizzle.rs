//! Feature extraction ("swizzling") over arbitrary source values.
//!
//! Given an ordered list of selector functions, [`extract`] projects a
//! source value into a fixed-size array gathering the selected features
//! in the requested order and count. The mechanism is shape-agnostic: it
//! works over any source type and any selector result type, not just the
//! numeric containers in this crate. On [`Vector`] and [`Matrix`],
//! [`gather`](Vector::gather) rebuilds the selected features into a new
//! vector, which is how axes are reordered or duplicated.

use crate::index::MatrixIndex;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Apply each selector in `features` to `source`, gathering the results
/// in order: element `i` of the result is `features[i](source)`.
pub fn extract<S: ?Sized, T, const A: usize>(source: &S, features: [fn(&S) -> T; A]) -> [T; A] {
    features.map(|feature| feature(source))
}

/// Opt-in method-call sugar for [`extract`].
pub trait Swizzle {
    /// Project `self` through `features`, gathering the selected values
    /// into an array.
    fn swizzle<T, const A: usize>(&self, features: [fn(&Self) -> T; A]) -> [T; A] {
        extract(self, features)
    }
}

impl<T, const N: usize> Swizzle for Vector<T, N> {}
impl<T, const R: usize, const C: usize> Swizzle for Matrix<T, R, C> {}
impl<const N: usize> Swizzle for MatrixIndex<N> {}
impl<T> Swizzle for [T] {}

impl<T, const N: usize> Vector<T, N> {
    /// Project this vector through `features`, gathering the selected
    /// values into a new vector.
    ///
    /// With one selector per axis in original order this is the identity;
    /// other selector lists reorder, duplicate or drop axes.
    pub fn gather<const A: usize>(&self, features: [fn(&Self) -> T; A]) -> Vector<T, A> {
        Vector::from(extract(self, features))
    }
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Project this matrix through `features`, gathering the selected
    /// values into a vector.
    pub fn gather<const A: usize>(&self, features: [fn(&Self) -> T; A]) -> Vector<T, A> {
        Vector::from(extract(self, features))
    }
}
