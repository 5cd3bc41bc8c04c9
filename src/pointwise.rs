//! A shared capability for containers of ordered scalars.
//!
//! Any type that can expose its contents as a fixed count of scalars in a
//! flat order gets one implementation of elementwise arithmetic, scalar
//! broadcast, reduction and dot product. [`Vector`](crate::Vector) and
//! [`Matrix`](crate::Matrix) both implement it; a matrix flattens its
//! scalars row-major via [`MatrixIndex`](crate::MatrixIndex).
//!
//! Two operation families are deliberately distinct: the `std::ops`
//! operators on the container types (`v + s`, `m * s`) broadcast one
//! scalar across every element, while the `*_elementwise` methods here
//! combine two same-shaped containers element by element.

use std::ops::{Add, Div, Mul, Sub};

use fixten_base::num::Identities;

/// Trait for fixed-size containers whose scalars can be combined
/// point-to-point.
///
/// Implementations provide flat read/write access to scalars in
/// `[0, SCALAR_COUNT)` plus exact-count construction; everything else has
/// a provided implementation in terms of those.
pub trait Pointwise: Sized {
    /// The element type stored in this container.
    type Scalar: Clone;

    /// The number of scalars in any value of this type.
    const SCALAR_COUNT: usize;

    /// Return a copy of the scalar at `index` in flat order.
    ///
    /// Panics if `index` is not in `[0, SCALAR_COUNT)`.
    fn scalar(&self, index: usize) -> Self::Scalar;

    /// Replace the scalar at `index` in flat order.
    ///
    /// Panics if `index` is not in `[0, SCALAR_COUNT)`.
    fn set_scalar(&mut self, index: usize, value: Self::Scalar);

    /// Construct a value from exactly [`SCALAR_COUNT`](Self::SCALAR_COUNT)
    /// scalars in flat order.
    ///
    /// Panics if `scalars.len() != SCALAR_COUNT`. For a recoverable
    /// variant on vectors, see `Vector`'s `TryFrom<&[T]>` impl.
    fn from_scalars(scalars: &[Self::Scalar]) -> Self;

    /// Combine every scalar of `self` with a single value.
    ///
    /// Element `i` of the result is `merge(self[i], scalar)`.
    fn pointwise_scalar(
        &self,
        scalar: Self::Scalar,
        merge: impl Fn(Self::Scalar, Self::Scalar) -> Self::Scalar,
    ) -> Self {
        let merged: Vec<_> = (0..Self::SCALAR_COUNT)
            .map(|index| merge(self.scalar(index), scalar.clone()))
            .collect();
        Self::from_scalars(&merged)
    }

    /// Combine corresponding scalars of `self` and `rhs`.
    ///
    /// Element `i` of the result is `merge(self[i], rhs[i])`. Both
    /// operands are the same type, so their counts are equal by
    /// construction.
    fn pointwise(
        &self,
        rhs: &Self,
        merge: impl Fn(Self::Scalar, Self::Scalar) -> Self::Scalar,
    ) -> Self {
        let merged: Vec<_> = (0..Self::SCALAR_COUNT)
            .map(|index| merge(self.scalar(index), rhs.scalar(index)))
            .collect();
        Self::from_scalars(&merged)
    }

    /// Left fold over scalars in flat index order.
    fn reduce(
        &self,
        seed: Self::Scalar,
        combine: impl Fn(Self::Scalar, Self::Scalar) -> Self::Scalar,
    ) -> Self::Scalar {
        (0..Self::SCALAR_COUNT)
            .map(|index| self.scalar(index))
            .fold(seed, combine)
    }

    /// Return the sum of elementwise products of `self` and `rhs`.
    fn dot(&self, rhs: &Self) -> Self::Scalar
    where
        Self::Scalar: Identities + Add<Output = Self::Scalar> + Mul<Output = Self::Scalar>,
    {
        self.pointwise(rhs, |a, b| a * b)
            .reduce(Self::Scalar::zero(), |acc, x| acc + x)
    }

    /// Elementwise sum of `self` and `rhs`.
    fn add_elementwise(&self, rhs: &Self) -> Self
    where
        Self::Scalar: Add<Output = Self::Scalar>,
    {
        self.pointwise(rhs, |a, b| a + b)
    }

    /// Elementwise difference of `self` and `rhs`.
    fn sub_elementwise(&self, rhs: &Self) -> Self
    where
        Self::Scalar: Sub<Output = Self::Scalar>,
    {
        self.pointwise(rhs, |a, b| a - b)
    }

    /// Elementwise product of `self` and `rhs`.
    fn mul_elementwise(&self, rhs: &Self) -> Self
    where
        Self::Scalar: Mul<Output = Self::Scalar>,
    {
        self.pointwise(rhs, |a, b| a * b)
    }

    /// Elementwise quotient of `self` and `rhs`.
    ///
    /// Division follows the scalar type's own semantics; for floats a zero
    /// divisor yields an infinity or NaN element rather than a failure.
    fn div_elementwise(&self, rhs: &Self) -> Self
    where
        Self::Scalar: Div<Output = Self::Scalar>,
    {
        self.pointwise(rhs, |a, b| a / b)
    }
}

#[cfg(test)]
mod tests {
    use super::Pointwise;
    use crate::Vector;
    use fixten_testing::TestCases;

    #[test]
    fn test_pointwise_scalar() {
        let v = Vector::from([1, 2, 3]);
        assert_eq!(v.pointwise_scalar(10, |a, b| a + b), Vector::from([11, 12, 13]));
        assert_eq!(v.pointwise_scalar(2, |a, b| a * b), Vector::from([2, 4, 6]));
    }

    #[test]
    fn test_pointwise() {
        let a = Vector::from([1, 2, 3]);
        let b = Vector::from([10, 20, 30]);
        assert_eq!(a.pointwise(&b, |x, y| x + y), Vector::from([11, 22, 33]));
        assert_eq!(b.pointwise(&a, |x, y| x - y), Vector::from([9, 18, 27]));
    }

    #[test]
    fn test_reduce_folds_left_in_index_order() {
        let v = Vector::from([1, 2, 3]);
        assert_eq!(v.reduce(0, |acc, x| acc + x), 6);
        // Left fold: ((100 - 1) - 2) - 3.
        assert_eq!(v.reduce(100, |acc, x| acc - x), 94);
    }

    #[test]
    fn test_dot() {
        #[derive(Debug)]
        struct Case {
            a: Vector<i32, 3>,
            b: Vector<i32, 3>,
            expected: i32,
        }

        let cases = [
            Case {
                a: Vector::from([1, 2, 3]),
                b: Vector::from([4, 5, 6]),
                expected: 32,
            },
            Case {
                a: Vector::from([0, 0, 0]),
                b: Vector::from([0, 0, 0]),
                expected: 0,
            },
            Case {
                a: Vector::from([1, 0, -1]),
                b: Vector::from([1, 1, 1]),
                expected: 0,
            },
        ];

        cases.test_each(|Case { a, b, expected }| {
            assert_eq!(a.dot(b), *expected);
        });
    }

    #[test]
    fn test_elementwise_family() {
        let a = Vector::from([8., 6., 4.]);
        let b = Vector::from([2., 3., 4.]);
        assert_eq!(a.add_elementwise(&b), Vector::from([10., 9., 8.]));
        assert_eq!(a.sub_elementwise(&b), Vector::from([6., 3., 0.]));
        assert_eq!(a.mul_elementwise(&b), Vector::from([16., 18., 16.]));
        assert_eq!(a.div_elementwise(&b), Vector::from([4., 2., 1.]));
    }

    #[test]
    fn test_broadcast_and_elementwise_are_distinct() {
        let v = Vector::from([1., 2., 3.]);
        // `+` broadcasts one scalar; `add_elementwise` needs a whole vector.
        assert_eq!(v + 1., Vector::from([2., 3., 4.]));
        assert_eq!(v.add_elementwise(&v), Vector::from([2., 4., 6.]));
    }

    #[test]
    fn test_set_scalar() {
        let mut v = Vector::from([1, 2, 3]);
        v.set_scalar(1, 20);
        assert_eq!(v, Vector::from([1, 20, 3]));
    }

    #[test]
    #[should_panic]
    fn test_scalar_out_of_bounds() {
        let v = Vector::from([1, 2, 3]);
        v.scalar(3);
    }

    #[test]
    #[should_panic(expected = "expected 3 elements but slice has 2")]
    fn test_from_scalars_wrong_count() {
        let _: Vector<i32, 3> = Vector::from_scalars(&[1, 2]);
    }
}
