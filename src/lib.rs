//! fixten provides fixed-rank numeric tensors: vectors and matrices whose
//! shapes are fixed at compile time.
//!
//! # Storage and shapes
//!
//! Every container owns a fixed-size array of elements. The element count
//! is a const generic parameter, so a `Vector<f32, 3>` and a
//! `Vector<f32, 4>` are different types and shape mismatches are compile
//! errors rather than runtime checks. A [`Matrix`] nests vectors: it is a
//! vector of row vectors, and flattens its elements row-major through
//! [`MatrixIndex`] when a flat view is needed.
//!
//! The [`Pointwise`] trait is the shared contract between the container
//! types: anything exposing a fixed count of scalars in a flat order gets
//! elementwise arithmetic, scalar broadcast, reduction and dot product
//! from one implementation. Bare operators (`v + s`, `m * s`) broadcast a
//! scalar; the `*_elementwise` methods combine two same-shaped values.
//!
//! ```
//! use fixten::{Matrix, Vector};
//!
//! let v = Vector::from([1.0, 2.0, 3.0]);
//! assert_eq!(v.x(), 1.0);
//!
//! let m = Matrix::from_rows([[1, 2], [3, 4]]);
//! assert_eq!(m.determinant(), -2);
//! assert_eq!(m.transposed().transposed(), m);
//! ```
//!
//! # Swizzling
//!
//! [`extract`] and the [`Swizzle`] trait project a value through an
//! ordered list of feature selectors, gathering the results into a new
//! fixed-size container. On vectors this reorders or duplicates axes:
//!
//! ```
//! use fixten::Vector;
//!
//! let v = Vector::from([1.0, 2.0]);
//! let swapped = v.gather([|v: &Vector<f64, 2>| v.y(), |v| v.x()]);
//! assert_eq!(swapped, Vector::from([2.0, 1.0]));
//! ```
//!
//! # Serialization
//!
//! With the `serde` feature enabled, a vector serializes as a flat
//! sequence of exactly `N` scalars in index order and a matrix as `R`
//! sequential rows. Decoding reads exactly the required counts and
//! reports a length error when fewer entries are present.

pub mod container;
pub mod errors;
mod index;
mod matrix;
mod pointwise;
mod swizzle;
mod vector;

#[cfg(feature = "serde")]
mod impl_serialize;

pub use index::MatrixIndex;
pub use matrix::{Matrix, Matrix3};
pub use pointwise::Pointwise;
pub use swizzle::{extract, Swizzle};
pub use vector::{
    Quaternion, Vector, Vector2, Vector2Int, Vector3, Vector3Int, Vector4, Vector4Int,
};

/// This module provides a convenient way to import the most common traits
/// from this library via a glob import.
pub mod prelude {
    pub use super::{Pointwise, Swizzle};
}
