//! Rank-2 tensors built as vectors of row vectors.

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use fixten_base::num::{Float, Identities};

use crate::index::MatrixIndex;
use crate::pointwise::Pointwise;
use crate::vector::Vector;

/// A fixed-shape matrix with `R` rows and `C` columns.
///
/// Storage is a vector of row vectors, so the nesting is row-major: the
/// outer axis is the row and the inner axis the column. As a
/// [`Pointwise`] container a matrix flattens its scalars row-major via
/// [`MatrixIndex`]; the flat order and the nested order agree by
/// construction.
///
/// ```
/// use fixten::Matrix;
///
/// let m = Matrix::from_rows([[1, 2], [3, 4]]);
/// assert_eq!(m.determinant(), -2);
/// assert_eq!(m.transposed(), Matrix::from_rows([[1, 3], [2, 4]]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<T, const R: usize, const C: usize> {
    rows: Vector<Vector<T, C>, R>,
}

/// A rank-3 tensor expressed as a matrix of vectors.
pub type Matrix3<T, const A: usize, const B: usize, const C: usize> = Matrix<Vector<T, C>, A, B>;

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The shape as `[rows, columns]`.
    pub const fn shape() -> [usize; 2] {
        [R, C]
    }

    /// Width over height of this matrix shape, as a real number.
    pub fn aspect_ratio() -> f64 {
        C as f64 / R as f64
    }

    /// Construct a matrix from its nested row-vector representation.
    pub fn new(rows: Vector<Vector<T, C>, R>) -> Self {
        Matrix { rows }
    }

    /// Construct a matrix by invoking `f` once per position, in row-major
    /// order.
    pub fn from_fn(mut f: impl FnMut(MatrixIndex<2>) -> T) -> Self {
        Matrix {
            rows: Vector::from_fn(|row| {
                Vector::from_fn(|column| f(MatrixIndex::from_row_column(row, column)))
            }),
        }
    }

    /// Construct a matrix from nested arrays of exactly `R` x `C` shape.
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        Matrix {
            rows: Vector::from(rows.map(Vector::from)),
        }
    }
}

impl<T: Clone, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Fill a matrix with clones of `value`.
    pub fn repeating(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }

    /// Lenient row-major construction from a flat slice: offsets beyond
    /// `slice.len()` receive clones of `default`, extra input elements
    /// are ignored.
    pub fn from_slice_or(slice: &[T], default: T) -> Self {
        Self::from_fn(|position| {
            let offset = position.offset(Self::shape());
            slice.get(offset).cloned().unwrap_or_else(|| default.clone())
        })
    }

    /// Return a copy of row `row`.
    pub fn row(&self, row: usize) -> Vector<T, C> {
        self.rows[row].clone()
    }

    /// Replace row `row`.
    pub fn set_row(&mut self, row: usize, values: Vector<T, C>) {
        self.rows[row] = values;
    }

    /// Gather column `column` into a new vector.
    pub fn column(&self, column: usize) -> Vector<T, R> {
        Vector::from_fn(|row| self.rows[row][column].clone())
    }

    /// Rewrite column `column`, element by element.
    pub fn set_column(&mut self, column: usize, values: Vector<T, R>) {
        for row in 0..R {
            self.rows[row][column] = values[row].clone();
        }
    }

    /// A new matrix with the row and column roles swapped.
    ///
    /// The result is a derived value, not a view: mutating `self`
    /// afterwards does not affect it.
    pub fn transposed(&self) -> Matrix<T, C, R> {
        Matrix::from_fn(|position| self.rows[position.column()][position.row()].clone())
    }
}

impl<T: Identities + Clone, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Lenient row-major construction from a flat slice, padding with
    /// zeros.
    pub fn from_slice(slice: &[T]) -> Self {
        Self::from_slice_or(slice, T::zero())
    }

    /// The all-zeros matrix.
    pub fn zero() -> Self {
        Self::repeating(T::zero())
    }

    /// The all-ones matrix.
    pub fn one() -> Self {
        Self::repeating(T::one())
    }
}

impl<T: Clone, const R: usize> Matrix<T, R, 1> {
    /// A single-column matrix holding `vector`.
    pub fn from_column(vector: Vector<T, R>) -> Self {
        Self::from_fn(|position| vector[position.row()].clone())
    }
}

impl<T: Clone, const C: usize> Matrix<T, 1, C> {
    /// A single-row matrix holding `vector`.
    pub fn from_row(vector: Vector<T, C>) -> Self {
        Self::from_fn(|position| vector[position.column()].clone())
    }
}

impl<T: Identities + Clone, const N: usize> Matrix<T, N, N> {
    /// The identity matrix: one where row equals column, zero elsewhere.
    pub fn identity() -> Self {
        Self::from_fn(|position| {
            if position.row() == position.column() {
                T::one()
            } else {
                T::zero()
            }
        })
    }
}

impl<T: Clone> Matrix<T, 1, 1> {
    /// The determinant of a 1x1 matrix is its single element.
    pub fn determinant(&self) -> T {
        self[[0, 0]].clone()
    }
}

impl<T: Copy + Mul<Output = T> + Sub<Output = T>> Matrix<T, 2, 2> {
    /// The determinant `ad - bc`.
    pub fn determinant(&self) -> T {
        let a = self[[0, 0]];
        let b = self[[0, 1]];
        let c = self[[1, 0]];
        let d = self[[1, 1]];
        a * d - b * c
    }
}

impl<T: Float> Matrix<T, 4, 4> {
    /// A copy with the X-axis rotation entries of the 3x3 sub-block
    /// overwritten; every other entry is left unchanged.
    pub fn rotate_x(&self, angle: T) -> Self {
        let mut matrix = *self;
        let cos_angle = angle.cos();
        let sin_angle = angle.sin();
        matrix.set_scalar(5, cos_angle);
        matrix.set_scalar(6, -sin_angle);
        matrix.set_scalar(9, sin_angle);
        matrix.set_scalar(10, cos_angle);
        matrix
    }

    /// A copy with the Y-axis rotation entries of the 3x3 sub-block
    /// overwritten; every other entry is left unchanged.
    pub fn rotate_y(&self, angle: T) -> Self {
        let mut matrix = *self;
        let cos_angle = angle.cos();
        let sin_angle = angle.sin();
        matrix.set_scalar(0, cos_angle);
        matrix.set_scalar(2, sin_angle);
        matrix.set_scalar(8, -sin_angle);
        matrix.set_scalar(10, cos_angle);
        matrix
    }

    /// A copy with the Z-axis rotation entries of the 3x3 sub-block
    /// overwritten; every other entry is left unchanged.
    pub fn rotate_z(&self, angle: T) -> Self {
        let mut matrix = *self;
        let cos_angle = angle.cos();
        let sin_angle = angle.sin();
        matrix.set_scalar(0, cos_angle);
        matrix.set_scalar(1, -sin_angle);
        matrix.set_scalar(4, sin_angle);
        matrix.set_scalar(5, cos_angle);
        matrix
    }

    /// A copy whose 3x3 sub-block is the rotation by `angle` around the
    /// normalized axis `axis` (Rodrigues' rotation formula).
    pub fn rotate_on_axis(&self, axis: Vector<T, 3>, angle: T) -> Self {
        let mut matrix = *self;
        let cos_angle = angle.cos();
        let sin_angle = angle.sin();
        let one_minus_cos = T::one() - cos_angle;
        matrix.set_scalar(0, cos_angle + axis.x() * axis.x() * one_minus_cos);
        matrix.set_scalar(1, axis.x() * axis.y() * one_minus_cos - axis.z() * sin_angle);
        matrix.set_scalar(2, axis.x() * axis.z() * one_minus_cos + axis.y() * sin_angle);
        matrix.set_scalar(4, axis.y() * axis.x() * one_minus_cos + axis.z() * sin_angle);
        matrix.set_scalar(5, cos_angle + axis.y() * axis.y() * one_minus_cos);
        matrix.set_scalar(6, axis.y() * axis.z() * one_minus_cos - axis.x() * sin_angle);
        matrix.set_scalar(8, axis.z() * axis.x() * one_minus_cos - axis.y() * sin_angle);
        matrix.set_scalar(9, axis.z() * axis.y() * one_minus_cos + axis.x() * sin_angle);
        matrix.set_scalar(10, cos_angle + axis.z() * axis.z() * one_minus_cos);
        matrix
    }

    /// A copy with the components of `vector` written into the first
    /// three entries of the bottom row (flat offsets 12 through 14).
    pub fn scaled(&self, vector: Vector<T, 3>) -> Self {
        let mut matrix = *self;
        matrix.set_scalar(12, vector.x());
        matrix.set_scalar(13, vector.y());
        matrix.set_scalar(14, vector.z());
        matrix
    }

    /// A copy with the components of `vector` added into the translation
    /// column (the last entry of each of the first three rows, flat
    /// offsets 3, 7 and 11).
    pub fn translated_by(&self, vector: Vector<T, 3>) -> Self {
        let mut matrix = *self;
        matrix.set_scalar(3, matrix.scalar(3) + vector.x());
        matrix.set_scalar(7, matrix.scalar(7) + vector.y());
        matrix.set_scalar(11, matrix.scalar(11) + vector.z());
        matrix
    }

    /// Compose a transform from translate, rotate and scale parts, in
    /// that order: `translate * rotate * scale`.
    ///
    /// Matrix multiplication is not commutative; the order is part of the
    /// contract.
    pub fn trs(translate: Self, rotate: Self, scale: Self) -> Self {
        translate * rotate * scale
    }
}

impl<T, const R: usize, const C: usize> Index<[usize; 2]> for Matrix<T, R, C> {
    type Output = T;

    fn index(&self, index: [usize; 2]) -> &T {
        &self.rows[index[0]][index[1]]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<[usize; 2]> for Matrix<T, R, C> {
    fn index_mut(&mut self, index: [usize; 2]) -> &mut T {
        &mut self.rows[index[0]][index[1]]
    }
}

impl<T, const R: usize, const C: usize> Index<MatrixIndex<2>> for Matrix<T, R, C> {
    type Output = T;

    fn index(&self, position: MatrixIndex<2>) -> &T {
        &self.rows[position.row()][position.column()]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<MatrixIndex<2>> for Matrix<T, R, C> {
    fn index_mut(&mut self, position: MatrixIndex<2>) -> &mut T {
        &mut self.rows[position.row()][position.column()]
    }
}

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    /// Render as `R` lines, one bracketed row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, values) in self.rows.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}]", values)?;
        }
        Ok(())
    }
}

impl<T: Clone, const R: usize, const C: usize> Pointwise for Matrix<T, R, C> {
    type Scalar = T;

    const SCALAR_COUNT: usize = R * C;

    fn scalar(&self, index: usize) -> T {
        assert!(
            index < Self::SCALAR_COUNT,
            "scalar index {} out of bounds for {}x{} matrix",
            index,
            R,
            C
        );
        let position = MatrixIndex::from_offset(index, Self::shape());
        self.rows[position.row()][position.column()].clone()
    }

    fn set_scalar(&mut self, index: usize, value: T) {
        assert!(
            index < Self::SCALAR_COUNT,
            "scalar index {} out of bounds for {}x{} matrix",
            index,
            R,
            C
        );
        let position = MatrixIndex::from_offset(index, Self::shape());
        self.rows[position.row()][position.column()] = value;
    }

    fn from_scalars(scalars: &[T]) -> Self {
        assert!(
            scalars.len() == Self::SCALAR_COUNT,
            "expected {} elements but slice has {}",
            Self::SCALAR_COUNT,
            scalars.len()
        );
        Self::from_fn(|position| scalars[position.offset(Self::shape())].clone())
    }
}

impl<T, const R: usize, const C: usize, const K: usize> Mul<Matrix<T, C, K>> for Matrix<T, R, C>
where
    T: Identities + Clone + Add<Output = T> + Mul<Output = T>,
{
    type Output = Matrix<T, R, K>;

    /// The matrix product: entry `(r, c)` is the dot product of row `r`
    /// of `self` and column `c` of `rhs`. The inner dimensions must match
    /// structurally, which the shape parameters enforce.
    fn mul(self, rhs: Matrix<T, C, K>) -> Matrix<T, R, K> {
        Matrix::from_fn(|position| self.row(position.row()).dot(&rhs.column(position.column())))
    }
}

impl<T, const R: usize, const C: usize> Add<T> for Matrix<T, R, C>
where
    T: Clone + Add<Output = T>,
{
    type Output = Self;

    /// Scalar broadcast addition: add `rhs` to every element.
    fn add(self, rhs: T) -> Self {
        self.pointwise_scalar(rhs, |a, b| a + b)
    }
}

impl<T, const R: usize, const C: usize> Sub<T> for Matrix<T, R, C>
where
    T: Clone + Sub<Output = T>,
{
    type Output = Self;

    /// Scalar broadcast subtraction: subtract `rhs` from every element.
    fn sub(self, rhs: T) -> Self {
        self.pointwise_scalar(rhs, |a, b| a - b)
    }
}

impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Clone + Mul<Output = T>,
{
    type Output = Self;

    /// Scalar broadcast multiplication: multiply every element by `rhs`.
    fn mul(self, rhs: T) -> Self {
        self.pointwise_scalar(rhs, |a, b| a * b)
    }
}

impl<T: Float, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Self;

    /// Scalar broadcast division: divide every element by `rhs`.
    ///
    /// A zero divisor fills the result with NaN rather than failing.
    fn div(self, rhs: T) -> Self {
        if rhs == T::zero() {
            Self::repeating(T::nan())
        } else {
            self.pointwise_scalar(rhs, |a, b| a / b)
        }
    }
}
