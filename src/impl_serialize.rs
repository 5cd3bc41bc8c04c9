use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, Error, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};

use crate::container;
use crate::matrix::Matrix;
use crate::vector::Vector;

// A vector encodes as a flat sequence of exactly N scalars in index
// order; a matrix encodes as R sequential rows. Decoding reads exactly
// the statically required count and reports a length error when fewer
// entries are present.

impl<T, const N: usize> Serialize for Vector<T, N>
where
    T: Serialize,
{
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(N)?;
        for element in self.iter() {
            tuple.serialize_element(element)?;
        }
        tuple.end()
    }
}

struct VectorVisitor<T, const N: usize> {
    marker: PhantomData<T>,
}

impl<'de, T, const N: usize> Visitor<'de> for VectorVisitor<T, N>
where
    T: Deserialize<'de>,
{
    type Value = Vector<T, N>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a sequence of {} scalars", N)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let elements = container::try_build(|index| {
            seq.next_element()?
                .ok_or_else(|| A::Error::invalid_length(index, &self))
        })?;
        Ok(Vector::from(elements))
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for Vector<T, N>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Vector<T, N>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(
            N,
            VectorVisitor {
                marker: PhantomData,
            },
        )
    }
}

impl<T, const R: usize, const C: usize> Serialize for Matrix<T, R, C>
where
    T: Serialize + Clone,
{
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(R)?;
        for row in 0..R {
            tuple.serialize_element(&self.row(row))?;
        }
        tuple.end()
    }
}

struct MatrixVisitor<T, const R: usize, const C: usize> {
    marker: PhantomData<T>,
}

impl<'de, T, const R: usize, const C: usize> Visitor<'de> for MatrixVisitor<T, R, C>
where
    T: Deserialize<'de>,
{
    type Value = Matrix<T, R, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a sequence of {} rows of {} scalars", R, C)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let rows: [Vector<T, C>; R] = container::try_build(|index| {
            seq.next_element()?
                .ok_or_else(|| A::Error::invalid_length(index, &self))
        })?;
        Ok(Matrix::new(Vector::from(rows)))
    }
}

impl<'de, T, const R: usize, const C: usize> Deserialize<'de> for Matrix<T, R, C>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Matrix<T, R, C>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(
            R,
            MatrixVisitor {
                marker: PhantomData,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix, Vector};
    use fixten_testing::TestCases;

    #[test]
    fn test_vector_serialize() {
        let v = Vector::from([1.0, 2.5, 3.0]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,2.5,3.0]");
    }

    #[test]
    fn test_vector_deserialize() {
        #[derive(Debug)]
        struct Case<'a> {
            json: &'a str,
            expected: Result<Vector<f32, 3>, String>,
        }

        let cases = [
            Case {
                json: "[1.0,2.0,3.0]",
                expected: Ok(Vector::from([1.0, 2.0, 3.0])),
            },
            // Fewer entries than the static count is a decode error.
            Case {
                json: "[1.0,2.0]",
                expected: Err("invalid length 2".into()),
            },
            Case {
                json: "[]",
                expected: Err("invalid length 0".into()),
            },
        ];

        cases.test_each(|Case { json, expected }| {
            let actual: Result<Vector<f32, 3>, String> =
                serde_json::from_str(json).map_err(|e| e.to_string());
            match (actual, expected) {
                (Ok(actual), Ok(expected)) => assert_eq!(actual, *expected),
                (Err(actual_err), Err(expected_err)) => assert!(
                    actual_err.contains(expected_err),
                    "expected \"{}\" to contain \"{}\"",
                    actual_err,
                    expected_err
                ),
                (actual, expected) => panic!("got {:?}, expected {:?}", actual, expected),
            }
        });
    }

    #[test]
    fn test_vector_round_trip() {
        let v = Vector::from([1, -2, 3, -4]);
        let json = serde_json::to_string(&v).unwrap();
        let back: Vector<i32, 4> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_matrix_serializes_row_major() {
        let m = Matrix::from_rows([[1, 2], [3, 4]]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1,2],[3,4]]");
    }

    #[test]
    fn test_matrix_round_trip() {
        let m = Matrix::from_rows([[1.5, 2.0], [3.25, 4.0], [5.0, 6.0]]);
        let json = serde_json::to_string(&m).unwrap();
        let back: Matrix<f64, 3, 2> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_matrix_deserialize_missing_row() {
        let result: Result<Matrix<i32, 2, 2>, _> = serde_json::from_str("[[1,2]]");
        let message = result.unwrap_err().to_string();
        assert!(
            message.contains("invalid length 1"),
            "unexpected error: {}",
            message
        );
    }

    #[test]
    fn test_matrix_deserialize_short_row() {
        let result: Result<Matrix<i32, 2, 2>, _> = serde_json::from_str("[[1,2],[3]]");
        let message = result.unwrap_err().to_string();
        assert!(
            message.contains("invalid length 1"),
            "unexpected error: {}",
            message
        );
    }
}
