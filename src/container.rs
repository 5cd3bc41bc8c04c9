//! Construction helpers for fixed-size element storage.
//!
//! `[T; N]` is the storage primitive underlying every container in this
//! crate: the length is fixed per instantiation, elements are contiguous
//! and random access is O(1). Indexing out of `[0, N)` panics. The
//! functions here provide the construction forms the container types
//! share: by generator, by exact-length slice and by lenient slice plus
//! default.

use crate::errors::SliceLengthError;

/// Build an array by invoking `f` exactly once per index, in ascending
/// index order.
pub fn build<T, const N: usize>(f: impl FnMut(usize) -> T) -> [T; N] {
    std::array::from_fn(f)
}

/// Fallible variant of [`build`]: invoke `f` per index in ascending order,
/// stopping at and propagating the first error.
pub fn try_build<T, E, const N: usize>(
    mut f: impl FnMut(usize) -> Result<T, E>,
) -> Result<[T; N], E> {
    let mut elements = Vec::with_capacity(N);
    for index in 0..N {
        elements.push(f(index)?);
    }
    match elements.try_into() {
        Ok(array) => Ok(array),
        Err(_) => unreachable!("generator produced a different element count"),
    }
}

/// Build an array from a slice, padding with clones of `default` when the
/// slice is shorter than `N` and ignoring extra elements when it is longer.
pub fn from_slice_or<T: Clone, const N: usize>(slice: &[T], default: &T) -> [T; N] {
    build(|index| slice.get(index).cloned().unwrap_or_else(|| default.clone()))
}

/// Build an array from a slice of exactly `N` elements.
///
/// Panics if `slice.len() != N`. Callers that cannot guarantee the length
/// should use [`checked_from_slice`] instead.
pub fn exact_from_slice<T: Clone, const N: usize>(slice: &[T]) -> [T; N] {
    assert!(
        slice.len() == N,
        "expected {} elements but slice has {}",
        N,
        slice.len()
    );
    build(|index| slice[index].clone())
}

/// Build an array from a slice of exactly `N` elements, reporting a length
/// mismatch as an error rather than panicking.
pub fn checked_from_slice<T: Clone, const N: usize>(
    slice: &[T],
) -> Result<[T; N], SliceLengthError> {
    if slice.len() != N {
        return Err(SliceLengthError {
            expected: N,
            actual: slice.len(),
        });
    }
    Ok(exact_from_slice(slice))
}

#[cfg(test)]
mod tests {
    use super::{build, checked_from_slice, exact_from_slice, from_slice_or, try_build};
    use crate::errors::SliceLengthError;

    #[test]
    fn test_build_visits_indices_in_order() {
        let mut visited = Vec::new();
        let array: [usize; 4] = build(|index| {
            visited.push(index);
            index * 10
        });
        assert_eq!(visited, [0, 1, 2, 3]);
        assert_eq!(array, [0, 10, 20, 30]);
    }

    #[test]
    fn test_try_build_ok() {
        let array: Result<[usize; 3], ()> = try_build(|index| Ok(index + 1));
        assert_eq!(array, Ok([1, 2, 3]));
    }

    #[test]
    fn test_try_build_stops_at_first_error() {
        let mut visited = Vec::new();
        let array: Result<[usize; 5], &str> = try_build(|index| {
            visited.push(index);
            if index == 2 {
                Err("boom")
            } else {
                Ok(index)
            }
        });
        assert_eq!(array, Err("boom"));
        assert_eq!(visited, [0, 1, 2]);
    }

    #[test]
    fn test_from_slice_or_pads_and_truncates() {
        let padded: [i32; 4] = from_slice_or(&[1, 2], &9);
        assert_eq!(padded, [1, 2, 9, 9]);

        let truncated: [i32; 2] = from_slice_or(&[1, 2, 3, 4], &9);
        assert_eq!(truncated, [1, 2]);
    }

    #[test]
    fn test_exact_from_slice() {
        let array: [i32; 3] = exact_from_slice(&[1, 2, 3]);
        assert_eq!(array, [1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "expected 3 elements but slice has 2")]
    fn test_exact_from_slice_wrong_length() {
        let _: [i32; 3] = exact_from_slice(&[1, 2]);
    }

    #[test]
    fn test_checked_from_slice() {
        let ok: Result<[i32; 2], _> = checked_from_slice(&[1, 2]);
        assert_eq!(ok, Ok([1, 2]));

        let err: Result<[i32; 2], _> = checked_from_slice(&[1, 2, 3]);
        assert_eq!(
            err,
            Err(SliceLengthError {
                expected: 2,
                actual: 3
            })
        );
    }
}
