//! Internal testing utilities for the fixten crates.

use std::fmt::Debug;
use std::panic::{RefUnwindSafe, UnwindSafe};

/// Utility for writing parametrized (aka. table-driven) tests.
///
/// To create a table-driven test:
///
/// 1. Import the `TestCases` trait
/// 2. Define a struct, conventionally named `Case`, holding the data for
///    one test case. It must implement `Debug`.
/// 3. Build a collection of `Case` values (an array or Vec), conventionally
///    named `cases`.
/// 4. Call `cases.test_each`, passing the test function as a closure.
///
/// `test_each` runs every case, catching panics. If all cases pass it
/// returns normally; otherwise it panics with the count and debug
/// representations of the failing cases, so a single run reports every
/// failing row of the table rather than stopping at the first.
///
/// ## Example
///
/// ```
/// use fixten_testing::TestCases;
///
/// // Add #[test] attribute
/// fn test_add() {
///   #[derive(Debug)]
///   struct Case {
///     a: i32,
///     b: i32,
///     expected: i32,
///   }
///
///   let cases = [
///     Case { a: 2, b: 2, expected: 4 },
///   ];
///
///   cases.test_each(|&Case { a, b, expected }| {
///     assert_eq!(a + b, expected);
///   });
/// }
/// # test_add();
/// ```
///
/// Cases and the test function must be unwind safe, since failures are
/// collected via [`catch_unwind`](std::panic::catch_unwind). In practice
/// this means avoiding interior mutability in case fields and captured
/// values; wrap offending values in
/// [`AssertUnwindSafe`](std::panic::AssertUnwindSafe) if needed.
pub trait TestCases {
    /// The data for a single test case.
    type Case;

    /// Call test function `test` with each case in `self`, catching any
    /// panics and reporting all failing cases at the end.
    fn test_each(self, test: impl Fn(&Self::Case) + RefUnwindSafe)
    where
        Self::Case: Debug + RefUnwindSafe;

    /// Variant of [`test_each`](TestCases::test_each) which passes a clone
    /// of each case to the test function, rather than a reference.
    ///
    /// Useful when working with an owned case is more convenient, at the
    /// cost of a clone per case.
    fn test_each_clone(self, test: impl Fn(Self::Case) + RefUnwindSafe)
    where
        Self::Case: Debug + Clone + UnwindSafe;
}

impl<I: IntoIterator> TestCases for I {
    type Case = I::Item;

    fn test_each(self, test: impl Fn(&I::Item) + RefUnwindSafe)
    where
        Self::Case: Debug + RefUnwindSafe,
    {
        let failures: Vec<_> = self
            .into_iter()
            .filter(|case| std::panic::catch_unwind(|| test(case)).is_err())
            .collect();
        report_failures(&failures);
    }

    fn test_each_clone(self, test: impl Fn(I::Item) + RefUnwindSafe)
    where
        Self::Case: Debug + Clone + UnwindSafe,
    {
        let mut failures = Vec::new();
        for case in self {
            let value = case.clone();
            let test = &test;
            if std::panic::catch_unwind(move || test(value)).is_err() {
                failures.push(case);
            }
        }
        report_failures(&failures);
    }
}

fn report_failures<C: Debug>(failures: &[C]) {
    assert_eq!(
        failures.len(),
        0,
        "{} test cases failed: {:?}",
        failures.len(),
        failures
    );
}
