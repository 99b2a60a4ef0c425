//! AND combinator - sequential composition of specifications
//!
//! This module provides the [`And`] combinator, which feeds the refined
//! output of one specification into the next, and [`AllOf`], which runs an
//! ordered list of value specs against the same value. Both stop at the
//! first failure.
//!
//! # Examples
//!
//! ```rust,ignore
//! use exact::prelude::*;
//!
//! // NotBlank runs first; Trim only sees non-blank input
//! let spec = and(NOT_BLANK, TRIM);
//! assert_eq!(spec.evaluate("  hi  ").unwrap(), "hi");
//! assert!(spec.evaluate("   ").is_err());
//! ```

use crate::foundation::{Outcome, Raise, Spec};

/// Sequences two specifications.
///
/// The left spec refines the raw input; its output is the raw input of the
/// right spec. If the left spec fails, its error is the result and the right
/// spec never runs.
///
/// # Type Parameters
///
/// * `L` - The first specification, `A -> B`
/// * `R` - The second specification, `B -> C`
///
/// # Examples
///
/// ```rust,ignore
/// use exact::combinators::And;
/// use exact::prelude::*;
///
/// let spec = And::new(NOT_BLANK, TRIM);
///
/// // Both steps succeed
/// assert_eq!(spec.evaluate(" a ").unwrap(), "a");
///
/// // First step fails
/// assert!(spec.evaluate("").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) specification.
    pub(crate) left: L,
    /// The right (second) specification.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    ///
    /// # Arguments
    ///
    /// * `left` - The first specification to apply
    /// * `right` - The specification applied to the first one's output
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left specification.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right specification.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right specifications.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Spec for And<L, R>
where
    L: Spec,
    R: Spec<Input = L::Output, Error = L::Error>,
{
    type Input = L::Input;
    type Output = R::Output;
    type Error = L::Error;

    fn spec(&self, cx: &mut Raise<L::Error>, raw: L::Input) -> Outcome<R::Output, L::Error> {
        let mid = self.left.spec(cx, raw)?;
        self.right.spec(cx, mid)
    }
}

/// Creates an `And` combinator from two specifications.
///
/// # Examples
///
/// ```rust,ignore
/// use exact::combinators::and;
/// use exact::prelude::*;
///
/// let spec = and(NOT_BLANK, TRIM);
/// assert_eq!(spec.evaluate(" x").unwrap(), "x");
/// ```
pub const fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Spec,
    R: Spec<Input = L::Output, Error = L::Error>,
{
    And::new(left, right)
}

/// Creates an `AllOf` combinator from a list of value specs.
///
/// Useful for a dynamic number of predicates over the same value.
///
/// # Examples
///
/// ```rust,ignore
/// use exact::combinators::{all_of, must_be};
/// use exact::prelude::*;
///
/// let spec = all_of(vec![
///     must_be(|n: &i32| *n > 0, |_| ExactError::new("must be positive")),
///     must_be(|n: &i32| n % 2 == 0, |_| ExactError::new("must be even")),
/// ]);
/// assert_eq!(spec.evaluate(4).unwrap(), 4);
/// assert_eq!(spec.evaluate(-4).unwrap_err().message(), "must be positive");
/// ```
#[must_use]
pub fn all_of<S, T>(specs: Vec<S>) -> AllOf<S>
where
    S: Spec<Input = T, Output = T>,
{
    AllOf { specs }
}

/// Conjunction of value specs over the same value.
///
/// Children run in list order; evaluation stops at the first failure and
/// yields that child's error unchanged. Each child's output becomes the next
/// child's input.
///
/// # Type Parameters
///
/// * `S` - The value spec type (`Input == Output`)
#[derive(Debug, Clone)]
pub struct AllOf<S> {
    specs: Vec<S>,
}

impl<S> AllOf<S> {
    /// Number of child specs.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns true if there are no child specs.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<S, T> Spec for AllOf<S>
where
    S: Spec<Input = T, Output = T>,
{
    type Input = T;
    type Output = T;
    type Error = S::Error;

    fn spec(&self, cx: &mut Raise<S::Error>, raw: T) -> Outcome<T, S::Error> {
        let mut value = raw;
        for spec in &self.specs {
            value = spec.spec(cx, value)?;
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{BoxSpec, ExactError, SpecExt};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MinLength {
        min: usize,
    }

    impl Spec for MinLength {
        type Input = String;
        type Output = String;
        type Error = ExactError;

        fn spec(&self, cx: &mut Raise<ExactError>, raw: String) -> Outcome<String> {
            cx.ensure(raw.len() >= self.min, || {
                ExactError::new(format!("must be at least {} characters", self.min))
            })?;
            Ok(raw)
        }
    }

    struct Length;

    impl Spec for Length {
        type Input = String;
        type Output = usize;
        type Error = ExactError;

        fn spec(&self, _cx: &mut Raise<ExactError>, raw: String) -> Outcome<usize> {
            Ok(raw.len())
        }
    }

    struct Counting<'a> {
        calls: &'a AtomicUsize,
    }

    impl Spec for Counting<'_> {
        type Input = String;
        type Output = String;
        type Error = ExactError;

        fn spec(&self, _cx: &mut Raise<ExactError>, raw: String) -> Outcome<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(raw)
        }
    }

    #[test]
    fn test_and_feeds_output_forward() {
        let spec = And::new(MinLength { min: 3 }, Length);
        assert_eq!(spec.evaluate("hello").unwrap(), 5);
    }

    #[test]
    fn test_and_first_error_wins() {
        let spec = And::new(MinLength { min: 5 }, MinLength { min: 10 });
        let error = spec.evaluate("hi").unwrap_err();
        assert_eq!(error.message(), "must be at least 5 characters");
    }

    #[test]
    fn test_and_second_error() {
        let spec = and(MinLength { min: 1 }, MinLength { min: 10 });
        let error = spec.evaluate("hello").unwrap_err();
        assert_eq!(error.message(), "must be at least 10 characters");
    }

    #[test]
    fn test_and_skips_right_on_failure() {
        let calls = AtomicUsize::new(0);
        let spec = MinLength { min: 5 }.and(Counting { calls: &calls });

        assert!(spec.evaluate("hi").is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(spec.evaluate("hello").is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_and_chain() {
        let spec = MinLength { min: 1 }
            .and(MinLength { min: 2 })
            .and(MinLength { min: 3 })
            .and(Length);
        assert_eq!(spec.evaluate("abc").unwrap(), 3);
        assert!(spec.evaluate("ab").is_err());
    }

    #[test]
    fn test_into_parts() {
        let spec = And::new(MinLength { min: 1 }, Length);
        let (left, _right) = spec.into_parts();
        assert_eq!(left.min, 1);
    }

    #[test]
    fn test_all_of_short_circuits() {
        let calls = AtomicUsize::new(0);
        let boxed: Vec<BoxSpec<String, String, ExactError>> =
            vec![Box::new(MinLength { min: 5 }), Box::new(MinLength { min: 1 })];
        let spec = all_of(boxed);
        assert_eq!(spec.len(), 2);
        assert!(spec.evaluate("abc").is_err());

        let counted = all_of(vec![
            MinLength { min: 5 }.and(Counting { calls: &calls }),
            MinLength { min: 1 }.and(Counting { calls: &calls }),
        ]);
        assert!(counted.evaluate("abc").is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_all_of_empty_accepts() {
        let spec: AllOf<MinLength> = all_of(Vec::new());
        assert!(spec.is_empty());
        assert_eq!(spec.evaluate("").unwrap(), "");
    }
}
