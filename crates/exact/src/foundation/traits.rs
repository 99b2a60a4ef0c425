//! Core traits for the refinement system
//!
//! [`Spec`] is the one contract every specification implements. [`SpecExt`]
//! derives the extraction modes and the combinator methods from it; it is
//! blanket-implemented and cannot be specialized per specification.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{ExactException, Outcome, Raise};

// ============================================================================
// CORE SPEC TRAIT
// ============================================================================

/// A pure mapping from a raw input to a refined output that may fail.
///
/// The body runs inside a [`Raise`] context created for this evaluation
/// only. Implementations must be deterministic and free of side effects so
/// that composed specifications can be reasoned about and evaluated
/// concurrently from independent call sites.
///
/// # Type Parameters
///
/// * `Input` - The raw value consumed by the evaluation
/// * `Output` - The refined value produced on success
/// * `Error` - The failure raised on a violation
///
/// # Examples
///
/// ```rust,ignore
/// use exact::foundation::{ExactError, Outcome, Raise, Spec};
///
/// pub struct NotBlankString(String);
///
/// pub struct NotBlankStringSpec;
///
/// impl Spec for NotBlankStringSpec {
///     type Input = String;
///     type Output = NotBlankString;
///     type Error = ExactError;
///
///     fn spec(&self, cx: &mut Raise<ExactError>, raw: String) -> Outcome<NotBlankString> {
///         cx.ensure(!raw.trim().is_empty(), || ExactError::new("cannot be blank"))?;
///         Ok(NotBlankString(raw))
///     }
/// }
/// ```
pub trait Spec {
    /// The raw value being refined.
    type Input;

    /// The refined value produced on success.
    type Output;

    /// The error raised on failure.
    type Error;

    /// The specification body.
    ///
    /// Fails only through `cx`; propagate every
    /// [`Raised`](crate::foundation::Raised) with `?`.
    fn spec(
        &self,
        cx: &mut Raise<Self::Error>,
        raw: Self::Input,
    ) -> Outcome<Self::Output, Self::Error>;

    /// Returns the name of this specification.
    ///
    /// Used as the `spec` field of log events.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<S: Spec + ?Sized> Spec for &S {
    type Input = S::Input;
    type Output = S::Output;
    type Error = S::Error;

    fn spec(&self, cx: &mut Raise<S::Error>, raw: S::Input) -> Outcome<S::Output, S::Error> {
        (**self).spec(cx, raw)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<S: Spec + ?Sized> Spec for Box<S> {
    type Input = S::Input;
    type Output = S::Output;
    type Error = S::Error;

    fn spec(&self, cx: &mut Raise<S::Error>, raw: S::Input) -> Outcome<S::Output, S::Error> {
        (**self).spec(cx, raw)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<S: Spec + ?Sized> Spec for Arc<S> {
    type Input = S::Input;
    type Output = S::Output;
    type Error = S::Error;

    fn spec(&self, cx: &mut Raise<S::Error>, raw: S::Input) -> Outcome<S::Output, S::Error> {
        (**self).spec(cx, raw)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// A type-erased specification.
pub type BoxSpec<A, R, E> = Box<dyn Spec<Input = A, Output = R, Error = E> + Send + Sync>;

// ============================================================================
// SPEC EXTENSION TRAIT
// ============================================================================

/// Extraction modes and combinator methods, derived from [`Spec`].
///
/// Automatically implemented for every [`Spec`].
///
/// # Examples
///
/// ```rust,ignore
/// use exact::prelude::*;
///
/// let spec = NOT_BLANK.and(TRIM);
///
/// assert_eq!(spec.evaluate("  hi  ").unwrap(), "hi");
/// assert_eq!(spec.evaluate_or_none("   "), None);
/// assert!(spec.evaluate_or_throw("   ").is_err());
/// ```
pub trait SpecExt: Spec {
    /// Result mode: evaluates `raw` in a fresh context.
    fn evaluate(&self, raw: impl Into<Self::Input>) -> Result<Self::Output, Self::Error> {
        let name = self.name();
        let mut cx = Raise::root(name);
        match self.spec(&mut cx, raw.into()) {
            Ok(refined) => {
                tracing::trace!(spec = name, "specification accepted input");
                Ok(refined)
            }
            Err(raised) => {
                tracing::debug!(spec = name, "specification rejected input");
                Err(raised.into_error())
            }
        }
    }

    /// Nullable mode: the refined value, or `None` on any failure.
    ///
    /// The error detail is discarded.
    fn evaluate_or_none(&self, raw: impl Into<Self::Input>) -> Option<Self::Output> {
        self.evaluate(raw).ok()
    }

    /// Throwing mode: failures are wrapped in the uniform [`ExactException`].
    fn evaluate_or_throw(&self, raw: impl Into<Self::Input>) -> Result<Self::Output, ExactException>
    where
        Self::Error: fmt::Display + Send + Sync + 'static,
    {
        self.evaluate(raw).map_err(|error| {
            let exception = ExactException::new(error);
            tracing::debug!(spec = self.name(), error = %exception, "throwing extraction failed");
            exception
        })
    }

    /// Throwing mode for call sites where failure is a programming error.
    ///
    /// Panics with the [`ExactException`] as the panic payload, so it can be
    /// recovered with `std::panic::catch_unwind` and downcast.
    #[track_caller]
    fn evaluate_or_panic(&self, raw: impl Into<Self::Input>) -> Self::Output
    where
        Self::Error: fmt::Display + Send + Sync + 'static,
    {
        match self.evaluate_or_throw(raw) {
            Ok(refined) => refined,
            Err(exception) => std::panic::panic_any(exception),
        }
    }

    /// Sequences two specifications: the output of `self` feeds `next`.
    ///
    /// Short-circuits on the first failure; `next` never runs when `self`
    /// fails.
    fn and<S>(self, next: S) -> And<Self, S>
    where
        Self: Sized,
        S: Spec<Input = Self::Output, Error = Self::Error>,
    {
        And::new(self, next)
    }

    /// Applies a total transform to the refined output.
    fn map<F, O>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> O,
    {
        Map::new(self, transform)
    }

    /// Translates the error of this specification.
    fn map_error<F, E>(self, map: F) -> MapError<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Error) -> E,
    {
        MapError::new(self, map)
    }

    /// Boxes this specification, erasing its type.
    fn boxed(self) -> BoxSpec<Self::Input, Self::Output, Self::Error>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

// Automatically implement SpecExt for all Spec implementations
impl<T: Spec + ?Sized> SpecExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

pub use crate::combinators::and::And;
pub use crate::combinators::map::{Map, MapError};

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ExactError;

    struct Positive;

    impl Spec for Positive {
        type Input = i64;
        type Output = i64;
        type Error = ExactError;

        fn spec(&self, cx: &mut Raise<ExactError>, raw: i64) -> Outcome<i64> {
            cx.ensure(raw > 0, || ExactError::new("must be positive"))?;
            Ok(raw)
        }
    }

    #[test]
    fn test_result_mode() {
        assert_eq!(Positive.evaluate(3).unwrap(), 3);
        assert_eq!(Positive.evaluate(-3).unwrap_err().message(), "must be positive");
    }

    #[test]
    fn test_nullable_mode() {
        assert_eq!(Positive.evaluate_or_none(3), Some(3));
        assert_eq!(Positive.evaluate_or_none(0), None);
    }

    #[test]
    fn test_throwing_mode() {
        let exception = Positive.evaluate_or_throw(0).unwrap_err();
        assert_eq!(exception.to_string(), "exact error: must be positive");
    }

    #[test]
    fn test_panicking_mode_payload() {
        let caught = std::panic::catch_unwind(|| Positive.evaluate_or_panic(-1)).unwrap_err();
        let exception = caught.downcast::<ExactException>().unwrap();
        assert_eq!(exception.message(), "must be positive");
    }

    #[test]
    fn test_references_and_boxes_are_specs() {
        let boxed = Positive.boxed();
        assert_eq!(boxed.evaluate(1).unwrap(), 1);
        assert_eq!((&Positive).evaluate(2).unwrap(), 2);
        assert_eq!(Arc::new(Positive).evaluate(4).unwrap(), 4);
    }

    #[test]
    fn test_spec_name() {
        assert!(Positive.name().contains("Positive"));
        assert_eq!((&Positive).name(), Positive.name());
    }
}
