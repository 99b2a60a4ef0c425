//! MAP combinators - transforming outputs and errors
//!
//! - [`Map`] applies a total function to the refined output.
//! - [`MapError`] translates the error of a specification, the combinator
//!   form of [`Raise::embed`].

use crate::foundation::{Outcome, Raise, Spec};

// ============================================================================
// MAP
// ============================================================================

/// Applies a total transform to the output of a specification.
///
/// The transform never fails and only runs when the inner spec succeeds.
///
/// # Examples
///
/// ```rust,ignore
/// use exact::prelude::*;
///
/// let length = NOT_BLANK.map(|s: String| s.len());
/// assert_eq!(length.evaluate("abc").unwrap(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Map<S, F> {
    pub(crate) inner: S,
    transform: F,
}

impl<S, F> Map<S, F> {
    /// Wraps `inner` with the given transform.
    pub const fn new(inner: S, transform: F) -> Self {
        Self { inner, transform }
    }

    /// Returns a reference to the inner specification.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S, F, O> Spec for Map<S, F>
where
    S: Spec,
    F: Fn(S::Output) -> O,
{
    type Input = S::Input;
    type Output = O;
    type Error = S::Error;

    fn spec(&self, cx: &mut Raise<S::Error>, raw: S::Input) -> Outcome<O, S::Error> {
        self.inner.spec(cx, raw).map(&self.transform)
    }
}

// ============================================================================
// MAP ERROR
// ============================================================================

/// Translates the error of a specification.
///
/// The inner spec is evaluated in a nested context; on failure its error is
/// passed through `map` and raised in the outer context.
///
/// # Examples
///
/// ```rust,ignore
/// use exact::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// enum UsernameError {
///     Invalid,
/// }
///
/// let spec = NOT_BLANK.map_error(|_| UsernameError::Invalid);
/// assert_eq!(spec.evaluate("").unwrap_err(), UsernameError::Invalid);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MapError<S, F> {
    pub(crate) inner: S,
    map: F,
}

impl<S, F> MapError<S, F> {
    /// Wraps `inner` with the given error translation.
    pub const fn new(inner: S, map: F) -> Self {
        Self { inner, map }
    }

    /// Returns a reference to the inner specification.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S, F, E> Spec for MapError<S, F>
where
    S: Spec,
    F: Fn(S::Error) -> E,
{
    type Input = S::Input;
    type Output = S::Output;
    type Error = E;

    fn spec(&self, cx: &mut Raise<E>, raw: S::Input) -> Outcome<S::Output, E> {
        cx.embed(&self.inner, raw, &self.map)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
