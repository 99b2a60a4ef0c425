//! Specifications built from closures
//!
//! - [`from_fn`]: a spec whose body is a closure over the context.
//! - [`exact`]: a spec from a predicate and a constructor.
//! - [`must_be`]: a value spec from a predicate and an error factory.

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{ExactError, Outcome, Raise, Spec};

// ============================================================================
// FROM FN
// ============================================================================

/// A specification whose body is a closure.
///
/// Created by [`from_fn`].
pub struct FromFn<F, A, R, E> {
    body: F,
    _types: PhantomData<fn(A) -> (R, E)>,
}

impl<F, A, R, E> Spec for FromFn<F, A, R, E>
where
    F: Fn(&mut Raise<E>, A) -> Outcome<R, E>,
{
    type Input = A;
    type Output = R;
    type Error = E;

    fn spec(&self, cx: &mut Raise<E>, raw: A) -> Outcome<R, E> {
        (self.body)(cx, raw)
    }
}

impl<F: Clone, A, R, E> Clone for FromFn<F, A, R, E> {
    fn clone(&self) -> Self {
        Self {
            body: self.body.clone(),
            _types: PhantomData,
        }
    }
}

impl<F, A, R, E> fmt::Debug for FromFn<F, A, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Creates a specification from a closure body.
///
/// # Examples
///
/// ```rust,ignore
/// use exact::combinators::from_fn;
/// use exact::prelude::*;
///
/// let port = from_fn(|cx: &mut Raise<ExactError>, raw: u32| {
///     cx.ensure(raw <= 65_535, || ExactError::new("out of range"))?;
///     Ok(raw as u16)
/// });
/// assert_eq!(port.evaluate(8080u32).unwrap(), 8080);
/// ```
pub const fn from_fn<F, A, R, E>(body: F) -> FromFn<F, A, R, E>
where
    F: Fn(&mut Raise<E>, A) -> Outcome<R, E>,
{
    FromFn {
        body,
        _types: PhantomData,
    }
}

// ============================================================================
// EXACT
// ============================================================================

/// A predicate plus a constructor.
///
/// Created by [`exact`].
pub struct Exact<P, C, A, R> {
    predicate: P,
    constructor: C,
    _types: PhantomData<fn(A) -> R>,
}

impl<P, C, A, R> Spec for Exact<P, C, A, R>
where
    P: Fn(&A) -> bool,
    C: Fn(A) -> R,
    A: fmt::Debug,
{
    type Input = A;
    type Output = R;
    type Error = ExactError;

    fn spec(&self, cx: &mut Raise<ExactError>, raw: A) -> Outcome<R> {
        cx.ensure((self.predicate)(&raw), || ExactError::no_match(&raw))?;
        Ok((self.constructor)(raw))
    }
}

impl<P: Clone, C: Clone, A, R> Clone for Exact<P, C, A, R> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            constructor: self.constructor.clone(),
            _types: PhantomData,
        }
    }
}

impl<P, C, A, R> fmt::Debug for Exact<P, C, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exact").finish_non_exhaustive()
    }
}

/// Creates a specification from a predicate and a constructor.
///
/// Inputs rejected by the predicate fail with
/// `Value (<raw>) doesn't match the predicate`.
///
/// # Examples
///
/// ```rust,ignore
/// use exact::combinators::exact;
/// use exact::prelude::*;
///
/// struct Even(u32);
///
/// let even = exact(|n: &u32| n % 2 == 0, Even);
/// assert_eq!(even.evaluate(4u32).unwrap().0, 4);
/// assert_eq!(
///     even.evaluate(3u32).unwrap_err().message(),
///     "Value (3) doesn't match the predicate"
/// );
/// ```
pub const fn exact<P, C, A, R>(predicate: P, constructor: C) -> Exact<P, C, A, R>
where
    P: Fn(&A) -> bool,
    C: Fn(A) -> R,
{
    Exact {
        predicate,
        constructor,
        _types: PhantomData,
    }
}

// ============================================================================
// MUST BE
// ============================================================================

/// A value spec from a predicate and an error factory.
///
/// Created by [`must_be`].
pub struct MustBe<P, F, T, E> {
    check: P,
    error: F,
    _types: PhantomData<fn(T) -> E>,
}

impl<P, F, T, E> Spec for MustBe<P, F, T, E>
where
    P: Fn(&T) -> bool,
    F: Fn(&T) -> E,
{
    type Input = T;
    type Output = T;
    type Error = E;

    fn spec(&self, cx: &mut Raise<E>, raw: T) -> Outcome<T, E> {
        cx.ensure((self.check)(&raw), || (self.error)(&raw))?;
        Ok(raw)
    }
}

impl<P: Clone, F: Clone, T, E> Clone for MustBe<P, F, T, E> {
    fn clone(&self) -> Self {
        Self {
            check: self.check.clone(),
            error: self.error.clone(),
            _types: PhantomData,
        }
    }
}

impl<P, F, T, E> fmt::Debug for MustBe<P, F, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MustBe").finish_non_exhaustive()
    }
}

/// Creates a value spec that keeps values passing `check`.
///
/// The error is only built for rejected values.
///
/// # Examples
///
/// ```rust,ignore
/// use exact::combinators::must_be;
/// use exact::prelude::*;
///
/// let short = must_be(|s: &String| s.len() < 100, |_| ExactError::new("too long"));
/// assert!(short.evaluate("bob").is_ok());
/// ```
pub const fn must_be<P, F, T, E>(check: P, error: F) -> MustBe<P, F, T, E>
where
    P: Fn(&T) -> bool,
    F: Fn(&T) -> E,
{
    MustBe {
        check,
        error,
        _types: PhantomData,
    }
}
