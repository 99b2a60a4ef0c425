//! The computation context a specification body runs in.
//!
//! Every evaluation gets a fresh [`Raise<E>`]. The body aborts by calling
//! [`Raise::raise`] (or one of the helpers built on it) and propagating the
//! returned [`Raised`] with `?`. Because [`Raised`] can only be produced by a
//! context, every failure of an evaluation flows through a raise.
//!
//! A body may also inspect a [`Raised`] and recover from it, for example to
//! fall back to a default when an embedded spec fails. Only the `Raised` the
//! body finally returns decides the outcome.
//!
//! # Examples
//!
//! ```rust,ignore
//! use exact::foundation::{ExactError, Outcome, Raise};
//!
//! fn positive(cx: &mut Raise<ExactError>, raw: i32) -> Outcome<i32> {
//!     cx.ensure(raw > 0, || ExactError::new("must be positive"))?;
//!     Ok(raw)
//! }
//! ```

use std::marker::PhantomData;

use crate::foundation::{ExactError, Spec};

// ============================================================================
// OUTCOME
// ============================================================================

/// The result of a specification body.
///
/// The error side is a [`Raised`] token rather than a bare error so that
/// only a [`Raise`] context can fail an evaluation.
pub type Outcome<T, E = ExactError> = Result<T, Raised<E>>;

/// An error that has been raised through a [`Raise`] context.
///
/// Bodies never build this themselves; they receive it from
/// [`Raise::raise`] and propagate it with `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a raised error aborts the evaluation only when propagated with `?`"]
pub struct Raised<E> {
    error: E,
}

impl<E> Raised<E> {
    /// Returns a reference to the raised error.
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Extracts the raised error.
    pub fn into_error(self) -> E {
        self.error
    }
}

// ============================================================================
// RAISE
// ============================================================================

/// A single-use computation context parameterized by its error type.
///
/// Created fresh for every evaluation and for every embedded
/// sub-evaluation; never shared between evaluations.
#[derive(Debug)]
pub struct Raise<E> {
    spec: &'static str,
    depth: usize,
    _error: PhantomData<fn(E)>,
}

impl<E> Raise<E> {
    /// Creates the context for a top-level evaluation of `spec`.
    pub(crate) fn root(spec: &'static str) -> Self {
        Self::at_depth(spec, 0)
    }

    pub(crate) fn at_depth(spec: &'static str, depth: usize) -> Self {
        Self {
            spec,
            depth,
            _error: PhantomData,
        }
    }

    /// Creates the context for a sub-evaluation embedded in this one.
    pub(crate) fn nested<E2>(&self, spec: &'static str) -> Raise<E2> {
        Raise::at_depth(spec, self.depth + 1)
    }

    /// Name of the specification this context evaluates.
    pub fn spec_name(&self) -> &'static str {
        self.spec
    }

    /// Embed depth: `0` for a top-level evaluation.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Aborts the evaluation with `error`.
    ///
    /// The returned value must be propagated with `?` (or returned); nothing
    /// after that point runs.
    pub fn raise<T>(&mut self, error: E) -> Outcome<T, E> {
        tracing::trace!(spec = self.spec, depth = self.depth, "evaluation raised");
        Err(Raised { error })
    }

    /// Raises the lazily built error when `condition` is false.
    pub fn ensure<F>(&mut self, condition: bool, error: F) -> Outcome<(), E>
    where
        F: FnOnce() -> E,
    {
        if condition {
            Ok(())
        } else {
            self.raise(error())
        }
    }

    /// Unwraps `value`, raising the lazily built error when it is `None`.
    pub fn ensure_some<T, F>(&mut self, value: Option<T>, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match value {
            Some(value) => Ok(value),
            None => self.raise(error()),
        }
    }

    /// Lifts a plain `Result` into this context.
    pub fn bind<T>(&mut self, result: Result<T, E>) -> Outcome<T, E> {
        match result {
            Ok(value) => Ok(value),
            Err(error) => self.raise(error),
        }
    }

    /// Evaluates `sub` against `raw` in a nested context.
    ///
    /// On success the refined value is returned and the body continues. On
    /// failure the sub-error is translated with `map_error` and raised here.
    pub fn embed<S, F>(&mut self, sub: &S, raw: S::Input, map_error: F) -> Outcome<S::Output, E>
    where
        S: Spec + ?Sized,
        F: FnOnce(S::Error) -> E,
    {
        let mut inner = self.nested::<S::Error>(sub.name());
        match sub.spec(&mut inner, raw) {
            Ok(value) => Ok(value),
            Err(raised) => self.raise(map_error(raised.into_error())),
        }
    }

    /// Like [`embed`](Self::embed), translating the sub-error with `From`.
    pub fn embed_into<S>(&mut self, sub: &S, raw: S::Input) -> Outcome<S::Output, E>
    where
        S: Spec + ?Sized,
        E: From<S::Error>,
    {
        self.embed(sub, raw, E::from)
    }
}

impl Raise<ExactError> {
    /// Raises the generic "Failed condition." error when `condition` is false.
    pub fn check(&mut self, condition: bool) -> Outcome<()> {
        self.ensure(condition, ExactError::failed_condition)
    }
}

// ============================================================================
// TESTS
// ============================================================================
