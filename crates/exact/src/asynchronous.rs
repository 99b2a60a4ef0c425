//! Suspendable specifications
//!
//! [`AsyncSpec`] mirrors [`Spec`] for bodies that await, for example a
//! uniqueness lookup against a store. Control flow is identical: the body
//! raises through its [`Raise`] context and the first failure wins. An
//! evaluation is a single future that never spawns background work;
//! dropping it cancels the evaluation and no further step runs.
//!
//! # Examples
//!
//! ```rust,ignore
//! use exact::asynchronous::{AsyncSpec, AsyncSpecExt};
//! use exact::prelude::*;
//!
//! struct Unused<'a> {
//!     taken: &'a [&'a str],
//! }
//!
//! impl AsyncSpec for Unused<'_> {
//!     type Input = String;
//!     type Output = String;
//!     type Error = ExactError;
//!
//!     async fn spec(&self, cx: &mut Raise<ExactError>, raw: String) -> Outcome<String> {
//!         tokio::task::yield_now().await;
//!         cx.ensure(!self.taken.contains(&raw.as_str()), || ExactError::new("taken"))?;
//!         Ok(raw)
//!     }
//! }
//!
//! let spec = Immediate::new(NOT_BLANK).and(Unused { taken: &["root"] });
//! assert!(spec.evaluate("alice").await.is_ok());
//! ```

use std::fmt;
use std::future::Future;

use crate::foundation::{ExactException, Outcome, Raise, Spec};

// ============================================================================
// ASYNC SPEC TRAIT
// ============================================================================

/// A specification whose body may suspend.
///
/// Implementations may use `async fn spec`; the returned future must be
/// `Send`.
pub trait AsyncSpec: Send + Sync {
    /// The raw value being refined.
    type Input: Send;

    /// The refined value produced on success.
    type Output: Send;

    /// The error raised on failure.
    type Error: Send;

    /// The specification body.
    fn spec(
        &self,
        cx: &mut Raise<Self::Error>,
        raw: Self::Input,
    ) -> impl Future<Output = Outcome<Self::Output, Self::Error>> + Send;

    /// Returns the name of this specification.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<S: AsyncSpec + ?Sized> AsyncSpec for &S {
    type Input = S::Input;
    type Output = S::Output;
    type Error = S::Error;

    fn spec(
        &self,
        cx: &mut Raise<S::Error>,
        raw: S::Input,
    ) -> impl Future<Output = Outcome<S::Output, S::Error>> + Send {
        (**self).spec(cx, raw)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

// ============================================================================
// ASYNC SPEC EXTENSION TRAIT
// ============================================================================

/// Extraction modes and combinator methods for [`AsyncSpec`].
///
/// Automatically implemented for every [`AsyncSpec`].
pub trait AsyncSpecExt: AsyncSpec {
    /// Result mode: evaluates `raw` in a fresh context.
    fn evaluate(
        &self,
        raw: impl Into<Self::Input>,
    ) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send {
        let raw = raw.into();
        async move {
            let name = self.name();
            let mut cx = Raise::root(name);
            match self.spec(&mut cx, raw).await {
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
    }

    /// Nullable mode: the refined value, or `None` on any failure.
    fn evaluate_or_none(
        &self,
        raw: impl Into<Self::Input>,
    ) -> impl Future<Output = Option<Self::Output>> + Send {
        let evaluation = self.evaluate(raw);
        async move { evaluation.await.ok() }
    }

    /// Throwing mode: failures are wrapped in the uniform [`ExactException`].
    fn evaluate_or_throw(
        &self,
        raw: impl Into<Self::Input>,
    ) -> impl Future<Output = Result<Self::Output, ExactException>> + Send
    where
        Self::Error: fmt::Display + Sync + 'static,
    {
        let evaluation = self.evaluate(raw);
        async move {
            evaluation.await.map_err(|error| {
                let exception = ExactException::new(error);
                tracing::debug!(error = %exception, "throwing extraction failed");
                exception
            })
        }
    }

    /// Sequences two suspendable specifications.
    fn and<S>(self, next: S) -> AsyncAnd<Self, S>
    where
        Self: Sized,
        S: AsyncSpec<Input = Self::Output, Error = Self::Error>,
    {
        AsyncAnd::new(self, next)
    }
}

impl<T: AsyncSpec + ?Sized> AsyncSpecExt for T {}

// ============================================================================
// CONTEXT
// ============================================================================

impl<E> Raise<E> {
    /// Evaluates a suspendable `sub` against `raw` in a nested context.
    ///
    /// Same contract as [`Raise::embed`].
    pub async fn embed_async<S, F>(
        &mut self,
        sub: &S,
        raw: S::Input,
        map_error: F,
    ) -> Outcome<S::Output, E>
    where
        S: AsyncSpec + ?Sized,
        F: FnOnce(S::Error) -> E,
    {
        let mut inner = self.nested::<S::Error>(sub.name());
        match sub.spec(&mut inner, raw).await {
            Ok(value) => Ok(value),
            Err(raised) => self.raise(map_error(raised.into_error())),
        }
    }
}

// ============================================================================
// COMBINATORS
// ============================================================================

/// Sequences two suspendable specifications; the first failure wins.
#[derive(Debug, Clone, Copy)]
pub struct AsyncAnd<L, R> {
    left: L,
    right: R,
}

impl<L, R> AsyncAnd<L, R> {
    /// Creates a new `AsyncAnd` combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> AsyncSpec for AsyncAnd<L, R>
where
    L: AsyncSpec,
    R: AsyncSpec<Input = L::Output, Error = L::Error>,
{
    type Input = L::Input;
    type Output = R::Output;
    type Error = L::Error;

    async fn spec(&self, cx: &mut Raise<L::Error>, raw: L::Input) -> Outcome<R::Output, L::Error> {
        let mid = self.left.spec(cx, raw).await?;
        self.right.spec(cx, mid).await
    }
}

/// Lifts a synchronous [`Spec`] into the suspendable family.
///
/// The body runs to completion on first poll.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate<S>(S);

impl<S> Immediate<S> {
    /// Wraps `spec`.
    pub const fn new(spec: S) -> Self {
        Self(spec)
    }

    /// Returns a reference to the wrapped specification.
    pub fn inner(&self) -> &S {
        &self.0
    }
}

impl<S> AsyncSpec for Immediate<S>
where
    S: Spec + Send + Sync,
    S::Input: Send,
    S::Output: Send,
    S::Error: Send,
{
    type Input = S::Input;
    type Output = S::Output;
    type Error = S::Error;

    async fn spec(&self, cx: &mut Raise<S::Error>, raw: S::Input) -> Outcome<S::Output, S::Error> {
        self.0.spec(cx, raw)
    }

    fn name(&self) -> &'static str {
        self.0.name()
    }
}

// ============================================================================
// TESTS
// ============================================================================
