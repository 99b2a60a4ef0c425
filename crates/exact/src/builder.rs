//! Builder chain for defining specifications step by step
//!
//! An alternative to writing a body against [`Raise`] directly: the raw value
//! is threaded through `requirement` / `map` / `map_or_fail` steps and ends in
//! `finish`. Internally the chain carries a poisonable `Result`; once a step
//! fails, no later step's closure runs.
//!
//! # Examples
//!
//! ```rust,ignore
//! use exact::prelude::*;
//!
//! pub struct Port(u16);
//!
//! let port = exact_builder(|b: ExactBuilder<String>| {
//!     b.requirement(|s| !s.trim().is_empty())
//!         .map(|s| s.trim().to_owned())
//!         .map_or_fail(|cx, s| {
//!             let n = cx.bind(s.parse::<u16>().map_err(|e| ExactError::new(e.to_string())))?;
//!             Ok(n)
//!         })
//!         .finish(Port)
//! });
//!
//! assert!(port.evaluate(" 8080 ").is_ok());
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{ExactError, Outcome, Raise, Raised, Spec};

// ============================================================================
// EXACT BUILDER
// ============================================================================

/// A step of a builder chain.
///
/// Holds the current value, or the error of the step that poisoned the
/// chain.
#[must_use = "builder methods must be chained or finished"]
pub struct ExactBuilder<A, E = ExactError> {
    value: Result<A, E>,
    spec: &'static str,
    depth: usize,
}

impl<A, E> ExactBuilder<A, E> {
    /// Seeds a standalone chain with `raw`.
    pub fn new(raw: A) -> Self {
        Self::seeded(raw, "builder", 0)
    }

    pub(crate) fn seeded(raw: A, spec: &'static str, depth: usize) -> Self {
        Self {
            value: Ok(raw),
            spec,
            depth,
        }
    }

    fn step<B>(self, step: &'static str, next: impl FnOnce(A) -> Result<B, E>) -> ExactBuilder<B, E> {
        let Self { value, spec, depth } = self;
        let value = match value {
            Ok(current) => {
                let next = next(current);
                if next.is_err() {
                    tracing::trace!(spec, step, "builder step poisoned the chain");
                }
                next
            }
            Err(error) => Err(error),
        };
        ExactBuilder { value, spec, depth }
    }

    /// Returns true once a step has failed.
    pub fn is_poisoned(&self) -> bool {
        self.value.is_err()
    }

    /// Keeps the value if `predicate` holds; otherwise fails with `error`.
    pub fn requirement_or<P, F>(self, predicate: P, error: F) -> Self
    where
        P: FnOnce(&A) -> bool,
        F: FnOnce(&A) -> E,
    {
        self.step("requirement", |a| {
            if predicate(&a) {
                Ok(a)
            } else {
                Err(error(&a))
            }
        })
    }

    /// Keeps the value if `predicate` holds.
    ///
    /// Otherwise fails with `Predicate failed for value: <value>`, using the
    /// value's `Debug` rendering.
    pub fn requirement<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
        A: fmt::Debug,
        E: From<ExactError>,
    {
        self.requirement_or(predicate, |a| E::from(ExactError::predicate_failed(a)))
    }

    /// Applies a total transform.
    pub fn map<B, F>(self, transform: F) -> ExactBuilder<B, E>
    where
        F: FnOnce(A) -> B,
    {
        self.step("map", |a| Ok(transform(a)))
    }

    /// Applies a partial transform that may raise.
    ///
    /// The closure runs in its own context, so it can use every [`Raise`]
    /// helper, including embedding sub-specifications.
    pub fn map_or_fail<B, F>(self, transform: F) -> ExactBuilder<B, E>
    where
        F: FnOnce(&mut Raise<E>, A) -> Outcome<B, E>,
    {
        let (spec, depth) = (self.spec, self.depth);
        self.step("map_or_fail", |a| {
            let mut cx = Raise::at_depth(spec, depth + 1);
            transform(&mut cx, a).map_err(Raised::into_error)
        })
    }

    /// Terminal step: builds the refined value.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step.
    pub fn finish<R, F>(self, constructor: F) -> Result<R, E>
    where
        F: FnOnce(A) -> R,
    {
        self.value.map(constructor)
    }
}

impl<A: fmt::Debug, E: fmt::Debug> fmt::Debug for ExactBuilder<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExactBuilder")
            .field("value", &self.value)
            .field("spec", &self.spec)
            .finish()
    }
}

// ============================================================================
// BUILDER SPEC
// ============================================================================

/// A specification defined by a builder chain.
///
/// Created by [`exact_builder`].
pub struct BuilderSpec<F, A, R, E = ExactError> {
    build: F,
    _types: PhantomData<fn(A) -> (R, E)>,
}

impl<F, A, R, E> Spec for BuilderSpec<F, A, R, E>
where
    F: Fn(ExactBuilder<A, E>) -> Result<R, E>,
{
    type Input = A;
    type Output = R;
    type Error = E;

    fn spec(&self, cx: &mut Raise<E>, raw: A) -> Outcome<R, E> {
        let seed = ExactBuilder::seeded(raw, cx.spec_name(), cx.depth());
        cx.bind((self.build)(seed))
    }
}

impl<F, A, R, E> fmt::Debug for BuilderSpec<F, A, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderSpec").finish_non_exhaustive()
    }
}

/// Creates a specification from a builder chain.
///
/// `build` receives a chain seeded with the raw value and returns the
/// result of its `finish` step.
pub const fn exact_builder<F, A, R, E>(build: F) -> BuilderSpec<F, A, R, E>
where
    F: Fn(ExactBuilder<A, E>) -> Result<R, E>,
{
    BuilderSpec {
        build,
        _types: PhantomData,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::SpecExt;
    use std::cell::Cell;

    #[test]
    fn test_chain_success() {
        let result = ExactBuilder::<_, ExactError>::new("  42 ".to_owned())
            .requirement(|s| !s.trim().is_empty())
            .map(|s| s.trim().to_owned())
            .map_or_fail(|cx, s| {
                let n = cx.ensure_some(s.parse::<u32>().ok(), || ExactError::new("not a number"))?;
                Ok(n)
            })
            .finish(|n| n * 2);
        assert_eq!(result.unwrap(), 84);
    }

    #[test]
    fn test_requirement_default_message() {
        let result = ExactBuilder::<_, ExactError>::new("  ".to_owned())
            .requirement(|s| !s.trim().is_empty())
            .finish(|s| s);
        assert_eq!(
            result.unwrap_err().message(),
            "Predicate failed for value: \"  \""
        );
    }

    #[test]
    fn test_poisoned_chain_skips_later_steps() {
        let later = Cell::new(0);
        let builder = ExactBuilder::<_, ExactError>::new(1)
            .requirement_or(|n| *n > 1, |_| ExactError::new("too small"));
        assert!(builder.is_poisoned());

        let result = builder
            .map(|n| {
                later.set(later.get() + 1);
                n
            })
            .map_or_fail(|_, n| {
                later.set(later.get() + 1);
                Ok(n)
            })
            .finish(|n| {
                later.set(later.get() + 1);
                n
            });

        assert_eq!(result.unwrap_err().message(), "too small");
        assert_eq!(later.get(), 0);
    }

    #[test]
    fn test_map_or_fail_raise() {
        let result = ExactBuilder::<_, ExactError>::new(7)
            .map_or_fail(|cx, n: i32| {
                cx.check(n % 2 == 0)?;
                Ok(n)
            })
            .finish(|n| n);
        assert_eq!(result.unwrap_err().message(), "Failed condition.");
    }

    #[test]
    fn test_exact_builder_spec() {
        let spec = exact_builder(|b: ExactBuilder<u8>| {
            b.requirement(|n| *n < 10).map(u32::from).finish(|n| n * 10)
        });
        assert_eq!(spec.evaluate(3u8).unwrap(), 30);
        assert_eq!(
            spec.evaluate(12u8).unwrap_err().message(),
            "Predicate failed for value: 12"
        );
    }
}
