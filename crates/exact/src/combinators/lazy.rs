//! Composite specifications that live in a `static`
//!
//! Unit-struct specs and `and(..)` chains of them can be `const`. Composites
//! that hold closures or boxed children cannot, so [`Lazy`] stores the
//! recipe in a `static` and builds the composite the first time it is
//! evaluated. Every later evaluation, from any thread, reuses it.
//!
//! ```rust,ignore
//! use exact::combinators::{Lazy, Map, And};
//! use exact::prelude::*;
//!
//! static WORD_COUNT: Lazy<Map<And<NotBlank, Trim>, fn(String) -> usize>> =
//!     Lazy::new(|| NOT_BLANK.and(TRIM).map(count_words as fn(String) -> usize));
//!
//! fn count_words(s: String) -> usize {
//!     s.split_whitespace().count()
//! }
//!
//! assert_eq!(WORD_COUNT.evaluate(" two words ").unwrap(), 2);
//! ```

use std::fmt;
use std::sync::OnceLock;

use crate::foundation::{Outcome, Raise, Spec};

/// A specification built on first evaluation.
///
/// `build` runs at most once, even under concurrent first use.
pub struct Lazy<S, F = fn() -> S> {
    build: F,
    built: OnceLock<S>,
}

impl<S, F> Lazy<S, F>
where
    F: Fn() -> S,
{
    /// Stores `build` without running it.
    pub const fn new(build: F) -> Self {
        Self {
            build,
            built: OnceLock::new(),
        }
    }

    /// The composite, building it if this is the first use.
    pub fn composite(&self) -> &S {
        self.built.get_or_init(&self.build)
    }

    /// True once the composite has been built.
    pub fn is_built(&self) -> bool {
        self.built.get().is_some()
    }
}

impl<S, F> Spec for Lazy<S, F>
where
    S: Spec,
    F: Fn() -> S,
{
    type Input = S::Input;
    type Output = S::Output;
    type Error = S::Error;

    fn spec(&self, cx: &mut Raise<S::Error>, raw: S::Input) -> Outcome<S::Output, S::Error> {
        self.composite().spec(cx, raw)
    }

    fn name(&self) -> &'static str {
        self.composite().name()
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Lazy<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.built.get() {
            Some(spec) => f.debug_tuple("Lazy").field(spec).finish(),
            None => f.write_str("Lazy(<unbuilt>)"),
        }
    }
}

/// Shorthand for [`Lazy::new`].
pub const fn lazy<S, F>(build: F) -> Lazy<S, F>
where
    F: Fn() -> S,
{
    Lazy::new(build)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::combinators::{AllOf, all_of, must_be};
    use crate::foundation::{BoxSpec, ExactError, SpecExt};

    static BUILDS: AtomicUsize = AtomicUsize::new(0);

    fn port_rules() -> AllOf<BoxSpec<u32, u32, ExactError>> {
        BUILDS.fetch_add(1, Ordering::SeqCst);
        all_of(vec![
            must_be(|p: &u32| *p > 0, |_| ExactError::new("port 0 is reserved")).boxed(),
            must_be(|p: &u32| *p <= 65_535, |p| ExactError::new(format!("{p} is out of range")))
                .boxed(),
        ])
    }

    static PORT: Lazy<AllOf<BoxSpec<u32, u32, ExactError>>> = Lazy::new(port_rules);

    #[test]
    fn static_composite_is_built_once() {
        assert_eq!(PORT.evaluate(8080u32).unwrap(), 8080);
        assert_eq!(PORT.evaluate(0u32).unwrap_err().message(), "port 0 is reserved");
        assert_eq!(
            PORT.evaluate(70_000u32).unwrap_err().message(),
            "70000 is out of range"
        );

        assert!(PORT.is_built());
        assert_eq!(PORT.composite().len(), 2);
        assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn nothing_is_built_before_first_evaluation() {
        let spec = lazy(|| must_be(|n: &i32| *n % 2 == 0, |_| ExactError::new("odd")));
        assert!(!spec.is_built());
        assert_eq!(format!("{spec:?}"), "Lazy(<unbuilt>)");

        assert!(spec.evaluate(3).is_err());
        assert!(spec.is_built());
    }

    #[test]
    fn concurrent_first_use_builds_once() {
        let builds = AtomicUsize::new(0);
        let spec = Lazy::new(|| {
            builds.fetch_add(1, Ordering::SeqCst);
            must_be(|n: &u8| *n < 10, |_| ExactError::new("too big"))
        });

        std::thread::scope(|scope| {
            for n in 0..8u8 {
                let spec = &spec;
                scope.spawn(move || assert_eq!(spec.evaluate(n).is_ok(), n < 10));
            }
        });

        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }
}
