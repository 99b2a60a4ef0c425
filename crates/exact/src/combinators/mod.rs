//! Combinators for composing specifications
//!
//! Every combinator evaluates its children strictly in declaration order and
//! stops at the first failure. There is no error accumulation.
//!
//! | Combinator | Shape | Built by |
//! |------------|-------|----------|
//! | [`And`] | `A -> B`, `B -> C` into `A -> C` | [`and`], [`SpecExt::and`](crate::foundation::SpecExt::and) |
//! | [`AllOf`] | list of `T -> T` into `T -> T` | [`all_of`] |
//! | [`Map`] | total output transform | [`SpecExt::map`](crate::foundation::SpecExt::map) |
//! | [`MapError`] | error translation | [`SpecExt::map_error`](crate::foundation::SpecExt::map_error) |
//! | [`FromFn`] | closure body | [`from_fn`] |
//! | [`Exact`] | predicate plus constructor | [`exact`] |
//! | [`MustBe`] | predicate plus error factory | [`must_be`] |
//! | [`Lazy`] | built on first use | [`lazy`], [`Lazy::new`] |

pub mod and;
pub mod function;
pub mod lazy;
pub mod map;

pub use and::{AllOf, And, all_of, and};
pub use function::{Exact, FromFn, MustBe, exact, from_fn, must_be};
pub use lazy::{Lazy, lazy};
pub use map::{Map, MapError};
