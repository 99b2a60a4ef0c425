//! Core refinement types and traits
//!
//! This module contains the fundamental building blocks of the refinement
//! system:
//!
//! - **Context**: [`Raise`], [`Raised`], [`Outcome`]
//! - **Traits**: [`Spec`], [`SpecExt`]
//! - **Errors**: [`ExactError`], [`ExactException`], [`ConstraintViolation`]
//! - **Values**: [`ExactValue`]
//!
//! # Architecture
//!
//! ## 1. One contract
//!
//! A specification implements a single body. Everything else, including the
//! three extraction modes, is derived from it:
//!
//! ```rust,ignore
//! use exact::foundation::{ExactError, Outcome, Raise, Spec, SpecExt};
//!
//! struct Even;
//!
//! impl Spec for Even {
//!     type Input = u32;
//!     type Output = u32;
//!     type Error = ExactError;
//!
//!     fn spec(&self, cx: &mut Raise<ExactError>, raw: u32) -> Outcome<u32> {
//!         cx.ensure(raw % 2 == 0, || ExactError::new("must be even"))?;
//!         Ok(raw)
//!     }
//! }
//!
//! assert!(Even.evaluate(4u32).is_ok());
//! assert!(Even.evaluate_or_none(3u32).is_none());
//! ```
//!
//! ## 2. Fail fast
//!
//! A body stops at the first raise. Composition propagates the first
//! failing child's error unchanged; nothing is accumulated.
//!
//! ## 3. Private construction
//!
//! Refined values are newtypes whose field is private to the module owning
//! the specification, so a successful evaluation is the only way to get one.

pub mod error;
pub mod raise;
pub mod traits;
pub mod value;

pub use error::{ConstraintViolation, ExactError, ExactException};
pub use raise::{Outcome, Raise, Raised};
pub use traits::{BoxSpec, Spec, SpecExt};
pub use value::ExactValue;
