//! # exact
//!
//! Refinement types and smart constructors: enforce an invariant once, when a
//! value is constructed, instead of re-checking it throughout a codebase.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use exact::prelude::*;
//!
//! // Compose specifications with .and(); the first failure wins
//! let name = NOT_BLANK.and(TRIM);
//! assert_eq!(name.evaluate("  alice ").unwrap(), "alice");
//!
//! // Three extraction modes
//! assert!(name.evaluate("   ").is_err());
//! assert!(name.evaluate_or_none("   ").is_none());
//! assert!(name.evaluate_or_throw("   ").is_err());
//! ```
//!
//! ## Defining Specifications
//!
//! Use the [`exact!`] macro for a refined newtype plus its specification,
//! [`exact_builder`](builder::exact_builder) for a step-by-step chain, or
//! implement [`Spec`](foundation::Spec) manually for full control over the
//! [`Raise`](foundation::Raise) context.
//!
//! ## Built-in Specifications
//!
//! - **String**: [`NotBlank`](specs::NotBlank), [`Trimmed`](specs::Trimmed),
//!   [`Trim`](specs::Trim)
//! - **Numeric**: [`PositiveDouble`](specs::PositiveDouble)
//!
//! ## Feature Flags
//!
//! - `async` (default): [`AsyncSpec`](asynchronous::AsyncSpec) and friends
//! - `serde`: serialization of [`ExactError`](foundation::ExactError) and
//!   re-validating deserialization of [`ExactValue`](foundation::ExactValue)

// Deep combinator nesting (And<MapError<And<...>, F>, ...>) produces complex
// types that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

#[cfg(feature = "async")]
pub mod asynchronous;
pub mod builder;
pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod specs;
