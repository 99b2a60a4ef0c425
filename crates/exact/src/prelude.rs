//! Prelude module for convenient imports.
//!
//! Provides a single `use exact::prelude::*;` import that brings in the
//! traits, error types, built-in specifications and combinators.
//!
//! # Examples
//!
//! ```rust,ignore
//! use exact::prelude::*;
//!
//! let name = NOT_BLANK.and(TRIM);
//! let ratio = PositiveDouble::new(0.5);
//! ```

// ============================================================================
// FOUNDATION: Core traits, context, errors
// ============================================================================

pub use crate::foundation::{
    BoxSpec, ConstraintViolation, ExactError, ExactException, ExactValue, Outcome, Raise, Raised,
    Spec, SpecExt,
};

// ============================================================================
// SPECS: Built-in specifications
// ============================================================================

pub use crate::specs::{
    IsBlank, NOT_BLANK, NotBlank, NotBlankString, PositiveDouble, TRIM, TRIMMED, Trim, Trimmed,
    TrimmedString,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    AllOf, And, Lazy, Map, MapError, all_of, and, exact, from_fn, lazy, must_be,
};

// ============================================================================
// BUILDER
// ============================================================================

pub use crate::builder::{ExactBuilder, exact_builder};

// ============================================================================
// ASYNC-GATED: Suspendable specifications
// ============================================================================

#[cfg(feature = "async")]
pub use crate::asynchronous::{AsyncAnd, AsyncSpec, AsyncSpecExt, Immediate};
