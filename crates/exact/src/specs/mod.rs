//! Built-in specifications
//!
//! # Categories
//!
//! - **String**: [`NotBlank`], [`Trimmed`], [`Trim`]
//! - **Numeric**: [`PositiveDouble`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use exact::prelude::*;
//!
//! // Composition
//! let name = NOT_BLANK.and(TRIM);
//!
//! // Numeric refinement
//! let ratio = PositiveDouble::new(0.5);
//! ```

pub mod number;
pub mod string;

pub use number::{PositiveDouble, PositiveDoubleSpec};
pub use string::{
    IsBlank, NOT_BLANK, NotBlank, NotBlankString, TRIM, TRIMMED, Trim, Trimmed, TrimmedString,
};
