//! String specifications
//!
//! # Specifications
//!
//! - [`NotBlank`] - Rejects blank values (see [`IsBlank`])
//! - [`Trimmed`] - Rejects strings with leading or trailing whitespace
//! - [`Trim`] - Trims surrounding whitespace; never fails
//!
//! # Examples
//!
//! ```rust,ignore
//! use exact::prelude::*;
//!
//! let spec = NOT_BLANK.and(TRIM);
//! assert_eq!(spec.evaluate("  hi  ").unwrap(), "hi");
//! assert_eq!(spec.evaluate("   ").unwrap_err().message(), "cannot be blank");
//! ```

use std::marker::PhantomData;

use crate::foundation::{ExactError, ExactValue, Outcome, Raise, Spec};

// ============================================================================
// BLANKNESS
// ============================================================================

/// Types that can be blank.
///
/// Strings are blank when empty or whitespace-only; collections when empty;
/// options when `None` or holding a blank value.
pub trait IsBlank {
    /// Returns true if the value is blank.
    fn is_blank(&self) -> bool;
}

impl IsBlank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl IsBlank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl<T: IsBlank + ?Sized> IsBlank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T> IsBlank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsBlank> IsBlank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(IsBlank::is_blank)
    }
}

// ============================================================================
// NOT BLANK
// ============================================================================

/// Rejects blank values with `cannot be blank`.
///
/// # Type Parameters
///
/// * `T` - The value type, `String` by default
///
/// # Examples
///
/// ```rust,ignore
/// use exact::specs::{NotBlank, NOT_BLANK};
/// use exact::foundation::SpecExt;
///
/// assert!(NOT_BLANK.evaluate("hello").is_ok());
/// assert!(NotBlank::<Vec<u8>>::new().evaluate(vec![]).is_err());
/// ```
pub struct NotBlank<T = String> {
    _value: PhantomData<fn(T) -> T>,
}

impl<T> NotBlank<T> {
    /// Creates a `NotBlank` spec.
    pub const fn new() -> Self {
        Self {
            _value: PhantomData,
        }
    }
}

impl<T: IsBlank> Spec for NotBlank<T> {
    type Input = T;
    type Output = T;
    type Error = ExactError;

    fn spec(&self, cx: &mut Raise<ExactError>, raw: T) -> Outcome<T> {
        cx.ensure(!raw.is_blank(), || ExactError::new("cannot be blank"))?;
        Ok(raw)
    }
}

// Manual impls keep `T` unbounded.
impl<T> Clone for NotBlank<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NotBlank<T> {}

impl<T> Default for NotBlank<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for NotBlank<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("NotBlank")
    }
}

/// `NotBlank` over `String`.
pub const NOT_BLANK: NotBlank = NotBlank::new();

/// A string that is not blank.
pub type NotBlankString = ExactValue<String, NotBlank>;

// ============================================================================
// TRIMMED
// ============================================================================

/// Rejects strings with leading or trailing whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Trimmed;

impl Spec for Trimmed {
    type Input = String;
    type Output = String;
    type Error = ExactError;

    fn spec(&self, cx: &mut Raise<ExactError>, raw: String) -> Outcome<String> {
        cx.ensure(raw.trim() == raw, || {
            ExactError::new(format!("\"{raw}\" contains whitespace."))
        })?;
        Ok(raw)
    }
}

/// The `Trimmed` spec.
pub const TRIMMED: Trimmed = Trimmed;

/// A string without surrounding whitespace.
pub type TrimmedString = ExactValue<String, Trimmed>;

// ============================================================================
// TRIM
// ============================================================================

/// Trims leading and trailing whitespace. Never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Trim;

impl Spec for Trim {
    type Input = String;
    type Output = String;
    type Error = ExactError;

    fn spec(&self, _cx: &mut Raise<ExactError>, raw: String) -> Outcome<String> {
        let trimmed = raw.trim();
        if trimmed.len() == raw.len() {
            Ok(raw)
        } else {
            Ok(trimmed.to_owned())
        }
    }
}

/// The `Trim` spec.
pub const TRIM: Trim = Trim;
