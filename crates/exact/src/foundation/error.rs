//! Error types for refinement failures
//!
//! - [`ExactError`]: the default error shape, a single message.
//! - [`ExactException`]: the one error type produced by the throwing
//!   extraction mode, wrapping whatever error the specification failed with.
//! - [`ConstraintViolation`]: a descriptive error for numeric and other
//!   constraint-style refinements.
//!
//! String fields use `Cow<'static, str>` so static messages do not allocate.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// EXACT ERROR
// ============================================================================

/// The default error of a specification: a single human-readable message.
///
/// # Examples
///
/// ```rust,ignore
/// use exact::foundation::ExactError;
///
/// // Static strings do not allocate:
/// let error = ExactError::new("cannot be blank");
///
/// // Dynamic strings:
/// let error = ExactError::new(format!("{} is reserved", "admin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct ExactError {
    message: Cow<'static, str>,
}

impl ExactError {
    /// Creates an error with the given message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Generic error for a failed boolean condition.
    #[must_use]
    pub fn failed_condition() -> Self {
        Self::new("Failed condition.")
    }

    /// Generic error for a builder requirement that did not hold.
    pub fn predicate_failed<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Self::new(format!("Predicate failed for value: {value:?}"))
    }

    /// Generic error for a predicate-based spec that rejected its input.
    pub fn no_match<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Self::new(format!("Value ({value:?}) doesn't match the predicate"))
    }
}

impl From<&'static str> for ExactError {
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ExactError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

// ============================================================================
// EXACT EXCEPTION
// ============================================================================

/// The single error type of the throwing extraction mode.
///
/// Wraps exactly one specification error as its payload, whatever its type,
/// so callers can handle every refinement failure through one type. The
/// payload is rendered with its `Display` implementation.
///
/// # Examples
///
/// ```rust,ignore
/// use exact::prelude::*;
///
/// let exception = NOT_BLANK.evaluate_or_throw("   ").unwrap_err();
/// assert_eq!(exception.to_string(), "exact error: cannot be blank");
/// assert_eq!(exception.payload::<ExactError>().unwrap().message(), "cannot be blank");
/// ```
#[derive(Debug, thiserror::Error)]
#[error("exact error: {rendered}")]
pub struct ExactException {
    rendered: String,
    payload: Box<dyn Any + Send + Sync>,
}

impl ExactException {
    /// Wraps a specification error.
    pub fn new<E>(error: E) -> Self
    where
        E: fmt::Display + Send + Sync + 'static,
    {
        Self {
            rendered: error.to_string(),
            payload: Box::new(error),
        }
    }

    /// The payload rendered with its `Display` implementation.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.rendered
    }

    /// Returns the payload if it is an `E`.
    #[must_use]
    pub fn payload<E: 'static>(&self) -> Option<&E> {
        self.payload.downcast_ref::<E>()
    }

    /// Returns true if the payload is an `E`.
    #[must_use]
    pub fn is<E: 'static>(&self) -> bool {
        self.payload.is::<E>()
    }

    /// Extracts the payload, or gives the exception back if it is not an `E`.
    pub fn into_payload<E: 'static>(self) -> Result<E, Self> {
        let Self { rendered, payload } = self;
        match payload.downcast::<E>() {
            Ok(error) => Ok(*error),
            Err(payload) => Err(Self { rendered, payload }),
        }
    }
}

// ============================================================================
// CONSTRAINT VIOLATION
// ============================================================================

/// A value failed to meet a named constraint.
///
/// ```text
/// [exact] PositiveDouble constraint violated in "parse". The value "-3.5"
/// doesn't meet the requirement: "Must be a positive and finite number."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "[exact] {constraint} constraint violated{}. The value \"{violating_value}\" doesn't meet the requirement: \"Must be {requirement}.\"",
    tag_suffix(.tag)
)]
pub struct ConstraintViolation {
    /// Name of the violated constraint, e.g. `PositiveDouble`.
    pub constraint: Cow<'static, str>,
    /// What the value must be, e.g. `a positive and finite number`.
    pub requirement: Cow<'static, str>,
    /// Rendering of the offending value.
    pub violating_value: String,
    /// Optional call-site context.
    pub tag: Option<Cow<'static, str>>,
}

impl ConstraintViolation {
    /// Creates a violation without a tag.
    pub fn new(
        constraint: impl Into<Cow<'static, str>>,
        requirement: impl Into<Cow<'static, str>>,
        violating_value: impl fmt::Display,
    ) -> Self {
        Self {
            constraint: constraint.into(),
            requirement: requirement.into(),
            violating_value: violating_value.to_string(),
            tag: None,
        }
    }

    /// Attaches call-site context.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

#[allow(clippy::ref_option)]
fn tag_suffix(tag: &Option<Cow<'static, str>>) -> String {
    tag.as_ref()
        .map(|tag| format!(" in \"{tag}\""))
        .unwrap_or_default()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq, thiserror::Error)]
    #[error("custom {0}")]
    struct Custom(u8);

    #[test]
    fn test_exact_error_display_is_message() {
        let error = ExactError::new("cannot be blank");
        assert_eq!(error.to_string(), "cannot be blank");
        assert_eq!(error.message(), "cannot be blank");
    }

    #[test]
    fn test_predicate_failed_carries_value() {
        let error = ExactError::predicate_failed(&"  ");
        assert_eq!(error.message(), "Predicate failed for value: \"  \"");
    }

    #[test]
    fn test_no_match_carries_value() {
        let error = ExactError::no_match(&-4);
        assert_eq!(error.message(), "Value (-4) doesn't match the predicate");
    }

    #[test]
    fn test_exception_wraps_payload() {
        let exception = ExactException::new(ExactError::new("bad"));
        assert_eq!(exception.to_string(), "exact error: bad");
        assert_eq!(exception.message(), "bad");
        assert!(exception.is::<ExactError>());
        assert_eq!(exception.payload::<ExactError>().unwrap().message(), "bad");
        assert!(exception.payload::<Custom>().is_none());
    }

    #[test]
    fn test_exception_into_payload() {
        let exception = ExactException::new(Custom(7));
        let exception = exception.into_payload::<ExactError>().unwrap_err();
        assert_eq!(exception.into_payload::<Custom>().unwrap(), Custom(7));
    }

    #[test]
    fn test_constraint_violation_message() {
        let violation = ConstraintViolation::new("PositiveDouble", "a positive and finite number", -3.5);
        assert_eq!(
            violation.to_string(),
            "[exact] PositiveDouble constraint violated. The value \"-3.5\" \
             doesn't meet the requirement: \"Must be a positive and finite number.\""
        );
    }

    #[test]
    fn test_constraint_violation_tag() {
        let violation =
            ConstraintViolation::new("PositiveDouble", "a positive and finite number", 0).with_tag("main");
        assert!(violation.to_string().contains("constraint violated in \"main\". The value \"0\""));
        assert!(std::error::Error::source(&violation).is_none());
    }
}
