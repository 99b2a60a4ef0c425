//! Numeric refined types
//!
//! - [`PositiveDouble`] - An `f64` that is strictly positive and finite

use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};

use crate::foundation::{ConstraintViolation, SpecExt};

const CONSTRAINT: &str = "PositiveDouble";
const REQUIREMENT: &str = "a positive and finite number";

crate::exact! {
    /// An `f64` that is strictly positive and finite.
    ///
    /// Arithmetic returns `Option<PositiveDouble>`: `None` when the result
    /// leaves the refined range, or on division and remainder by zero.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use exact::specs::PositiveDouble;
    ///
    /// let a = PositiveDouble::new(2.5).unwrap();
    /// let b = PositiveDouble::new(1.0).unwrap();
    ///
    /// assert_eq!((a + b).map(PositiveDouble::get), Some(3.5));
    /// assert!((b - a).is_none());
    /// assert_eq!(a.to_string(), "Positive(2.5)");
    /// ```
    #[derive(Copy, PartialEq, PartialOrd)]
    pub PositiveDouble(f64) for f64;
    spec PositiveDoubleSpec;
    error ConstraintViolation;
    body(cx, raw) {
        cx.ensure(raw > 0.0 && raw.is_finite(), || {
            ConstraintViolation::new(CONSTRAINT, REQUIREMENT, raw)
        })?;
        Ok(raw)
    }
}

impl PositiveDouble {
    /// Returns the value if it is positive and finite.
    pub fn new(value: f64) -> Option<Self> {
        Self::SPEC.evaluate_or_none(value)
    }

    /// Like [`new`](Self::new), reporting the violation with `tag` as
    /// call-site context.
    pub fn tagged(value: f64, tag: &'static str) -> Result<Self, ConstraintViolation> {
        Self::SPEC
            .evaluate(value)
            .map_err(|violation| violation.with_tag(tag))
    }

    /// The underlying `f64`.
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Applies `f` to the underlying value, re-checking the result.
    pub fn map_safe(self, f: impl FnOnce(f64) -> f64) -> Option<Self> {
        Self::new(f(self.0))
    }
}

impl Add for PositiveDouble {
    type Output = Option<Self>;

    fn add(self, other: Self) -> Option<Self> {
        Self::new(self.0 + other.0)
    }
}

impl Sub for PositiveDouble {
    type Output = Option<Self>;

    fn sub(self, other: Self) -> Option<Self> {
        Self::new(self.0 - other.0)
    }
}

impl Mul for PositiveDouble {
    type Output = Option<Self>;

    fn mul(self, other: Self) -> Option<Self> {
        Self::new(self.0 * other.0)
    }
}

impl Div for PositiveDouble {
    type Output = Option<Self>;

    fn div(self, other: Self) -> Option<Self> {
        if other.0 == 0.0 {
            return None;
        }
        Self::new(self.0 / other.0)
    }
}

impl Rem for PositiveDouble {
    type Output = Option<Self>;

    fn rem(self, other: Self) -> Option<Self> {
        if other.0 == 0.0 {
            return None;
        }
        Self::new(self.0 % other.0)
    }
}

impl fmt::Display for PositiveDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Positive({})", self.0)
    }
}
