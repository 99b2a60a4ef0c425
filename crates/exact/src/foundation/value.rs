//! Values tagged with the specification that produced them
//!
//! [`ExactValue<T, S>`] wraps a `T` and proves, through its type, that the
//! value passed the value spec `S`. It is the generic counterpart of the
//! newtypes generated by [`exact!`](crate::exact): useful when a dedicated
//! newtype would be overkill.
//!
//! ```rust,ignore
//! use exact::prelude::*;
//!
//! fn greet(name: ExactValue<String, NotBlank>) -> String {
//!     format!("hello, {name}")
//! }
//!
//! let name = ExactValue::from_spec("ada".to_owned(), &NOT_BLANK)?;
//! assert_eq!(greet(name), "hello, ada");
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use crate::foundation::{Spec, SpecExt};

// ============================================================================
// EXACT VALUE
// ============================================================================

/// A value that has passed the value spec `S`.
///
/// No mutable access is offered: changing the value could break the
/// guarantee. Use [`into_inner`](Self::into_inner) and re-evaluate instead.
///
/// # Type Parameters
///
/// * `T` - The underlying value type
/// * `S` - The value spec, used as a type-level marker
pub struct ExactValue<T, S> {
    value: T,
    _spec: PhantomData<fn() -> S>,
}

impl<T, S> ExactValue<T, S>
where
    S: Spec<Input = T, Output = T>,
{
    /// Evaluates `value` against `spec`, tagging it on success.
    ///
    /// # Errors
    ///
    /// Returns the spec's error if the value is rejected.
    pub fn from_spec(value: T, spec: &S) -> Result<Self, S::Error> {
        spec.evaluate(value).map(Self::tagged)
    }
}

impl<T, S> ExactValue<T, S> {
    fn tagged(value: T) -> Self {
        Self {
            value,
            _spec: PhantomData,
        }
    }

    /// Returns a reference to the inner value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Extracts the inner value, dropping the tag.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Re-checks the value with another value spec.
    ///
    /// # Errors
    ///
    /// Returns the new spec's error if the value is rejected.
    pub fn refine<S2>(self, spec: &S2) -> Result<ExactValue<T, S2>, S2::Error>
    where
        S2: Spec<Input = T, Output = T>,
    {
        ExactValue::from_spec(self.value, spec)
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl<T, S> Deref for ExactValue<T, S> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, S> AsRef<T> for ExactValue<T, S> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

// Bounds on `T` only; `S` is a marker.
impl<T: fmt::Debug, S> fmt::Debug for ExactValue<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExactValue").field(&self.value).finish()
    }
}

impl<T: Clone, S> Clone for ExactValue<T, S> {
    fn clone(&self) -> Self {
        Self::tagged(self.value.clone())
    }
}

impl<T: PartialEq, S> PartialEq for ExactValue<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, S> Eq for ExactValue<T, S> {}

impl<T: PartialOrd, S> PartialOrd for ExactValue<T, S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, S> Ord for ExactValue<T, S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: std::hash::Hash, S> std::hash::Hash for ExactValue<T, S> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// Display forwards to inner value
impl<T: fmt::Display, S> fmt::Display for ExactValue<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[cfg(feature = "serde")]
impl<T, S> serde::Serialize for ExactValue<T, S>
where
    T: serde::Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for ExactValue<T, S>
where
    T: serde::Deserialize<'de>,
    S: Spec<Input = T, Output = T> + Default,
    S::Error: fmt::Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = T::deserialize(deserializer)?;
        Self::from_spec(value, &S::default()).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// TESTS
// ============================================================================
