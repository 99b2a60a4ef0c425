//! Macros for declaring refined types with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`exact!`]: declare a refined newtype together with its specification
//!
//! # Examples
//!
//! ```rust,ignore
//! use exact::exact;
//! use exact::foundation::ExactError;
//!
//! exact! {
//!     /// A port number above the privileged range.
//!     #[derive(Copy, PartialEq, Eq)]
//!     pub UnprivilegedPort(u16) for u32;
//!     spec UnprivilegedPortSpec;
//!     error ExactError;
//!     body(cx, raw) {
//!         cx.ensure((1024..=65_535).contains(&raw), || ExactError::new("not an unprivileged port"))?;
//!         Ok(raw as u16)
//!     }
//! }
//!
//! let port = UnprivilegedPort::SPEC.evaluate(8080u32)?;
//! assert_eq!(*port.value(), 8080);
//! ```

// ============================================================================
// EXACT MACRO
// ============================================================================

/// Declares a refined newtype, its unit-struct specification, and a `SPEC`
/// associated constant.
///
/// The newtype's field is private to the module that invokes the macro, so
/// evaluating the specification is the only way to obtain a value outside
/// it. `#[derive(Debug, Clone)]` is always applied to the newtype; add more
/// via `#[derive(...)]`.
///
/// The body receives the context and the raw value under the names given in
/// `body(..)` and must evaluate to an `Outcome<Inner, Error>`; the macro
/// wraps the inner value in the newtype.
///
/// Generated items:
///
/// - `struct $name($inner)` with `value(&self) -> &$inner` and
///   `into_inner(self) -> $inner`
/// - `struct $spec` implementing [`Spec`](crate::foundation::Spec) with
///   `Input = $input`, `Output = $name`, `Error = $err`
/// - `$name::SPEC: $spec`
///
/// # Examples
///
/// ```rust,ignore
/// exact! {
///     pub NotBlankString(String) for String;
///     spec NotBlankStringSpec;
///     error ExactError;
///     body(cx, raw) {
///         cx.ensure(!raw.trim().is_empty(), || ExactError::new("cannot be blank"))?;
///         Ok(raw)
///     }
/// }
/// ```
#[macro_export]
macro_rules! exact {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident($inner:ty) for $input:ty;
        spec $spec:ident;
        error $err:ty;
        body($cx:ident, $raw:ident) $body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name($inner);

        #[doc = concat!("Specification producing [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $spec;

        #[allow(dead_code)]
        impl $name {
            /// The specification that produces this type.
            pub const SPEC: $spec = $spec;

            /// Returns a reference to the refined value.
            pub const fn value(&self) -> &$inner {
                &self.0
            }

            /// Extracts the refined value.
            pub fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl $crate::foundation::Spec for $spec {
            type Input = $input;
            type Output = $name;
            type Error = $err;

            #[allow(unused_variables)]
            fn spec(
                &self,
                $cx: &mut $crate::foundation::Raise<$err>,
                $raw: $input,
            ) -> $crate::foundation::Outcome<$name, $err> {
                let inner: $crate::foundation::Outcome<$inner, $err> = $body;
                inner.map($name)
            }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================
