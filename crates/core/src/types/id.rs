//! Validated text newtypes for product-card attributes.
//!
//! Use the `define_text!` macro to create string wrappers that reject empty
//! input and cannot be mixed up with each other.

/// Macro to define a validated, non-empty text wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize` as a plain string, `Deserialize` through `TryFrom<String>`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `parse()` that trims surrounding whitespace and rejects empty input
/// - `as_str()`, `into_inner()`, `Display`, `AsRef<str>` and `FromStr`
///
/// The second argument names the [`ProductInputError`](crate::ProductInputError)
/// variant returned for empty input.
///
/// # Example
///
/// ```rust
/// # use genae_core::define_text;
/// define_text!(Sku, EmptyId);
///
/// assert!(Sku::parse("doll-01").is_ok());
/// assert!(Sku::parse("   ").is_err());
/// ```
#[macro_export]
macro_rules! define_text {
    ($name:ident, $empty:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse from raw text, trimming surrounding whitespace.
            ///
            /// # Errors
            ///
            /// Returns an error if the trimmed input is empty.
            pub fn parse(s: &str) -> ::core::result::Result<Self, $crate::ProductInputError> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err($crate::ProductInputError::$empty);
                }
                Ok(Self(trimmed.to_owned()))
            }

            /// Returns the value as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the wrapper and returns its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::ProductInputError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::ProductInputError;

            fn try_from(s: String) -> ::core::result::Result<Self, Self::Error> {
                Self::parse(&s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_text!(ProductId, EmptyId);
define_text!(ProductName, EmptyName);
