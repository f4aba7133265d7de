//! Strongly-typed value objects for community-submitted text.
//!
//! Tip text is rendered back to other visitors, so it is sanitized and
//! length-checked once at construction; the rest of the application treats
//! the wrapped values as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of the free-text sighting message.
pub const TIP_MESSAGE_MAX_LEN: usize = 500;
/// Maximum length of the short tip description.
pub const TIP_DESCRIPTION_MAX_LEN: usize = 200;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string exceeded the allowed length.
    #[error("value cannot exceed {0} characters")]
    TooLong(usize),
}

fn sanitize_text(value: &str, max_len: usize) -> Result<String, TypeConstraintError> {
    let sanitized = ammonia::clean(value);
    let trimmed = sanitized.trim().to_string();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    if trimmed.chars().count() > max_len {
        return Err(TypeConstraintError::TooLong(max_len));
    }
    Ok(trimmed)
}

macro_rules! sanitized_text_newtype {
    ($name:ident, $max:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Sanitizes, trims, and length-checks the value before wrapping.
            pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
                Ok(Self(sanitize_text(value.as_ref(), $max)?))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

sanitized_text_newtype!(
    TipMessage,
    TIP_MESSAGE_MAX_LEN,
    "Free-text sighting message submitted with a tip."
);

sanitized_text_newtype!(
    TipDescription,
    TIP_DESCRIPTION_MAX_LEN,
    "Short description of what a tip is based on."
);
