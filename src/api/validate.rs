//! Utilities to help with API request validation.

use derive_more::derive::{AsRef, Deref, Display};
use serde::Deserialize;
use serde_with::SerializeDisplay;
use thiserror::Error;

/// A todo item's text. Presence is the only requirement.
pub type TodoBody = NonEmptyString;

/// A [`String`] newtype that guarantees it isn't empty.
#[derive(
    Deref,
    AsRef,
    Display,
    Deserialize,
    SerializeDisplay,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Consumes the [`NonEmptyString`], returning the wrapped [`String`].
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// An error constructing a [`NonEmptyString`].
#[derive(Error, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[error("string must not be empty")]
pub struct EmptyStringError;

impl TryFrom<String> for NonEmptyString {
    type Error = EmptyStringError;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        if string.is_empty() {
            Err(EmptyStringError)
        } else {
            Ok(Self(string))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_are_rejected() {
        NonEmptyString::try_from(String::new()).expect_err("empty string should be rejected");

        serde_json::from_str::<NonEmptyString>("\"\"")
            .expect_err("empty string should be rejected when deserializing");
    }

    #[test]
    fn non_empty_strings_are_accepted() {
        let body = NonEmptyString::try_from(String::from("buy milk"))
            .expect("non-empty string should be accepted");

        assert_eq!(body.into_inner(), "buy milk", "wrapped string should be unchanged");
    }
}
