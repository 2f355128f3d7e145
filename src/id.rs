//! See [`TodoId`].

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use derive_more::derive::{AsRef, Deref};
use mongodb::bson::oid::{self, ObjectId};
use serde_with::{DeserializeFromStr, SerializeDisplay};

/// A todo item's identifier in the store's native format: an object ID, written as a
/// 24-character hexadecimal string in URL paths and JSON.
#[derive(
    Deref,
    AsRef,
    DeserializeFromStr,
    SerializeDisplay,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
)]
pub struct TodoId(ObjectId);

impl TodoId {
    /// Consumes the [`TodoId`], returning the wrapped [`ObjectId`].
    pub fn into_inner(self) -> ObjectId {
        self.0
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl From<ObjectId> for TodoId {
    fn from(id: ObjectId) -> Self {
        Self(id)
    }
}

impl FromStr for TodoId {
    type Err = oid::Error;

    fn from_str(str: &str) -> Result<Self, Self::Err> {
        Ok(Self(ObjectId::parse_str(str)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_ids_parse_and_round_trip() {
        let hex = "66b3a1f2c9e77a0012345678";

        let id = hex.parse::<TodoId>().expect("24-character hex should parse");

        assert_eq!(id.to_string(), hex, "ID should display as its source hex");
    }

    #[test]
    fn malformed_ids_are_rejected() {
        let malformed_ids = [
            "",
            "not-an-id",
            "1234",
            "zzzzzzzzzzzzzzzzzzzzzzzz",
            "66b3a1f2c9e77a00123456789abc",
        ];

        for id in malformed_ids {
            id.parse::<TodoId>().expect_err("malformed ID should be rejected");
        }
    }
}
