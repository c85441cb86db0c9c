//! Document identifier scalar
//!
//! Stores address documents by BSON ObjectIds. At the API boundary an id
//! travels as its 24-character hex form; anything else is rejected as a
//! validation error before it reaches a store.

use std::fmt;
use std::str::FromStr;

use bson::oid::ObjectId;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Opaque document identifier, store-assigned on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocId(ObjectId);

impl DocId {
    /// Generate a fresh identifier. Used by stores when inserting.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// The underlying ObjectId, for store implementations.
    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }

    /// The 24-character hex form used on the wire.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl Default for DocId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for DocId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl FromStr for DocId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| ValidationError::InvalidId { value: s.to_string() })
    }
}

impl Serialize for DocId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = DocId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 24-character hex document id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<DocId, E> {
                v.parse().map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}
