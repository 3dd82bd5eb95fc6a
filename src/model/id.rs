//! Opaque record identifiers.
//!
//! The remote collection hands out identifiers that are sometimes JSON numbers and
//! sometimes JSON strings. [`RecordId`] keeps whichever form it was given (so a record
//! is written back exactly as it was read) but compares and hashes on the canonical
//! text form, which makes `1` and `"1"` the same identifier.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An identifier that is either an integer or a string on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    /// The canonical text form used for equality, hashing and URLs.
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            RecordId::Int(n) => Cow::Owned(n.to_string()),
            RecordId::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }

    /// The numeric value, if this identifier is (or spells) an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RecordId::Int(n) => Some(*n),
            RecordId::Text(s) => s.parse().ok(),
        }
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Int(n)
    }
}

impl From<i32> for RecordId {
    fn from(n: i32) -> Self {
        RecordId::Int(i64::from(n))
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Text(s)
    }
}

impl FromStr for RecordId {
    type Err = std::convert::Infallible;

    /// Integers parse as [`RecordId::Int`], anything else is kept as text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(n) => RecordId::Int(n),
            Err(_) => RecordId::Text(s.to_string()),
        })
    }
}

macro_rules! record_id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub RecordId);

        impl $name {
            pub fn as_int(&self) -> Option<i64> {
                self.0.as_int()
            }
        }

        impl From<i64> for $name {
            fn from(n: i64) -> Self {
                Self(RecordId::Int(n))
            }
        }

        impl From<i32> for $name {
            fn from(n: i32) -> Self {
                Self(RecordId::from(n))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(RecordId::from(s))
            }
        }

        impl From<RecordId> for $name {
            fn from(id: RecordId) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

record_id_newtype!(
    /// Type-safe identifier for Products. Assigned by the server.
    ProductId
);

record_id_newtype!(
    /// Type-safe identifier for Comments, unique within the owning product's list.
    CommentId
);
