//! Strongly-typed identifier value objects.
//!
//! All identifiers are SQLite integer primary keys assigned by the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw row id.
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw row id.
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

integer_id!(
    /// Identifier of a vocabulary group.
    GroupId
);

integer_id!(
    /// Identifier of a study activity.
    StudyActivityId
);

integer_id!(
    /// Identifier of a study session.
    StudySessionId
);

integer_id!(
    /// Identifier of a recorded word review.
    WordReviewItemId
);

integer_id!(
    /// Identifier of a vocabulary word.
    WordId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_displays_raw_value() {
        assert_eq!(GroupId::new(7).to_string(), "7");
    }

    #[test]
    fn id_parses_from_string() {
        let id: StudySessionId = "42".parse().unwrap();
        assert_eq!(id.as_i64(), 42);
    }

    #[test]
    fn id_rejects_non_numeric_string() {
        assert!("abc".parse::<StudyActivityId>().is_err());
    }

    #[test]
    fn id_serializes_transparently() {
        let json = serde_json::to_string(&WordId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
