//! Strongly typed identifiers for reference records.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Raised when a raw value cannot back a typed identifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    #[error("{kind} must be positive, got {value}")]
    NonPositiveId { kind: &'static str, value: i32 },
}

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId { kind: $kind, value })
                }
            }

            pub fn get(self) -> i32 {
                self.0
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

typed_id!(
    /// Identifier of an organizational department.
    DepartmentId,
    "department id"
);
typed_id!(
    /// Identifier of a staff member.
    StaffId,
    "staff id"
);
typed_id!(
    /// Identifier of a ticket category.
    CategoryId,
    "category id"
);
