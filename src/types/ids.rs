//! Type-safe identifier wrappers for engine entities.
//!
//! Each ID type is a newtype wrapper around `String`, carrying a
//! stable prefix (`evt_`, `factor_`, `pfu_`) so that IDs logged or
//! persisted out of context remain self-describing (§3).

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error returned when an ID cannot be created from invalid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdError {
    /// The type of ID that failed to create.
    pub id_type: &'static str,
    /// Description of why the ID is invalid.
    pub reason: String,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.id_type, self.reason)
    }
}

impl std::error::Error for IdError {}

/// Macro to generate prefixed ID newtypes with common functionality.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident, $type_name:literal, $prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// The stable prefix every instance of this ID carries.
            pub const PREFIX: &'static str = $prefix;

            /// Creates an ID from a string, validating its prefix.
            ///
            /// # Errors
            ///
            /// Returns an error if the string is empty or does not
            /// start with [`Self::PREFIX`].
            pub fn new(id: impl Into<String>) -> Result<Self, IdError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(IdError {
                        id_type: $type_name,
                        reason: "id cannot be empty".to_string(),
                    });
                }
                if !id.starts_with($prefix) {
                    return Err(IdError {
                        id_type: $type_name,
                        reason: format!("id must start with '{}'", $prefix),
                    });
                }
                Ok(Self(id))
            }

            /// Generates a fresh, random ID with the correct prefix.
            #[must_use]
            pub fn generate() -> Self {
                Self(format!("{}{}", $prefix, Uuid::new_v4()))
            }

            /// Returns the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the ID and returns the inner `String`.
            #[must_use]
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IdError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

define_id!(
    /// Unique identifier for an [`Event`](crate::model::Event).
    ///
    /// # Examples
    ///
    /// ```
    /// use complexity_engine::types::EventId;
    ///
    /// let id = EventId::generate();
    /// assert!(id.as_str().starts_with("evt_"));
    /// ```
    EventId,
    "EventId",
    "evt_"
);

define_id!(
    /// Unique identifier for a [`Factor`](crate::model::Factor).
    ///
    /// # Examples
    ///
    /// ```
    /// use complexity_engine::types::FactorId;
    ///
    /// let id = FactorId::generate();
    /// assert!(id.as_str().starts_with("factor_"));
    /// ```
    FactorId,
    "FactorId",
    "factor_"
);

define_id!(
    /// Unique identifier for a [`PendingFollowUp`](crate::model::PendingFollowUp).
    ///
    /// # Examples
    ///
    /// ```
    /// use complexity_engine::types::PendingFollowUpId;
    ///
    /// let id = PendingFollowUpId::generate();
    /// assert!(id.as_str().starts_with("pfu_"));
    /// ```
    PendingFollowUpId,
    "PendingFollowUpId",
    "pfu_"
);
