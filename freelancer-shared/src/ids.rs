//! Record identifiers
//!
//! Ids are short strings: the creation time in milliseconds, base 36, followed
//! by a random base-36 suffix. Uniqueness is probabilistic; the store
//! additionally regenerates an id that already exists in the target
//! collection (see [`fresh_id`]).
//!
//! Each entity gets its own newtype so a `ClientId` cannot be passed where a
//! `ProjectId` is expected. On disk they are plain strings.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing id string
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Unwraps the id string
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`User`](crate::models::user::User)
    UserId
);
entity_id!(
    /// Identifier of a [`Client`](crate::models::client::Client)
    ClientId
);
entity_id!(
    /// Identifier of a [`Project`](crate::models::project::Project)
    ProjectId
);
entity_id!(
    /// Identifier of a [`Task`](crate::models::task::Task)
    TaskId
);
entity_id!(
    /// Identifier of a [`Quote`](crate::models::quote::Quote)
    QuoteId
);
entity_id!(
    /// Identifier of a [`Contract`](crate::models::contract::Contract)
    ContractId
);
entity_id!(
    /// Identifier of a [`TeamMember`](crate::models::team_member::TeamMember)
    TeamMemberId
);

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random part of a generated id
const SUFFIX_LEN: usize = 11;

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(13);
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

/// Generates a new id string
///
/// Time component first so ids created later sort later within the same
/// length; the suffix makes collisions within one millisecond unlikely.
pub fn generate_id() -> String {
    let millis = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();

    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
        .collect();

    format!("{}{}", to_base36(millis), suffix)
}

/// Generates an id not already reported as taken
pub fn fresh_id(is_taken: impl Fn(&str) -> bool) -> String {
    loop {
        let candidate = generate_id();
        if !is_taken(&candidate) {
            return candidate;
        }
        tracing::debug!(id = %candidate, "Generated id collided, retrying");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id();
        assert!(id.len() > SUFFIX_LEN);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_id_is_unique_in_practice() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_fresh_id_retries_on_collision() {
        let calls = Cell::new(0);
        let id = fresh_id(|_| {
            calls.set(calls.get() + 1);
            calls.get() < 3
        });

        assert_eq!(calls.get(), 3);
        assert!(!id.is_empty());
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = ClientId::new("client-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"client-1\"");

        let back: ClientId = serde_json::from_str("\"client-1\"").unwrap();
        assert_eq!(back, id);
        assert_eq!(back.to_string(), "client-1");
    }
}
