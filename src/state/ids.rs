//! String identifiers for tracks and clips.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Fresh random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Identifier of a track.
    TrackId
);

string_id!(
    /// Identifier of a clip.
    ClipId
);

impl ClipId {
    /// Id with a suffix appended, e.g. `C1` -> `C1-a`.
    pub fn suffixed(&self, suffix: &str) -> Self {
        Self(format!("{}-{}", self.0, suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(TrackId::generate(), TrackId::generate());
        assert_ne!(ClipId::generate(), ClipId::generate());
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = ClipId::from("C1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"C1\"");
        assert_eq!(id.suffixed("a").as_str(), "C1-a");
    }
}
