//! Identity newtypes for menu documents, categories, and items.
//!
//! Ids are opaque strings: hydrated documents carry whatever the
//! persistence side minted (`cat_1`, `item_3`, ...) and they must
//! round-trip unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

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

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Menu identity, assigned by the persistence side on first save
    MenuId
);
string_id!(
    /// Category identity, unique within its menu
    CategoryId
);
string_id!(
    /// Item identity, unique within its category
    ItemId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = CategoryId::from("cat_1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"cat_1\"");

        let parsed: ItemId = serde_json::from_str("\"item_7\"").unwrap();
        assert_eq!(parsed.as_str(), "item_7");
    }
}
