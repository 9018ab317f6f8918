//! Newtype IDs for type-safe entity references.
//!
//! Firestore document IDs are opaque strings. The `define_id!` macro creates
//! type-safe wrappers that prevent accidentally mixing IDs from different
//! collections.

/// Macro to define a type-safe document ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use hibhana_core::define_id;
/// define_id!(ProductId);
/// define_id!(CategoryId);
///
/// let product_id = ProductId::new("aZ3xK9pQ");
///
/// // These are different types, so this won't compile:
/// // let _: CategoryId = product_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs, one per Firestore collection.
define_id!(ProductId);
define_id!(CategoryId);
define_id!(CampaignId);
define_id!(SlideId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = ProductId::new("aZ3xK9pQ");
        assert_eq!(id.as_str(), "aZ3xK9pQ");
        assert_eq!(String::from(id), "aZ3xK9pQ");
    }

    #[test]
    fn test_id_display() {
        let id = CampaignId::new("c1");
        assert_eq!(id.to_string(), "c1");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = CategoryId::new("sherwanis-doc");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"sherwanis-doc\"");

        let back: CategoryId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
