//! URL slug type for categories.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SlugError {
    /// The input string is empty (or whitespace-only).
    #[error("slug cannot be empty")]
    Empty,
}

/// A URL-safe category slug.
///
/// Slugs are derived from category titles at write time: the title is
/// lowercased, trimmed, and each run of whitespace is replaced with a single
/// hyphen. Derivation is deterministic (`"My Cat"` always yields `"my-cat"`)
/// and idempotent on input that is already a slug.
///
/// Products reference categories by free-text `category` fields; matching is
/// done by normalizing both sides through [`Slug::normalize`], never by
/// document ID.
///
/// ## Examples
///
/// ```
/// use hibhana_core::Slug;
///
/// let slug = Slug::from_title("My Cat").expect("non-empty");
/// assert_eq!(slug.as_str(), "my-cat");
///
/// // Idempotent
/// assert_eq!(Slug::from_title("my-cat").expect("non-empty").as_str(), "my-cat");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from a category title.
    ///
    /// # Errors
    ///
    /// Returns `SlugError::Empty` if the title is empty or whitespace-only.
    pub fn from_title(title: &str) -> Result<Self, SlugError> {
        let slug = Self::normalize(title);
        if slug.is_empty() {
            return Err(SlugError::Empty);
        }
        Ok(Self(slug))
    }

    /// Normalize an arbitrary string the way slugs are derived.
    ///
    /// Used for slug-equality matching when the left side may be a free-text
    /// category name and the right side a stored slug.
    #[must_use]
    pub fn normalize(s: &str) -> String {
        s.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Slug` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether this slug matches a free-text category value after
    /// normalization.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0 == Self::normalize(other)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_title_basic() {
        let slug = Slug::from_title("My Cat").expect("valid");
        assert_eq!(slug.as_str(), "my-cat");
    }

    #[test]
    fn test_from_title_trims_and_collapses_whitespace() {
        let slug = Slug::from_title("  Indo  Western   Sets ").expect("valid");
        assert_eq!(slug.as_str(), "indo-western-sets");
    }

    #[test]
    fn test_from_title_idempotent() {
        let first = Slug::from_title("Bridal Lehengas").expect("valid");
        let second = Slug::from_title(first.as_str()).expect("valid");
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_title_empty() {
        assert!(Slug::from_title("").is_err());
        assert!(Slug::from_title("   ").is_err());
    }

    #[test]
    fn test_matches_free_text() {
        let slug = Slug::from_title("Indo Western").expect("valid");
        assert!(slug.matches("Indo Western"));
        assert!(slug.matches("indo-western"));
        assert!(slug.matches("  INDO   WESTERN "));
        assert!(!slug.matches("sherwanis"));
    }
}
