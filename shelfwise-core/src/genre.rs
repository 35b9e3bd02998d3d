//! Genre tags normalised for case-insensitive comparison.
//!
//! The catalogue's source data is inconsistent about capitalisation, so
//! genre equality is defined over a lowercase, whitespace-trimmed form
//! produced at construction. Downstream comparisons are then plain
//! string equality.

/// A normalised genre tag.
///
/// # Examples
/// ```
/// use shelfwise_core::Genre;
///
/// assert_eq!(Genre::new("Fantasy"), Genre::new("fantasy"));
/// assert_eq!(Genre::new(" Science Fiction ").as_str(), "science fiction");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Genre(String);

impl Genre {
    /// Construct a genre, trimming whitespace and lowercasing the tag.
    #[must_use]
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().to_lowercase())
    }

    /// Return the normalised tag as a `&str`.
    ///
    /// # Examples
    /// ```
    /// use shelfwise_core::Genre;
    ///
    /// assert_eq!(Genre::new("Romance").as_str(), "romance");
    /// ```
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Genre {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Genre {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}
