//! The catalogue book model.
//!
//! A [`Book`] is supplied fully formed by the persistence layer and is
//! never mutated by the engine. Construction validates the fields the
//! scorer relies on; everything else is accepted as-is.

use std::collections::HashSet;

use thiserror::Error;

use crate::Genre;

/// Opaque book identifier, unique within a catalogue.
///
/// # Examples
/// ```
/// use shelfwise_core::BookId;
///
/// let id = BookId::new("b-42");
/// assert_eq!(id.as_str(), "b-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct BookId(String);

impl BookId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the identifier as a `&str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// A single book in the catalogue.
///
/// The aggregate rating is nominally `0.0..=5.0` with `0.0` meaning
/// "unrated". Finite out-of-range values are accepted unchanged; the
/// scorer applies its formula without clamping.
///
/// # Examples
/// ```
/// use shelfwise_core::{Book, Genre};
///
/// # fn main() -> Result<(), shelfwise_core::BookError> {
/// let book = Book::new(
///     "1",
///     "The Hobbit",
///     "J. R. R. Tolkien",
///     [Genre::new("Fantasy"), Genre::new("Adventure")],
///     4.5,
/// )?;
/// assert!(book.has_genre(&Genre::new("fantasy")));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Book {
    /// Unique identifier.
    pub id: BookId,
    /// Display title.
    pub title: String,
    /// Author as free text.
    pub author: String,
    /// Normalised genre tags; order is irrelevant.
    pub genres: HashSet<Genre>,
    /// Aggregate rating, `0.0` meaning unrated.
    pub rating: f32,
}

/// Errors returned by [`Book::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookError {
    /// The identifier was empty.
    #[error("book must have a non-empty identifier")]
    MissingId,
    /// The title was empty.
    #[error("book must have a non-empty title")]
    MissingTitle,
    /// The rating was NaN or infinite.
    #[error("book rating must be finite")]
    NonFiniteRating,
}

impl Book {
    /// Validates and constructs a [`Book`].
    ///
    /// # Errors
    /// Returns [`BookError`] when the identifier or title is empty, or
    /// the rating is not finite.
    pub fn new(
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        genres: impl IntoIterator<Item = Genre>,
        rating: f32,
    ) -> Result<Self, BookError> {
        let id = id.into();
        if id.as_str().is_empty() {
            return Err(BookError::MissingId);
        }
        let title = title.into();
        if title.is_empty() {
            return Err(BookError::MissingTitle);
        }
        if !rating.is_finite() {
            return Err(BookError::NonFiniteRating);
        }
        Ok(Self {
            id,
            title,
            author: author.into(),
            genres: genres.into_iter().collect(),
            rating,
        })
    }

    /// Report whether the book carries the given genre tag.
    ///
    /// # Examples
    /// ```
    /// use shelfwise_core::{Book, Genre};
    ///
    /// # fn main() -> Result<(), shelfwise_core::BookError> {
    /// let book = Book::new("1", "Dune", "Frank Herbert", [Genre::new("SciFi")], 4.2)?;
    /// assert!(book.has_genre(&Genre::new("scifi")));
    /// assert!(!book.has_genre(&Genre::new("romance")));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn has_genre(&self, genre: &Genre) -> bool {
        self.genres.contains(genre)
    }
}
