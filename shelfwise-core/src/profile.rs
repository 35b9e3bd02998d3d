//! Reader profiles: favourite genres plus reading history.
//!
//! The profile is the only per-user input to the engine. Every
//! operation takes it as an explicit argument; there is no ambient
//! "current user" state anywhere in the crate.

use std::collections::HashSet;

use thiserror::Error;

use crate::{BookId, Genre};

/// A reader's preferences and history.
///
/// The read-book set is the exclusion filter: books in it are never
/// recommended. The liked-book set feeds the author-affinity signal.
///
/// # Examples
/// ```
/// use shelfwise_core::{BookId, Genre, ReaderProfile};
///
/// # fn main() -> Result<(), shelfwise_core::ProfileError> {
/// let profile = ReaderProfile::new("reader-1")?
///     .with_favourite_genre(Genre::new("Fantasy"))
///     .with_read_book(BookId::new("1"));
/// assert!(profile.has_read(&BookId::new("1")));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderProfile {
    id: String,
    favourite_genres: HashSet<Genre>,
    read_books: HashSet<BookId>,
    liked_books: HashSet<BookId>,
}

/// Errors returned by [`ReaderProfile::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// The identifier was empty.
    #[error("reader profile must have a non-empty identifier")]
    MissingId,
}

impl ReaderProfile {
    /// Validates and constructs an empty profile for the given reader.
    ///
    /// # Errors
    /// Returns [`ProfileError::MissingId`] when the identifier is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ProfileError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ProfileError::MissingId);
        }
        Ok(Self {
            id,
            favourite_genres: HashSet::new(),
            read_books: HashSet::new(),
            liked_books: HashSet::new(),
        })
    }

    /// The reader's identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The reader's favourite genre tags.
    #[must_use]
    pub fn favourite_genres(&self) -> &HashSet<Genre> {
        &self.favourite_genres
    }

    /// Identifiers of books the reader has already read.
    #[must_use]
    pub fn read_books(&self) -> &HashSet<BookId> {
        &self.read_books
    }

    /// Identifiers of books the reader has liked.
    #[must_use]
    pub fn liked_books(&self) -> &HashSet<BookId> {
        &self.liked_books
    }

    /// Report whether the reader has already read the given book.
    #[must_use]
    pub fn has_read(&self, id: &BookId) -> bool {
        self.read_books.contains(id)
    }

    /// Record a favourite genre.
    pub fn add_favourite_genre(&mut self, genre: Genre) {
        self.favourite_genres.insert(genre);
    }

    /// Record a book as read.
    pub fn mark_read(&mut self, id: BookId) {
        self.read_books.insert(id);
    }

    /// Record a book as liked.
    pub fn mark_liked(&mut self, id: BookId) {
        self.liked_books.insert(id);
    }

    /// Add a favourite genre while returning `self` for chaining.
    #[must_use]
    pub fn with_favourite_genre(mut self, genre: Genre) -> Self {
        self.add_favourite_genre(genre);
        self
    }

    /// Mark a book as read while returning `self` for chaining.
    #[must_use]
    pub fn with_read_book(mut self, id: BookId) -> Self {
        self.mark_read(id);
        self
    }

    /// Mark a book as liked while returning `self` for chaining.
    #[must_use]
    pub fn with_liked_book(mut self, id: BookId) -> Self {
        self.mark_liked(id);
        self
    }
}
