//! Data access contract for the book catalogue.
//!
//! The `Catalog` trait defines a read-only interface over the
//! persistence layer. The engine never writes through it; schema,
//! connections, and caching are the implementer's concern.

use thiserror::Error;

use crate::{Book, BookId, Genre};

/// Read-only access to the persisted book catalogue.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a single
/// catalogue can serve concurrent recommendation requests. The order of
/// books returned by [`Catalog::all_books`] carries no meaning; the
/// recommender re-sorts candidates itself.
///
/// A backend failure must surface as [`CatalogError`], never as an
/// empty result: callers distinguish "no candidates" from "data source
/// failed".
///
/// # Examples
///
/// ```rust
/// use shelfwise_core::{Book, BookId, Catalog, CatalogError, Genre};
///
/// struct SliceCatalog {
///     books: Vec<Book>,
/// }
///
/// impl Catalog for SliceCatalog {
///     fn all_books(&self) -> Result<Vec<Book>, CatalogError> {
///         Ok(self.books.clone())
///     }
///
///     fn book_by_id(&self, id: &BookId) -> Result<Option<Book>, CatalogError> {
///         Ok(self.books.iter().find(|b| &b.id == id).cloned())
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let book = Book::new("1", "Dune", "Frank Herbert", [Genre::new("SciFi")], 4.2)?;
/// let catalog = SliceCatalog { books: vec![book.clone()] };
/// assert_eq!(catalog.book_by_id(&BookId::new("1"))?, Some(book));
/// assert_eq!(catalog.book_by_id(&BookId::new("missing"))?, None);
/// # Ok(())
/// # }
/// ```
pub trait Catalog: Send + Sync {
    /// Return every book currently in the catalogue, in no particular
    /// order.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the backend cannot be read.
    fn all_books(&self) -> Result<Vec<Book>, CatalogError>;

    /// Point lookup by identifier. Unknown ids yield `Ok(None)`.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the backend cannot be read.
    fn book_by_id(&self, id: &BookId) -> Result<Option<Book>, CatalogError>;

    /// Case-insensitive substring search over title and author.
    ///
    /// The default implementation scans [`Catalog::all_books`];
    /// backends with their own text index should override it.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the backend cannot be read.
    fn search(&self, query: &str) -> Result<Vec<Book>, CatalogError> {
        let needle = query.to_lowercase();
        Ok(self
            .all_books()?
            .into_iter()
            .filter(|book| {
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
            })
            .collect())
    }

    /// Return every book carrying the given genre tag.
    ///
    /// The default implementation scans [`Catalog::all_books`].
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the backend cannot be read.
    fn books_with_genre(&self, genre: &Genre) -> Result<Vec<Book>, CatalogError> {
        Ok(self
            .all_books()?
            .into_iter()
            .filter(|book| book.has_genre(genre))
            .collect())
    }
}

/// Errors returned by [`Catalog`] operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The underlying data source could not be read.
    #[error("catalogue backend unavailable")]
    Unavailable {
        /// Source error from the backend.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CatalogError {
    /// Wrap a backend error as an unavailability failure.
    #[must_use]
    pub fn unavailable(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Unavailable {
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryCatalog;
    use rstest::rstest;

    fn sample_books() -> Vec<Book> {
        vec![
            Book::new("1", "The Hobbit", "J. R. R. Tolkien", [Genre::new("Fantasy")], 4.5).unwrap(),
            Book::new("2", "Dune", "Frank Herbert", [Genre::new("SciFi")], 4.2).unwrap(),
        ]
    }

    #[rstest]
    fn search_matches_title_case_insensitively() {
        let catalog = MemoryCatalog::with_books(sample_books());
        let found = catalog.search("hobbit").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, crate::BookId::new("1"));
    }

    #[rstest]
    fn search_matches_author() {
        let catalog = MemoryCatalog::with_books(sample_books());
        let found = catalog.search("herbert").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, crate::BookId::new("2"));
    }

    #[rstest]
    fn search_without_match_is_empty() {
        let catalog = MemoryCatalog::with_books(sample_books());
        assert!(catalog.search("austen").unwrap().is_empty());
    }

    #[rstest]
    fn genre_filter_uses_normalised_tags() {
        let catalog = MemoryCatalog::with_books(sample_books());
        let found = catalog.books_with_genre(&Genre::new("FANTASY")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, crate::BookId::new("1"));
    }
}
