//! Test-only, in-memory `Catalog` implementations used by unit and
//! behaviour tests.

use crate::{Book, BookId, Catalog, CatalogError};

/// In-memory `Catalog` implementation used in tests.
///
/// The catalogue performs a linear scan and is intended only for small
/// datasets. Iteration order is the insertion order, which makes
/// tie-break behaviour deterministic in tests.
#[derive(Default, Debug)]
pub struct MemoryCatalog {
    books: Vec<Book>,
}

impl MemoryCatalog {
    /// Create a catalogue containing a single book.
    #[must_use]
    pub fn with_book(book: Book) -> Self {
        Self::with_books(std::iter::once(book))
    }

    /// Create a catalogue from a collection of books.
    #[must_use]
    pub fn with_books<I>(books: I) -> Self
    where
        I: IntoIterator<Item = Book>,
    {
        Self {
            books: books.into_iter().collect(),
        }
    }
}

impl Catalog for MemoryCatalog {
    fn all_books(&self) -> Result<Vec<Book>, CatalogError> {
        Ok(self.books.clone())
    }

    fn book_by_id(&self, id: &BookId) -> Result<Option<Book>, CatalogError> {
        Ok(self.books.iter().find(|book| &book.id == id).cloned())
    }
}

/// `Catalog` whose every operation fails, for unavailable-backend
/// tests.
#[derive(Default, Debug, Copy, Clone)]
pub struct FailingCatalog;

impl FailingCatalog {
    fn error() -> CatalogError {
        CatalogError::unavailable(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "backend offline",
        ))
    }
}

impl Catalog for FailingCatalog {
    fn all_books(&self) -> Result<Vec<Book>, CatalogError> {
        Err(Self::error())
    }

    fn book_by_id(&self, _id: &BookId) -> Result<Option<Book>, CatalogError> {
        Err(Self::error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Genre;
    use rstest::rstest;

    #[rstest]
    fn memory_catalog_resolves_known_id() {
        let book = Book::new("1", "Dune", "Frank Herbert", [Genre::new("SciFi")], 4.2).unwrap();
        let catalog = MemoryCatalog::with_book(book.clone());
        assert_eq!(catalog.book_by_id(&BookId::new("1")).unwrap(), Some(book));
    }

    #[rstest]
    fn memory_catalog_returns_none_for_unknown_id() {
        let catalog = MemoryCatalog::default();
        assert_eq!(catalog.book_by_id(&BookId::new("missing")).unwrap(), None);
    }

    #[rstest]
    fn failing_catalog_errors_on_every_operation() {
        let catalog = FailingCatalog;
        assert!(catalog.all_books().is_err());
        assert!(catalog.book_by_id(&BookId::new("1")).is_err());
        assert!(catalog.search("dune").is_err());
    }
}
