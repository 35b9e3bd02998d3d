//! Preferred-author derivation from a reader's liked books.

use std::collections::HashSet;

use log::debug;
use shelfwise_core::{Catalog, CatalogError, ReaderProfile, RelevanceContext};

/// Resolve the reader's liked books and collect their distinct authors.
///
/// Ids that no longer resolve (deleted book, stale reference) are
/// skipped without error; they contribute nothing to the context and
/// never abort the derivation. A backend failure, by contrast,
/// propagates: the caller must not mistake an unreadable catalogue for
/// an empty author set.
///
/// # Errors
/// Returns [`CatalogError`] when a point lookup fails at the backend.
///
/// # Examples
/// ```
/// use shelfwise_core::{Book, BookId, Genre, ReaderProfile};
/// use shelfwise_core::test_support::MemoryCatalog;
/// use shelfwise_recommender::derive_preferred_authors;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = MemoryCatalog::with_book(Book::new(
///     "1", "Dune", "Frank Herbert", [Genre::new("SciFi")], 4.2,
/// )?);
/// let reader = ReaderProfile::new("reader-1")?
///     .with_liked_book(BookId::new("1"))
///     .with_liked_book(BookId::new("deleted"));
///
/// let context = derive_preferred_authors(&catalog, &reader)?;
/// assert!(context.prefers_author("Frank Herbert"));
/// assert_eq!(context.author_count(), 1);
/// # Ok(())
/// # }
/// ```
pub fn derive_preferred_authors<C>(
    catalog: &C,
    profile: &ReaderProfile,
) -> Result<RelevanceContext, CatalogError>
where
    C: Catalog + ?Sized,
{
    let mut authors = HashSet::new();
    for id in profile.liked_books() {
        match catalog.book_by_id(id)? {
            Some(book) => {
                authors.insert(book.author);
            }
            None => debug!("liked book {id} not found in catalogue; skipping"),
        }
    }
    Ok(RelevanceContext::new(authors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use shelfwise_core::test_support::{FailingCatalog, MemoryCatalog};
    use shelfwise_core::{Book, BookId, Genre};

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::with_books([
            Book::new("1", "Book A", "Author X", [Genre::new("Fantasy")], 4.5).unwrap(),
            Book::new("2", "Book B", "Author Y", [Genre::new("SciFi")], 4.0).unwrap(),
            Book::new("3", "Book C", "Author X", [Genre::new("Fantasy")], 3.5).unwrap(),
        ])
    }

    fn reader_liking(ids: &[&str]) -> ReaderProfile {
        let mut profile = ReaderProfile::new("reader-1").unwrap();
        for id in ids {
            profile.mark_liked(BookId::new(*id));
        }
        profile
    }

    #[rstest]
    fn collects_distinct_authors() {
        let context = derive_preferred_authors(&catalog(), &reader_liking(&["1", "2", "3"]))
            .unwrap();
        assert_eq!(context.author_count(), 2);
        assert!(context.prefers_author("Author X"));
        assert!(context.prefers_author("Author Y"));
    }

    #[rstest]
    fn skips_unresolvable_ids_silently() {
        let context =
            derive_preferred_authors(&catalog(), &reader_liking(&["1", "ghost"])).unwrap();
        assert_eq!(context.author_count(), 1);
        assert!(context.prefers_author("Author X"));
    }

    #[rstest]
    fn empty_liked_set_yields_empty_context() {
        let context = derive_preferred_authors(&catalog(), &reader_liking(&[])).unwrap();
        assert_eq!(context.author_count(), 0);
    }

    #[rstest]
    fn backend_failure_propagates() {
        let result = derive_preferred_authors(&FailingCatalog, &reader_liking(&["1"]));
        assert!(result.is_err());
    }
}
