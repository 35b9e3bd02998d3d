//! Facade crate for the Shelfwise book recommendation engine.
//!
//! This crate re-exports the core domain types, the read-only
//! catalogue contract, and the canonical content-based recommender.
//! The in-memory test catalogue is available behind the
//! `test-support` feature.
//!
//! # Examples
//!
//! ```
//! use shelfwise_engine::{Book, BookId, Catalog, CatalogError, Genre, ReaderProfile, Recommender};
//!
//! struct SliceCatalog {
//!     books: Vec<Book>,
//! }
//!
//! impl Catalog for SliceCatalog {
//!     fn all_books(&self) -> Result<Vec<Book>, CatalogError> {
//!         Ok(self.books.clone())
//!     }
//!
//!     fn book_by_id(&self, id: &BookId) -> Result<Option<Book>, CatalogError> {
//!         Ok(self.books.iter().find(|b| &b.id == id).cloned())
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = SliceCatalog {
//!     books: vec![Book::new(
//!         "1", "Dune", "Frank Herbert", [Genre::new("SciFi")], 4.2,
//!     )?],
//! };
//! let reader = ReaderProfile::new("reader-1")?
//!     .with_favourite_genre(Genre::new("SciFi"));
//!
//! let picks = Recommender::new(catalog).recommend(&reader, 5)?;
//! assert_eq!(picks.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use shelfwise_core::{
    Book, BookError, BookId, Catalog, CatalogError, Genre, ProfileError, ReaderProfile,
    RelevanceContext, Scorer,
};

#[cfg(feature = "test-support")]
pub use shelfwise_core::test_support;

pub use shelfwise_recommender::{
    ContentScorer, RecommendError, Recommender, ScoreBreakdown, ScoredBook,
    derive_preferred_authors,
};
