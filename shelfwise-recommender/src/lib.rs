//! Content-based recommendation for Shelfwise book catalogues.
//!
//! The crate provides two complementary capabilities:
//! - **Relevance scoring** via [`ContentScorer`], the canonical
//!   deterministic formula: genre overlap dominates, a fixed author
//!   bonus equals one genre match, and a capped rating bonus breaks
//!   ties among otherwise equal candidates. [`ScoreBreakdown`] exposes
//!   the individual components so every ranking can be explained.
//! - **Request orchestration** via [`Recommender`], which fetches
//!   candidates from a [`Catalog`](shelfwise_core::Catalog), excludes
//!   already-read books before scoring, derives the preferred-author
//!   set from the reader's liked books, and returns the top-ranked
//!   remainder.
//!
//! Both pieces are pure and stateless: concurrent requests for the
//! same or different readers need no locking.
//!
//! # Examples
//!
//! ```
//! use shelfwise_core::{Book, BookId, Genre, ReaderProfile};
//! use shelfwise_core::test_support::MemoryCatalog;
//! use shelfwise_recommender::Recommender;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = MemoryCatalog::with_books([
//!     Book::new("1", "Dune", "Frank Herbert", [Genre::new("SciFi")], 4.2)?,
//!     Book::new("2", "Emma", "Jane Austen", [Genre::new("Romance")], 4.0)?,
//! ]);
//! let reader = ReaderProfile::new("reader-1")?
//!     .with_favourite_genre(Genre::new("SciFi"));
//!
//! let recommender = Recommender::new(catalog);
//! let picks = recommender.recommend(&reader, 10)?;
//! assert_eq!(picks.first().map(|b| b.id.clone()), Some(BookId::new("1")));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod authors;
mod recommend;
mod score;

pub use authors::derive_preferred_authors;
pub use recommend::{RecommendError, Recommender, ScoredBook};
pub use score::{ContentScorer, ScoreBreakdown};
