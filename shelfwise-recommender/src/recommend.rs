//! Request orchestration: filter, score, rank, truncate.

use log::debug;
use thiserror::Error;

use shelfwise_core::{Book, Catalog, CatalogError, ReaderProfile, Scorer};

use crate::authors::derive_preferred_authors;
use crate::score::ContentScorer;

/// Errors returned by [`Recommender::recommend`].
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The request was malformed; the caller must fix the call rather
    /// than retry it.
    #[error("invalid recommendation request: {reason}")]
    InvalidArgument {
        /// What was wrong with the request.
        reason: &'static str,
    },
    /// The catalogue could not be read. The engine does not retry
    /// internally; the caller decides whether to retry, degrade, or
    /// fall back to cached results.
    #[error("book catalogue could not be read")]
    Unavailable {
        /// Source failure from the catalogue backend.
        #[source]
        source: CatalogError,
    },
}

/// A candidate book together with its relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredBook {
    /// The recommended book.
    pub book: Book,
    /// Its relevance score under the configured scorer.
    pub score: f32,
}

/// Orchestrates catalogue access and scoring into ranked
/// recommendations.
///
/// The recommender is a pure read-and-compute pipeline: it holds no
/// per-request state, so one instance can serve concurrent requests
/// for different readers without locking. Long computations over large
/// catalogues run to completion once started; cancellation, timeouts,
/// and retries belong to the catalogue backend, not here.
///
/// # Examples
/// ```
/// use shelfwise_core::test_support::MemoryCatalog;
/// use shelfwise_core::{Book, Genre, ReaderProfile};
/// use shelfwise_recommender::Recommender;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = MemoryCatalog::with_book(Book::new(
///     "1", "Dune", "Frank Herbert", [Genre::new("SciFi")], 4.2,
/// )?);
/// let reader = ReaderProfile::new("reader-1")?
///     .with_favourite_genre(Genre::new("SciFi"));
///
/// let picks = Recommender::new(catalog).recommend(&reader, 5)?;
/// assert_eq!(picks.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Recommender<C, S = ContentScorer> {
    catalog: C,
    scorer: S,
}

impl<C: Catalog> Recommender<C> {
    /// Build a recommender over `catalog` using the canonical
    /// [`ContentScorer`].
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self::with_scorer(catalog, ContentScorer)
    }
}

impl<C: Catalog, S: Scorer> Recommender<C, S> {
    /// Build a recommender with an explicit scorer implementation.
    #[must_use]
    pub fn with_scorer(catalog: C, scorer: S) -> Self {
        Self { catalog, scorer }
    }

    /// Produce up to `limit` unread books for `reader`, ranked by
    /// descending relevance.
    ///
    /// Books the reader has read are excluded before scoring.
    /// Candidates whose score is not strictly positive are dropped, so
    /// a rating-only positive score is enough to keep a book even with
    /// zero genre overlap. Ties keep their catalogue fetch order; no
    /// secondary sort key is applied.
    ///
    /// An empty catalogue or an empty post-filter candidate set yields
    /// an empty result, not an error.
    ///
    /// # Errors
    /// - [`RecommendError::InvalidArgument`] when the profile carries
    ///   an empty reader identifier (possible for profiles produced by
    ///   deserialisation, which bypasses
    ///   [`ReaderProfile::new`](shelfwise_core::ReaderProfile::new)).
    /// - [`RecommendError::Unavailable`] when the catalogue cannot be
    ///   read.
    pub fn recommend(
        &self,
        reader: &ReaderProfile,
        limit: usize,
    ) -> Result<Vec<Book>, RecommendError> {
        Ok(self
            .recommend_scored(reader, limit)?
            .into_iter()
            .map(|scored| scored.book)
            .collect())
    }

    /// As [`Recommender::recommend`], but keep each candidate's score
    /// so callers can explain the ranking.
    ///
    /// # Errors
    /// See [`Recommender::recommend`].
    pub fn recommend_scored(
        &self,
        reader: &ReaderProfile,
        limit: usize,
    ) -> Result<Vec<ScoredBook>, RecommendError> {
        if reader.id().is_empty() {
            return Err(RecommendError::InvalidArgument {
                reason: "reader profile has an empty identifier",
            });
        }

        let books = self
            .catalog
            .all_books()
            .map_err(|source| RecommendError::Unavailable { source })?;
        let context = derive_preferred_authors(&self.catalog, reader)
            .map_err(|source| RecommendError::Unavailable { source })?;

        let total = books.len();
        let mut candidates: Vec<ScoredBook> = books
            .into_iter()
            .filter(|book| !reader.has_read(&book.id))
            .map(|book| {
                let score = self.scorer.score(&book, reader, &context);
                ScoredBook { book, score }
            })
            .collect();
        let scored = candidates.len();
        candidates.retain(|candidate| candidate.score > 0.0);

        debug!(
            "reader {}: scored {} of {} catalogue books, dropped {} with non-positive scores",
            reader.id(),
            scored,
            total,
            scored - candidates.len(),
        );

        // Stable sort: equal scores keep their catalogue fetch order.
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates.truncate(limit);
        Ok(candidates)
    }
}
