//! Score books for a reader profile.
//!
//! The `Scorer` trait assigns a relevance score to a [`Book`] given a
//! reader's [`ReaderProfile`] and the precomputed [`RelevanceContext`].

use std::collections::HashSet;

use crate::{Book, ReaderProfile};

/// Auxiliary per-request context derived before scoring begins.
///
/// Currently this carries the preferred-author set: the distinct
/// authors of every book the reader has liked. Authorship is a binary
/// match signal; the set is never weighted by how many liked books an
/// author has.
///
/// # Examples
/// ```
/// use shelfwise_core::RelevanceContext;
///
/// let context = RelevanceContext::new(["Frank Herbert".to_owned()]);
/// assert!(context.prefers_author("Frank Herbert"));
/// assert!(!context.prefers_author("Jane Austen"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelevanceContext {
    preferred_authors: HashSet<String>,
}

impl RelevanceContext {
    /// Build a context from a set of preferred authors.
    #[must_use]
    pub fn new(preferred_authors: impl IntoIterator<Item = String>) -> Self {
        Self {
            preferred_authors: preferred_authors.into_iter().collect(),
        }
    }

    /// Report whether the author wrote a book the reader liked.
    ///
    /// Comparison is exact string equality on the author field.
    #[must_use]
    pub fn prefers_author(&self, author: &str) -> bool {
        self.preferred_authors.contains(author)
    }

    /// Number of distinct preferred authors.
    #[must_use]
    pub fn author_count(&self) -> usize {
        self.preferred_authors.len()
    }
}

/// Calculate a relevance score for a candidate book.
///
/// Higher scores indicate a better match between the book and the
/// reader's preferences. Implementations must be thread-safe (`Send` +
/// `Sync`) so scorers can serve concurrent requests, and must never
/// mutate their inputs.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Return non-negative values.
///
/// Scores have no upper bound: genre overlap contributes one whole
/// point per match and a book may match arbitrarily many genres. Use
/// [`Scorer::sanitise`] to apply the finiteness and sign guards.
///
/// # Examples
///
/// ```rust
/// use shelfwise_core::{Book, Genre, ReaderProfile, RelevanceContext, Scorer};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn score(&self, _book: &Book, _profile: &ReaderProfile, _context: &RelevanceContext) -> f32 {
///         1.0
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let book = Book::new("1", "Dune", "Frank Herbert", [Genre::new("SciFi")], 4.2)?;
/// let profile = ReaderProfile::new("reader-1")?;
/// assert_eq!(UnitScorer.score(&book, &profile, &RelevanceContext::default()), 1.0);
/// # Ok(())
/// # }
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `book` according to `profile` and `context`.
    fn score(&self, book: &Book, profile: &ReaderProfile, context: &RelevanceContext) -> f32;

    /// Validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and floors negatives at
    /// `0.0`. There is no upper clamp.
    fn sanitise(score: f32) -> f32 {
        if !score.is_finite() {
            return 0.0;
        }
        score.max(0.0)
    }
}
