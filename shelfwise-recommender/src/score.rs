//! The canonical content-based relevance formula.
//!
//! `score = genre_overlap + author_bonus + rating_bonus` where genre
//! overlap counts whole points per shared tag, the author bonus is a
//! fixed nudge worth exactly one genre match, and the rating bonus is
//! capped at [`RATING_WEIGHT`] so a highly rated but genre-irrelevant
//! book can never outrank a genre-relevant one.

use shelfwise_core::{Book, ReaderProfile, RelevanceContext, Scorer};

/// Bonus granted when the book's author wrote a liked book.
pub const AUTHOR_BONUS: f32 = 1.0;
/// Maximum contribution of the rating term.
pub const RATING_WEIGHT: f32 = 0.3;
/// Nominal top of the rating scale.
pub const RATING_SCALE: f32 = 5.0;

/// The individual components of a candidate's relevance score.
///
/// Exposing the breakdown keeps rankings explainable: a caller can
/// report *why* a book was recommended, not just that it was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Number of genre tags shared with the reader's favourites.
    pub genre_overlap: u32,
    /// [`AUTHOR_BONUS`] when the author matches, `0.0` otherwise.
    pub author_bonus: f32,
    /// Normalised rating contribution in `0.0..=RATING_WEIGHT` for
    /// nominal ratings; out-of-range ratings are applied unclamped.
    pub rating_bonus: f32,
}

impl ScoreBreakdown {
    /// Sum the components into the final relevance score.
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "genre overlap is far below f32's integer precision limit"
    )]
    #[must_use]
    pub fn total(&self) -> f32 {
        self.genre_overlap as f32 + self.author_bonus + self.rating_bonus
    }
}

/// The canonical deterministic scorer.
///
/// Stateless and copyable; a single instance can serve every request.
///
/// # Examples
/// ```
/// use shelfwise_core::{Book, Genre, ReaderProfile, RelevanceContext, Scorer};
/// use shelfwise_recommender::ContentScorer;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let book = Book::new("1", "Dune", "Frank Herbert", [Genre::new("SciFi")], 4.0)?;
/// let reader = ReaderProfile::new("reader-1")?
///     .with_favourite_genre(Genre::new("SciFi"));
///
/// let score = ContentScorer.score(&book, &reader, &RelevanceContext::default());
/// // One genre match plus (4.0 / 5.0) * 0.3.
/// assert!((score - 1.24).abs() < 1e-6);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct ContentScorer;

impl ContentScorer {
    /// Compute the score components for a candidate without summing
    /// them.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::float_arithmetic,
        reason = "a book carries far fewer than u32::MAX genre tags; the \
                  rating term is a bounded normalisation"
    )]
    #[must_use]
    pub fn breakdown(
        &self,
        book: &Book,
        profile: &ReaderProfile,
        context: &RelevanceContext,
    ) -> ScoreBreakdown {
        let genre_overlap = book
            .genres
            .iter()
            .filter(|genre| profile.favourite_genres().contains(genre))
            .count() as u32;

        let author_bonus = if context.prefers_author(&book.author) {
            AUTHOR_BONUS
        } else {
            0.0
        };

        // Unrated books contribute nothing, never a penalty. Finite
        // out-of-range ratings are applied as-is, without clamping.
        let rating_bonus = if book.rating > 0.0 {
            (book.rating / RATING_SCALE) * RATING_WEIGHT
        } else {
            0.0
        };

        ScoreBreakdown {
            genre_overlap,
            author_bonus,
            rating_bonus,
        }
    }
}

impl Scorer for ContentScorer {
    fn score(&self, book: &Book, profile: &ReaderProfile, context: &RelevanceContext) -> f32 {
        <Self as Scorer>::sanitise(self.breakdown(book, profile, context).total())
    }
}
