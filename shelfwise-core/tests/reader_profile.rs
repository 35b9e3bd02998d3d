//! Behaviour of `ReaderProfile` construction and history tracking.

use rstest::rstest;
use shelfwise_core::{BookId, Genre, ProfileError, ReaderProfile};

#[rstest]
fn builds_with_chained_history() {
    let profile = ReaderProfile::new("reader-1")
        .expect("valid profile")
        .with_favourite_genre(Genre::new("Fantasy"))
        .with_read_book(BookId::new("1"))
        .with_liked_book(BookId::new("2"));

    assert_eq!(profile.id(), "reader-1");
    assert!(profile.favourite_genres().contains(&Genre::new("fantasy")));
    assert!(profile.has_read(&BookId::new("1")));
    assert!(profile.liked_books().contains(&BookId::new("2")));
}

#[rstest]
fn rejects_an_empty_identifier() {
    assert_eq!(
        ReaderProfile::new("").expect_err("empty id must be rejected"),
        ProfileError::MissingId
    );
}

#[rstest]
fn favourite_genres_are_deduplicated_after_normalisation() {
    let profile = ReaderProfile::new("reader-1")
        .expect("valid profile")
        .with_favourite_genre(Genre::new("Fantasy"))
        .with_favourite_genre(Genre::new("FANTASY"));

    assert_eq!(profile.favourite_genres().len(), 1);
}

#[cfg(feature = "serde")]
#[rstest]
fn round_trips_through_serde() {
    let profile = ReaderProfile::new("reader-1")
        .expect("valid profile")
        .with_favourite_genre(Genre::new("Fantasy"))
        .with_read_book(BookId::new("1"));

    let json = serde_json::to_string(&profile).expect("serialises");
    let decoded: ReaderProfile = serde_json::from_str(&json).expect("deserialises");
    assert_eq!(decoded, profile);
}
