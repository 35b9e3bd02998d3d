//! Behaviour of the `Catalog` contract through the in-memory
//! implementation.

use rstest::{fixture, rstest};
use shelfwise_core::test_support::{FailingCatalog, MemoryCatalog};
use shelfwise_core::{Book, BookId, Catalog, CatalogError, Genre};

fn book(id: &str, title: &str, author: &str, genres: &[&str], rating: f32) -> Book {
    Book::new(id, title, author, genres.iter().map(Genre::new), rating).expect("valid book")
}

#[fixture]
fn catalog() -> MemoryCatalog {
    MemoryCatalog::with_books([
        book("1", "The Hobbit", "J. R. R. Tolkien", &["Fantasy"], 4.5),
        book("2", "Dune", "Frank Herbert", &["Science Fiction"], 4.2),
        book("3", "Emma", "Jane Austen", &["Romance"], 4.0),
    ])
}

#[rstest]
fn returns_every_book(catalog: MemoryCatalog) {
    let books = catalog.all_books().expect("catalogue is readable");
    assert_eq!(books.len(), 3);
}

#[rstest]
fn resolves_known_ids(catalog: MemoryCatalog) {
    let found = catalog
        .book_by_id(&BookId::new("2"))
        .expect("catalogue is readable")
        .expect("book 2 exists");
    assert_eq!(found.title, "Dune");
}

#[rstest]
fn unknown_id_is_absent_not_an_error(catalog: MemoryCatalog) {
    let found = catalog
        .book_by_id(&BookId::new("missing"))
        .expect("catalogue is readable");
    assert!(found.is_none());
}

#[rstest]
#[case("hobbit", &["1"])]
#[case("AUSTEN", &["3"])]
#[case("e", &["1", "2", "3"])] // substring of every title or author
#[case("zelazny", &[])]
fn search_covers_title_and_author(
    catalog: MemoryCatalog,
    #[case] query: &str,
    #[case] expected: &[&str],
) {
    let found = catalog.search(query).expect("catalogue is readable");
    let ids: Vec<&str> = found.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[rstest]
fn genre_filter_normalises_case(catalog: MemoryCatalog) {
    let found = catalog
        .books_with_genre(&Genre::new("SCIENCE FICTION"))
        .expect("catalogue is readable");
    assert_eq!(found.len(), 1);
    assert_eq!(found.first().map(|b| b.id.as_str()), Some("2"));
}

#[rstest]
fn failures_carry_a_source_error() {
    let err = FailingCatalog.all_books().expect_err("backend is down");
    let CatalogError::Unavailable { source } = err;
    assert!(!source.to_string().is_empty());
}
