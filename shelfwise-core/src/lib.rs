//! Core domain types for the Shelfwise recommendation engine.
//!
//! Books, genre tags, and reader profiles are checked when they are
//! built — fallible constructors reject empty identifiers and
//! non-finite ratings — so the scorer and recommender can trust their
//! inputs instead of re-validating them at every use.
//!
//! The crate defines the read-only [`Catalog`] contract, the [`Scorer`]
//! seam, and the domain model ([`Book`], [`Genre`], [`ReaderProfile`])
//! shared by every recommendation component.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod book;
pub mod catalog;
mod genre;
mod profile;
pub mod scorer;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use book::{Book, BookError, BookId};
pub use catalog::{Catalog, CatalogError};
pub use genre::Genre;
pub use profile::{ProfileError, ReaderProfile};
pub use scorer::{RelevanceContext, Scorer};
