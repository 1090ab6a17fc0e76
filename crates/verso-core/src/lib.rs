//! # verso-core
//!
//! Reference resolution and navigation for hierarchical texts: books of
//! chapters of lines, bible-style book/chapter/verse, or flat
//! speaker/quote collections.
//!
//! The core idea is a uniform addressing scheme: a compact human string
//! ("Chapter 2:1-3", "jn 3:16", "Albert Einstein::3") resolves into a
//! typed [`Reference`] over an immutable [`Corpus`], which can then be
//! navigated (parent/children/siblings), rendered back to canonical text,
//! searched, and compared for order and overlap with any other reference
//! through its global line interval.
//!
//! ## Quick start
//!
//! ```rust
//! use verso_core::{Corpus, Result};
//!
//! fn main() -> Result<()> {
//! let mut builder = Corpus::builder("PRIDE AND PREJUDICE");
//! builder.push_unit("PRIDE AND PREJUDICE");
//! builder.push_chapter(1, vec![
//!     "It is a truth universally acknowledged,".to_string(),
//!     "that a single man in possession of a good fortune,".to_string(),
//!     "must be in want of a wife.".to_string(),
//! ])?;
//! let corpus = builder.finish()?;
//!
//! let span = corpus.reference("1:1-2")?;
//! assert_eq!(span.pretty(), "Chapter 1:1-2");
//! assert_eq!(span.children().map(|c| c.len()), Some(2));
//!
//! let hits = span.search("truth")?;
//! assert_eq!(hits[0].pretty(), "Chapter 1:1");
//! # Ok(())
//! # }
//! ```
//!
//! ## Design
//!
//! - The [`Corpus`] owns all text; references are `Copy` borrowed views
//!   and never duplicate content.
//! - References form a closed set of span shapes ([`Span`]); callers
//!   dispatch by matching, not by probing operations for failure.
//! - Everything is a pure function of (corpus, coordinates): corpora are
//!   immutable after construction, so references can be held and
//!   traversed concurrently without coordination.
//! - Ordering and overlap between arbitrary reference shapes reduce to
//!   comparing [`Indices`] intervals of global line numbers assigned at
//!   load time.

/// Bible book-name abbreviation table
pub mod aliases;
/// Immutable corpus storage and its builder
pub mod corpus;
/// Error types and result alias
pub mod error;
/// Named registry of loaded corpora
pub mod library;
/// JSON and TSV corpus loaders
pub mod loader;
/// The reference grammar parser
pub mod parse;
/// Typed references and navigation
pub mod reference;
/// Span-scoped pattern search
pub mod search;

// Re-export commonly used types
pub use aliases::BibleNames;
pub use corpus::{Corpus, CorpusBuilder, Style, Unit};
pub use error::{Error, Result};
pub use library::Library;
pub use parse::{NameNormalizer, ReferenceParser};
pub use reference::{Indices, Reference, Span};
