//! Error types and handling for verso-core operations.
//!
//! The first four variants are the contract kinds callers dispatch on:
//! corpus construction failures, grammar failures, bounds failures, and
//! operations a reference variant does not support. The rest cover the
//! ambient load path (I/O, deserialization, bad search patterns).
//!
//! `UnparsableReference` is the one recoverable kind: an interactive front
//! end should treat it as "this wasn't a reference" and fall back to a
//! text search. Everything else is surfaced as-is.

use thiserror::Error;

/// The main error type for verso-core operations.
///
/// All public functions in verso-core return `Result<T, Error>`. Errors are
/// never used for control flow inside the crate; ambiguity and bounds
/// violations propagate to the caller so front ends can decide fallback
/// behavior.
#[derive(Error, Debug)]
pub enum Error {
    /// Source structure violates the corpus invariants: an empty unit or
    /// chapter, or non-contiguous chapter/line numbering in the source
    /// data. Fatal to that load; already-loaded corpora are unaffected.
    #[error("malformed corpus: {0}")]
    MalformedCorpus(String),

    /// The input string does not match any recognized reference form, or
    /// its unit name cannot be resolved.
    #[error("unparsable reference: {0}")]
    UnparsableReference(String),

    /// Syntactically valid reference with out-of-bounds coordinates, or a
    /// range whose start exceeds its end. Never silently clamped.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// The reference is structurally valid but the requested operation has
    /// no defined result for its variant (e.g. `text()` on a whole
    /// document).
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A search pattern failed to compile as a regular expression.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// I/O failure while reading source data.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source data could not be deserialized (bad JSON, wrong shape).
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Whether a front end can meaningfully recover from this error.
    ///
    /// Only `UnparsableReference` qualifies: the conventional recovery is
    /// to treat the input as a search query instead. Bounds violations are
    /// deliberate caller-visible failures, and load errors are fatal to
    /// that load.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnparsableReference(_))
    }

    /// Error category as a static string, for logging and metrics.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::MalformedCorpus(_) => "malformed_corpus",
            Self::UnparsableReference(_) => "unparsable_reference",
            Self::InvalidReference(_) => "invalid_reference",
            Self::UnsupportedOperation(_) => "unsupported_operation",
            Self::Pattern(_) => "pattern",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
