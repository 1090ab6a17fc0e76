//! Named registry of loaded corpora.
//!
//! An explicit object passed to whatever needs it, never process-global
//! state. Front ends use it to select among loaded resources; duplicate
//! names are last-write-wins.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::collections::BTreeMap;
use tracing::debug;

use crate::corpus::Corpus;

/// A name → corpus map with fuzzy lookup.
#[derive(Debug, Default)]
pub struct Library {
    resources: BTreeMap<String, Corpus>,
}

impl Library {
    /// Empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a corpus under `name`, replacing any previous holder of
    /// that name.
    pub fn add(&mut self, name: impl Into<String>, corpus: Corpus) {
        let name = name.into();
        if self.resources.insert(name.clone(), corpus).is_some() {
            debug!("replaced resource '{name}'");
        }
    }

    /// Corpus registered under exactly `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Corpus> {
        self.resources.get(name)
    }

    /// Corpus whose name matches `name` case-insensitively.
    #[must_use]
    pub fn get_ignore_case(&self, name: &str) -> Option<&Corpus> {
        self.resources
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.resources.keys().map(String::as_str).collect()
    }

    /// Number of registered corpora.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the library holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Fuzzy-match `query` against resource names, best first.
    #[must_use]
    pub fn find(&self, query: &str) -> Vec<(&str, i64)> {
        let matcher = SkimMatcherV2::default();
        let query = query.trim().to_lowercase();

        let mut results: Vec<(&str, i64)> = self
            .resources
            .keys()
            .filter_map(|name| {
                matcher
                    .fuzzy_match(&name.to_lowercase(), &query)
                    .map(|score| (name.as_str(), score))
            })
            .collect();
        results.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        results
    }
}
