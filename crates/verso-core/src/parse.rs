//! The reference grammar: compact strings into typed references.
//!
//! The grammar, informally (the `chapter` keyword is case-insensitive):
//!
//! ```text
//! reference    := [unit-name] chapter-spec | unit-name
//! chapter-spec := number ["-" number] [":" number ["-" number]]
//! unit-name    := free text not matching "chapter" or pure digits
//! ```
//!
//! So `"John 3:16"`, `"chapter 2-3"`, `"3"`, `"2:1-5"`, and a bare
//! `"Genesis"` all resolve. Unit names go through an injected
//! [`NameNormalizer`] so front ends can plug in alias tables
//! (`"jn"` → `"John"`); the parser itself knows nothing about any
//! particular corpus's names.
//!
//! The parser always returns the narrowest reference the tokens support,
//! and never widens a malformed form into a broader one: a chapter range
//! combined with a line spec (`"2-3:4"`) is unparsable rather than being
//! quietly reduced.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::corpus::{Corpus, Style};
use crate::reference::{Reference, Span};
use crate::{Error, Result};

#[allow(clippy::expect_used)]
static CHAPTER_SPEC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?P<name>\S.*?)\s+)?(?P<c1>\d+)(?:\s*-\s*(?P<c2>\d+))?(?:\s*:\s*(?P<l1>\d+)(?:\s*-\s*(?P<l2>\d+))?)?$",
    )
    .expect("chapter-spec grammar")
});

#[allow(clippy::expect_used)]
static DELIMITED_NUMBERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)(?:\s*-\s*(\d+))?$").expect("delimited-numbers grammar"));

#[allow(clippy::expect_used)]
static DOT_SHORTHAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d)\.(\d)").expect("dot-shorthand rewrite"));

/// Maps raw unit names (aliases, abbreviations) to canonical form.
///
/// Injected into the parser; returning `None` means the name is unknown,
/// which surfaces as `UnparsableReference`. Implemented for any
/// `Fn(&str) -> Option<String>`.
pub trait NameNormalizer {
    /// Canonical form of `raw`, or `None` if unrecognized.
    fn normalize(&self, raw: &str) -> Option<String>;
}

impl<F> NameNormalizer for F
where
    F: Fn(&str) -> Option<String>,
{
    fn normalize(&self, raw: &str) -> Option<String> {
        self(raw)
    }
}

/// Parses reference strings against one corpus.
#[derive(Clone, Copy)]
pub struct ReferenceParser<'c, 'n> {
    corpus: &'c Corpus,
    normalizer: Option<&'n dyn NameNormalizer>,
    dot_shorthand: bool,
}

impl Corpus {
    /// Parse `input` with default options and no alias normalizer.
    pub fn reference(&self, input: &str) -> Result<Reference<'_>> {
        ReferenceParser::new(self).parse(input)
    }
}

impl<'c, 'n> ReferenceParser<'c, 'n> {
    /// Parser over `corpus` with no normalizer and no shorthand rewrites.
    #[must_use]
    pub const fn new(corpus: &'c Corpus) -> Self {
        Self {
            corpus,
            normalizer: None,
            dot_shorthand: false,
        }
    }

    /// Resolve unit names through `normalizer` when they don't match a
    /// unit directly.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: &'n dyn NameNormalizer) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    /// Accept `Chapter.Verse` dot shorthand by rewriting digit-adjacent
    /// dots to colons before matching. Off by default.
    #[must_use]
    pub const fn dot_shorthand(mut self, enabled: bool) -> Self {
        self.dot_shorthand = enabled;
        self
    }

    /// Parse `input` into the narrowest constructible reference.
    ///
    /// Grammar failures and unresolvable names are
    /// [`Error::UnparsableReference`]; out-of-bounds coordinates in an
    /// otherwise well-formed reference are [`Error::InvalidReference`].
    pub fn parse(&self, input: &str) -> Result<Reference<'c>> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::UnparsableReference("empty reference".to_string()));
        }
        if let Style::Delimited { delimiter } = self.corpus.style() {
            return self.parse_delimited(input, delimiter);
        }
        self.parse_chapter_spec(input)
    }

    fn parse_chapter_spec(&self, input: &str) -> Result<Reference<'c>> {
        let rewritten;
        let text = if self.dot_shorthand {
            rewritten = DOT_SHORTHAND.replace_all(input, "$1:$2");
            rewritten.as_ref()
        } else {
            input
        };

        if let Some(caps) = CHAPTER_SPEC.captures(text) {
            let name = caps.name("name").map(|m| m.as_str());
            let Some(c1) = caps.name("c1").map(number).transpose()? else {
                return Err(Error::UnparsableReference(format!(
                    "no chapter number in '{input}'"
                )));
            };
            let c2 = caps.name("c2").map(number).transpose()?;
            let l1 = caps.name("l1").map(number).transpose()?;
            let l2 = caps.name("l2").map(number).transpose()?;

            let unit = self.unit_for(name)?;
            let span = match (c2, l1, l2) {
                (None, None, None) => Span::Chapter { unit, chapter: c1 },
                (Some(c2), None, None) => Span::Chapters {
                    unit,
                    first: c1,
                    last: c2,
                },
                (None, Some(l1), None) => Span::Lines {
                    unit,
                    chapter: c1,
                    first: l1,
                    last: l1,
                },
                (None, Some(l1), Some(l2)) => Span::Lines {
                    unit,
                    chapter: c1,
                    first: l1,
                    last: l2,
                },
                (Some(_), _, _) | (None, None, Some(_)) => {
                    return Err(Error::UnparsableReference(format!(
                        "'{input}' mixes a chapter range with a line spec"
                    )));
                },
            };
            return Reference::new(self.corpus, span);
        }

        // No chapter spec at all: try the whole input as a unit name, then
        // as a range of unit names.
        if let Some(unit) = self.resolve_name(text) {
            return Reference::new(self.corpus, Span::Unit { unit });
        }
        if let Some((first, last)) = text.split_once('-') {
            if let (Some(first), Some(last)) =
                (self.resolve_name(first.trim()), self.resolve_name(last.trim()))
            {
                return Reference::new(self.corpus, Span::Units { first, last });
            }
        }

        Err(Error::UnparsableReference(format!(
            "unrecognized reference '{input}'"
        )))
    }

    fn parse_delimited(&self, input: &str, delimiter: &str) -> Result<Reference<'c>> {
        if let Some((name, numbers)) = input.split_once(delimiter) {
            let name = name.trim();
            let unit = self.resolve_name(name).ok_or_else(|| {
                Error::UnparsableReference(format!("unknown name '{name}'"))
            })?;
            let caps = DELIMITED_NUMBERS.captures(numbers.trim()).ok_or_else(|| {
                Error::UnparsableReference(format!(
                    "expected an entry number after '{delimiter}'"
                ))
            })?;
            let Some(first) = caps.get(1).map(number).transpose()? else {
                return Err(Error::UnparsableReference(format!(
                    "expected an entry number after '{delimiter}'"
                )));
            };
            let last = caps.get(2).map(number).transpose()?.unwrap_or(first);
            return Reference::new(
                self.corpus,
                Span::Lines {
                    unit,
                    chapter: 1,
                    first,
                    last,
                },
            );
        }
        match self.resolve_name(input) {
            Some(unit) => Reference::new(self.corpus, Span::Unit { unit }),
            None => Err(Error::UnparsableReference(format!(
                "unknown name '{input}'"
            ))),
        }
    }

    // Unit for an explicit, keyword, or absent name. An absent or keyword
    // name is only unambiguous when the corpus has exactly one unit.
    fn unit_for(&self, name: Option<&str>) -> Result<usize> {
        match name {
            None => self.implied_unit(),
            Some(raw) if raw.eq_ignore_ascii_case("chapter") => self.implied_unit(),
            Some(raw) => self.resolve_name(raw).ok_or_else(|| {
                Error::UnparsableReference(format!("unknown unit name '{raw}'"))
            }),
        }
    }

    fn implied_unit(&self) -> Result<usize> {
        if self.corpus.unit_count() == 1 {
            Ok(1)
        } else {
            Err(Error::UnparsableReference(
                "no unit named, and the corpus has several".to_string(),
            ))
        }
    }

    // Direct case-insensitive match first, then one normalizer round.
    fn resolve_name(&self, raw: &str) -> Option<usize> {
        if let Some(unit) = self.corpus.unit_named(raw) {
            return Some(unit);
        }
        let canonical = self.normalizer?.normalize(raw)?;
        self.corpus.unit_named(&canonical)
    }
}

fn number(m: regex::Match<'_>) -> Result<usize> {
    m.as_str()
        .parse()
        .map_err(|_| Error::UnparsableReference(format!("number '{}' is out of range", m.as_str())))
}
