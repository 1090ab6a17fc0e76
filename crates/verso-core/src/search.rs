//! Pattern search scoped to a reference span.
//!
//! A linear scan, by design: corpora here are at most tens of thousands of
//! lines, and keeping no index keeps the corpus trivially immutable.
//! Matching is per-line; a line either matches (included once) or it
//! doesn't.

use regex::Regex;

use crate::corpus::Corpus;
use crate::reference::{Reference, Span};
use crate::Result;

/// Scan `span` for lines matching `pattern`, in document order.
///
/// `pattern` is a regular expression. By convention a non-empty pattern
/// consisting entirely of lowercase alphabetic characters is matched
/// case-insensitively (an inline `(?i)` flag is prefixed); any other
/// pattern is compiled verbatim and case sensitivity is the caller's
/// responsibility.
pub fn scoped<'c>(corpus: &'c Corpus, span: Span, pattern: &str) -> Result<Vec<Reference<'c>>> {
    let regex = compile(pattern)?;
    let mut hits = Vec::new();

    match span {
        Span::Document => {
            for unit in 1..=corpus.unit_count() {
                scan_unit(corpus, &regex, unit, &mut hits);
            }
        },
        Span::Unit { unit } => scan_unit(corpus, &regex, unit, &mut hits),
        Span::Units { first, last } => {
            for unit in first..=last {
                scan_unit(corpus, &regex, unit, &mut hits);
            }
        },
        Span::Chapter { unit, chapter } => {
            scan_chapter(corpus, &regex, unit, chapter, &mut hits);
        },
        Span::Chapters { unit, first, last } => {
            for chapter in first..=last {
                scan_chapter(corpus, &regex, unit, chapter, &mut hits);
            }
        },
        Span::Lines {
            unit,
            chapter,
            first,
            last,
        } => scan_lines(corpus, &regex, unit, chapter, first, last, &mut hits),
    }

    Ok(hits)
}

fn scan_unit<'c>(corpus: &'c Corpus, regex: &Regex, unit: usize, hits: &mut Vec<Reference<'c>>) {
    for chapter in 1..=corpus.unit_at(unit).chapter_count() {
        scan_chapter(corpus, regex, unit, chapter, hits);
    }
}

fn scan_chapter<'c>(
    corpus: &'c Corpus,
    regex: &Regex,
    unit: usize,
    chapter: usize,
    hits: &mut Vec<Reference<'c>>,
) {
    let count = corpus.chapter_at(unit, chapter).len();
    scan_lines(corpus, regex, unit, chapter, 1, count, hits);
}

fn scan_lines<'c>(
    corpus: &'c Corpus,
    regex: &Regex,
    unit: usize,
    chapter: usize,
    first: usize,
    last: usize,
    hits: &mut Vec<Reference<'c>>,
) {
    let data = corpus.chapter_at(unit, chapter);
    for line in first..=last {
        if regex.is_match(data.line_text(line)) {
            hits.push(Reference::line(corpus, unit, chapter, line));
        }
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    if all_lowercase_alphabetic(pattern) {
        Ok(Regex::new(&format!("(?i){pattern}"))?)
    } else {
        Ok(Regex::new(pattern)?)
    }
}

fn all_lowercase_alphabetic(pattern: &str) -> bool {
    !pattern.is_empty() && pattern.chars().all(char::is_lowercase)
}
