//! Typed references: addressable, navigable spans over a corpus.
//!
//! A [`Reference`] is a cheap borrowed view pairing a [`Corpus`] with a
//! [`Span`] of structural coordinates. It never copies text. The six span
//! shapes form a closed set; callers dispatch by matching on [`Span`]
//! rather than probing operations for failure.
//!
//! Navigation is computed, not stored: `parent()` re-derives the containing
//! reference from coordinates, and `previous()`/`next()` are positional
//! lookups in the parent's children. There are no back-pointers and no
//! cycles.

use std::fmt;

use crate::corpus::{Corpus, Style};
use crate::search;
use crate::{Error, Result};

/// Structural coordinates of a reference, independent of any corpus.
///
/// All coordinates are 1-based; all ranges are inclusive and non-empty
/// (`first <= last`). A single line is the degenerate `Lines` case with
/// `first == last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span {
    /// The whole corpus.
    Document,
    /// One unit (book).
    Unit {
        /// Unit position.
        unit: usize,
    },
    /// A contiguous range of units.
    Units {
        /// First unit in the range.
        first: usize,
        /// Last unit in the range.
        last: usize,
    },
    /// One chapter within a unit.
    Chapter {
        /// Owning unit.
        unit: usize,
        /// Chapter number.
        chapter: usize,
    },
    /// A contiguous range of chapters within one unit.
    Chapters {
        /// Owning unit.
        unit: usize,
        /// First chapter in the range.
        first: usize,
        /// Last chapter in the range.
        last: usize,
    },
    /// A contiguous range of lines within one chapter.
    Lines {
        /// Owning unit.
        unit: usize,
        /// Owning chapter.
        chapter: usize,
        /// First line in the range.
        first: usize,
        /// Last line in the range.
        last: usize,
    },
}

impl Span {
    /// Short name of the span shape, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Unit { .. } => "unit",
            Self::Units { .. } => "unit range",
            Self::Chapter { .. } => "chapter",
            Self::Chapters { .. } => "chapter range",
            Self::Lines { .. } => "line span",
        }
    }
}

/// Inclusive interval of global line indices.
///
/// Two references of any shape can be compared for order and overlap
/// through their intervals: `a` wholly precedes `b` iff
/// `a.end < b.start`, and they overlap iff neither precedes the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indices {
    /// Global index of the first contained line.
    pub start: usize,
    /// Global index of the last contained line.
    pub end: usize,
}

impl Indices {
    /// Whether `self` ends before `other` begins.
    #[must_use]
    pub const fn precedes(self, other: Self) -> bool {
        self.end < other.start
    }

    /// Whether the two intervals share at least one line.
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        !self.precedes(other) && !other.precedes(self)
    }

    /// Whether `other` lies entirely within `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// A validated, addressable span of a corpus.
///
/// References are `Copy` value objects; creating, navigating, and comparing
/// them allocates nothing beyond the child vectors navigation returns. The
/// corpus must outlive every reference derived from it, which the borrow
/// carries in the type.
#[derive(Clone, Copy)]
pub struct Reference<'c> {
    corpus: &'c Corpus,
    span: Span,
}

impl Corpus {
    /// Reference covering this entire corpus.
    #[must_use]
    pub fn document(&self) -> Reference<'_> {
        Reference {
            corpus: self,
            span: Span::Document,
        }
    }
}

impl<'c> Reference<'c> {
    /// Build a reference after validating `span` against the corpus
    /// bounds. Ranges must run forward; nothing is clamped.
    pub fn new(corpus: &'c Corpus, span: Span) -> Result<Self> {
        let unit_count = corpus.unit_count();
        let check_unit = |unit: usize| -> Result<()> {
            if unit == 0 || unit > unit_count {
                return Err(Error::InvalidReference(format!(
                    "unit {unit} out of range (1-{unit_count})"
                )));
            }
            Ok(())
        };
        let check_chapter = |unit: usize, chapter: usize| -> Result<()> {
            check_unit(unit)?;
            let count = corpus.chapter_count(unit).unwrap_or(0);
            if chapter == 0 || chapter > count {
                return Err(Error::InvalidReference(format!(
                    "chapter {chapter} out of range (1-{count}) in {}",
                    corpus.unit_at(unit).name()
                )));
            }
            Ok(())
        };

        match span {
            Span::Document => {},
            Span::Unit { unit } => check_unit(unit)?,
            Span::Units { first, last } => {
                if first > last {
                    return Err(Error::InvalidReference(format!(
                        "unit range {first}-{last} runs backwards"
                    )));
                }
                check_unit(first)?;
                check_unit(last)?;
            },
            Span::Chapter { unit, chapter } => check_chapter(unit, chapter)?,
            Span::Chapters { unit, first, last } => {
                if first > last {
                    return Err(Error::InvalidReference(format!(
                        "chapter range {first}-{last} runs backwards"
                    )));
                }
                check_chapter(unit, first)?;
                check_chapter(unit, last)?;
            },
            Span::Lines {
                unit,
                chapter,
                first,
                last,
            } => {
                check_chapter(unit, chapter)?;
                if first > last {
                    return Err(Error::InvalidReference(format!(
                        "line range {first}-{last} runs backwards"
                    )));
                }
                let count = corpus.line_count(unit, chapter).unwrap_or(0);
                if first == 0 || last > count {
                    return Err(Error::InvalidReference(format!(
                        "line range {first}-{last} out of range (1-{count})"
                    )));
                }
            },
        }

        Ok(Self { corpus, span })
    }

    /// Trusted constructor for coordinates already proven valid.
    pub(crate) const fn raw(corpus: &'c Corpus, span: Span) -> Self {
        Self { corpus, span }
    }

    /// The coordinates of this reference. This is the variant tag callers
    /// dispatch on.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// The corpus this reference points into.
    #[must_use]
    pub const fn corpus(&self) -> &'c Corpus {
        self.corpus
    }

    /// Whether this is a single line (a degenerate span with no further
    /// decomposition).
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self.span, Span::Lines { first, last, .. } if first == last)
    }

    fn unit_name(&self, unit: usize) -> &'c str {
        self.corpus.unit_at(unit).name()
    }

    /// Prefix used when rendering chapter and line references: the unit
    /// name in a multi-unit corpus, the literal word "Chapter" otherwise.
    fn prefix(&self, unit: usize) -> &'c str {
        if self.corpus.unit_count() == 1 {
            "Chapter"
        } else {
            self.unit_name(unit)
        }
    }

    /// Canonical human-readable form: `"John 3:16"`, `"Chapter 2-3"`,
    /// `"PRIDE AND PREJUDICE"`. The unit prefix is included everywhere
    /// except at document level.
    #[must_use]
    pub fn pretty(&self) -> String {
        if let Style::Delimited { delimiter } = self.corpus.style() {
            return match self.span {
                Span::Document => self.corpus.title().to_string(),
                Span::Unit { unit }
                | Span::Chapter { unit, .. }
                | Span::Chapters { unit, .. } => self.unit_name(unit).to_string(),
                Span::Units { first, last } => {
                    format!("{}-{}", self.unit_name(first), self.unit_name(last))
                },
                Span::Lines {
                    unit, first, last, ..
                } => {
                    let mut s = format!("{}{delimiter}{first}", self.unit_name(unit));
                    if first != last {
                        s.push_str(&format!("-{last}"));
                    }
                    s
                },
            };
        }

        match self.span {
            Span::Document => self.corpus.title().to_string(),
            Span::Unit { unit } => self.unit_name(unit).to_string(),
            Span::Units { first, last } => {
                format!("{}-{}", self.unit_name(first), self.unit_name(last))
            },
            Span::Chapter { unit, chapter } => format!("{} {chapter}", self.prefix(unit)),
            Span::Chapters { unit, first, last } => {
                format!("{} {first}-{last}", self.prefix(unit))
            },
            Span::Lines {
                unit,
                chapter,
                first,
                last,
            } => {
                let mut s = format!("{} {chapter}:{first}", self.prefix(unit));
                if first != last {
                    s.push_str(&format!("-{last}"));
                }
                s
            },
        }
    }

    /// Minimal self-relative label, for rendering children under an
    /// already-identified parent: a line renders just its number.
    #[must_use]
    pub fn short(&self) -> String {
        match self.span {
            Span::Document => self.corpus.title().to_string(),
            Span::Unit { unit } => self.unit_name(unit).to_string(),
            Span::Units { first, last } => {
                format!("{}-{}", self.unit_name(first), self.unit_name(last))
            },
            Span::Chapter { chapter, .. } => chapter.to_string(),
            Span::Chapters { first, last, .. } => format!("{first}-{last}"),
            Span::Lines { first, last, .. } => {
                if first == last {
                    first.to_string()
                } else {
                    format!("{first}-{last}")
                }
            },
        }
    }

    /// Text of this reference.
    ///
    /// Only chapters and line spans are addressable as flat text. A
    /// chapter joins its lines with newlines (reading layout, trimmed); a
    /// line span joins with single spaces (flowing text). Callers wanting
    /// one-line-per-row output format `children()` individually.
    pub fn text(&self) -> Result<String> {
        match self.span {
            Span::Chapter { unit, chapter } => {
                let data = self.corpus.chapter_at(unit, chapter);
                let lines: Vec<&str> = (1..=data.len()).map(|l| data.line_text(l)).collect();
                Ok(lines.join("\n").trim().to_string())
            },
            Span::Lines {
                unit,
                chapter,
                first,
                last,
            } => {
                let data = self.corpus.chapter_at(unit, chapter);
                let lines: Vec<&str> = (first..=last).map(|l| data.line_text(l)).collect();
                Ok(lines.join(" "))
            },
            _ => Err(Error::UnsupportedOperation(format!(
                "text() on a {}",
                self.span.kind()
            ))),
        }
    }

    /// Immediate constituents of this reference, in document order, or
    /// `None` for a single line (the leaf case).
    ///
    /// Document → units; unit → chapters; unit range → units; chapter and
    /// multi-line span → degenerate single-line spans; chapter range →
    /// chapters.
    #[must_use]
    pub fn children(&self) -> Option<Vec<Reference<'c>>> {
        let corpus = self.corpus;
        let refs: Vec<Reference<'c>> = match self.span {
            Span::Document => (1..=corpus.unit_count())
                .map(|unit| Self::raw(corpus, Span::Unit { unit }))
                .collect(),
            Span::Units { first, last } => (first..=last)
                .map(|unit| Self::raw(corpus, Span::Unit { unit }))
                .collect(),
            Span::Unit { unit } => (1..=corpus.unit_at(unit).chapter_count())
                .map(|chapter| Self::raw(corpus, Span::Chapter { unit, chapter }))
                .collect(),
            Span::Chapters { unit, first, last } => (first..=last)
                .map(|chapter| Self::raw(corpus, Span::Chapter { unit, chapter }))
                .collect(),
            Span::Chapter { unit, chapter } => {
                let count = corpus.chapter_at(unit, chapter).len();
                (1..=count)
                    .map(|line| Self::line(corpus, unit, chapter, line))
                    .collect()
            },
            Span::Lines {
                first, last, ..
            } if first == last => return None,
            Span::Lines {
                unit,
                chapter,
                first,
                last,
            } => (first..=last)
                .map(|line| Self::line(corpus, unit, chapter, line))
                .collect(),
        };
        Some(refs)
    }

    pub(crate) const fn line(
        corpus: &'c Corpus,
        unit: usize,
        chapter: usize,
        line: usize,
    ) -> Self {
        Self::raw(
            corpus,
            Span::Lines {
                unit,
                chapter,
                first: line,
                last: line,
            },
        )
    }

    /// The structurally containing reference, or `None` at document level.
    /// Recomputed from coordinates on every call.
    #[must_use]
    pub fn parent(&self) -> Option<Reference<'c>> {
        let span = match self.span {
            Span::Document => return None,
            Span::Unit { .. } | Span::Units { .. } => Span::Document,
            Span::Chapter { unit, .. } | Span::Chapters { unit, .. } => Span::Unit { unit },
            Span::Lines { unit, chapter, .. } => Span::Chapter { unit, chapter },
        };
        Some(Self::raw(self.corpus, span))
    }

    /// Preceding sibling within the parent's children, or `None` at the
    /// front edge.
    #[must_use]
    pub fn previous(&self) -> Option<Reference<'c>> {
        self.sibling(-1)
    }

    /// Following sibling within the parent's children, or `None` at the
    /// back edge.
    #[must_use]
    pub fn next(&self) -> Option<Reference<'c>> {
        self.sibling(1)
    }

    // Generic positional lookup. A reference that is not among its
    // parent's children (ranges are not; they exist only as parse results)
    // yields None rather than an error.
    fn sibling(&self, offset: isize) -> Option<Reference<'c>> {
        let siblings = self.parent()?.children()?;
        let index = siblings.iter().position(|s| s == self)?;
        let target = index.checked_add_signed(offset)?;
        siblings.get(target).copied()
    }

    /// Interval of global line indices covered by this reference.
    #[must_use]
    pub fn indices(&self) -> Indices {
        let corpus = self.corpus;
        match self.span {
            Span::Document => Indices {
                start: 1,
                end: corpus.total_lines(),
            },
            Span::Unit { unit } => unit_interval(corpus, unit),
            Span::Units { first, last } => Indices {
                start: unit_interval(corpus, first).start,
                end: unit_interval(corpus, last).end,
            },
            Span::Chapter { unit, chapter } => chapter_interval(corpus, unit, chapter),
            Span::Chapters { unit, first, last } => Indices {
                start: chapter_interval(corpus, unit, first).start,
                end: chapter_interval(corpus, unit, last).end,
            },
            Span::Lines {
                unit,
                chapter,
                first,
                last,
            } => {
                let data = corpus.chapter_at(unit, chapter);
                Indices {
                    start: data.line_seq(first),
                    end: data.line_seq(last),
                }
            },
        }
    }

    /// Whether this reference ends before `other` begins.
    #[must_use]
    pub fn precedes(&self, other: &Self) -> bool {
        self.indices().precedes(other.indices())
    }

    /// Whether the two references share at least one line.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.indices().overlaps(other.indices())
    }

    /// Scan this reference's exact span for lines matching `pattern`,
    /// returning single-line references in document order. See
    /// [`crate::search::scoped`] for the pattern conventions.
    pub fn search(&self, pattern: &str) -> Result<Vec<Reference<'c>>> {
        search::scoped(self.corpus, self.span, pattern)
    }
}

fn unit_interval(corpus: &Corpus, unit: usize) -> Indices {
    let count = corpus.unit_at(unit).chapter_count();
    Indices {
        start: chapter_interval(corpus, unit, 1).start,
        end: chapter_interval(corpus, unit, count).end,
    }
}

fn chapter_interval(corpus: &Corpus, unit: usize, chapter: usize) -> Indices {
    let data = corpus.chapter_at(unit, chapter);
    Indices {
        start: data.line_seq(1),
        end: data.line_seq(data.len()),
    }
}

impl PartialEq for Reference<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.corpus, other.corpus) && self.span == other.span
    }
}

impl Eq for Reference<'_> {}

impl fmt::Debug for Reference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reference")
            .field("corpus", &self.corpus.title())
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for Reference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn book() -> Corpus {
        let mut b = Corpus::builder("PRIDE AND PREJUDICE");
        b.push_unit("PRIDE AND PREJUDICE");
        b.push_chapter(1, vec!["It is a truth".into(), "universally acknowledged".into()])
            .unwrap();
        b.push_chapter(
            2,
            vec!["Mr. Bennet was".into(), "among the earliest".into(), "of those".into()],
        )
        .unwrap();
        b.finish().unwrap()
    }

    fn bible() -> Corpus {
        let mut b = Corpus::builder("TEST VERSION");
        b.push_unit("Matthew");
        b.push_chapter(1, vec!["m1".into(), "m2".into()]).unwrap();
        b.push_unit("John");
        b.push_chapter(1, vec!["j11".into()]).unwrap();
        b.push_chapter(2, vec!["j21".into(), "j22".into(), "j23".into()])
            .unwrap();
        b.finish().unwrap()
    }

    #[test]
    fn construction_validates_bounds() {
        let c = book();
        assert!(Reference::new(&c, Span::Chapter { unit: 1, chapter: 2 }).is_ok());
        let err =
            Reference::new(&c, Span::Chapter { unit: 1, chapter: 3 }).unwrap_err();
        assert_eq!(err.category(), "invalid_reference");
        assert!(Reference::new(&c, Span::Unit { unit: 2 }).is_err());
        assert!(Reference::new(
            &c,
            Span::Lines { unit: 1, chapter: 2, first: 1, last: 4 }
        )
        .is_err());
        // end == last line succeeds; one past fails
        assert!(Reference::new(
            &c,
            Span::Lines { unit: 1, chapter: 2, first: 1, last: 3 }
        )
        .is_ok());
    }

    #[test]
    fn backwards_ranges_are_invalid() {
        let c = bible();
        assert!(Reference::new(&c, Span::Units { first: 2, last: 1 }).is_err());
        assert!(
            Reference::new(&c, Span::Chapters { unit: 2, first: 2, last: 1 }).is_err()
        );
        assert!(Reference::new(
            &c,
            Span::Lines { unit: 2, chapter: 2, first: 3, last: 1 }
        )
        .is_err());
    }

    #[test]
    fn zero_coordinates_are_invalid() {
        let c = bible();
        assert!(Reference::new(&c, Span::Unit { unit: 0 }).is_err());
        assert!(Reference::new(&c, Span::Chapter { unit: 2, chapter: 0 }).is_err());
        assert!(Reference::new(
            &c,
            Span::Lines { unit: 2, chapter: 1, first: 0, last: 1 }
        )
        .is_err());
    }

    #[test]
    fn pretty_uses_chapter_prefix_for_single_unit() {
        let c = book();
        assert_eq!(c.document().pretty(), "PRIDE AND PREJUDICE");
        let ch = Reference::new(&c, Span::Chapter { unit: 1, chapter: 2 }).unwrap();
        assert_eq!(ch.pretty(), "Chapter 2");
        let span = Reference::new(
            &c,
            Span::Lines { unit: 1, chapter: 2, first: 1, last: 3 },
        )
        .unwrap();
        assert_eq!(span.pretty(), "Chapter 2:1-3");
        let line = Reference::new(
            &c,
            Span::Lines { unit: 1, chapter: 2, first: 2, last: 2 },
        )
        .unwrap();
        assert_eq!(line.pretty(), "Chapter 2:2");
        assert_eq!(line.short(), "2");
    }

    #[test]
    fn pretty_uses_unit_name_for_multi_unit() {
        let c = bible();
        let line = Reference::new(
            &c,
            Span::Lines { unit: 2, chapter: 2, first: 3, last: 3 },
        )
        .unwrap();
        assert_eq!(line.pretty(), "John 2:3");
        let range = Reference::new(&c, Span::Chapters { unit: 2, first: 1, last: 2 })
            .unwrap();
        assert_eq!(range.pretty(), "John 1-2");
        assert_eq!(range.short(), "1-2");
        let units = Reference::new(&c, Span::Units { first: 1, last: 2 }).unwrap();
        assert_eq!(units.pretty(), "Matthew-John");
    }

    #[test]
    fn chapter_text_joins_with_newlines() {
        let c = book();
        let ch = Reference::new(&c, Span::Chapter { unit: 1, chapter: 1 }).unwrap();
        assert_eq!(ch.text().unwrap(), "It is a truth\nuniversally acknowledged");
    }

    #[test]
    fn line_span_text_joins_with_spaces() {
        let c = book();
        let span = Reference::new(
            &c,
            Span::Lines { unit: 1, chapter: 2, first: 1, last: 2 },
        )
        .unwrap();
        assert_eq!(span.text().unwrap(), "Mr. Bennet was among the earliest");
    }

    #[test]
    fn text_is_unsupported_above_chapter_level() {
        let c = bible();
        for span in [
            Span::Document,
            Span::Unit { unit: 1 },
            Span::Units { first: 1, last: 2 },
            Span::Chapters { unit: 2, first: 1, last: 2 },
        ] {
            let err = Reference::new(&c, span).unwrap().text().unwrap_err();
            assert_eq!(err.category(), "unsupported_operation");
        }
    }

    #[test]
    fn children_walk_the_hierarchy() {
        let c = bible();
        let doc = c.document();
        let units = doc.children().unwrap();
        assert_eq!(units.len(), 2);
        let chapters = units[1].children().unwrap();
        assert_eq!(chapters.len(), 2);
        let lines = chapters[1].children().unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].is_leaf());
        assert_eq!(lines[0].children(), None);
    }

    #[test]
    fn multi_line_span_decomposes_into_lines() {
        let c = bible();
        let span = Reference::new(
            &c,
            Span::Lines { unit: 2, chapter: 2, first: 2, last: 3 },
        )
        .unwrap();
        let lines = span.children().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].short(), "2");
    }

    #[test]
    fn parent_is_recomputed_structurally() {
        let c = bible();
        let line = Reference::line(&c, 2, 2, 3);
        let chapter = line.parent().unwrap();
        assert_eq!(chapter.span(), Span::Chapter { unit: 2, chapter: 2 });
        let unit = chapter.parent().unwrap();
        assert_eq!(unit.span(), Span::Unit { unit: 2 });
        let doc = unit.parent().unwrap();
        assert_eq!(doc.span(), Span::Document);
        assert_eq!(doc.parent(), None);
    }

    #[test]
    fn sibling_navigation_stops_at_edges() {
        let c = bible();
        let first = Reference::line(&c, 2, 2, 1);
        assert_eq!(first.previous(), None);
        let second = first.next().unwrap();
        assert_eq!(second.short(), "2");
        assert_eq!(second.previous().unwrap(), first);
        let third = second.next().unwrap();
        assert_eq!(third.next(), None);
    }

    #[test]
    fn ranges_are_not_their_parents_children() {
        let c = bible();
        let range = Reference::new(&c, Span::Chapters { unit: 2, first: 1, last: 2 })
            .unwrap();
        assert_eq!(range.next(), None);
        assert_eq!(range.previous(), None);
    }

    #[test]
    fn indices_match_recursive_definition() {
        let c = bible();
        let doc = c.document();
        assert_eq!(doc.indices(), Indices { start: 1, end: 6 });
        for r in [
            doc,
            Reference::new(&c, Span::Unit { unit: 2 }).unwrap(),
            Reference::new(&c, Span::Chapters { unit: 2, first: 1, last: 2 }).unwrap(),
            Reference::new(&c, Span::Lines { unit: 2, chapter: 2, first: 1, last: 3 })
                .unwrap(),
        ] {
            let children = r.children().unwrap();
            let expected = Indices {
                start: children[0].indices().start,
                end: children[children.len() - 1].indices().end,
            };
            assert_eq!(r.indices(), expected);
        }
    }

    #[test]
    fn adjacent_siblings_are_strictly_ordered() {
        let c = bible();
        let chapters = Reference::new(&c, Span::Unit { unit: 2 })
            .unwrap()
            .children()
            .unwrap();
        for pair in chapters.windows(2) {
            assert!(pair[0].indices().precedes(pair[1].indices()));
            assert!(!pair[0].overlaps(&pair[1]));
        }
        let unit1 = Reference::new(&c, Span::Unit { unit: 1 }).unwrap();
        let unit2 = Reference::new(&c, Span::Unit { unit: 2 }).unwrap();
        assert!(unit1.precedes(&unit2));
    }

    #[test]
    fn overlap_works_across_shapes() {
        let c = bible();
        let chapter = Reference::new(&c, Span::Chapter { unit: 2, chapter: 2 }).unwrap();
        let line = Reference::line(&c, 2, 2, 2);
        let other_unit = Reference::new(&c, Span::Unit { unit: 1 }).unwrap();
        assert!(chapter.overlaps(&line));
        assert!(chapter.indices().contains(line.indices()));
        assert!(!chapter.overlaps(&other_unit));
        assert!(other_unit.precedes(&chapter));
    }

    #[test]
    fn children_are_value_equal_across_calls() {
        let c = bible();
        let chapter = Reference::new(&c, Span::Chapter { unit: 2, chapter: 2 }).unwrap();
        assert_eq!(chapter.children(), chapter.children());
        assert_eq!(chapter.pretty(), chapter.pretty());
    }
}
