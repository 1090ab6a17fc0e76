//! Immutable corpus storage.
//!
//! A [`Corpus`] is an ordered sequence of units ("books"), each an ordered
//! sequence of chapters, each an ordered sequence of lines. It is built once
//! by a loader through [`CorpusBuilder`] and never mutated afterwards; all
//! reads are pure and lock-free. References ([`crate::Reference`]) borrow
//! from the corpus and never copy its text.
//!
//! Every line is assigned a global sequence index at build time, strictly
//! increasing in unit→chapter→line order. That index is the basis of the
//! ordering/overlap contract on [`crate::Indices`].
//!
//! All coordinates at the public API boundary are 1-based; storage is
//! 0-based internally.

use crate::{Error, Result};

/// How references into a corpus are written and rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Style {
    /// Book-style `Unit chapter:line` references ("John 3:16",
    /// "Chapter 2:1-3"). The default.
    Chapters,
    /// Delimited `Name<delim>number` references for flat collections
    /// ("Albert Einstein::3"). Each unit carries a single synthetic
    /// chapter holding its entries.
    Delimited {
        /// Separator between the unit name and the entry number.
        delimiter: String,
    },
}

impl Style {
    /// Delimited style with the conventional `::` separator.
    #[must_use]
    pub fn delimited() -> Self {
        Self::Delimited {
            delimiter: "::".to_string(),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::Chapters
    }
}

/// An immutable hierarchical text: units of chapters of lines.
#[derive(Debug)]
pub struct Corpus {
    title: String,
    author: Option<String>,
    style: Style,
    units: Vec<Unit>,
    total_lines: usize,
}

/// A top-level division of a corpus (a "book", or a speaker in a quote
/// collection).
#[derive(Debug)]
pub struct Unit {
    name: String,
    chapters: Vec<Chapter>,
}

#[derive(Debug)]
pub(crate) struct Chapter {
    lines: Vec<Line>,
}

#[derive(Debug)]
struct Line {
    text: String,
    seq: usize,
}

impl Corpus {
    /// Start building a corpus with the given title.
    #[must_use]
    pub fn builder(title: impl Into<String>) -> CorpusBuilder {
        CorpusBuilder {
            title: title.into(),
            author: None,
            style: Style::default(),
            units: Vec::new(),
        }
    }

    /// Corpus title (a book's title, a bible translation name, ...).
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author, when the source format carries one.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Reference style for this corpus.
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Number of units. Always at least 1.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Total number of lines across the whole corpus.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Unit at the given 1-based position.
    #[must_use]
    pub fn unit(&self, unit: usize) -> Option<&Unit> {
        self.units.get(unit.checked_sub(1)?)
    }

    /// 1-based position of the unit with this name, compared
    /// case-insensitively.
    #[must_use]
    pub fn unit_named(&self, name: &str) -> Option<usize> {
        self.units
            .iter()
            .position(|u| u.name.eq_ignore_ascii_case(name))
            .map(|i| i + 1)
    }

    /// Number of chapters in the given unit.
    #[must_use]
    pub fn chapter_count(&self, unit: usize) -> Option<usize> {
        self.unit(unit).map(|u| u.chapters.len())
    }

    /// Number of lines in the given chapter.
    #[must_use]
    pub fn line_count(&self, unit: usize, chapter: usize) -> Option<usize> {
        let chapter = self.unit(unit)?.chapters.get(chapter.checked_sub(1)?)?;
        Some(chapter.lines.len())
    }

    /// Text of a single line.
    #[must_use]
    pub fn line_text(&self, unit: usize, chapter: usize, line: usize) -> Option<&str> {
        self.line(unit, chapter, line).map(|l| l.text.as_str())
    }

    /// Global sequence index of a single line. Strictly increasing in
    /// document order, starting at 1.
    #[must_use]
    pub fn global_index(&self, unit: usize, chapter: usize, line: usize) -> Option<usize> {
        self.line(unit, chapter, line).map(|l| l.seq)
    }

    fn line(&self, unit: usize, chapter: usize, line: usize) -> Option<&Line> {
        let chapter = self.unit(unit)?.chapters.get(chapter.checked_sub(1)?)?;
        chapter.lines.get(line.checked_sub(1)?)
    }

    // Infallible accessors for in-crate use on coordinates that have been
    // validated at reference construction.
    pub(crate) fn unit_at(&self, unit: usize) -> &Unit {
        &self.units[unit - 1]
    }

    pub(crate) fn chapter_at(&self, unit: usize, chapter: usize) -> &Chapter {
        &self.units[unit - 1].chapters[chapter - 1]
    }
}

impl Unit {
    /// Unit name (book title, speaker name).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of chapters in this unit.
    #[must_use]
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }
}

impl Chapter {
    pub(crate) fn len(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn line_text(&self, line: usize) -> &str {
        &self.lines[line - 1].text
    }

    pub(crate) fn line_seq(&self, line: usize) -> usize {
        self.lines[line - 1].seq
    }
}

/// Assembles a [`Corpus`], validating the structural invariants before any
/// reference can be taken into it.
#[derive(Debug)]
pub struct CorpusBuilder {
    title: String,
    author: Option<String>,
    style: Style,
    units: Vec<UnitDraft>,
}

#[derive(Debug)]
struct UnitDraft {
    name: String,
    chapters: Vec<Vec<String>>,
}

impl CorpusBuilder {
    /// Record the author.
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the reference style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Open a new unit; subsequent chapters are appended to it.
    pub fn push_unit(&mut self, name: impl Into<String>) {
        self.units.push(UnitDraft {
            name: name.into(),
            chapters: Vec::new(),
        });
    }

    /// Append a chapter to the current unit. `number` is the chapter's
    /// 1-based number as stated by the source data; it must continue the
    /// unit's numbering without gaps.
    pub fn push_chapter(&mut self, number: usize, lines: Vec<String>) -> Result<()> {
        let Some(unit) = self.units.last_mut() else {
            return Err(Error::MalformedCorpus(
                "chapter appears before any unit".to_string(),
            ));
        };
        let expected = unit.chapters.len() + 1;
        if number != expected {
            return Err(Error::MalformedCorpus(format!(
                "chapter numbering in '{}' jumps from {} to {number}",
                unit.name,
                expected - 1,
            )));
        }
        unit.chapters.push(lines);
        Ok(())
    }

    /// Validate and seal the corpus, assigning global line indices.
    pub fn finish(self) -> Result<Corpus> {
        if self.units.is_empty() {
            return Err(Error::MalformedCorpus(format!(
                "'{}' has no units",
                self.title
            )));
        }

        let mut seq = 0;
        let mut units = Vec::with_capacity(self.units.len());
        for draft in self.units {
            if draft.chapters.is_empty() {
                return Err(Error::MalformedCorpus(format!(
                    "unit '{}' has no chapters",
                    draft.name
                )));
            }
            let mut chapters = Vec::with_capacity(draft.chapters.len());
            for (i, lines) in draft.chapters.into_iter().enumerate() {
                if lines.is_empty() {
                    return Err(Error::MalformedCorpus(format!(
                        "chapter {} of '{}' has no lines",
                        i + 1,
                        draft.name
                    )));
                }
                let lines = lines
                    .into_iter()
                    .map(|text| {
                        seq += 1;
                        Line { text, seq }
                    })
                    .collect();
                chapters.push(Chapter { lines });
            }
            units.push(Unit {
                name: draft.name,
                chapters,
            });
        }

        Ok(Corpus {
            title: self.title,
            author: self.author,
            style: self.style,
            units,
            total_lines: seq,
        })
    }
}
