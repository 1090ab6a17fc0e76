//! Loaders for the supported on-disk formats.
//!
//! Three source shapes are understood:
//!
//! - book JSON: `{"title", "author", "chapters": [{"text": "line\nline"}]}`
//! - bible JSON: `{"version", "books": [{"name", "chapters": [{"num",
//!   "verses": [{"num", "text"}]}]}]}`; the explicit numbering is
//!   validated, not trusted
//! - quote TSV: one `name<TAB>[date]<TAB>quote` row per line
//!
//! Loaders only assemble; every structural invariant is enforced by
//! [`CorpusBuilder`], so a malformed source fails that load and nothing
//! else.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::corpus::{Corpus, Style};
use crate::{Error, Result};

#[derive(Debug, Deserialize)]
struct BookDoc {
    title: String,
    author: Option<String>,
    chapters: Vec<BookChapter>,
}

#[derive(Debug, Deserialize)]
struct BookChapter {
    text: String,
}

#[derive(Debug, Deserialize)]
struct BibleDoc {
    version: String,
    books: Vec<BibleBook>,
}

#[derive(Debug, Deserialize)]
struct BibleBook {
    name: String,
    chapters: Vec<BibleChapter>,
}

#[derive(Debug, Deserialize)]
struct BibleChapter {
    num: usize,
    verses: Vec<BibleVerse>,
}

#[derive(Debug, Deserialize)]
struct BibleVerse {
    num: usize,
    text: String,
}

/// Load a single-book corpus from book JSON. Chapter text is split on
/// newlines and each line trimmed.
pub fn book_from_json(data: &str) -> Result<Corpus> {
    let doc: BookDoc = serde_json::from_str(data)?;
    let mut builder = Corpus::builder(&doc.title);
    if let Some(author) = &doc.author {
        builder = builder.author(author);
    }
    builder.push_unit(&doc.title);
    for (i, chapter) in doc.chapters.iter().enumerate() {
        let lines = chapter
            .text
            .split('\n')
            .map(|line| line.trim().to_string())
            .collect();
        builder.push_chapter(i + 1, lines)?;
    }
    builder.finish()
}

/// Load a multi-book corpus from bible JSON. Chapter and verse numbers
/// stated by the source must be contiguous from 1.
pub fn bible_from_json(data: &str) -> Result<Corpus> {
    let doc: BibleDoc = serde_json::from_str(data)?;
    let mut builder = Corpus::builder(&doc.version);
    for book in &doc.books {
        builder.push_unit(&book.name);
        for chapter in &book.chapters {
            let mut lines = Vec::with_capacity(chapter.verses.len());
            for (i, verse) in chapter.verses.iter().enumerate() {
                if verse.num != i + 1 {
                    return Err(Error::MalformedCorpus(format!(
                        "verse numbering in {} {} jumps from {} to {}",
                        book.name, chapter.num, i, verse.num
                    )));
                }
                lines.push(verse.text.trim().to_string());
            }
            builder.push_chapter(chapter.num, lines)?;
        }
    }
    builder.finish()
}

/// Load a quote collection from TSV rows of `name`, optional `date`, and
/// `quote`. Rows that don't hold up are dropped with a debug log: a
/// present date must contain a digit, and a speaker name runs at most
/// four tokens. Speakers are sorted by name and rendered with the `::`
/// delimiter style.
pub fn quotes_from_tsv(data: &str) -> Result<Corpus> {
    let mut by_speaker: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for row in data.lines() {
        let row = row.trim();
        if row.is_empty() {
            continue;
        }
        let fields: Vec<&str> = row.split('\t').collect();
        let (name, date, quote) = match fields.as_slice() {
            [name, quote] => (*name, None, *quote),
            [name, date, quote] => (*name, Some(*date), *quote),
            _ => {
                debug!("discarding row with {} fields: {row}", fields.len());
                continue;
            },
        };
        if let Some(date) = date {
            if !date.is_empty() && !date.chars().any(|c| c.is_ascii_digit()) {
                debug!("discarding row with undated field: {row}");
                continue;
            }
        }
        if name.split_whitespace().count() > 4 {
            debug!("discarding row with overlong name: {row}");
            continue;
        }
        by_speaker
            .entry(name.to_string())
            .or_default()
            .push(quote.trim_matches('"').to_string());
    }

    let mut builder = Corpus::builder("Quotes").style(Style::delimited());
    for (speaker, quotes) in by_speaker {
        builder.push_unit(speaker);
        builder.push_chapter(1, quotes)?;
    }
    builder.finish()
}

/// Load a corpus from `path`, dispatching on extension and JSON shape:
/// `.tsv` is a quote collection; JSON with a `books` key is a bible,
/// with a `chapters` key a book.
pub fn load_path(path: impl AsRef<Path>) -> Result<Corpus> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    if path.extension().is_some_and(|ext| ext == "tsv") {
        return quotes_from_tsv(&data);
    }
    let value: serde_json::Value = serde_json::from_str(&data)?;
    if value.get("books").is_some() {
        bible_from_json(&data)
    } else if value.get("chapters").is_some() {
        book_from_json(&data)
    } else {
        Err(Error::Serialization(format!(
            "unrecognized resource shape in {}",
            path.display()
        )))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    const BOOK: &str = r#"{
        "title": "PRIDE AND PREJUDICE",
        "author": "Jane Austen",
        "chapters": [
            {"text": "It is a truth universally acknowledged.\n  That a single man  "},
            {"text": "Mr. Bennet replied."}
        ]
    }"#;

    const BIBLE: &str = r#"{
        "version": "TEST",
        "books": [
            {"name": "Matthew", "chapters": [
                {"num": 1, "verses": [{"num": 1, "text": "m 1:1"}, {"num": 2, "text": "m 1:2"}]}
            ]},
            {"name": "John", "chapters": [
                {"num": 1, "verses": [{"num": 1, "text": "j 1:1"}]},
                {"num": 2, "verses": [{"num": 1, "text": "j 2:1"}]}
            ]}
        ]
    }"#;

    #[test]
    fn book_json_loads_with_trimmed_lines() {
        let corpus = book_from_json(BOOK).unwrap();
        assert_eq!(corpus.title(), "PRIDE AND PREJUDICE");
        assert_eq!(corpus.author(), Some("Jane Austen"));
        assert_eq!(corpus.unit_count(), 1);
        assert_eq!(corpus.chapter_count(1), Some(2));
        assert_eq!(corpus.line_text(1, 1, 2), Some("That a single man"));
    }

    #[test]
    fn bible_json_loads_with_validated_numbering() {
        let corpus = bible_from_json(BIBLE).unwrap();
        assert_eq!(corpus.title(), "TEST");
        assert_eq!(corpus.unit_count(), 2);
        assert_eq!(corpus.unit(2).unwrap().name(), "John");
        assert_eq!(corpus.global_index(2, 2, 1), Some(4));
    }

    #[test]
    fn gapped_verse_numbering_is_malformed() {
        let gapped = BIBLE.replace(r#"{"num": 2, "text": "m 1:2"}"#, r#"{"num": 3, "text": "m 1:3"}"#);
        let err = bible_from_json(&gapped).unwrap_err();
        assert_eq!(err.category(), "malformed_corpus");
    }

    #[test]
    fn gapped_chapter_numbering_is_malformed() {
        let gapped = BIBLE.replace(r#""num": 2, "verses": [{"num": 1, "text": "j 2:1"}]"#, r#""num": 3, "verses": [{"num": 1, "text": "j 3:1"}]"#);
        let err = bible_from_json(&gapped).unwrap_err();
        assert_eq!(err.category(), "malformed_corpus");
    }

    #[test]
    fn quotes_tsv_groups_and_filters() {
        let tsv = "Abba Eban\t1970\t\"History teaches\"\n\
                   Albert Einstein\t\tMake everything simple\n\
                   Albert Einstein\tno digits here\tdropped\n\
                   A Name That Runs Too Long\t1999\tdropped\n\
                   Albert Einstein\tc. 1950\tImagination rules\n\
                   justonefield\n";
        let corpus = quotes_from_tsv(tsv).unwrap();
        assert_eq!(corpus.unit_count(), 2);
        // sorted by speaker
        assert_eq!(corpus.unit(1).unwrap().name(), "Abba Eban");
        assert_eq!(corpus.unit(2).unwrap().name(), "Albert Einstein");
        assert_eq!(corpus.line_count(2, 1), Some(2));
        // surrounding quote marks are stripped
        assert_eq!(corpus.line_text(1, 1, 1), Some("History teaches"));
        assert!(matches!(corpus.style(), Style::Delimited { .. }));
    }

    #[test]
    fn empty_tsv_is_malformed() {
        assert!(quotes_from_tsv("").is_err());
    }

    #[test]
    fn load_path_dispatches_on_shape() {
        let dir = tempfile::tempdir().unwrap();

        let book_path = dir.path().join("pp.json");
        fs::write(&book_path, BOOK).unwrap();
        assert_eq!(load_path(&book_path).unwrap().unit_count(), 1);

        let bible_path = dir.path().join("test.bible.json");
        fs::write(&bible_path, BIBLE).unwrap();
        assert_eq!(load_path(&bible_path).unwrap().unit_count(), 2);

        let tsv_path = dir.path().join("quotes.tsv");
        let mut f = fs::File::create(&tsv_path).unwrap();
        writeln!(f, "Abba Eban\t1970\tHistory teaches").unwrap();
        assert_eq!(load_path(&tsv_path).unwrap().unit_count(), 1);

        let junk_path = dir.path().join("junk.json");
        fs::write(&junk_path, "{}").unwrap();
        assert!(load_path(&junk_path).is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_path("/definitely/not/here.json").unwrap_err();
        assert_eq!(err.category(), "io");
    }
}
