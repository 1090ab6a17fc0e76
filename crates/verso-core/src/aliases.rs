//! Canonical bible book names and their common abbreviations.
//!
//! The stock [`NameNormalizer`] for bible-style corpora. Lookups are
//! case- and whitespace-insensitive ("1 jn", "1Jn", "1jn" all resolve to
//! "1 John"). Corpora with other naming schemes inject their own
//! normalizer; nothing else in the crate depends on this table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::parse::NameNormalizer;

/// Book-name normalizer backed by the abbreviation table below.
#[derive(Debug, Clone, Copy, Default)]
pub struct BibleNames;

impl NameNormalizer for BibleNames {
    fn normalize(&self, raw: &str) -> Option<String> {
        let key: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        TABLE.get(key.as_str()).map(|name| (*name).to_string())
    }
}

// Canonical name plus the abbreviations seen in practice. Full names are
// added to the lookup automatically.
static BOOKS: &[(&str, &[&str])] = &[
    ("Genesis", &["gen", "ge", "gn"]),
    ("Exodus", &["ex", "exo", "exod"]),
    ("Leviticus", &["lev", "le", "lv"]),
    ("Numbers", &["num", "nu", "nm"]),
    ("Deuteronomy", &["deut", "deu", "dt"]),
    ("Joshua", &["josh", "jos", "jsh"]),
    ("Judges", &["judg", "jdg", "jg"]),
    ("Ruth", &["ru", "rth"]),
    ("1 Samuel", &["1sam", "1sa", "1sm"]),
    ("2 Samuel", &["2sam", "2sa", "2sm"]),
    ("1 Kings", &["1kgs", "1ki"]),
    ("2 Kings", &["2kgs", "2ki"]),
    ("1 Chronicles", &["1chron", "1chr", "1ch"]),
    ("2 Chronicles", &["2chron", "2chr", "2ch"]),
    ("Ezra", &["ezr"]),
    ("Nehemiah", &["neh", "ne"]),
    ("Esther", &["esth", "est", "es"]),
    ("Job", &["jb"]),
    ("Psalms", &["ps", "psalm", "psa", "pss"]),
    ("Proverbs", &["prov", "prv", "pr"]),
    ("Ecclesiastes", &["eccl", "ecc", "ec"]),
    ("Song of Solomon", &["song", "sos", "ss"]),
    ("Isaiah", &["isa", "is"]),
    ("Jeremiah", &["jer", "je"]),
    ("Lamentations", &["lam", "la"]),
    ("Ezekiel", &["ezek", "eze", "ezk"]),
    ("Daniel", &["dan", "da", "dn"]),
    ("Hosea", &["hos", "ho"]),
    ("Joel", &["joe", "jl"]),
    ("Amos", &["am"]),
    ("Obadiah", &["obad", "ob"]),
    ("Jonah", &["jon", "jnh"]),
    ("Micah", &["mic", "mc"]),
    ("Nahum", &["nah", "na"]),
    ("Habakkuk", &["hab", "hb"]),
    ("Zephaniah", &["zeph", "zep"]),
    ("Haggai", &["hag", "hg"]),
    ("Zechariah", &["zech", "zec"]),
    ("Malachi", &["mal", "ml"]),
    ("Matthew", &["matt", "mat", "mt"]),
    ("Mark", &["mrk", "mk"]),
    ("Luke", &["luk", "lk"]),
    ("John", &["jn", "jhn", "joh"]),
    ("Acts", &["act", "ac"]),
    ("Romans", &["rom", "ro", "rm"]),
    ("1 Corinthians", &["1cor", "1co"]),
    ("2 Corinthians", &["2cor", "2co"]),
    ("Galatians", &["gal", "ga"]),
    ("Ephesians", &["eph"]),
    ("Philippians", &["phil", "php"]),
    ("Colossians", &["col"]),
    ("1 Thessalonians", &["1thess", "1th"]),
    ("2 Thessalonians", &["2thess", "2th"]),
    ("1 Timothy", &["1tim", "1ti"]),
    ("2 Timothy", &["2tim", "2ti"]),
    ("Titus", &["tit"]),
    ("Philemon", &["philem", "phm"]),
    ("Hebrews", &["heb"]),
    ("James", &["jas", "jm"]),
    ("1 Peter", &["1pet", "1pe", "1pt"]),
    ("2 Peter", &["2pet", "2pe"]),
    ("1 John", &["1jn", "1jo"]),
    ("2 John", &["2jn", "2jo"]),
    ("3 John", &["3jn", "3jo"]),
    ("Jude", &["jud", "jd"]),
    ("Revelation", &["rev", "re", "rv"]),
];

static TABLE: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for (canonical, abbreviations) in BOOKS {
        let full: String = canonical
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        table.insert(full, *canonical);
        for abbr in *abbreviations {
            table.insert((*abbr).to_string(), *canonical);
        }
    }
    table
});
