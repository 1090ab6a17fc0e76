//! The resolve-or-search loop.
//!
//! Each input is tried in order as: the name of a loaded resource
//! (switches to it), a reference (displayed, or made the current scope if
//! it's too large to print), and finally a search over the current scope.
//! Only an unparsable reference falls through to search; out-of-bounds
//! references are reported as the errors they are.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, anyhow};
use is_terminal::IsTerminal;
use tracing::debug;
use verso_core::{BibleNames, Corpus, Library, Reference, ReferenceParser};

use crate::output;

/// One REPL session: the selected resource and the current search scope.
pub struct Session<'a> {
    library: &'a Library,
    name: String,
    corpus: &'a Corpus,
    scope: Reference<'a>,
}

impl<'a> Session<'a> {
    /// Open a session on `start` (case-insensitive), or on the first
    /// loaded resource.
    pub fn new(library: &'a Library, start: Option<&str>) -> Result<Self> {
        let names = library.names();
        let name = match start {
            Some(requested) => names
                .iter()
                .find(|name| name.eq_ignore_ascii_case(requested))
                .ok_or_else(|| anyhow!("unknown resource '{requested}'"))?,
            None => names.first().ok_or_else(|| anyhow!("no resources loaded"))?,
        }
        .to_string();
        let corpus = library
            .get(&name)
            .context("resource disappeared from the library")?;
        Ok(Self {
            library,
            name,
            corpus,
            scope: corpus.document(),
        })
    }

    /// Name of the selected resource.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.name
    }

    /// Evaluate one input line, writing any output to `out`.
    pub fn evaluate(&mut self, input: &str, out: &mut impl Write) -> Result<()> {
        if self.switch_resource(input, out)? {
            return Ok(());
        }

        let normalizer = BibleNames;
        let parser = ReferenceParser::new(self.corpus)
            .with_normalizer(&normalizer)
            .dot_shorthand(true);
        match parser.parse(input) {
            Ok(reference) => match output::render(&reference, &self.name) {
                Some(rendered) => writeln!(out, "{rendered}")?,
                None => {
                    self.scope = reference;
                    writeln!(out, "Scope set to: {}", reference.pretty())?;
                },
            },
            Err(err) if err.is_recoverable() => {
                debug!("not a reference ({err}); searching instead");
                self.search(input, out)?;
            },
            Err(err) => writeln!(out, "{err}")?,
        }
        Ok(())
    }

    fn switch_resource(&mut self, input: &str, out: &mut impl Write) -> Result<bool> {
        let Some(name) = self
            .library
            .names()
            .into_iter()
            .find(|name| name.eq_ignore_ascii_case(input))
        else {
            return Ok(false);
        };
        let corpus = self
            .library
            .get(name)
            .context("resource disappeared from the library")?;
        self.name = name.to_string();
        self.corpus = corpus;
        self.scope = corpus.document();
        writeln!(out, "Current resource: {}", self.name)?;
        Ok(true)
    }

    fn search(&self, query: &str, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Searching {}...", self.scope.pretty())?;
        match self.scope.search(query) {
            Ok(hits) => writeln!(out, "{}", output::render_hits(&hits, &self.name))?,
            Err(err) => writeln!(out, "search failed: {err}")?,
        }
        Ok(())
    }
}

/// Run the interactive loop until EOF or an exit command.
pub fn run(library: &Library, start: Option<&str>) -> Result<()> {
    let mut session = Session::new(library, start)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let interactive = stdin.is_terminal();

    if interactive {
        writeln!(stdout, "Loaded: {}", library.names().join(", "))?;
        writeln!(stdout, "Current resource: {}", session.resource())?;
    }

    let mut line = String::new();
    loop {
        if interactive {
            write!(stdout, "> ")?;
            stdout.flush()?;
        }
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input, "exit" | "quit") {
            break;
        }
        session.evaluate(input, &mut stdout)?;
    }
    Ok(())
}

/// Evaluate a single input and exit.
pub fn run_once(library: &Library, start: Option<&str>, input: &str) -> Result<()> {
    let mut session = Session::new(library, start)?;
    session.evaluate(input, &mut io::stdout())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn library() -> Library {
        let mut pp = Corpus::builder("PRIDE AND PREJUDICE");
        pp.push_unit("PRIDE AND PREJUDICE");
        pp.push_chapter(1, vec!["A truth universally acknowledged.".into()])
            .unwrap();
        pp.push_chapter(
            2,
            vec!["Mr. Bennet waited on Mr. Bingley.".into(), "He went anyway.".into()],
        )
        .unwrap();

        let mut bible = Corpus::builder("TEST TRANSLATION");
        bible.push_unit("John");
        bible
            .push_chapter(1, vec!["In the beginning was the Word.".into()])
            .unwrap();

        let mut library = Library::new();
        library.add("PP", pp.finish().unwrap());
        library.add("BIBLE", bible.finish().unwrap());
        library
    }

    fn eval(session: &mut Session<'_>, input: &str) -> String {
        let mut out = Vec::new();
        session.evaluate(input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn starts_on_requested_resource() {
        let library = library();
        let session = Session::new(&library, Some("pp")).unwrap();
        assert_eq!(session.resource(), "PP");
        assert!(Session::new(&library, Some("nope")).is_err());
    }

    #[test]
    fn displays_a_resolved_line() {
        let library = library();
        let mut session = Session::new(&library, Some("PP")).unwrap();
        let out = eval(&mut session, "2:1");
        assert_eq!(out, "Mr. Bennet waited on Mr. Bingley. (Chapter 2:1 PP)\n");
    }

    #[test]
    fn large_references_become_the_scope() {
        let library = library();
        let mut session = Session::new(&library, Some("PP")).unwrap();
        let out = eval(&mut session, "PRIDE AND PREJUDICE");
        assert!(out.starts_with("Scope set to:"));
    }

    #[test]
    fn unparsable_input_falls_back_to_search() {
        let library = library();
        let mut session = Session::new(&library, Some("PP")).unwrap();
        let out = eval(&mut session, "universally");
        assert!(out.contains("A truth universally acknowledged."));
        assert!(out.contains("Displayed 1 results."));
    }

    #[test]
    fn invalid_references_are_reported_not_searched() {
        let library = library();
        let mut session = Session::new(&library, Some("PP")).unwrap();
        let out = eval(&mut session, "2:1-99");
        assert!(out.contains("invalid reference"));
        assert!(!out.contains("Displayed"));
    }

    #[test]
    fn switching_resources_resets_the_scope() {
        let library = library();
        let mut session = Session::new(&library, Some("PP")).unwrap();
        let out = eval(&mut session, "bible");
        assert_eq!(out, "Current resource: BIBLE\n");
        let out = eval(&mut session, "John 1:1");
        assert!(out.contains("In the beginning was the Word."));
    }

    #[test]
    fn dot_shorthand_is_accepted() {
        let library = library();
        let mut session = Session::new(&library, Some("BIBLE")).unwrap();
        let out = eval(&mut session, "John 1.1");
        assert!(out.contains("In the beginning was the Word."));
    }
}
