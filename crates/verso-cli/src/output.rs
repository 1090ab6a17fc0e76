//! Rendering of references and search hits for the terminal.

use verso_core::Reference;

/// Render a reference for display, or `None` when it has no flat text
/// (whole documents, units, and ranges of either become the new search
/// scope instead of printing).
///
/// A single line prints as `text (pretty resource)`. A chapter or line
/// span prints its lines inline, numbering each once there are ten or
/// more of them.
pub fn render(reference: &Reference<'_>, resource: &str) -> Option<String> {
    let citation = format!("({} {resource})", reference.pretty());
    match reference.children() {
        None => {
            let text = reference.text().ok()?;
            Some(format!("{text} {citation}"))
        },
        Some(children) => {
            reference.text().ok()?;
            let numbered = children.len() >= 10;
            let parts: Vec<String> = children
                .iter()
                .filter_map(|child| {
                    let text = child.text().ok()?;
                    Some(if numbered {
                        format!("{} {text}", child.short())
                    } else {
                        text
                    })
                })
                .collect();
            Some(format!("{} {citation}", parts.join(" ")))
        },
    }
}

/// Render search hits, one per line, with a trailing count.
pub fn render_hits(hits: &[Reference<'_>], resource: &str) -> String {
    let mut out = String::new();
    for hit in hits {
        if let Ok(text) = hit.text() {
            out.push_str(&format!("{text} ({} {resource})\n\n", hit.pretty()));
        }
    }
    out.push_str(&format!("Displayed {} results.", hits.len()));
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use verso_core::Corpus;

    fn corpus() -> Corpus {
        let mut b = Corpus::builder("BOOK");
        b.push_unit("BOOK");
        b.push_chapter(1, (1..=12).map(|l| format!("line {l}")).collect())
            .unwrap();
        b.push_chapter(2, vec!["alpha".into(), "beta".into()]).unwrap();
        b.finish().unwrap()
    }

    #[test]
    fn single_line_renders_with_citation() {
        let c = corpus();
        let line = c.reference("2:1").unwrap();
        assert_eq!(render(&line, "BOOK").unwrap(), "alpha (Chapter 2:1 BOOK)");
    }

    #[test]
    fn short_spans_render_unnumbered() {
        let c = corpus();
        let span = c.reference("2:1-2").unwrap();
        assert_eq!(
            render(&span, "BOOK").unwrap(),
            "alpha beta (Chapter 2:1-2 BOOK)"
        );
    }

    #[test]
    fn long_chapters_render_numbered() {
        let c = corpus();
        let chapter = c.reference("1").unwrap();
        let rendered = render(&chapter, "BOOK").unwrap();
        assert!(rendered.starts_with("1 line 1 2 line 2"));
        assert!(rendered.ends_with("(Chapter 1 BOOK)"));
    }

    #[test]
    fn documents_do_not_render() {
        let c = corpus();
        assert!(render(&c.document(), "BOOK").is_none());
    }

    #[test]
    fn hits_render_with_count() {
        let c = corpus();
        let hits = c.document().search("alpha").unwrap();
        let rendered = render_hits(&hits, "BOOK");
        assert!(rendered.contains("alpha (Chapter 2:1 BOOK)"));
        assert!(rendered.ends_with("Displayed 1 results."));
    }
}
