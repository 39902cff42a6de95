//! Structural parsing: raw text to an ordered forest of sections.

use crate::types::Section;
use once_cell::sync::Lazy;
use regex::Regex;

static H1_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\s+(.+)$").expect("valid H1 pattern"));
static H2_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^##\s+(.+)$").expect("valid H2 pattern"));
static H3_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^###\s+(.+)$").expect("valid H3 pattern"));

// Numbered outline headings: a multi-component number ("1.2", "2.3.4") with
// an optional trailing dot, or a single number that must carry the dot
// ("1.") so that ordinary prose starting with a number is left alone.
static NUMBERED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(\d+(?:\.\d+)+)\.?|(\d+)\.)\s+(.+)$").expect("valid pattern"));

/// A classified heading line. Markdown and numbered-outline headings use
/// independent numbering schemes; mixing both in one document can produce
/// colliding paths (e.g. a markdown "1" and an outline "1"), which is left
/// unreconciled.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Heading {
    Markdown { level: usize, text: String },
    Numbered { number: String, text: String },
}

/// Classify a trimmed line against the heading patterns, H1 > H2 > H3 >
/// numbered outline. Lines that match none are body text.
fn classify_heading(line: &str) -> Option<Heading> {
    if let Some(caps) = H1_RE.captures(line) {
        return Some(Heading::Markdown {
            level: 1,
            text: caps[1].to_string(),
        });
    }
    if let Some(caps) = H2_RE.captures(line) {
        return Some(Heading::Markdown {
            level: 2,
            text: caps[1].to_string(),
        });
    }
    if let Some(caps) = H3_RE.captures(line) {
        return Some(Heading::Markdown {
            level: 3,
            text: caps[1].to_string(),
        });
    }
    if let Some(caps) = NUMBERED_RE.captures(line) {
        let number = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())?;
        return Some(Heading::Numbered {
            number,
            text: caps[3].to_string(),
        });
    }
    None
}

/// Markdown heading counters, scoped to one parse call. Numbered-outline
/// headings never touch these.
#[derive(Debug, Default, Clone, Copy)]
struct SectionCounters {
    h1: usize,
    h2: usize,
    h3: usize,
}

impl SectionCounters {
    /// Advance the counter for a markdown heading level and return the path
    fn advance(&mut self, level: usize) -> String {
        match level {
            1 => {
                self.h1 += 1;
                self.h2 = 0;
                self.h3 = 0;
                self.h1.to_string()
            }
            2 => {
                self.h2 += 1;
                self.h3 = 0;
                format!("{}.{}", self.h1, self.h2)
            }
            _ => {
                self.h3 += 1;
                format!("{}.{}.{}", self.h1, self.h2, self.h3)
            }
        }
    }
}

/// Parse raw document text into an ordered forest of sections.
///
/// Lines are trimmed before classification. Non-heading non-empty lines
/// accumulate into the open section's body; blank lines are dropped. Text
/// before the first heading is discarded (a known correctness gap kept for
/// behavioral compatibility). A document with zero heading lines yields an
/// empty forest; callers fall back to [`crate::segment_flat`].
#[must_use]
pub fn parse_document(text: &str) -> Vec<Section> {
    let mut flat: Vec<Section> = Vec::new();
    let mut current: Option<Section> = None;
    let mut body: Vec<&str> = Vec::new();
    let mut counters = SectionCounters::default();

    for raw in text.lines() {
        let line = raw.trim();

        if let Some(heading) = classify_heading(line) {
            if let Some(mut section) = current.take() {
                section.content = body.join("\n");
                flat.push(section);
            }
            body.clear();

            current = Some(match heading {
                Heading::Markdown { level, text } => {
                    let path = counters.advance(level);
                    Section::new(text, level, path)
                }
                Heading::Numbered { number, text } => {
                    let level = number.split('.').count();
                    Section::new(text, level, number)
                }
            });
        } else if !line.is_empty() {
            body.push(line);
        }
    }

    if let Some(mut section) = current.take() {
        section.content = body.join("\n");
        flat.push(section);
    }

    log::debug!("parsed {} heading-delimited sections", flat.len());
    build_hierarchy(flat)
}

/// Fold the flat, document-ordered section sequence into a forest using a
/// level stack: entries at a level >= the incoming section cannot be its
/// ancestor and are closed first. Skipped levels (H1 followed directly by
/// H3) nest without error.
fn build_hierarchy(flat: Vec<Section>) -> Vec<Section> {
    let mut roots: Vec<Section> = Vec::new();
    let mut stack: Vec<Section> = Vec::new();

    for section in flat {
        while stack.last().is_some_and(|open| open.level >= section.level) {
            if let Some(closed) = stack.pop() {
                attach(closed, &mut stack, &mut roots);
            }
        }
        stack.push(section);
    }

    while let Some(closed) = stack.pop() {
        attach(closed, &mut stack, &mut roots);
    }

    roots
}

fn attach(closed: Section, stack: &mut Vec<Section>, roots: &mut Vec<Section>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(closed),
        None => roots.push(closed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_markdown_levels() {
        assert_eq!(
            classify_heading("# Scope"),
            Some(Heading::Markdown {
                level: 1,
                text: "Scope".to_string()
            })
        );
        assert_eq!(
            classify_heading("## Exceptions"),
            Some(Heading::Markdown {
                level: 2,
                text: "Exceptions".to_string()
            })
        );
        assert_eq!(
            classify_heading("### Carve-outs"),
            Some(Heading::Markdown {
                level: 3,
                text: "Carve-outs".to_string()
            })
        );
    }

    #[test]
    fn test_classify_numbered_outline() {
        assert_eq!(
            classify_heading("1. Definitions"),
            Some(Heading::Numbered {
                number: "1".to_string(),
                text: "Definitions".to_string()
            })
        );
        assert_eq!(
            classify_heading("1.2. Excluded Damages"),
            Some(Heading::Numbered {
                number: "1.2".to_string(),
                text: "Excluded Damages".to_string()
            })
        );
        // Multi-component numbers match without the trailing dot
        assert_eq!(
            classify_heading("2.3.4 Notice Periods"),
            Some(Heading::Numbered {
                number: "2.3.4".to_string(),
                text: "Notice Periods".to_string()
            })
        );
    }

    #[test]
    fn test_malformed_heading_like_lines_are_body_text() {
        // Single number without a dot must not become a heading
        assert_eq!(classify_heading("10 days of paid leave"), None);
        // Hash without a following space
        assert_eq!(classify_heading("#NoSpace"), None);
        // Bare heading markers with no text
        assert_eq!(classify_heading("#"), None);
        assert_eq!(classify_heading("1."), None);
    }

    #[test]
    fn test_markdown_counters_and_paths() {
        let text = "# A\n## B\n### C\n### D\n## E\n# F\n## G";
        let forest = parse_document(text);
        assert_eq!(forest.len(), 2);

        let a = &forest[0];
        assert_eq!((a.heading.as_str(), a.path.as_str()), ("A", "1"));
        assert_eq!(a.children.len(), 2);
        assert_eq!(a.children[0].path, "1.1");
        assert_eq!(a.children[0].children[0].path, "1.1.1");
        assert_eq!(a.children[0].children[1].path, "1.1.2");
        assert_eq!(a.children[1].path, "1.2");

        let f = &forest[1];
        assert_eq!((f.heading.as_str(), f.path.as_str()), ("F", "2"));
        assert_eq!(f.children[0].path, "2.1");
    }

    #[test]
    fn test_numbered_paths_are_literal() {
        let text = "3. Liability\nBody.\n3.2 Caps\nBody.";
        let forest = parse_document(text);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].path, "3");
        assert_eq!(forest[0].level, 1);
        assert_eq!(forest[0].children[0].path, "3.2");
        assert_eq!(forest[0].children[0].level, 2);
    }

    #[test]
    fn test_numbered_headings_do_not_touch_markdown_counters() {
        let text = "# A\n5. Outline\n# B";
        let forest = parse_document(text);
        let paths: Vec<&str> = forest.iter().map(|s| s.path.as_str()).collect();
        // "B" is the second H1 regardless of the outline heading in between
        assert!(paths.contains(&"1"));
        assert!(paths.contains(&"2"));
        assert!(paths.contains(&"5"));
    }

    #[test]
    fn test_body_lines_accumulate_trimmed_and_blanks_dropped() {
        let text = "# A\n  first line  \n\n   \nsecond line";
        let forest = parse_document(text);
        assert_eq!(forest[0].content, "first line\nsecond line");
    }

    #[test]
    fn test_skipped_level_nests_directly() {
        let text = "# A\n### Deep\nBody text for the deep one.";
        let forest = parse_document(text);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].heading, "Deep");
        assert_eq!(forest[0].children[0].level, 3);
    }

    #[test]
    fn test_no_headings_yields_empty_forest() {
        assert!(parse_document("just some prose\nwith two lines").is_empty());
        assert!(parse_document("").is_empty());
    }

    #[test]
    fn test_pre_heading_text_is_dropped() {
        let text = "orphan preamble line\n# A\nkept body line that is here.";
        let forest = parse_document(text);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].content, "kept body line that is here.");
    }

    #[test]
    fn test_sibling_order_preserved() {
        let text = "1. One\n2. Two\n3. Three";
        let forest = parse_document(text);
        let headings: Vec<&str> = forest.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["One", "Two", "Three"]);
    }
}
