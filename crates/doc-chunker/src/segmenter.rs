//! Chunk segmentation: section forest (or raw text) to an ordered chunk list.

use crate::types::{ChunkMetadata, DocumentChunk, Section};
use once_cell::sync::Lazy;
use regex::Regex;

/// Paragraphs longer than this are re-split at sentence boundaries.
const MAX_PARAGRAPH_CHARS: usize = 800;

/// Sentences per sub-chunk when a long paragraph is re-split.
const SENTENCES_PER_GROUP: usize = 3;

/// Chunks at or under this length (after trim) are discarded as noise,
/// e.g. stray punctuation or page artifacts. Hard cutoff, not configurable.
const MIN_CHUNK_CHARS: usize = 20;

/// Heading text applied to every fallback chunk.
const FALLBACK_HEADING: &str = "Document";

static PARAGRAPH_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("valid paragraph pattern"));

// A sentence is a maximal run of non-terminator characters followed by one
// or more of . ! ? — deliberately simple, not a linguistic boundary detector.
static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("valid sentence pattern"));

/// Walk the section forest depth-first (pre-order) and emit chunks in
/// document order. Ancestry strings are threaded top-down as arguments, so
/// the parent-pointer-free forest is never searched upward; a root section
/// is its own top-level section and its own parent heading.
#[must_use]
pub fn segment_sections(sections: &[Section], source_page: u32) -> Vec<DocumentChunk> {
    let mut chunks = Vec::new();
    for section in sections {
        walk_section(
            section,
            &section.heading,
            &section.heading,
            source_page,
            &mut chunks,
        );
    }
    chunks
}

fn walk_section(
    section: &Section,
    top_level: &str,
    parent_heading: &str,
    source_page: u32,
    out: &mut Vec<DocumentChunk>,
) {
    for paragraph in split_paragraphs(&section.content) {
        if paragraph.chars().count() > MIN_CHUNK_CHARS {
            out.push(DocumentChunk::new(
                paragraph,
                ChunkMetadata::new(parent_heading, top_level, section.path.clone(), source_page),
            ));
        }
    }

    // Children after the section's own body; a child's parent heading is
    // always its direct structural parent, never a grandparent.
    for child in &section.children {
        walk_section(child, top_level, &section.heading, source_page, out);
    }
}

/// Paragraph-based chunking for documents without detected heading
/// structure. The whole text is treated as one undifferentiated body; each
/// chunk carries the synthetic "Document" ancestry and its 1-based ordinal
/// as section path.
#[must_use]
pub fn segment_flat(text: &str, source_page: u32) -> Vec<DocumentChunk> {
    let mut chunks: Vec<DocumentChunk> = Vec::new();
    for paragraph in split_paragraphs(text) {
        if paragraph.chars().count() > MIN_CHUNK_CHARS {
            let ordinal = chunks.len() + 1;
            chunks.push(DocumentChunk::new(
                paragraph,
                ChunkMetadata::new(
                    FALLBACK_HEADING,
                    FALLBACK_HEADING,
                    ordinal.to_string(),
                    source_page,
                ),
            ));
        }
    }
    chunks
}

/// Split body text into paragraphs on runs of blank lines, re-splitting any
/// paragraph over [`MAX_PARAGRAPH_CHARS`] into groups of up to
/// [`SENTENCES_PER_GROUP`] sentences. The short-chunk filter is applied at
/// emission, not here.
fn split_paragraphs(content: &str) -> Vec<String> {
    if content.trim().is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    for paragraph in PARAGRAPH_BREAK_RE.split(content) {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        if paragraph.chars().count() > MAX_PARAGRAPH_CHARS {
            split_long_paragraph(paragraph, &mut out);
        } else {
            out.push(paragraph.to_string());
        }
    }
    out
}

/// Group sentences three at a time, joined by single spaces. A trailing
/// remainder of 1-2 sentences still forms its own final sub-chunk. Text
/// with no sentence terminator at all passes through whole.
fn split_long_paragraph(paragraph: &str, out: &mut Vec<String>) {
    let sentences: Vec<&str> = SENTENCE_RE
        .find_iter(paragraph)
        .map(|m| m.as_str())
        .collect();

    if sentences.is_empty() {
        out.push(paragraph.to_string());
        return;
    }

    let mut group: Vec<&str> = Vec::new();
    for sentence in sentences {
        group.push(sentence.trim());
        if group.len() >= SENTENCES_PER_GROUP {
            out.push(group.join(" "));
            group.clear();
        }
    }
    if !group.is_empty() {
        out.push(group.join(" "));
    }
}
