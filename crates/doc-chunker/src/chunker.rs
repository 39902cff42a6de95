use crate::parser::parse_document;
use crate::segmenter::{segment_flat, segment_sections};
use crate::types::DocumentChunk;

/// Top-level chunking entry point.
///
/// Stateless between invocations, synchronous, and total over its input:
/// any string (including empty) yields a chunk sequence, never an error.
/// Independent calls may run concurrently without coordination.
#[derive(Debug, Default)]
pub struct DocumentChunker;

impl DocumentChunker {
    /// Page number used when the caller does not supply one.
    pub const DEFAULT_SOURCE_PAGE: u32 = 1;

    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Chunk a document with the default source page.
    #[must_use]
    pub fn chunk_document(&self, text: &str) -> Vec<DocumentChunk> {
        self.chunk_document_with_page(text, Self::DEFAULT_SOURCE_PAGE)
    }

    /// Chunk a document, selecting structural or fallback segmentation
    /// based on whether the structural parser yields any sections.
    #[must_use]
    pub fn chunk_document_with_page(&self, text: &str, source_page: u32) -> Vec<DocumentChunk> {
        log::debug!("parsing document structure");
        let sections = parse_document(text);
        log::debug!("found {} top-level sections", sections.len());

        if sections.is_empty() {
            if text.trim().is_empty() {
                return Vec::new();
            }
            log::info!("no structured sections found, using paragraph-based chunking");
            return segment_flat(text, source_page);
        }

        let chunks = segment_sections(&sections, source_page);
        log::debug!("created {} chunks with metadata", chunks.len());
        chunks
    }

    /// Summarize a chunk sequence.
    #[must_use]
    pub fn get_stats(chunks: &[DocumentChunk]) -> ChunkingStats {
        let lengths: Vec<usize> = chunks.iter().map(DocumentChunk::char_count).collect();
        let total_chars: usize = lengths.iter().sum();
        ChunkingStats {
            total_chunks: chunks.len(),
            total_chars,
            avg_chars_per_chunk: if chunks.is_empty() {
                0
            } else {
                total_chars / chunks.len()
            },
            min_chars: lengths.iter().copied().min().unwrap_or(0),
            max_chars: lengths.iter().copied().max().unwrap_or(0),
        }
    }
}

/// Statistics about chunking results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkingStats {
    pub total_chunks: usize,
    pub total_chars: usize,
    pub avg_chars_per_chunk: usize,
    pub min_chars: usize,
    pub max_chars: usize,
}

impl std::fmt::Display for ChunkingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunks: {} | Chars: {} | Avg: {} | Range: {}-{}",
            self.total_chunks,
            self.total_chars,
            self.avg_chars_per_chunk,
            self.min_chars,
            self.max_chars
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_structural_path_selected_when_headings_present() {
        let chunker = DocumentChunker::new();
        let chunks = chunker.chunk_document("# Scope\nThis policy applies to all employees.");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].metadata.top_level_section, "Scope");
        assert_eq!(chunks[0].metadata.section_path, "1");
    }

    #[test]
    fn test_fallback_selected_for_headingless_text() {
        let chunker = DocumentChunker::new();
        let chunks = chunker.chunk_document("Just a plain paragraph of policy prose here.");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].metadata.top_level_section, "Document");
        assert_eq!(chunks[0].metadata.section_path, "1");
    }

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        let chunker = DocumentChunker::new();
        assert!(chunker.chunk_document("").is_empty());
        assert!(chunker.chunk_document("   \n\n   ").is_empty());
    }

    #[test]
    fn test_structured_but_all_short_bodies_yields_empty_sequence() {
        // Headings exist, so the fallback is not consulted even though every
        // body is under the noise floor.
        let chunker = DocumentChunker::new();
        let chunks = chunker.chunk_document("# A\ntiny\n# B\nalso tiny");
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_default_source_page_is_one() {
        let chunker = DocumentChunker::new();
        let chunks = chunker.chunk_document("# Scope\nThis policy applies to all employees.");
        assert_eq!(chunks[0].metadata.source_page, 1);
    }

    #[test]
    fn test_stats() {
        let chunker = DocumentChunker::new();
        let chunks = chunker.chunk_document(
            "# Scope\nThis policy applies to all employees.\n\n# Termination\nEmployment may end at will.",
        );
        let stats = DocumentChunker::get_stats(&chunks);
        assert_eq!(stats.total_chunks, 2);
        assert_eq!(stats.max_chars, 37);
        assert_eq!(stats.min_chars, 27);
        assert_eq!(stats.total_chars, 64);
        assert_eq!(stats.avg_chars_per_chunk, 32);
    }

    #[test]
    fn test_stats_empty() {
        let stats = DocumentChunker::get_stats(&[]);
        assert_eq!(stats.total_chunks, 0);
        assert_eq!(stats.to_string(), "Chunks: 0 | Chars: 0 | Avg: 0 | Range: 0-0");
    }
}
