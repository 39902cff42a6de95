use serde::{Deserialize, Serialize};

/// A node in the parsed document hierarchy: one heading and the body text
/// up to (but not including) the next heading of equal or higher level.
///
/// Sections hold no parent pointers; ancestry is recomputed top-down during
/// segmentation. The forest is owned transiently by the caller and dropped
/// once segmentation completes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    /// Heading display text
    pub heading: String,

    /// Depth indicator, 1 = top level
    pub level: usize,

    /// Dot-separated structural identifier, e.g. "2.1.3"
    pub path: String,

    /// Trimmed body text accumulated before the next heading
    pub content: String,

    /// Child sections in document order
    pub children: Vec<Section>,
}

impl Section {
    /// Create an empty section for the given heading
    #[must_use]
    pub fn new(heading: impl Into<String>, level: usize, path: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            level,
            path: path.into(),
            content: String::new(),
            children: Vec::new(),
        }
    }
}

/// A retrieval-unit slice of text with hierarchical provenance metadata.
///
/// Chunks are immutable value records: the ancestry strings are copied in at
/// emission time, so later changes to the section forest can never affect an
/// already-emitted chunk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentChunk {
    /// The chunk text (a paragraph or sentence group)
    pub content: String,

    /// Provenance of this chunk within the document hierarchy
    pub metadata: ChunkMetadata,
}

impl DocumentChunk {
    #[must_use]
    pub fn new(content: impl Into<String>, metadata: ChunkMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// Content length in Unicode scalar values
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

/// Hierarchical provenance attached to every chunk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkMetadata {
    /// Immediate enclosing heading text
    pub parent_heading: String,

    /// Root ancestor heading text
    pub top_level_section: String,

    /// Owning section's path, or the chunk ordinal for fallback chunks
    pub section_path: String,

    /// Caller-supplied page number, uniform across one chunking call
    pub source_page: u32,
}

impl ChunkMetadata {
    #[must_use]
    pub fn new(
        parent_heading: impl Into<String>,
        top_level_section: impl Into<String>,
        section_path: impl Into<String>,
        source_page: u32,
    ) -> Self {
        Self {
            parent_heading: parent_heading.into(),
            top_level_section: top_level_section.into(),
            section_path: section_path.into(),
            source_page,
        }
    }
}
