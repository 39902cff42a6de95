use policy_doc_chunker::DocumentChunk;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A chunk as written into the retrieval index: the five boundary
/// properties plus a deterministic identifier. The `content` field is the
/// only property the index vectorizes (see [`crate::collection_schema`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PolicySegment {
    pub id: String,
    pub content: String,
    pub parent_heading: String,
    pub top_level_section: String,
    pub section_path: String,
    pub source_page: u32,
}

impl PolicySegment {
    /// Build a segment from an engine chunk. Ids are derived from the
    /// section path, page, and content, so re-ingesting identical input
    /// produces identical ids.
    #[must_use]
    pub fn from_chunk(chunk: &DocumentChunk) -> Self {
        let id = segment_id(
            &chunk.metadata.section_path,
            chunk.metadata.source_page,
            &chunk.content,
        );
        Self {
            id,
            content: chunk.content.clone(),
            parent_heading: chunk.metadata.parent_heading.clone(),
            top_level_section: chunk.metadata.top_level_section.clone(),
            section_path: chunk.metadata.section_path.clone(),
            source_page: chunk.metadata.source_page,
        }
    }
}

/// First 16 hex chars of sha256 over path, page, and content.
fn segment_id(section_path: &str, source_page: u32, content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(section_path.as_bytes());
    hasher.update(source_page.to_be_bytes());
    hasher.update(content.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..16].to_string()
}
