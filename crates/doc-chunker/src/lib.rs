//! # Policy Doc Chunker
//!
//! Structural chunking for policy documents: parse a document's implicit
//! hierarchy into a section tree, then slice the tree into retrieval-sized
//! chunks that carry hierarchical provenance metadata.
//!
//! ## Architecture
//!
//! ```text
//! Raw Text
//!     │
//!     ├──> Structural Parser
//!     │    ├─> Classify heading lines (markdown H1-H3, numbered outline)
//!     │    ├─> Accumulate body text per section
//!     │    └─> Build section forest via level stack
//!     │
//!     ├──> Chunk Segmenter (forest non-empty)
//!     │    ├─> Pre-order walk, ancestry threaded top-down
//!     │    ├─> Paragraph split, sentence-group split for long bodies
//!     │    └─> Emit DocumentChunk[] with section paths
//!     │
//!     └──> Fallback Segmenter (no headings detected)
//!          └─> Paragraph chunks under a synthetic "Document" heading
//! ```
//!
//! ## Example
//!
//! ```rust
//! use policy_doc_chunker::DocumentChunker;
//!
//! let chunker = DocumentChunker::new();
//! let chunks = chunker.chunk_document("# Scope\nThis policy applies to all employees.");
//!
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].metadata.top_level_section, "Scope");
//! assert_eq!(chunks[0].metadata.section_path, "1");
//! ```

mod chunker;
mod parser;
mod segmenter;
mod types;

pub use chunker::{ChunkingStats, DocumentChunker};
pub use parser::parse_document;
pub use segmenter::{segment_flat, segment_sections};
pub use types::{ChunkMetadata, DocumentChunk, Section};
