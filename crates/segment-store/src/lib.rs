//! # Policy Segment Store
//!
//! The ingestion boundary around the chunking engine: the stored segment
//! record, the fixed collection schema, and batched writing into a pluggable
//! sink. Vector search itself lives behind the [`SegmentSink`] trait and is
//! not implemented here.
//!
//! ## Architecture
//!
//! ```text
//! DocumentChunk[]
//!     │
//!     ├──> PolicySegment[] (deterministic sha256-derived ids)
//!     │
//!     └──> SegmentIngestor
//!            ├─> batches of 100
//!            └─> SegmentSink (JSONL file, in-memory, ...)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use policy_doc_chunker::DocumentChunker;
//! use policy_segment_store::{segments_from_chunks, MemorySink, SegmentIngestor};
//!
//! #[tokio::main]
//! async fn main() {
//!     let chunker = DocumentChunker::new();
//!     let chunks = chunker.chunk_document("# Scope\nThis policy applies to all employees.");
//!
//!     let segments = segments_from_chunks(&chunks);
//!     let mut sink = MemorySink::default();
//!     let report = SegmentIngestor::default().ingest(&mut sink, &segments).await;
//!
//!     println!("written: {}, failed: {}", report.written, report.failed);
//! }
//! ```

mod error;
mod ingest;
mod schema;
mod sink;
mod types;

pub use error::{Result, StoreError};
pub use ingest::{segments_from_chunks, IngestReport, SegmentIngestor, INGEST_BATCH_SIZE};
pub use schema::{collection_schema, CollectionSchema, PropertySchema, POLICY_SEGMENT_CLASS};
pub use sink::{JsonlSink, MemorySink, SegmentSink};
pub use types::PolicySegment;
