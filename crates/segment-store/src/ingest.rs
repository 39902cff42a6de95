use crate::sink::SegmentSink;
use crate::types::PolicySegment;
use policy_doc_chunker::DocumentChunk;
use serde::Serialize;

/// Segments written to the sink per batch.
pub const INGEST_BATCH_SIZE: usize = 100;

/// Convert engine chunks into storable segments.
#[must_use]
pub fn segments_from_chunks(chunks: &[DocumentChunk]) -> Vec<PolicySegment> {
    chunks.iter().map(PolicySegment::from_chunk).collect()
}

/// Outcome of one ingestion run. Failed batches are accounted, not retried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub written: usize,
    pub failed: usize,
}

/// Writes segments to a [`SegmentSink`] in bounded batches, logging
/// progress per batch. A failed batch is counted and skipped; the remaining
/// batches still run.
#[derive(Debug, Clone, Copy)]
pub struct SegmentIngestor {
    batch_size: usize,
}

impl Default for SegmentIngestor {
    fn default() -> Self {
        Self {
            batch_size: INGEST_BATCH_SIZE,
        }
    }
}

impl SegmentIngestor {
    #[must_use]
    pub fn with_batch_size(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    pub async fn ingest<S: SegmentSink>(
        &self,
        sink: &mut S,
        segments: &[PolicySegment],
    ) -> IngestReport {
        if segments.is_empty() {
            return IngestReport::default();
        }

        log::info!("ingesting {} segments", segments.len());
        let total_batches = segments.len().div_ceil(self.batch_size);
        let mut report = IngestReport::default();

        for (index, batch) in segments.chunks(self.batch_size).enumerate() {
            log::debug!("processing batch {}/{total_batches}", index + 1);
            match sink.write_batch(batch).await {
                Ok(()) => report.written += batch.len(),
                Err(err) => {
                    log::warn!("batch {}/{total_batches} failed: {err}", index + 1);
                    report.failed += batch.len();
                }
            }
        }

        log::info!(
            "ingestion complete: {} written, {} failed",
            report.written,
            report.failed
        );
        report
    }
}
