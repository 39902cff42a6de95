use crate::error::Result;
use crate::types::PolicySegment;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Destination for ingested segments. The real deployment target is a
/// vector-search index; this trait is the narrow contract the ingestor
/// needs from it.
#[async_trait]
pub trait SegmentSink: Send {
    /// Write one batch of segments. A failing batch fails as a unit.
    async fn write_batch(&mut self, segments: &[PolicySegment]) -> Result<()>;

    /// Number of segments currently held by the sink.
    async fn count(&self) -> Result<usize>;
}

/// In-memory sink for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    segments: Vec<PolicySegment>,
}

impl MemorySink {
    #[must_use]
    pub fn segments(&self) -> &[PolicySegment] {
        &self.segments
    }
}

#[async_trait]
impl SegmentSink for MemorySink {
    async fn write_batch(&mut self, segments: &[PolicySegment]) -> Result<()> {
        self.segments.extend_from_slice(segments);
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.segments.len())
    }
}

/// Append-only JSONL file sink, one segment object per line.
#[derive(Debug)]
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    /// Open a sink at `path`, truncating any existing file when `clear` is
    /// set. The file itself is created lazily on the first write.
    pub async fn open(path: impl AsRef<Path>, clear: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if clear && tokio::fs::try_exists(&path).await? {
            log::info!("clearing existing segments at {}", path.display());
            tokio::fs::remove_file(&path).await?;
        }
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SegmentSink for JsonlSink {
    async fn write_batch(&mut self, segments: &[PolicySegment]) -> Result<()> {
        let mut lines = String::new();
        for segment in segments {
            lines.push_str(&serde_json::to_string(segment)?);
            lines.push('\n');
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(lines.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(contents.lines().filter(|l| !l.trim().is_empty()).count()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(err) => Err(err.into()),
        }
    }
}
