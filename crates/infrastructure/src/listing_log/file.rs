use async_trait::async_trait;
use dnsbl_application::ports::ListingLog;
use dnsbl_domain::{DomainError, ListingLogEntry};
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Append-only text log of accepted listings, one line per add.
///
/// The file is opened, appended and closed for every entry.
pub struct FileListingLog {
    path: PathBuf,
}

impl FileListingLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn failed(&self, error: std::io::Error) -> DomainError {
        DomainError::ListingLogFailed {
            path: self.path.display().to_string(),
            reason: error.to_string(),
        }
    }
}

#[async_trait]
impl ListingLog for FileListingLog {
    async fn append(&self, entry: &ListingLogEntry) -> Result<(), DomainError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.failed(e))?;

        let line = format!("{}\n", entry);
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| self.failed(e))?;
        file.flush().await.map_err(|e| self.failed(e))?;

        debug!(path = %self.path.display(), address = %entry.address, "Listing log appended");

        Ok(())
    }
}
