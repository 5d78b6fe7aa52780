/*!
 * Append-only text mirror of all accepted records.
 *
 * Every record the store accepts is also written here as a human-readable
 * block. The log is never rewritten or compacted; the statistics aggregator
 * reads it back in full after each append.
 */

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Handle to the append-only feed log file
#[derive(Debug, Clone)]
pub struct FeedLog {
    /// Path to the log file
    path: PathBuf,
}

impl FeedLog {
    /// Create a handle for the log at the given path.
    ///
    /// The file itself is created lazily on the first append.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the underlying log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one formatted block to the log, followed by a blank line.
    ///
    /// The write is flushed before returning, so a subsequent
    /// [`FeedLog::read_all`] always reflects it.
    pub fn append(&self, block: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open feed log: {:?}", self.path))?;

        file.write_all(block.as_bytes())?;
        file.write_all(b"\n\n")?;
        file.flush()
            .with_context(|| format!("Failed to flush feed log: {:?}", self.path))?;

        Ok(())
    }

    /// Read the full current content of the log.
    ///
    /// A log that does not exist yet reads as empty.
    pub fn read_all(&self) -> Result<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }

        fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read feed log: {:?}", self.path))
    }

    /// Number of blocks currently in the log (blank-line separated)
    pub fn block_count(&self) -> Result<usize> {
        let content = self.read_all()?;
        Ok(content
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .count())
    }
}
