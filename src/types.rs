use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What ends up between a record's header and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Content {
    Text(String),
    /// The file is not valid UTF-8 (or looked binary).
    Binary,
    /// Reading failed; holds the error description.
    Unreadable(String),
}

/// A single file about to be written to the export.
///
/// Records are produced one at a time by the walker and dropped once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// The file's base name.
    pub name: String,
    /// Path relative to the export root.
    pub relative_path: PathBuf,
    /// Extension without the dot, as it appears on disk.
    pub extension: Option<String>,
    pub content: Content,
}

/// Counters gathered while walking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportStats {
    /// Records written, placeholders included.
    pub written: usize,
    /// Files rejected individually by the filter.
    ///
    /// Files under a pruned directory are never enumerated and are not counted.
    pub skipped: usize,
    pub binary: usize,
    pub unreadable: usize,
}

/// The outcome of a completed export run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSummary {
    pub output: PathBuf,
    /// Size of the finished export file.
    pub bytes: u64,
    pub stats: ExportStats,
}

impl ExportSummary {
    pub fn megabytes(&self) -> f64 {
        self.bytes as f64 / (1024.0 * 1024.0)
    }
}
