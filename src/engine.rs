use crate::error::ExportError;
use crate::filter::Filter;
use crate::options::{BinaryDetection, ExportConfig};
use crate::output::ReportWriter;
use crate::types::{Content, ExportStats, FileRecord};
use ignore::WalkBuilder;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
#[cfg(feature = "logging")]
use tracing;
const INSPECT_LEN: u64 = 4096;
fn build_walk(config: &ExportConfig, filter: Arc<Filter>) -> ignore::Walk {
    let mut builder = WalkBuilder::new(&config.root);
    builder.standard_filters(false).follow_links(false);
    builder.filter_entry(move |entry| {
        let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
        if is_dir && filter.should_skip(entry.path()) {
            #[cfg(feature = "logging")]
            tracing::debug!("Pruning directory {}", entry.path().display());
            return false;
        }
        true
    });
    builder.build()
}
fn read_file_content(path: &Path, binary_detection: BinaryDetection) -> Content {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => return Content::Unreadable(e.to_string()),
    };
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(INSPECT_LEN as usize);
    if let Err(e) = reader.by_ref().take(INSPECT_LEN).read_to_end(&mut bytes) {
        return Content::Unreadable(e.to_string());
    }
    if binary_detection == BinaryDetection::Accurate
        && content_inspector::inspect(&bytes).is_binary()
    {
        return Content::Binary;
    }
    if let Err(e) = reader.read_to_end(&mut bytes) {
        return Content::Unreadable(e.to_string());
    }
    match String::from_utf8(bytes) {
        Ok(text) => Content::Text(text),
        Err(_) => Content::Binary,
    }
}
/// Streams the records of every exportable file under the root, one at a time.
///
/// Per-file read failures become placeholder content; walk errors are logged
/// and skipped, so iteration never ends early.
pub struct Records {
    walk: ignore::Walk,
    filter: Arc<Filter>,
    root: PathBuf,
    binary_detection: BinaryDetection,
    stats: ExportStats,
}
impl Records {
    pub fn new(config: &ExportConfig) -> Result<Self, ExportError> {
        let filter = Arc::new(Filter::new(config)?);
        Ok(Self {
            walk: build_walk(config, Arc::clone(&filter)),
            filter,
            root: config.root.clone(),
            binary_detection: config.binary_detection,
            stats: ExportStats::default(),
        })
    }
    pub fn stats(&self) -> ExportStats {
        self.stats
    }
    fn record_for(&mut self, path: &Path) -> FileRecord {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let relative_path = path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned());
        let content = read_file_content(path, self.binary_detection);
        match &content {
            Content::Binary => {
                self.stats.binary += 1;
                #[cfg(feature = "logging")]
                tracing::debug!("Binary file detected: {}", path.display());
            }
            Content::Unreadable(_reason) => {
                self.stats.unreadable += 1;
                #[cfg(feature = "logging")]
                tracing::warn!("Could not read {}: {}", path.display(), _reason);
            }
            Content::Text(_) => {}
        }
        FileRecord {
            name,
            relative_path,
            extension,
            content,
        }
    }
}
impl Iterator for Records {
    type Item = FileRecord;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Walk error: {}", _e);
                    continue;
                }
            };
            let path = entry.path();
            // Symlinked directories are listed but never descended into.
            if path.is_dir() {
                continue;
            }
            if self.filter.should_skip(path) {
                self.stats.skipped += 1;
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping {}", path.display());
                continue;
            }
            let path = path.to_path_buf();
            return Some(self.record_for(&path));
        }
    }
}
/// Walks `config.root` and writes a record for every retained file.
pub fn export<W: Write>(
    config: &ExportConfig,
    writer: &mut ReportWriter<W>,
) -> Result<ExportStats, ExportError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Walking {}", config.root.display());
    let mut records = Records::new(config)?;
    let mut written = 0;
    for record in records.by_ref() {
        writer
            .write_record(&record)
            .map_err(|e| ExportError::io(&config.output, e))?;
        written += 1;
    }
    let mut stats = records.stats();
    stats.written = written;
    Ok(stats)
}
