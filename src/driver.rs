//! One complete export run: validate, open, write, report.

use crate::engine::export;
use crate::error::ExportError;
use crate::options::ExportConfig;
use crate::output::ReportWriter;
use crate::types::ExportSummary;
use chrono::Local;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Exports `config.root` into `config.output`, truncating any previous output.
///
/// The root is checked before the output is opened, so a missing root leaves
/// an existing output file untouched.
pub fn run(config: &ExportConfig) -> Result<ExportSummary, ExportError> {
    if !config.root.is_dir() {
        return Err(ExportError::RootNotFound(config.root.clone()));
    }
    #[cfg(feature = "logging")]
    tracing::info!("Starting export from: {}", config.root.display());

    let file = File::create(&config.output).map_err(|e| ExportError::io(&config.output, e))?;
    let mut writer = ReportWriter::new(BufWriter::new(file));
    let date = Local::now().format(DATE_FORMAT).to_string();
    writer
        .write_header(&config.title, &project_name(&config.root), &date)
        .map_err(|e| ExportError::io(&config.output, e))?;

    let stats = export(config, &mut writer)?;
    writer
        .flush()
        .map_err(|e| ExportError::io(&config.output, e))?;
    drop(writer);

    let bytes = fs::metadata(&config.output)
        .map_err(|e| ExportError::io(&config.output, e))?
        .len();
    #[cfg(feature = "logging")]
    tracing::info!(
        "Exported {} files ({} skipped, {} binary, {} unreadable)",
        stats.written,
        stats.skipped,
        stats.binary,
        stats.unreadable
    );
    Ok(ExportSummary {
        output: config.output.clone(),
        bytes,
        stats,
    })
}

/// The root directory's own name, resolved from its absolute form so `.` works.
pub fn project_name(root: &Path) -> String {
    let resolved: PathBuf = fs::canonicalize(root)
        .or_else(|_| std::path::absolute(root))
        .unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
