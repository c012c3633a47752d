use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Project directory not found: {}", .0.display())]
    RootNotFound(PathBuf),
    #[error("Invalid pattern: {0}")]
    Pattern(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}
impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}
