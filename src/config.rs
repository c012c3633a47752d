//! Loading export settings from a TOML file.
//!
//! Every key is optional; present keys replace the corresponding default.

use crate::error::ExportError;
use crate::options::{BinaryDetection, ExportBuilder, ExportConfig};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub root: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub skip_dirs: Option<Vec<String>>,
    pub skip_extensions: Option<Vec<String>>,
    pub max_file_size: Option<u64>,
    pub ignore: Option<Vec<String>>,
    pub title: Option<String>,
    pub binary_detection: Option<BinaryDetection>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let content = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
        Self::parse(&content)
            .map_err(|e| ExportError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Overlays this file's settings onto `base`.
    pub fn apply(self, base: ExportConfig) -> ExportConfig {
        let mut builder = ExportBuilder::from_config(base);
        if let Some(root) = self.root {
            builder = builder.root(root);
        }
        if let Some(output) = self.output {
            builder = builder.output(output);
        }
        if let Some(dirs) = self.skip_dirs {
            builder = builder.skip_dirs(dirs);
        }
        if let Some(exts) = self.skip_extensions {
            builder = builder.skip_extensions(exts);
        }
        if let Some(size) = self.max_file_size {
            builder = builder.max_file_size(size);
        }
        if let Some(patterns) = self.ignore {
            builder = builder.ignore_patterns(patterns);
        }
        if let Some(title) = self.title {
            builder = builder.title(title);
        }
        if let Some(method) = self.binary_detection {
            builder = builder.binary_detection(method);
        }
        builder.build()
    }
}
