use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

pub const DEFAULT_TITLE: &str = "ANDROID PROJECT EXPORT";
pub const DEFAULT_OUTPUT: &str = "android_project_export.txt";
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "build",
    ".gradle",
    ".idea",
    ".git",
    "node_modules",
    "generated",
    "tmp",
    "temp",
    "captures",
    ".cxx",
];

pub const DEFAULT_SKIP_EXTENSIONS: &[&str] = &[
    // images
    ".png", ".jpg", ".jpeg", ".gif", ".bmp", ".webp", ".svg", ".tiff",
    // binaries
    ".jar", ".aar", ".so", ".dll", ".exe", ".apk", ".aab", ".dex",
    // archives
    ".zip", ".rar", ".7z", ".gz", ".tar",
    // office documents
    ".pdf", ".doc", ".docx", ".ppt", ".pptx", ".xls", ".xlsx",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryDetection {
    /// Binary means "not valid UTF-8".
    #[default]
    Strict,
    /// Also classify the first chunk with `content_inspector`, catching NUL-laden files.
    Accurate,
}

/// Immutable configuration for one export run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub root: PathBuf,
    pub output: PathBuf,
    pub skip_dirs: BTreeSet<String>,
    /// Lower-case, dot-prefixed.
    pub skip_extensions: BTreeSet<String>,
    pub max_file_size: u64,
    pub ignore_patterns: Vec<String>,
    pub title: String,
    pub binary_detection: BinaryDetection,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|d| d.to_string()).collect(),
            skip_extensions: DEFAULT_SKIP_EXTENSIONS
                .iter()
                .map(|e| normalize_extension(e))
                .collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            ignore_patterns: Vec::new(),
            title: DEFAULT_TITLE.to_string(),
            binary_detection: BinaryDetection::Strict,
        }
    }
}

/// Lower-cases an extension and makes sure it carries exactly one leading dot.
pub fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim().trim_start_matches('.');
    format!(".{}", trimmed.to_lowercase())
}

#[derive(Debug, Default)]
pub struct ExportBuilder {
    config: ExportConfig,
}

impl ExportBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            config: ExportConfig {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn from_config(config: ExportConfig) -> Self {
        Self { config }
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.root = root.into();
        self
    }
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.config.output = output.into();
        self
    }
    pub fn skip_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.skip_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }
    pub fn add_skip_dir(mut self, dir: impl Into<String>) -> Self {
        self.config.skip_dirs.insert(dir.into());
        self
    }
    pub fn skip_extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.skip_extensions = exts
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }
    pub fn add_skip_extension(mut self, ext: impl AsRef<str>) -> Self {
        self.config
            .skip_extensions
            .insert(normalize_extension(ext.as_ref()));
        self
    }
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.config.max_file_size = bytes;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.config.ignore_patterns = patterns;
        self
    }
    pub fn add_ignore_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.ignore_patterns.push(pattern.into());
        self
    }
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.config.binary_detection = method;
        self
    }
    pub fn build(self) -> ExportConfig {
        self.config
    }
}
