//! Decides which directories and files are left out of an export.
//!
//! Directory rules are plain string tests on the forward-slash normalized path
//! relative to the export root: a skip entry `d` matches when the path contains
//! `/d/` or ends with `/d`. That matches any segment equal to `d` and nothing
//! else, so `build` excludes `app/build/x` but not `app/mybuild/x`.

use crate::error::ExportError;
use crate::options::ExportConfig;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Filter {
    root: PathBuf,
    dir_rules: Vec<(String, String)>,
    skip_extensions: BTreeSet<String>,
    max_file_size: u64,
    ignore: Option<GlobSet>,
    output: Option<PathBuf>,
}

impl Filter {
    pub fn new(config: &ExportConfig) -> Result<Self, ExportError> {
        let dir_rules = config
            .skip_dirs
            .iter()
            .map(|d| (format!("/{}/", d), format!("/{}", d)))
            .collect();
        Ok(Self {
            root: config.root.clone(),
            dir_rules,
            skip_extensions: config.skip_extensions.clone(),
            max_file_size: config.max_file_size,
            ignore: build_globset(&config.ignore_patterns)?,
            output: output_inside_root(&config.root, &config.output),
        })
    }

    /// Returns true when `path` must not appear in the export.
    ///
    /// For a directory this also means its whole subtree is excluded.
    pub fn should_skip(&self, path: &Path) -> bool {
        let normalized = self.normalize(path);
        if self.matches_skip_dir(&normalized) {
            return true;
        }
        if let Some(ref ignore) = self.ignore {
            let relative = normalized.trim_start_matches('/');
            if !relative.is_empty() && ignore.is_match(relative) {
                return true;
            }
        }

        // A failed stat is not a reason to skip.
        let metadata = fs::metadata(path).ok();
        if metadata.as_ref().is_some_and(|m| m.is_dir()) {
            return false;
        }
        if self.has_skipped_extension(path) {
            return true;
        }
        if let Some(meta) = metadata
            && meta.is_file()
            && meta.len() > self.max_file_size
        {
            return true;
        }
        if let Some(ref output) = self.output
            && path
                .strip_prefix(&self.root)
                .is_ok_and(|rel| rel == output.as_path())
        {
            return true;
        }
        false
    }

    fn normalize(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let s = relative.to_string_lossy().replace('\\', "/");
        if s.is_empty() || s.starts_with('/') {
            s
        } else {
            format!("/{}", s)
        }
    }

    fn matches_skip_dir(&self, normalized: &str) -> bool {
        self.dir_rules.iter().any(|(inner, suffix)| {
            normalized.contains(inner.as_str()) || normalized.ends_with(suffix.as_str())
        })
    }

    fn has_skipped_extension(&self, path: &Path) -> bool {
        match path.extension() {
            Some(ext) => {
                let ext = format!(".{}", ext.to_string_lossy().to_lowercase());
                self.skip_extensions.contains(&ext)
            }
            None => false,
        }
    }
}

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>, ExportError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| ExportError::Pattern(format!("'{}': {}", pattern, e)))?;
        builder.add(glob);
    }
    builder
        .build()
        .map(Some)
        .map_err(|e| ExportError::Pattern(format!("failed to build glob set: {}", e)))
}

/// Where the export file sits relative to the root, if it sits inside it.
fn output_inside_root(root: &Path, output: &Path) -> Option<PathBuf> {
    let root = fs::canonicalize(root).ok()?;
    let name = output.file_name()?;
    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let output = fs::canonicalize(parent).ok()?.join(name);
    output.strip_prefix(&root).ok().map(Path::to_path_buf)
}
