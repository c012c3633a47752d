//! # srcdump
//!
//! `srcdump` walks a project directory and concatenates the text of its files into a
//! single annotated export, ready to share for code review or to hand to an AI tool.
//!
//! Directories such as `build` or `.git`, binary/media extensions and files over a size
//! limit are left out. The export is streamed straight to disk one file at a time, so
//! memory use does not grow with the project.
//!
//! A file that cannot be read never aborts the run: its content is replaced by a
//! single placeholder line (`# [Binary file content not shown]` for non-UTF-8 data,
//! `# [Error reading file: ...]` for anything else).
//!
//! # Features
//!
//! - `logging` (default): emits `tracing` events for skipped, binary and unreadable files.
//!
//! # Example
//!
//! ```no_run
//! use srcdump::{ExportBuilder, run};
//!
//! let config = ExportBuilder::new("path/to/project")
//!     .output("project_export.txt")
//!     .add_skip_dir("out")
//!     .max_file_size(512 * 1024)
//!     .build();
//!
//! let summary = run(&config).expect("export failed");
//! println!("{} files, {:.2} MB", summary.stats.written, summary.megabytes());
//! ```
//!
//! For custom sinks, [`export`] writes records into any [`ReportWriter`], and
//! [`Records`] yields them one by one.

pub mod config;
mod driver;
mod engine;
mod error;
mod filter;
pub mod options;
pub mod output;
mod types;

pub use config::FileConfig;
pub use driver::{DATE_FORMAT, project_name, run};
pub use engine::{Records, export};
pub use error::ExportError;
pub use filter::Filter;
pub use options::{BinaryDetection, ExportBuilder, ExportConfig};
pub use output::ReportWriter;
pub use types::{Content, ExportStats, ExportSummary, FileRecord};
