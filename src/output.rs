//! Serialization of the export report.
//!
//! The report is a header followed by one block per file:
//!
//! ```text
//! ANDROID PROJECT EXPORT
//! ====================
//! Project: <root name>
//! Date: <YYYY-MM-DD HH:MM:SS>
//! ====================
//!
//!
//!
//! # FILE: <name>
//! # -------------------------------------
//! # PATH: <relative path>
//! # TYPE: <extension or no_extension>
//! # -------------------------------------
//!
//! <content>
//! # END OF FILE: <name>
//! ```
//!
//! Everything is written straight to the underlying sink; nothing is buffered
//! beyond the record currently being written.

use crate::types::{Content, FileRecord};
use std::io::{self, Write};

pub const HEADER_RULE: &str = "====================";
pub const RECORD_RULE: &str = "# -------------------------------------";
pub const NO_EXTENSION: &str = "no_extension";
pub const BINARY_PLACEHOLDER: &str = "# [Binary file content not shown]";

pub struct ReportWriter<W: Write> {
    inner: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_header(&mut self, title: &str, project: &str, date: &str) -> io::Result<()> {
        writeln!(self.inner, "{}", title)?;
        writeln!(self.inner, "{}", HEADER_RULE)?;
        writeln!(self.inner, "Project: {}", project)?;
        writeln!(self.inner, "Date: {}", date)?;
        writeln!(self.inner, "{}", HEADER_RULE)?;
        writeln!(self.inner)
    }

    pub fn write_record(&mut self, record: &FileRecord) -> io::Result<()> {
        self.inner.write_all(b"\n\n")?;
        writeln!(self.inner, "# FILE: {}", record.name)?;
        writeln!(self.inner, "{}", RECORD_RULE)?;
        writeln!(self.inner, "# PATH: {}", record.relative_path.display())?;
        writeln!(
            self.inner,
            "# TYPE: {}",
            record.extension.as_deref().unwrap_or(NO_EXTENSION)
        )?;
        writeln!(self.inner, "{}", RECORD_RULE)?;
        writeln!(self.inner)?;

        match &record.content {
            Content::Text(text) => self.inner.write_all(text.as_bytes())?,
            Content::Binary => writeln!(self.inner, "{}", BINARY_PLACEHOLDER)?,
            Content::Unreadable(reason) => {
                writeln!(self.inner, "# [Error reading file: {}]", reason)?
            }
        }

        writeln!(self.inner)?;
        writeln!(self.inner, "# END OF FILE: {}", record.name)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
