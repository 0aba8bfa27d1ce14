//! JSON reports
//!
//! In `--json` mode each file produces a [`FileReport`] instead of console
//! text. All reports are printed together as one array once every file has
//! been processed.

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::extract::LineSink;
use crate::style::CommentStyle;

/// How a file's lines were selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    Comment,
    Head,
    Cat,
}

/// What was extracted from one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub mode: ReportMode,
    /// Matched style; only present in comment mode when detection succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<CommentStyle>,
    pub lines: Vec<String>,
}

impl FileReport {
    pub fn new(path: PathBuf, mode: ReportMode) -> Self {
        Self {
            path,
            mode,
            style: None,
            lines: Vec::new(),
        }
    }
}

/// Collects emitted lines into a report.
pub struct ReportSink<'a> {
    report: &'a mut FileReport,
}

impl<'a> ReportSink<'a> {
    pub fn new(report: &'a mut FileReport) -> Self {
        Self { report }
    }
}

impl LineSink for ReportSink<'_> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.report.lines.push(line.to_string());
        Ok(())
    }

    fn separator(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Print reports as a pretty JSON array.
pub fn write_reports<W: Write>(out: &mut W, reports: &[FileReport]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)
}

/// Print language names as a JSON array.
pub fn write_languages_json<W: Write>(out: &mut W, names: &[&str]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, names)?;
    writeln!(out)
}
