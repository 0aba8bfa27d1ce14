//! Per-file processing
//!
//! Files are handled strictly in order. The first file that cannot be opened
//! or read aborts the run; nothing after it is processed.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, Write};
use std::path::{Path, PathBuf};

use termcolor::WriteColor;

use crate::config::{Mode, RunConfig};
use crate::detect::detect;
use crate::error::{Error, Result, StreamError};
use crate::extract::{LineSink, cat, extract_comment, head};
use crate::output::{ConsoleSink, write_banner};
use crate::report::{FileReport, ReportSink, write_reports};
use crate::style::{CommentStyle, StyleRegistry};

/// Apply `mode` to an open stream.
///
/// In comment mode, returns the detected style. When nothing is detected the
/// sink receives nothing at all, not even a separator. Errors record whether
/// the stream or the sink failed.
pub fn process<'r, R, S>(
    registry: &'r StyleRegistry,
    mode: Mode,
    reader: &mut R,
    sink: &mut S,
) -> std::result::Result<Option<&'r CommentStyle>, StreamError>
where
    R: BufRead + Seek,
    S: LineSink + ?Sized,
{
    match mode {
        Mode::Cat => {
            cat(reader, sink)?;
            Ok(None)
        }
        Mode::Head(count) => {
            head(reader, count, sink)?;
            Ok(None)
        }
        Mode::Comment => {
            let Some(style) = detect(registry, reader).map_err(StreamError::Read)? else {
                return Ok(None);
            };
            extract_comment(reader, style, sink)?;
            Ok(Some(style))
        }
    }
}

/// Process every path in order and write the result to `out`.
///
/// Paths should already be absolute; they are shown as given.
pub fn run<W: WriteColor>(config: &RunConfig, paths: &[PathBuf], out: &mut W) -> Result<()> {
    let registry = StyleRegistry::builtin();

    if config.json {
        let reports = paths
            .iter()
            .map(|path| report_file(registry, config.mode, path))
            .collect::<Result<Vec<_>>>()?;
        write_reports(out, &reports)?;
    } else {
        for path in paths {
            print_file(registry, config, path, out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn open(path: &Path) -> Result<BufReader<File>> {
    log::debug!("opening {}", path.display());
    let file = File::open(path).map_err(|e| Error::file(path, e))?;
    Ok(BufReader::new(file))
}

fn print_file<W: WriteColor>(
    registry: &StyleRegistry,
    config: &RunConfig,
    path: &Path,
    out: &mut W,
) -> Result<()> {
    if config.banner {
        write_banner(out, path)?;
    }

    let mut reader = open(path)?;
    let mut sink = ConsoleSink::new(out, config.numbering);
    process(registry, config.mode, &mut reader, &mut sink).map_err(|e| e.into_error(path))?;
    log::debug!(
        "{}: {} line(s) in {:?} mode",
        path.display(),
        sink.lines_emitted(),
        config.mode
    );
    Ok(())
}

fn report_file(registry: &StyleRegistry, mode: Mode, path: &Path) -> Result<FileReport> {
    let mut reader = open(path)?;
    let mut report = FileReport::new(path.to_path_buf(), mode.report_mode());
    let style = process(registry, mode, &mut reader, &mut ReportSink::new(&mut report))
        .map_err(|e| e.into_error(path))?;
    report.style = style.cloned();
    Ok(report)
}
