//! Comment extraction and plain line streaming
//!
//! Every function here reads from a buffered stream and hands lines to a
//! [`LineSink`]. Lines are passed without their terminator. Each mode ends by
//! writing one separator line, even when nothing else was emitted.

use std::io::{self, BufRead};

use crate::error::StreamError;
use crate::style::{CommentKind, CommentStyle};

/// Destination for lines produced by extraction.
pub trait LineSink {
    /// Emit one line of file content.
    fn emit(&mut self, line: &str) -> io::Result<()>;

    /// Mark the end of one file's output.
    fn separator(&mut self) -> io::Result<()>;
}

/// Line reader that strips `\n` and `\r\n` terminators.
struct Lines<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }

    /// Next line, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<&str>, StreamError> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf).map_err(StreamError::Read)? == 0 {
            return Ok(None);
        }
        let line = self.buf.strip_suffix('\n').unwrap_or(&self.buf);
        Ok(Some(line.strip_suffix('\r').unwrap_or(line)))
    }
}

/// Emit the comment block described by `style`, starting at the first line.
///
/// Returns the number of lines emitted, not counting the separator.
pub fn extract_comment<R, S>(
    reader: R,
    style: &CommentStyle,
    sink: &mut S,
) -> Result<usize, StreamError>
where
    R: BufRead,
    S: LineSink + ?Sized,
{
    let mut lines = Lines::new(reader);
    let mut emitted = 0;

    match style.kind {
        CommentKind::Line { opening } => {
            while let Some(line) = lines.next_line()? {
                if !line.trim_start().starts_with(opening) {
                    break;
                }
                sink.emit(line).map_err(StreamError::Write)?;
                emitted += 1;
            }
        }
        CommentKind::Block { closing, .. } => {
            let mut closed = false;
            while let Some(line) = lines.next_line()? {
                sink.emit(line).map_err(StreamError::Write)?;
                emitted += 1;
                if line.contains(closing) {
                    closed = true;
                    break;
                }
            }
            if !closed {
                log::debug!("{} comment not closed before end of input", style);
            }
        }
    }

    sink.separator().map_err(StreamError::Write)?;
    Ok(emitted)
}

/// Emit every remaining line.
pub fn cat<R, S>(reader: R, sink: &mut S) -> Result<usize, StreamError>
where
    R: BufRead,
    S: LineSink + ?Sized,
{
    stream_lines(reader, None, sink)
}

/// Emit at most `count` lines.
pub fn head<R, S>(reader: R, count: usize, sink: &mut S) -> Result<usize, StreamError>
where
    R: BufRead,
    S: LineSink + ?Sized,
{
    stream_lines(reader, Some(count), sink)
}

fn stream_lines<R, S>(
    reader: R,
    limit: Option<usize>,
    sink: &mut S,
) -> Result<usize, StreamError>
where
    R: BufRead,
    S: LineSink + ?Sized,
{
    let mut lines = Lines::new(reader);
    let mut emitted = 0;

    while limit.is_none_or(|max| emitted < max) {
        let Some(line) = lines.next_line()? else {
            break;
        };
        sink.emit(line).map_err(StreamError::Write)?;
        emitted += 1;
    }

    sink.separator().map_err(StreamError::Write)?;
    Ok(emitted)
}
