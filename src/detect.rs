//! Comment style detection
//!
//! Detection looks only at the first line of a stream. The line is trimmed
//! and checked against every registered opening token, longest first, so that
//! `--[[` wins over `--` and `#|` wins over `#`.

use std::io::{self, BufRead, Seek, SeekFrom};

use crate::style::{CommentStyle, StyleRegistry};

/// Find the style whose opening token starts `line`.
///
/// Surrounding whitespace is ignored. Returns `None` for blank lines.
pub fn match_line<'r>(registry: &'r StyleRegistry, line: &str) -> Option<&'r CommentStyle> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    registry
        .by_descending_opening_len()
        .iter()
        .find(|style| trimmed.starts_with(style.opening()))
        .copied()
}

/// Detect the comment style of the line at the stream's current position.
///
/// The stream is rewound to where it was before the call, so extraction
/// reads the same first line again.
pub fn detect<'r, R>(
    registry: &'r StyleRegistry,
    stream: &mut R,
) -> io::Result<Option<&'r CommentStyle>>
where
    R: BufRead + Seek,
{
    let start = stream.stream_position()?;
    let mut first = String::new();
    let read = stream.read_line(&mut first)?;
    stream.seek(SeekFrom::Start(start))?;

    if read == 0 {
        log::debug!("empty input, nothing to detect");
        return Ok(None);
    }

    let found = match_line(registry, &first);
    match found {
        Some(style) => log::debug!("detected {}", style),
        None => log::debug!("first line matches no comment style"),
    }
    Ok(found)
}
