//! Console output
//!
//! `ConsoleSink` writes extracted lines to a `termcolor` stream, handling the
//! per-file banner, optional line numbers and the separator line.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::extract::LineSink;

const BANNER_WIDTH: usize = 60;

/// Writes one file's output to a colour-capable stream.
///
/// Line numbers start at 1 for every new sink; create one sink per file.
pub struct ConsoleSink<'w, W: WriteColor> {
    out: &'w mut W,
    numbering: bool,
    line_number: usize,
}

impl<'w, W: WriteColor> ConsoleSink<'w, W> {
    pub fn new(out: &'w mut W, numbering: bool) -> Self {
        Self {
            out,
            numbering,
            line_number: 0,
        }
    }

    /// Number of lines emitted so far.
    pub fn lines_emitted(&self) -> usize {
        self.line_number
    }
}

impl<W: WriteColor> LineSink for ConsoleSink<'_, W> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.line_number += 1;
        if self.numbering {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(self.out, "[{:>4}]", self.line_number)?;
            self.out.reset()?;
            write!(self.out, " ")?;
        }
        writeln!(self.out, "{}", line)
    }

    fn separator(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }
}

/// Print the header shown before each file.
pub fn write_banner<W: WriteColor>(out: &mut W, path: &Path) -> io::Result<()> {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Yellow)).set_bold(true);

    out.set_color(&spec)?;
    writeln!(out, "{}", "*".repeat(BANNER_WIDTH))?;
    write!(out, "*** {}", path.display())?;
    out.reset()?;
    writeln!(out)?;
    writeln!(out)
}

/// Print language names one per line.
pub fn write_languages<W: Write>(out: &mut W, names: &[&str]) -> io::Result<()> {
    for name in names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use termcolor::{Ansi, NoColor};

    use super::*;

    fn plain() -> NoColor<Vec<u8>> {
        NoColor::new(Vec::new())
    }

    fn text(out: NoColor<Vec<u8>>) -> String {
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_lines() {
        let mut out = plain();
        let mut sink = ConsoleSink::new(&mut out, false);
        sink.emit("# one").unwrap();
        sink.emit("# two").unwrap();
        sink.separator().unwrap();
        assert_eq!(sink.lines_emitted(), 2);
        assert_eq!(text(out), "# one\n# two\n\n");
    }

    #[test]
    fn test_numbered_lines() {
        let mut out = plain();
        let mut sink = ConsoleSink::new(&mut out, true);
        sink.emit("first").unwrap();
        sink.emit("second").unwrap();
        sink.separator().unwrap();
        assert_eq!(text(out), "[   1] first\n[   2] second\n\n");
    }

    #[test]
    fn test_numbering_wide_values() {
        let mut out = plain();
        let mut sink = ConsoleSink::new(&mut out, true);
        for _ in 0..12345 {
            sink.emit("x").unwrap();
        }
        let output = text(out);
        assert!(output.starts_with("[   1] x\n"));
        assert!(output.contains("[9999] x\n"));
        assert!(output.ends_with("[12345] x\n"));
    }

    #[test]
    fn test_numbering_restarts_per_sink() {
        let mut out = plain();
        {
            let mut sink = ConsoleSink::new(&mut out, true);
            sink.emit("a").unwrap();
            sink.emit("b").unwrap();
            sink.separator().unwrap();
        }
        {
            let mut sink = ConsoleSink::new(&mut out, true);
            sink.emit("c").unwrap();
            sink.separator().unwrap();
        }
        assert_eq!(text(out), "[   1] a\n[   2] b\n\n[   1] c\n\n");
    }

    #[test]
    fn test_banner() {
        let mut out = plain();
        write_banner(&mut out, &PathBuf::from("/tmp/file.rs")).unwrap();
        let expected = format!("{}\n*** /tmp/file.rs\n\n", "*".repeat(60));
        assert_eq!(text(out), expected);
    }

    #[test]
    fn test_banner_colored() {
        let mut out = Ansi::new(Vec::new());
        write_banner(&mut out, &PathBuf::from("/tmp/file.rs")).unwrap();
        let output = String::from_utf8(out.into_inner()).unwrap();
        assert!(output.contains("\x1b["), "expected escape codes: {:?}", output);
        assert!(output.contains("*** /tmp/file.rs"));
    }

    #[test]
    fn test_languages() {
        let mut out = Vec::new();
        write_languages(&mut out, &["C", "Lua"]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "C\nLua\n");
    }
}
