//! Run configuration
//!
//! Built once from the command line and read-only afterwards.

use std::io::IsTerminal;

use clap::ValueEnum;
use termcolor::ColorChoice;

use crate::report::ReportMode;

/// Which lines of each file to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Detect the leading comment and print it.
    #[default]
    Comment,
    /// Print the first N lines.
    Head(usize),
    /// Print the whole file.
    Cat,
}

impl Mode {
    /// Resolve the mode from `--cat` and `--lines`.
    ///
    /// `--cat` wins; a line count of zero selects comment detection.
    pub fn from_flags(cat: bool, lines: usize) -> Self {
        if cat {
            Mode::Cat
        } else if lines > 0 {
            Mode::Head(lines)
        } else {
            Mode::Comment
        }
    }

    pub fn report_mode(self) -> ReportMode {
        match self {
            Mode::Comment => ReportMode::Comment,
            Mode::Head(_) => ReportMode::Head,
            Mode::Cat => ReportMode::Cat,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Decide whether stdout should be colored.
    pub fn should_use_color(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // https://no-color.org/
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                if std::env::var_os("FORCE_COLOR").is_some() {
                    return true;
                }
                if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                    return false;
                }
                std::io::stdout().is_terminal()
            }
        }
    }

    pub fn color_choice(self) -> ColorChoice {
        if self.should_use_color() {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    }
}

/// Settings shared by every file in one invocation.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub mode: Mode,
    /// Print the `***` header before each file.
    pub banner: bool,
    /// Prefix printed lines with `[   n] `.
    pub numbering: bool,
    pub color: ColorMode,
    /// Collect JSON reports instead of printing text.
    pub json: bool,
}
