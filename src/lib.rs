//! headcomment - print the leading comment block of source files

pub mod config;
pub mod detect;
pub mod error;
pub mod extract;
pub mod output;
pub mod paths;
pub mod report;
pub mod runner;
pub mod style;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use config::{ColorMode, Mode, RunConfig};
pub use detect::{detect, match_line};
pub use error::{Error, Result, StreamError};
pub use extract::{LineSink, cat, extract_comment, head};
pub use output::{ConsoleSink, write_banner, write_languages};
pub use report::{FileReport, ReportMode, ReportSink, write_languages_json, write_reports};
pub use runner::{process, run};
pub use style::{CommentKind, CommentStyle, StyleRegistry};
