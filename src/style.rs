//! Comment style registry
//!
//! Holds the catalog of comment conventions that detection can recognize.
//! Each style is either line-delimited (an opening token repeated on every
//! line) or block-delimited (an opening token and a closing token).
//!
//! The same name may appear once per kind: `C` has both a `//` line style
//! and a `/* */` block style. Opening tokens are unique across the whole
//! table, and lookups resolve overlapping prefixes by trying the longest
//! opening token first.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

/// How a comment starts and ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CommentKind {
    /// Continues while each line starts with `opening`.
    Line { opening: &'static str },
    /// Runs from `opening` until a line containing `closing`.
    Block {
        opening: &'static str,
        closing: &'static str,
    },
}

impl CommentKind {
    pub fn opening(&self) -> &'static str {
        match *self {
            CommentKind::Line { opening } | CommentKind::Block { opening, .. } => opening,
        }
    }

    pub fn closing(&self) -> Option<&'static str> {
        match *self {
            CommentKind::Line { .. } => None,
            CommentKind::Block { closing, .. } => Some(closing),
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, CommentKind::Block { .. })
    }
}

/// A named comment convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentStyle {
    pub name: &'static str,
    #[serde(flatten)]
    pub kind: CommentKind,
    /// Languages sharing this convention. Only used for `--lang`.
    pub languages: &'static [&'static str],
}

impl CommentStyle {
    const fn line(
        name: &'static str,
        opening: &'static str,
        languages: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            kind: CommentKind::Line { opening },
            languages,
        }
    }

    const fn block(
        name: &'static str,
        opening: &'static str,
        closing: &'static str,
        languages: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            kind: CommentKind::Block { opening, closing },
            languages,
        }
    }

    pub fn opening(&self) -> &'static str {
        self.kind.opening()
    }
}

impl fmt::Display for CommentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CommentKind::Line { opening } => write!(f, "{} line ({})", self.name, opening),
            CommentKind::Block { opening, closing } => {
                write!(f, "{} block ({} ... {})", self.name, opening, closing)
            }
        }
    }
}

const LINE_STYLES: &[CommentStyle] = &[
    CommentStyle::line(
        "C",
        "//",
        &["C++", "Java", "Kotlin", "Go", "Rust", "Swift", "Dart"],
    ),
    CommentStyle::line("Python", "#", &["Shell", "Ruby", "Julia", "Perl"]),
    CommentStyle::line("Lisp", ";", &[]),
    CommentStyle::line("Lua", "--", &[]),
    CommentStyle::line("Forth", "\\", &[]),
    CommentStyle::line("Fortran", "!", &[]),
];

const BLOCK_STYLES: &[CommentStyle] = &[
    CommentStyle::block("C", "/*", "*/", &["C++", "Java", "Kotlin", "Go", "Rust"]),
    CommentStyle::block("Lisp", "#|", "|#", &[]),
    CommentStyle::block("Lua", "--[[", "--]]", &[]),
    CommentStyle::block("Forth", "(", ")", &[]),
    CommentStyle::block("Ruby", "=begin", "=end", &[]),
    CommentStyle::block("Julia", "#=", "=#", &[]),
    CommentStyle::block("Perl", "=", "=cut", &[]),
];

/// Read-only collection of every known comment style.
#[derive(Debug)]
pub struct StyleRegistry {
    line: &'static [CommentStyle],
    block: &'static [CommentStyle],
    by_length: Vec<&'static CommentStyle>,
}

impl StyleRegistry {
    /// The built-in registry, constructed on first use.
    pub fn builtin() -> &'static StyleRegistry {
        static REGISTRY: OnceLock<StyleRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| StyleRegistry::new(LINE_STYLES, BLOCK_STYLES))
    }

    fn new(line: &'static [CommentStyle], block: &'static [CommentStyle]) -> Self {
        let mut by_length: Vec<&'static CommentStyle> = line.iter().chain(block).collect();
        // Equal lengths fall back to comparing the tokens themselves.
        by_length.sort_by(|a, b| {
            b.opening()
                .len()
                .cmp(&a.opening().len())
                .then_with(|| a.opening().cmp(b.opening()))
        });
        Self {
            line,
            block,
            by_length,
        }
    }

    pub fn line_styles(&self) -> impl Iterator<Item = &CommentStyle> {
        self.line.iter()
    }

    pub fn block_styles(&self) -> impl Iterator<Item = &CommentStyle> {
        self.block.iter()
    }

    /// Every style, longest opening token first.
    pub fn by_descending_opening_len(&self) -> &[&CommentStyle] {
        &self.by_length
    }

    /// Look up a line style by name.
    pub fn find_line(&self, name: &str) -> Option<&CommentStyle> {
        self.line.iter().find(|style| style.name == name)
    }

    /// Look up a block style by name.
    pub fn find_block(&self, name: &str) -> Option<&CommentStyle> {
        self.block.iter().find(|style| style.name == name)
    }

    /// Sorted, de-duplicated style and language names.
    pub fn language_names(&self) -> Vec<&'static str> {
        let names: BTreeSet<&'static str> = self
            .line
            .iter()
            .chain(self.block)
            .flat_map(|style| std::iter::once(style.name).chain(style.languages.iter().copied()))
            .collect();
        names.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.line.len() + self.block.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
