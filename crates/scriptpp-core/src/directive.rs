//! Directive line classification
//!
//! A script file opens with a header of `#load`, `#r` and `using ...;`
//! lines. The first code line ends the header for the rest of that file:
//! from then on every line is plain body text, directive-shaped or not.

use once_cell::sync::Lazy;
use regex::Regex;

static LOAD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*#load[ \t]+"([^"]+)"\s*;?\s*$"#).expect("valid #load pattern"));

static REFERENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*#r[ \t]+"([^"]+)"\s*;?\s*$"#).expect("valid #r pattern"));

/// Scanner state for a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Directives are still recognized
    #[default]
    Header,
    /// A code line has been seen; nothing is a directive any more
    Body,
}

impl ScanMode {
    /// Mode for the line following one classified as `kind`.
    ///
    /// The only transition is `Header -> Body`, taken on a code line.
    pub fn after(self, kind: &LineKind) -> ScanMode {
        match (self, kind) {
            (ScanMode::Header, LineKind::Code) => ScanMode::Body,
            (mode, _) => mode,
        }
    }
}

/// What a single source line means to the preprocessor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `#load "target"`, with the path exactly as written between the quotes
    Load { target: String },
    /// `#r "assembly"`
    Reference,
    /// `using Some.Namespace;`
    Import,
    /// Empty or whitespace-only line. Kept as body text, never ends the header.
    Blank,
    /// Anything else
    Code,
}

/// Classify `line` given the current scan mode of its file
pub fn classify(line: &str, mode: ScanMode) -> LineKind {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if mode == ScanMode::Body {
        return LineKind::Code;
    }

    if let Some(target) = load_target(line) {
        LineKind::Load {
            target: target.to_string(),
        }
    } else if is_reference_line(line) {
        LineKind::Reference
    } else if is_import_line(line) {
        LineKind::Import
    } else {
        LineKind::Code
    }
}

/// Path named by a well-formed `#load` line
pub fn load_target(line: &str) -> Option<&str> {
    LOAD_RE
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

pub fn is_reference_line(line: &str) -> bool {
    REFERENCE_RE.is_match(line)
}

/// `using X;` import shape.
///
/// `using (var s = ...) {` does not end in `;` and stays code.
pub fn is_import_line(line: &str) -> bool {
    line.trim_start().starts_with("using ") && line.trim_end().ends_with(';')
}
