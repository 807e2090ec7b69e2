//! File preprocessor
//!
//! Walks the `#load` graph of an entry script depth-first and flattens it
//! into one script laid out as:
//!
//! 1. every distinct `#r` line, in discovery order
//! 2. every distinct `using ...;` import, in discovery order
//! 3. every body line, in traversal order
//!
//! Each file is read at most once per call. Load cycles and repeated
//! loads stop at the visited check instead of failing, and malformed
//! directives are treated as body text. The only error is a
//! [`SourceError`](crate::SourceError) from the [`LineSource`], returned
//! unchanged.

use std::vec;

use indexmap::IndexSet;
use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    directive::{classify, LineKind, ScanMode},
    source::LineSource,
    Result,
};


/// Result of flattening a script and everything it loads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessedScript {
    /// Distinct `#r` lines in discovery order
    pub references: IndexSet<String>,
    /// Distinct import lines in discovery order
    pub imports: IndexSet<String>,
    /// Remaining lines in traversal order
    pub body: Vec<String>,
    /// Every file that was read, in visit order, entry first
    pub loaded_files: IndexSet<String>,
}

impl ProcessedScript {
    /// Output lines: references, then imports, then body
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.references
            .iter()
            .chain(self.imports.iter())
            .chain(self.body.iter())
            .map(String::as_str)
    }

    /// Join the output lines with `terminator`
    pub fn render(&self, terminator: &str) -> String {
        self.lines().collect::<Vec<_>>().join(terminator)
    }
}

/// One file being scanned
struct Frame {
    path: String,
    lines: vec::IntoIter<String>,
    mode: ScanMode,
}

/// Flattens script files read through a [`LineSource`]
pub struct FilePreprocessor<S> {
    source: S,
}

impl<S: LineSource> FilePreprocessor<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Flatten `entry` and join the result with the source's terminator
    pub fn process_file(&self, entry: &str) -> Result<String> {
        let terminator = self.source.line_terminator().to_string();
        let script = self.process(entry)?;
        Ok(script.render(&terminator))
    }

    /// Flatten `entry` into its reference, import and body groups
    pub fn process(&self, entry: &str) -> Result<ProcessedScript> {
        let mut script = ProcessedScript::default();
        let mut stack = Vec::new();

        self.enter(entry, &mut script, &mut stack)?;

        // Explicit stack instead of recursion so deep load chains cannot
        // exhaust the call stack. Pushing a frame suspends the loading file
        // right after its `#load` line, which keeps pre-order DFS order.
        while let Some(frame) = stack.last_mut() {
            let Some(line) = frame.lines.next() else {
                trace!("Finished {}", frame.path);
                stack.pop();
                continue;
            };

            let kind = classify(&line, frame.mode);
            trace!("{}: {:?} {:?}", frame.path, kind, line);
            frame.mode = frame.mode.after(&kind);

            match kind {
                LineKind::Load { target } => {
                    self.enter(&target, &mut script, &mut stack)?;
                }
                LineKind::Reference => {
                    script.references.insert(line);
                }
                LineKind::Import => {
                    script.imports.insert(line);
                }
                LineKind::Blank | LineKind::Code => script.body.push(line),
            }
        }

        debug!(
            "Processed {}: {} files, {} references, {} imports, {} body lines",
            entry,
            script.loaded_files.len(),
            script.references.len(),
            script.imports.len(),
            script.body.len()
        );

        Ok(script)
    }

    /// Read `path` and push it for scanning unless it was already visited
    fn enter(
        &self,
        path: &str,
        script: &mut ProcessedScript,
        stack: &mut Vec<Frame>,
    ) -> Result<()> {
        if script.loaded_files.contains(path) {
            debug!("Skipping {}: already loaded", path);
            return Ok(());
        }
        script.loaded_files.insert(path.to_string());

        let lines = self.source.read_lines(path)?;
        debug!("Loaded {} ({} lines)", path, lines.len());

        stack.push(Frame {
            path: path.to_string(),
            lines: lines.into_iter(),
            mode: ScanMode::Header,
        });
        Ok(())
    }
}
