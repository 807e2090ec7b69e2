use std::collections::HashMap;

use parking_lot::Mutex;

use super::{LineSource, SourceError};

/// Line source backed by an in-memory map of path to lines
///
/// Every successful or failed read is counted per path, which lets callers
/// check how often the preprocessor touched each file.
#[derive(Debug)]
pub struct InMemorySource {
    files: HashMap<String, Vec<String>>,
    terminator: String,
    reads: Mutex<HashMap<String, usize>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            terminator: "\n".to_string(),
            reads: Mutex::new(HashMap::new()),
        }
    }

    /// Add (or replace) a file
    pub fn with_file<I, L>(mut self, path: &str, lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.insert(path, lines);
        self
    }

    /// Set the output terminator
    pub fn with_terminator(mut self, terminator: &str) -> Self {
        self.terminator = terminator.to_string();
        self
    }

    pub fn insert<I, L>(&mut self, path: &str, lines: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.files
            .insert(path.to_string(), lines.into_iter().map(Into::into).collect());
    }

    /// Number of times `path` was requested
    pub fn read_count(&self, path: &str) -> usize {
        self.reads.lock().get(path).copied().unwrap_or(0)
    }

    /// Number of reads across all paths
    pub fn total_reads(&self) -> usize {
        self.reads.lock().values().sum()
    }
}

impl Default for InMemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for InMemorySource {
    fn read_lines(&self, path: &str) -> Result<Vec<String>, SourceError> {
        *self.reads.lock().entry(path.to_string()).or_insert(0) += 1;

        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::not_found(path))
    }

    fn line_terminator(&self) -> &str {
        &self.terminator
    }
}
