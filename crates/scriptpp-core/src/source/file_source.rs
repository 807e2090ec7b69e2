use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::{LineSource, SourceError};
use crate::config::{LineEnding, PreprocessorConfig};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads script files from disk
///
/// Relative paths resolve against `base_dir`, absolute paths are used as-is.
#[derive(Debug, Clone)]
pub struct FileSystemSource {
    base_dir: PathBuf,
    line_ending: LineEnding,
}

impl FileSystemSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            line_ending: LineEnding::Native,
        }
    }

    pub fn from_config(config: &PreprocessorConfig) -> Self {
        Self {
            base_dir: config.base_dir.clone(),
            line_ending: config.line_ending,
        }
    }

    /// Set the output line ending
    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Filesystem location for a script path
    pub fn resolve(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.base_dir.join(candidate)
        }
    }
}

/// Split on `\r\n`, `\n` and bare `\r`.
///
/// A terminator at the very end does not open an extra empty line.
fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }

    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let trimmed = normalized.strip_suffix('\n').unwrap_or(&normalized);
    trimmed.split('\n').map(str::to_string).collect()
}

impl Default for FileSystemSource {
    fn default() -> Self {
        Self::from_config(&PreprocessorConfig::default())
    }
}

impl LineSource for FileSystemSource {
    fn read_lines(&self, path: &str) -> Result<Vec<String>, SourceError> {
        let resolved = self.resolve(path);
        debug!("Reading {} from {}", path, resolved.display());

        let content = fs::read_to_string(&resolved).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SourceError::not_found(path),
            _ => SourceError::Io {
                path: path.to_string(),
                source: e,
            },
        })?;

        let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&content);
        Ok(split_lines(content))
    }

    fn line_terminator(&self) -> &str {
        self.line_ending.as_str()
    }
}
