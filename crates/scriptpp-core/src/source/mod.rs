//! Line sources
//!
//! The preprocessor never touches the filesystem itself. It asks a
//! [`LineSource`] for the lines of each file it visits and for the
//! terminator used to join the output.

pub mod file_source;
pub mod memory;

pub use file_source::FileSystemSource;
pub use memory::InMemorySource;

/// Failure to produce the lines of a requested file
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    /// No file exists for the path
    #[error("Source not found: {path}")]
    NotFound { path: String },

    /// The file exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// Create a not found error
    pub fn not_found(path: &str) -> Self {
        Self::NotFound {
            path: path.to_string(),
        }
    }

    /// Path that could not be read
    pub fn path(&self) -> &str {
        match self {
            SourceError::NotFound { path } | SourceError::Io { path, .. } => path,
        }
    }
}

/// Provider of file contents, one entry per line
pub trait LineSource {
    /// Lines of the file at `path`, in file order, without terminators
    fn read_lines(&self, path: &str) -> Result<Vec<String>, SourceError>;

    /// Terminator used to join output lines
    fn line_terminator(&self) -> &str;
}

impl<T: LineSource + ?Sized> LineSource for &T {
    fn read_lines(&self, path: &str) -> Result<Vec<String>, SourceError> {
        (**self).read_lines(path)
    }

    fn line_terminator(&self) -> &str {
        (**self).line_terminator()
    }
}

impl<T: LineSource + ?Sized> LineSource for Box<T> {
    fn read_lines(&self, path: &str) -> Result<Vec<String>, SourceError> {
        (**self).read_lines(path)
    }

    fn line_terminator(&self) -> &str {
        (**self).line_terminator()
    }
}
