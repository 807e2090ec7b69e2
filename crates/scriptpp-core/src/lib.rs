//! # Scriptpp Core
//!
//! Core implementation of the script preprocessor, including:
//! - Directive classification for `#load`, `#r` and `using ...;` lines
//! - The [`LineSource`] seam plus filesystem and in-memory sources
//! - [`FilePreprocessor`], which flattens a `#load` graph into one script
//!   with references first, imports second and code last
//!
//! Reading files, compiling and executing the flattened script all belong
//! to the host application. This crate only ever sees lines.

#![warn(clippy::all)]

pub mod config;
pub mod directive;
pub mod preprocessor;
pub mod source;

// Re-export commonly used types
pub use config::{LineEnding, PreprocessorConfig};
pub use directive::{classify, LineKind, ScanMode};
pub use preprocessor::{FilePreprocessor, ProcessedScript};
pub use source::{FileSystemSource, InMemorySource, LineSource, SourceError};

/// Scriptpp version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for scriptpp components.
///
/// `default_directive` applies when `RUST_LOG` is unset, e.g.
/// `"scriptpp_core=info"`. Output goes to stderr so stdout can carry the
/// flattened script.
pub fn init_tracing(default_directive: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    // A second initialization (tests, embedding hosts) is not an error.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Result type for scriptpp core operations
pub type Result<T> = std::result::Result<T, SourceError>;
