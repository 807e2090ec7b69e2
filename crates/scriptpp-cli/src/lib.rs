//! Scriptpp CLI - command-line host for the script preprocessor
//!
//! Wires a [`FileSystemSource`] to the [`FilePreprocessor`] and renders the
//! flattened script as text or JSON. All preprocessing rules live in
//! `scriptpp-core`.

pub mod options;

use std::{
    fs,
    io::{self, Write},
};

use anyhow::{Context, Result};
use scriptpp_core::{FilePreprocessor, FileSystemSource, LineSource};
use tracing::{debug, info};

// Re-export commonly used types for convenience
pub use options::{command, CliOptions, OutputFormat};

/// Flatten the entry script named by `options` and render it
pub fn run(options: &CliOptions) -> Result<String> {
    let source = FileSystemSource::from_config(&options.config);
    let terminator = source.line_terminator().to_string();
    let preprocessor = FilePreprocessor::new(source);

    let script = preprocessor
        .process(&options.file)
        .with_context(|| format!("Failed to preprocess {}", options.file))?;

    info!(
        "Flattened {} file(s) into {} line(s)",
        script.loaded_files.len(),
        script.lines().count()
    );

    match options.format {
        OutputFormat::Text => Ok(script.render(&terminator)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&script).context("Failed to serialize script")
        }
    }
}

/// Write rendered output to `--output` or stdout
///
/// Non-empty output gets one trailing terminator, the configured line
/// ending, whichever destination is used.
pub fn write_output(options: &CliOptions, output: &str) -> Result<()> {
    let mut contents = output.to_string();
    if !contents.is_empty() {
        contents.push_str(options.config.line_ending.as_str());
    }

    match &options.output {
        Some(path) => {
            debug!("Writing {} byte(s) to {}", contents.len(), path.display());
            fs::write(path, &contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
