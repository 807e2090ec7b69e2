//! Preprocessor configuration
//!
//! Hosts build a [`PreprocessorConfig`] from their own flags and hand it to
//! [`FileSystemSource::from_config`](crate::source::FileSystemSource::from_config).

use std::{fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

/// Line terminator used to join the flattened output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// The platform convention (`\r\n` on Windows, `\n` elsewhere)
    #[default]
    Native,
    /// Unix line feed
    Lf,
    /// Carriage return + line feed
    CrLf,
}

impl LineEnding {
    /// The terminator sequence
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(LineEnding::Native),
            "lf" | "unix" => Ok(LineEnding::Lf),
            "crlf" | "windows" => Ok(LineEnding::CrLf),
            other => Err(format!(
                "Unknown line ending '{other}' (expected native, lf or crlf)"
            )),
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineEnding::Native => "native",
            LineEnding::Lf => "lf",
            LineEnding::CrLf => "crlf",
        };
        f.write_str(name)
    }
}

/// Core preprocessor configuration
#[derive(Debug, Clone)]
pub struct PreprocessorConfig {
    /// Directory that relative `#load` targets and entry paths resolve against
    pub base_dir: PathBuf,
    /// Terminator for the flattened output
    pub line_ending: LineEnding,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            base_dir: ".".into(),
            line_ending: LineEnding::Native,
        }
    }
}
