//! Command line definition
//!
//! Built with the clap builder API so `main` and the tests share one
//! [`Command`].

use std::{path::PathBuf, str::FromStr};

use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use scriptpp_core::{LineEnding, PreprocessorConfig};

/// How the flattened script is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The flattened script itself
    #[default]
    Text,
    /// References, imports, body and loaded files as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!("Unknown output format: {other}")),
        }
    }
}

/// Parsed command line options
#[derive(Debug, Clone)]
pub struct CliOptions {
    /// Entry script, as understood by the line source
    pub file: String,
    /// Output file; stdout when absent
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub config: PreprocessorConfig,
    pub debug: bool,
}

impl CliOptions {
    /// Options for `file` with every flag at its default
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            output: None,
            format: OutputFormat::Text,
            config: PreprocessorConfig::default(),
            debug: false,
        }
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let file = matches
            .get_one::<String>("file")
            .cloned()
            .ok_or_else(|| anyhow!("Missing entry script"))?;

        let base_dir = matches
            .get_one::<String>("base-dir")
            .map(PathBuf::from)
            .unwrap_or_else(|| PreprocessorConfig::default().base_dir);

        let line_ending = match matches.get_one::<String>("line-ending") {
            Some(value) => value.parse::<LineEnding>().map_err(|e| anyhow!(e))?,
            None => LineEnding::default(),
        };

        let format = match matches.get_one::<String>("format") {
            Some(value) => value
                .parse::<OutputFormat>()
                .with_context(|| format!("Invalid --format value '{value}'"))?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            file,
            output: matches.get_one::<String>("output").map(PathBuf::from),
            format,
            config: PreprocessorConfig {
                base_dir,
                line_ending,
            },
            debug: matches.get_flag("debug"),
        })
    }
}

/// The `scriptpp` command
pub fn command() -> Command {
    Command::new("scriptpp")
        .version(scriptpp_core::VERSION)
        .about("Flatten a script and everything it #loads into a single file")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Entry script")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("base-dir")
                .long("base-dir")
                .value_name("DIR")
                .help("Directory that relative script paths resolve against")
                .default_value("."),
        )
        .arg(
            Arg::new("line-ending")
                .long("line-ending")
                .value_name("ENDING")
                .help("Line terminator for the output")
                .value_parser(["native", "lf", "crlf"])
                .default_value("native"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .help("Write the result to PATH instead of stdout"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
}
