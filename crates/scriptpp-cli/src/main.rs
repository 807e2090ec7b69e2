use anyhow::Result;
use scriptpp_cli::{command, run, write_output, CliOptions};
use scriptpp_core::init_tracing;
use tracing::debug;

fn main() -> Result<()> {
    let matches = command().get_matches();
    let options = CliOptions::from_matches(&matches)?;

    // Initialize logging
    init_tracing(if options.debug {
        "scriptpp_core=debug,scriptpp_cli=debug"
    } else {
        "scriptpp_core=warn,scriptpp_cli=warn"
    });
    debug!("Options: {:?}", options);

    let output = run(&options)?;
    write_output(&options, &output)
}
