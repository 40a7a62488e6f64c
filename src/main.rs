use wordwrap::config::{load_config, CliArgs};
use wordwrap::{app, logging};

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();
    let debug_config = args.debug_config;

    // Load configuration
    let config = load_config(args)?;

    if debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    logging::init_logging(&config.log_level)?;

    let report = app::run(&config);
    tracing::debug!(?report, "run finished");

    println!(
        "Word wrap complete. Output written to {}",
        config.output_file.display()
    );

    Ok(())
}
