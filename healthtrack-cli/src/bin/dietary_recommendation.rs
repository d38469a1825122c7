use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use healthtrack_cli::{args::Args, console, dietary, logging, report_outcome};
use log::info;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = Args::parse();
    logging::init(&args.log_config, args.verbose)?;
    info!("Starting dietary-recommendation, writing to {}", args.output_dir.display());

    let mut console = console::stdio();
    let store = healthtrack_report::create(args.output_dir.clone());
    let outcome = dietary::run(&mut console, &store);

    Ok(report_outcome(&mut console, outcome, dietary::INPUT_HINT))
}
