use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use healthtrack_cli::{args::Args, calorie, console, logging, report_outcome};
use log::info;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = Args::parse();
    logging::init(&args.log_config, args.verbose)?;
    info!("Starting calorie-planner, writing to {}", args.output_dir.display());

    let mut console = console::stdio();
    let store = healthtrack_report::create(args.output_dir.clone());
    let outcome = calorie::run(&mut console, &store);

    Ok(report_outcome(&mut console, outcome, calorie::INPUT_HINT))
}
