use std::error::Error;
use std::fs;
use std::process::ExitCode;

use clap::Parser;
use healthtrack_cli::{args::Args, console, logging, report_outcome, visualizer};
use log::info;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = Args::parse();
    logging::init(&args.log_config, args.verbose)?;
    info!("Starting nutrition-visualizer, writing to {}", args.output_dir.display());

    fs::create_dir_all(&args.output_dir)?;
    let mut console = console::stdio();
    let store = healthtrack_report::create(args.output_dir.clone());
    let outcome = visualizer::run(&mut console, &store, &args.output_dir);

    Ok(report_outcome(&mut console, outcome, visualizer::INPUT_HINT))
}
