use std::path::PathBuf;

use clap::Parser;

/// Options shared by every health tracking tool.
#[derive(Debug, Parser)]
#[command(version, about = "Interactive personal health tracking tools")]
pub struct Args {
    /// Directory exported reports and charts are written to
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// log4rs configuration file
    #[arg(long, default_value = "log4rs.yml")]
    pub log_config: PathBuf,

    /// Log debug output to stderr when the log configuration file is missing
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
