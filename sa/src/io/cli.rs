use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON instance, or a folder with a products and a capacities table
    #[arg(short, long, value_name = "FILE|FOLDER")]
    pub input: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Only the first ceil(n * fraction) products of the instance are considered
    #[arg(short, long, value_name = "(0, 1]", default_value_t = 1.0)]
    pub fraction: f64,
}
