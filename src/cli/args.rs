use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "backup-seeds")]
#[command(
    about = "Separate signal and backup seeds in an L1 trigger prescale table",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Prescale table (.csv) with a seed name and a prescale column
    pub file: PathBuf,

    /// Configuration file (default: search for .backup-seeds.toml upwards)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for the signal and backup seed tables
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Number of worker threads (0 = use all cores)
    #[arg(short = 'j', long = "jobs", env = "BACKUP_SEEDS_JOBS")]
    pub jobs: Option<usize>,

    /// Classify rows on the main thread only
    #[arg(long = "no-parallel")]
    pub no_parallel: bool,

    /// Plain output (no colors, ASCII table borders)
    #[arg(long)]
    pub plain: bool,

    /// Do not print the backup seed report
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbosity: u8,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
