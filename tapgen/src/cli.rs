// tapgen/src/cli.rs
//! Defines the command-line argument structure using clap.
use clap::{ArgAction, Parser};

pub mod generate;

#[derive(Parser, Debug)]
#[command(author, about, long_about = None, name = "tapgen", bin_name = "tapgen")]
#[command(disable_version_flag = true)]
pub struct CliArgs {
    /// Release tag to generate the formula for (e.g. v1.4.45)
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    pub version: String,

    /// Show what would be generated without writing files
    #[arg(short = 'd', long = "dry-run")]
    pub dry_run: bool,

    /// Increase log verbosity (once for debug, twice for trace)
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,
}
