// tapgen/src/main.rs
use std::process;

use clap::Parser;
use colored::Colorize;
use tapgen_common::config::Config;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::CliArgs;

#[tokio::main]
async fn main() {
    let cli_args = CliArgs::parse();

    let level_filter = match cli_args.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("TAPGEN_LOG")
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .without_time()
        .try_init();

    let config = Config::load();

    if let Err(e) = cli::generate::run(&cli_args, &config).await {
        debug!("Run failed: {:#}", e);
        println!("{}: {}", "Error".red().bold(), e);
        if std::env::var("TAPGEN_DEBUG").is_ok() {
            println!("{e:?}");
        }
        process::exit(1);
    }

    debug!("Run completed successfully.");
}
