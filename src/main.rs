use crate::types::bump::BumpOptions;
use crate::utils::logger::{LogLevel, Logger};
use crate::utils::path::PathResolution;
use clap::Parser;
use std::error::Error;

mod bumper;
mod types;
mod utils;

#[derive(Parser)]
#[command(name = "jsonbump")]
#[command(version)]
#[command(about = "Bump the MAJOR.MINOR.PATCH version entry of a JSON file")]
struct Cli {
    /// JSON file holding the version entry
    file: String,

    /// Name of the entry to update
    #[arg(long, default_value = "version")]
    entry: String,

    /// Increment MAJOR by this amount (resets MINOR and PATCH to 0)
    #[arg(long)]
    major: Option<u64>,

    /// Increment MINOR by this amount (resets PATCH to 0)
    #[arg(long)]
    minor: Option<u64>,

    /// Increment PATCH by this amount (the default action, with amount 1)
    #[arg(long)]
    patch: Option<u64>,

    /// Set the entry to this literal value instead of bumping
    #[arg(long)]
    replace: Option<String>,

    /// Resolve bare filenames next to the jsonbump binary instead of the
    /// working directory
    #[arg(long, default_value_t = false)]
    install_dir: bool,

    /// Print the outcome as JSON on stdout
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let options = BumpOptions {
        entry: cli.entry,
        major: cli.major,
        minor: cli.minor,
        patch: cli.patch,
        replace: cli.replace,
        resolution: if cli.install_dir {
            PathResolution::InstallDir
        } else {
            PathResolution::WorkingDir
        },
    };

    let logger = Logger::new();
    match bumper::bump(&cli.file, &options) {
        Ok(outcome) => {
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&outcome).unwrap_or_default()
                );
            } else {
                logger.log_message(
                    LogLevel::Success,
                    &format!("✅ {} -> {}", outcome.original, outcome.updated),
                );
            }
        }
        Err(e) => {
            let cause = e.source().map(|c| c.to_string());
            match &cause {
                Some(c) => {
                    logger.log_message_with_trace(LogLevel::Error, &e.to_string(), vec![c.as_str()])
                }
                None => logger.log_message(LogLevel::Error, &e.to_string()),
            }
            std::process::exit(e.exit_status());
        }
    }
}
