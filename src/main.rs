//! speechbridge - speech-to-speech translation server

#![allow(missing_docs)]

use clap::Parser;
use speechbridge::server;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "speechbridge", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "SPEECHBRIDGE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is not an error
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logging is installed once the configuration is known
    match server::builder::run_server(cli.config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
