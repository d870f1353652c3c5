use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tp_api::{ApiResult, ProcessRequest, list_substances, solve};

#[derive(Parser)]
#[command(name = "tp-cli")]
#[command(about = "thermoproc CLI - closed-system thermodynamic process solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available substances as JSON
    Substances,
    /// Solve a process request given as JSON
    Solve {
        /// Path to the request JSON file (reads stdin if omitted)
        request_path: Option<PathBuf>,
    },
}

fn main() -> ApiResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Substances => cmd_substances(),
        Commands::Solve { request_path } => cmd_solve(request_path),
    }
}

fn cmd_substances() -> ApiResult<()> {
    let substances = list_substances();
    println!("{}", serde_json::to_string_pretty(&substances)?);
    Ok(())
}

fn cmd_solve(request_path: Option<PathBuf>) -> ApiResult<()> {
    let raw = match request_path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let request: ProcessRequest = serde_json::from_str(&raw)?;
    tracing::debug!(substance = %request.substance, "solving process request");

    match solve(&request) {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(err) => {
            eprintln!("error ({}): {}", err.kind(), err);
            Err(err)
        }
    }
}
