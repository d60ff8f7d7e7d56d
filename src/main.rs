//! CLI entry point for the graph certifier.
//!
//! Usage:
//!   graph-certifier solve <instance.json> [options]
//!   graph-certifier solve --stdin [options]
//!
//! Options:
//!   --timeout <seconds>                Maximum exhaustive search time (default: 15)
//!   --max-iterations <n>               Maximum candidates per search (default: 10000000)
//!   --max-isomorphism-vertices <n>     Largest isomorphism instance attempted (default: 9)
//!
//! Logs go to stderr and honor `RUST_LOG`; stdout carries only the JSON result.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use tracing_subscriber::EnvFilter;

use graph_certifier::{solve, Certificate, Instance, SolveError, SolveStatus, SolverConfig, SolverResult};

#[derive(Parser)]
#[command(name = "graph-certifier")]
#[command(about = "Exact certificate-finding solvers for graph puzzle instances")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a certificate for one puzzle instance
    Solve {
        /// Path to instance JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read instance from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Maximum exhaustive search time in seconds
        #[arg(long, default_value = "15")]
        timeout: u64,

        /// Maximum candidates an exhaustive search may test
        #[arg(long, default_value = "10000000")]
        max_iterations: u64,

        /// Largest vertex count the isomorphism search will attempt
        #[arg(long, default_value = "9")]
        max_isomorphism_vertices: usize,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Must provide either a file path or --stdin")]
    NoInput,

    #[error("Failed to read {source_name}: {source}")]
    Read {
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("Error parsing instance JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Output format for a solve
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    status: &'static str,
    puzzle: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    certificate: Option<Certificate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    iterations: u64,
    time_elapsed_ms: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "graph_certifier=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            timeout,
            max_iterations,
            max_isomorphism_vertices,
        } => {
            let config = SolverConfig {
                timeout: Duration::from_secs(timeout),
                max_iterations,
                max_isomorphism_vertices,
            };

            match run_solve(file, stdin, &config) {
                Ok(output) => {
                    let solved = output.status == "solved";
                    match serde_json::to_string_pretty(&output) {
                        Ok(json) => println!("{}", json),
                        Err(e) => {
                            error!(error = %e, "failed to serialize result");
                            return ExitCode::from(2);
                        }
                    }
                    if solved {
                        ExitCode::SUCCESS
                    } else {
                        ExitCode::from(1)
                    }
                }
                Err(e) => {
                    error!(error = %e, "solve failed");
                    ExitCode::from(2)
                }
            }
        }
    }
}

fn run_solve(file: Option<PathBuf>, stdin: bool, config: &SolverConfig) -> Result<SolveOutput, CliError> {
    let json_content = read_input(file, stdin)?;
    let instance: Instance = serde_json::from_str(&json_content)?;
    let result = solve(&instance, config)?;
    Ok(format_result(&instance, result))
}

fn read_input(file: Option<PathBuf>, stdin: bool) -> Result<String, CliError> {
    if stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Read {
                source_name: "stdin".to_string(),
                source,
            })?;
        Ok(buffer)
    } else if let Some(path) = file {
        fs::read_to_string(&path).map_err(|source| CliError::Read {
            source_name: path.display().to_string(),
            source,
        })
    } else {
        Err(CliError::NoInput)
    }
}

fn format_result(instance: &Instance, result: SolverResult) -> SolveOutput {
    let (status, reason) = match result.status {
        SolveStatus::Solved => ("solved", None),
        SolveStatus::NoSolution => ("no_solution", None),
        SolveStatus::BudgetExceeded(limit) => ("budget_exceeded", Some(limit.to_string())),
    };
    SolveOutput {
        status,
        puzzle: instance.name(),
        certificate: result.certificate,
        reason,
        iterations: result.iterations,
        time_elapsed_ms: result.time_elapsed_ms,
    }
}
