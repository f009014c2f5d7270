//! Algorithm visualizer CLI.
//!
//! Provides the `algoviz` binary. `run` executes one algorithm and prints its
//! step trace as JSON; `list` prints every registered algorithm.
//!
//! Uses the same `AlgorithmService::execute()` path as the HTTP server
//! endpoint, so parameters are read identically from both entry points.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};

use algoviz_server::service::AlgorithmService;

/// Step-by-step algorithm traces from the terminal.
#[derive(Parser)]
#[command(name = "algoviz", about = "Step-by-step algorithm traces")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Run an algorithm and print its trace.
    Run {
        /// Algorithm key, e.g. `bubble_sort`.
        key: String,

        /// Parameters as a JSON object.
        #[arg(short, long, conflicts_with = "params_file")]
        params: Option<String>,

        /// Read the parameter object from a file.
        #[arg(long)]
        params_file: Option<PathBuf>,

        /// Pretty-print the output.
        #[arg(long)]
        pretty: bool,
    },
    /// List every registered algorithm.
    List,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Run {
            key,
            params,
            params_file,
            pretty,
        } => run_algorithm(&key, params, params_file, pretty),
        Commands::List => run_list(),
    };
    process::exit(exit_code);
}

/// Execute the run subcommand.
///
/// Returns exit code: 0 = success, 1 = unknown algorithm or bad parameters,
/// 3 = I/O error.
fn run_algorithm(
    key: &str,
    params: Option<String>,
    params_file: Option<PathBuf>,
    pretty: bool,
) -> i32 {
    let raw = match (params, params_file) {
        (Some(text), _) => text,
        (None, Some(path)) => match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error: failed to read '{}': {}", path.display(), e);
                return 3;
            }
        },
        (None, None) => "{}".to_string(),
    };

    let params: Map<String, Value> = match serde_json::from_str(&raw) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Error: parameters must be a JSON object: {}", e);
            return 1;
        }
    };

    let service = AlgorithmService::default();
    let steps = match service.execute(key, &params) {
        Ok(trace) => trace,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let output = json!({ "steps": steps });
    let rendered = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    };
    match rendered {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to serialize trace: {}", e);
            3
        }
    }
}

/// Execute the list subcommand.
fn run_list() -> i32 {
    let service = AlgorithmService::default();
    for algorithm in service.registry().iter() {
        println!("{:<22} {}", algorithm.key(), algorithm.category());
    }
    0
}
