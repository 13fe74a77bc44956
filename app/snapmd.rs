//! Command-line interface for snapmd.
//!
//! Snapshots a folder into `snapshots/<output>` as a single Markdown file.

use clap::Parser;
use snapmd::{SnapshotOptions, SnapshotRequest, create_snapshot};
use std::path::PathBuf;
use std::process::exit;
use tracing::error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

/// snapmd — snapshot a folder's tree and file contents into one Markdown file
#[derive(Parser)]
#[command(name = "snapmd", version, about, long_about = None)]
struct Cli {
    /// Folder to snapshot
    #[arg(default_value = "src")]
    folder: PathBuf,

    /// Output file name, written into snapshots/ (default: <folder>-snapshot.md)
    output: Option<PathBuf>,

    /// More log output (repeat for trace level)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the built-in configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Logs go to stderr. `SNAPMD_LOG` takes precedence over the verbosity flags.
fn init_logging(level: &str) {
    let filter =
        EnvFilter::try_from_env("SNAPMD_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(ChronoLocal::new("%H:%M:%S".to_string()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let options = SnapshotOptions::default();
    if cli.print_config {
        match serde_json::to_string_pretty(&options) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("JSON serialization error: {}", e);
                exit(1);
            }
        }
        return;
    }

    let mut request = SnapshotRequest::new(cli.folder).options(options);
    if let Some(output) = cli.output {
        request = request.output(output);
    }

    match create_snapshot(&request) {
        Ok(_) => {}
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    }
}
