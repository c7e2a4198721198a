//! Pathograph CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "pathograph")]
#[command(about = "Build lazily expandable disease association graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Builder config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a graph and write it as node-link JSON
    Build {
        /// Root label, e.g. the shared exposure
        #[arg(short, long)]
        root: String,

        /// Association record files (row arrays or SPARQL results)
        #[arg(long, required = true, num_args = 1..)]
        records: Vec<PathBuf>,

        /// Disease lists to link to the root as a risk factor
        #[arg(long, num_args = 1..)]
        exposure: Vec<PathBuf>,

        /// Names of nodes to expand after building, in order
        #[arg(short, long)]
        expand: Vec<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print symptom and disease counts
    Stats {
        /// Association record files
        #[arg(long, required = true, num_args = 1..)]
        records: Vec<PathBuf>,

        /// Rows to print per table
        #[arg(long, default_value = "10")]
        top: usize,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "pathograph={0},pathograph_core={0},pathograph_source={0}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Build {
            root,
            records,
            exposure,
            expand,
            out,
        } => {
            let config = commands::load_config(cli.config.as_deref())?;
            commands::build(config, &root, &records, &exposure, &expand, out.as_deref())
        }
        Commands::Stats { records, top } => commands::stats(&records, top),
        Commands::Version => {
            println!("Pathograph v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
