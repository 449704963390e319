mod cmd;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "posture",
    about = "Compliance posture derivation — framework summaries, control readiness, badges",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive per-framework compliance summaries from a snapshot file
    Summarize {
        /// Snapshot file (.json, .yaml, or .yml)
        #[arg(long, env = "POSTURE_SNAPSHOT")]
        snapshot: PathBuf,

        /// Restrict to one framework instance id
        #[arg(long = "framework")]
        framework: Option<String>,

        /// Write the summaries to a JSON file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Classify control readiness for one framework instance
    Controls {
        /// Snapshot file (.json, .yaml, or .yml)
        #[arg(long, env = "POSTURE_SNAPSHOT")]
        snapshot: PathBuf,

        /// Framework instance id
        #[arg(long = "framework")]
        framework: String,
    },

    /// Classify a compliance score into its badge and inline color
    Badge {
        /// Score value (0-100)
        score: u32,
    },

    /// Normalize a storage reference (S3 URL or bare key) into an object key
    Key {
        /// Full S3 URL or bare object key
        input: String,
    },

    /// Run the HTTP API server
    Serve {
        /// Config file (YAML)
        #[arg(long, env = "POSTURE_CONFIG")]
        config: Option<PathBuf>,

        /// Port to listen on (overrides config; 0 = OS-assigned)
        #[arg(long)]
        port: Option<u16>,

        /// Snapshot file backing the GET endpoints (overrides config)
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Summarize {
            snapshot,
            framework,
            out,
        } => cmd::summarize::run(&snapshot, framework.as_deref(), out.as_deref(), cli.json),
        Commands::Controls {
            snapshot,
            framework,
        } => cmd::controls::run(&snapshot, &framework, cli.json),
        Commands::Badge { score } => cmd::badge::run(score, cli.json),
        Commands::Key { input } => cmd::key::run(&input, cli.json),
        Commands::Serve {
            config,
            port,
            snapshot,
        } => cmd::serve::run(config.as_deref(), port, snapshot),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
