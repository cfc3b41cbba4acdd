use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fontpack")]
#[command(about = "Install webfonts from a manifest and generate a stylesheet", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install all fonts and variants from a fonts.yaml manifest
    Install {
        /// Path to the manifest (defaults to fonts.yaml)
        manifest: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install { manifest } => {
            let path = manifest.unwrap_or_else(|| PathBuf::from("fonts.yaml"));
            fontpack::install::run_from_path(&path)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
