//! geoquiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "geoquiz",
    version,
    about = "Location-triggered trivia quiz"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the device is, overriding the `[location]` config section.
#[derive(Args, Debug, Clone, Default)]
pub struct LocationArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Behave as if location permission was refused
    #[arg(long)]
    pub deny_location: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the current country and take its quiz
    Play {
        #[command(flatten)]
        location: LocationArgs,

        /// Answers separated by ';' (read from stdin when omitted)
        #[arg(long)]
        answers: Option<String>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Write the session report as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Catalog TOML file (defaults to the builtin catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Resolve coordinates to a country without starting a quiz
    Resolve {
        #[command(flatten)]
        location: LocationArgs,

        /// Catalog TOML file (defaults to the builtin catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List countries that have questions
    Countries {
        /// Catalog TOML file (defaults to the builtin catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Validate a catalog TOML file
    Validate {
        /// Path to the catalog file
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Create starter config and example catalog
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("geoquiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            location,
            answers,
            format,
            output,
            catalog,
            config,
        } => commands::play::execute(location, answers, format, output, catalog, config).await,
        Commands::Resolve {
            location,
            catalog,
            config,
        } => commands::resolve::execute(location, catalog, config).await,
        Commands::Countries { catalog } => commands::countries::execute(catalog),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
