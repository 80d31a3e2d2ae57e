//! bibtxt CLI - Main entry point

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod inputs;
mod output;
mod report;

#[derive(Parser)]
#[command(name = "bibtxt")]
#[command(version)]
#[command(about = "Resolve \\cite markers in a plain-text manuscript against a BibTeX-style database", long_about = None)]
struct Cli {
    /// Only log warnings and errors
    #[arg(long, global = true)]
    quiet: bool,

    /// How to print errors and warnings
    #[arg(long, global = true, value_enum, default_value_t = DiagnosticFormat::Text)]
    diagnostics: DiagnosticFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiagnosticFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite citations and append the reference list
    Render {
        /// Manuscript (.txt)
        manuscript: PathBuf,

        /// Bibliography database (.bib)
        database: PathBuf,

        /// Write output to FILE (use '--output -' for stdout)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Heading of the reference list
        #[arg(short = 't', long)]
        title: Option<String>,

        /// YAML file with title and signature (defaults to ./bibtxt.yml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate the manuscript and database without writing anything
    Check {
        /// Manuscript (.txt)
        manuscript: PathBuf,

        /// Bibliography database (.bib)
        database: PathBuf,
    },

    /// List the entry types and their fields
    Types,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "bibtxt=warn" } else { "bibtxt=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Render {
            manuscript,
            database,
            output,
            title,
            config,
        } => commands::render::execute(commands::render::RenderArgs {
            manuscript,
            database,
            output,
            title,
            config,
            diagnostics: cli.diagnostics,
        }),
        Commands::Check {
            manuscript,
            database,
        } => commands::check::execute(commands::check::CheckArgs {
            manuscript,
            database,
            diagnostics: cli.diagnostics,
        }),
        Commands::Types => commands::types::execute(),
    }
}
