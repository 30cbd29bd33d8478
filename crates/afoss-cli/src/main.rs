//! # afoss CLI entry point
//!
//! Parses command-line arguments, sets up tracing, resolves the repository
//! root and layout, and dispatches to the subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use afoss_cli::build::{run_build, BuildArgs};
use afoss_cli::check::{run_check, CheckArgs};
use afoss_cli::report::Console;
use afoss_cli::{resolve_path, resolve_repo_root};
use afoss_core::CatalogConfig;

/// awesome-foss catalog builder.
///
/// Validates every projects/<slug>/project.json, aggregates them into
/// dev/generated/projects.json, and regenerates the README project list.
#[derive(Parser, Debug)]
#[command(name = "afoss", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a layout configuration file (default: afoss.yaml at the root, if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Repository root (default: nearest ancestor holding projects/ and dev/).
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate projects, write the catalog and update the README (default).
    Build(BuildArgs),

    /// Validate projects and verify generated files are current, without writing.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let repo_root = match cli.root {
        Some(root) => root,
        None => resolve_repo_root(&cwd).unwrap_or_else(|| {
            tracing::warn!("Could not locate repository root; using current directory");
            cwd.clone()
        }),
    };
    tracing::debug!(repo_root = %repo_root.display(), "resolved repository root");

    let config_path = cli.config.as_ref().map(|p| resolve_path(p, &repo_root));
    let config = CatalogConfig::discover(&repo_root, config_path.as_deref())?;
    let layout = config.layout(&repo_root);

    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();
    let mut console = Console::new(&mut out, &mut err);

    match cli.command {
        None => run_build(&BuildArgs::default(), &layout, &mut console),
        Some(Commands::Build(args)) => run_build(&args, &layout, &mut console),
        Some(Commands::Check(args)) => run_check(&args, &layout, &mut console),
    }
}
