//! Weekly Snippet - Main Entry Point
//!
//! Regenerates the snippet report from the note tree and commits it.
//! The actual implementation is in the `weekly_snippet` library.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use weekly_snippet::{Config, GitOps, preview, refresh};

/// Weekly Snippet - tally words and TODO debt across weekly notes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Root directory holding the month directories
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Report file (relative to the root unless absolute)
    #[arg(long)]
    report: Option<PathBuf>,

    /// Config file (defaults to <root>/.weekly-snippet.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip staging, committing and pushing
    #[arg(long)]
    no_git: bool,

    /// Print the report instead of writing it; implies --no-git
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "weekly_snippet=debug,info"
    } else {
        "weekly_snippet=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = Config::discover(&args.root, args.config.as_deref())?;
    if let Some(report) = args.report {
        config.report = report;
    }
    if args.no_git {
        config.git = false;
    }

    if args.dry_run {
        print!("{}", preview(&args.root, &config)?);
        return Ok(());
    }

    let git_ops = GitOps::new(&args.root);
    if config.git && !git_ops.is_git_managed() {
        info!(root = %args.root.display(), "not inside a git repository, skipping version control");
        config.git = false;
    }
    refresh(&args.root, &config, &git_ops)?;
    Ok(())
}
