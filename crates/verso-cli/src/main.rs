//! verso CLI - interactive navigation and search over hierarchical texts.
//!
//! Loads resource files (book/bible JSON, quote TSV) into a library and
//! runs a resolve-or-search loop over them. All reference semantics live
//! in verso-core; this binary is argument parsing, logging, and the loop.

use anyhow::{Result, bail};
use clap::Parser;
use tracing::{Level, warn};
use tracing_subscriber::FmtSubscriber;
use verso_core::{Library, loader};

mod cli;
mod config;
mod output;
mod repl;

use cli::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    let config = Config::load().unwrap_or_else(|err| {
        warn!("ignoring config: {err:#}");
        Config::default()
    });

    let library = load_library(&cli, &config);
    if library.is_empty() {
        bail!("no resources loaded; pass at least one book/bible JSON or quote TSV file");
    }

    let start = cli.resource.as_deref().or(config.default_resource.as_deref());
    match &cli.query {
        Some(input) => repl::run_once(&library, start, input),
        None => repl::run(&library, start),
    }
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

// Files that fail to load are skipped with a warning so one bad resource
// doesn't take down the rest, matching the library's isolation contract.
fn load_library(cli: &Cli, config: &Config) -> Library {
    let mut library = Library::new();
    for path in config.resources.iter().chain(&cli.files) {
        match loader::load_path(path) {
            Ok(corpus) => {
                library.add(corpus.title().to_string(), corpus);
            },
            Err(err) => warn!("could not load {}: {err}", path.display()),
        }
    }
    library
}
