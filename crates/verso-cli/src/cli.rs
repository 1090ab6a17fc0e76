//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// Interactive navigation and search over hierarchical texts.
///
/// Loads the given resource files and drops into a read-eval loop:
/// anything that parses as a reference is displayed or becomes the search
/// scope, anything else is run as a search within the current scope.
#[derive(Parser, Debug, Clone)]
#[command(name = "verso", version)]
pub struct Cli {
    /// Resource files to load (book/bible JSON or quote TSV)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Resource to start with (defaults to the first loaded)
    #[arg(short, long)]
    pub resource: Option<String>,

    /// Evaluate a single input and exit instead of starting the REPL
    #[arg(short = 'e', long = "query", value_name = "INPUT")]
    pub query: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
