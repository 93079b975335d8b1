//! Command line argument parsing for the lexnet CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::search::MatchKind;

/// lexnet - browse a WordNet-style lexical graph
#[derive(Parser, Debug, Clone)]
#[command(name = "lexnet")]
#[command(about = "Look up and search synsets of a WordNet-style dictionary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexnetArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Dictionary directory holding index.* and data.* files
    #[arg(short, long, value_name = "DIR", env = "LEXNET_DICT")]
    pub dict: Option<PathBuf>,

    /// Dictionary configuration file (JSON)
    #[arg(short, long, value_name = "FILE", conflicts_with = "dict")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexnetArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show one synset with its lemmas and relations
    Lookup(LookupArgs),

    /// List every synset with a matching lemma
    Search(SearchArgs),

    /// Show the first synset with a matching lemma
    #[command(name = "search-one")]
    SearchOne(SearchArgs),
}

/// Arguments for looking up a synset
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Synset id, e.g. 02068974-n
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Lemma or wildcard pattern
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Match mode
    #[arg(short = 'm', long, default_value = "auto")]
    pub mode: SearchMode,

    /// Maximum number of results to print
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Match modes available in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Wildcard if the query contains '*', exact otherwise
    Auto,
    /// Exact lemma match
    Exact,
    /// Lemma contains the query
    Substring,
    /// '*' matches any sequence of characters
    Wildcard,
}

impl SearchMode {
    /// The match kind to use for `query`.
    pub fn match_kind(self, query: &str) -> MatchKind {
        match self {
            SearchMode::Auto => MatchKind::dispatch(query),
            SearchMode::Exact => MatchKind::Exact,
            SearchMode::Substring => MatchKind::Substring,
            SearchMode::Wildcard => MatchKind::Wildcard,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
