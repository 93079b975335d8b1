//! # lexnet
//!
//! A lexical graph engine for WordNet-style dictionaries.
//!
//! ## Features
//!
//! - Synsets with lazily resolved lemmas, glosses and hypernym/hyponym links
//! - Pluggable collectors: native WordNet dictionary files or in-memory tables
//! - Exact, substring and wildcard lemma search with per-query caching
//!
//! ```no_run
//! use lexnet::WordNet;
//!
//! let wn = WordNet::from_dir("/opt/WNdb-3.0/dict")?;
//! for synset in wn.search("dolphin")? {
//!     for hypernym in synset.hypernyms()? {
//!         println!("{} is a kind of {}", synset, hypernym);
//!     }
//! }
//! # Ok::<(), lexnet::LexnetError>(())
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod pos;
pub mod search;
pub mod synset;
pub mod wordnet;

pub use collector::{DictionaryCollector, SynsetCollector, TableCollector};
pub use config::{DictionaryConfig, SearchConfig};
pub use error::{LexnetError, Result};
pub use pos::PartOfSpeech;
pub use search::{MatchKind, Matcher, SearchEngine};
pub use synset::Synset;
pub use wordnet::WordNet;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
