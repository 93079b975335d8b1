//! Configuration for dictionary loading and search.
//!
//! The library never resolves cache directories or reads environment
//! variables; callers hand the dictionary location in through
//! [`DictionaryConfig`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LexnetError, Result};
use crate::pos::PartOfSpeech;

/// Configuration for the native text-format dictionary.
///
/// # Example
///
/// ```no_run
/// use lexnet::config::DictionaryConfig;
/// use lexnet::pos::PartOfSpeech;
///
/// // All four parts of speech
/// let config = DictionaryConfig::new("/opt/WNdb-3.0/dict");
///
/// // Nouns only
/// let config = DictionaryConfig::builder("/opt/WNdb-3.0/dict")
///     .parts_of_speech(vec![PartOfSpeech::Noun])
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Directory holding the `index.*` and `data.*` files.
    pub dict_dir: PathBuf,
    /// Categories to load.
    #[serde(default = "default_parts_of_speech")]
    pub parts_of_speech: Vec<PartOfSpeech>,
}

fn default_parts_of_speech() -> Vec<PartOfSpeech> {
    PartOfSpeech::ALL.to_vec()
}

impl DictionaryConfig {
    /// Create a configuration that loads every part of speech from `dict_dir`.
    pub fn new<P: Into<PathBuf>>(dict_dir: P) -> Self {
        DictionaryConfig {
            dict_dir: dict_dir.into(),
            parts_of_speech: default_parts_of_speech(),
        }
    }

    /// Create a new builder for DictionaryConfig.
    pub fn builder<P: Into<PathBuf>>(dict_dir: P) -> DictionaryConfigBuilder {
        DictionaryConfigBuilder::new(dict_dir)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: DictionaryConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the collector cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.parts_of_speech.is_empty() {
            return Err(LexnetError::invalid_config(
                "at least one part of speech must be loaded",
            ));
        }
        if self.dict_dir.as_os_str().is_empty() {
            return Err(LexnetError::invalid_config("dictionary directory is empty"));
        }
        Ok(())
    }

    /// Path of the index file for `pos`.
    pub fn index_path(&self, pos: PartOfSpeech) -> PathBuf {
        self.dict_dir.join(pos.index_file_name())
    }

    /// Path of the data file for `pos`.
    pub fn data_path(&self, pos: PartOfSpeech) -> PathBuf {
        self.dict_dir.join(pos.data_file_name())
    }
}

/// Builder for DictionaryConfig.
pub struct DictionaryConfigBuilder {
    dict_dir: PathBuf,
    parts_of_speech: Option<Vec<PartOfSpeech>>,
}

impl DictionaryConfigBuilder {
    /// Create a new builder.
    pub fn new<P: Into<PathBuf>>(dict_dir: P) -> Self {
        Self {
            dict_dir: dict_dir.into(),
            parts_of_speech: None,
        }
    }

    /// Restrict loading to the given categories.
    pub fn parts_of_speech(mut self, parts_of_speech: Vec<PartOfSpeech>) -> Self {
        self.parts_of_speech = Some(parts_of_speech);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<DictionaryConfig> {
        let config = DictionaryConfig {
            dict_dir: self.dict_dir,
            parts_of_speech: self.parts_of_speech.unwrap_or_else(default_parts_of_speech),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration for [`crate::search::SearchEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Memoize results per query string.
    pub cache_results: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            cache_results: true,
        }
    }
}
