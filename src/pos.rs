//! Part-of-speech categories of the native dictionary format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LexnetError, Result};

/// A part-of-speech category. Each one has its own `index.*` and `data.*` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    #[serde(alias = "adj")]
    Adjective,
    #[serde(alias = "adv")]
    Adverb,
}

impl PartOfSpeech {
    /// All categories, in the order their files are read.
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Suffix used in the `index.<suffix>` / `data.<suffix>` file names.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }

    /// Single-character tag used in composite synset ids.
    pub fn short(&self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::Adverb => 'r',
        }
    }

    /// Name of the index file for this category.
    pub fn index_file_name(&self) -> String {
        format!("index.{}", self.file_suffix())
    }

    /// Name of the data file for this category.
    pub fn data_file_name(&self) -> String {
        format!("data.{}", self.file_suffix())
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_suffix())
    }
}

impl FromStr for PartOfSpeech {
    type Err = LexnetError;

    /// Accepts the short tag (`n`), the file suffix (`noun`) or the full name.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "n" | "noun" => Ok(PartOfSpeech::Noun),
            "v" | "verb" => Ok(PartOfSpeech::Verb),
            "a" | "s" | "adj" | "adjective" => Ok(PartOfSpeech::Adjective),
            "r" | "adv" | "adverb" => Ok(PartOfSpeech::Adverb),
            other => Err(LexnetError::invalid_argument(format!(
                "unknown part of speech '{other}'"
            ))),
        }
    }
}

/// Build the composite `<offset>-<pos>` synset id.
pub fn synset_id(offset: &str, pos: &str) -> String {
    format!("{offset}-{pos}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(PartOfSpeech::Noun.index_file_name(), "index.noun");
        assert_eq!(PartOfSpeech::Adjective.data_file_name(), "data.adj");
        assert_eq!(PartOfSpeech::Adverb.short(), 'r');
    }

    #[test]
    fn test_from_str() {
        assert_eq!("n".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Noun);
        assert_eq!("adv".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Adverb);
        assert_eq!("s".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Adjective);

        let err = "x".parse::<PartOfSpeech>().unwrap_err();
        assert!(matches!(err, LexnetError::InvalidArgument(_)));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&PartOfSpeech::Adjective).unwrap();
        assert_eq!(json, "\"adjective\"");
        let pos: PartOfSpeech = serde_json::from_str("\"adv\"").unwrap();
        assert_eq!(pos, PartOfSpeech::Adverb);
    }

    #[test]
    fn test_synset_id() {
        assert_eq!(synset_id("00015388", "n"), "00015388-n");
    }
}
