//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexnetArgs, OutputFormat};
use crate::error::Result;
use crate::search::MatchKind;
use crate::synset::Synset;

/// A synset id with its lemmas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynsetSummary {
    pub id: String,
    pub lemmas: Vec<String>,
}

impl SynsetSummary {
    pub fn from_synset(synset: &Synset<'_>) -> Result<Self> {
        Ok(SynsetSummary {
            id: synset.id().to_string(),
            lemmas: synset.lemmas()?.iter().cloned().collect(),
        })
    }
}

/// Result structure for the lookup command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SynsetDetails {
    pub id: String,
    pub lemmas: Vec<String>,
    pub gloss: Option<String>,
    pub hypernyms: Vec<SynsetSummary>,
    pub hyponyms: Vec<SynsetSummary>,
}

impl SynsetDetails {
    pub fn from_synset(synset: &Synset<'_>) -> Result<Self> {
        Ok(SynsetDetails {
            id: synset.id().to_string(),
            lemmas: synset.lemmas()?.iter().cloned().collect(),
            gloss: synset.gloss()?.map(str::to_string),
            hypernyms: summarize(&synset.hypernyms()?)?,
            hyponyms: summarize(&synset.hyponyms()?)?,
        })
    }
}

/// Summarize a list of synsets.
pub fn summarize(synsets: &[Synset<'_>]) -> Result<Vec<SynsetSummary>> {
    synsets.iter().map(SynsetSummary::from_synset).collect()
}

/// Result structure for the search commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub mode: MatchKind,
    pub total_hits: usize,
    pub synsets: Vec<SynsetSummary>,
    pub duration_ms: u64,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl HumanOutput for SynsetSummary {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}  {}", self.id, self.lemmas.join(", "))
    }
}

impl HumanOutput for SynsetDetails {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Synset {}", self.id)?;
        writeln!(out, "  lemmas: {}", self.lemmas.join(", "))?;
        if let Some(gloss) = &self.gloss {
            writeln!(out, "  gloss:  {gloss}")?;
        }
        for (label, related) in [("hypernyms", &self.hypernyms), ("hyponyms", &self.hyponyms)] {
            if related.is_empty() {
                continue;
            }
            writeln!(out, "  {label}:")?;
            for summary in related {
                write!(out, "    ")?;
                summary.write_human(out)?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for SearchResults {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.synsets.is_empty() {
            return writeln!(out, "No synsets match '{}'", self.query);
        }
        for summary in &self.synsets {
            summary.write_human(out)?;
        }
        Ok(())
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &LexnetArgs,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, message, result, args)
}

/// Write a result to `out`.
pub fn write_result<T: Serialize + HumanOutput>(
    out: &mut dyn Write,
    message: &str,
    result: &T,
    args: &LexnetArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out)?;
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn details() -> SynsetDetails {
        SynsetDetails {
            id: "02068974-n".to_string(),
            lemmas: vec!["dolphin".to_string()],
            gloss: Some("small toothed whale".to_string()),
            hypernyms: vec![SynsetSummary {
                id: "01466257-n".to_string(),
                lemmas: vec!["chordate".to_string()],
            }],
            hyponyms: Vec::new(),
        }
    }

    fn render(args: &[&str], result: &SynsetDetails) -> String {
        let args = LexnetArgs::try_parse_from(args).unwrap();
        let mut buffer = Vec::new();
        write_result(&mut buffer, "Lookup", result, &args).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_human_output() {
        let text = render(&["lexnet", "lookup", "x"], &details());
        assert!(text.starts_with("Synset 02068974-n\n"));
        assert!(text.contains("  gloss:  small toothed whale\n"));
        assert!(text.contains("    01466257-n  chordate\n"));
        assert!(!text.contains("hyponyms"));
    }

    #[test]
    fn test_json_output() {
        let text = render(&["lexnet", "-f", "json", "lookup", "x"], &details());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["id"], "02068974-n");
        assert_eq!(value["hypernyms"][0]["lemmas"][0], "chordate");
        assert!(value["hyponyms"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_empty_search_results() {
        let results = SearchResults {
            query: "zzzznotaword".to_string(),
            mode: MatchKind::Exact,
            total_hits: 0,
            synsets: Vec::new(),
            duration_ms: 0,
        };
        let mut buffer = Vec::new();
        results.write_human(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "No synsets match 'zzzznotaword'\n");
    }
}
