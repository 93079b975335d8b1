//! Command implementations for the lexnet CLI.

use std::time::Instant;

use anyhow::{Context, bail};
use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::DictionaryConfig;
use crate::error::{LexnetError, Result};
use crate::wordnet::WordNet;

/// Execute a CLI command.
pub fn execute_command(args: LexnetArgs) -> anyhow::Result<()> {
    let config = dictionary_config(&args)?;
    let wordnet = WordNet::open(&config).with_context(|| {
        format!(
            "failed to load dictionary from {}",
            config.dict_dir.display()
        )
    })?;

    match &args.command {
        Command::Lookup(lookup_args) => {
            let details = lookup(&wordnet, lookup_args)?;
            output_result("Synset", &details, &args)?;
        }
        Command::Search(search_args) => {
            let results = search(&wordnet, search_args)?;
            output_result("Search results", &results, &args)?;
        }
        Command::SearchOne(search_args) => {
            let results = search_one(&wordnet, search_args)?;
            output_result("First match", &results, &args)?;
        }
    }
    Ok(())
}

/// Resolve the dictionary configuration from `--config` or `--dict`.
pub fn dictionary_config(args: &LexnetArgs) -> anyhow::Result<DictionaryConfig> {
    let config = match (&args.config, &args.dict) {
        (Some(path), _) => DictionaryConfig::from_json_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        (None, Some(dir)) => DictionaryConfig::new(dir),
        (None, None) => {
            bail!("no dictionary given; pass --dict <DIR>, --config <FILE> or set LEXNET_DICT")
        }
    };
    config.validate()?;
    Ok(config)
}

/// Show one synset.
pub fn lookup(wordnet: &WordNet, args: &LookupArgs) -> Result<SynsetDetails> {
    let synset = wordnet
        .lookup(&args.id)
        .ok_or_else(|| LexnetError::unknown_id(&args.id))?;
    SynsetDetails::from_synset(&synset)
}

/// List every matching synset.
pub fn search(wordnet: &WordNet, args: &SearchArgs) -> Result<SearchResults> {
    let start_time = Instant::now();
    let kind = args.mode.match_kind(&args.query);

    let hits = wordnet.search_with(kind, &args.query)?;
    let total_hits = hits.len();
    let shown = args.limit.unwrap_or(total_hits).min(total_hits);
    let synsets = summarize(&hits[..shown])?;

    let duration = start_time.elapsed();
    info!("Found {total_hits} synsets for '{}' in {duration:?}", args.query);

    Ok(SearchResults {
        query: args.query.clone(),
        mode: kind,
        total_hits,
        synsets,
        duration_ms: duration.as_millis() as u64,
    })
}

/// Show the first matching synset.
pub fn search_one(wordnet: &WordNet, args: &SearchArgs) -> Result<SearchResults> {
    let start_time = Instant::now();
    let kind = args.mode.match_kind(&args.query);

    let hit = wordnet.searcher().search_one_with(kind, &args.query)?;
    let synsets = match hit {
        Some(synset) => vec![SynsetSummary::from_synset(&synset)?],
        None => Vec::new(),
    };

    Ok(SearchResults {
        query: args.query.clone(),
        mode: kind,
        total_hits: synsets.len(),
        synsets,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::TableCollector;
    use crate::search::MatchKind;
    use clap::Parser;

    fn wordnet() -> WordNet {
        let collector = TableCollector::from_rows(
            vec![
                ("02068974-n", "dolphin"),
                ("02581957-n", "dolphinfish"),
                ("02581957-n", "dolphin"),
                ("01466257-n", "chordate"),
            ],
            vec![
                ("02068974-n", "01466257-n", "hype"),
                ("02581957-n", "01466257-n", "hype"),
                ("01466257-n", "02068974-n", "hypo"),
                ("01466257-n", "02581957-n", "hypo"),
            ],
        );
        WordNet::new(collector).unwrap()
    }

    fn search_args(query: &str, mode: SearchMode, limit: Option<usize>) -> SearchArgs {
        SearchArgs {
            query: query.to_string(),
            mode,
            limit,
        }
    }

    #[test]
    fn test_lookup() {
        let wn = wordnet();
        let details = lookup(
            &wn,
            &LookupArgs {
                id: "01466257-n".to_string(),
            },
        )
        .unwrap();

        assert_eq!(details.lemmas, vec!["chordate"]);
        assert!(details.hypernyms.is_empty());
        let hyponyms: Vec<&str> = details.hyponyms.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(hyponyms, vec!["02068974-n", "02581957-n"]);
    }

    #[test]
    fn test_lookup_unknown_id() {
        let wn = wordnet();
        let err = lookup(
            &wn,
            &LookupArgs {
                id: "99999999-n".to_string(),
            },
        )
        .unwrap_err();
        assert!(err.is_unknown_id());
    }

    #[test]
    fn test_search_with_limit() {
        let wn = wordnet();
        let results = search(&wn, &search_args("dolph*", SearchMode::Auto, Some(1))).unwrap();

        assert_eq!(results.mode, MatchKind::Wildcard);
        assert_eq!(results.total_hits, 2);
        assert_eq!(results.synsets.len(), 1);
        assert_eq!(results.synsets[0].id, "02068974-n");
    }

    #[test]
    fn test_search_one() {
        let wn = wordnet();
        let results = search_one(&wn, &search_args("fish", SearchMode::Substring, None)).unwrap();
        assert_eq!(results.synsets[0].id, "02581957-n");

        let results = search_one(&wn, &search_args("zzzz", SearchMode::Auto, None)).unwrap();
        assert_eq!(results.total_hits, 0);
    }

    #[test]
    fn test_dictionary_config_requires_source() {
        // Built directly so LEXNET_DICT in the environment cannot fill `dict`.
        let mut args = LexnetArgs {
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
            pretty: false,
            dict: None,
            config: None,
            command: Command::Lookup(LookupArgs { id: "x".to_string() }),
        };
        let err = dictionary_config(&args).unwrap_err();
        assert!(err.to_string().contains("no dictionary given"));

        args.config = Some(std::path::PathBuf::from("/nonexistent/lexnet.json"));
        assert!(dictionary_config(&args).is_err());

        let args =
            LexnetArgs::try_parse_from(["lexnet", "--dict", "/opt/dict", "lookup", "x"]).unwrap();
        let config = dictionary_config(&args).unwrap();
        assert_eq!(config.dict_dir, std::path::PathBuf::from("/opt/dict"));
    }
}
