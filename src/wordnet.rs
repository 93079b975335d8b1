//! The lexical graph.
//!
//! [`WordNet`] owns every synset of a collector. It is built in one pass over
//! [`SynsetCollector::all_ids`]; afterwards the set of ids never changes and
//! only the per-synset caches fill in.

use std::collections::BTreeSet;
use std::fmt;
use std::iter::FusedIterator;

use ahash::AHashMap;
use log::{debug, info};

use crate::collector::{DictionaryCollector, SynsetCollector};
use crate::config::{DictionaryConfig, SearchConfig};
use crate::error::{LexnetError, Result};
use crate::search::{MatchKind, SearchCache, SearchEngine};
use crate::synset::{Synset, SynsetEntry};

/// A graph of synsets backed by a [`SynsetCollector`].
///
/// # Example
///
/// ```no_run
/// use lexnet::WordNet;
///
/// let wn = WordNet::from_dir("/opt/WNdb-3.0/dict").unwrap();
/// if let Some(synset) = wn.lookup("02068974-n") {
///     println!("{}: {:?}", synset, synset.lemmas().unwrap());
///     for parent in synset.hypernyms().unwrap() {
///         println!("  is a {}", parent);
///     }
/// }
///
/// for synset in wn.search("dolph*").unwrap() {
///     println!("{}", synset);
/// }
/// ```
pub struct WordNet {
    collector: Box<dyn SynsetCollector>,
    /// Arena of synsets in construction order.
    entries: Vec<SynsetEntry>,
    /// Id to arena index.
    positions: AHashMap<String, usize>,
    search_cache: SearchCache,
}

impl WordNet {
    /// Build the graph from a collector.
    pub fn new<C: SynsetCollector + 'static>(collector: C) -> Result<Self> {
        Self::with_search_config(Box::new(collector), SearchConfig::default())
    }

    /// Build the graph from a boxed collector with a custom search configuration.
    pub fn with_search_config(
        collector: Box<dyn SynsetCollector>,
        search_config: SearchConfig,
    ) -> Result<Self> {
        let ids = collector.all_ids()?;
        let mut entries = Vec::with_capacity(ids.len());
        let mut positions = AHashMap::with_capacity(ids.len());

        for id in ids {
            if positions.contains_key(&id) {
                debug!("Ignoring duplicate synset id {id} from {}", collector.name());
                continue;
            }
            positions.insert(id.clone(), entries.len());
            entries.push(SynsetEntry::new(id));
        }

        info!(
            "Built lexical graph with {} synsets from {} collector",
            entries.len(),
            collector.name()
        );

        Ok(WordNet {
            collector,
            entries,
            positions,
            search_cache: SearchCache::new(search_config),
        })
    }

    /// Parse a native dictionary and build the graph from it.
    pub fn open(config: &DictionaryConfig) -> Result<Self> {
        Self::new(DictionaryCollector::open(config)?)
    }

    /// Parse every part of speech from a dictionary directory.
    pub fn from_dir<P: AsRef<std::path::Path>>(dict_dir: P) -> Result<Self> {
        Self::new(DictionaryCollector::from_dir(dict_dir)?)
    }

    /// Look up a synset by id. Unknown ids give `None`.
    pub fn lookup(&self, id: &str) -> Option<Synset<'_>> {
        self.positions
            .get(id)
            .map(|&index| Synset::new(self, index))
    }

    /// Whether the graph has a synset with this id.
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Iterate over all synsets in construction order.
    pub fn iter(&self) -> Synsets<'_> {
        Synsets {
            wordnet: self,
            front: 0,
            back: self.entries.len(),
        }
    }

    /// Number of synsets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The collector backing this graph.
    pub fn collector(&self) -> &dyn SynsetCollector {
        self.collector.as_ref()
    }

    /// Map raw ids to synsets.
    ///
    /// Fails with [`LexnetError::UnknownId`] on the first id the graph does
    /// not hold.
    pub fn resolve_relation_ids<I, S>(&self, ids: I) -> Result<Vec<Synset<'_>>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let indices = self.resolve_indices(ids)?;
        Ok(self.synsets_at(&indices))
    }

    /// A search engine over this graph, sharing the graph's result cache.
    pub fn searcher(&self) -> SearchEngine<'_> {
        SearchEngine::new(self, &self.search_cache)
    }

    /// Search with wildcard matching if `query` contains `*`, exact otherwise.
    pub fn search(&self, query: &str) -> Result<Vec<Synset<'_>>> {
        self.searcher().search(query)
    }

    /// First synset matching `query`, dispatched like [`WordNet::search`].
    pub fn search_one(&self, query: &str) -> Result<Option<Synset<'_>>> {
        self.searcher().search_one(query)
    }

    /// Search with an explicit match kind.
    pub fn search_with(&self, kind: MatchKind, pattern: &str) -> Result<Vec<Synset<'_>>> {
        self.searcher().search_with(kind, pattern)
    }

    pub(crate) fn entry(&self, index: usize) -> &SynsetEntry {
        &self.entries[index]
    }

    pub(crate) fn synsets_at(&self, indices: &[usize]) -> Vec<Synset<'_>> {
        indices
            .iter()
            .map(|&index| Synset::new(self, index))
            .collect()
    }

    fn resolve_indices<I, S>(&self, ids: I) -> Result<Vec<usize>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .map(|id| {
                let id = id.as_ref();
                self.positions
                    .get(id)
                    .copied()
                    .ok_or_else(|| LexnetError::unknown_id(id))
            })
            .collect()
    }

    pub(crate) fn retrieve_lemmas(&self, id: &str) -> Result<BTreeSet<String>> {
        self.collector.lemmas(id)
    }

    pub(crate) fn retrieve_hypernyms(&self, id: &str) -> Result<Vec<usize>> {
        let ids = self.collector.hypernym_ids(id)?;
        self.resolve_indices(ids)
    }

    pub(crate) fn retrieve_hyponyms(&self, id: &str) -> Result<Vec<usize>> {
        let ids = self.collector.hyponym_ids(id)?;
        self.resolve_indices(ids)
    }

    pub(crate) fn retrieve_gloss(&self, id: &str) -> Result<Option<String>> {
        self.collector.gloss(id)
    }
}

impl fmt::Debug for WordNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordNet")
            .field("collector", &self.collector)
            .field("synsets", &self.entries.len())
            .finish()
    }
}

impl<'wn> IntoIterator for &'wn WordNet {
    type Item = Synset<'wn>;
    type IntoIter = Synsets<'wn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the synsets of a [`WordNet`], in construction order.
///
/// Restart by calling [`WordNet::iter`] again.
#[derive(Clone)]
pub struct Synsets<'wn> {
    wordnet: &'wn WordNet,
    front: usize,
    back: usize,
}

impl<'wn> Iterator for Synsets<'wn> {
    type Item = Synset<'wn>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let synset = Synset::new(self.wordnet, self.front);
        self.front += 1;
        Some(synset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Synsets<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(Synset::new(self.wordnet, self.back))
    }
}

impl ExactSizeIterator for Synsets<'_> {}

impl FusedIterator for Synsets<'_> {}
