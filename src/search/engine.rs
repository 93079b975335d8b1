//! Cached search over a [`WordNet`] graph.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ahash::AHashMap;
use log::debug;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::search::matcher::MatchKind;
use crate::synset::Synset;
use crate::wordnet::WordNet;

type CacheKey = (MatchKind, String);
type CacheMap<T> = RwLock<AHashMap<CacheKey, Arc<OnceCell<T>>>>;

/// Search results memoized per query, owned by the graph.
///
/// Each query gets its own single-assignment cell, so concurrent callers of
/// the same query wait for one scan instead of racing.
#[derive(Debug, Default)]
pub struct SearchCache {
    config: SearchConfig,
    all: CacheMap<Vec<usize>>,
    first: CacheMap<Option<usize>>,
    scans: AtomicUsize,
}

impl SearchCache {
    pub fn new(config: SearchConfig) -> Self {
        SearchCache {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of graph scans performed so far.
    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::Relaxed)
    }

    /// Number of memoized queries, `search` and `search_one` together.
    pub fn len(&self) -> usize {
        self.all.read().len() + self.first.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cell<T>(map: &CacheMap<T>, key: &CacheKey) -> Arc<OnceCell<T>> {
        if let Some(cell) = map.read().get(key) {
            return Arc::clone(cell);
        }
        let mut map = map.write();
        Arc::clone(map.entry(key.clone()).or_default())
    }

    fn record_scan(&self) {
        self.scans.fetch_add(1, Ordering::Relaxed);
    }
}

/// Searches the synsets of a graph by lemma.
///
/// `search` and `search_one` choose the matcher from the query: wildcard
/// when it contains `*`, exact otherwise. The `*_with` variants take the
/// match kind explicitly.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'wn> {
    wordnet: &'wn WordNet,
    cache: &'wn SearchCache,
}

impl<'wn> SearchEngine<'wn> {
    pub(crate) fn new(wordnet: &'wn WordNet, cache: &'wn SearchCache) -> Self {
        SearchEngine { wordnet, cache }
    }

    /// Every synset with a lemma matching `query`, in iteration order.
    pub fn search(&self, query: &str) -> Result<Vec<Synset<'wn>>> {
        self.search_with(MatchKind::dispatch(query), query)
    }

    /// The first synset with a lemma matching `query`.
    pub fn search_one(&self, query: &str) -> Result<Option<Synset<'wn>>> {
        self.search_one_with(MatchKind::dispatch(query), query)
    }

    /// Like [`SearchEngine::search`] with an explicit match kind.
    pub fn search_with(&self, kind: MatchKind, pattern: &str) -> Result<Vec<Synset<'wn>>> {
        if !self.cache.config.cache_results {
            let indices = self.scan_all(kind, pattern)?;
            return Ok(self.wordnet.synsets_at(&indices));
        }

        let cell = SearchCache::cell(&self.cache.all, &(kind, pattern.to_string()));
        if cell.get().is_some() {
            debug!("Search cache hit for {kind:?} '{pattern}'");
        }
        let indices = cell.get_or_try_init(|| self.scan_all(kind, pattern))?;
        Ok(self.wordnet.synsets_at(indices))
    }

    /// Like [`SearchEngine::search_one`] with an explicit match kind.
    pub fn search_one_with(&self, kind: MatchKind, pattern: &str) -> Result<Option<Synset<'wn>>> {
        if !self.cache.config.cache_results {
            let index = self.scan_first(kind, pattern)?;
            return Ok(index.map(|index| Synset::new(self.wordnet, index)));
        }

        let cell = SearchCache::cell(&self.cache.first, &(kind, pattern.to_string()));
        if cell.get().is_some() {
            debug!("Search-one cache hit for {kind:?} '{pattern}'");
        }
        let index = cell.get_or_try_init(|| self.scan_first(kind, pattern))?;
        Ok(index.map(|index| Synset::new(self.wordnet, index)))
    }

    /// Number of graph scans performed by engines sharing this cache.
    pub fn scan_count(&self) -> usize {
        self.cache.scan_count()
    }

    fn scan_all(&self, kind: MatchKind, pattern: &str) -> Result<Vec<usize>> {
        let matcher = kind.compile(pattern)?;
        debug!("Scanning {} synsets for {kind:?} '{pattern}'", self.wordnet.len());
        self.cache.record_scan();
        let hits = matcher.filter(self.wordnet)?;
        Ok(hits.iter().map(Synset::index).collect())
    }

    fn scan_first(&self, kind: MatchKind, pattern: &str) -> Result<Option<usize>> {
        let matcher = kind.compile(pattern)?;
        debug!("Scanning for first {kind:?} match of '{pattern}'");
        self.cache.record_scan();
        Ok(matcher.find_first(self.wordnet)?.map(|synset| synset.index()))
    }
}
