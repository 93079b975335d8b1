//! Collector over relational rows.
//!
//! Relational WordNet packs (for example the Japanese WordNet SQLite
//! database) store senses as `(synset, lemma)` rows and relations as
//! `(synset1, synset2, link)` rows. Running the queries is the caller's
//! business; this collector only needs the rows.

use std::collections::BTreeSet;

use ahash::AHashMap;
use log::debug;

use crate::collector::SynsetCollector;
use crate::error::{LexnetError, Result};

/// Link kinds of the `synlink` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    /// `hype`: synset2 is broader than synset1.
    Hypernym,
    /// `hypo`: synset2 is narrower than synset1.
    Hyponym,
    /// Any other link, kept out of relation queries.
    Other(String),
}

impl LinkKind {
    pub fn from_code(code: &str) -> Self {
        match code {
            "hype" => LinkKind::Hypernym,
            "hypo" => LinkKind::Hyponym,
            other => LinkKind::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Default)]
struct TableEntry {
    lemmas: BTreeSet<String>,
    hypernyms: BTreeSet<String>,
    hyponyms: BTreeSet<String>,
}

/// A [`SynsetCollector`] built from sense and link rows.
///
/// Synsets are the distinct ids of the sense rows, in first-appearance
/// order. Link rows whose source synset has no sense are dropped.
#[derive(Debug, Default)]
pub struct TableCollector {
    ids: Vec<String>,
    synsets: AHashMap<String, TableEntry>,
    pending_links: Vec<(String, String, LinkKind)>,
}

impl TableCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collector from `(synset, lemma)` rows and
    /// `(synset1, synset2, link)` rows.
    pub fn from_rows<S, L, K>(senses: S, links: L) -> Self
    where
        S: IntoIterator<Item = (K, K)>,
        L: IntoIterator<Item = (K, K, K)>,
        K: AsRef<str>,
    {
        let mut collector = Self::new();
        for (synset, lemma) in senses {
            collector.add_sense(synset.as_ref(), lemma.as_ref());
        }
        for (from, to, link) in links {
            collector.add_link(from.as_ref(), to.as_ref(), link.as_ref());
        }
        collector.finish();
        collector
    }

    /// Add one `(synset, lemma)` row.
    pub fn add_sense(&mut self, synset: &str, lemma: &str) -> &mut Self {
        if !self.synsets.contains_key(synset) {
            self.ids.push(synset.to_string());
        }
        self.synsets
            .entry(synset.to_string())
            .or_default()
            .lemmas
            .insert(lemma.to_string());
        self
    }

    /// Add one `(synset1, synset2, link)` row.
    ///
    /// Links are attached when [`TableCollector::finish`] runs, so sense rows
    /// may arrive after the links that mention them.
    pub fn add_link(&mut self, from: &str, to: &str, link: &str) -> &mut Self {
        self.pending_links
            .push((from.to_string(), to.to_string(), LinkKind::from_code(link)));
        self
    }

    /// Attach pending links to their source synsets.
    pub fn finish(&mut self) -> &mut Self {
        let mut dropped = 0usize;
        for (from, to, kind) in self.pending_links.drain(..) {
            let Some(entry) = self.synsets.get_mut(&from) else {
                dropped += 1;
                continue;
            };
            match kind {
                LinkKind::Hypernym => {
                    entry.hypernyms.insert(to);
                }
                LinkKind::Hyponym => {
                    entry.hyponyms.insert(to);
                }
                LinkKind::Other(_) => {}
            }
        }
        if dropped > 0 {
            debug!("Dropped {dropped} links whose source synset has no senses");
        }
        self
    }

    fn entry(&self, id: &str) -> Result<&TableEntry> {
        self.synsets
            .get(id)
            .ok_or_else(|| LexnetError::unknown_id(id))
    }
}

impl SynsetCollector for TableCollector {
    fn all_ids(&self) -> Result<Vec<String>> {
        if !self.pending_links.is_empty() {
            return Err(LexnetError::other(
                "table collector has links that were never attached; call finish()",
            ));
        }
        Ok(self.ids.clone())
    }

    fn lemmas(&self, id: &str) -> Result<BTreeSet<String>> {
        Ok(self.entry(id)?.lemmas.clone())
    }

    fn hypernym_ids(&self, id: &str) -> Result<BTreeSet<String>> {
        Ok(self.entry(id)?.hypernyms.clone())
    }

    fn hyponym_ids(&self, id: &str) -> Result<BTreeSet<String>> {
        Ok(self.entry(id)?.hyponyms.clone())
    }

    fn name(&self) -> &str {
        "table"
    }
}
