//! Synsets and their lazily resolved lemmas and relations.
//!
//! The graph stores one [`SynsetEntry`] per id in an arena. Callers see a
//! [`Synset`], a copyable handle made of the graph reference and the arena
//! index. Relations are cached as arena indices, so no synset owns another.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::sync::OnceCell;

use crate::error::Result;
use crate::wordnet::WordNet;

/// Arena storage for one synset.
///
/// Each cache moves from unresolved to resolved exactly once. A failed
/// resolution leaves the cell unresolved.
#[derive(Debug)]
pub(crate) struct SynsetEntry {
    pub(crate) id: String,
    pub(crate) lemmas: OnceCell<BTreeSet<String>>,
    pub(crate) hypernyms: OnceCell<Vec<usize>>,
    pub(crate) hyponyms: OnceCell<Vec<usize>>,
    pub(crate) gloss: OnceCell<Option<String>>,
}

impl SynsetEntry {
    pub(crate) fn new(id: String) -> Self {
        SynsetEntry {
            id,
            lemmas: OnceCell::new(),
            hypernyms: OnceCell::new(),
            hyponyms: OnceCell::new(),
            gloss: OnceCell::new(),
        }
    }
}

/// A synset of a [`WordNet`] graph.
///
/// Two synsets are equal when their ids are equal; cached state plays no
/// part in comparison.
#[derive(Clone, Copy)]
pub struct Synset<'wn> {
    wordnet: &'wn WordNet,
    index: usize,
}

impl<'wn> Synset<'wn> {
    pub(crate) fn new(wordnet: &'wn WordNet, index: usize) -> Self {
        Synset { wordnet, index }
    }

    fn entry(&self) -> &'wn SynsetEntry {
        self.wordnet.entry(self.index)
    }

    /// The synset id.
    pub fn id(&self) -> &'wn str {
        &self.entry().id
    }

    /// Position of this synset in the graph's iteration order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The graph owning this synset.
    pub fn wordnet(&self) -> &'wn WordNet {
        self.wordnet
    }

    /// The lemmas of this synset.
    ///
    /// The first call asks the collector; later calls return the cached set.
    pub fn lemmas(&self) -> Result<&'wn BTreeSet<String>> {
        let entry = self.entry();
        entry
            .lemmas
            .get_or_try_init(|| self.wordnet.retrieve_lemmas(&entry.id))
    }

    /// The synsets one level broader than this one, ordered by id.
    pub fn hypernyms(&self) -> Result<Vec<Synset<'wn>>> {
        let entry = self.entry();
        let indices = entry
            .hypernyms
            .get_or_try_init(|| self.wordnet.retrieve_hypernyms(&entry.id))?;
        Ok(self.wordnet.synsets_at(indices))
    }

    /// The synsets one level narrower than this one, ordered by id.
    pub fn hyponyms(&self) -> Result<Vec<Synset<'wn>>> {
        let entry = self.entry();
        let indices = entry
            .hyponyms
            .get_or_try_init(|| self.wordnet.retrieve_hyponyms(&entry.id))?;
        Ok(self.wordnet.synsets_at(indices))
    }

    /// The definition text, when the collector provides one.
    pub fn gloss(&self) -> Result<Option<&'wn str>> {
        let entry = self.entry();
        let gloss = entry
            .gloss
            .get_or_try_init(|| self.wordnet.retrieve_gloss(&entry.id))?;
        Ok(gloss.as_deref())
    }

    /// Whether the lemma set has been resolved.
    ///
    /// Relations and gloss have their own caches and are not reported here.
    pub fn lemmas_resolved(&self) -> bool {
        self.entry().lemmas.get().is_some()
    }
}

impl PartialEq for Synset<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Synset<'_> {}

impl Hash for Synset<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for Synset<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Synset").field(&self.id()).finish()
    }
}

impl fmt::Display for Synset<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Synset {}", self.id())
    }
}
