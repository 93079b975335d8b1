//! Synset collectors: the seam between the graph and a storage format.
//!
//! A [`SynsetCollector`] hands the graph raw synset ids, lemma sets and
//! relation id sets. [`crate::WordNet`] builds its synsets from
//! [`SynsetCollector::all_ids`] and asks the collector again, one synset at a
//! time, when a lemma set or relation list is first needed.

pub mod dictionary;
pub mod table;

use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::error::Result;

pub use dictionary::DictionaryCollector;
pub use table::TableCollector;

/// Trait for format-specific synset sources.
///
/// Every method taking an id fails with
/// [`LexnetError::UnknownId`](crate::error::LexnetError::UnknownId) when the
/// id was not produced by `all_ids`.
pub trait SynsetCollector: Send + Sync + Debug {
    /// Enumerate every synset id the source defines.
    ///
    /// Called exactly once, when the graph is built. The returned order is
    /// the graph's iteration order.
    fn all_ids(&self) -> Result<Vec<String>>;

    /// Get the distinct lemmas of a synset.
    fn lemmas(&self, id: &str) -> Result<BTreeSet<String>>;

    /// Get the ids of the synsets one level broader than `id`.
    fn hypernym_ids(&self, id: &str) -> Result<BTreeSet<String>>;

    /// Get the ids of the synsets one level narrower than `id`.
    fn hyponym_ids(&self, id: &str) -> Result<BTreeSet<String>>;

    /// Get the definition text of a synset, if the source has one.
    fn gloss(&self, _id: &str) -> Result<Option<String>> {
        Ok(None)
    }

    /// Short name of the backend, used in log output.
    fn name(&self) -> &str;
}
