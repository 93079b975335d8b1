#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tempfile::{Builder, TempDir};

use lexnet::collector::{SynsetCollector, TableCollector};
use lexnet::error::Result;
use lexnet::wordnet::WordNet;

pub const LICENSE_HEADER: &str = "\
\x20 1 This software and database is being provided to you, the LICENSEE, by
  2 Princeton University under the following license.  By obtaining, using
";

pub const INDEX_NOUN: &str = "\
animal n 1 3 @ ~ + 1 1 00015388
animate_being n 1 2 @ ~ 1 0 00015388
being n 1 2 @ ~ 1 0 00004475
chordate n 1 2 @ ~ 1 0 01466257
dolphin n 2 3 @ ~ ~i 2 0 02068974 02581957
dolphinfish n 1 2 @ ~ 1 0 02581957
flipper n 1 1 @i 1 0 09000001
mahimahi n 1 1 @ 1 0 02581957
organism n 1 1 ~ 1 1 00004475
";

pub const DATA_NOUN: &str = "\
00004475 03 n 02 organism 0 being 0 001 ~ 00015388 n 0000 | a living thing that has the ability to act or function independently
00015388 03 n 02 animal 0 animate_being 0 003 @ 00004475 n 0000 ~ 01466257 n 0000 + 01835496 v 0102 | a living organism characterized by voluntary movement
01466257 05 n 01 chordate 0 003 @ 00015388 n 0000 ~ 02068974 n 0000 ~ 02581957 n 0000 | any animal of the phylum Chordata having a notochord
02068974 05 n 01 dolphin 0 002 @ 01466257 n 0000 ~i 09000001 n 0000 | any of various small toothed whales with a beaklike snout
02581957 05 n 03 dolphinfish 0 dolphin 1 mahimahi 0 001 @ 01466257 n 0000 | large slender food and game fish
09000001 18 n 01 Flipper 0 001 @i 02068974 n 0000 | a dolphin in a television series
";

pub const INDEX_VERB: &str = "\
move v 1 1 ~ 1 1 01831531
travel v 1 1 @ 1 1 01835496
";

pub const DATA_VERB: &str = "\
01831531 38 v 01 move 0 001 ~ 01835496 v 0000 02 + 01 00 + 02 00 | change location
01835496 38 v 01 travel 0 001 @ 01831531 v 0000 01 + 01 00 | change location; move, travel, or proceed
";

pub const INDEX_ADJ: &str = "\
quick a 1 1 & 1 1 00979366
";

pub const DATA_ADJ: &str = "\
00979366 00 a 01 quick 0 001 & 00980527 a 0000 | accomplished rapidly
";

/// Synset ids of the fixture in first-appearance order.
pub const FIXTURE_IDS: [&str; 9] = [
    "00015388-n",
    "00004475-n",
    "01466257-n",
    "02068974-n",
    "02581957-n",
    "09000001-n",
    "01831531-v",
    "01835496-v",
    "00979366-a",
];

/// Write a dictionary directory holding the fixture files.
pub fn write_dictionary(dir: &Path) {
    let files = [
        ("index.noun", INDEX_NOUN),
        ("data.noun", DATA_NOUN),
        ("index.verb", INDEX_VERB),
        ("data.verb", DATA_VERB),
        ("index.adj", INDEX_ADJ),
        ("data.adj", DATA_ADJ),
        ("index.adv", ""),
        ("data.adv", ""),
    ];
    for (name, body) in files {
        fs::write(dir.join(name), format!("{LICENSE_HEADER}{body}")).unwrap();
    }
}

pub fn dictionary_dir() -> TempDir {
    let dir = Builder::new().prefix("lexnet_dict").tempdir().unwrap();
    write_dictionary(dir.path());
    dir
}

/// The fixture dictionary loaded into a graph. Keep the directory alive
/// while the graph is in use.
pub fn fixture_wordnet() -> (TempDir, WordNet) {
    let dir = dictionary_dir();
    let wordnet = WordNet::from_dir(dir.path()).unwrap();
    (dir, wordnet)
}

/// Number of calls a [`CountingCollector`] received, per operation.
#[derive(Debug, Default)]
pub struct CallCounts {
    pub all_ids: AtomicUsize,
    pub lemmas: AtomicUsize,
    pub hypernym_ids: AtomicUsize,
    pub hyponym_ids: AtomicUsize,
}

impl CallCounts {
    pub fn lemmas(&self) -> usize {
        self.lemmas.load(Ordering::SeqCst)
    }

    pub fn hypernym_ids(&self) -> usize {
        self.hypernym_ids.load(Ordering::SeqCst)
    }

    pub fn hyponym_ids(&self) -> usize {
        self.hyponym_ids.load(Ordering::SeqCst)
    }

    pub fn all_ids(&self) -> usize {
        self.all_ids.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> usize {
        self.all_ids() + self.lemmas() + self.hypernym_ids() + self.hyponym_ids()
    }
}

/// A collector that counts the calls it receives.
#[derive(Debug)]
pub struct CountingCollector {
    inner: TableCollector,
    counts: Arc<CallCounts>,
}

impl CountingCollector {
    pub fn new(inner: TableCollector) -> (Self, Arc<CallCounts>) {
        let counts = Arc::new(CallCounts::default());
        let collector = CountingCollector {
            inner,
            counts: Arc::clone(&counts),
        };
        (collector, counts)
    }
}

impl SynsetCollector for CountingCollector {
    fn all_ids(&self) -> Result<Vec<String>> {
        self.counts.all_ids.fetch_add(1, Ordering::SeqCst);
        self.inner.all_ids()
    }

    fn lemmas(&self, id: &str) -> Result<BTreeSet<String>> {
        self.counts.lemmas.fetch_add(1, Ordering::SeqCst);
        self.inner.lemmas(id)
    }

    fn hypernym_ids(&self, id: &str) -> Result<BTreeSet<String>> {
        self.counts.hypernym_ids.fetch_add(1, Ordering::SeqCst);
        self.inner.hypernym_ids(id)
    }

    fn hyponym_ids(&self, id: &str) -> Result<BTreeSet<String>> {
        self.counts.hyponym_ids.fetch_add(1, Ordering::SeqCst);
        self.inner.hyponym_ids(id)
    }

    fn name(&self) -> &str {
        "counting"
    }
}

/// A small animal taxonomy wrapped in a [`CountingCollector`].
pub fn counting_wordnet() -> (WordNet, Arc<CallCounts>) {
    let table = TableCollector::from_rows(
        vec![
            ("00015388-n", "animal"),
            ("00015388-n", "animate being"),
            ("00004475-n", "organism"),
            ("02068974-n", "dolphin"),
            ("02581957-n", "dolphin"),
            ("02581957-n", "dolphinfish"),
        ],
        vec![
            ("00015388-n", "00004475-n", "hype"),
            ("00004475-n", "00015388-n", "hypo"),
            ("02068974-n", "00015388-n", "hype"),
            ("02581957-n", "00015388-n", "hype"),
            ("00015388-n", "02068974-n", "hypo"),
            ("00015388-n", "02581957-n", "hypo"),
        ],
    );
    let (collector, counts) = CountingCollector::new(table);
    (WordNet::new(collector).unwrap(), counts)
}

pub fn ids<'a, I>(synsets: I) -> Vec<String>
where
    I: IntoIterator<Item = lexnet::Synset<'a>>,
{
    synsets.into_iter().map(|s| s.id().to_string()).collect()
}
