//! Collector for the native WordNet text format.
//!
//! A dictionary directory holds one `index.<pos>` and one `data.<pos>` file
//! per part of speech. Index lines map lemmas to synset offsets; data lines
//! hold the words, pointers, verb frames and gloss of one synset. Both are
//! parsed eagerly into two maps keyed by composite synset id.

pub mod parser;
pub mod record;

use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;
use log::{debug, info, warn};

use crate::collector::SynsetCollector;
use crate::config::DictionaryConfig;
use crate::error::{LexnetError, Result};
use crate::pos::{PartOfSpeech, synset_id};

pub use record::{DataRecord, Frame, IndexRecord, Pointer, Relation, SynsetWord};

/// A [`SynsetCollector`] backed by `index.*` / `data.*` text files.
///
/// Any malformed line aborts construction with
/// [`LexnetError::Parse`]. Pointer targets are not cross-checked here; a
/// dangling target surfaces as [`LexnetError::UnknownId`] when the graph
/// resolves it.
pub struct DictionaryCollector {
    /// Synset ids in first-appearance order across the index files.
    ids: Vec<String>,
    /// Index records per synset id. A record is shared by every id it lists.
    indexes: AHashMap<String, Vec<Arc<IndexRecord>>>,
    /// At most one data record per synset id.
    data: AHashMap<String, DataRecord>,
}

impl DictionaryCollector {
    fn empty() -> Self {
        DictionaryCollector {
            ids: Vec::new(),
            indexes: AHashMap::new(),
            data: AHashMap::new(),
        }
    }

    /// Parse the files named by `config`.
    pub fn open(config: &DictionaryConfig) -> Result<Self> {
        config.validate()?;
        if !config.dict_dir.is_dir() {
            return Err(LexnetError::invalid_argument(format!(
                "dictionary directory {} does not exist",
                config.dict_dir.display()
            )));
        }
        let mut collector = Self::empty();

        for &pos in &config.parts_of_speech {
            let index_path = config.index_path(pos);
            let reader = open_reader(&index_path)?;
            collector.read_index(&pos.index_file_name(), reader)?;

            let data_path = config.data_path(pos);
            let reader = open_reader(&data_path)?;
            collector.read_data(pos, &pos.data_file_name(), reader)?;
        }

        info!(
            "Loaded dictionary from {}: {} synsets, {} data records",
            config.dict_dir.display(),
            collector.ids.len(),
            collector.data.len()
        );
        Ok(collector)
    }

    /// Parse every part of speech from `dict_dir`.
    pub fn from_dir<P: AsRef<Path>>(dict_dir: P) -> Result<Self> {
        Self::open(&DictionaryConfig::new(dict_dir.as_ref()))
    }

    /// Parse already-open sources, given as `(pos, index, data)` triples.
    pub fn from_sources<I, R>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (PartOfSpeech, R, R)>,
        R: BufRead,
    {
        let mut collector = Self::empty();
        for (pos, index, data) in sources {
            collector.read_index(&pos.index_file_name(), index)?;
            collector.read_data(pos, &pos.data_file_name(), data)?;
        }
        Ok(collector)
    }

    fn read_index<R: BufRead>(&mut self, file_name: &str, reader: R) -> Result<usize> {
        let mut records = 0;
        for (number, line) in reader.lines().enumerate() {
            let line =
                line.map_err(|e| LexnetError::parse(file_name, number + 1, e.to_string()))?;
            if parser::is_header_line(&line) {
                continue;
            }

            let record = parser::parse_index_line(&line)
                .map_err(|message| LexnetError::parse(file_name, number + 1, message))?;
            let record = Arc::new(record);

            for id in record.synset_ids() {
                match self.indexes.get_mut(&id) {
                    Some(entries) => entries.push(Arc::clone(&record)),
                    None => {
                        self.ids.push(id.clone());
                        self.indexes.insert(id, vec![Arc::clone(&record)]);
                    }
                }
            }
            records += 1;
        }

        info!("Parsed {records} index records from {file_name}");
        Ok(records)
    }

    fn read_data<R: BufRead>(
        &mut self,
        pos: PartOfSpeech,
        file_name: &str,
        reader: R,
    ) -> Result<usize> {
        let tag = pos.short().to_string();
        let mut records = 0;
        for (number, line) in reader.lines().enumerate() {
            let line =
                line.map_err(|e| LexnetError::parse(file_name, number + 1, e.to_string()))?;
            if parser::is_header_line(&line) {
                continue;
            }

            let record = parser::parse_data_line(&line)
                .map_err(|message| LexnetError::parse(file_name, number + 1, message))?;
            let id = synset_id(&record.offset, &tag);
            if self.data.insert(id.clone(), record).is_some() {
                return Err(LexnetError::parse(
                    file_name,
                    number + 1,
                    format!("duplicate data record for synset {id}"),
                ));
            }
            records += 1;
        }

        info!("Parsed {records} data records from {file_name}");
        Ok(records)
    }

    /// Index records stored under `id`.
    pub fn index_records(&self, id: &str) -> Option<&[Arc<IndexRecord>]> {
        self.indexes.get(id).map(Vec::as_slice)
    }

    /// The data record of `id`, if the data file had one.
    pub fn data_record(&self, id: &str) -> Option<&DataRecord> {
        self.data.get(id)
    }

    /// Number of synset ids found in the index files.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn known_data_record(&self, id: &str) -> Result<&DataRecord> {
        if !self.indexes.contains_key(id) {
            return Err(LexnetError::unknown_id(id));
        }
        self.data.get(id).ok_or_else(|| {
            warn!("Synset {id} is listed in an index file but has no data record");
            LexnetError::unknown_id(id)
        })
    }

    fn related_ids(&self, id: &str, relation: Relation) -> Result<BTreeSet<String>> {
        let record = self.known_data_record(id)?;
        Ok(record
            .pointers_for(relation)
            .map(Pointer::target_id)
            .collect())
    }
}

fn open_reader(path: &Path) -> Result<BufReader<File>> {
    debug!("Opening {}", path.display());
    let file = File::open(path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;
    Ok(BufReader::new(file))
}

impl fmt::Debug for DictionaryCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryCollector")
            .field("synsets", &self.ids.len())
            .field("data_records", &self.data.len())
            .finish()
    }
}

impl SynsetCollector for DictionaryCollector {
    fn all_ids(&self) -> Result<Vec<String>> {
        Ok(self.ids.clone())
    }

    fn lemmas(&self, id: &str) -> Result<BTreeSet<String>> {
        let records = self
            .indexes
            .get(id)
            .ok_or_else(|| LexnetError::unknown_id(id))?;
        Ok(records.iter().map(|record| record.lemma.clone()).collect())
    }

    fn hypernym_ids(&self, id: &str) -> Result<BTreeSet<String>> {
        self.related_ids(id, Relation::Hypernym)
    }

    fn hyponym_ids(&self, id: &str) -> Result<BTreeSet<String>> {
        self.related_ids(id, Relation::Hyponym)
    }

    fn gloss(&self, id: &str) -> Result<Option<String>> {
        if !self.indexes.contains_key(id) {
            return Err(LexnetError::unknown_id(id));
        }
        Ok(self.data.get(id).map(|record| record.gloss.clone()))
    }

    fn name(&self) -> &str {
        "dictionary"
    }
}
