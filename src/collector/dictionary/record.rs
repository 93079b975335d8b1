//! Records parsed from the `index.*` and `data.*` files.

use serde::{Deserialize, Serialize};

use crate::pos::{PartOfSpeech, synset_id};

/// One line of an `index.<pos>` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    /// Lemma with underscores replaced by spaces.
    pub lemma: String,
    pub pos: PartOfSpeech,
    /// Number of synsets the lemma belongs to.
    pub synset_count: usize,
    /// Pointer symbols the lemma has in any of its synsets.
    pub pointer_symbols: Vec<String>,
    pub sense_count: usize,
    /// Number of senses ranked by semantic-concordance frequency.
    pub tagged_sense_count: usize,
    /// Zero-padded byte offsets into the matching data file.
    pub synset_offsets: Vec<String>,
}

impl IndexRecord {
    /// Composite ids of every synset this lemma belongs to.
    pub fn synset_ids(&self) -> impl Iterator<Item = String> + '_ {
        let tag = self.pos.short().to_string();
        self.synset_offsets
            .iter()
            .map(move |offset| synset_id(offset, &tag))
    }
}

/// A word of a data record together with its lexicographer id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynsetWord {
    /// Word with underscores replaced by spaces.
    pub word: String,
    pub lex_id: u32,
}

/// The relations this engine follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// `@` and `@i`: the target is broader.
    Hypernym,
    /// `~` and `~i`: the target is narrower.
    Hyponym,
}

impl Relation {
    /// Classify a pointer symbol. Symbols of other relation types give `None`.
    pub fn from_symbol(symbol: &str) -> Option<Relation> {
        match symbol {
            "@" | "@i" => Some(Relation::Hypernym),
            "~" | "~i" => Some(Relation::Hyponym),
            _ => None,
        }
    }
}

/// A relation edge stored in a data record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pointer {
    pub symbol: String,
    pub target_offset: String,
    pub target_pos: PartOfSpeech,
    /// Word number in the source synset; 0 means the whole synset.
    pub source: u32,
    /// Word number in the target synset; 0 means the whole synset.
    pub target: u32,
}

impl Pointer {
    /// Composite id of the target synset.
    pub fn target_id(&self) -> String {
        synset_id(&self.target_offset, &self.target_pos.short().to_string())
    }

    pub fn relation(&self) -> Option<Relation> {
        Relation::from_symbol(&self.symbol)
    }

    /// Whether the pointer links whole synsets rather than single words.
    pub fn is_semantic(&self) -> bool {
        self.source == 0 && self.target == 0
    }
}

/// A verb frame applicable to a synset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub frame_number: u32,
    /// Word the frame applies to; 0 means every word of the synset.
    pub word_index: u32,
}

/// One line of a `data.<pos>` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRecord {
    pub offset: String,
    pub lex_file_number: u32,
    /// `n`, `v`, `a`, `s` (adjective satellite) or `r`.
    pub synset_type: char,
    pub words: Vec<SynsetWord>,
    pub pointers: Vec<Pointer>,
    pub frames: Vec<Frame>,
    pub gloss: String,
}

impl DataRecord {
    /// Pointers of the given relation, in file order.
    pub fn pointers_for(&self, relation: Relation) -> impl Iterator<Item = &Pointer> {
        self.pointers
            .iter()
            .filter(move |pointer| pointer.relation() == Some(relation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_from_symbol() {
        assert_eq!(Relation::from_symbol("@"), Some(Relation::Hypernym));
        assert_eq!(Relation::from_symbol("@i"), Some(Relation::Hypernym));
        assert_eq!(Relation::from_symbol("~"), Some(Relation::Hyponym));
        assert_eq!(Relation::from_symbol("~i"), Some(Relation::Hyponym));
        assert_eq!(Relation::from_symbol("%p"), None);
        assert_eq!(Relation::from_symbol("!"), None);
    }

    #[test]
    fn test_index_record_synset_ids() {
        let record = IndexRecord {
            lemma: "dolphin".to_string(),
            pos: PartOfSpeech::Noun,
            synset_count: 2,
            pointer_symbols: vec!["@".to_string()],
            sense_count: 2,
            tagged_sense_count: 0,
            synset_offsets: vec!["02068974".to_string(), "02581957".to_string()],
        };

        let ids: Vec<String> = record.synset_ids().collect();
        assert_eq!(ids, vec!["02068974-n", "02581957-n"]);
    }

    #[test]
    fn test_pointer_target_id() {
        let pointer = Pointer {
            symbol: "@".to_string(),
            target_offset: "00004475".to_string(),
            target_pos: PartOfSpeech::Noun,
            source: 0,
            target: 0,
        };
        assert_eq!(pointer.target_id(), "00004475-n");
        assert!(pointer.is_semantic());
    }
}
