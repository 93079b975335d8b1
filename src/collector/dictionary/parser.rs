//! Line grammar of the native dictionary files.
//!
//! Both file kinds are positional: counts embedded in the line decide how
//! many fields follow. Any mismatch is reported as an error message; the
//! caller attaches the file name and line number.

use std::iter::Peekable;
use std::str::SplitWhitespace;

use crate::collector::dictionary::record::{
    DataRecord, Frame, IndexRecord, Pointer, SynsetWord,
};
use crate::pos::PartOfSpeech;

/// Error message for a malformed line.
pub type LineResult<T> = std::result::Result<T, String>;

/// Separator between the fixed fields and the gloss of a data line.
const GLOSS_SEPARATOR: &str = " | ";

/// Licence and header lines start with two spaces.
pub fn is_header_line(line: &str) -> bool {
    line.starts_with("  ")
}

/// Whitespace-delimited field cursor with typed accessors.
struct Fields<'a> {
    inner: Peekable<SplitWhitespace<'a>>,
    consumed: usize,
}

impl<'a> Fields<'a> {
    fn new(text: &'a str) -> Self {
        Fields {
            inner: text.split_whitespace().peekable(),
            consumed: 0,
        }
    }

    fn next_field(&mut self, name: &str) -> LineResult<&'a str> {
        match self.inner.next() {
            Some(field) => {
                self.consumed += 1;
                Ok(field)
            }
            None => Err(format!(
                "missing {name} (expected field {})",
                self.consumed + 1
            )),
        }
    }

    fn decimal(&mut self, name: &str) -> LineResult<u32> {
        let field = self.next_field(name)?;
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("{name} '{field}' is not a decimal number"));
        }
        field
            .parse::<u32>()
            .map_err(|e| format!("{name} '{field}' is out of range: {e}"))
    }

    fn hex(&mut self, name: &str) -> LineResult<u32> {
        let field = self.next_field(name)?;
        parse_hex(name, field)
    }

    /// Offsets stay strings so the zero padding survives into the id.
    fn offset(&mut self, name: &str) -> LineResult<&'a str> {
        let field = self.next_field(name)?;
        check_offset(name, field)?;
        Ok(field)
    }

    fn pos(&mut self, name: &str) -> LineResult<PartOfSpeech> {
        let field = self.next_field(name)?;
        field
            .parse::<PartOfSpeech>()
            .map_err(|_| format!("{name} '{field}' is not a part-of-speech tag"))
    }

    fn has_more(&mut self) -> bool {
        self.inner.peek().is_some()
    }

    fn rest(self) -> Vec<&'a str> {
        self.inner.collect()
    }
}

fn parse_hex(name: &str, field: &str) -> LineResult<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("{name} '{field}' is not a hexadecimal number"));
    }
    u32::from_str_radix(field, 16).map_err(|e| format!("{name} '{field}' is out of range: {e}"))
}

fn check_offset(name: &str, field: &str) -> LineResult<()> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("{name} '{field}' is not a synset offset"));
    }
    Ok(())
}

fn lemma_text(field: &str) -> String {
    field.replace('_', " ")
}

// Counts come from the line itself, so vectors grow as fields are read
// instead of being sized up front.

/// Parse one record line of an `index.<pos>` file.
///
/// `lemma pos synset_cnt p_cnt [ptr_symbol...] sense_cnt tagsense_cnt synset_offset [synset_offset...]`
pub fn parse_index_line(line: &str) -> LineResult<IndexRecord> {
    let mut fields = Fields::new(line);

    let lemma = lemma_text(fields.next_field("lemma")?);
    let pos = fields.pos("part of speech")?;
    let synset_count = fields.decimal("synset count")? as usize;
    let pointer_count = fields.decimal("pointer count")? as usize;

    let mut pointer_symbols = Vec::new();
    for i in 0..pointer_count {
        let symbol = fields.next_field(&format!("pointer symbol {}", i + 1))?;
        pointer_symbols.push(symbol.to_string());
    }

    let sense_count = fields.decimal("sense count")? as usize;
    let tagged_sense_count = fields.decimal("tagged sense count")? as usize;

    let synset_offsets = fields.rest();
    if synset_offsets.len() != synset_count {
        return Err(format!(
            "expected {synset_count} synset offsets, found {}",
            synset_offsets.len()
        ));
    }
    for offset in &synset_offsets {
        check_offset("synset offset", offset)?;
    }

    Ok(IndexRecord {
        lemma,
        pos,
        synset_count,
        pointer_symbols,
        sense_count,
        tagged_sense_count,
        synset_offsets: synset_offsets.into_iter().map(str::to_string).collect(),
    })
}

/// Parse one record line of a `data.<pos>` file.
///
/// `offset lex_filenum ss_type w_cnt word lex_id [word lex_id...] p_cnt [ptr...] [frames...] | gloss`
pub fn parse_data_line(line: &str) -> LineResult<DataRecord> {
    let (fixed, gloss) = line
        .split_once(GLOSS_SEPARATOR)
        .ok_or_else(|| format!("missing gloss separator '{}'", GLOSS_SEPARATOR.trim()))?;

    let mut fields = Fields::new(fixed);

    let offset = fields.offset("synset offset")?.to_string();
    let lex_file_number = fields.decimal("lexicographer file number")?;
    let synset_type = parse_synset_type(fields.next_field("synset type")?)?;

    let word_count = fields.hex("word count")? as usize;
    let mut words = Vec::new();
    for i in 0..word_count {
        let word = lemma_text(fields.next_field(&format!("word {}", i + 1))?);
        let lex_id = fields.hex(&format!("lex id of word {}", i + 1))?;
        words.push(SynsetWord { word, lex_id });
    }

    let pointer_count = fields.decimal("pointer count")? as usize;
    let mut pointers = Vec::new();
    for i in 0..pointer_count {
        pointers.push(parse_pointer(&mut fields, i + 1)?);
    }

    let mut frames = Vec::new();
    if fields.has_more() {
        let frame_count = fields.decimal("frame count")? as usize;
        for i in 0..frame_count {
            frames.push(parse_frame(&mut fields, i + 1)?);
        }
    }

    let trailing = fields.rest();
    if !trailing.is_empty() {
        return Err(format!(
            "unexpected trailing fields before gloss: {}",
            trailing.join(" ")
        ));
    }

    Ok(DataRecord {
        offset,
        lex_file_number,
        synset_type,
        words,
        pointers,
        frames,
        gloss: gloss.trim_end().to_string(),
    })
}

fn parse_synset_type(field: &str) -> LineResult<char> {
    match field {
        "n" | "v" | "a" | "s" | "r" => Ok(field.chars().next().unwrap_or('n')),
        other => Err(format!("synset type '{other}' is not one of n, v, a, s, r")),
    }
}

fn parse_pointer(fields: &mut Fields<'_>, number: usize) -> LineResult<Pointer> {
    let symbol = fields.next_field(&format!("symbol of pointer {number}"))?;
    let target_offset = fields.offset(&format!("target offset of pointer {number}"))?;
    let target_pos = fields.pos(&format!("target part of speech of pointer {number}"))?;

    let name = format!("source/target of pointer {number}");
    let source_target = fields.next_field(&name)?;
    if source_target.len() != 4 || !source_target.is_ascii() {
        return Err(format!(
            "{name} '{source_target}' must be four hexadecimal digits"
        ));
    }
    let (source, target) = source_target.split_at(2);

    Ok(Pointer {
        symbol: symbol.to_string(),
        target_offset: target_offset.to_string(),
        target_pos,
        source: parse_hex(&name, source)?,
        target: parse_hex(&name, target)?,
    })
}

fn parse_frame(fields: &mut Fields<'_>, number: usize) -> LineResult<Frame> {
    let marker = fields.next_field(&format!("marker of frame {number}"))?;
    if marker != "+" {
        return Err(format!("frame {number} must start with '+', found '{marker}'"));
    }
    let frame_number = fields.decimal(&format!("number of frame {number}"))?;
    let word_index = fields.hex(&format!("word number of frame {number}"))?;

    Ok(Frame {
        frame_number,
        word_index,
    })
}
