use crate::constants::{EMBEDDED_LEXICON_BYTES, EMBEDDED_LEXICON_EXCEPTIONS_BYTES};
use crate::structs::PartOfSpeech;
use crate::types::{Token, TokenRef};
use crate::Error;
use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::io::{Cursor, Read};

/// Read-only lexical resource backing the `Lemmatizer`.
///
/// Holds the known base forms for each part of speech and the irregular inflections that
/// suffix rules cannot reach (e.g. verb `went` → `go`). Load it once with
/// [`Lexicon::embedded`] and pass it by reference to every lemmatizer that needs it; nothing
/// has to be torn down.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    base_forms: HashMap<PartOfSpeech, HashSet<Token>>,
    exceptions: HashMap<PartOfSpeech, HashMap<Token, Vec<Token>>>,
}

impl Lexicon {
    /// Decompresses and parses the lexicon embedded at build time.
    pub fn embedded() -> Result<Self, Error> {
        Self::from_gzip_bytes(EMBEDDED_LEXICON_BYTES, EMBEDDED_LEXICON_EXCEPTIONS_BYTES)
    }

    /// Builds a lexicon from Gzip-compressed base form and exception CSV files.
    pub fn from_gzip_bytes(base_form_bytes: &[u8], exception_bytes: &[u8]) -> Result<Self, Error> {
        let base_form_csv = Self::decompress(base_form_bytes)?;
        let exception_csv = Self::decompress(exception_bytes)?;

        Self::from_csv_strings(&base_form_csv, &exception_csv)
    }

    /// Builds a lexicon from CSV text.
    ///
    /// # Arguments
    /// * `base_form_csv` - Columns `Lemma` and `Part Of Speech`, where the latter holds one or
    ///   more tags (`n`, `v`, `a`, `r`), e.g. `love,nv`.
    /// * `exception_csv` - Columns `Inflection`, `Part Of Speech` and `Lemma`, one mapping per
    ///   row, e.g. `went,v,go`.
    pub fn from_csv_strings(base_form_csv: &str, exception_csv: &str) -> Result<Self, Error> {
        let mut lexicon = Lexicon::default();

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(Cursor::new(base_form_csv));
        let headers = reader.headers()?.clone();
        let lemma_index = Self::column_index(&headers, "Lemma")?;
        let pos_index = Self::column_index(&headers, "Part Of Speech")?;

        for record in reader.records() {
            let record = record?;
            let lemma = Self::required_field(&record, lemma_index, "Lemma")?;
            let tags = Self::required_field(&record, pos_index, "Part Of Speech")?;

            for tag in tags.chars() {
                let pos = PartOfSpeech::from_tag(tag).ok_or_else(|| {
                    Error::LexiconError(format!(
                        "Unknown part-of-speech tag {:?} for {}",
                        tag, lemma
                    ))
                })?;
                lexicon.insert_base_form(&lemma, pos);
            }
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(Cursor::new(exception_csv));
        let headers = reader.headers()?.clone();
        let inflection_index = Self::column_index(&headers, "Inflection")?;
        let pos_index = Self::column_index(&headers, "Part Of Speech")?;
        let lemma_index = Self::column_index(&headers, "Lemma")?;

        for record in reader.records() {
            let record = record?;
            let inflection = Self::required_field(&record, inflection_index, "Inflection")?;
            let pos: PartOfSpeech = Self::required_field(&record, pos_index, "Part Of Speech")?
                .parse()?;
            let lemma = Self::required_field(&record, lemma_index, "Lemma")?;

            lexicon.insert_exception(&inflection, pos, &lemma);
        }

        debug!(
            "Loaded lexicon with {} base forms and {} exceptions",
            lexicon.base_form_count(),
            lexicon.exception_count()
        );

        Ok(lexicon)
    }

    /// Registers `lemma` as a base form for the given part of speech.
    pub fn insert_base_form(&mut self, lemma: &TokenRef, pos: PartOfSpeech) {
        self.base_forms
            .entry(pos)
            .or_default()
            .insert(lemma.to_lowercase());
    }

    /// Registers an irregular inflection. An inflection may map to more than one lemma.
    pub fn insert_exception(
        &mut self,
        inflection: &TokenRef,
        pos: PartOfSpeech,
        lemma: &TokenRef,
    ) {
        let lemmas = self
            .exceptions
            .entry(pos)
            .or_default()
            .entry(inflection.to_lowercase())
            .or_default();
        let lemma = lemma.to_lowercase();

        if !lemmas.contains(&lemma) {
            lemmas.push(lemma);
        }
    }

    /// Determines whether `word` is a known base form for the given part of speech.
    pub fn is_base_form(&self, word: &TokenRef, pos: PartOfSpeech) -> bool {
        self.base_forms
            .get(&pos)
            .map_or(false, |forms| forms.contains(word))
    }

    /// Retrieves the lemmas registered for an irregular inflection, if any.
    pub fn get_exceptions(&self, word: &TokenRef, pos: PartOfSpeech) -> Option<&[Token]> {
        self.exceptions
            .get(&pos)
            .and_then(|inflections| inflections.get(word))
            .map(|lemmas| lemmas.as_slice())
    }

    pub fn base_form_count(&self) -> usize {
        self.base_forms.values().map(|forms| forms.len()).sum()
    }

    pub fn exception_count(&self) -> usize {
        self.exceptions
            .values()
            .flat_map(|inflections| inflections.values())
            .map(|lemmas| lemmas.len())
            .sum()
    }

    fn decompress(bytes: &[u8]) -> Result<String, Error> {
        let mut decoder = GzDecoder::new(bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        Ok(decompressed_data)
    }

    fn column_index(headers: &StringRecord, name: &str) -> Result<usize, Error> {
        headers
            .iter()
            .position(|header| header.trim() == name)
            .ok_or_else(|| Error::LexiconError(format!("Missing '{}' column", name)))
    }

    fn required_field(record: &StringRecord, index: usize, name: &str) -> Result<Token, Error> {
        record
            .get(index)
            .map(|field| field.trim().to_lowercase())
            .filter(|field| !field.is_empty())
            .ok_or_else(|| Error::LexiconError(format!("Missing '{}' field", name)))
    }
}
