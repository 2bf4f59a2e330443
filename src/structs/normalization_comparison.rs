use crate::constants::{COMPARISON_CELL_MAX_CHARS, COMPARISON_COLUMN_WIDTH};
use crate::structs::{Lemmatizer, PorterStemmer, Tokenizer};
use crate::utils::fit_column;
use std::fmt;

/// One document rendered three ways.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationComparisonRow {
    /// All alphabetic tokens, lower-cased, stop words included.
    pub original: String,
    pub stemmed: String,
    pub lemmatized: String,
}

/// Side-by-side view of stemming and lemmatization over a set of documents.
///
/// Stop words are removed before either normalizer runs.
#[derive(Debug, Clone, Default)]
pub struct NormalizationComparison {
    rows: Vec<NormalizationComparisonRow>,
}

impl NormalizationComparison {
    pub fn from_documents<D: AsRef<str>>(
        documents: &[D],
        stemmer: &PorterStemmer,
        lemmatizer: &Lemmatizer,
    ) -> Self {
        let tokenizer = Tokenizer::bag_of_words_parser();
        let content_word_tokenizer = Tokenizer::stop_word_filtered_parser();

        let rows = documents
            .iter()
            .map(|document| {
                let words = tokenizer.tokenize(document.as_ref());
                let content_words = content_word_tokenizer.tokenize(document.as_ref());

                NormalizationComparisonRow {
                    original: words.join(" "),
                    stemmed: content_words
                        .iter()
                        .map(|word| stemmer.stem(word))
                        .collect::<Vec<_>>()
                        .join(" "),
                    lemmatized: content_words
                        .iter()
                        .map(|word| lemmatizer.lemmatize(word))
                        .collect::<Vec<_>>()
                        .join(" "),
                }
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[NormalizationComparisonRow] {
        &self.rows
    }

    /// The lemmatized form of every document, ready to be vectorized.
    pub fn lemmatized_corpus(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.lemmatized.clone()).collect()
    }

    /// The stemmed form of every document, ready to be vectorized.
    pub fn stemmed_corpus(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.stemmed.clone()).collect()
    }
}

impl fmt::Display for NormalizationComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell =
            |text: &str| fit_column(text, COMPARISON_COLUMN_WIDTH, COMPARISON_CELL_MAX_CHARS);
        let header_cell =
            |text: &str| fit_column(text, COMPARISON_COLUMN_WIDTH, COMPARISON_COLUMN_WIDTH);

        write!(
            f,
            "{} | {} | {}\n{}",
            header_cell("Original"),
            header_cell("Stemming"),
            header_cell("Lemmatization"),
            "-".repeat(COMPARISON_COLUMN_WIDTH * 3 + 5)
        )?;

        for row in &self.rows {
            write!(
                f,
                "\n{} | {} | {}",
                cell(&row.original),
                cell(&row.stemmed),
                cell(&row.lemmatized)
            )?;
        }

        Ok(())
    }
}
