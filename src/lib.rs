//! Bag-of-words count matrices with pluggable stemming and lemmatization.
//!
//! Documents are tokenized into lower-cased alphabetic tokens, optionally normalized per token,
//! collected into an alphabetically ordered [`Vocabulary`] and counted into a [`CountMatrix`].

mod config;
pub use config::{
    DEFAULT_COUNT_VECTORIZER_CONFIG, DEFAULT_TOKENIZER_CONFIG, STOP_WORD_FILTERED_TOKENIZER_CONFIG,
};
pub mod constants;
pub mod structs;
pub use structs::{
    Analyzer, CountMatrix, CountVectorizer, CountVectorizerConfig, Error, LabeledMessage,
    Lemmatizer, Lexicon, NormalizationComparison, NormalizationComparisonRow, PartOfSpeech,
    PorterStemmer, TokenNormalizer, Tokenizer, TokenizerConfig, Vocabulary,
};
pub mod types;
pub use types::{CountRow, Label, Token, TokenCount, TokenFrequencyMap, TokenId, TokenRef};
pub mod utils;
pub use utils::{
    format_enumerated_list, read_labeled_messages_from_path, read_labeled_messages_from_string,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Builds the vocabulary and count matrix for `documents` in one call, using the default
/// tokenizer (lower-cased, alphabetic-only, no stop word filtering) and no normalizer.
pub fn count_tokens_in_documents<D: AsRef<str>>(documents: &[D]) -> (Vocabulary, CountMatrix) {
    let mut count_vectorizer = CountVectorizer::default();
    let count_matrix = count_vectorizer.fit_transform(documents);

    (count_vectorizer.vocabulary().clone(), count_matrix)
}
