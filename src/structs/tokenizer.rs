use crate::config::{DEFAULT_TOKENIZER_CONFIG, STOP_WORD_FILTERED_TOKENIZER_CONFIG};
use crate::constants::STOP_WORDS;
use crate::types::{Token, TokenRef};
use std::collections::HashSet;

/// Options controlling which tokens survive tokenization.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Drop tokens found in the English stop word list.
    pub filter_stop_words: bool,

    /// Tokens shorter than this (in characters) are dropped.
    pub min_token_length: usize,
}

/// A utility struct for tokenizing text into lower-cased, alphabetic-only tokens.
///
/// Text is split on every character that is not an ASCII letter, so punctuation, digits and
/// apostrophes all act as separators (`don't` becomes `don` and `t`).
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Tokens shorter than this are discarded.
    min_token_length: usize,

    /// Preprocessed stop words for filtering tokens.
    pre_processed_stop_words: Option<HashSet<Token>>,
}

impl Tokenizer {
    /// Creates a tokenizer from an explicit configuration.
    pub fn new(config: &TokenizerConfig) -> Self {
        Self {
            min_token_length: config.min_token_length,
            pre_processed_stop_words: if config.filter_stop_words {
                Some(Self::preprocess_stop_words())
            } else {
                None
            },
        }
    }

    /// Creates a tokenizer that keeps every alphabetic token, including stop words.
    pub fn bag_of_words_parser() -> Self {
        Self::new(DEFAULT_TOKENIZER_CONFIG)
    }

    /// Creates a tokenizer that additionally removes English stop words.
    pub fn stop_word_filtered_parser() -> Self {
        Self::new(STOP_WORD_FILTERED_TOKENIZER_CONFIG)
    }

    /// Splits the input text into tokens based on the tokenizer's configuration.
    ///
    /// # Arguments
    /// * `text` - The input text to tokenize.
    ///
    /// # Returns
    /// * A vector of lower-cased tokens, in document order.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split(|c: char| !c.is_ascii_alphabetic())
            .filter(|word| !word.is_empty())
            .map(|word| word.to_ascii_lowercase())
            .filter(|word| word.len() >= self.min_token_length && !self.is_stop_word(word))
            .collect()
    }

    /// Determines whether the given (lower-cased) token is filtered as a stop word.
    ///
    /// Always `false` when stop word filtering is disabled.
    pub fn is_stop_word(&self, token: &TokenRef) -> bool {
        self.pre_processed_stop_words
            .as_ref()
            .map_or(false, |stop_words| stop_words.contains(token))
    }

    /// Preprocesses the stop words into a lookup set.
    ///
    /// # Returns
    /// * A `HashSet` containing the stop words.
    fn preprocess_stop_words() -> HashSet<Token> {
        STOP_WORDS.iter().map(|word| word.to_string()).collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::bag_of_words_parser()
    }
}
