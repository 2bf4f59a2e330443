use crate::structs::{CountVectorizerConfig, TokenizerConfig};

pub const DEFAULT_TOKENIZER_CONFIG: &TokenizerConfig = &TokenizerConfig {
    filter_stop_words: false,
    min_token_length: 1,
};

pub const STOP_WORD_FILTERED_TOKENIZER_CONFIG: &TokenizerConfig = &TokenizerConfig {
    filter_stop_words: true,
    min_token_length: 1,
};

pub const DEFAULT_COUNT_VECTORIZER_CONFIG: &CountVectorizerConfig =
    &CountVectorizerConfig { max_features: None };
