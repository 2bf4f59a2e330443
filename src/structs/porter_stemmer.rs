use crate::structs::TokenNormalizer;
use crate::types::{Token, TokenRef};
use rust_stemmers::{Algorithm, Stemmer};

/// Rule-based suffix stripping using the English (Porter2) Snowball algorithm.
///
/// Produces a root form that is not necessarily a dictionary word, e.g. `studies` → `studi`.
pub struct PorterStemmer {
    stemmer: Stemmer,
}

impl PorterStemmer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Stems a single lower-cased token.
    pub fn stem(&self, token: &TokenRef) -> Token {
        self.stemmer.stem(token).into_owned()
    }
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenNormalizer for PorterStemmer {
    fn normalize(&self, token: &TokenRef) -> Token {
        self.stem(token)
    }
}
