use crate::structs::{TokenNormalizer, Tokenizer};
use crate::types::Token;

/// The normalization function shared by vocabulary construction and counting.
///
/// Tokenizes a document and then, if configured, runs every token through a
/// [`TokenNormalizer`] (stemming or lemmatization). Both passes over a corpus must use the same
/// analyzer, otherwise counts will not line up with the vocabulary.
pub struct Analyzer<'a> {
    tokenizer: Tokenizer,
    normalizer: Option<&'a dyn TokenNormalizer>,
}

impl<'a> Analyzer<'a> {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            normalizer: None,
        }
    }

    /// Applies `normalizer` to every token after tokenization.
    pub fn with_normalizer(mut self, normalizer: &'a dyn TokenNormalizer) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Produces the surviving, normalized tokens of a document, in document order.
    pub fn analyze(&self, document: &str) -> Vec<Token> {
        let tokens = self.tokenizer.tokenize(document);

        match self.normalizer {
            Some(normalizer) => normalizer.normalize_tokens(&tokens),
            None => tokens,
        }
    }
}

impl Default for Analyzer<'_> {
    fn default() -> Self {
        Self::new(Tokenizer::default())
    }
}
