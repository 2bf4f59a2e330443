use crate::structs::Analyzer;
use crate::types::{Token, TokenId, TokenRef};
use crate::utils::count_token_frequencies;
use log::debug;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// A struct to map tokens to column indices and vice versa.
///
/// Column indices are assigned in alphabetical token order, are contiguous and start at zero,
/// which makes the mapping deterministic for a given corpus and analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    /// A map of tokens to their column indices.
    token_map: HashMap<Token, TokenId>,

    /// Tokens in column order; doubles as the reverse map.
    tokens: Vec<Token>,
}

impl Vocabulary {
    /// Creates a vocabulary from arbitrary tokens, deduplicating and sorting them.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        let tokens: Vec<Token> = tokens
            .into_iter()
            .collect::<BTreeSet<Token>>()
            .into_iter()
            .collect();

        let token_map = tokens
            .iter()
            .enumerate()
            .map(|(token_id, token)| (token.clone(), token_id))
            .collect();

        Vocabulary { token_map, tokens }
    }

    /// Scans a corpus and collects every token surviving the analyzer.
    ///
    /// # Arguments
    /// * `documents` - The corpus, in order.
    /// * `analyzer` - The normalization function applied to each document.
    ///
    /// # Returns
    /// * A vocabulary covering the union of all surviving tokens. An empty corpus yields an
    ///   empty vocabulary.
    pub fn from_documents<D: AsRef<str>>(documents: &[D], analyzer: &Analyzer) -> Self {
        let vocabulary = Self::from_tokens(
            documents
                .iter()
                .flat_map(|document| analyzer.analyze(document.as_ref())),
        );

        debug!(
            "Built vocabulary of {} tokens from {} documents",
            vocabulary.len(),
            documents.len()
        );

        vocabulary
    }

    /// Like [`Vocabulary::from_documents`], but keeps only the `max_features` tokens with the
    /// highest total count across the corpus.
    ///
    /// Ties are broken alphabetically; the kept tokens are re-indexed alphabetically.
    pub fn from_documents_with_max_features<D: AsRef<str>>(
        documents: &[D],
        analyzer: &Analyzer,
        max_features: usize,
    ) -> Self {
        let corpus_tokens: Vec<Token> = documents
            .iter()
            .flat_map(|document| analyzer.analyze(document.as_ref()))
            .collect();

        let mut frequencies: Vec<(Token, usize)> = count_token_frequencies(&corpus_tokens)
            .into_iter()
            .collect();

        frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        frequencies.truncate(max_features);

        let vocabulary = Self::from_tokens(frequencies.into_iter().map(|(token, _)| token));

        debug!(
            "Built vocabulary of {} tokens (max {}) from {} documents",
            vocabulary.len(),
            max_features,
            documents.len()
        );

        vocabulary
    }

    /// Gets the column index for a token if it exists in the vocabulary.
    ///
    /// # Returns
    /// * `Some(TokenId)` if the token is present, or `None` if it is not found.
    pub fn get_token_id(&self, token: &TokenRef) -> Option<TokenId> {
        self.token_map.get(token).copied()
    }

    /// Retrieves the token for a given column index.
    pub fn get_token_by_id(&self, token_id: TokenId) -> Option<&TokenRef> {
        self.tokens.get(token_id).map(|token| token.as_str())
    }

    /// Filters and returns column indices for tokens that exist in the vocabulary.
    ///
    /// Unknown tokens are silently skipped.
    pub fn get_filtered_token_ids(&self, tokens: &[Token]) -> Vec<TokenId> {
        tokens
            .iter()
            .filter_map(|token| self.get_token_id(token))
            .collect()
    }

    /// Read-only view of the token to column index map.
    pub fn token_map(&self) -> &HashMap<Token, TokenId> {
        &self.token_map
    }

    /// The tokens in column order, suitable as table headers.
    pub fn feature_names(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterates over `(token, column index)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&TokenRef, TokenId)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(token_id, token)| (token.as_str(), token_id))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Vocabulary {
    /// Lists `token: index` pairs in column order, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .iter()
            .map(|(token, token_id)| format!("{}: {}", token, token_id))
            .collect();

        write!(f, "{}", lines.join("\n"))
    }
}
