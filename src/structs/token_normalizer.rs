use crate::types::{Token, TokenRef};

/// A per-token normalization step applied after tokenization and before counting.
///
/// Implementations must be deterministic: the same token always normalizes to the same output,
/// otherwise vocabulary construction and counting would disagree.
pub trait TokenNormalizer {
    fn normalize(&self, token: &TokenRef) -> Token;

    /// Normalizes every token in order.
    fn normalize_tokens(&self, tokens: &[Token]) -> Vec<Token> {
        tokens.iter().map(|token| self.normalize(token)).collect()
    }
}
