use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A unique column index assigned to a token by a `Vocabulary`. Indices are contiguous,
/// starting at zero.
pub type TokenId = usize;

/// The number of times a token occurs within a document (or across a corpus).
pub type TokenCount = usize;

/// A single row of a count matrix, aligned to the column order of a `Vocabulary`.
pub type CountRow = Vec<TokenCount>;

/// Represents a map of tokens to their frequency counts.
pub type TokenFrequencyMap = HashMap<Token, TokenCount>;

/// The class label attached to a message in a labeled dataset (e.g. `ham` or `spam`).
pub type Label = String;
