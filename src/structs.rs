pub mod analyzer;
pub use analyzer::Analyzer;

pub mod count_matrix;
pub use count_matrix::CountMatrix;

pub mod count_vectorizer;
pub use count_vectorizer::{CountVectorizer, CountVectorizerConfig};

pub mod error;
pub use error::Error;

pub mod labeled_message;
pub use labeled_message::LabeledMessage;

pub mod lemmatizer;
pub use lemmatizer::Lemmatizer;

pub mod lexicon;
pub use lexicon::Lexicon;

pub mod normalization_comparison;
pub use normalization_comparison::{NormalizationComparison, NormalizationComparisonRow};

pub mod part_of_speech;
pub use part_of_speech::PartOfSpeech;

pub mod porter_stemmer;
pub use porter_stemmer::PorterStemmer;

pub mod token_normalizer;
pub use token_normalizer::TokenNormalizer;

pub mod tokenizer;
pub use tokenizer::{Tokenizer, TokenizerConfig};

pub mod vocabulary;
pub use vocabulary::Vocabulary;
