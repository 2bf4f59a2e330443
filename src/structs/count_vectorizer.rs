use crate::config::DEFAULT_COUNT_VECTORIZER_CONFIG;
use crate::structs::{Analyzer, CountMatrix, Vocabulary};
use log::info;

#[derive(Debug, Clone)]
pub struct CountVectorizerConfig {
    /// Keep only this many of the most frequent tokens. `None` keeps all of them.
    pub max_features: Option<usize>,
}

/// Converts a collection of documents into a matrix of token counts.
///
/// `fit` learns the vocabulary, `transform` counts documents against it. Documents transformed
/// after fitting may contain unseen tokens; those are ignored.
pub struct CountVectorizer<'a> {
    config: CountVectorizerConfig,
    analyzer: Analyzer<'a>,
    vocabulary: Vocabulary,
}

impl<'a> CountVectorizer<'a> {
    pub fn new(analyzer: Analyzer<'a>) -> Self {
        Self::with_config(DEFAULT_COUNT_VECTORIZER_CONFIG, analyzer)
    }

    pub fn with_config(config: &CountVectorizerConfig, analyzer: Analyzer<'a>) -> Self {
        Self {
            config: config.clone(),
            analyzer,
            vocabulary: Vocabulary::default(),
        }
    }

    /// Learns the vocabulary of `documents`, replacing any previously learned one.
    pub fn fit<D: AsRef<str>>(&mut self, documents: &[D]) -> &Vocabulary {
        info!("Building vocabulary...");

        self.vocabulary = match self.config.max_features {
            Some(max_features) => Vocabulary::from_documents_with_max_features(
                documents,
                &self.analyzer,
                max_features,
            ),
            None => Vocabulary::from_documents(documents, &self.analyzer),
        };

        &self.vocabulary
    }

    /// Counts `documents` against the learned vocabulary.
    pub fn transform<D: AsRef<str>>(&self, documents: &[D]) -> CountMatrix {
        info!("Counting tokens...");

        CountMatrix::from_documents(documents, &self.analyzer, &self.vocabulary)
    }

    pub fn fit_transform<D: AsRef<str>>(&mut self, documents: &[D]) -> CountMatrix {
        self.fit(documents);
        self.transform(documents)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn analyzer(&self) -> &Analyzer<'a> {
        &self.analyzer
    }
}

impl Default for CountVectorizer<'_> {
    fn default() -> Self {
        Self::new(Analyzer::default())
    }
}
