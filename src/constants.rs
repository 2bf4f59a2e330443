/// English stop words, lower-cased.
///
/// Mirrors the widely used NLTK English list so that filtered output lines up with what most
/// readers of bag-of-words material expect.
pub const STOP_WORDS: &[&str] = &[
    "i",
    "me",
    "my",
    "myself",
    "we",
    "our",
    "ours",
    "ourselves",
    "you",
    "you're",
    "you've",
    "you'll",
    "you'd",
    "your",
    "yours",
    "yourself",
    "yourselves",
    "he",
    "him",
    "his",
    "himself",
    "she",
    "she's",
    "her",
    "hers",
    "herself",
    "it",
    "it's",
    "its",
    "itself",
    "they",
    "them",
    "their",
    "theirs",
    "themselves",
    "what",
    "which",
    "who",
    "whom",
    "this",
    "that",
    "that'll",
    "these",
    "those",
    "am",
    "is",
    "are",
    "was",
    "were",
    "be",
    "been",
    "being",
    "have",
    "has",
    "had",
    "having",
    "do",
    "does",
    "did",
    "doing",
    "a",
    "an",
    "the",
    "and",
    "but",
    "if",
    "or",
    "because",
    "as",
    "until",
    "while",
    "of",
    "at",
    "by",
    "for",
    "with",
    "about",
    "against",
    "between",
    "into",
    "through",
    "during",
    "before",
    "after",
    "above",
    "below",
    "to",
    "from",
    "up",
    "down",
    "in",
    "out",
    "on",
    "off",
    "over",
    "under",
    "again",
    "further",
    "then",
    "once",
    "here",
    "there",
    "when",
    "where",
    "why",
    "how",
    "all",
    "any",
    "both",
    "each",
    "few",
    "more",
    "most",
    "other",
    "some",
    "such",
    "no",
    "nor",
    "not",
    "only",
    "own",
    "same",
    "so",
    "than",
    "too",
    "very",
    "s",
    "t",
    "can",
    "will",
    "just",
    "don",
    "don't",
    "should",
    "should've",
    "now",
    "d",
    "ll",
    "m",
    "o",
    "re",
    "ve",
    "y",
    "ain",
    "aren",
    "aren't",
    "couldn",
    "couldn't",
    "didn",
    "didn't",
    "doesn",
    "doesn't",
    "hadn",
    "hadn't",
    "hasn",
    "hasn't",
    "haven",
    "haven't",
    "isn",
    "isn't",
    "ma",
    "mightn",
    "mightn't",
    "mustn",
    "mustn't",
    "needn",
    "needn't",
    "shan",
    "shan't",
    "shouldn",
    "shouldn't",
    "wasn",
    "wasn't",
    "weren",
    "weren't",
    "won",
    "won't",
    "wouldn",
    "wouldn't",
];

/// Default file name of the tab-separated SMS message dataset.
pub const DEFAULT_DATASET_FILE_NAME: &str = "SMSSpamCollection";

/// Sentences used by the bag-of-words demonstration.
pub const DEMO_DOCUMENTS: &[&str] = &[
    "I love deep learning",
    "I love machine learning",
    "I enjoy learning deep learning concepts",
    "Machine learning is fascinating",
    "Deep learning is a subset of machine learning",
];

/// Appended to the dataset sample to show irregular verb forms.
pub const IRREGULAR_VERB_SENTENCE: &str = "I went running and studies historically.";

/// Width of each column in the stemming vs. lemmatization comparison table.
pub const COMPARISON_COLUMN_WIDTH: usize = 50;

/// Maximum number of characters rendered inside a comparison column.
pub const COMPARISON_CELL_MAX_CHARS: usize = 48;

pub(crate) const EMBEDDED_LEXICON_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/lexicon.csv.gz"));

pub(crate) const EMBEDDED_LEXICON_EXCEPTIONS_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/lexicon_exceptions.csv.gz"));
