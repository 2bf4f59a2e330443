use bag_of_words::constants::{DEFAULT_DATASET_FILE_NAME, IRREGULAR_VERB_SENTENCE};
use bag_of_words::{
    read_labeled_messages_from_path, Analyzer, CountVectorizer, CountVectorizerConfig, Error,
    Lemmatizer, Lexicon, NormalizationComparison, PartOfSpeech, PorterStemmer, Tokenizer,
};
use log::{error, info};
use std::env;

const SAMPLE_MESSAGE_COUNT: usize = 5;
const MAX_FEATURES: usize = 10;

fn main() {
    env_logger::init();

    // Loaded once and shared by every lemmatizer below
    let lexicon = match Lexicon::embedded() {
        Ok(lexicon) => lexicon,
        Err(e) => {
            error!("Failed to load lexicon: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Lexicon ready: {} base forms, {} exceptions",
        lexicon.base_form_count(),
        lexicon.exception_count()
    );

    let stemmer = PorterStemmer::new();
    let lemmatizer = Lemmatizer::new(&lexicon);

    let dataset_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATASET_FILE_NAME.to_string());

    let labeled_messages = match read_labeled_messages_from_path(&dataset_path) {
        Ok(labeled_messages) => labeled_messages,
        Err(Error::DatasetNotFound(_)) => {
            println!("Dataset not found.");
            return;
        }
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            std::process::exit(1);
        }
    };

    let mut sample_messages: Vec<&str> = labeled_messages
        .iter()
        .take(SAMPLE_MESSAGE_COUNT)
        .map(|labeled_message| labeled_message.message.as_str())
        .collect();
    sample_messages.push(IRREGULAR_VERB_SENTENCE);

    let comparison =
        NormalizationComparison::from_documents(&sample_messages, &stemmer, &lemmatizer);
    println!("{}", comparison);

    println!("\n{}", "=".repeat(50));
    println!("Why Lemmatization is often 'Better':");
    println!("Look at the last sentence: 'studies historically'");
    println!(
        "Stemmer got: {:?}",
        [stemmer.stem("studies"), stemmer.stem("historically")]
    );
    println!(
        "Lemmatizer got: {:?}",
        [
            lemmatizer.lemmatize_with_pos("studies", PartOfSpeech::Verb),
            lemmatizer.lemmatize("historically")
        ]
    );
    println!(
        "(Note: Lemmatizer often needs POS tags to be perfect, e.g., 'studies' -> 'study' needs pos='v')"
    );

    let mut count_vectorizer = CountVectorizer::with_config(
        &CountVectorizerConfig {
            max_features: Some(MAX_FEATURES),
        },
        Analyzer::new(Tokenizer::bag_of_words_parser()),
    );
    let count_matrix = count_vectorizer.fit_transform(&comparison.lemmatized_corpus());

    println!(
        "\nBag of Words on Lemmatized Data (Top {} features):",
        MAX_FEATURES
    );
    println!("{:?}", count_vectorizer.vocabulary().feature_names());
    println!("{}", count_matrix);
}
