use bag_of_words::constants::DEFAULT_DATASET_FILE_NAME;
use bag_of_words::{
    read_labeled_messages_from_path, Analyzer, CountVectorizer, CountVectorizerConfig, Error,
    Tokenizer,
};
use log::error;
use std::env;

const MAX_FEATURES: usize = 2500;
const PREVIEW_MESSAGE_COUNT: usize = 5;
const PREVIEW_FEATURE_NAME_COUNT: usize = 20;
const PREVIEW_COLUMN_COUNT: usize = 10;

fn main() {
    env_logger::init();

    let dataset_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATASET_FILE_NAME.to_string());

    println!("Loading SMS Spam Collection dataset...");

    let labeled_messages = match read_labeled_messages_from_path(&dataset_path) {
        Ok(labeled_messages) => labeled_messages,
        Err(Error::DatasetNotFound(path)) => {
            println!(
                "Error: '{}' file not found. Please ensure it is in the same directory.",
                path.display()
            );
            return;
        }
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            std::process::exit(1);
        }
    };

    println!("Dataset loaded successfully: {} records.", labeled_messages.len());
    println!("\nFirst {} rows:", PREVIEW_MESSAGE_COUNT);
    for (index, labeled_message) in labeled_messages
        .iter()
        .take(PREVIEW_MESSAGE_COUNT)
        .enumerate()
    {
        println!(
            "{}  {:<5} {}",
            index, labeled_message.label, labeled_message.message
        );
    }

    let corpus: Vec<&str> = labeled_messages
        .iter()
        .map(|labeled_message| labeled_message.message.as_str())
        .collect();

    println!("\nCreating Bag of Words model...");
    let mut count_vectorizer = CountVectorizer::with_config(
        &CountVectorizerConfig {
            max_features: Some(MAX_FEATURES),
        },
        Analyzer::new(Tokenizer::bag_of_words_parser()),
    );
    let count_matrix = count_vectorizer.fit_transform(&corpus);

    println!("Shape of Bag of Words Matrix: {:?}", count_matrix.shape());

    let feature_names = count_vectorizer.vocabulary().feature_names();
    println!(
        "\nFirst {} features (words in vocabulary):",
        PREVIEW_FEATURE_NAME_COUNT
    );
    println!(
        "{:?}",
        &feature_names[..PREVIEW_FEATURE_NAME_COUNT.min(feature_names.len())]
    );

    println!(
        "\nSample of the Bag of Words Matrix (first {} rows, first {} columns):",
        PREVIEW_MESSAGE_COUNT, PREVIEW_COLUMN_COUNT
    );
    println!(
        "{}",
        count_matrix.slice(PREVIEW_MESSAGE_COUNT, PREVIEW_COLUMN_COUNT)
    );
}
