use bag_of_words::count_tokens_in_documents;
use log::{error, info};
use std::io::{self, Read};

fn main() {
    // Initialize the logger
    env_logger::init();

    // Read the input text from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    // One document per non-blank line
    let documents: Vec<&str> = input
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    info!("Read {} documents from stdin", documents.len());

    let (vocabulary, count_matrix) = count_tokens_in_documents(&documents);

    println!("Bag of Words Representation:");
    println!("{}", count_matrix);

    println!("\nVocabulary Mapping:");
    println!("{}", vocabulary);
}
