use bag_of_words::{Analyzer, CountMatrix, CountRow, Token, Tokenizer, Vocabulary};
use std::{fs, path::Path};
pub mod constants;

// Helper function to get the documents from a test file (every line that is not a directive)
pub fn get_documents(file_path: &Path) -> Vec<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with("EXPECTED_VOCABULARY:")
                && !line.trim_start().starts_with("EXPECTED_ROW:")
                && !line.trim_start().starts_with("FILTER_STOP_WORDS:")
                && !line.trim_start().starts_with("COMMENT:")
        })
        .map(|line| line.to_string())
        .collect()
}

// Helper function to get the expected vocabulary from a test file
pub fn get_expected_vocabulary(file_path: &Path) -> Vec<Token> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .find_map(|line| {
            line.trim()
                .strip_prefix("EXPECTED_VOCABULARY:")
                .map(|tokens| tokens.split_whitespace().map(|t| t.to_string()).collect())
        })
        .unwrap_or_default()
}

// Helper function to get the expected rows from a test file, in order
pub fn get_expected_rows(file_path: &Path) -> Vec<CountRow> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix("EXPECTED_ROW:"))
        .map(|counts| {
            counts
                .split_whitespace()
                .map(|count| count.parse().expect("Invalid count in EXPECTED_ROW"))
                .collect()
        })
        .collect()
}

// Helper function to check whether the test file asks for stop word filtering
pub fn get_filter_stop_words(file_path: &Path) -> bool {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content.lines().any(|line| {
        line.trim()
            .strip_prefix("FILTER_STOP_WORDS:")
            .map_or(false, |value| value.trim() == "true")
    })
}

// Helper function to run the test for a single file
pub fn run_test_for_file(test_file_path: &Path) -> (Vocabulary, CountMatrix) {
    let documents = get_documents(test_file_path);

    let tokenizer = if get_filter_stop_words(test_file_path) {
        Tokenizer::stop_word_filtered_parser()
    } else {
        Tokenizer::bag_of_words_parser()
    };
    let analyzer = Analyzer::new(tokenizer);

    let vocabulary = Vocabulary::from_documents(&documents, &analyzer);
    let count_matrix = CountMatrix::from_documents(&documents, &analyzer, &vocabulary);

    let expected_vocabulary = get_expected_vocabulary(test_file_path);
    let expected_rows = get_expected_rows(test_file_path);

    assert_eq!(
        vocabulary.feature_names(),
        expected_vocabulary.as_slice(),
        "{} - Vocabulary mismatch",
        test_file_path.display()
    );

    assert_eq!(
        count_matrix.rows(),
        expected_rows.as_slice(),
        "{} - Row mismatch",
        test_file_path.display()
    );

    (vocabulary, count_matrix)
}
