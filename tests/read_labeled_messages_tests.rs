use bag_of_words::{
    read_labeled_messages_from_path, read_labeled_messages_from_string, Error, LabeledMessage,
};
use std::path::PathBuf;
use test_utils::constants::{TEST_LABELED_MESSAGES_TSV_PATH, TEST_MALFORMED_MESSAGES_TSV_PATH};

#[cfg(test)]
mod read_labeled_messages_tests {
    use super::*;

    #[test]
    fn test_reads_labels_and_messages() {
        let labeled_messages =
            read_labeled_messages_from_path(&*TEST_LABELED_MESSAGES_TSV_PATH).unwrap();

        assert_eq!(labeled_messages.len(), 4);
        assert_eq!(
            labeled_messages[0],
            LabeledMessage::new("ham", "Ok lar... Joking wif u oni...")
        );
        assert_eq!(labeled_messages[1].label, "spam");
        assert!(labeled_messages[2].message.contains("don't"));
    }

    #[test]
    fn test_quotes_are_kept_verbatim() {
        let labeled_messages =
            read_labeled_messages_from_path(&*TEST_LABELED_MESSAGES_TSV_PATH).unwrap();

        assert_eq!(
            labeled_messages[3].message,
            "I \"quoted\" this, and it still parses"
        );
    }

    #[test]
    fn test_missing_file_is_reported() {
        let path = PathBuf::from("tests/test_data_files/does_not_exist.tsv");

        match read_labeled_messages_from_path(&path) {
            Err(Error::DatasetNotFound(missing_path)) => assert_eq!(missing_path, path),
            other => panic!("Expected DatasetNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_row_is_rejected() {
        let result = read_labeled_messages_from_path(&*TEST_MALFORMED_MESSAGES_TSV_PATH);

        match result {
            Err(Error::ParserError(message)) => assert!(message.contains("line 2"), "{}", message),
            other => panic!("Expected ParserError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        let labeled_messages = read_labeled_messages_from_string("").unwrap();
        assert!(labeled_messages.is_empty());
    }

    #[test]
    fn test_error_display() {
        let error = Error::DatasetNotFound(PathBuf::from("SMSSpamCollection"));
        assert_eq!(error.to_string(), "Dataset Not Found: SMSSpamCollection");

        let error = Error::ShapeMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            error.to_string(),
            "Shape Mismatch: expected row length 3, got 2"
        );
    }
}
