use std::fs;
use test_utils::constants::TEST_FILES_DIRECTORY;
use test_utils::run_test_for_file;

#[cfg(test)]
mod test_files_tests {
    use super::*;

    #[test]
    fn test_all_test_files() {
        let mut test_file_count = 0;

        for entry in fs::read_dir(&*TEST_FILES_DIRECTORY).expect("Failed to read test files") {
            let path = entry.expect("Failed to read directory entry").path();

            if path.extension().map_or(false, |extension| extension == "txt") {
                eprintln!("Testing file: {}", path.display());

                let (vocabulary, count_matrix) = run_test_for_file(&path);
                assert_eq!(count_matrix.shape().1, vocabulary.len());

                test_file_count += 1;
            }
        }

        assert!(test_file_count > 0, "No test files found");
    }
}
