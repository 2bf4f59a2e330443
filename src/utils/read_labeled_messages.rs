use crate::structs::LabeledMessage;
use crate::Error;
use csv::ReaderBuilder;
use log::info;
use std::fs;
use std::io::{Cursor, ErrorKind};
use std::path::Path;

/// Reads a tab-separated file with two unlabeled columns (label, message) into memory.
///
/// # Errors
/// * `Error::DatasetNotFound` if the file does not exist.
/// * `Error::ParserError` if a row does not have exactly two fields.
pub fn read_labeled_messages_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<LabeledMessage>, Error> {
    let path = path.as_ref();

    let tsv = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::DatasetNotFound(path.to_path_buf()),
        _ => Error::IoError(err),
    })?;

    let labeled_messages = read_labeled_messages_from_string(&tsv)?;

    info!(
        "Loaded {} labeled messages from {}",
        labeled_messages.len(),
        path.display()
    );

    Ok(labeled_messages)
}

pub fn read_labeled_messages_from_string(tsv: &str) -> Result<Vec<LabeledMessage>, Error> {
    // Messages may contain stray quotes, so quoting is disabled entirely
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(Cursor::new(tsv));

    let mut labeled_messages = Vec::new();

    for record in reader.records() {
        let record = record?;

        match (record.get(0), record.get(1), record.len()) {
            (Some(label), Some(message), 2) => {
                labeled_messages.push(LabeledMessage::new(label, message));
            }
            _ => {
                let line = record.position().map_or(0, |position| position.line());

                return Err(Error::ParserError(format!(
                    "Expected 2 tab-separated fields on line {}, found {}",
                    line,
                    record.len()
                )));
            }
        }
    }

    Ok(labeled_messages)
}
