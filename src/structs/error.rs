use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The dataset file does not exist. Callers are expected to report this and return cleanly.
    DatasetNotFound(PathBuf),
    ParserError(String),
    LexiconError(String),
    ShapeMismatch { expected: usize, actual: usize },
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DatasetNotFound(path) => {
                write!(f, "Dataset Not Found: {}", path.display())
            }
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::LexiconError(msg) => write!(f, "Lexicon Error: {}", msg),
            Error::ShapeMismatch { expected, actual } => write!(
                f,
                "Shape Mismatch: expected row length {}, got {}",
                expected, actual
            ),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}
