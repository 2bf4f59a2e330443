use crate::structs::{Analyzer, Vocabulary};
use crate::types::{CountRow, Token};
use crate::Error;
use log::debug;
use std::fmt;

/// A dense table of token counts: ordered column names plus one fixed-width row per document.
///
/// Every row has exactly as many entries as there are columns; constructors enforce this.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountMatrix {
    columns: Vec<Token>,
    rows: Vec<CountRow>,
}

impl CountMatrix {
    /// Creates a matrix from explicit columns and rows.
    ///
    /// # Errors
    /// * `Error::ShapeMismatch` if any row length differs from the number of columns.
    pub fn new(columns: Vec<Token>, rows: Vec<CountRow>) -> Result<Self, Error> {
        if let Some(row) = rows.iter().find(|row| row.len() != columns.len()) {
            return Err(Error::ShapeMismatch {
                expected: columns.len(),
                actual: row.len(),
            });
        }

        Ok(Self { columns, rows })
    }

    /// Counts each document's tokens against a previously built vocabulary.
    ///
    /// Tokens missing from the vocabulary are ignored and never expand it. With an empty
    /// vocabulary every row is empty.
    ///
    /// # Arguments
    /// * `documents` - The corpus, one row is produced per document.
    /// * `analyzer` - Must be the analyzer the vocabulary was built with.
    /// * `vocabulary` - Determines the columns and their order.
    pub fn from_documents<D: AsRef<str>>(
        documents: &[D],
        analyzer: &Analyzer,
        vocabulary: &Vocabulary,
    ) -> Self {
        let rows: Vec<CountRow> = documents
            .iter()
            .map(|document| {
                Self::count_tokens(&analyzer.analyze(document.as_ref()), vocabulary)
            })
            .collect();

        let matrix = Self {
            columns: vocabulary.feature_names().to_vec(),
            rows,
        };

        debug!("Built count matrix of shape {:?}", matrix.shape());

        matrix
    }

    /// Builds a single row of counts aligned to the vocabulary's column order.
    pub fn count_tokens(tokens: &[Token], vocabulary: &Vocabulary) -> CountRow {
        let mut row = vec![0; vocabulary.len()];

        for token_id in vocabulary.get_filtered_token_ids(tokens) {
            if let Some(count) = row.get_mut(token_id) {
                *count += 1;
            }
        }

        row
    }

    pub fn columns(&self) -> &[Token] {
        &self.columns
    }

    pub fn rows(&self) -> &[CountRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&CountRow> {
        self.rows.get(index)
    }

    /// Returns `(number of rows, number of columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Copies the top-left corner of the matrix, at most `max_rows` by `max_columns`.
    pub fn slice(&self, max_rows: usize, max_columns: usize) -> Self {
        let column_count = max_columns.min(self.columns.len());

        Self {
            columns: self.columns[..column_count].to_vec(),
            rows: self
                .rows
                .iter()
                .take(max_rows)
                .map(|row| row[..column_count].to_vec())
                .collect(),
        }
    }

    /// Sums each column across all rows.
    pub fn column_totals(&self) -> CountRow {
        let mut totals = vec![0; self.columns.len()];

        for row in &self.rows {
            for (total, count) in totals.iter_mut().zip(row) {
                *total += count;
            }
        }

        totals
    }
}

impl fmt::Display for CountMatrix {
    /// Renders a header of column names followed by one indexed, right-aligned row per document.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row_count, column_count) = self.shape();

        if row_count == 0 || column_count == 0 {
            return write!(
                f,
                "Empty CountMatrix ({} rows x {} columns)",
                row_count, column_count
            );
        }

        let index_width = (row_count - 1).to_string().len();
        let column_widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(column_index, column)| {
                self.rows
                    .iter()
                    .map(|row| row[column_index].to_string().len())
                    .chain(std::iter::once(column.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:width$}", "", width = index_width)?;
        for (column, width) in self.columns.iter().zip(&column_widths) {
            write!(f, "  {:>width$}", column, width = *width)?;
        }

        for (row_index, row) in self.rows.iter().enumerate() {
            write!(f, "\n{:<width$}", row_index, width = index_width)?;
            for (count, width) in row.iter().zip(&column_widths) {
                write!(f, "  {:>width$}", count, width = *width)?;
            }
        }

        Ok(())
    }
}
