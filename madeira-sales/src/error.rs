//! Error types for loading the sales table.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalesError {
    #[error("failed to read sales data: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed sales CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("sales CSV is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("row {row}: VOLUME `{value}` is not a number")]
    InvalidVolume { row: usize, value: String },

    #[error("row {row}: unknown COD_MODELO `{value}`")]
    UnknownSaleType { row: usize, value: String },

    #[error("row {row}: expected {expected} fields, found {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: `{column}` is empty")]
    EmptyLabel { row: usize, column: &'static str },

    #[error("sales CSV contains no records")]
    Empty,
}
