use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeywordError {
    #[error("Input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("No keyword planner files matching '{pattern}' in {}", dir.display())]
    NoPlannerFiles { pattern: String, dir: PathBuf },

    #[error("Missing column '{column}' in {}", path.display())]
    MissingColumn { column: String, path: PathBuf },

    #[error("Expected {expected} columns in {}, found {found}", path.display())]
    ColumnCount { expected: usize, found: usize, path: PathBuf },

    #[error("Invalid number '{value}' in column '{column}' for keyword '{keyword}'")]
    InvalidNumber { column: String, keyword: String, value: String },

    #[error("Unknown search volume bucket '{label}' for keyword '{keyword}'")]
    UnknownVolumeBucket { keyword: String, label: String },

    #[error("Unknown text encoding '{0}'")]
    UnknownEncoding(String),

    #[error("File is not valid {encoding}: {}", path.display())]
    Decode { encoding: String, path: PathBuf },

    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] globset::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KeywordError>;
