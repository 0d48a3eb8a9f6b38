use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrateError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Missing required CSV header: {0}")]
    MissingHeader(String),

    #[error("Missing required value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },

    #[error("Failed to initialize logger: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    #[error("Invalid progress bar template: {0}")]
    ProgressTemplateError(#[from] indicatif::style::TemplateError),
}

pub type Result<T> = std::result::Result<T, CrateError>;
