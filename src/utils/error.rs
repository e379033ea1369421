use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("DataFrame error: {0}")]
    PolarsError(#[from] polars::prelude::PolarsError),

    #[error("Spreadsheet processing error: {message}")]
    SpreadsheetError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to download any {dataset} data")]
    NoData { dataset: String },

    #[error("Schema mismatch on column '{column}': {left} vs {right}")]
    SchemaMismatch {
        column: String,
        left: String,
        right: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Io,
}

impl EtlError {
    pub fn spreadsheet(message: impl Into<String>) -> Self {
        EtlError::SpreadsheetError {
            message: message.into(),
        }
    }

    pub fn processing(message: impl Into<String>) -> Self {
        EtlError::ProcessingError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ApiError(_) | EtlError::NoData { .. } => ErrorCategory::Network,
            EtlError::PolarsError(_)
            | EtlError::SpreadsheetError { .. }
            | EtlError::SchemaMismatch { .. }
            | EtlError::ProcessingError { .. } => ErrorCategory::Data,
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            EtlError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::ApiError(_) => "Check network connectivity and the configured base URLs",
            EtlError::NoData { .. } => {
                "Check the year range (start must not exceed end) and that the source publishes those years"
            }
            EtlError::PolarsError(_) => "The source CSV is malformed; retry later or narrow the year range",
            EtlError::SpreadsheetError { .. } => "The workbook could not be read; verify the source file",
            EtlError::SchemaMismatch { .. } => {
                "Column types changed between years; narrow the year range to isolate the year"
            }
            EtlError::ProcessingError { .. } => "Inspect the debug log with --verbose",
            EtlError::IoError(_) => "Check that the output path is writable",
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
