//! Error types for file loading.

use std::path::PathBuf;

use shockwave_portfolio::PortfolioError;
use thiserror::Error;

/// Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors raised while reading holdings or scenario files.
#[derive(Error, Debug)]
pub enum FileError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file has no data rows.
    #[error("The file appears to be empty")]
    EmptyFile,

    /// Required header columns are absent.
    #[error("Missing required columns: {}", .columns.join(", "))]
    MissingColumns {
        /// Names of the missing columns.
        columns: Vec<String>,
    },

    /// A value cell is not a number.
    #[error("Invalid value for asset \"{name}\" at row {row}")]
    InvalidValue {
        /// Asset name on the offending row.
        name: String,
        /// 1-based data row.
        row: usize,
    },

    /// A value cell is negative.
    #[error("Negative value for asset \"{name}\" at row {row}")]
    NegativeValue {
        /// Asset name on the offending row.
        name: String,
        /// 1-based data row.
        row: usize,
    },

    /// A category cell does not match the taxonomy.
    #[error("Unknown {column} '{value}' at row {row}")]
    UnknownCategory {
        /// Column name.
        column: String,
        /// Rejected cell value.
        value: String,
        /// 1-based data row.
        row: usize,
    },

    /// File extension is not recognised.
    #[error("Unsupported file format: {}", .path.display())]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// Domain validation failed.
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(FileError::EmptyFile.to_string(), "The file appears to be empty");

        let err = FileError::MissingColumns {
            columns: vec!["value".into(), "region".into()],
        };
        assert_eq!(err.to_string(), "Missing required columns: value, region");

        let err = FileError::InvalidValue {
            name: "Tesla".into(),
            row: 3,
        };
        assert_eq!(err.to_string(), "Invalid value for asset \"Tesla\" at row 3");
    }

    #[test]
    fn test_portfolio_error_is_transparent() {
        let err: FileError = PortfolioError::scenario_not_found("x").into();
        assert_eq!(err.to_string(), "Scenario not found: x");
    }
}
