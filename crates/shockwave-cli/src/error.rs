//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No scenario given and no default configured.
    #[error("No scenario selected. Pass --scenario <id> or set default_scenario.")]
    NoScenario,

    /// Invalid count for a `--top` style option.
    #[error("Invalid count: {0}. Must be at least 1.")]
    InvalidCount(usize),

    /// Refusing to overwrite an existing file.
    #[error("{} already exists. Use --force to overwrite.", .0.display())]
    OutputExists(PathBuf),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CliError::InvalidCount(0).to_string(),
            "Invalid count: 0. Must be at least 1."
        );
        assert_eq!(
            CliError::OutputExists(PathBuf::from("out.csv")).to_string(),
            "out.csv already exists. Use --force to overwrite."
        );
        assert!(CliError::NoScenario.to_string().contains("--scenario"));
    }
}
