//! Error types for distribution validation
//!
//! Provides a unified error type for all dist-check crates.

use thiserror::Error;

/// Core error type for distribution validation
#[derive(Error, Debug)]
pub enum Error {
    /// Unknown distribution or vector name
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid or empty truncation setup, bad distribution parameters,
    /// non-positive renormalization mass
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Vectors that cannot be joined element-wise
    #[error("Schema error: {0}")]
    Schema(String),

    /// Argument outside the domain of a special function
    #[error("Domain error: {0}")]
    Domain(String),

    /// Malformed value in a persisted vector
    #[error("Parse error on line {line}: {value:?} is not a number")]
    Parse { line: usize, value: String },

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader/writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a name missing from a registry or store
    pub fn not_found(kind: &str, name: &str) -> Self {
        Self::NotFound(format!("{kind} '{name}'"))
    }

    /// Create an error for a distribution with no truncation intervals
    pub fn empty_truncation(name: &str) -> Self {
        Self::Configuration(format!("Truncation set for '{name}' is empty"))
    }

    /// Create an error for a truncation set whose estimated mass is not positive
    pub fn non_positive_mass(name: &str, mass: f64) -> Self {
        Self::Configuration(format!(
            "Truncation set for '{name}' has non-positive mass {mass}"
        ))
    }

    /// Create an error for vectors of different lengths
    pub fn length_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::Schema(format!(
            "Length mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a non-positive special-function argument
    pub fn non_positive_argument(function: &str, z: f64) -> Self {
        Self::Domain(format!("{function} requires z > 0, got {z}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NotFound("distribution 'zipf'".to_string());
        assert_eq!(err.to_string(), "Not found: distribution 'zipf'");

        let err = Error::Configuration("bad interval".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad interval");

        let err = Error::Schema("grid differs".to_string());
        assert_eq!(err.to_string(), "Schema error: grid differs");

        let err = Error::Domain("z <= 0".to_string());
        assert_eq!(err.to_string(), "Domain error: z <= 0");

        let err = Error::Parse {
            line: 3,
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Parse error on line 3: \"abc\" is not a number"
        );
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::not_found("distribution", "zipf");
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(err.to_string(), "Not found: distribution 'zipf'");

        let err = Error::empty_truncation("gamma");
        assert!(matches!(err, Error::Configuration(_)));

        let err = Error::non_positive_mass("bernoulli", 0.0);
        assert_eq!(
            err.to_string(),
            "Configuration error: Truncation set for 'bernoulli' has non-positive mass 0"
        );

        let err = Error::length_mismatch(101, 50, "compare");
        assert_eq!(
            err.to_string(),
            "Schema error: Length mismatch in compare: expected 101, got 50"
        );

        let err = Error::non_positive_argument("closed_form", -1.5);
        assert_eq!(err.to_string(), "Domain error: closed_form requires z > 0, got -1.5");
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {
                assert!(err.to_string().contains("file not found"));
            }
            _ => panic!("Wrong error type"),
        }
    }
}
