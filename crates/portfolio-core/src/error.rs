//! Error types for the portfolio page

use thiserror::Error;

use crate::contact::FormField;

/// Main error type for portfolio page operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Contact form rejected before submission
    #[error("Validation error: {0}")]
    Validation(#[from] FormError),

    /// Embedded project catalog could not be parsed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration value out of range
    #[error("Config error: {0}")]
    Config(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Contact form validation failure.
///
/// The display strings are shown verbatim in the error toast.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// One or more required fields are empty
    #[error("Mohon lengkapi semua field!")]
    IncompleteFields { missing: Vec<FormField> },

    /// Email does not look like `local@domain.tld`
    #[error("Format email tidak valid!")]
    InvalidEmail(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_error_display() {
        let err = FormError::IncompleteFields {
            missing: vec![FormField::Subject],
        };
        assert_eq!(err.to_string(), "Mohon lengkapi semua field!");
        assert_eq!(
            FormError::InvalidEmail("a@b".into()).to_string(),
            "Format email tidak valid!"
        );
    }

    #[test]
    fn test_error_from_form_error() {
        let err: PortfolioError = FormError::InvalidEmail("x".into()).into();
        assert!(matches!(err, PortfolioError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: Format email tidak valid!");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }
}
