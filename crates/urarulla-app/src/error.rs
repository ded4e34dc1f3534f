//! Urarulla host error types.

use thiserror::Error;
use urarulla_content::error::LoadError;
use urarulla_core::error::DomainError;

/// Startup and runtime errors for the host.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable or settings file is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Content failed to load. Fatal at startup.
    #[error("content error: {0}")]
    Load(#[from] LoadError),

    /// A session operation was rejected.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A console reply could not be serialized.
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),

    /// Console I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_failure_converts_to_render_error() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();

        let err = AppError::from(source);

        assert!(matches!(err, AppError::Render(_)));
        assert!(err.to_string().starts_with("render error:"));
    }
}
