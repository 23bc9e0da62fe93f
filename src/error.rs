//! Error types and query validation for loadlens

use serde::Serialize;
use std::fmt;

/// Application error types
#[derive(Debug, Serialize)]
pub enum AppError {
    InvalidInput(String),
    TokenMissing(String),
    FetchFailed(String),
    MalformedResponse(String),
    Timeout(String),
    ConfigError(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::TokenMissing(msg) => write!(f, "Token missing: {}", msg),
            AppError::FetchFailed(msg) => write!(f, "Fetch failed: {}", msg),
            AppError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            AppError::Timeout(msg) => write!(f, "Timeout: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Stable error code for machine-readable output
    #[allow(dead_code)]
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::TokenMissing(_) => "token_missing",
            AppError::FetchFailed(_) => "fetch_failed",
            AppError::MalformedResponse(_) => "malformed_response",
            AppError::Timeout(_) => "timeout",
            AppError::ConfigError(_) => "config_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Convert reqwest::Error to AppError
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(err.to_string())
        } else if err.is_connect() || err.is_request() {
            AppError::FetchFailed(err.to_string())
        } else if err.is_decode() {
            AppError::MalformedResponse(err.to_string())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

/// Convert serde_json::Error to AppError
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Convert std::io::Error to AppError
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

/// Validation for raw search queries arriving from the CLI
pub fn validate_query(query: &str) -> Result<(), AppError> {
    if query.trim().is_empty() {
        return Err(AppError::InvalidInput("Query cannot be empty".to_string()));
    }

    if query.len() > 500 {
        return Err(AppError::InvalidInput(
            "Query too long, maximum 500 characters".to_string(),
        ));
    }

    Ok(())
}

/// Normalize a query for matching: Unicode NFKC, trimmed, lowercased.
///
/// Every fetcher and the ranker receive queries in this form; fetchers do
/// not re-normalize.
pub fn normalize_query(query: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    query.nfkc().collect::<String>().trim().to_lowercase()
}
