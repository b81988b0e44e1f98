/*!
 * Error types for docproof.
 *
 * One enum per layer: the completion service, `.docx` input/output, the
 * editorial pipeline, and `AppError` on top for the binary.
 */

use thiserror::Error;

/// Failures talking to a completion service
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request could not be sent or the response body could not be received
    #[error("Completion request failed: {0}")]
    RequestFailed(String),

    /// The service answered with a body we could not decode
    #[error("Unreadable completion response: {0}")]
    ParseError(String),

    /// Non-success HTTP status not covered by a more specific variant
    #[error("Completion service returned {status_code}: {message}")]
    ApiError {
        status_code: u16,
        message: String,
    },

    /// The endpoint could not be reached
    #[error("Cannot reach completion service: {0}")]
    ConnectionError(String),

    /// HTTP 429
    #[error("Completion service rate limit hit: {0}")]
    RateLimitExceeded(String),

    /// HTTP 401 or 403
    #[error("Completion service rejected the API key: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while reading or writing `.docx` files
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The input document could not be opened or parsed
    #[error("Failed to read document {path}: {reason}")]
    Read {
        /// Path of the document
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// The output document could not be packed or saved
    #[error("Failed to write document {path}: {reason}")]
    Write {
        /// Path of the document
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// No `.docx` file was found in the input directory
    #[error("No .docx file found in directory: {0}")]
    NoInputFile(String),
}

/// Errors that abort proofreading of a document
#[derive(Error, Debug)]
pub enum ProofreadingError {
    #[error("Editorial call failed: {0}")]
    Provider(#[from] ProviderError),
}

/// Top-level error for a docproof run
#[derive(Error, Debug)]
pub enum AppError {
    /// Filesystem failure outside document parsing
    #[error("File error: {0}")]
    File(String),

    /// Invalid or inconsistent configuration
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Completion error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Proofreading error: {0}")]
    Proofreading(#[from] ProofreadingError),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        // Keep the whole context chain
        Self::Unknown(format!("{:#}", error))
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
