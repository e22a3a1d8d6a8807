//! Error types and handling for assetpipe
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Sub-modules group convenience constructors by error domain:
//! - [`fs`]: File system errors (walking, reading, writing)
//! - [`server`]: Development server errors

pub mod fs;
pub mod server;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for assetpipe operations
#[derive(Error, Diagnostic, Debug)]
pub enum AssetError {
    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(
        code(assetpipe::fs::read_failed),
        help("Check that the file exists and is readable")
    )]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(assetpipe::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to walk directory: {path}: {reason}")]
    #[diagnostic(code(assetpipe::fs::walk_failed))]
    WalkFailed { path: String, reason: String },

    #[error("Failed to write output: {reason}")]
    #[diagnostic(code(assetpipe::fs::output_failed))]
    OutputFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(assetpipe::fs::io_error))]
    IoError { message: String },

    // Server errors
    #[error("Server error: {message}")]
    #[diagnostic(
        code(assetpipe::server::failed),
        help("Check that the port is free, or pick another one with --port")
    )]
    ServerFailed { message: String },
}

impl From<std::io::Error> for AssetError {
    fn from(err: std::io::Error) -> Self {
        AssetError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AssetError>;
