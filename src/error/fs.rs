//! File system errors

use std::path::Path;

use super::AssetError;

/// Creates a file read error for `path`
pub fn read_failed(path: &Path, err: impl ToString) -> AssetError {
    AssetError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write error for `path`
pub fn write_failed(path: &Path, err: impl ToString) -> AssetError {
    AssetError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a directory walk error rooted at `path`
pub fn walk_failed(path: &Path, err: impl ToString) -> AssetError {
    AssetError::WalkFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an error for a destination that stopped accepting bytes
pub fn output_failed(err: impl ToString) -> AssetError {
    AssetError::OutputFailed {
        reason: err.to_string(),
    }
}
