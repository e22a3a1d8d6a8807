//! Development server errors

use super::AssetError;

/// Creates a server error
pub fn failed(message: impl Into<String>) -> AssetError {
    AssetError::ServerFailed {
        message: message.into(),
    }
}
