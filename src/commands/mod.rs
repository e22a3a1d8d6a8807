//! Command implementations for the assetpipe CLI

pub mod build;
pub mod completions;
pub mod version;
pub mod watch;
