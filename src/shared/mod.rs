/// Shared kernel - error types, result alias and security helpers
pub mod error;
pub mod security;

pub use error::{ExitCode, ResolutionError};

/// Result type used across all layers
pub type Result<T> = anyhow::Result<T>;
