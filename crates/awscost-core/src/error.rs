//! Error types for awscost
//!
//! This module defines the error types used throughout the awscost
//! workspace. All errors are derived from `thiserror` for convenient error
//! handling and automatic `From` implementations.
//!
//! # Example
//!
//! ```
//! use awscost_core::error::{AwscostError, Result};
//!
//! fn example_function() -> Result<()> {
//!     // This will automatically convert io::Error to AwscostError
//!     let _file = std::fs::read_to_string("nonexistent.txt")?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Main error type for awscost operations
///
/// The only validated failure mode at the command surface is an unsupported
/// instance tier; the remaining variants cover serialization and the
/// optional estimate file write.
#[derive(Error, Debug)]
pub enum AwscostError {
    /// IO error occurred (e.g. writing the saved estimate)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unsupported instance tier supplied on the command line
    #[error("unsupported instance tier '{0}' (supported: t3.small, t3.medium, t3.large)")]
    UnknownTier(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Results in awscost
///
/// # Example
///
/// ```
/// use awscost_core::Result;
///
/// fn process_data() -> Result<String> {
///     Ok("Processed successfully".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, AwscostError>;
