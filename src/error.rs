//! Error types for Cosmic Reader
//!
//! This module defines all custom error types used throughout the application.
//! Error types are organized by category for clear error handling and user-friendly messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type encompassing all error categories
#[derive(Error, Debug)]
pub enum AppError {
    /// Toolbar construction and usage errors
    #[error(transparent)]
    Toolbar(#[from] ToolbarError),

    /// Document file errors
    #[error(transparent)]
    File(#[from] FileError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Recent documents errors
    #[error(transparent)]
    Recent(#[from] RecentError),
}

/// Toolbar precondition violations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ToolbarError {
    /// Toolbar built without an owning window
    #[error("Toolbar requires an owning window")]
    MissingWindow,

    /// Operation invoked before the toolbar was constructed
    #[error("Toolbar is not initialized")]
    NotInitialized,
}

/// Document file errors
#[derive(Error, Debug)]
pub enum FileError {
    /// File not found at specified path
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Path is not a file
    #[error("Path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// File is too large to open
    #[error("File too large: {path} ({size} bytes, max {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Error reading file
    #[error("Could not read file: {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is password protected
    #[error("Document is encrypted: {path}")]
    Encrypted { path: PathBuf },

    /// Document could not be parsed
    #[error("Could not parse document: {path}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    /// Document parsed but contains no pages
    #[error("Document has no pages: {path}")]
    NoPages { path: PathBuf },
}

/// Configuration related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error loading configuration file
    #[error("Could not load configuration: {0}")]
    LoadError(String),

    /// Error saving configuration
    #[error("Could not save configuration: {0}")]
    SaveError(String),

    /// Error parsing configuration
    #[error("Invalid configuration format: {0}")]
    ParseError(String),

    /// Invalid configuration value
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    /// Configuration directory error
    #[error("Could not access configuration directory")]
    DirectoryError,
}

/// Recent documents persistence errors
#[derive(Error, Debug)]
pub enum RecentError {
    #[error("Could not load recent documents: {0}")]
    LoadError(String),

    #[error("Could not save recent documents: {0}")]
    SaveError(String),

    #[error("Invalid recent documents format: {0}")]
    ParseError(String),

    #[error("Could not access data directory")]
    DirectoryError,
}

/// Result type alias for operations that can fail with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for file operations
pub type FileResult<T> = Result<T, FileError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for recent documents operations
pub type RecentResult<T> = Result<T, RecentError>;

impl FileError {
    /// Create a user-friendly error message suitable for the status line
    pub fn user_message(&self) -> String {
        match self {
            FileError::NotFound(_) => {
                "The document could not be found. It may have been moved or deleted.".to_string()
            }
            FileError::FileTooLarge { max_size, .. } => format!(
                "This document is too large to open. Maximum size is {} MB.",
                max_size / (1024 * 1024)
            ),
            FileError::Encrypted { .. } => {
                "This document is password protected and cannot be opened.".to_string()
            }
            FileError::ParseError { .. } | FileError::NoPages { .. } => {
                "This file is not a valid PDF document.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_error_display() {
        let err = FileError::NotFound(PathBuf::from("/test/file.pdf"));
        assert!(err.to_string().contains("/test/file.pdf"));
    }

    #[test]
    fn test_file_error_user_message() {
        let err = FileError::FileTooLarge {
            path: PathBuf::from("/big.pdf"),
            size: 512 * 1024 * 1024,
            max_size: 256 * 1024 * 1024,
        };
        assert!(err.user_message().contains("256 MB"));

        let err = FileError::Encrypted {
            path: PathBuf::from("/locked.pdf"),
        };
        assert!(err.user_message().contains("password"));
    }

    #[test]
    fn test_app_error_from_toolbar_error() {
        let app_err: AppError = ToolbarError::MissingWindow.into();
        assert!(matches!(app_err, AppError::Toolbar(ToolbarError::MissingWindow)));
        assert_eq!(app_err.to_string(), "Toolbar requires an owning window");
    }
}
