use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a clean tree,
/// a tree that still carries issues after filtering, and a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - nothing matched, or `--check` was not requested
    Success = 0,
    /// The filtered tree still carries issues and `--check` was requested
    IssuesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable scan, invalid config, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::IssuesDetected => write!(f, "Issues Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency tree handling.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Duplicate dependency '{identity}' under '{parent}'\n\n💡 Hint: A node cannot list the same dependency twice; add a separate path instead")]
    DuplicateChild { parent: String, identity: String },

    #[error("Unknown tree node: {details}")]
    UnknownNode { details: String },

    #[error("Invalid dependency identity: '{value}'\nReason: {reason}\n\n💡 Hint: Use the form name@version (e.g. \"org.acme:core@1.2.0\")")]
    InvalidIdentity { value: String, reason: String },

    #[error("Cannot attach a descriptor location to '{identity}'\nReason: {reason}")]
    InvalidDeclaration { identity: String, reason: String },

    #[error("Scan result not found: {path}\n\n💡 Hint: {suggestion}")]
    ScanFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse scan result: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a valid scan result document")]
    ScanParseError { path: PathBuf, details: String },

    #[error("Invalid configuration: {details}\n\n💡 Hint: {hint}")]
    ConfigError { details: String, hint: String },

    #[error("Project descriptor is no longer available: {path}\nReason: {reason}")]
    DescriptorUnavailable { path: PathBuf, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
