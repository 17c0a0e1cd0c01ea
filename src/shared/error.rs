use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a clean batch,
/// a batch in which single packages failed, and misconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every requested package was resolved (with or without data)
    Success = 0,
    /// At least one package could not be resolved
    PackageFailures = 1,
    /// Invalid arguments or configuration, including an unknown curation selector
    InvalidArguments = 2,
    /// Any other failure (I/O, output writing, ...)
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
            ExitCode::PackageFailures => write!(f, "Package Failures (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while resolving component information.
///
/// Absence of data (no scan result, no curation) is never represented here;
/// adapters return `Ok(None)` for that case.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Failed to parse scan result for {package_url}\nDetails: {details}\n\n💡 Hint: Please verify that scancode.json was produced by ScanCode with JSON output")]
    ScanParse {
        package_url: String,
        details: String,
    },

    #[error("Failed to parse curation file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid YAML with a top-level 'artifacts' list")]
    CurationParse { path: PathBuf, details: String },

    #[error("Unknown curation data selector: '{selector}'\n\n💡 Hint: Use 'none' to disable curations, or configure a curation source with this name")]
    UnknownCurationSelector { selector: String },

    #[error("Failed to retrieve content for {reference}\nDetails: {details}")]
    ContentRetrieval { reference: String, details: String },

    #[error("Invalid package URL: {package_url}\nReason: {reason}\n\n💡 Hint: Package URLs look like pkg:maven/org.example/artifact@1.0.0")]
    InvalidPackageUrl { package_url: String, reason: String },

    #[error("Invalid repository path: {path}\nReason: {reason}\n\n💡 Hint: Please specify the directory holding the scan results with --repo-base-path")]
    InvalidRepoPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl ResolutionError {
    /// Whether the error only degrades the result instead of aborting a resolution
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ResolutionError::ContentRetrieval { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::PackageFailures.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::PackageFailures),
            "Package Failures (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_scan_parse_display() {
        let error = ResolutionError::ScanParse {
            package_url: "pkg:maven/org.example/demo@1.0.0".to_string(),
            details: "expected value at line 1 column 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse scan result"));
        assert!(display.contains("pkg:maven/org.example/demo@1.0.0"));
        assert!(display.contains("expected value"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_unknown_selector_display() {
        let error = ResolutionError::UnknownCurationSelector {
            selector: "team-x".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Unknown curation data selector"));
        assert!(display.contains("team-x"));
    }

    #[test]
    fn test_curation_parse_display() {
        let error = ResolutionError::CurationParse {
            path: PathBuf::from("/curations.yaml"),
            details: "mapping values are not allowed".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse curation file"));
        assert!(display.contains("/curations.yaml"));
    }

    #[test]
    fn test_security_error_display() {
        let error = ResolutionError::SecurityError {
            path: PathBuf::from("/repo/sources/../../etc/passwd"),
            reason: "Path traversal is not allowed".to_string(),
            hint: "Reference files inside the package content only".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Path traversal"));
    }

    #[test]
    fn test_only_content_retrieval_is_recoverable() {
        let retrieval = ResolutionError::ContentRetrieval {
            reference: "https://example.org/LICENSE".to_string(),
            details: "timeout".to_string(),
        };
        let selector = ResolutionError::UnknownCurationSelector {
            selector: "x".to_string(),
        };
        assert!(retrieval.is_recoverable());
        assert!(!selector.is_recoverable());
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = ResolutionError::UnknownCurationSelector {
            selector: "x".to_string(),
        }
        .into();
        assert!(matches!(
            err.downcast_ref::<ResolutionError>(),
            Some(ResolutionError::UnknownCurationSelector { .. })
        ));
    }
}
