use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Validation,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::IoError(_) | SiteError::WriteError { .. } => ErrorCategory::Io,
            SiteError::SerializationError(_) => ErrorCategory::Serialization,
            SiteError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            SiteError::InvalidConfigValueError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Serialization
            | ErrorCategory::Configuration
            | ErrorCategory::Validation => ErrorSeverity::High,
        }
    }

    /// Process exit code for this error, derived from its severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::IoError(_) => {
                "Check that the files involved exist and are readable".to_string()
            }
            SiteError::WriteError { path, .. } => {
                let dir = path
                    .parent()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| ".".to_string());
                format!("Make sure the directory '{}' exists and is writable", dir)
            }
            SiteError::SerializationError(_) => {
                "The content could not be serialized; report this as a bug".to_string()
            }
            SiteError::ConfigValidationError { .. } => {
                "Check the content file for TOML syntax errors".to_string()
            }
            SiteError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::WriteError { path, .. } => {
                format!("Could not write the generated file {}", path.display())
            }
            SiteError::IoError(e) => format!("File operation failed: {}", e),
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid content: {} ({})", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_is_critical() {
        let err = SiteError::WriteError {
            path: PathBuf::from("/readonly/index.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.recovery_suggestion().contains("/readonly"));
        assert!(err.user_friendly_message().contains("index.html"));
    }

    #[test]
    fn test_validation_error_exit_code() {
        let err = SiteError::InvalidConfigValueError {
            field: "profile.name".to_string(),
            value: String::new(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("profile.name"));
    }
}
