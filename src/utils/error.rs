use thiserror::Error;

#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read directory '{path}': {source}")]
    ScanError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Filesystem,
    Serialization,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DescriptorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DescriptorError::IoError(_)
            | DescriptorError::ScanError { .. }
            | DescriptorError::WriteError { .. } => ErrorCategory::Filesystem,
            DescriptorError::SerializationError(_) => ErrorCategory::Serialization,
            DescriptorError::ConfigError { .. }
            | DescriptorError::MissingConfigError { .. }
            | DescriptorError::InvalidConfigValueError { .. }
            | DescriptorError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Serialization => ErrorSeverity::Critical,
            ErrorCategory::Filesystem => match self.io_kind() {
                Some(std::io::ErrorKind::Interrupted) => ErrorSeverity::Medium,
                _ => ErrorSeverity::Critical,
            },
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DescriptorError::ScanError { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    format!("Asset folder '{}' does not exist", path)
                }
                std::io::ErrorKind::PermissionDenied => {
                    format!("Asset folder '{}' is not readable", path)
                }
                _ => format!("Could not scan '{}': {}", path, source),
            },
            DescriptorError::WriteError { path, source } => {
                format!("Could not save descriptors to '{}': {}", path, source)
            }
            DescriptorError::MissingConfigError { field } => {
                format!("No value given for '{}'", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DescriptorError::ScanError { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                "Check the asset folder path and try again"
            }
            DescriptorError::ScanError { .. } => {
                "Make sure the asset folder and its subfolders are readable"
            }
            DescriptorError::WriteError { .. } => {
                "Make sure the asset folder is writable and the disk is not full"
            }
            DescriptorError::IoError(_) => "Check filesystem permissions and try again",
            DescriptorError::SerializationError(_) => {
                "File names could not be encoded as JSON; rename the offending files"
            }
            DescriptorError::ConfigError { .. }
            | DescriptorError::MissingConfigError { .. }
            | DescriptorError::InvalidConfigValueError { .. }
            | DescriptorError::ConfigValidationError { .. } => {
                "Fix the configuration value and run again (see --help)"
            }
        }
    }

    fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            DescriptorError::IoError(e) => Some(e.kind()),
            DescriptorError::ScanError { source, .. }
            | DescriptorError::WriteError { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DescriptorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_root_is_critical_filesystem_error() {
        let err = DescriptorError::ScanError {
            path: "/nope".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };

        assert_eq!(err.category(), ErrorCategory::Filesystem);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("does not exist"));
        assert_eq!(
            err.recovery_suggestion(),
            "Check the asset folder path and try again"
        );
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = DescriptorError::InvalidConfigValueError {
            field: "output_filename".to_string(),
            value: "a/b.json".to_string(),
            reason: "must be a bare file name".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("a/b.json"));
    }
}
