use std::path::PathBuf;
use thiserror::Error;

/// Why a language unit could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No unit with this code exists anywhere the loader looks
    #[error("no language unit named '{code}'")]
    NotFound { code: String },

    /// The unit exists but could not be read
    #[error("failed to read language unit {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The unit is not valid JSON for the unit format
    #[error("malformed language unit {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The unit parsed but failed validation
    #[error("invalid language unit '{code}': {}", errors.join("; "))]
    Invalid { code: String, errors: Vec<String> },
}

impl LoadError {
    pub fn not_found(code: &str) -> Self {
        LoadError::NotFound {
            code: code.to_string(),
        }
    }

    /// `true` when the unit simply does not exist, `false` when it exists but
    /// is broken.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = LoadError::not_found("xx");
        assert_eq!(err.to_string(), "no language unit named 'xx'");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_display_joins_errors() {
        let err = LoadError::Invalid {
            code: "xx".to_string(),
            errors: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(err.to_string(), "invalid language unit 'xx': first; second");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_io_keeps_source() {
        let err = LoadError::Io {
            path: PathBuf::from("/tmp/xx.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("xx.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
