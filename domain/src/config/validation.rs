//! Structured configuration issues.
//!
//! Config loading never fails on a questionable value; instead the loaded
//! configuration is validated and each problem is reported as a
//! [`ConfigIssue`] so the caller decides whether to abort or warn.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A model id field is empty.
    EmptyModelName { field: String },
    /// A numeric field is outside its valid range.
    OutOfRange { field: String, value: String },
    /// The inference endpoint URL is empty.
    EmptyBaseUrl,
    /// No API token could be found.
    MissingApiKey { env_var: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let e = ConfigIssue::error(ConfigIssueCode::EmptyBaseUrl, "base_url is empty");
        assert!(e.is_error());
        let w = ConfigIssue::warning(
            ConfigIssueCode::MissingApiKey {
                env_var: "HF_TOKEN".to_string(),
            },
            "no token",
        );
        assert!(!w.is_error());
        assert_eq!(w.message, "no token");
    }
}
