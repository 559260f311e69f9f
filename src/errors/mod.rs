use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};
use crate::enums::finding_severity::FindingSeverity;
use crate::structs::finding::Finding;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ParityError {
    // Transport errors (after the retry budget is spent)
    ConnectionError {
        operation: String,
        url: String,
        attempts: u32,
        reason: String,
    },

    // API status errors (4xx, or 5xx after retries)
    ApiError {
        operation: String,
        url: String,
        status_code: u16,
        body: String,
        message: Option<String>,
    },

    // Input validation errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // Domain checks applied to a successful analysis
    ScoreBelowThreshold {
        score: u8,
        min_score: u8,
    },
    DisallowedFindings {
        severities: Vec<FindingSeverity>,
        findings: Vec<Finding>,
    },

    // Parser errors
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
        context: Option<String>,
    },

    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // File system errors
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },
}

impl ParityError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, line_number: Option<usize>, reason: &str, context: Option<&str>) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            line_number,
            reason: reason.to_string(),
            context: context.map(|s| s.to_string()),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn connection_error(operation: &str, url: &str, attempts: u32, reason: &str) -> Self {
        Self::ConnectionError {
            operation: operation.to_string(),
            url: url.to_string(),
            attempts,
            reason: reason.to_string(),
        }
    }

    pub fn api_error(operation: &str, url: &str, status_code: u16, body: &str, message: Option<&str>) -> Self {
        Self::ApiError {
            operation: operation.to_string(),
            url: url.to_string(),
            status_code,
            body: body.to_string(),
            message: message.map(|s| s.to_string()),
        }
    }

    /// HTTP status for API errors, `None` for every other kind.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Whether the request layer would retry this failure.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionError { .. } => true,
            Self::ApiError { status_code, .. } => *status_code >= 500,
            _ => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConnectionError { .. } => ErrorSeverity::High,
            Self::ApiError { status_code, .. } if *status_code >= 500 => ErrorSeverity::High,
            Self::ApiError { .. } => ErrorSeverity::Medium,
            Self::DisallowedFindings { findings, .. }
                if findings.iter().any(|f| f.severity == FindingSeverity::Critical) =>
            {
                ErrorSeverity::Critical
            }
            Self::DisallowedFindings { .. } => ErrorSeverity::High,
            Self::ScoreBelowThreshold { .. } => ErrorSeverity::Medium,
            Self::FileOperationError { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConnectionError { operation, url, attempts, reason } => {
                format!(
                    "Connection failed during {} ({}) after {} attempt(s): {}\n💡 Check your network connection and the API base URL",
                    operation, url, attempts, reason
                )
            }
            Self::ApiError { operation, url, status_code, body, message } => {
                let mut msg = format!("API error during {}: HTTP {} (URL: {})", operation, status_code, url);
                match message {
                    Some(message) => msg.push_str(&format!("\n{}", message)),
                    None if !body.is_empty() => msg.push_str(&format!("\n{}", body)),
                    None => {}
                }
                match status_code {
                    401 | 403 => msg.push_str("\n💡 Check that your API key is valid"),
                    404 => msg.push_str("\n💡 The requested resource does not exist"),
                    code if *code >= 500 => msg.push_str("\n💡 The service is having trouble - try again later"),
                    _ => {}
                }
                msg
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{}': value '{}' violates constraint '{}'", field, value, constraint);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ScoreBelowThreshold { score, min_score } => {
                format!("Analysis score {} is below the minimum threshold {}", score, min_score)
            }
            Self::DisallowedFindings { severities, findings } => {
                let names: Vec<&str> = severities.iter().map(|s| s.as_str()).collect();
                let mut msg = format!("Found {} findings with severity: {}", findings.len(), names.join(", "));
                for finding in findings {
                    msg.push_str(&format!(
                        "\n  - [{}] {} ({}:{})",
                        finding.severity.as_str().to_uppercase(),
                        finding.title,
                        finding.location.file,
                        finding.location.line
                    ));
                }
                msg
            }
            Self::ParseError { content_type, line_number, reason, context } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                if let Some(ctx) = context {
                    msg.push_str(&format!("\nContext: {}", ctx));
                }
                msg
            }
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::FileOperationError { file_path, operation, reason } => {
                format!("File operation '{}' failed for '{}': {}\n💡 Check file permissions and path", operation, file_path, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for ParityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for ParityError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for SDK operations
pub type ParityResult<T> = Result<T, ParityError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &ParityError) {
        let severity = error.severity();

        log::debug!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_retryable() {
            eprintln!("🔄 This error is transient - you can retry the operation");
        }
    }

    /// Process exit code for a failed command.
    pub fn exit_code(error: &ParityError) -> i32 {
        match error {
            ParityError::ScoreBelowThreshold { .. } | ParityError::DisallowedFindings { .. } => 1,
            ParityError::ValidationError { .. }
            | ParityError::ConfigurationError { .. }
            | ParityError::ConfigurationFileError { .. } => 2,
            _ => 3,
        }
    }
}

/// Extension trait for Result to add context
pub trait ResultExt<T> {
    fn with_file_context(self, file_path: &str, operation: &str) -> ParityResult<T>;
}

impl<T> ResultExt<T> for Result<T, std::io::Error> {
    fn with_file_context(self, file_path: &str, operation: &str) -> ParityResult<T> {
        self.map_err(|e| ParityError::file_error(file_path, operation, &e.to_string()))
    }
}

/// Convert from standard library errors
impl From<std::io::Error> for ParityError {
    fn from(error: std::io::Error) -> Self {
        ParityError::FileOperationError {
            file_path: String::new(),
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ParityError {
    fn from(error: serde_json::Error) -> Self {
        ParityError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
            context: None,
        }
    }
}

impl From<serde_yaml::Error> for ParityError {
    fn from(error: serde_yaml::Error) -> Self {
        ParityError::ParseError {
            content_type: "YAML".to_string(),
            line_number: error.location().map(|l| l.line()),
            reason: error.to_string(),
            context: None,
        }
    }
}

impl From<toml::de::Error> for ParityError {
    fn from(error: toml::de::Error) -> Self {
        ParityError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
            context: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_connection_and_server_errors_are_retryable() {
        assert!(ParityError::connection_error("GET", "http://x", 3, "refused").is_retryable());
        assert!(ParityError::api_error("GET", "http://x", 503, "", None).is_retryable());
        assert!(!ParityError::api_error("GET", "http://x", 404, "", None).is_retryable());
        assert!(!ParityError::validation_error("skills", "9", "at most 8", None).is_retryable());
    }

    #[test]
    fn api_message_prefers_server_envelope() {
        let err = ParityError::api_error("GET /v1/skills/x", "http://x", 404, "{\"raw\":true}", Some("Skill 'x' not found"));
        let msg = err.user_message();
        assert!(msg.contains("HTTP 404"));
        assert!(msg.contains("Skill 'x' not found"));
        assert!(!msg.contains("raw"));
    }

    #[test]
    fn domain_failures_exit_with_one() {
        let err = ParityError::ScoreBelowThreshold { score: 40, min_score: 80 };
        assert_eq!(ErrorHandler::exit_code(&err), 1);
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn critical_findings_raise_critical_severity() {
        let finding = |severity| Finding {
            severity,
            title: "Missing signer check".to_string(),
            location: crate::structs::finding::FindingLocation { file: "lib.rs".to_string(), line: 7, instruction: None },
            description: String::new(),
            recommendation: String::new(),
            pattern: "missing-signer".to_string(),
        };

        let critical = ParityError::DisallowedFindings {
            severities: vec![FindingSeverity::Critical],
            findings: vec![finding(FindingSeverity::High), finding(FindingSeverity::Critical)],
        };
        assert!(matches!(critical.severity(), ErrorSeverity::Critical));
        assert_eq!(critical.severity().name(), "CRITICAL");

        let high = ParityError::DisallowedFindings {
            severities: vec![FindingSeverity::High],
            findings: vec![finding(FindingSeverity::High)],
        };
        assert!(matches!(high.severity(), ErrorSeverity::High));
    }
}
