use thiserror::Error;

#[derive(Error, Debug)]
pub enum GodboltError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned {status} for {url}: {body}")]
    UpstreamStatus {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid resource URI '{uri}': {reason}")]
    InvalidResourceUri { uri: String, reason: String },

    #[error("Invalid identifier '{value}': {reason}")]
    InvalidIdentifier { value: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Data,
    Configuration,
    Request,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GodboltError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GodboltError::Http(_) => ErrorCategory::Network,
            GodboltError::UpstreamStatus { .. } => ErrorCategory::Upstream,
            GodboltError::Serialization(_) | GodboltError::Io(_) => ErrorCategory::Data,
            GodboltError::ConfigError { .. }
            | GodboltError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GodboltError::InvalidResourceUri { .. } | GodboltError::InvalidIdentifier { .. } => {
                ErrorCategory::Request
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GodboltError::InvalidResourceUri { .. } | GodboltError::InvalidIdentifier { .. } => {
                ErrorSeverity::Low
            }
            GodboltError::Http(_) => ErrorSeverity::Medium,
            GodboltError::UpstreamStatus { status, .. } if *status < 500 => ErrorSeverity::Low,
            GodboltError::UpstreamStatus { .. } => ErrorSeverity::Medium,
            GodboltError::Serialization(_) => ErrorSeverity::High,
            GodboltError::Io(_)
            | GodboltError::ConfigError { .. }
            | GodboltError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Whether the caller sent something malformed, as opposed to the
    /// upstream or this process failing.
    pub fn is_caller_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Request)
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GodboltError::Http(e) if e.is_timeout() => {
                "Compiler Explorer did not answer in time".to_string()
            }
            GodboltError::Http(e) if e.is_connect() => {
                "Could not connect to Compiler Explorer".to_string()
            }
            GodboltError::Http(e) => format!("Request to Compiler Explorer failed: {}", e),
            GodboltError::UpstreamStatus { status, body, .. } if body.trim().is_empty() => {
                format!("Compiler Explorer answered with HTTP {}", status)
            }
            GodboltError::UpstreamStatus { status, body, .. } => {
                format!("Compiler Explorer answered with HTTP {}: {}", status, body.trim())
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GodboltError::Http(_) => "Check network access to the configured base URL",
            GodboltError::UpstreamStatus { status: 404, .. } => {
                "Check the identifier; list valid ids through the languages, compilers or libraries resources"
            }
            GodboltError::UpstreamStatus { status, .. } if *status < 500 => {
                "Check the request parameters"
            }
            GodboltError::UpstreamStatus { .. } => "The upstream service failed; try again later",
            GodboltError::Serialization(_) => "The upstream reply was not the expected JSON",
            GodboltError::Io(_) => "Check file permissions and paths",
            GodboltError::ConfigError { .. } | GodboltError::InvalidConfigValueError { .. } => {
                "Fix the configuration file, flags or environment variables"
            }
            GodboltError::InvalidResourceUri { .. } => {
                "Use one of the URIs from resources/list or resources/templates/list"
            }
            GodboltError::InvalidIdentifier { .. } => {
                "Use an id as listed by the languages, compilers, libraries or formats resources"
            }
        }
    }
}

impl From<GodboltError> for rmcp::ErrorData {
    fn from(err: GodboltError) -> Self {
        if err.is_caller_error() {
            rmcp::ErrorData::invalid_params(err.to_string(), None)
        } else {
            rmcp::ErrorData::internal_error(err.user_friendly_message(), None)
        }
    }
}

pub type Result<T> = std::result::Result<T, GodboltError>;
