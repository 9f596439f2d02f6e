use thiserror::Error;

pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "급식정보를 불러오는 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";
pub const MALFORMED_RESPONSE_MESSAGE: &str = "서버 응답을 처리하는 중 오류가 발생했습니다.";
pub const NOT_FOUND_MESSAGE: &str = "급식정보를 찾을 수 없습니다.";
pub const NO_DATA_MESSAGE: &str = "해당 날짜의 급식정보가 없습니다.";

#[derive(Error, Debug)]
pub enum MealError {
    #[error("API request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("API returned HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("Malformed XML response: {message}")]
    MalformedResponse { message: String },

    #[error("Meal service container not found in response")]
    NotFound,

    #[error("No meal data for the requested date: {message}")]
    NoData { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Response,
    Configuration,
    Validation,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MealError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MealError::TransportError(_) | MealError::HttpStatus { .. } => ErrorCategory::Transport,
            MealError::MalformedResponse { .. } | MealError::NotFound | MealError::NoData { .. } => {
                ErrorCategory::Response
            }
            MealError::ConfigError { .. }
            | MealError::InvalidConfigValueError { .. }
            | MealError::MissingConfigError { .. }
            | MealError::UrlError(_) => ErrorCategory::Configuration,
            MealError::ValidationError { .. } => ErrorCategory::Validation,
            MealError::IoError(_) | MealError::SerializationError(_) | MealError::CsvError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 해당 날짜에 급식이 없는 것은 정상 응답
            MealError::NoData { .. } => ErrorSeverity::Low,
            MealError::TransportError(_)
            | MealError::HttpStatus { .. }
            | MealError::MalformedResponse { .. }
            | MealError::NotFound => ErrorSeverity::Medium,
            MealError::ConfigError { .. }
            | MealError::InvalidConfigValueError { .. }
            | MealError::MissingConfigError { .. }
            | MealError::UrlError(_)
            | MealError::ValidationError { .. } => ErrorSeverity::High,
            MealError::IoError(_) | MealError::SerializationError(_) | MealError::CsvError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// Message shown to the user in place of the menu.
    pub fn user_friendly_message(&self) -> String {
        match self {
            MealError::TransportError(_) | MealError::HttpStatus { .. } => {
                TRANSPORT_FAILURE_MESSAGE.to_string()
            }
            MealError::MalformedResponse { .. } => MALFORMED_RESPONSE_MESSAGE.to_string(),
            MealError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            MealError::NoData { .. } => NO_DATA_MESSAGE.to_string(),
            MealError::ValidationError { message } | MealError::ConfigError { message } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Transport => "Check network connectivity and the API base URL, then retry",
            ErrorCategory::Response => match self {
                MealError::NoData { .. } => "Try another date; weekends and holidays have no menu",
                _ => "Verify the office and school codes point at a valid school",
            },
            ErrorCategory::Configuration => "Fix the configuration file or command line arguments",
            ErrorCategory::Validation => "Pass a date in YYYY-MM-DD format",
            ErrorCategory::Output => "Check that stdout is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, MealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_failures_map_to_static_messages() {
        assert_eq!(
            MealError::HttpStatus { status: 503 }.user_friendly_message(),
            TRANSPORT_FAILURE_MESSAGE
        );
        assert_eq!(
            MealError::MalformedResponse {
                message: "unexpected end".to_string()
            }
            .user_friendly_message(),
            MALFORMED_RESPONSE_MESSAGE
        );
        assert_eq!(MealError::NotFound.user_friendly_message(), NOT_FOUND_MESSAGE);
        // 서버 메시지는 로그에만 남고 화면에는 고정 문구
        assert_eq!(
            MealError::NoData {
                message: "해당하는 데이터가 없습니다.".to_string()
            }
            .user_friendly_message(),
            NO_DATA_MESSAGE
        );
    }

    #[test]
    fn test_category_and_severity() {
        let err = MealError::HttpStatus { status: 500 };
        assert_eq!(err.category(), ErrorCategory::Transport);
        assert_eq!(err.severity(), ErrorSeverity::Medium);

        let err = MealError::NoData {
            message: String::new(),
        };
        assert_eq!(err.category(), ErrorCategory::Response);
        assert_eq!(err.severity(), ErrorSeverity::Low);

        let err = MealError::ValidationError {
            message: "bad".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.user_friendly_message(), "bad");
    }
}
