use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use thiserror::Error;

/// Recoverable failures of a single poll cycle.
///
/// This is the closed set the poll loop reports to the user and recovers from.
/// Each variant's `Display` text becomes the body of the error notification, so
/// it must be stable across cycles that fail the same way.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("request to {endpoint} with from_date={from_date} failed: {source}")]
    ConnectionFailure {
        endpoint: String,
        from_date: i64,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} with from_date={from_date} answered HTTP {status}: {body}")]
    HttpStatusFailure {
        endpoint: String,
        from_date: i64,
        status: StatusCode,
        /// Kept for diagnostics only; not part of the message.
        headers: HeaderMap,
        body: String,
    },

    #[error("response body from {endpoint} is not valid JSON: {source}")]
    InvalidBody {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed API response: {kind}")]
    MalformedResponse { kind: MalformedKind },

    #[error("homework record has no `{field}` key: {record}")]
    MissingField {
        field: &'static str,
        record: String,
    },

    #[error("unexpected status {status} of homework \"{homework_name}\"")]
    UnknownStatus {
        status: String,
        homework_name: String,
    },
}

impl PollError {
    pub fn malformed(kind: MalformedKind) -> Self {
        PollError::MalformedResponse { kind }
    }
}

/// Which shape check rejected an API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    NotAMapping,
    MissingOrEmptyHomeworks,
    MissingCurrentDate,
    InvalidCurrentDate,
}

impl std::fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedKind::NotAMapping => write!(f, "response is not a JSON object"),
            MalformedKind::MissingOrEmptyHomeworks => {
                write!(f, "`homeworks` is missing, empty or not a list")
            }
            MalformedKind::MissingCurrentDate => write!(f, "`current_date` is missing"),
            MalformedKind::InvalidCurrentDate => write!(f, "`current_date` is not an integer"),
        }
    }
}

/// Failure to deliver a chat message. Never leaves the notifier.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Telegram API rejected the message ({status}): {description}")]
    Api {
        status: StatusCode,
        description: String,
    },
}

/// Fatal startup configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("{var} must be a non-negative integer, got {value:?}")]
    Invalid { var: &'static str, value: String },
}
