use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the Atlas API client, one per call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    Transport(String),

    #[error("API error (status {status}): {detail}")]
    RequestFailed { status: u16, detail: String },

    #[error("Invalid JSON response from API: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Validation(String),

    #[error("Digest authentication failed: {0}")]
    Auth(String),

    #[error("API client is closed")]
    Closed,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Transport(format!("request timed out: {err}"))
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Missing credentials: set {} or run 'atlas-projects init'", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error("Invalid base URL {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
