use thiserror::Error;

use crate::domain::id::MatchId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Reasons a catalog load degrades to the fallback fixture set.
///
/// These never reach the caller of `OddsSource::load` as errors; the source
/// turns them into a [`Notice`](crate::port::outbound::notice::Notice).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("no odds API key configured, showing sample matches")]
    ConfigurationMissing,

    #[error("odds request failed: {reason}")]
    RemoteRequestFailed { reason: String },

    #[error("unexpected odds response: {reason}")]
    ResponseShapeInvalid { reason: String },
}

/// Slip mutation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlipError {
    #[error("match {match_id} is not in the catalog")]
    MatchNotFound { match_id: MatchId },
}

/// Bet submission rejections, checked in declaration order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Your betting slip is empty!")]
    EmptySlip,

    #[error("Please enter a valid stake.")]
    InvalidStake,
}

/// Failures that reach the binary: configuration, transport and terminal I/O.
///
/// Load, slip and submission errors are handled where they occur and never
/// travel through this type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
