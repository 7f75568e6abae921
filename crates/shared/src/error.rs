//! Error type for profile fetches.

use thiserror::Error;

/// Why a profile document could not be retrieved. The widget never surfaces
/// this to callers; it is absorbed into the default profile at the widget
/// layer, so the variants exist for logging and for testing the fetch step
/// in isolation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("deserialization error: {0}")]
    Deserialize(String),
}
