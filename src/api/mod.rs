//! Recommendation service access
//!
//! This module talks to the remote scoring backend over HTTP.

pub mod client;

pub use client::{RecommendClient, RecommendConfig};

use thiserror::Error;

/// Failures from a recommendation request.
///
/// The user-visible message collapses both kinds into a single line; the
/// kinds stay distinct here so logs and tests can tell them apart.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// Connection or transport failure before a usable response arrived.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    /// The service answered, but with a non-success status or a body that
    /// does not parse as a recommendation list.
    #[error("bad response: {0}")]
    Response(String),
}

/// Classification of a failed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Response,
}

impl RecommendError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecommendError::Network(_) => ErrorKind::Network,
            RecommendError::Response(_) => ErrorKind::Response,
        }
    }
}
