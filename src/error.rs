//! Error types for the Spotify client.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the Spotify client.
///
/// Each variant identifies the failing step so callers can tell transport
/// problems apart from "nothing is playing". Only the HTTP handler layer
/// downgrades these into an empty response, and it logs the cause first.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// Connection failure, timeout or cancellation on an outbound call.
    #[error("could not send request: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-200 response from the token endpoint.
    #[error("failed to refresh token, status: {0}")]
    TokenStatus(StatusCode),

    /// Non-200 response from the currently-playing endpoint.
    #[error("unable to get currently playing track: {0}")]
    PlayerStatus(StatusCode),

    /// Malformed JSON body from either endpoint.
    #[error("could not decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Well-formed playback response without a track. Carries the
    /// currently-playing type reported by the upstream (e.g. "ad" or
    /// "episode"), or "none" when the body was empty.
    #[error("no track information found: {0}")]
    NoActiveSession(String),

    /// Token refresh failed while preparing a fetch.
    #[error("failed to refresh token: {0}")]
    Refresh(#[source] Box<SpotifyError>),
}

/// Result type for all Spotify client operations.
pub type Result<T> = std::result::Result<T, SpotifyError>;
