//! # Spotify Integration Module
//!
//! This module implements the client for the two Spotify endpoints the
//! service depends on: the accounts-service token endpoint and the Web API
//! currently-playing endpoint. It owns the only piece of mutable state in
//! the process, the cached access token.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handler (api::currently_playing)
//!          ↓
//! Client::currently_playing_track
//!     ├── ensure_valid_access_token ── refresh_access_token (on expiry)
//!     └── GET /v1/me/player/currently-playing
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Token lifecycle
//!
//! The client is constructed with an empty access token and refreshes it
//! lazily: the first request, and the first request after an expiry, pay
//! the cost of one refresh-token grant. The token and its expiry instant
//! live behind a single async mutex, so concurrent requests that find the
//! token expired coalesce into one upstream refresh instead of a herd, and
//! no request can ever observe a half-replaced token.
//!
//! ## Error Handling
//!
//! All operations return [`SpotifyError`](crate::error::SpotifyError),
//! which distinguishes transport failures, upstream status failures,
//! malformed bodies, and the "nothing is playing" case. The client never
//! panics and never terminates the process; per-request failures are the
//! caller's to report.

mod client;
mod player;

pub use client::{Client, Credentials};
