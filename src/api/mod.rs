//! # API Module
//!
//! This module provides the HTTP surface of the currently-playing service:
//! the public endpoints and the middleware every request flows through.
//!
//! ## Endpoints
//!
//! - [`currently_playing`] - Reshapes the upstream playback state into the
//!   compact `{id, name, artists, url, image_url, playing}` response.
//!   Any client failure (expired credentials, upstream outage, nothing
//!   playing) is logged and downgraded to an empty `204 No Content` so the
//!   consumer never sees an error page.
//! - [`health`] - Plain-text liveness check for monitoring systems and
//!   load balancers.
//!
//! ## Middleware
//!
//! - [`middleware::trace_context`] - Correlates request logs with a
//!   distributed trace by reading the W3C `traceparent` header.
//! - [`middleware::log_requests`] - Structured access log with method,
//!   url, status, remote address, duration and user agent.
//!
//! The module is built using the [Axum](https://docs.rs/axum) web
//! framework; handlers receive the shared Spotify client through an
//! `Extension` layer.

mod currently_playing;
mod health;
pub mod middleware;

pub use currently_playing::{artist_names, currently_playing, image_url_by_dimensions};
pub use health::health;
pub use middleware::{log_requests, trace_context};
