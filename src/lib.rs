//! Spotify Currently-Playing Service Library
//!
//! This library implements a small backend service that exposes the
//! currently playing track of a single Spotify account via a read-only
//! HTTP endpoint. It handles OAuth2 refresh-token authentication against
//! the Spotify accounts service, in-memory access-token caching, and the
//! reshaping of the upstream playback state into a compact JSON response.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints and request middleware
//! - `config` - Configuration management and environment variables
//! - `error` - Error types for the Spotify client
//! - `logging` - Structured logging setup
//! - `server` - HTTP server assembly and lifecycle
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use sponowd::{config, server, spotify};
//!
//! #[tokio::main]
//! async fn main() -> sponowd::Res<()> {
//!     config::load_env();
//!     let client = Arc::new(spotify::Client::from_env());
//!     server::start_api_server(client).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for startup and server
/// plumbing using a boxed dynamic error trait object. This allows for
/// flexible error handling while maintaining Send + Sync bounds for
/// async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use sponowd::Res;
///
/// async fn bind_server() -> Res<()> {
///     Ok(())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
