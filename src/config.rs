//! Configuration management for the currently-playing service.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and an optional `.env` file. All Spotify
//! credentials are read lazily and without validation: a missing value
//! yields an empty string and surfaces as a failing upstream request, not
//! as a startup error.

use std::env;

use dotenv;

/// Loads environment variables from a `.env` file in the working directory.
///
/// The file is optional; deployments that configure the process environment
/// directly run without one.
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Returns the base URL of the Spotify Web API.
///
/// Reads the `SPOTIFY_BASE_URL` environment variable, e.g.
/// `https://api.spotify.com`. Empty when unset.
pub fn spotify_base_url() -> String {
    env::var("SPOTIFY_BASE_URL").unwrap_or_default()
}

/// Returns the URL of the Spotify token endpoint.
///
/// Reads the `SPOTIFY_CREDENTIALS_URL` environment variable, e.g.
/// `https://accounts.spotify.com/api/token`. Empty when unset.
pub fn spotify_credentials_url() -> String {
    env::var("SPOTIFY_CREDENTIALS_URL").unwrap_or_default()
}

/// Returns the Spotify API client ID.
///
/// Reads the `SPOTIFY_CLIENT_ID` environment variable. Empty when unset.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").unwrap_or_default()
}

/// Returns the Spotify API client secret.
///
/// Reads the `SPOTIFY_CLIENT_SECRET` environment variable. Empty when
/// unset.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").unwrap_or_default()
}

/// Returns the long-lived refresh token used to mint access tokens.
///
/// Reads the `SPOTIFY_REFRESH_TOKEN` environment variable. Empty when
/// unset.
pub fn spotify_refresh_token() -> String {
    env::var("SPOTIFY_REFRESH_TOKEN").unwrap_or_default()
}

/// Returns the port the HTTP server binds to.
///
/// Reads the `PORT` environment variable, falling back to 8080 when unset
/// or unparseable.
pub fn server_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080)
}

/// Returns the Google Cloud project ID used for trace correlation.
///
/// Reads the `GOOGLE_CLOUD_PROJECT` environment variable. When empty,
/// incoming `traceparent` headers are ignored.
pub fn google_project() -> String {
    env::var("GOOGLE_CLOUD_PROJECT").unwrap_or_default()
}
