use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use reqwest::{StatusCode, header};
use tokio::sync::Mutex;
use tracing::debug;

use crate::{
    config,
    error::{Result, SpotifyError},
    types::TokenResponse,
};

/// Upper bound on one token-endpoint round trip.
const REFRESH_TIMEOUT: Duration = Duration::from_secs(2);

/// Immutable credential set for one Spotify account.
///
/// Values are captured once at construction and never mutated. None of
/// them is validated: an unset variable yields an empty string, which
/// fails on first use as an upstream request error.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub base_url: String,
    pub credentials_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl Credentials {
    /// Snapshots the five `SPOTIFY_*` environment variables.
    pub fn from_env() -> Self {
        Credentials {
            base_url: config::spotify_base_url(),
            credentials_url: config::spotify_credentials_url(),
            client_id: config::spotify_client_id(),
            client_secret: config::spotify_client_secret(),
            refresh_token: config::spotify_refresh_token(),
        }
    }
}

/// Cached bearer credential for the Web API.
///
/// Replaced wholesale on every successful refresh. An empty `value` means
/// the token was never fetched and forces a refresh regardless of
/// `expires_at`.
#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    fn empty() -> Self {
        AccessToken {
            value: String::new(),
            expires_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    // The boundary instant itself counts as expired.
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.value.is_empty() || now >= self.expires_at
    }
}

/// Client for the Spotify Web API, shared across all request tasks.
///
/// Holds the account credentials, a reused HTTP connection pool and the
/// cached access token. Cheap to share behind an `Arc`; all methods take
/// `&self`.
pub struct Client {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: Credentials,
    token: Mutex<AccessToken>,
}

impl Client {
    pub fn new(credentials: Credentials) -> Self {
        Client {
            http: reqwest::Client::new(),
            credentials,
            token: Mutex::new(AccessToken::empty()),
        }
    }

    /// Builds a client from the process environment.
    pub fn from_env() -> Self {
        Client::new(Credentials::from_env())
    }

    /// Returns a bearer token that is valid at the time of the call,
    /// refreshing it first when absent or expired.
    ///
    /// The token cache lock is held across the refresh, so concurrent
    /// callers that observe an expired token wait for one refresh instead
    /// of issuing their own, and the value/expiry pair is always replaced
    /// atomically.
    pub(crate) async fn ensure_valid_access_token(&self) -> Result<String> {
        let mut token = self.token.lock().await;
        if token.is_expired(Utc::now()) {
            *token = self.refresh_access_token().await?;
        }
        Ok(token.value.clone())
    }

    /// Performs the OAuth2 refresh-token grant against the credentials
    /// endpoint. A failed grant leaves the cached token untouched.
    async fn refresh_access_token(&self) -> Result<AccessToken> {
        debug!("refreshing access token");

        let basic = STANDARD.encode(format!(
            "{}:{}",
            self.credentials.client_id, self.credentials.client_secret
        ));
        let resp = self
            .http
            .post(&self.credentials.credentials_url)
            .header(header::AUTHORIZATION, format!("Basic {}", basic))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", self.credentials.refresh_token.as_str()),
            ])
            .timeout(REFRESH_TIMEOUT)
            .send()
            .await?;

        if resp.status() != StatusCode::OK {
            return Err(SpotifyError::TokenStatus(resp.status()));
        }

        let body = resp.bytes().await?;
        let token: TokenResponse = serde_json::from_slice(&body).map_err(SpotifyError::Decode)?;

        // Expiry is anchored at completion of the exchange.
        Ok(AccessToken {
            value: token.access_token,
            expires_at: Utc::now() + chrono::Duration::seconds(token.expires_in),
        })
    }
}
