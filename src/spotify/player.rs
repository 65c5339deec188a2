use reqwest::StatusCode;

use crate::{
    error::{Result, SpotifyError},
    spotify::Client,
    types::CurrentlyPlaying,
};

impl Client {
    /// Fetches the playback state of the authenticated account.
    ///
    /// Ensures the cached access token is valid first, then queries the
    /// currently-playing endpoint. A response without a track (an ad, an
    /// episode, or no active session at all) is reported as
    /// [`SpotifyError::NoActiveSession`] rather than passed on with an
    /// empty item.
    ///
    /// The upstream call is owned by the caller's future: dropping an
    /// abandoned request cancels it.
    pub async fn currently_playing_track(&self) -> Result<CurrentlyPlaying> {
        let token = self
            .ensure_valid_access_token()
            .await
            .map_err(|e| SpotifyError::Refresh(Box::new(e)))?;

        let url = format!(
            "{}/v1/me/player/currently-playing?market=AU",
            self.credentials.base_url
        );
        let resp = self.http.get(&url).bearer_auth(&token).send().await?;

        if resp.status() != StatusCode::OK {
            return Err(SpotifyError::PlayerStatus(resp.status()));
        }

        // A 200 with an empty body is how the upstream reports "nothing
        // playing"; it must not be surfaced as a decode failure.
        let body = resp.bytes().await?;
        if body.is_empty() {
            return Err(SpotifyError::NoActiveSession(String::from("none")));
        }

        let playing: CurrentlyPlaying =
            serde_json::from_slice(&body).map_err(SpotifyError::Decode)?;

        if playing.item.is_none() {
            return Err(SpotifyError::NoActiveSession(
                playing.currently_playing_type,
            ));
        }

        Ok(playing)
    }
}
