use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Response body of the OAuth2 refresh-token grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub expires_in: i64,
    #[serde(default)]
    pub scope: String,
}

/// Playback state as reported by the currently-playing endpoint.
///
/// `item` is absent when the account plays something that is not a track
/// (an ad, an episode) or when nothing is playing at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentlyPlaying {
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub progress_ms: Option<i64>,
    #[serde(default)]
    pub context: Option<PlayContext>,
    #[serde(default)]
    pub currently_playing_type: String,
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default)]
    pub actions: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub item: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayContext {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub uri: String,
    pub name: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub disc_number: i32,
    #[serde(default)]
    pub track_number: i32,
    #[serde(default)]
    pub popularity: i32,
    #[serde(default)]
    pub is_local: bool,
    #[serde(default)]
    pub is_playable: bool,
    #[serde(default)]
    pub explicit: bool,
    #[serde(rename = "duration_ms", default)]
    pub duration: i64,
    #[serde(default)]
    pub album: Option<Album>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
    #[serde(default)]
    pub external_ids: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub album_type: String,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub is_playable: bool,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub release_date_precision: String,
    #[serde(default)]
    pub total_tracks: i32,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    #[serde(default)]
    pub href: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
}

/// Compact track representation served on `GET /currently-playing`.
///
/// `image_url` is left out of the JSON entirely when the album carries no
/// matching artwork.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentlyPlayingResponse {
    pub id: String,
    pub name: String,
    pub artists: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub playing: bool,
}
