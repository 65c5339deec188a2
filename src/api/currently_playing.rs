use std::sync::Arc;

use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::{
    spotify::Client,
    types::{Artist, CurrentlyPlayingResponse, Image},
};

/// Album art dimensions served to consumers.
const IMAGE_WIDTH: u32 = 300;
const IMAGE_HEIGHT: u32 = 300;

pub async fn currently_playing(Extension(client): Extension<Arc<Client>>) -> Response {
    let playing = match client.currently_playing_track().await {
        Ok(playing) => playing,
        Err(e) => {
            warn!(error = %e, "unable to get current playing track");
            return StatusCode::NO_CONTENT.into_response();
        }
    };

    // The client only returns playback states that carry a track.
    let Some(track) = playing.item else {
        return StatusCode::NO_CONTENT.into_response();
    };

    let images = track
        .album
        .as_ref()
        .map(|album| album.images.as_slice())
        .unwrap_or_default();
    let image_url = image_url_by_dimensions(images, IMAGE_WIDTH, IMAGE_HEIGHT);
    if image_url.is_none() {
        warn!("unable to get image URL: no images with those dimensions");
    }

    let resp = CurrentlyPlayingResponse {
        id: track.id,
        name: track.name,
        artists: artist_names(&track.artists),
        url: track
            .external_urls
            .get("spotify")
            .cloned()
            .unwrap_or_default(),
        image_url,
        playing: playing.is_playing,
    };

    (StatusCode::OK, Json(resp)).into_response()
}

/// Returns the URL of the first image matching the given dimensions
/// exactly, scanning in the order the upstream provided.
pub fn image_url_by_dimensions(images: &[Image], width: u32, height: u32) -> Option<String> {
    images
        .iter()
        .find(|image| image.width == width && image.height == height)
        .map(|image| image.url.clone())
}

/// Joins artist display names with `", "`, preserving upstream order.
pub fn artist_names(artists: &[Artist]) -> String {
    artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
