use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use sponowd::{
    api::{artist_names, image_url_by_dimensions, middleware::trace_resource},
    server,
    spotify::{Client, Credentials},
    types::{Artist, Image},
};

// Helper function to create a test artist
fn test_artist(name: &str) -> Artist {
    Artist {
        id: format!("{}_id", name.to_lowercase()),
        href: String::new(),
        name: name.to_string(),
        kind: "artist".to_string(),
        uri: String::new(),
        external_urls: HashMap::new(),
    }
}

// Helper function to create a test image
fn test_image(url: &str, width: u32, height: u32) -> Image {
    Image {
        url: url.to_string(),
        width,
        height,
    }
}

#[test]
fn artist_names_joins_in_order() {
    let artists = vec![test_artist("Alice"), test_artist("Bob"), test_artist("Carol")];
    assert_eq!(artist_names(&artists), "Alice, Bob, Carol");
}

#[test]
fn artist_names_single_and_empty() {
    assert_eq!(artist_names(&[test_artist("Alice")]), "Alice");
    assert_eq!(artist_names(&[]), "");
}

#[test]
fn image_url_picks_first_exact_match() {
    let images = vec![
        test_image("https://img/64", 64, 64),
        test_image("X", 300, 300),
        test_image("Y", 300, 300),
        test_image("https://img/640", 640, 640),
    ];
    assert_eq!(image_url_by_dimensions(&images, 300, 300), Some("X".to_string()));
}

#[test]
fn image_url_none_when_unmatched() {
    let images = vec![
        test_image("https://img/64", 64, 64),
        test_image("https://img/640", 640, 640),
    ];
    assert_eq!(image_url_by_dimensions(&images, 300, 300), None);
    assert_eq!(image_url_by_dimensions(&[], 300, 300), None);
}

#[test]
fn trace_resource_builds_project_scoped_name() {
    let mut headers = HeaderMap::new();
    headers.insert(
        "traceparent",
        HeaderValue::from_static("00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01"),
    );
    assert_eq!(
        trace_resource(&headers, "my-project"),
        Some("projects/my-project/traces/4bf92f3577b34da6a3ce929d0e0e4736".to_string())
    );
}

#[test]
fn trace_resource_requires_header_and_project() {
    let mut headers = HeaderMap::new();
    headers.insert("traceparent", HeaderValue::from_static("00-abc-def-01"));
    assert_eq!(trace_resource(&headers, ""), None);
    assert_eq!(trace_resource(&HeaderMap::new(), "my-project"), None);

    let mut malformed = HeaderMap::new();
    malformed.insert("traceparent", HeaderValue::from_static("garbage"));
    assert_eq!(trace_resource(&malformed, "my-project"), None);
}

fn playing_body() -> Value {
    json!({
        "timestamp": 1722817000000i64,
        "currently_playing_type": "track",
        "is_playing": true,
        "item": {
            "id": "3n3Ppam7vgaVa1iaRUc9Lp",
            "type": "track",
            "name": "Mr. Brightside",
            "external_urls": {"spotify": "https://open.spotify.com/track/3n3Ppam7vgaVa1iaRUc9Lp"},
            "artists": [
                {"id": "a1", "name": "The Killers"},
                {"id": "a2", "name": "Brandon Flowers"}
            ],
            "album": {
                "id": "4OHNH3sDzIxnmUADXzv2kT",
                "name": "Hot Fuss",
                "images": [
                    {"url": "https://i.scdn.co/image/640", "width": 640, "height": 640},
                    {"url": "https://i.scdn.co/image/300", "width": 300, "height": 300}
                ]
            }
        }
    })
}

/// Spins up a stub upstream plus the service itself, returning the
/// service address.
async fn spawn_service(play_status: u16, play_body: String) -> SocketAddr {
    let status = StatusCode::from_u16(play_status).unwrap();
    let body = Arc::new(play_body);
    let upstream = Router::new()
        .route(
            "/api/token",
            post(|| async {
                Json(json!({
                    "access_token": "test-access-token",
                    "token_type": "Bearer",
                    "expires_in": 3600,
                    "scope": "",
                }))
            }),
        )
        .route(
            "/v1/me/player/currently-playing",
            get(move || {
                let body = Arc::clone(&body);
                async move { (status, (*body).clone()).into_response() }
            }),
        );

    let upstream_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let upstream_addr = upstream_listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(upstream_listener, upstream).await.unwrap();
    });

    let client = Arc::new(Client::new(Credentials {
        base_url: format!("http://{}", upstream_addr),
        credentials_url: format!("http://{}/api/token", upstream_addr),
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        refresh_token: "refresh-token".to_string(),
    }));
    let app = server::router(client);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn healthz_returns_ok() {
    let addr = spawn_service(200, playing_body().to_string()).await;

    let resp = reqwest::get(format!("http://{}/healthz", addr)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn currently_playing_returns_shaped_response() {
    let addr = spawn_service(200, playing_body().to_string()).await;

    let resp = reqwest::get(format!("http://{}/currently-playing", addr))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], "3n3Ppam7vgaVa1iaRUc9Lp");
    assert_eq!(body["name"], "Mr. Brightside");
    assert_eq!(body["artists"], "The Killers, Brandon Flowers");
    assert_eq!(
        body["url"],
        "https://open.spotify.com/track/3n3Ppam7vgaVa1iaRUc9Lp"
    );
    assert_eq!(body["image_url"], "https://i.scdn.co/image/300");
    assert_eq!(body["playing"], true);
}

#[tokio::test]
async fn image_field_is_omitted_when_unmatched() {
    let mut playing = playing_body();
    playing["item"]["album"]["images"] = json!([
        {"url": "https://i.scdn.co/image/640", "width": 640, "height": 640}
    ]);
    let addr = spawn_service(200, playing.to_string()).await;

    let resp = reqwest::get(format!("http://{}/currently-playing", addr))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "Mr. Brightside");
    assert!(body.get("image_url").is_none());
}

#[tokio::test]
async fn upstream_failure_maps_to_no_content() {
    let addr = spawn_service(500, String::new()).await;

    let resp = reqwest::get(format!("http://{}/currently-playing", addr))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(resp.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn nothing_playing_maps_to_no_content() {
    // Spotify reports an idle account as a 200 with an empty body.
    let addr = spawn_service(200, String::new()).await;

    let resp = reqwest::get(format!("http://{}/currently-playing", addr))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(resp.text().await.unwrap().is_empty());
}
