use std::{net::SocketAddr, sync::Arc};

use axum::{Extension, Router, middleware, routing::get};
use tokio::net::TcpListener;
use tracing::info;

use crate::{Res, api, config, spotify::Client};

/// Assembles the service router with its middleware stack.
pub fn router(client: Arc<Client>) -> Router {
    Router::new()
        .route("/currently-playing", get(api::currently_playing))
        .route("/healthz", get(api::health))
        .layer(Extension(client))
        .layer(middleware::from_fn(api::log_requests))
        .layer(middleware::from_fn(api::trace_context))
}

/// Binds the listener and serves requests until the process is
/// interrupted; in-flight requests are drained before returning.
pub async fn start_api_server(client: Arc<Client>) -> Res<()> {
    let app = router(client);

    let addr = SocketAddr::from(([0, 0, 0, 0], config::server_port()));
    let listener = TcpListener::bind(addr).await?;
    info!("listening on port {}", addr.port());

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
