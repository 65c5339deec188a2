use std::{net::SocketAddr, time::Instant};

use axum::{
    extract::{ConnectInfo, Request},
    http::{HeaderMap, header::USER_AGENT},
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, info, info_span};

use crate::config;

/// Opens a request span carrying the trace resource name when the caller
/// sent a `traceparent` header and a Google Cloud project is configured.
/// Every log event emitted while the request is handled inherits the span.
pub async fn trace_context(req: Request, next: Next) -> Response {
    match trace_resource(req.headers(), &config::google_project()) {
        Some(trace) => {
            let span = info_span!("request", trace = %trace);
            next.run(req).instrument(span).await
        }
        None => next.run(req).await,
    }
}

/// Emits one structured access-log event per handled request.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let remote_addr = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_default();

    let start = Instant::now();
    let resp = next.run(req).await;
    let duration = start.elapsed();

    info!(
        method = %method,
        url = %uri,
        status = resp.status().as_u16(),
        remote_addr = %remote_addr,
        duration_ms = duration.as_millis() as u64,
        user_agent = %user_agent,
        "{} {} ({:?})",
        method,
        uri.path(),
        duration,
    );

    resp
}

/// Builds the trace resource name `projects/<project>/traces/<trace-id>`
/// from a W3C `traceparent` header, which is formatted as
/// `00-<trace-id>-<span-id>-<trace-flags>`. Returns `None` when the header
/// is missing or malformed, or when no project is configured.
pub fn trace_resource(headers: &HeaderMap, project: &str) -> Option<String> {
    if project.is_empty() {
        return None;
    }
    let header_val = headers.get("traceparent")?.to_str().ok()?;
    let trace_id = header_val.split('-').nth(1)?;
    Some(format!("projects/{}/traces/{}", project, trace_id))
}
