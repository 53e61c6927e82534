//! Fake third party APIs for integration tests and local development.

use std::net::{IpAddr, Ipv4Addr};

use anyhow::Context;
use axum::{
    http::{header::AUTHORIZATION, HeaderMap},
    Router,
};
use tokio::net::TcpListener;
use url::Url;

pub mod resend;
pub mod together;

/// Serve `router` on `host:port` until the server fails.
pub async fn serve(router: Router, host: IpAddr, port: u16) -> anyhow::Result<()> {
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

/// Serve `router` on an ephemeral localhost port in a background task and
/// return its base url.
pub async fn spawn(router: Router) -> anyhow::Result<Url> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .context("Failed to bind to an ephemeral port")?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, router).await });
    format!("http://{addr}/")
        .parse()
        .context("Failed to build server url")
}

fn is_authorized(headers: &HeaderMap, api_key: &str) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|value| value == api_key)
}
