use std::{ops::Deref, time::Duration};

use anyhow::Context;
use summit_utils::Apply;

pub const USER_AGENT: &str = concat!(
    "Summit Connect Backend (Version ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl HttpClient {
    /// Build a client which gives up on requests after `timeout`.
    pub fn new(timeout: Option<Duration>) -> anyhow::Result<Self> {
        reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .apply_map(timeout, reqwest::ClientBuilder::timeout)
            .build()
            .map(Self)
            .context("Failed to build http client")
    }
}
