use summit_config::Config;
use tracing::{info, warn};

use crate::environment::{
    types::{Email, RestServer, TogetherApi},
    Provider, Provides,
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let provider = Provider::new(&config)?;

    let email: Option<Email> = provider.provide();
    if email.is_none() || config.contact.recipient.is_none() {
        warn!("Email delivery is not configured, contact submissions will be refused");
    }

    let together_api: Option<TogetherApi> = provider.provide();
    if together_api.is_none() {
        warn!("TOGETHER_API_KEY is not set, fun questions will be refused");
    }

    let server: RestServer = provider.provide();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
