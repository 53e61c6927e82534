use std::{net::IpAddr, sync::Arc};

use axum::Router;
use summit_core_contact_contracts::ContactFeatureService;
use summit_core_fun_contracts::FunFeatureService;
use tokio::net::TcpListener;
use tracing::info;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact, Fun> {
    contact: Contact,
    fun: Fun,
}

impl<Contact, Fun> RestServer<Contact, Fun>
where
    Contact: ContactFeatureService,
    Fun: FunFeatureService,
{
    pub fn new(contact: Contact, fun: Fun) -> Self {
        Self { contact, fun }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        info!("listening on {}", listener.local_addr()?);
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router())
            .merge(routes::contact::router(Arc::new(self.contact)))
            .merge(routes::fun::router(Arc::new(self.fun)));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
