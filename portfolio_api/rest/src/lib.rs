use std::net::IpAddr;

use axum::Router;
use portfolio_core_contact_contracts::ContactService;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact> {
    config: RestServerConfig,
    contact: Contact,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactService,
{
    pub fn new(config: RestServerConfig, contact: Contact) -> Self {
        Self { config, contact }
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let (host, port) = (self.config.host, self.config.port);
        let router = self.router()?;
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> anyhow::Result<Router<()>> {
        let cors = middlewares::cors::layer(&self.config.allowed_origins)?;

        let router = Router::new().merge(routes::contact::router(self.contact.into()));
        let router = middlewares::panic_handler::add(router).layer(cors);
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);

        Ok(router)
    }
}
