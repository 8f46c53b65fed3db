//! Translate the loaded configuration into the configs of the individual services

use portfolio_api_rest::{RestServer, RestServerConfig};
use portfolio_config::Config;
use portfolio_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use portfolio_email_impl::EmailServiceImpl;

pub type Contact = ContactServiceImpl<EmailServiceImpl>;

pub fn rest_server_config(config: &Config) -> RestServerConfig {
    RestServerConfig {
        host: config.http.host,
        port: config.http.port,
        allowed_origins: config.http.allowed_origins.clone(),
    }
}

pub fn contact_service_config(config: &Config) -> anyhow::Result<ContactServiceConfig> {
    ContactServiceConfig::new(
        config.contact.from.clone(),
        config.contact.recipient.clone(),
    )
}

pub fn rest_server(
    config: &Config,
    email: EmailServiceImpl,
) -> anyhow::Result<RestServer<Contact>> {
    let contact = ContactServiceImpl::new(email, contact_service_config(config)?);
    Ok(RestServer::new(rest_server_config(config), contact))
}
