use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use portfolio_models::email_address::EmailAddress;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Load the configuration by merging the given toml files in order.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Origins allowed to submit the contact form from a browser
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactConfig {
    /// Sender of contact notifications
    pub from: Option<EmailAddress>,
    /// Owner address receiving contact notifications
    pub recipient: Option<EmailAddress>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_str(sources: &[&str]) -> anyhow::Result<Config> {
        sources
            .iter()
            .fold(config::Config::builder(), |builder, content| {
                builder.add_source(File::from_str(content, FileFormat::Toml))
            })
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    #[test]
    fn load_default_config() {
        let config = load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        assert!(config.contact.from.is_none());
        assert!(config.contact.recipient.is_none());
    }

    #[test]
    fn missing_config_file() {
        let err = load(&[Path::new("/nonexistent/portfolio.toml")]).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/portfolio.toml"));
    }

    #[test]
    fn later_sources_override() {
        let config = load_str(&[
            r#"
            [http]
            host = "127.0.0.1"
            port = 8000

            [email]
            smtp_url = "smtp://127.0.0.1:2525"
            "#,
            r#"
            [http]
            port = 9000
            allowed_origins = ["https://portfolio.example.com"]

            [contact]
            from = "notifications@example.com"
            recipient = "owner@example.com"
            "#,
        ])
        .unwrap();

        assert_eq!(config.http.host.to_string(), "127.0.0.1");
        assert_eq!(config.http.port, 9000);
        assert_eq!(
            config.http.allowed_origins,
            ["https://portfolio.example.com"]
        );
        assert_eq!(
            config.contact.from.unwrap().as_str(),
            "notifications@example.com"
        );
        assert_eq!(
            config.contact.recipient.unwrap().as_str(),
            "owner@example.com"
        );
    }

    #[test]
    fn invalid_contact_address() {
        let result = load_str(&[r#"
            [http]
            host = "127.0.0.1"
            port = 8000

            [email]
            smtp_url = "smtp://127.0.0.1:2525"

            [contact]
            recipient = "not an address"
            "#]);

        assert!(result.is_err());
    }
}
