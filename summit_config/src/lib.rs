use std::{ffi::OsString, net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use summit_models::{email_address::EmailAddressWithName, Sensitive};
use url::Url;

pub use duration::Duration;

mod duration;

/// The configuration shipped with the binary. Every other source is layered on
/// top of it.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Environment variable holding a list of additional config files.
pub const CONFIG_PATHS_ENV: &str = "SUMMIT_CONFIG";

/// Environment variables that override single config keys. Secrets are only
/// ever read from here.
pub const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("RESEND_API_KEY", "email.api_key"),
    ("CONTACT_FROM", "email.from"),
    ("CONTACT_TO", "contact.recipient"),
    ("TOGETHER_API_KEY", "fun.api_key"),
    ("PORT", "http.port"),
];

/// Load the config from the default config, the files listed in
/// `SUMMIT_CONFIG` and the process environment.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os(CONFIG_PATHS_ENV)
        .as_deref()
        .map(|paths| std::env::split_paths(paths).collect::<Vec<_>>())
        .unwrap_or_default();

    load_with_env(&paths, |key| std::env::var_os(key))
}

/// Load the config from the default config and the given files, reading
/// environment overrides through `env`.
pub fn load_with_env(
    paths: &[impl AsRef<Path>],
    env: impl Fn(&str) -> Option<OsString>,
) -> anyhow::Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    let builder = paths.iter().try_fold(builder, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        anyhow::Ok(builder.add_source(File::from_str(&content, FileFormat::Toml)))
    })?;

    let builder = ENV_OVERRIDES
        .iter()
        .try_fold(builder, |builder, &(var, key)| {
            let value = env(var)
                .map(|value| {
                    value
                        .into_string()
                        .map_err(|_| anyhow::anyhow!("{var} is not valid unicode"))
                })
                .transpose()?
                .filter(|value| !value.is_empty());
            builder
                .set_override_option(key, value)
                .with_context(|| format!("Failed to apply {var}"))
        })?;

    builder
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
    pub fun: FunConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub endpoint: Url,
    pub timeout: Duration,
    pub api_key: Option<Sensitive<String>>,
    pub from: Option<EmailAddressWithName>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactConfig {
    pub recipient: Option<EmailAddressWithName>,
}

#[derive(Debug, Deserialize)]
pub struct FunConfig {
    pub endpoint: Url,
    pub timeout: Duration,
    pub api_key: Option<Sensitive<String>>,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars = vars
            .iter()
            .map(|&(k, v)| (k.to_owned(), OsString::from(v)))
            .collect::<HashMap<_, _>>();
        load_with_env(&[] as &[&Path], |key| vars.get(key).cloned())
    }

    #[test]
    fn load_default_config() {
        let config = load_from(&[]).unwrap();

        assert_eq!(config.http.port, 8000);
        assert_eq!(
            config.email.endpoint.as_str(),
            "https://api.resend.com/emails"
        );
        assert_eq!(*config.email.timeout, std::time::Duration::from_secs(15));
        assert_eq!(config.email.api_key, None);
        assert_eq!(config.email.from, None);
        assert_eq!(config.contact.recipient, None);
        assert_eq!(config.fun.api_key, None);
        assert_eq!(config.fun.model, "mistralai/Mixtral-8x7B-Instruct-v0.1");
        assert_eq!(config.fun.temperature, 0.8);
        assert_eq!(config.fun.max_tokens, 240);
    }

    #[test]
    fn env_overrides() {
        let config = load_from(&[
            ("RESEND_API_KEY", "re_123"),
            ("CONTACT_FROM", "Summit Connect <hello@example.com>"),
            ("CONTACT_TO", "sales@example.com"),
            ("TOGETHER_API_KEY", "tg_456"),
            ("PORT", "9000"),
        ])
        .unwrap();

        assert_eq!(config.email.api_key.as_ref().map(|x| x.as_str()), Some("re_123"));
        assert_eq!(
            config.email.from,
            Some("Summit Connect <hello@example.com>".parse().unwrap())
        );
        assert_eq!(
            config.contact.recipient,
            Some("sales@example.com".parse().unwrap())
        );
        assert_eq!(config.fun.api_key.as_ref().map(|x| x.as_str()), Some("tg_456"));
        assert_eq!(config.http.port, 9000);
    }

    #[test]
    fn empty_env_values_are_unset() {
        let config = load_from(&[("RESEND_API_KEY", ""), ("TOGETHER_API_KEY", "")]).unwrap();

        assert_eq!(config.email.api_key, None);
        assert_eq!(config.fun.api_key, None);
    }

    #[test]
    fn invalid_mailbox() {
        assert!(load_from(&[("CONTACT_TO", "not-an-email")]).is_err());
    }
}
