// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::builder::{ClientBuilder, HttpClientConfig, TlsConfig};
use crate::constants::env as vars;
use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::time::Duration;

/// Client configuration loaded from environment variables
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub token: Option<String>,
    /// Skip server certificate verification
    pub insecure_skip_verify: bool,
    pub connect_timeout: Option<Duration>,
    pub read_timeout: Option<Duration>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("insecure_skip_verify", &self.insecure_skip_verify)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .finish()
    }
}

fn parse_secs(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<Duration>> {
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .with_context(|| format!("{} must be a number of seconds, got '{}'", name, raw))
        })
        .transpose()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup(vars::BASE_URL)
            .filter(|url| !url.is_empty())
            .with_context(|| format!("{} environment variable not set", vars::BASE_URL))?;
        let token = lookup(vars::TOKEN).filter(|token| !token.is_empty());
        let insecure_skip_verify = match lookup(vars::INSECURE_SKIP_VERIFY) {
            Some(raw) => raw.trim().parse().with_context(|| {
                format!("{} must be true or false, got '{}'", vars::INSECURE_SKIP_VERIFY, raw)
            })?,
            None => false,
        };

        Ok(Config {
            base_url,
            token,
            insecure_skip_verify,
            connect_timeout: parse_secs(&lookup, vars::CONNECT_TIMEOUT_SECS)?,
            read_timeout: parse_secs(&lookup, vars::READ_TIMEOUT_SECS)?,
        })
    }

    /// A client builder carrying this configuration
    pub fn builder(&self) -> ClientBuilder {
        let mut builder = ClientBuilder::new()
            .with_base_url(self.base_url.clone())
            .with_http_client(HttpClientConfig {
                connect_timeout: self.connect_timeout,
                read_timeout: self.read_timeout,
                ..Default::default()
            });
        if self.insecure_skip_verify {
            builder = builder.with_tls_config(TlsConfig {
                accept_invalid_certs: true,
                ..Default::default()
            });
        }
        if let Some(token) = &self.token {
            builder = builder.with_bearer_token(token);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_minimal_config() {
        let config =
            Config::from_lookup(lookup(&[("O2IMS_BASE_URL", "https://o2ims.example.com")]))
                .unwrap();

        assert_eq!(config.base_url, "https://o2ims.example.com");
        assert_eq!(config.token, None);
        assert!(!config.insecure_skip_verify);
        assert_eq!(config.connect_timeout, None);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_lookup(lookup(&[
            ("O2IMS_BASE_URL", "https://o2ims.example.com"),
            ("O2IMS_TOKEN", "s3cr3t"),
            ("O2IMS_INSECURE_SKIP_VERIFY", "true"),
            ("O2IMS_CONNECT_TIMEOUT_SECS", "5"),
            ("O2IMS_READ_TIMEOUT_SECS", " 30 "),
        ]))
        .unwrap();

        assert_eq!(config.token.as_deref(), Some("s3cr3t"));
        assert!(config.insecure_skip_verify);
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.read_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_missing_base_url() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("O2IMS_BASE_URL"));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = Config::from_lookup(lookup(&[
            ("O2IMS_BASE_URL", "https://o2ims.example.com"),
            ("O2IMS_READ_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("O2IMS_READ_TIMEOUT_SECS"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::from_lookup(lookup(&[
            ("O2IMS_BASE_URL", "https://o2ims.example.com"),
            ("O2IMS_TOKEN", "s3cr3t"),
        ]))
        .unwrap();

        let debug = format!("{:?}", config);
        assert!(!debug.contains("s3cr3t"));
        assert!(debug.contains("<redacted>"));
    }

    #[tokio::test]
    async fn test_builder_produces_clients() {
        let config = Config::from_lookup(lookup(&[
            ("O2IMS_BASE_URL", "https://o2ims.example.com/"),
            ("O2IMS_TOKEN", "s3cr3t"),
            ("O2IMS_INSECURE_SKIP_VERIFY", "true"),
        ]))
        .unwrap();

        let client = config.builder().build_artifacts().unwrap();
        assert_eq!(client.base_url().as_str(), "https://o2ims.example.com/");
    }
}
