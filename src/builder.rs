// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client builder shared by the artifacts and provisioning clients.
//!
//! Options are collected on a [`ClientBuilder`]; the first invalid option is
//! kept as a deferred error, later options are ignored and every build call
//! reports it.

use crate::artifacts::ArtifactsClient;
use crate::error::{Error, Result};
use crate::provisioning::ProvisioningClient;
use crate::transport::Transport;
use http::HeaderValue;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// TLS settings applied to the HTTP client
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TlsConfig {
    /// Additional trusted root certificates, DER encoded
    pub root_certificates: Vec<Vec<u8>>,
    /// Skip server certificate verification
    pub accept_invalid_certs: bool,
}

/// HTTP client settings. The default value applies no timeouts and the
/// platform trust store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpClientConfig {
    pub connect_timeout: Option<Duration>,
    pub read_timeout: Option<Duration>,
    pub proxy_url: Option<http::Uri>,
    pub tls: Option<TlsConfig>,
}

impl HttpClientConfig {
    /// Translate into a kube client configuration addressing the origin of `base_url`
    pub fn kube_config(&self, base_url: &Url) -> Result<kube::Config> {
        let origin = base_url.origin().ascii_serialization();
        let cluster_url = origin
            .parse::<http::Uri>()
            .map_err(|e| Error::Builder(format!("invalid base url {}: {}", base_url, e)))?;

        let mut config = kube::Config::new(cluster_url);
        config.connect_timeout = self.connect_timeout;
        config.read_timeout = self.read_timeout;
        config.proxy_url = self.proxy_url.clone();
        if let Some(tls) = &self.tls {
            config.accept_invalid_certs = tls.accept_invalid_certs;
            if !tls.root_certificates.is_empty() {
                config.root_cert = Some(tls.root_certificates.clone());
            }
        }
        Ok(config)
    }
}

/// Collects connection options and builds API clients
#[derive(Clone, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    http_client: Option<HttpClientConfig>,
    kube_client: Option<kube::Client>,
    authorization: Option<HeaderValue>,
    error: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Endpoint prefix for all requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        if self.error.is_none() {
            self.base_url = Some(base_url.into());
        }
        self
    }

    /// HTTP client settings (timeouts, proxy, TLS)
    pub fn with_http_client(mut self, http_client: HttpClientConfig) -> Self {
        if self.error.is_some() {
            return self;
        }
        if self.kube_client.is_some() {
            return self.fail("an http client cannot be combined with a prebuilt kube client");
        }
        self.http_client = Some(http_client);
        self
    }

    /// Replace the TLS settings of the HTTP client, creating a default one if needed
    pub fn with_tls_config(mut self, tls: TlsConfig) -> Self {
        if self.error.is_some() {
            return self;
        }
        if self.kube_client.is_some() {
            return self.fail("tls config cannot be applied to a prebuilt kube client");
        }
        self.http_client.get_or_insert_with(HttpClientConfig::default).tls = Some(tls);
        self
    }

    /// Use a ready-made kube client as the HTTP stack
    pub fn with_kube_client(mut self, client: kube::Client) -> Self {
        if self.error.is_some() {
            return self;
        }
        if self.http_client.is_some() {
            return self.fail("a prebuilt kube client cannot be combined with http client settings");
        }
        self.kube_client = Some(client);
        self
    }

    /// Send `Authorization: Bearer <token>` with every request. An empty token is ignored.
    pub fn with_bearer_token(mut self, token: impl AsRef<str>) -> Self {
        let token = token.as_ref();
        if self.error.is_some() || token.is_empty() {
            return self;
        }
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                self.authorization = Some(value);
                self
            }
            Err(_) => self.fail("bearer token contains characters not allowed in a header"),
        }
    }

    fn fail(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }

    fn base_url(&self) -> Result<Url> {
        let raw = self
            .base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::Builder("base url is required".to_string()))?;
        let url = Url::parse(raw)
            .map_err(|e| Error::Builder(format!("invalid base url {}: {}", raw, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Builder(format!(
                "base url {} must use http or https",
                raw
            )));
        }
        Ok(url)
    }

    /// Assemble a transport. Building a new http client needs a Tokio runtime.
    fn transport(&self) -> Result<Transport> {
        if let Some(reason) = &self.error {
            return Err(Error::Builder(reason.clone()));
        }
        let base_url = self.base_url()?;

        let client = match &self.kube_client {
            Some(client) => client.clone(),
            None => {
                if tokio::runtime::Handle::try_current().is_err() {
                    return Err(Error::Builder(
                        "a tokio runtime is required to build an http client".to_string(),
                    ));
                }
                let config = self
                    .http_client
                    .clone()
                    .unwrap_or_default()
                    .kube_config(&base_url)?;
                kube::Client::try_from(config)?
            }
        };

        debug!(
            base_url = %base_url,
            authenticated = self.authorization.is_some(),
            "Built O2IMS transport"
        );
        Ok(Transport::new(client, base_url, self.authorization.clone()))
    }

    pub fn build_provisioning(&self) -> Result<ProvisioningClient> {
        self.transport()
            .map(ProvisioningClient::new)
            .map_err(|e| e.during("build provisioning client"))
    }

    pub fn build_artifacts(&self) -> Result<ArtifactsClient> {
        self.transport()
            .map(ArtifactsClient::new)
            .map_err(|e| e.during("build artifacts client"))
    }
}
