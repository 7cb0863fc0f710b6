// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read-only access to managed infrastructure templates.

use crate::error::{Error, Result, ResultExt};
use crate::filter::Filter;
use crate::transport::{self, Transport};
use crate::types::{ManagedInfrastructureTemplate, ManagedInfrastructureTemplateDefaults};
use tracing::{debug, instrument};

/// Client for the O2IMS infrastructure artifacts service
#[derive(Clone)]
pub struct ArtifactsClient {
    transport: Transport,
}

impl ArtifactsClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub fn base_url(&self) -> &url::Url {
        self.transport.base_url()
    }

    /// List templates, narrowed by the first of `filters` if any is given
    #[instrument(skip_all, fields(filter))]
    pub async fn list_managed_infrastructure_templates(
        &self,
        filters: &[Filter],
    ) -> Result<Vec<ManagedInfrastructureTemplate>> {
        let filter = filters.first().map(Filter::to_string);
        if let Some(filter) = &filter {
            tracing::Span::current().record("filter", filter.as_str());
        }

        let templates =
            transport::artifacts::list_managed_infrastructure_templates(&self.transport, filter)
                .await
                .and_then(|response| response.into_result())
                .during("list managed infrastructure templates")?
                .ok_or_else(|| {
                    Error::UnexpectedResponse {
                        status: 200,
                        body: "null".to_string(),
                    }
                    .during("list managed infrastructure templates")
                })?;

        debug!(count = templates.len(), "Listed managed infrastructure templates");
        Ok(templates)
    }

    #[instrument(skip(self))]
    pub async fn get_managed_infrastructure_template(
        &self,
        id: &str,
    ) -> Result<ManagedInfrastructureTemplate> {
        transport::artifacts::get_managed_infrastructure_template(&self.transport, id)
            .await
            .and_then(|response| response.into_result())
            .during("get managed infrastructure template")
    }

    #[instrument(skip(self))]
    pub async fn get_managed_infrastructure_template_defaults(
        &self,
        id: &str,
    ) -> Result<ManagedInfrastructureTemplateDefaults> {
        transport::artifacts::get_managed_infrastructure_template_defaults(&self.transport, id)
            .await
            .and_then(|response| response.into_result())
            .during("get managed infrastructure template defaults")
    }
}
