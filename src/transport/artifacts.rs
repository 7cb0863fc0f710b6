// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Endpoints of the infrastructure artifacts service.

use super::{ApiResponse, Transport};
use crate::constants::{paths, FILTER_QUERY_PARAM};
use crate::error::Result;
use crate::types::{ManagedInfrastructureTemplate, ManagedInfrastructureTemplateDefaults};
use http::{Method, StatusCode};

/// `GET managedInfrastructureTemplates`; the body may legitimately be `null`
pub async fn list_managed_infrastructure_templates(
    transport: &Transport,
    filter: Option<String>,
) -> Result<ApiResponse<Option<Vec<ManagedInfrastructureTemplate>>>> {
    let query: Vec<(&str, String)> = filter.map(|f| (FILTER_QUERY_PARAM, f)).into_iter().collect();
    let url = transport.endpoint(
        paths::ARTIFACTS,
        &[paths::MANAGED_INFRASTRUCTURE_TEMPLATES],
        &query,
    )?;
    transport
        .send::<()>(Method::GET, url, None)
        .await?
        .decode(StatusCode::OK)
}

/// `GET managedInfrastructureTemplates/{id}`
pub async fn get_managed_infrastructure_template(
    transport: &Transport,
    id: &str,
) -> Result<ApiResponse<ManagedInfrastructureTemplate>> {
    let url = transport.endpoint(
        paths::ARTIFACTS,
        &[paths::MANAGED_INFRASTRUCTURE_TEMPLATES, id],
        &[],
    )?;
    transport
        .send::<()>(Method::GET, url, None)
        .await?
        .decode(StatusCode::OK)
}

/// `GET managedInfrastructureTemplates/{id}/defaults`
pub async fn get_managed_infrastructure_template_defaults(
    transport: &Transport,
    id: &str,
) -> Result<ApiResponse<ManagedInfrastructureTemplateDefaults>> {
    let url = transport.endpoint(
        paths::ARTIFACTS,
        &[paths::MANAGED_INFRASTRUCTURE_TEMPLATES, id, paths::DEFAULTS],
        &[],
    )?;
    transport
        .send::<()>(Method::GET, url, None)
        .await?
        .decode(StatusCode::OK)
}
