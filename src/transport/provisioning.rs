// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Endpoints of the infrastructure provisioning service.

use super::{ApiResponse, Transport};
use crate::constants::paths;
use crate::error::Result;
use crate::types::{
    ListProvisioningRequestsParams, ProvisioningRequestData, ProvisioningRequestInfo,
};
use http::{Method, StatusCode};
use uuid::Uuid;

pub async fn list_provisioning_requests(
    transport: &Transport,
    params: &ListProvisioningRequestsParams,
) -> Result<ApiResponse<Vec<ProvisioningRequestInfo>>> {
    let url = transport.endpoint(
        paths::PROVISIONING,
        &[paths::PROVISIONING_REQUESTS],
        &params.query_pairs(),
    )?;
    transport
        .send::<()>(Method::GET, url, None)
        .await?
        .decode(StatusCode::OK)
}

pub async fn get_provisioning_request(
    transport: &Transport,
    id: Uuid,
) -> Result<ApiResponse<ProvisioningRequestInfo>> {
    let id = id.to_string();
    let url = transport.endpoint(
        paths::PROVISIONING,
        &[paths::PROVISIONING_REQUESTS, id.as_str()],
        &[],
    )?;
    transport
        .send::<()>(Method::GET, url, None)
        .await?
        .decode(StatusCode::OK)
}

/// `POST provisioningRequests`; the server answers 201 with the stored request
pub async fn create_provisioning_request(
    transport: &Transport,
    data: &ProvisioningRequestData,
) -> Result<ApiResponse<ProvisioningRequestInfo>> {
    let url = transport.endpoint(paths::PROVISIONING, &[paths::PROVISIONING_REQUESTS], &[])?;
    transport
        .send(Method::POST, url, Some(data))
        .await?
        .decode(StatusCode::CREATED)
}

pub async fn update_provisioning_request(
    transport: &Transport,
    id: Uuid,
    data: &ProvisioningRequestData,
) -> Result<ApiResponse<ProvisioningRequestInfo>> {
    let id = id.to_string();
    let url = transport.endpoint(
        paths::PROVISIONING,
        &[paths::PROVISIONING_REQUESTS, id.as_str()],
        &[],
    )?;
    transport
        .send(Method::PUT, url, Some(data))
        .await?
        .decode(StatusCode::OK)
}

/// `DELETE provisioningRequests/{id}`; success is 200, never 204
pub async fn delete_provisioning_request(
    transport: &Transport,
    id: Uuid,
) -> Result<ApiResponse<()>> {
    let id = id.to_string();
    let url = transport.endpoint(
        paths::PROVISIONING,
        &[paths::PROVISIONING_REQUESTS, id.as_str()],
        &[],
    )?;
    transport
        .send::<()>(Method::DELETE, url, None)
        .await?
        .expect_status(StatusCode::OK)
}
