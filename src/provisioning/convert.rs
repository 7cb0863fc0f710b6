// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Conversion between typed ProvisioningRequest objects and wire payloads.

use crate::error::{Error, Result};
use crate::types::{
    ProvisionedResources, ProvisioningRequest, ProvisioningRequestData, ProvisioningRequestInfo,
    ProvisioningRequestSpec, ProvisioningRequestStatus, ProvisioningStatus,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use k8s_openapi::apimachinery::pkg::runtime::RawExtension;
use kube::api::ObjectMeta;
use kube::ResourceExt;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Parse an object name as a provisioning request id
pub fn parse_request_id(name: &str) -> Result<Uuid> {
    Uuid::parse_str(name).map_err(|source| Error::InvalidUuid {
        name: name.to_string(),
        source,
    })
}

/// Build the payload sent on create and update
pub fn data_from_provisioning_request(
    request: &ProvisioningRequest,
) -> Result<ProvisioningRequestData> {
    let provisioning_request_id = parse_request_id(&request.name_any())?;
    let template_parameters: Map<String, Value> =
        serde_json::from_value(request.spec.template_parameters.0.clone()).map_err(|source| {
            Error::Serialization {
                what: "template parameters",
                source,
            }
        })?;

    Ok(ProvisioningRequestData {
        provisioning_request_id,
        name: request.spec.name.clone(),
        description: request.spec.description.clone(),
        template_name: request.spec.template_name.clone(),
        template_version: request.spec.template_version.clone(),
        template_parameters,
    })
}

/// Build a typed object from a server response. Status always reflects the
/// response; absent fields become defaults.
pub fn provisioning_request_from_info(info: ProvisioningRequestInfo) -> ProvisioningRequest {
    let data = info.provisioning_request_data;
    let status = info.status.unwrap_or_default();
    let provisioned_resources = info
        .provisioned_resource_sets
        .and_then(|sets| sets.node_cluster_id)
        .map(|id| ProvisionedResources {
            o_cloud_node_cluster_id: id.to_string(),
        });

    ProvisioningRequest {
        metadata: ObjectMeta {
            name: Some(data.provisioning_request_id.to_string()),
            ..Default::default()
        },
        spec: ProvisioningRequestSpec {
            name: data.name,
            description: data.description,
            template_name: data.template_name,
            template_version: data.template_version,
            template_parameters: RawExtension(Value::Object(data.template_parameters)),
        },
        status: Some(ProvisioningRequestStatus {
            provisioning_status: ProvisioningStatus {
                provisioning_phase: status.provisioning_phase.unwrap_or_default(),
                provisioning_details: status.message.unwrap_or_default(),
                provisioned_resources,
                update_time: status.update_time.map(Time),
            },
        }),
    }
}
