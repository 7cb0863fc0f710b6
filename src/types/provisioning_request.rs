// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ListMeta, Time};
use k8s_openapi::apimachinery::pkg::runtime::RawExtension;
use kube::{CustomResource, ResourceExt};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A request to provision a cluster from a template. The object name is the
/// request's UUID.
#[derive(
    CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema,
)]
#[kube(
    group = "clcm.openshift.io",
    version = "v1alpha1",
    kind = "ProvisioningRequest",
    plural = "provisioningrequests"
)]
#[kube(status = "ProvisioningRequestStatus")]
#[kube(derive = "Default", derive = "PartialEq")]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningRequestSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub template_name: String,
    pub template_version: String,
    /// Template parameters as an embedded JSON document
    #[serde(default)]
    pub template_parameters: RawExtension,
}

impl ProvisioningRequest {
    /// Parse the object name as the request UUID
    pub fn uuid(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.name_any())
    }

    /// Current provisioning phase reported by the server
    pub fn phase(&self) -> Option<&str> {
        self.status
            .as_ref()
            .map(|s| s.provisioning_status.provisioning_phase.as_str())
            .filter(|phase| !phase.is_empty())
    }

    /// Identifier of the O-Cloud node cluster backing this request, if provisioned
    pub fn node_cluster_id(&self) -> Option<&str> {
        self.status
            .as_ref()
            .and_then(|s| s.provisioning_status.provisioned_resources.as_ref())
            .map(|r| r.o_cloud_node_cluster_id.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningRequestStatus {
    #[serde(default)]
    pub provisioning_status: ProvisioningStatus,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningStatus {
    #[serde(default)]
    pub provisioning_phase: String,
    #[serde(default)]
    pub provisioning_details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_resources: Option<ProvisionedResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<Time>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedResources {
    #[serde(rename = "oCloudNodeClusterId", default)]
    pub o_cloud_node_cluster_id: String,
}

/// List of ProvisioningRequest objects
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ProvisioningRequestList {
    #[serde(default)]
    pub metadata: ListMeta,
    #[serde(default)]
    pub items: Vec<ProvisioningRequest>,
}
