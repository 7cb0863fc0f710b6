// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Payloads exchanged with the O2IMS provisioning service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Provisioning request as sent to the server on create and update
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningRequestData {
    pub provisioning_request_id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub template_name: String,
    pub template_version: String,
    #[serde(default)]
    pub template_parameters: Map<String, Value>,
}

/// Provisioning request as returned by the server
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningRequestInfo {
    pub provisioning_request_data: ProvisioningRequestData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProvisioningRequestInfoStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_resource_sets: Option<ProvisionedResourceSets>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningRequestInfoStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedResourceSets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_cluster_id: Option<Uuid>,
}

/// Query parameters of the list provisioning requests endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListProvisioningRequestsParams {
    /// Encoded filter expression
    pub filter: Option<String>,
}

impl ListProvisioningRequestsParams {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.filter
            .iter()
            .map(|f| (crate::constants::FILTER_QUERY_PARAM, f.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_without_optional_fields() {
        let id = Uuid::new_v4();
        let json = serde_json::json!({
            "provisioningRequestData": {
                "provisioningRequestId": id,
                "name": "req",
                "description": "",
                "templateName": "t",
                "templateVersion": "v1",
                "templateParameters": {}
            }
        });

        let info: ProvisioningRequestInfo = serde_json::from_value(json).unwrap();

        assert_eq!(info.provisioning_request_data.provisioning_request_id, id);
        assert!(info.status.is_none());
        assert!(info.provisioned_resource_sets.is_none());
    }

    #[test]
    fn test_info_with_status() {
        let json = serde_json::json!({
            "provisioningRequestData": {
                "provisioningRequestId": Uuid::new_v4(),
                "templateName": "t",
                "templateVersion": "v1",
                "templateParameters": {"a": 1}
            },
            "status": {
                "provisioningPhase": "PROGRESSING",
                "message": "installing",
                "updateTime": "2024-05-01T10:00:00Z"
            },
            "provisionedResourceSets": {
                "nodeClusterId": "5f1c1d0b-8a0a-4a7e-9a64-9f1c6f1c1d0b"
            }
        });

        let info: ProvisioningRequestInfo = serde_json::from_value(json).unwrap();

        let status = info.status.unwrap();
        assert_eq!(status.provisioning_phase.as_deref(), Some("PROGRESSING"));
        assert_eq!(status.message.as_deref(), Some("installing"));
        assert!(status.update_time.is_some());
        assert!(info.provisioned_resource_sets.unwrap().node_cluster_id.is_some());
    }

    #[test]
    fn test_data_serializes_camel_case() {
        let data = ProvisioningRequestData {
            provisioning_request_id: Uuid::nil(),
            name: "req".to_string(),
            description: "d".to_string(),
            template_name: "t".to_string(),
            template_version: "v1".to_string(),
            template_parameters: Map::new(),
        };

        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["provisioningRequestId"], Uuid::nil().to_string());
        assert_eq!(json["templateName"], "t");
        assert!(json["templateParameters"].is_object());
    }

    #[test]
    fn test_list_params_query_pairs() {
        assert!(ListProvisioningRequestsParams::default().query_pairs().is_empty());

        let params = ListProvisioningRequestsParams {
            filter: Some("(eq,name,a)".to_string()),
        };
        assert_eq!(params.query_pairs(), vec![("filter", "(eq,name,a)".to_string())]);
    }
}
