// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// REST path prefixes of the O2IMS services
pub mod paths {
    /// Infrastructure artifacts service
    pub const ARTIFACTS: &str = "/o2ims-infrastructureArtifacts/v1";
    /// Infrastructure provisioning service
    pub const PROVISIONING: &str = "/o2ims-infrastructureProvisioning/v1";
    pub const MANAGED_INFRASTRUCTURE_TEMPLATES: &str = "managedInfrastructureTemplates";
    pub const PROVISIONING_REQUESTS: &str = "provisioningRequests";
    pub const DEFAULTS: &str = "defaults";
}

/// Type identity of ProvisioningRequest objects
pub mod provisioning_request {
    pub const GROUP: &str = "clcm.openshift.io";
    pub const VERSION: &str = "v1alpha1";
    pub const KIND: &str = "ProvisioningRequest";
}

/// Name reported by the provisioning client in unimplemented errors
pub const PROVISIONING_CLIENT_KIND: &str = "ProvisioningClient";

/// Query parameter carrying an encoded filter expression
pub const FILTER_QUERY_PARAM: &str = "filter";

/// Environment variables read by `Config::from_env`
pub mod env {
    pub const BASE_URL: &str = "O2IMS_BASE_URL";
    pub const TOKEN: &str = "O2IMS_TOKEN";
    pub const INSECURE_SKIP_VERIFY: &str = "O2IMS_INSECURE_SKIP_VERIFY";
    pub const CONNECT_TIMEOUT_SECS: &str = "O2IMS_CONNECT_TIMEOUT_SECS";
    pub const READ_TIMEOUT_SECS: &str = "O2IMS_READ_TIMEOUT_SECS";
}
