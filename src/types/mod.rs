// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed objects and O2IMS wire payloads.

pub mod artifacts;
pub mod provisioning_request;
pub mod wire;

pub use artifacts::{ManagedInfrastructureTemplate, ManagedInfrastructureTemplateDefaults};
pub use provisioning_request::{
    ProvisionedResources, ProvisioningRequest, ProvisioningRequestList, ProvisioningRequestSpec,
    ProvisioningRequestStatus, ProvisioningStatus,
};
pub use wire::{
    ListProvisioningRequestsParams, ProvisionedResourceSets, ProvisioningRequestData,
    ProvisioningRequestInfo, ProvisioningRequestInfoStatus,
};
