// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod artifacts;
pub mod builder;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod kubernetes;
pub mod problem;
pub mod provisioning;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use artifacts::ArtifactsClient;
pub use builder::{ClientBuilder, HttpClientConfig, TlsConfig};
pub use error::{as_api_error, Error, Result};
pub use filter::{Filter, Operator};
pub use problem::ApiError;
pub use provisioning::{ProvisioningClient, ProvisioningRequestListOptions};
