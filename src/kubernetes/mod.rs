// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generic resource client contract shared with in-cluster Kubernetes clients.

pub mod client;
pub mod scheme;

pub use client::{ListObject, ListOption, Object, ObjectKey, ResourceClient, SubResourceClient};
pub use scheme::{RestMapper, Scheme};
