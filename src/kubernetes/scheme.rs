// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Type registry and resource mapping.

use crate::error::{Error, Result};
use kube::core::{ApiResource, GroupVersionKind};
use kube::Resource;

/// Maps kinds to the REST resources that serve them
pub trait RestMapper: Send + Sync {
    fn resource_for(&self, gvk: &GroupVersionKind) -> Result<ApiResource>;
}

/// A registry of known object kinds
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scheme {
    kinds: Vec<GroupVersionKind>,
}

impl Scheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a statically typed kind
    pub fn register<K: Resource<DynamicType = ()>>(&mut self) {
        let gvk = GroupVersionKind::gvk(&K::group(&()), &K::version(&()), &K::kind(&()));
        if !self.kinds.contains(&gvk) {
            self.kinds.push(gvk);
        }
    }

    pub fn recognizes(&self, gvk: &GroupVersionKind) -> bool {
        self.kinds.contains(gvk)
    }

    pub fn kinds(&self) -> &[GroupVersionKind] {
        &self.kinds
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl RestMapper for Scheme {
    fn resource_for(&self, gvk: &GroupVersionKind) -> Result<ApiResource> {
        if !self.recognizes(gvk) {
            return Err(Error::UnregisteredKind(format!(
                "{}/{} {}",
                gvk.group, gvk.version, gvk.kind
            )));
        }
        Ok(ApiResource::from_gvk(gvk))
    }
}
