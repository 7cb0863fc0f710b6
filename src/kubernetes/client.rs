// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Object-typed resource client contract.
//!
//! Implementations accept type-erased objects and reject kinds they do not
//! serve at runtime, so a single client can stand in wherever a generic
//! Kubernetes resource client is expected.

use super::scheme::{RestMapper, Scheme};
use crate::error::Result;
use async_trait::async_trait;
use kube::api::{ListParams, Patch};
use kube::core::{GroupVersionKind, ObjectList};
use std::any::Any;

/// A Kubernetes-style object passed through the resource client
pub trait Object: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<K> Object for K
where
    K: kube::Resource + Any + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<K>()
    }
}

/// A list of objects filled by [`ResourceClient::list`]
pub trait ListObject: Any + Send + Sync {
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<K> ListObject for ObjectList<K>
where
    K: Clone + Send + Sync + 'static,
{
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl ListObject for crate::types::ProvisioningRequestList {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// An option modifying a list call. Clients downcast to the option types they understand.
pub trait ListOption: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

impl ListOption for ListParams {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Identifies an object by name and optional namespace
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ObjectKey {
    pub namespace: Option<String>,
    pub name: String,
}

impl ObjectKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

/// Writes to a subresource such as `status`
#[async_trait]
pub trait SubResourceClient: Send + Sync {
    async fn get(&self, obj: &dyn Object, sub_resource: &mut dyn Object) -> Result<()>;
    async fn create(&self, obj: &dyn Object, sub_resource: &mut dyn Object) -> Result<()>;
    async fn update(&self, obj: &mut dyn Object) -> Result<()>;
    async fn patch(&self, obj: &mut dyn Object, patch: &Patch<serde_json::Value>) -> Result<()>;
}

/// The generic resource client contract
#[async_trait]
pub trait ResourceClient: Send + Sync {
    /// Fetch the object identified by `key` into `obj`
    async fn get(&self, key: &ObjectKey, obj: &mut dyn Object) -> Result<()>;

    /// Append matching objects to `list`
    async fn list(&self, list: &mut dyn ListObject, opts: &[&dyn ListOption]) -> Result<()>;

    /// Create `obj`, replacing it with the stored version
    async fn create(&self, obj: &mut dyn Object) -> Result<()>;

    /// Replace the stored object with `obj`, then refresh `obj`
    async fn update(&self, obj: &mut dyn Object) -> Result<()>;

    async fn delete(&self, obj: &dyn Object) -> Result<()>;

    async fn patch(&self, obj: &mut dyn Object, patch: &Patch<serde_json::Value>) -> Result<()>;

    async fn delete_all_of(&self, obj: &dyn Object, params: &ListParams) -> Result<()>;

    fn status(&self) -> Option<Box<dyn SubResourceClient>>;

    fn sub_resource(&self, sub_resource: &str) -> Option<Box<dyn SubResourceClient>>;

    fn scheme(&self) -> Scheme;

    fn rest_mapper(&self) -> Option<&dyn RestMapper>;

    fn group_version_kind_for(&self, obj: &dyn Object) -> Result<GroupVersionKind>;

    fn is_object_namespaced(&self, obj: &dyn Object) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProvisioningRequest;
    use k8s_openapi::api::core::v1::Secret;

    #[test]
    fn test_object_downcast() {
        let mut request = ProvisioningRequest::default();
        let obj: &mut dyn Object = &mut request;

        assert!(Object::as_any(&*obj).is::<ProvisioningRequest>());
        assert!(Object::as_any_mut(obj).downcast_mut::<Secret>().is_none());
        assert!(Object::type_name(&*obj).ends_with("ProvisioningRequest"));
    }

    #[test]
    fn test_type_names_through_mutable_trait_objects() {
        let mut secret = Secret::default();
        let obj: &mut dyn Object = &mut secret;
        assert!(Object::type_name(&*obj).ends_with("::Secret"));

        let mut list = crate::types::ProvisioningRequestList::default();
        let list: &mut dyn ListObject = &mut list;
        assert!(ListObject::type_name(&*list).ends_with("ProvisioningRequestList"));
    }

    #[test]
    fn test_list_option_type_name() {
        let params = ListParams::default();
        let opt: &dyn ListOption = &params;

        assert!(opt.as_any().downcast_ref::<ListParams>().is_some());
        assert!(opt.type_name().ends_with("ListParams"));
    }

    #[test]
    fn test_object_key() {
        let key = ObjectKey::new("abc").with_namespace("ns");
        assert_eq!(key.name, "abc");
        assert_eq!(key.namespace.as_deref(), Some("ns"));
        assert_eq!(ObjectKey::new("abc").namespace, None);
    }
}
