// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Provisioning client: remote O2IMS provisioning requests behind the
//! generic resource client contract.

pub mod convert;

use crate::constants::{provisioning_request, PROVISIONING_CLIENT_KIND};
use crate::error::{Error, Result, ResultExt};
use crate::filter::Filter;
use crate::kubernetes::{
    ListObject, ListOption, Object, ObjectKey, ResourceClient, RestMapper, Scheme,
    SubResourceClient,
};
use crate::transport::{self, ApiResponse, Transport};
use crate::types::{ListProvisioningRequestsParams, ProvisioningRequest, ProvisioningRequestList};
use async_trait::async_trait;
use kube::api::{ListParams, Patch};
use kube::core::GroupVersionKind;
use kube::ResourceExt;
use std::any::Any;
use std::ops::{Deref, DerefMut};
use tracing::{debug, info, instrument};

pub use convert::{data_from_provisioning_request, parse_request_id, provisioning_request_from_info};

/// List options understood by [`ProvisioningClient::list`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProvisioningRequestListOptions(pub ListProvisioningRequestsParams);

impl ProvisioningRequestListOptions {
    pub fn with_filter(filter: &Filter) -> Self {
        Self(ListProvisioningRequestsParams {
            filter: Some(filter.to_string()),
        })
    }
}

impl Deref for ProvisioningRequestListOptions {
    type Target = ListProvisioningRequestsParams;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ListOption for ProvisioningRequestListOptions {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl DerefMut for ProvisioningRequestListOptions {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Client for O2IMS provisioning requests. Cheap to clone and safe to share.
#[derive(Clone)]
pub struct ProvisioningClient {
    transport: Transport,
}

fn as_provisioning_request(obj: &dyn Object) -> Result<&ProvisioningRequest> {
    Object::as_any(obj)
        .downcast_ref::<ProvisioningRequest>()
        .ok_or_else(|| Error::WrongObjectType(Object::type_name(obj).to_string()))
}

fn as_provisioning_request_mut(obj: &mut dyn Object) -> Result<&mut ProvisioningRequest> {
    let type_name = Object::type_name(&*obj);
    Object::as_any_mut(obj)
        .downcast_mut::<ProvisioningRequest>()
        .ok_or_else(|| Error::WrongObjectType(type_name.to_string()))
}

fn unimplemented(method: &'static str) -> Error {
    Error::Unimplemented {
        client: PROVISIONING_CLIENT_KIND,
        method,
    }
}

impl ProvisioningClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub fn base_url(&self) -> &url::Url {
        self.transport.base_url()
    }

    /// Group, version and kind of the only object type this client serves
    pub fn provisioning_request_gvk() -> GroupVersionKind {
        GroupVersionKind::gvk(
            provisioning_request::GROUP,
            provisioning_request::VERSION,
            provisioning_request::KIND,
        )
    }

    async fn get_request(&self, key: &ObjectKey, obj: &mut dyn Object) -> Result<()> {
        let request = as_provisioning_request_mut(obj)?;
        let id = parse_request_id(&key.name)?;

        let info = transport::provisioning::get_provisioning_request(&self.transport, id)
            .await?
            .into_result()?;
        *request = provisioning_request_from_info(info);
        Ok(())
    }

    async fn list_requests(
        &self,
        list: &mut dyn ListObject,
        opts: &[&dyn ListOption],
    ) -> Result<()> {
        let list_type = ListObject::type_name(&*list);
        let list = ListObject::as_any_mut(list)
            .downcast_mut::<ProvisioningRequestList>()
            .ok_or_else(|| Error::WrongListType(list_type.to_string()))?;

        let params = match opts.first().copied() {
            Some(opt) => ListOption::as_any(opt)
                .downcast_ref::<ProvisioningRequestListOptions>()
                .map(|o| o.0.clone())
                .ok_or_else(|| Error::WrongOptionsType(ListOption::type_name(opt).to_string()))?,
            None => ListProvisioningRequestsParams::default(),
        };

        let infos = transport::provisioning::list_provisioning_requests(&self.transport, &params)
            .await?
            .into_result()?;
        debug!(count = infos.len(), "Listed provisioning requests");
        list.items
            .extend(infos.into_iter().map(provisioning_request_from_info));
        Ok(())
    }

    async fn create_request(&self, obj: &mut dyn Object) -> Result<()> {
        let request = as_provisioning_request_mut(obj)?;
        let data = data_from_provisioning_request(request)?;

        let info = transport::provisioning::create_provisioning_request(&self.transport, &data)
            .await?
            .into_result()?;
        *request = provisioning_request_from_info(info);
        info!(name = %request.name_any(), "Created provisioning request");
        Ok(())
    }

    async fn update_request(&self, obj: &mut dyn Object) -> Result<()> {
        let request = as_provisioning_request_mut(obj)?;
        let data = data_from_provisioning_request(request)?;

        let info = transport::provisioning::update_provisioning_request(
            &self.transport,
            data.provisioning_request_id,
            &data,
        )
        .await?
        .into_result()?;
        *request = provisioning_request_from_info(info);
        info!(name = %request.name_any(), "Updated provisioning request");
        Ok(())
    }

    async fn delete_request(&self, obj: &dyn Object) -> Result<()> {
        let request = as_provisioning_request(obj)?;
        let id = parse_request_id(&request.name_any())?;

        match transport::provisioning::delete_provisioning_request(&self.transport, id).await? {
            ApiResponse::Success(()) => {
                info!(name = %id, "Deleted provisioning request");
                Ok(())
            }
            ApiResponse::Problem(problem) => Err(Error::Api(problem)),
        }
    }
}

#[async_trait]
impl ResourceClient for ProvisioningClient {
    #[instrument(skip(self, obj), fields(name = %key.name))]
    async fn get(&self, key: &ObjectKey, obj: &mut dyn Object) -> Result<()> {
        self.get_request(key, obj)
            .await
            .during("get provisioning request")
    }

    #[instrument(skip_all)]
    async fn list(&self, list: &mut dyn ListObject, opts: &[&dyn ListOption]) -> Result<()> {
        self.list_requests(list, opts)
            .await
            .during("list provisioning requests")
    }

    #[instrument(skip_all)]
    async fn create(&self, obj: &mut dyn Object) -> Result<()> {
        self.create_request(obj)
            .await
            .during("create provisioning request")
    }

    #[instrument(skip_all)]
    async fn update(&self, obj: &mut dyn Object) -> Result<()> {
        self.update_request(obj)
            .await
            .during("update provisioning request")
    }

    #[instrument(skip_all)]
    async fn delete(&self, obj: &dyn Object) -> Result<()> {
        self.delete_request(obj)
            .await
            .during("delete provisioning request")
    }

    async fn patch(&self, _obj: &mut dyn Object, _patch: &Patch<serde_json::Value>) -> Result<()> {
        Err(unimplemented("Patch"))
    }

    async fn delete_all_of(&self, _obj: &dyn Object, _params: &ListParams) -> Result<()> {
        Err(unimplemented("DeleteAllOf"))
    }

    fn status(&self) -> Option<Box<dyn SubResourceClient>> {
        None
    }

    fn sub_resource(&self, _sub_resource: &str) -> Option<Box<dyn SubResourceClient>> {
        None
    }

    fn scheme(&self) -> Scheme {
        Scheme::new()
    }

    fn rest_mapper(&self) -> Option<&dyn RestMapper> {
        None
    }

    fn group_version_kind_for(&self, obj: &dyn Object) -> Result<GroupVersionKind> {
        if Object::as_any(obj).is::<ProvisioningRequest>() {
            return Ok(Self::provisioning_request_gvk());
        }
        Err(unimplemented("GroupVersionKindFor"))
    }

    fn is_object_namespaced(&self, obj: &dyn Object) -> Result<bool> {
        if Object::as_any(obj).is::<ProvisioningRequest>() {
            return Ok(false);
        }
        Err(unimplemented("IsObjectNamespaced"))
    }
}
