// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::problem::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("error contacting api: {0}")]
    Transport(#[from] kube::Error),

    #[error("error contacting api: failed to read response body: {0}")]
    ResponseBody(String),

    #[error("received error from api: {0}")]
    Api(#[from] ApiError),

    #[error("received unexpected response from api: status {status}: {body}")]
    UnexpectedResponse { status: u16, body: String },

    #[error("object is not a ProvisioningRequest: {0}")]
    WrongObjectType(String),

    #[error("list is not a ProvisioningRequestList: {0}")]
    WrongListType(String),

    #[error("list option is not a ProvisioningRequestListOptions: {0}")]
    WrongOptionsType(String),

    #[error("name '{name}' is not a valid uuid: {source}")]
    InvalidUuid { name: String, source: uuid::Error },

    #[error("invalid JSON in {what}: {source}")]
    Serialization {
        what: &'static str,
        source: serde_json::Error,
    },

    #[error("kind {0} is not registered")]
    UnregisteredKind(String),

    #[error("{method} is not implemented by {client}")]
    Unimplemented {
        client: &'static str,
        method: &'static str,
    },

    #[error("invalid client configuration: {0}")]
    Builder(String),

    #[error("failed to {operation}: {source}")]
    Operation {
        operation: &'static str,
        source: Box<Error>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap this error with the name of the operation that produced it
    pub fn during(self, operation: &'static str) -> Self {
        Error::Operation {
            operation,
            source: Box::new(self),
        }
    }

    /// The innermost error, past any operation context
    pub fn root(&self) -> &Error {
        match self {
            Error::Operation { source, .. } => source.root(),
            other => other,
        }
    }

    /// The structured API error, if this error carries one
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self.root() {
            Error::Api(api) => Some(api),
            _ => None,
        }
    }

    pub fn is_unimplemented(&self) -> bool {
        matches!(self.root(), Error::Unimplemented { .. })
    }

    /// The method name recorded by an unimplemented error
    pub fn unimplemented_method(&self) -> Option<&'static str> {
        match self.root() {
            Error::Unimplemented { method, .. } => Some(*method),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.as_api_error().is_some_and(ApiError::is_not_found)
    }
}

/// Free-standing form of [`Error::as_api_error`]
pub fn as_api_error(error: &Error) -> Option<&ApiError> {
    error.as_api_error()
}

/// Extension for attaching operation context to results
pub trait ResultExt<T> {
    fn during(self, operation: &'static str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn during(self, operation: &'static str) -> Result<T> {
        self.map_err(|e| e.during(operation))
    }
}
