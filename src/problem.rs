// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Problem Details (RFC 7807) payloads returned by the O2IMS API.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Problem Details body as sent by the server
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub status: u16,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_attributes: Option<BTreeMap<String, String>>,
}

/// A structured error reported by the API
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub title: Option<String>,
    pub detail: String,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND.as_u16()
    }

    pub fn is_conflict(&self) -> bool {
        self.status == StatusCode::CONFLICT.as_u16()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => write!(f, "status {} ({}): {}", self.status, title, self.detail),
            None => write!(f, "status {}: {}", self.status, self.detail),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ProblemDetails> for ApiError {
    fn from(problem: ProblemDetails) -> Self {
        ApiError {
            status: problem.status,
            title: problem.title,
            detail: problem.detail,
        }
    }
}

/// Decode a Problem Details body received with `status`.
///
/// The status of the HTTP response wins over the one inside the body, so the
/// error always reflects what the transport observed.
pub fn decode_problem(status: StatusCode, body: &[u8]) -> Option<ApiError> {
    let problem: ProblemDetails = serde_json::from_slice(body).ok()?;
    let mut error = ApiError::from(problem);
    error.status = status.as_u16();
    Some(error)
}
