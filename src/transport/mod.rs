// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! HTTP plumbing shared by the artifacts and provisioning endpoints.
//!
//! Each endpoint function issues exactly one request and classifies the
//! response into an [`ApiResponse`]: the payload of the expected success
//! status, or the Problem Details sent with any other status.

pub mod artifacts;
pub mod provisioning;

use crate::error::{Error, Result};
use crate::problem::{decode_problem, ApiError};
use bytes::Bytes;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method, Request, StatusCode};
use http_body_util::BodyExt;
use kube::client::Body;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

const APPLICATION_JSON: &str = "application/json";
/// Longest body excerpt kept in unexpected-response errors
const BODY_EXCERPT_LEN: usize = 512;

/// Outcome of a request that reached the server
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(T),
    Problem(ApiError),
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T> {
        match self {
            ApiResponse::Success(value) => Ok(value),
            ApiResponse::Problem(problem) => Err(Error::Api(problem)),
        }
    }
}

/// Status and body of a completed exchange
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl RawResponse {
    /// Decode the body as `T` when the status is `expected`, as Problem Details otherwise
    pub fn decode<T: DeserializeOwned>(self, expected: StatusCode) -> Result<ApiResponse<T>> {
        if self.status == expected {
            let value = serde_json::from_slice(&self.body).map_err(|source| Error::Serialization {
                what: "response body",
                source,
            })?;
            return Ok(ApiResponse::Success(value));
        }
        self.problem().map(ApiResponse::Problem)
    }

    /// Like [`RawResponse::decode`] for endpoints whose success carries no payload
    pub fn expect_status(self, expected: StatusCode) -> Result<ApiResponse<()>> {
        if self.status == expected {
            return Ok(ApiResponse::Success(()));
        }
        self.problem().map(ApiResponse::Problem)
    }

    fn problem(self) -> Result<ApiError> {
        decode_problem(self.status, &self.body).ok_or_else(|| Error::UnexpectedResponse {
            status: self.status.as_u16(),
            body: self.excerpt(),
        })
    }

    pub(crate) fn excerpt(&self) -> String {
        let text = String::from_utf8_lossy(&self.body);
        if text.len() <= BODY_EXCERPT_LEN {
            return text.into_owned();
        }
        let mut end = BODY_EXCERPT_LEN;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}

/// A configured connection to an O2IMS server
#[derive(Clone)]
pub struct Transport {
    client: kube::Client,
    base_url: Url,
    authorization: Option<HeaderValue>,
}

impl Transport {
    pub fn new(client: kube::Client, base_url: Url, authorization: Option<HeaderValue>) -> Self {
        Self {
            client,
            base_url,
            authorization,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the absolute URL of an endpoint below `prefix`
    pub(crate) fn endpoint(
        &self,
        prefix: &str,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                Error::Builder(format!("base url {} cannot carry a path", self.base_url))
            })?;
            path.pop_if_empty();
            path.extend(prefix.split('/').filter(|s| !s.is_empty()));
            path.extend(segments);
        }
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Send a request with an optional JSON body and collect the response
    pub(crate) async fn send<B: Serialize + Sync>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<RawResponse> {
        let mut builder = Request::builder()
            .method(method.clone())
            .uri(url.as_str())
            .header(ACCEPT, APPLICATION_JSON);
        if let Some(authorization) = &self.authorization {
            builder = builder.header(AUTHORIZATION, authorization.clone());
        }

        let body = match body {
            Some(payload) => {
                let bytes = serde_json::to_vec(payload).map_err(|source| Error::Serialization {
                    what: "request body",
                    source,
                })?;
                builder = builder.header(CONTENT_TYPE, APPLICATION_JSON);
                Body::from(bytes)
            }
            None => Body::from(Vec::new()),
        };

        let request = builder
            .body(body)
            .map_err(|e| Error::Builder(format!("invalid request for {}: {}", url, e)))?;

        debug!(%method, %url, "Sending request");
        let response = self.client.send(request).await?;
        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::ResponseBody(e.to_string()))?
            .to_bytes();
        debug!(%method, %url, status = status.as_u16(), "Received response");

        Ok(RawResponse { status, body })
    }
}
