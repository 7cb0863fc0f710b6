// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking O2IMS API responses.

use bytes::Bytes;
use http::{HeaderMap, Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A request as seen by the mock server
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

type Handler = Arc<dyn Fn(&RecordedRequest) -> (u16, String) + Send + Sync>;

struct Route {
    method: String,
    path: String,
    query: Option<Vec<(String, String)>>,
    handler: Handler,
}

/// A mock HTTP service that answers based on method, path and optionally query.
#[derive(Clone)]
pub struct MockService {
    routes: Arc<Mutex<Vec<Route>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            routes: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer requests matching `method` and the exact `path` with a computed response
    pub fn respond_with<F>(self, method: &str, path: &str, handler: F) -> Self
    where
        F: Fn(&RecordedRequest) -> (u16, String) + Send + Sync + 'static,
    {
        self.routes.lock().unwrap().push(Route {
            method: method.to_string(),
            path: path.to_string(),
            query: None,
            handler: Arc::new(handler),
        });
        self
    }

    pub fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        let body = body.to_string();
        self.respond_with(method, path, move |_| (status, body.clone()))
    }

    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    pub fn on_put(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PUT", path, status, body)
    }

    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.on("DELETE", path, status, body)
    }

    /// Add a GET response that only matches when the decoded query equals `query`
    pub fn on_get_with_query(
        self,
        path: &str,
        query: &[(&str, &str)],
        status: u16,
        body: &str,
    ) -> Self {
        let body = body.to_string();
        self.routes.lock().unwrap().push(Route {
            method: "GET".to_string(),
            path: path.to_string(),
            query: Some(
                query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
            handler: Arc::new(move |_| (status, body.clone())),
        });
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// Requests received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn find_handler(&self, request: &RecordedRequest) -> Option<Handler> {
        let routes = self.routes.lock().unwrap();

        // Routes with a query constraint take precedence
        routes
            .iter()
            .filter(|r| r.method == request.method && r.path == request.path)
            .find(|r| r.query.as_ref() == Some(&request.query))
            .or_else(|| {
                routes.iter().find(|r| {
                    r.method == request.method && r.path == request.path && r.query.is_none()
                })
            })
            .map(|r| r.handler.clone())
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let this = self.clone();

        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let body = body.collect().await?.to_bytes();
            let request = RecordedRequest {
                method: parts.method.to_string(),
                path: parts.uri.path().to_string(),
                query: parts
                    .uri
                    .query()
                    .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
                    .unwrap_or_default(),
                headers: parts.headers,
                body,
            };

            let (status, body) = match this.find_handler(&request) {
                Some(handler) => handler(&request),
                // Default 404 for unmatched requests
                None => (404, problem_json(404, "Not Found", "no route matched")),
            };
            this.requests.lock().unwrap().push(request);

            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a Problem Details JSON body
pub fn problem_json(status: u16, title: &str, detail: &str) -> String {
    serde_json::json!({
        "status": status,
        "title": title,
        "detail": detail
    })
    .to_string()
}

/// Create a ProvisioningRequestInfo JSON body wrapping the given request data
pub fn provisioning_request_info_json(data: serde_json::Value) -> String {
    serde_json::json!({ "provisioningRequestData": data }).to_string()
}

/// Create a ManagedInfrastructureTemplate JSON value
pub fn template_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "artifactResourceId": uuid::Uuid::new_v4(),
        "name": name,
        "description": format!("{} template", name),
        "version": "v1",
        "parameterSchema": {"type": "object"}
    })
}
