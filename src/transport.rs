// Tables REST client library
// Copyright 2025 The tables-client Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Pluggable HTTP transports
//!
//! The client never talks to an HTTP library directly. It hands a fully built
//! [`HttpRequest`] to a [`Transport`] and gets back status, headers and the
//! raw body. [`ReqwestTransport`] is the default; tests or embedders can plug
//! in their own implementation through
//! [`TablesClientBuilder::transport`](crate::client::TablesClientBuilder::transport).

use crate::error::Error;
use crate::multimap_ext::Multimap;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use reqwest::Client as ReqwestClient;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

/// A request ready to go on the wire
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Multimap,
    pub body: Option<Bytes>,
}

/// Raw outcome of one HTTP exchange
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Executes one HTTP request.
///
/// Implementations must be `Send + Sync`; one transport is shared by every
/// clone of a client and by concurrent calls.
#[async_trait::async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Send `request` and read the whole response body.
    ///
    /// Non-2xx statuses are not errors at this layer.
    ///
    /// # Errors
    ///
    /// Returns an error only when no response was received.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error>;

    /// Returns a human-readable name for this transport
    fn name(&self) -> &'static str;
}

/// Type alias for shared transport
pub type BoxedTransport = Arc<dyn Transport>;

/// Default transport backed by `reqwest`
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: ReqwestClient,
}

impl ReqwestTransport {
    /// Create a transport with connection pooling tuned for many small JSON calls
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, Error> {
        let client = ReqwestClient::builder()
            .tcp_nodelay(true)
            .tcp_keepalive(Duration::from_secs(60))
            .pool_max_idle_per_host(32)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;
        Ok(Self { client })
    }

    /// Wrap a pre-configured client (custom timeouts, proxies, TLS roots)
    pub fn with_client(client: ReqwestClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let mut req = self.client.request(request.method, &request.url);

        for (key, values) in request.headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let mut resp = req.send().await?;
        let status = resp.status();
        let headers = std::mem::take(resp.headers_mut());
        let body = resp.bytes().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    fn name(&self) -> &'static str {
        "ReqwestTransport"
    }
}
