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

//! Tables REST client with pluggable authentication and transport
//!
//! The client owns everything that is shared between calls: base URL, base
//! path, authentication provider, default headers and the HTTP transport.
//! Operations turn their arguments into a [`TablesRequest`] and hand it to
//! [`TablesClient::execute_tables`].

use crate::auth::{BearerAuth, BoxedTablesAuth, NoAuth, TablesAuth};
use crate::config;
use crate::error::{Error, ValidationErr};
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::transport::{BoxedTransport, HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::types::{RestStatus, TablesRequest};
use http::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client as ReqwestClient;
use std::sync::Arc;

const APPLICATION_JSON: &str = "application/json";

/// Client for the Tables REST API
///
/// `TablesClient` is cheap to clone: the auth provider and the transport are
/// shared behind `Arc`, so clones can be moved into tasks freely.
///
/// # Example
///
/// ```no_run
/// use tables_client::client::TablesClient;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TablesClient::builder()
///     .endpoint("http://localhost:8080")
///     .bearer_token("secret")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct TablesClient {
    base_url: String,
    base_path: String,
    auth: BoxedTablesAuth,
    transport: BoxedTransport,
    default_headers: Multimap,
}

impl TablesClient {
    /// Create a client for `endpoint` with no authentication and the default
    /// transport.
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not an http(s) URL or the transport
    /// cannot be created.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, Error> {
        Self::builder().endpoint(endpoint).build()
    }

    /// Create a new builder for TablesClient
    pub fn builder() -> TablesClientBuilder {
        TablesClientBuilder::new()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the base path prepended to every operation path
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Get the authentication provider name
    pub fn auth_name(&self) -> &'static str {
        self.auth.name()
    }

    /// Get the transport name
    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// Headers added to every request
    pub fn default_headers(&self) -> &Multimap {
        &self.default_headers
    }

    /// Full URL for `path` (already escaped) with `query_params` appended.
    pub fn request_url(&self, path: &str, query_params: &Multimap) -> String {
        let mut url = format!("{}{}{}", self.base_url, self.base_path, path);
        if !query_params.is_empty() {
            url.push('?');
            url.push_str(&query_params.to_query_string());
        }
        url
    }

    /// Execute a Tables API request
    ///
    /// This is the low-level method used by all API operations. It adds the
    /// client-wide headers, authenticates, sends the request over the
    /// transport and maps non-2xx statuses to [`Error::HttpStatus`].
    pub(crate) async fn execute_tables(
        &self,
        request: &TablesRequest,
    ) -> Result<HttpResponse, Error> {
        let url = request.url();

        let mut headers = self.default_headers.clone();
        headers.add_multimap(request.headers.clone());
        if !headers.contains_key(ACCEPT.as_str()) {
            headers.add(ACCEPT.as_str(), APPLICATION_JSON);
        }
        if let Some(body) = &request.body {
            if !headers.contains_key(CONTENT_TYPE.as_str()) {
                headers.add(CONTENT_TYPE.as_str(), APPLICATION_JSON);
            }
            log::trace!("request body: {} bytes", body.len());
        }

        let path = format!("{}{}", self.base_path, request.path);
        self.auth
            .authenticate(&request.method, &path, &mut headers)?;

        log::debug!("{} {}", request.method, url);

        let response = self
            .transport
            .execute(HttpRequest {
                method: request.method.clone(),
                url,
                headers,
                body: request.body.clone(),
            })
            .await?;

        log::debug!("{} {} -> {}", request.method, path, response.status);
        log::trace!("response body: {} bytes", response.body.len());

        if !response.status.is_success() {
            let message = serde_json::from_slice::<RestStatus>(&response.body)
                .ok()
                .map(|status| status.message)
                .filter(|msg| !msg.is_empty());
            let body = String::from_utf8_lossy(&response.body).into_owned();

            log::warn!(
                "{} {} failed with HTTP {}: {}",
                request.method,
                path,
                response.status.as_u16(),
                message.as_deref().unwrap_or(&body)
            );

            return Err(Error::HttpStatus {
                status: response.status.as_u16(),
                message,
                body,
            });
        }

        Ok(response)
    }
}

/// Builder for TablesClient
///
/// Every setting is optional. Without an endpoint the process-wide default
/// from [`config::default_base_url`] is used, without auth no authorization
/// header is sent.
///
/// # Example
///
/// ```no_run
/// use tables_client::auth::BearerAuth;
/// use tables_client::client::TablesClient;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TablesClient::builder()
///     .endpoint("https://db.example.com")
///     .base_path("/api/v1")
///     .auth(BearerAuth::new("token"))
///     .header("x-request-source", "reporting")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct TablesClientBuilder {
    endpoint: Option<String>,
    base_path: Option<String>,
    auth: Option<BoxedTablesAuth>,
    headers: Vec<(String, String)>,
    http_client: Option<ReqwestClient>,
    transport: Option<BoxedTransport>,
}

impl TablesClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint URL of the tables service
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Base URL (e.g., `http://localhost:8080`)
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the base path inserted between the endpoint and `/tables`
    ///
    /// Empty by default.
    pub fn base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Set the authentication provider
    ///
    /// # Arguments
    ///
    /// * `auth` - Authentication provider (BearerAuth, NoAuth)
    pub fn auth(mut self, auth: impl TablesAuth + 'static) -> Self {
        self.auth = Some(Arc::new(auth));
        self
    }

    /// Shorthand for `.auth(BearerAuth::new(token))`
    pub fn bearer_token(self, token: impl Into<String>) -> Self {
        self.auth(BearerAuth::new(token))
    }

    /// Add a header sent with every request
    ///
    /// Header names and values are validated by [`build`](Self::build).
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set a custom HTTP client
    ///
    /// Use this to configure custom timeouts, TLS settings, or proxies.
    /// Ignored when a custom [`transport`](Self::transport) is set.
    pub fn http_client(mut self, client: ReqwestClient) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Replace the HTTP transport entirely
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the TablesClient
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `endpoint` is not an absolute http(s) URL
    /// - a header name or value is invalid
    /// - the default transport cannot be created
    pub fn build(self) -> Result<TablesClient, Error> {
        let base_url = match self.endpoint {
            Some(endpoint) => config::validate_base_url(endpoint)?,
            None => config::default_base_url(),
        };

        let base_path = normalize_base_path(self.base_path.as_deref().unwrap_or_default());

        let mut default_headers = Multimap::new();
        for (name, value) in self.headers {
            let header_name = http::HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ValidationErr::InvalidHeader {
                    name: name.clone(),
                    cause: e.to_string(),
                }
            })?;
            http::HeaderValue::from_str(&value).map_err(|e| ValidationErr::InvalidHeader {
                name: name.clone(),
                cause: e.to_string(),
            })?;
            default_headers.add(header_name.as_str(), value);
        }

        let transport: BoxedTransport = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::with_client(client)),
            (None, None) => Arc::new(ReqwestTransport::new()?),
        };

        let auth = self.auth.unwrap_or_else(|| Arc::new(NoAuth::new()));

        log::debug!(
            "tables client for {base_url}{base_path} (auth: {}, transport: {})",
            auth.name(),
            transport.name()
        );

        Ok(TablesClient {
            base_url,
            base_path,
            auth,
            transport,
            default_headers,
        })
    }
}

/// `""`, `"/"` -> `""`; `"api/v1/"` -> `"/api/v1"`
fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
