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

//! Request types and traits for Tables operations

use crate::client::TablesClient;
use crate::config;
use crate::error::{Error, ValidationErr};
use crate::multimap_ext::Multimap;
use crate::transport::HttpResponse;
use bytes::Bytes;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use typed_builder::TypedBuilder;

/// Request structure for Tables API operations
#[derive(Clone, Debug, TypedBuilder)]
pub struct TablesRequest {
    /// Client reference
    #[builder(!default)]
    pub client: TablesClient,
    /// HTTP method
    #[builder(!default)]
    pub method: http::Method,
    /// Request path (relative to the client's base path), already escaped
    #[builder(!default, setter(into))]
    pub path: String,
    /// Query parameters
    #[builder(default)]
    pub query_params: Multimap,
    /// Request headers
    #[builder(default)]
    pub headers: Multimap,
    /// Request body
    #[builder(default, setter(strip_option))]
    pub body: Option<Bytes>,
}

impl TablesRequest {
    /// Full URL this request is sent to, including the query string
    pub fn url(&self) -> String {
        self.client.request_url(&self.path, &self.query_params)
    }

    /// Execute the Tables API request
    ///
    /// # Errors
    ///
    /// Returns `Error` if the transport fails or the server answers with a
    /// non-2xx status.
    pub(crate) async fn execute(&self) -> Result<HttpResponse, Error> {
        self.client.execute_tables(self).await
    }
}

/// Convert builder to TablesRequest
pub trait ToTablesRequest {
    /// Convert this builder into a TablesRequest
    ///
    /// # Errors
    ///
    /// Returns `ValidationErr` if the request parameters are invalid.
    fn to_tables_request(self) -> Result<TablesRequest, ValidationErr>;
}

/// Execute Tables API operation
pub trait TablesApi: ToTablesRequest {
    /// Response type for this operation
    type TablesResponse: FromTablesResponse;

    /// Send the request and await the response
    ///
    /// # Errors
    ///
    /// Returns `Error` if validation or the request fails, or the response
    /// cannot be decoded.
    fn send(self) -> impl std::future::Future<Output = Result<Self::TablesResponse, Error>> + Send
    where
        Self: Sized + Send,
    {
        async {
            let request: TablesRequest = self.to_tables_request()?;
            let response: Result<HttpResponse, Error> = request.execute().await;
            Self::TablesResponse::from_table_response(request, response)
        }
    }

    /// Run the request on `context` and hand the outcome to `completion`.
    ///
    /// `completion` is called exactly once, on a task of `context`, with either
    /// the decoded response or the error. Aborting the returned handle before
    /// the call finishes drops the request and skips the callback.
    fn execute<F>(self, context: &Handle, completion: F) -> JoinHandle<()>
    where
        Self: Sized + Send + 'static,
        F: FnOnce(Result<Self::TablesResponse, Error>) + Send + 'static,
    {
        context.spawn(async move {
            let result = self.send().await;
            completion(result);
        })
    }

    /// Like [`execute`](Self::execute), on the library-wide shared context.
    ///
    /// If the shared context cannot be started, `completion` receives
    /// [`Error::Context`] synchronously and `None` is returned.
    fn execute_default<F>(self, completion: F) -> Option<JoinHandle<()>>
    where
        Self: Sized + Send + 'static,
        F: FnOnce(Result<Self::TablesResponse, Error>) + Send + 'static,
    {
        match config::api_response_context() {
            Ok(context) => Some(self.execute(&context, completion)),
            Err(e) => {
                completion(Err(e));
                None
            }
        }
    }
}

/// Decode a transport response into an operation's typed response
pub trait FromTablesResponse: Sized {
    /// Build the typed response from the request and the transport outcome
    ///
    /// # Errors
    ///
    /// Passes through transport and status errors; returns
    /// [`Error::Decode`] if the body does not match the declared shape.
    fn from_table_response(
        request: TablesRequest,
        response: Result<HttpResponse, Error>,
    ) -> Result<Self, Error>;
}
