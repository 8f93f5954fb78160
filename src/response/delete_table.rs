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

//! Response type for DeleteTable operation

use crate::error::Error;
use crate::impl_has_tables_fields;
use crate::response_traits::HasServerInfo;
use crate::transport::HttpResponse;
use crate::types::{FromTablesResponse, RestStatus, ServerInfo, TablesRequest};
use bytes::Bytes;
use http::HeaderMap;

/// Response from DeleteTable operation
#[derive(Clone, Debug)]
pub struct DeleteTableResponse {
    request: TablesRequest,
    headers: HeaderMap,
    body: Bytes,
    status: RestStatus,
}

impl DeleteTableResponse {
    /// Status payload sent by the service
    pub fn rest_status(&self) -> &RestStatus {
        &self.status
    }
}

impl HasServerInfo for DeleteTableResponse {
    fn server(&self) -> Option<&ServerInfo> {
        self.status.server.as_ref()
    }
}

impl_has_tables_fields!(DeleteTableResponse);

// An empty body is accepted; the HTTP status stands in for the payload.
impl FromTablesResponse for DeleteTableResponse {
    fn from_table_response(
        request: TablesRequest,
        response: Result<HttpResponse, Error>,
    ) -> Result<Self, Error> {
        let resp = response?;
        let status = if resp.body.iter().all(u8::is_ascii_whitespace) {
            RestStatus {
                status: resp.status.as_u16(),
                ..Default::default()
            }
        } else {
            serde_json::from_slice(&resp.body).map_err(Error::Decode)?
        };

        Ok(Self {
            request,
            headers: resp.headers,
            body: resp.body,
            status,
        })
    }
}
