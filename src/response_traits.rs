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

//! Trait composition for Tables API responses
//!
//! Every response keeps the request that produced it, the response headers
//! and the raw body next to its decoded payload.

use crate::types::{Column, ColumnCollection, ServerInfo, TablesRequest};
use bytes::Bytes;
use http::HeaderMap;

#[macro_export]
/// Implements the `FromTablesResponse` trait for the specified types.
///
/// Each type is paired with the field that receives the decoded JSON body:
/// `impl_from_tables_response!(ShowTableResponse => columns)`. A body that
/// does not decode yields [`Error::Decode`](crate::error::Error::Decode).
macro_rules! impl_from_tables_response {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(
            impl $crate::types::FromTablesResponse for $ty {
                fn from_table_response(
                    request: $crate::types::TablesRequest,
                    response: Result<$crate::transport::HttpResponse, $crate::error::Error>,
                ) -> Result<Self, $crate::error::Error> {
                    let resp = response?;
                    let $field =
                        serde_json::from_slice(&resp.body).map_err($crate::error::Error::Decode)?;
                    Ok(Self {
                        request,
                        headers: resp.headers,
                        body: resp.body,
                        $field,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasTablesFields` trait for the specified types.
macro_rules! impl_has_tables_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::response_traits::HasTablesFields for $ty {
                /// The request that was sent to the Tables API.
                #[inline]
                fn request(&self) -> &$crate::types::TablesRequest {
                    &self.request
                }

                /// HTTP headers returned by the server, containing metadata such as `Content-Type`, etc.
                #[inline]
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                /// The response body returned by the server, as raw bytes.
                #[inline]
                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

/// Base trait providing access to common response fields
///
/// All Tables response types implement this trait.
pub trait HasTablesFields {
    /// The request that was sent to the Tables API.
    fn request(&self) -> &TablesRequest;
    /// HTTP headers returned by the server, containing metadata such as `Content-Type`, etc.
    fn headers(&self) -> &HeaderMap;
    /// The response body returned by the server, as raw bytes.
    fn body(&self) -> &Bytes;
}

/// Responses whose payload is a column collection
pub trait HasColumns: HasTablesFields {
    /// The decoded column collection
    fn columns(&self) -> &ColumnCollection;

    /// Looks up a column by name
    #[inline]
    fn column(&self, name: &str) -> Option<&Column> {
        self.columns().get(name)
    }

    /// Names of the returned columns, in order
    fn column_names(&self) -> Vec<&str> {
        self.columns().iter().map(|c| c.name.as_str()).collect()
    }
}

/// Responses that echo the server's identification
pub trait HasServerInfo: HasTablesFields {
    /// Server information, when the service sent it
    fn server(&self) -> Option<&ServerInfo>;
}
