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

//! Response type for ShowTable operation

use crate::impl_from_tables_response;
use crate::impl_has_tables_fields;
use crate::response_traits::{HasColumns, HasServerInfo};
use crate::types::{ColumnCollection, ServerInfo, TablesRequest};
use bytes::Bytes;
use http::HeaderMap;

/// Response from ShowTable operation
#[derive(Clone, Debug)]
pub struct ShowTableResponse {
    request: TablesRequest,
    headers: HeaderMap,
    body: Bytes,
    columns: ColumnCollection,
}

impl ShowTableResponse {
    /// Columns of the table, limited by `start`/`limit` when they were set
    pub fn columns(&self) -> &ColumnCollection {
        &self.columns
    }

    pub fn into_columns(self) -> ColumnCollection {
        self.columns
    }
}

impl HasColumns for ShowTableResponse {
    fn columns(&self) -> &ColumnCollection {
        &self.columns
    }
}

impl HasServerInfo for ShowTableResponse {
    fn server(&self) -> Option<&ServerInfo> {
        self.columns.server()
    }
}

impl_has_tables_fields!(ShowTableResponse);
impl_from_tables_response!(ShowTableResponse => columns);
