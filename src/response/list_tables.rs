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

//! Response type for ListTables operation

use crate::impl_from_tables_response;
use crate::impl_has_tables_fields;
use crate::response_traits::HasServerInfo;
use crate::types::{ServerInfo, TableCollection, TablesRequest};
use bytes::Bytes;
use http::HeaderMap;

/// Response from ListTables operation
#[derive(Clone, Debug)]
pub struct ListTablesResponse {
    request: TablesRequest,
    headers: HeaderMap,
    body: Bytes,
    tables: TableCollection,
}

impl ListTablesResponse {
    /// Returns the listed tables
    pub fn tables(&self) -> &TableCollection {
        &self.tables
    }

    /// Returns the table names, in the order the service sent them
    pub fn names(&self) -> Vec<&str> {
        self.tables.names()
    }

    pub fn into_tables(self) -> TableCollection {
        self.tables
    }
}

impl HasServerInfo for ListTablesResponse {
    fn server(&self) -> Option<&ServerInfo> {
        self.tables.server()
    }
}

impl_has_tables_fields!(ListTablesResponse);
impl_from_tables_response!(ListTablesResponse => tables);
