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

//! Builder for DeleteTable operation

use crate::client::TablesClient;
use crate::error::ValidationErr;
use crate::response::DeleteTableResponse;
use crate::types::{TablesApi, TablesRequest, ToTablesRequest};
use crate::utils::{TableName, table_path};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for DeleteTable operation
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteTable {
    #[builder(!default)]
    client: TablesClient,
    #[builder(!default, setter(into))]
    table: String,
}

impl TablesApi for DeleteTable {
    type TablesResponse = DeleteTableResponse;
}

/// Builder type for DeleteTable
pub type DeleteTableBldr = DeleteTableBuilder<((TablesClient,), (String,))>;

impl ToTablesRequest for DeleteTable {
    fn to_tables_request(self) -> Result<TablesRequest, ValidationErr> {
        let table = TableName::new(self.table)?;

        Ok(TablesRequest {
            client: self.client,
            method: Method::DELETE,
            path: table_path(&table),
            query_params: Default::default(),
            headers: Default::default(),
            body: None,
        })
    }
}
