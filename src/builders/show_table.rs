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

//! Builder for ShowTable operation

use crate::client::TablesClient;
use crate::error::ValidationErr;
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::response::ShowTableResponse;
use crate::types::{TablesApi, TablesRequest, ToTablesRequest};
use crate::utils::{TableName, table_path};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for ShowTable operation
///
/// Fetches the column definitions of one table. `start` and `limit` are
/// passed through to the service unchanged and are only sent when set.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ShowTable {
    #[builder(!default)]
    client: TablesClient,
    #[builder(!default, setter(into))]
    table: String,
    /// Index of the first column to return
    #[builder(default, setter(strip_option(fallback = start_opt)))]
    start: Option<u32>,
    /// Maximum number of columns to return
    #[builder(default, setter(strip_option(fallback = limit_opt)))]
    limit: Option<u32>,
}

impl TablesApi for ShowTable {
    type TablesResponse = ShowTableResponse;
}

/// Builder type for ShowTable
pub type ShowTableBldr = ShowTableBuilder<((TablesClient,), (String,), (), ())>;

impl ToTablesRequest for ShowTable {
    fn to_tables_request(self) -> Result<TablesRequest, ValidationErr> {
        let table = TableName::new(self.table)?;

        let mut query_params = Multimap::new();
        query_params.add_opt("start", self.start);
        query_params.add_opt("limit", self.limit);

        Ok(TablesRequest {
            client: self.client,
            method: Method::GET,
            path: table_path(&table),
            query_params,
            headers: Default::default(),
            body: None,
        })
    }
}
