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

//! Builder for ListTables operation

use crate::client::TablesClient;
use crate::error::ValidationErr;
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::response::ListTablesResponse;
use crate::types::{TablesApi, TablesRequest, ToTablesRequest};
use crate::utils::TABLES_PATH;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for ListTables operation
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListTables {
    #[builder(!default)]
    client: TablesClient,
    /// Index of the first table to return
    #[builder(default, setter(strip_option(fallback = start_opt)))]
    start: Option<u32>,
    /// Maximum number of tables to return
    #[builder(default, setter(strip_option(fallback = limit_opt)))]
    limit: Option<u32>,
    /// Ask the service to include row counts
    #[builder(default, setter(strip_option(fallback = row_counts_opt)))]
    row_counts: Option<bool>,
}

impl TablesApi for ListTables {
    type TablesResponse = ListTablesResponse;
}

/// Builder type for ListTables
pub type ListTablesBldr = ListTablesBuilder<((TablesClient,), (), (), ())>;

impl ToTablesRequest for ListTables {
    fn to_tables_request(self) -> Result<TablesRequest, ValidationErr> {
        let mut query_params = Multimap::new();
        query_params.add_opt("start", self.start);
        query_params.add_opt("limit", self.limit);
        query_params.add_opt("rowcounts", self.row_counts);

        Ok(TablesRequest {
            client: self.client,
            method: Method::GET,
            path: TABLES_PATH.to_string(),
            query_params,
            headers: Default::default(),
            body: None,
        })
    }
}
