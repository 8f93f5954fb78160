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

//! Builder for CreateTable operation

use crate::client::TablesClient;
use crate::error::ValidationErr;
use crate::response::CreateTableResponse;
use crate::types::{ColumnCollection, TablesApi, TablesRequest, ToTablesRequest};
use crate::utils::{TableName, table_path};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for CreateTable operation
///
/// Creates a table with the given column definitions. The columns are sent
/// as a JSON `ColumnCollection` with `PUT /tables/{table}`.
///
/// # Example
///
/// ```no_run
/// use tables_client::client::TablesClient;
/// use tables_client::types::{Column, TablesApi};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TablesClient::new("http://localhost:8080")?;
///
/// let columns = vec![
///     Column::new("id", "INTEGER").with_nullable(false).with_unique(true),
///     Column::new("name", "VARCHAR").with_size(64),
/// ];
///
/// let response = client
///     .create_table("accounts", columns)
///     .build()
///     .send()
///     .await?;
/// println!("created with {} columns", response.columns().count());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateTable {
    #[builder(!default)]
    client: TablesClient,
    #[builder(!default, setter(into))]
    table: String,
    #[builder(!default, setter(into))]
    columns: ColumnCollection,
}

impl TablesApi for CreateTable {
    type TablesResponse = CreateTableResponse;
}

/// Builder type for CreateTable
pub type CreateTableBldr = CreateTableBuilder<((TablesClient,), (String,), (ColumnCollection,))>;

impl ToTablesRequest for CreateTable {
    fn to_tables_request(self) -> Result<TablesRequest, ValidationErr> {
        let table = TableName::new(self.table)?;
        let body = serde_json::to_vec(&self.columns)?;

        Ok(TablesRequest {
            client: self.client,
            method: Method::PUT,
            path: table_path(&table),
            query_params: Default::default(),
            headers: Default::default(),
            body: Some(Bytes::from(body)),
        })
    }
}
