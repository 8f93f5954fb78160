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

//! Client method for ListTables operation

use crate::builders::{ListTables, ListTablesBldr};
use crate::client::TablesClient;

impl TablesClient {
    /// Lists the tables of the service
    ///
    /// # Optional Parameters
    ///
    /// * `start` - Index of the first table to return
    /// * `limit` - Maximum number of tables to return
    /// * `row_counts` - Ask the service to include row counts
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tables_client::client::TablesClient;
    /// use tables_client::types::TablesApi;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = TablesClient::new("http://localhost:8080")?;
    /// let response = client.list_tables().build().send().await?;
    /// for table in response.tables() {
    ///     println!("{}", table.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_tables(&self) -> ListTablesBldr {
        ListTables::builder().client(self.clone())
    }
}
