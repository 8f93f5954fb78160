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

//! Client method for DeleteTable operation

use crate::builders::{DeleteTable, DeleteTableBldr};
use crate::client::TablesClient;

impl TablesClient {
    /// Deletes a table
    ///
    /// Sends `DELETE /tables/{table}`. The response carries the service's
    /// status payload.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tables_client::client::TablesClient;
    /// use tables_client::types::TablesApi;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = TablesClient::new("http://localhost:8080")?;
    /// let status = client.delete_table("scratch").build().send().await?;
    /// println!("{}", status.rest_status().message);
    /// # Ok(())
    /// # }
    /// ```
    pub fn delete_table(&self, table: impl Into<String>) -> DeleteTableBldr {
        DeleteTable::builder().client(self.clone()).table(table)
    }
}
