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

//! Client method for ShowTable operation

use crate::builders::{ShowTable, ShowTableBldr};
use crate::client::TablesClient;

impl TablesClient {
    /// Shows the columns of a table
    ///
    /// # Arguments
    ///
    /// * `table` - Name of the table; reserved characters are escaped
    ///
    /// # Optional Parameters
    ///
    /// * `start` - Index of the first column to return
    /// * `limit` - Maximum number of columns to return
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tables_client::client::TablesClient;
    /// use tables_client::types::TablesApi;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = TablesClient::new("http://localhost:8080")?;
    /// let response = client
    ///     .show_table("accounts")
    ///     .start(10)
    ///     .limit(5)
    ///     .build()
    ///     .send()
    ///     .await?;
    /// for column in response.columns() {
    ///     println!("{} {}", column.name, column.column_type);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn show_table(&self, table: impl Into<String>) -> ShowTableBldr {
        ShowTable::builder().client(self.clone()).table(table)
    }
}
