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

//! Client method for CreateTable operation

use crate::builders::{CreateTable, CreateTableBldr};
use crate::client::TablesClient;
use crate::types::ColumnCollection;

impl TablesClient {
    /// Creates a table
    ///
    /// Sends `PUT /tables/{table}` with the column definitions as body and
    /// returns the column collection the service answers with.
    ///
    /// # Arguments
    ///
    /// * `table` - Name of the new table; reserved characters are escaped
    /// * `columns` - Column definitions, e.g. a `Vec<Column>`
    pub fn create_table(
        &self,
        table: impl Into<String>,
        columns: impl Into<ColumnCollection>,
    ) -> CreateTableBldr {
        CreateTable::builder()
            .client(self.clone())
            .table(table)
            .columns(columns)
    }
}
