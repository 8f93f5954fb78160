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

//! Creates a table, inspects it, lists all tables and drops it again.
//!
//! Point it at a running service with `TABLES_BASE_URL` (and `TABLES_TOKEN`
//! if the service wants a bearer token):
//!
//! ```text
//! TABLES_BASE_URL=http://localhost:8080 RUST_LOG=info cargo run --example tables_quickstart
//! ```

use tables_client::config;
use tables_client::types::{Column, TablesApi};
use tables_client::{HasColumns, TablesClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="INFO" to log info and higher
    let client: TablesClient = config::from_env().build()?;

    let table: &str = "quickstart_accounts";

    let columns = vec![
        Column::new("id", "INTEGER")
            .with_nullable(false)
            .with_unique(true),
        Column::new("owner", "VARCHAR").with_size(128),
        Column::new("balance", "DOUBLE"),
    ];

    let created = client.create_table(table, columns).build().send().await?;
    log::info!("created '{table}' with columns {:?}", created.column_names());

    let shown = client
        .show_table(table)
        .start(1)
        .limit(2)
        .build()
        .send()
        .await?;
    for column in shown.columns() {
        log::info!("  {} {}", column.name, column.column_type);
    }

    let listing = client.list_tables().row_counts(true).build().send().await?;
    for t in listing.tables() {
        log::info!("table '{}' rows={:?}", t.name, t.rows);
    }

    let deleted = client.delete_table(table).build().send().await?;
    log::info!("delete: {} {}", deleted.rest_status().status, deleted.rest_status().message);

    Ok(())
}
