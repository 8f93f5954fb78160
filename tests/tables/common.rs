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

//! Common helper functions for Tables API integration tests

use serde_json::{Value, json};
use tables_client::client::TablesClient;
use wiremock::MockServer;

/// Initialise test logging once per binary; `RUST_LOG=debug` shows requests.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Start a mock server and a client pointing at it
pub async fn mock_setup() -> (MockServer, TablesClient) {
    init_logging();
    let server = MockServer::start().await;
    let client = TablesClient::builder()
        .endpoint(server.uri())
        .build()
        .unwrap();
    (server, client)
}

/// Generate a random table name
pub fn rand_table_name() -> String {
    format!(
        "table_{}",
        uuid::Uuid::new_v4().to_string().replace('-', "")
    )
}

pub fn server_info() -> Value {
    json!({"api": 1, "name": "db-host", "id": "3f2a", "session": 42})
}

/// Column collection payload for an `id`/`name` table
pub fn accounts_columns() -> Value {
    json!({
        "server": server_info(),
        "columns": [
            {"name": "id", "type": "INTEGER", "nullable": false, "unique": true},
            {"name": "name", "type": "VARCHAR", "size": 64}
        ],
        "count": 2
    })
}

pub fn table_listing() -> Value {
    json!({
        "server": server_info(),
        "tables": [
            {"name": "accounts", "schema": "public", "columns": 2, "rows": 10},
            {"name": "orders", "schema": "public", "columns": 5}
        ],
        "count": 2
    })
}

pub fn rest_status(status: u16, msg: &str) -> Value {
    json!({"server": server_info(), "status": status, "msg": msg})
}
