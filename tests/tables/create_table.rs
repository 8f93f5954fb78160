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

use super::common::*;
use serde_json::json;
use tables_client::response::CreateTableResponse;
use tables_client::types::{Column, ColumnCollection, TablesApi};
use tables_client::{HasColumns, HasServerInfo, HasTablesFields};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn create_table_sends_columns_with_put() {
    let (server, client) = mock_setup().await;

    Mock::given(method("PUT"))
        .and(path("/tables/accounts"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({
            "columns": [
                {"name": "id", "type": "INTEGER", "nullable": false, "unique": true},
                {"name": "name", "type": "VARCHAR", "size": 64}
            ],
            "count": 2
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(accounts_columns()))
        .expect(1)
        .mount(&server)
        .await;

    let columns = vec![
        Column::new("id", "INTEGER")
            .with_nullable(false)
            .with_unique(true),
        Column::new("name", "VARCHAR").with_size(64),
    ];

    let resp: CreateTableResponse = client
        .create_table("accounts", columns)
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.columns().count(), 2);
    assert_eq!(resp.column_names(), vec!["id", "name"]);
    assert_eq!(resp.column("id").and_then(|c| c.unique), Some(true));
    assert_eq!(resp.server().and_then(|s| s.session), Some(42));
    assert_eq!(resp.request().method, http::Method::PUT);
}

#[tokio::test]
async fn create_table_escapes_reserved_characters() {
    let (server, client) = mock_setup().await;

    Mock::given(method("PUT"))
        .and(path("/tables/q1%2F2024%20sales%3F"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .create_table("q1/2024 sales?", ColumnCollection::default())
        .build()
        .send()
        .await
        .unwrap();

    assert!(resp.columns().is_empty());
}

#[tokio::test]
async fn create_table_with_random_name() {
    let (server, client) = mock_setup().await;
    let table = rand_table_name();

    Mock::given(method("PUT"))
        .and(path(format!("/tables/{table}")))
        .respond_with(ResponseTemplate::new(201).set_body_json(accounts_columns()))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .create_table(&table, vec![Column::new("id", "INTEGER")])
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.into_columns().count(), 2);
}
