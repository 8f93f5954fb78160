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
use tables_client::response::ListTablesResponse;
use tables_client::types::TablesApi;
use tables_client::HasServerInfo;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn list_tables_decodes_collection() {
    let (server, client) = mock_setup().await;

    Mock::given(method("GET"))
        .and(path("/tables"))
        .and(query_param_is_missing("start"))
        .and(query_param_is_missing("limit"))
        .and(query_param_is_missing("rowcounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(table_listing()))
        .expect(1)
        .mount(&server)
        .await;

    let resp: ListTablesResponse = client.list_tables().build().send().await.unwrap();

    assert_eq!(resp.names(), vec!["accounts", "orders"]);
    assert_eq!(resp.tables().count(), 2);
    assert_eq!(resp.tables().tables()[0].rows, Some(10));
    assert_eq!(resp.tables().tables()[1].rows, None);
    assert_eq!(resp.server().and_then(|s| s.name.as_deref()), Some("db-host"));

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn list_tables_accepts_plain_names() {
    let (server, client) = mock_setup().await;

    Mock::given(method("GET"))
        .and(path("/tables"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["a", "b", "c"])))
        .mount(&server)
        .await;

    let resp = client.list_tables().build().send().await.unwrap();
    assert_eq!(resp.names(), vec!["a", "b", "c"]);
    assert!(resp.server().is_none());
}

#[tokio::test]
async fn list_tables_sends_paging_and_row_counts() {
    let (server, client) = mock_setup().await;

    Mock::given(method("GET"))
        .and(path("/tables"))
        .and(query_param("start", "20"))
        .and(query_param("limit", "10"))
        .and(query_param("rowcounts", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tables": [], "count": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .list_tables()
        .start(20)
        .limit(10)
        .row_counts(true)
        .build()
        .send()
        .await
        .unwrap();

    assert!(resp.into_tables().is_empty());
}
