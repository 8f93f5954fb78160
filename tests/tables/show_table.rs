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
use tables_client::response::ShowTableResponse;
use tables_client::types::TablesApi;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn show_table_without_paging_omits_query() {
    let (server, client) = mock_setup().await;

    Mock::given(method("GET"))
        .and(path("/tables/accounts"))
        .and(query_param_is_missing("start"))
        .and(query_param_is_missing("limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(accounts_columns()))
        .expect(1)
        .mount(&server)
        .await;

    let resp: ShowTableResponse = client.show_table("accounts").build().send().await.unwrap();
    assert_eq!(resp.columns().count(), 2);

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), None);
}

#[tokio::test]
async fn show_table_sends_start_and_limit() {
    let (server, client) = mock_setup().await;

    Mock::given(method("GET"))
        .and(path("/tables/accounts"))
        .and(query_param("start", "10"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(accounts_columns()))
        .expect(1)
        .mount(&server)
        .await;

    client
        .show_table("accounts")
        .start(10)
        .limit(5)
        .build()
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn show_table_escapes_reserved_characters() {
    let (server, client) = mock_setup().await;

    Mock::given(method("GET"))
        .and(path("/tables/a%23b%25c%26d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(accounts_columns()))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.show_table("a#b%c&d").build().send().await.unwrap();
    assert_eq!(resp.into_columns().into_columns().len(), 2);
}
