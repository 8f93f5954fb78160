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
use tables_client::error::{Error, ValidationErr};
use tables_client::types::{ColumnCollection, TablesApi};
use tables_client::TablesClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn not_found_carries_status_and_message() {
    let (server, client) = mock_setup().await;

    Mock::given(method("GET"))
        .and(path("/tables/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(rest_status(404, "table missing not found")),
        )
        .mount(&server)
        .await;

    let err = client
        .show_table("missing")
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    match err {
        Error::HttpStatus {
            status,
            message,
            body,
        } => {
            assert_eq!(status, 404);
            assert_eq!(message.as_deref(), Some("table missing not found"));
            assert!(body.contains("table missing not found"));
        }
        e => panic!("unexpected error: {e:?}"),
    }
}

#[tokio::test]
async fn server_error_without_payload() {
    let (server, client) = mock_setup().await;

    Mock::given(method("GET"))
        .and(path("/tables"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = client.list_tables().build().send().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(matches!(
        err,
        Error::HttpStatus { message: None, ref body, .. } if body == "upstream unavailable"
    ));
}

#[tokio::test]
async fn conflict_on_create() {
    let (server, client) = mock_setup().await;

    Mock::given(method("PUT"))
        .and(path("/tables/accounts"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(rest_status(409, "table already exists")),
        )
        .mount(&server)
        .await;

    let err = client
        .create_table("accounts", ColumnCollection::default())
        .build()
        .send()
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert_eq!(err.to_string(), "server returned HTTP 409: table already exists");
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let (server, client) = mock_setup().await;

    Mock::given(method("GET"))
        .and(path("/tables"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"tables\": 17"))
        .mount(&server)
        .await;

    let err = client.list_tables().build().send().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn wrong_shape_is_decode_error() {
    let (server, client) = mock_setup().await;

    Mock::given(method("GET"))
        .and(path("/tables/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("42"))
        .mount(&server)
        .await;

    let err = client.show_table("accounts").build().send().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn empty_table_name_fails_before_sending() {
    let (server, client) = mock_setup().await;

    let err = client.show_table("").build().send().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidTableName(_))
    ));

    let err = client.delete_table("").build().send().await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    init_logging();

    // Bind and drop a listener to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = TablesClient::new(format!("http://127.0.0.1:{port}")).unwrap();

    let err = client.list_tables().build().send().await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
    assert_eq!(err.status(), None);
}
