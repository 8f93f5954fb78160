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

//! Requests handed to a custom transport

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use std::sync::{Arc, Mutex};
use tables_client::TablesClient;
use tables_client::error::Error;
use tables_client::transport::{HttpRequest, HttpResponse, Transport};
use tables_client::types::{Column, TablesApi};

/// Records every request and answers with a fixed outcome
#[derive(Debug, Clone)]
struct RecordingTransport {
    seen: Arc<Mutex<Vec<HttpRequest>>>,
    fail: bool,
}

impl RecordingTransport {
    fn new(fail: bool) -> Self {
        Self {
            seen: Arc::new(Mutex::new(Vec::new())),
            fail,
        }
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        self.seen.lock().unwrap().push(request);
        if self.fail {
            return Err(Error::Transport("link down".to_string()));
        }
        Ok(HttpResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Bytes::from_static(br#"{"columns":[{"name":"id","type":"INTEGER"}],"count":1}"#),
        })
    }

    fn name(&self) -> &'static str {
        "RecordingTransport"
    }
}

fn client_with(transport: &RecordingTransport) -> TablesClient {
    TablesClient::builder()
        .endpoint("http://tables.test:8080")
        .transport(transport.clone())
        .build()
        .unwrap()
}

#[tokio::test]
async fn custom_transport_receives_built_request() {
    let transport = RecordingTransport::new(false);
    let client = client_with(&transport);
    assert_eq!(client.transport_name(), "RecordingTransport");

    let resp = client
        .create_table("sales 2024", vec![Column::new("id", "INTEGER")])
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.columns().count(), 1);

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.url, "http://tables.test:8080/tables/sales%202024");
    assert_eq!(
        request.headers.get("content-type").map(String::as_str),
        Some("application/json")
    );
    assert!(request.headers.get("authorization").is_none());

    let body: serde_json::Value =
        serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"columns": [{"name": "id", "type": "INTEGER"}], "count": 1})
    );
}

#[tokio::test]
async fn get_request_has_no_body() {
    let transport = RecordingTransport::new(false);
    let client = client_with(&transport);

    client
        .show_table("accounts")
        .limit(3)
        .build()
        .send()
        .await
        .unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.url, "http://tables.test:8080/tables/accounts?limit=3");
    assert!(request.body.is_none());
}

#[tokio::test]
async fn transport_error_is_returned_unchanged() {
    let transport = RecordingTransport::new(true);
    let client = client_with(&transport);

    let err = client.list_tables().build().send().await.unwrap_err();
    assert!(matches!(err, Error::Transport(ref msg) if msg == "link down"));
    assert_eq!(err.status(), None);
    assert_eq!(transport.requests().len(), 1);
}
