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

//! Core types for Tables operations

mod columns;
pub mod request;
mod tables;

pub use columns::{Column, ColumnCollection};
pub use request::{FromTablesResponse, TablesApi, TablesRequest, ToTablesRequest};
pub use tables::{Table, TableCollection};

use serde::{Deserialize, Serialize};

/// Server identification echoed in every service payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// API version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<i64>,
    /// Host name of the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unique instance id of the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Server-side session number of the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<i64>,
}

/// Status payload the service sends with errors and with delete-table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerInfo>,
    #[serde(default)]
    pub status: u16,
    #[serde(default, rename = "msg")]
    pub message: String,
}
