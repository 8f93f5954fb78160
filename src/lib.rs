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

//! # Tables REST client (`tables-client`)
//!
//! This crate provides a strongly-typed, async-first interface to a tabular-data
//! service exposing tables over REST (`/tables`, `/tables/{table}`).
//!
//! Each supported operation has a corresponding request builder (e.g.,
//! [`builders::CreateTable`], [`builders::ShowTable`]), which allows users to
//! configure request parameters using a fluent builder pattern.
//!
//! All request builders implement the [`types::TablesApi`] trait, which provides
//! the async [`send`](crate::types::TablesApi::send) method to execute the
//! request and return a typed response, and
//! [`execute`](crate::types::TablesApi::execute) to deliver the outcome to a
//! completion callback instead.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use tables_client::client::TablesClient;
//! use tables_client::types::TablesApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = TablesClient::new("http://localhost:8080").unwrap();
//!
//!     let listing = client
//!         .list_tables()
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed");
//!
//!     println!("tables: {:?}", listing.names());
//! }
//! ```
//!
//! ## Operations
//!
//! | Method | Request | Response |
//! |---|---|---|
//! | [`create_table`](client::TablesClient::create_table) | `PUT /tables/{table}` | [`response::CreateTableResponse`] |
//! | [`list_tables`](client::TablesClient::list_tables) | `GET /tables` | [`response::ListTablesResponse`] |
//! | [`show_table`](client::TablesClient::show_table) | `GET /tables/{table}` | [`response::ShowTableResponse`] |
//! | [`delete_table`](client::TablesClient::delete_table) | `DELETE /tables/{table}` | [`response::DeleteTableResponse`] |
//!
//! ## Design
//! - Each API method on [`client::TablesClient`] returns a builder struct
//! - Builders implement [`types::ToTablesRequest`] for request conversion and [`types::TablesApi`] for execution
//! - Responses implement [`types::FromTablesResponse`] for consistent deserialization
//! - HTTP goes through a pluggable [`transport::Transport`], `reqwest` by default

#![allow(clippy::result_large_err)]

pub mod auth;
pub mod builders;
pub mod client;
pub mod config;
pub mod error;
pub mod multimap_ext;
pub mod response;
pub mod response_traits;
pub mod transport;
pub mod types;
pub mod utils;

pub use client::{TablesClient, TablesClientBuilder};
pub use error::{Error, ValidationErr};
pub use response_traits::{HasColumns, HasServerInfo, HasTablesFields};
pub use types::{
    Column, ColumnCollection, RestStatus, ServerInfo, Table, TableCollection, TablesApi,
};

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
