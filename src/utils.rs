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

//! Utility functions and validated types for Tables operations
//!
//! Names are validated at construction time ("parse, don't validate"), and
//! every path segment and query component is percent-escaped here.

use crate::error::ValidationErr;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt;

/// Collection path of the Tables API
pub const TABLES_PATH: &str = "/tables";

/// Everything outside the RFC 3986 unreserved set gets escaped.
const UNRESERVED_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes `s`, keeping only unreserved characters literal.
///
/// Used for query keys and values and for path segments alike; `/` is
/// escaped too, so the result is always exactly one path segment.
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, UNRESERVED_ESCAPE).collect()
}

/// Percent-encodes a table name as one path segment; see [`url_encode`].
pub fn encode_path_segment(s: &str) -> String {
    url_encode(s)
}

/// Returns `/tables/{table}` with the table name escaped.
pub fn table_path(table: &TableName) -> String {
    format!("{TABLES_PATH}/{}", encode_path_segment(table.as_str()))
}

/// A validated table name.
///
/// The service treats table names as opaque identifiers, so the only local
/// rule is that the name is non-empty. Reserved URL characters are allowed
/// and escaped when the path is built.
///
/// # Example
///
/// ```
/// use tables_client::utils::TableName;
///
/// let table = TableName::try_from("accounts").unwrap();
/// assert_eq!(table.as_str(), "accounts");
///
/// assert!(TableName::try_from("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableName(String);

impl TableName {
    /// Creates a new validated table name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErr::InvalidTableName`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationErr> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationErr::InvalidTableName(
                "table name cannot be empty".to_string(),
            ));
        }
        Ok(Self(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TableName {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for TableName {
    type Error = ValidationErr;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for TableName {
    type Error = ValidationErr;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TableName> for String {
    fn from(value: TableName) -> Self {
        value.0
    }
}
