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

//! Table descriptors returned by list-tables

use crate::types::ServerInfo;
use serde::de;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A table the caller has access to.
///
/// Older servers list bare names; those decode with only `name` set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Number of columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u64>,
    /// Number of rows, when the server was asked to count them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u64>,
}

impl<'de> Deserialize<'de> for Table {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            name: String,
            #[serde(default)]
            schema: Option<String>,
            #[serde(default)]
            columns: Option<u64>,
            #[serde(default)]
            rows: Option<u64>,
        }

        match Value::deserialize(deserializer)? {
            Value::String(name) => Ok(Table::new(name)),
            value @ Value::Object(_) => Wire::deserialize(value)
                .map(|w| Table {
                    name: w.name,
                    schema: w.schema,
                    columns: w.columns,
                    rows: w.rows,
                })
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected a table name or table object, found {other}"
            ))),
        }
    }
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            columns: None,
            rows: None,
        }
    }
}

/// Ordered sequence of [`Table`]s, as returned by list-tables.
///
/// Encodes as `{"server": ..., "tables": [...], "count": n}`; decoding also
/// accepts a bare array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCollection {
    server: Option<ServerInfo>,
    tables: Vec<Table>,
}

impl<'de> Deserialize<'de> for TableCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            #[serde(default)]
            server: Option<ServerInfo>,
            #[serde(default)]
            tables: Vec<Table>,
        }

        match Value::deserialize(deserializer)? {
            value @ Value::Array(_) => Vec::<Table>::deserialize(value)
                .map(Self::new)
                .map_err(de::Error::custom),
            value @ Value::Object(_) => Wire::deserialize(value)
                .map(|w| Self {
                    server: w.server,
                    tables: w.tables,
                })
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected a table collection, found {other}"
            ))),
        }
    }
}

impl Serialize for TableCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.server.is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("TableCollection", len)?;
        if let Some(server) = &self.server {
            state.serialize_field("server", server)?;
        }
        state.serialize_field("tables", &self.tables)?;
        state.serialize_field("count", &self.tables.len())?;
        state.end()
    }
}

impl TableCollection {
    pub fn new(tables: Vec<Table>) -> Self {
        Self {
            server: None,
            tables,
        }
    }

    pub fn server(&self) -> Option<&ServerInfo> {
        self.server.as_ref()
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn count(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Table names in listing order
    pub fn names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Table> {
        self.tables.iter()
    }

    pub fn into_tables(self) -> Vec<Table> {
        self.tables
    }
}

impl From<Vec<Table>> for TableCollection {
    fn from(tables: Vec<Table>) -> Self {
        Self::new(tables)
    }
}

impl FromIterator<Table> for TableCollection {
    fn from_iter<I: IntoIterator<Item = Table>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for TableCollection {
    type Item = Table;
    type IntoIter = std::vec::IntoIter<Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.into_iter()
    }
}

impl<'a> IntoIterator for &'a TableCollection {
    type Item = &'a Table;
    type IntoIter = std::slice::Iter<'a, Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}
