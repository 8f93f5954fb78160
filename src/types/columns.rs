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

//! Column descriptors exchanged by create-table and show-table

use crate::types::ServerInfo;
use serde::de;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A typed field descriptor within a table's schema.
///
/// `column_type` is passed through verbatim; the service decides which type
/// names it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
}

impl Column {
    /// Creates a column with only name and type set
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            size: None,
            nullable: None,
            unique: None,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = Some(unique);
        self
    }
}

/// Ordered sequence of [`Column`]s.
///
/// Encodes as `{"server": ..., "columns": [...], "count": n}`, with `server`
/// omitted when unset. Decoding also accepts a bare array of columns. The
/// count always equals the number of columns held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnCollection {
    server: Option<ServerInfo>,
    columns: Vec<Column>,
}

impl<'de> Deserialize<'de> for ColumnCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            #[serde(default)]
            server: Option<ServerInfo>,
            #[serde(default)]
            columns: Vec<Column>,
        }

        match Value::deserialize(deserializer)? {
            value @ Value::Array(_) => Vec::<Column>::deserialize(value)
                .map(Self::new)
                .map_err(de::Error::custom),
            value @ Value::Object(_) => Wire::deserialize(value)
                .map(|w| Self {
                    server: w.server,
                    columns: w.columns,
                })
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected a column collection, found {other}"
            ))),
        }
    }
}

impl Serialize for ColumnCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.server.is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("ColumnCollection", len)?;
        if let Some(server) = &self.server {
            state.serialize_field("server", server)?;
        }
        state.serialize_field("columns", &self.columns)?;
        state.serialize_field("count", &self.columns.len())?;
        state.end()
    }
}

impl ColumnCollection {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            server: None,
            columns,
        }
    }

    /// Server information echoed by the service, if any
    pub fn server(&self) -> Option<&ServerInfo> {
        self.server.as_ref()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn push(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Looks up a column by exact name
    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }
}

impl From<Vec<Column>> for ColumnCollection {
    fn from(columns: Vec<Column>) -> Self {
        Self::new(columns)
    }
}

impl FromIterator<Column> for ColumnCollection {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ColumnCollection {
    type Item = Column;
    type IntoIter = std::vec::IntoIter<Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl<'a> IntoIterator for &'a ColumnCollection {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
