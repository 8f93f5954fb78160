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

//! Argument builders for Tables API operations

mod create_table;
mod delete_table;
mod list_tables;
mod show_table;

pub use create_table::{CreateTable, CreateTableBldr};
pub use delete_table::{DeleteTable, DeleteTableBldr};
pub use list_tables::{ListTables, ListTablesBldr};
pub use show_table::{ShowTable, ShowTableBldr};
