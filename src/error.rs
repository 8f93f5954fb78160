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

//! Error definitions for Tables API operations
//!
//! Every operation resolves to exactly one `Result<_, Error>`. Transport
//! failures, non-2xx responses and undecodable bodies all surface as [`Error`];
//! nothing is retried.

use thiserror::Error;

/// Errors raised while validating request parameters, before any I/O happens.
#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error("invalid table name: {0}")]
    InvalidTableName(String),

    #[error("invalid base url '{url}': {cause}")]
    InvalidBaseUrl { url: String, cause: String },

    #[error("invalid header '{name}': {cause}")]
    InvalidHeader { name: String, cause: String },

    #[error("failed to encode request body: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error definitions
#[derive(Debug, Error)]
pub enum Error {
    /// Request parameters were rejected before sending
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    /// The HTTP transport failed (connection refused, DNS, TLS, reset, ...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A custom [`Transport`](crate::transport::Transport) failed
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("server returned HTTP {status}: {}", message.as_deref().unwrap_or("no message"))]
    HttpStatus {
        status: u16,
        /// Message from the server's status payload, when the body carried one
        message: Option<String>,
        /// Raw response body, lossily decoded as UTF-8
        body: String,
    },

    /// The response body did not match the expected shape
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The shared response runtime could not be started
    #[error("execution context unavailable: {0}")]
    Context(#[source] std::io::Error),
}

impl Error {
    /// HTTP status code of the response, for [`Error::HttpStatus`] only.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server answered `404 Not Found`.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
