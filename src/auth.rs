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

//! Authentication providers for the Tables API
//!
//! - **NoAuth** (default): adds nothing; requests carry only transport headers
//! - **Bearer Token**: static `Authorization: Bearer <token>` header
//!
//! Tokens are never refreshed by the client.

use crate::error::Error;
use crate::multimap_ext::{Multimap, MultimapExt};
use http::Method;
use std::fmt::Debug;
use std::sync::Arc;

/// Authorization header name
const AUTHORIZATION: &str = "authorization";

/// Trait for authenticating Tables API requests
///
/// The trait is object-safe so a provider can be stored in the client.
/// Implementations must be `Send + Sync` to support concurrent requests.
pub trait TablesAuth: Send + Sync + Debug {
    /// Authenticate a request by adding appropriate headers
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method of the request
    /// * `path` - Request path (e.g., `/tables/accounts`)
    /// * `headers` - Mutable headers map to add authentication headers to
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be authenticated.
    fn authenticate(&self, method: &Method, path: &str, headers: &mut Multimap)
    -> Result<(), Error>;

    /// Returns a human-readable name for this auth provider
    fn name(&self) -> &'static str;
}

/// Bearer token authentication
///
/// The token is sent verbatim on every request. Obtaining and refreshing it
/// is the caller's responsibility; build a new client with the new token.
///
/// # Example
///
/// ```no_run
/// use tables_client::auth::BearerAuth;
///
/// let auth = BearerAuth::new("eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9...");
/// let custom = BearerAuth::with_token_type("my-token", "Token");
/// ```
#[derive(Clone)]
pub struct BearerAuth {
    token: String,
    token_type: String,
    /// Pre-computed authorization header value to avoid allocation per request
    auth_header: String,
}

impl Debug for BearerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth")
            .field("token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .finish()
    }
}

impl BearerAuth {
    /// Create a new BearerAuth using the standard "Bearer" token type
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_token_type(token, "Bearer")
    }

    /// Create a new BearerAuth with a custom token type
    pub fn with_token_type(token: impl Into<String>, token_type: impl Into<String>) -> Self {
        let token = token.into();
        let token_type = token_type.into();
        let auth_header = format!("{token_type} {token}");
        Self {
            token,
            token_type,
            auth_header,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }
}

impl TablesAuth for BearerAuth {
    fn authenticate(
        &self,
        _method: &Method,
        _path: &str,
        headers: &mut Multimap,
    ) -> Result<(), Error> {
        headers.add(AUTHORIZATION, &self.auth_header);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "BearerAuth"
    }
}

/// No authentication
#[derive(Clone, Debug, Default)]
pub struct NoAuth;

impl NoAuth {
    pub fn new() -> Self {
        Self
    }
}

impl TablesAuth for NoAuth {
    fn authenticate(
        &self,
        _method: &Method,
        _path: &str,
        _headers: &mut Multimap,
    ) -> Result<(), Error> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "NoAuth"
    }
}

/// Type alias for boxed auth provider
pub type BoxedTablesAuth = Arc<dyn TablesAuth>;
