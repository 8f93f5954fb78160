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

//! Process-wide defaults
//!
//! Holds the default base URL that clients built without an explicit endpoint
//! use, and the shared runtime on which completion callbacks run unless the
//! caller supplies its own [`Handle`].

use crate::auth::BearerAuth;
use crate::client::TablesClientBuilder;
use crate::error::{Error, ValidationErr};
use once_cell::sync::{Lazy, OnceCell};
use std::sync::RwLock;
use tokio::runtime::{Builder as RuntimeBuilder, Handle, Runtime};

/// Base URL used until [`set_default_base_url`] is called
pub const DEFAULT_BASE_URL: &str = "http://localhost";

/// Environment variable read by [`from_env`] for the endpoint
pub const ENV_BASE_URL: &str = "TABLES_BASE_URL";

/// Environment variable read by [`from_env`] for a bearer token
pub const ENV_TOKEN: &str = "TABLES_TOKEN";

static BASE_URL: Lazy<RwLock<String>> = Lazy::new(|| RwLock::new(DEFAULT_BASE_URL.to_string()));

static RESPONSE_RUNTIME: OnceCell<Runtime> = OnceCell::new();

/// Returns the current process-wide default base URL
pub fn default_base_url() -> String {
    BASE_URL
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Replace the process-wide default base URL.
///
/// Only clients built afterwards pick up the new value.
///
/// # Errors
///
/// Returns [`ValidationErr::InvalidBaseUrl`] if `url` is not an absolute
/// `http` or `https` URL.
pub fn set_default_base_url(url: impl Into<String>) -> Result<(), ValidationErr> {
    let url = validate_base_url(url.into())?;
    log::debug!("default base url set to {url}");
    *BASE_URL
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = url;
    Ok(())
}

/// Checks that `url` is an absolute http(s) URL without query or fragment and
/// returns it with trailing slashes trimmed.
pub(crate) fn validate_base_url(url: String) -> Result<String, ValidationErr> {
    let invalid = |cause: &str| ValidationErr::InvalidBaseUrl {
        url: url.clone(),
        cause: cause.to_string(),
    };

    let parsed = url::Url::parse(&url).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host"));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("must not contain a query or fragment"));
    }

    Ok(url.trim_end_matches('/').to_string())
}

/// Client builder pre-filled from the environment.
///
/// Uses `TABLES_BASE_URL` as endpoint when set (otherwise the process-wide
/// default applies at build time) and `TABLES_TOKEN` as bearer token when set.
pub fn from_env() -> TablesClientBuilder {
    let mut builder = TablesClientBuilder::new();

    if let Ok(endpoint) = std::env::var(ENV_BASE_URL) {
        log::debug!("{ENV_BASE_URL}={endpoint}");
        builder = builder.endpoint(endpoint);
    }
    if let Ok(token) = std::env::var(ENV_TOKEN) {
        log::debug!("{ENV_TOKEN}=*****");
        builder = builder.auth(BearerAuth::new(token));
    }

    builder
}

/// Handle of the library-wide execution context for completion callbacks.
///
/// The runtime is started on first use and lives for the rest of the process.
///
/// # Errors
///
/// Returns [`Error::Context`] if the runtime cannot be started.
pub fn api_response_context() -> Result<Handle, Error> {
    RESPONSE_RUNTIME
        .get_or_try_init(|| {
            log::debug!("starting shared response runtime");
            RuntimeBuilder::new_multi_thread()
                .thread_name("tables-response")
                .enable_all()
                .build()
        })
        .map(|rt| rt.handle().clone())
        .map_err(Error::Context)
}
