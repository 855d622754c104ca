// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Baseboard Management Controller (BMC) session abstraction
//!
//! This module defines the transport-agnostic [`Bmc`] trait: one
//! authenticated conversation with a single Redfish service root.
//! Conformance checks are written against this trait so they run the same
//! way over HTTPS and against the in-memory mock.
//!
//! Operation semantics:
//! - `authenticate` creates a Redfish session from the stored credentials.
//!   `Ok(Some(token))` means an `X-Auth-Token` was issued and is now sent on
//!   every request. `Ok(None)` means the service accepted the credentials but
//!   issued no token; the session falls back to HTTP Basic authentication.
//!   HTTP 401 is reported as an error for which
//!   [`ResponseError::is_unauthorized`] returns `true`.
//! - `get` reads a resource and fails on any non-2xx status or on a body that
//!   is not JSON. The error carries the status code.
//! - `fetch` issues the same GET but hands back the raw response whatever the
//!   status is.
//! - `post` sends a JSON body and never fails on status: actions that answer
//!   202/204 or reject a command with 4xx are observed, not raised.
//!
//! Notes for implementors:
//! - `authenticate` takes `&mut self`; it is the only operation that mutates
//!   session state. Reads borrow the session immutably, so two concurrent
//!   authentications on one session cannot be expressed.
//! - Paths are appended verbatim to the base URL of the session.

use crate::RawResponse;
use crate::Resource;
use http::StatusCode;
use serde::Serialize;
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;

/// BMC trait defines access to a Baseboard Management Controller using
/// the Redfish protocol.
pub trait Bmc: Send + Sync {
    /// BMC Error.
    type Error: ResponseError + StdError + Send + Sync + 'static;

    /// Create a session using the stored credentials.
    fn authenticate(&mut self) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send;

    /// Whether a previous `authenticate` succeeded.
    fn is_authenticated(&self) -> bool;

    /// Session token obtained by `authenticate`, if any.
    fn token(&self) -> Option<&str>;

    /// Base URL of the service root this session talks to.
    fn base_url(&self) -> &str;

    /// Read JSON resource at `path`.
    fn get(&self, path: &str) -> impl Future<Output = Result<Resource, Self::Error>> + Send;

    /// GET `path` without interpreting the status code.
    fn fetch(&self, path: &str) -> impl Future<Output = Result<RawResponse, Self::Error>> + Send;

    /// POST JSON `body` to `path` without interpreting the status code.
    fn post<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> impl Future<Output = Result<RawResponse, Self::Error>> + Send;
}

/// Classification of BMC errors that checks need to react on.
pub trait ResponseError {
    /// HTTP status that caused the error, if the error came from a response.
    fn status(&self) -> Option<StatusCode>;

    /// Returns true if the service rejected the credentials.
    fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

/// Credentials used to access the BMC.
///
/// `Debug`/`Display` redact the password.
#[derive(Clone, PartialEq, Eq)]
pub struct BmcCredentials {
    /// Username to access BMC.
    pub username: String,
    password: String,
}

impl BmcCredentials {
    /// Create new credentials.
    #[must_use]
    pub const fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    /// Get password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for BmcCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BmcCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for BmcCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BmcCredentials(username: {}, password: [REDACTED])",
            self.username
        )
    }
}
