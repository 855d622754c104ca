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

//! In-memory Redfish service.
//!
//! A [`Service`] holds canned responses keyed by request. Any number of
//! [`Bmc`] sessions with their own credentials can be opened on it; every
//! request they make is journaled so tests can assert on what was sent and
//! with which authentication.
//!
//! Expectations are not consumed: the same request can be answered any
//! number of times. A later expectation for the same request wins.

pub mod expect;

#[doc(inline)]
pub use expect::Expect;
pub use expect::ExpectedRequest;

use http::StatusCode;
use redfish_conformance_core::paths;
use redfish_conformance_core::Bmc as ConformanceBmc;
use redfish_conformance_core::BmcCredentials;
use redfish_conformance_core::RawResponse;
use redfish_conformance_core::Resource;
use redfish_conformance_core::ResponseError;
use serde::Serialize;
use serde_json::from_str;
use serde_json::to_value;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Base URL reported by mock sessions.
pub const MOCK_BASE_URL: &str = "https://mock-bmc";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("lock error: {0}")]
    MutexLock(String),
    #[error("nothing is expected for {method} {path}")]
    NothingIsExpected { method: &'static str, path: String },
    #[error("unexpected HTTP status {status} for {path}")]
    Status { status: StatusCode, path: String },
    #[error("transport failure for {path}: {reason}")]
    Transport { path: String, reason: String },
    #[error("bad json response for {path}: {source}")]
    BadResponseJson {
        path: String,
        source: serde_json::Error,
    },
    #[error("request is not serializable: {0}")]
    BadRequestJson(serde_json::Error),
}

impl Error {
    pub fn mutex_lock<T>(err: PoisonError<T>) -> Self {
        Self::MutexLock(err.to_string())
    }
}

impl ResponseError for Error {
    fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Request as seen by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<JsonValue>,
    /// Token sent with the request, if the session had one.
    pub token: Option<String>,
    /// Whether the session had completed authentication.
    pub authenticated: bool,
}

#[derive(Default)]
struct State {
    expect: Vec<Expect>,
    journal: Vec<RecordedRequest>,
}

/// Shared canned Redfish service.
#[derive(Clone, Default)]
pub struct Service {
    state: Arc<Mutex<State>>,
}

impl Service {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an expectation. It takes precedence over earlier ones for the
    /// same request.
    pub fn expect(&self, exp: Expect) {
        self.state.lock().expect("not poisoned").expect.push(exp);
    }

    pub fn expect_all(&self, exps: impl IntoIterator<Item = Expect>) {
        self.state
            .lock()
            .expect("not poisoned")
            .expect
            .extend(exps);
    }

    /// Open an unauthenticated session.
    #[must_use]
    pub fn session(&self, credentials: BmcCredentials) -> Bmc {
        Bmc {
            service: self.clone(),
            credentials,
            token: None,
            authenticated: false,
        }
    }

    /// All requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().expect("not poisoned").journal.clone()
    }

    /// Requests received for `path`.
    #[must_use]
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    fn respond(&self, request: RecordedRequest) -> Result<RawResponse, Error> {
        let mut state = self.state.lock().map_err(Error::mutex_lock)?;
        let found = state
            .expect
            .iter()
            .rev()
            .find(|exp| exp.request.matches(&request.path, request.body.as_ref()))
            .map(|exp| exp.response.clone());
        let method = request.method;
        let path = request.path.clone();
        state.journal.push(request);
        match found {
            Some(Ok(response)) => Ok(response),
            Some(Err(reason)) => Err(Error::Transport { path, reason }),
            None => Err(Error::NothingIsExpected { method, path }),
        }
    }
}

/// Session on a mock [`Service`].
pub struct Bmc {
    service: Service,
    credentials: BmcCredentials,
    token: Option<String>,
    authenticated: bool,
}

impl Bmc {
    fn record(&self, method: &'static str, path: &str, body: Option<JsonValue>) -> RecordedRequest {
        RecordedRequest {
            method,
            path: path.into(),
            body,
            token: self.token.clone(),
            authenticated: self.authenticated,
        }
    }
}

impl ConformanceBmc for Bmc {
    type Error = Error;

    async fn authenticate(&mut self) -> Result<Option<String>, Self::Error> {
        let body = serde_json::json!({
            "UserName": self.credentials.username,
            "Password": self.credentials.password(),
        });
        let request = RecordedRequest {
            method: "POST",
            path: paths::SESSIONS.into(),
            body: Some(body),
            token: None,
            authenticated: false,
        };
        let response = self.service.respond(request)?;
        if !response.is_success() {
            return Err(Error::Status {
                status: response.status,
                path: paths::SESSIONS.into(),
            });
        }
        self.token = response
            .headers
            .get("X-Auth-Token")
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(ToString::to_string);
        self.authenticated = true;
        Ok(self.token.clone())
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn base_url(&self) -> &str {
        MOCK_BASE_URL
    }

    async fn get(&self, path: &str) -> Result<Resource, Self::Error> {
        let response = self.fetch(path).await?;
        if !response.is_success() {
            return Err(Error::Status {
                status: response.status,
                path: path.into(),
            });
        }
        from_str(&response.body).map_err(|source| Error::BadResponseJson {
            path: path.into(),
            source,
        })
    }

    async fn fetch(&self, path: &str) -> Result<RawResponse, Self::Error> {
        self.service.respond(self.record("GET", path, None))
    }

    async fn post<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<RawResponse, Self::Error> {
        let body = to_value(body).map_err(Error::BadRequestJson)?;
        self.service.respond(self.record("POST", path, Some(body)))
    }
}
