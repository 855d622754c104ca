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

//! Session state of one Redfish conversation.

use redfish_conformance_core::BmcCredentials;
use std::fmt;
use url::ParseError;
use url::Url;

/// Base URL of a Redfish service.
///
/// Trailing slashes are removed on construction; request paths are
/// appended verbatim, so `/redfish/v1/Systems/system` on
/// `https://bmc:2443/` targets `https://bmc:2443/redfish/v1/Systems/system`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedfishEndpoint {
    base_url: String,
}

impl RedfishEndpoint {
    /// Normalize and validate a base URL.
    ///
    /// # Errors
    ///
    /// Returns the URL parser error if `base_url` is not an absolute URL.
    pub fn parse(base_url: &str) -> Result<Self, ParseError> {
        let base_url = base_url.trim_end_matches('/');
        Url::parse(base_url)?;
        Ok(Self {
            base_url: base_url.to_string(),
        })
    }

    /// Convert a path to a full Redfish endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns the URL parser error if the concatenation is not a valid URL.
    pub fn with_path(&self, path: &str) -> Result<Url, ParseError> {
        Url::parse(&format!("{}{path}", self.base_url))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Display for RedfishEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_url)
    }
}

/// Authentication attached to every request of a session.
#[derive(Clone, PartialEq, Eq)]
pub enum SessionAuth {
    /// Session is not authenticated yet.
    Anonymous,
    /// `X-Auth-Token` issued by the session service.
    Token(String),
    /// HTTP Basic authentication with the session credentials.
    Basic(BmcCredentials),
}

impl fmt::Debug for SessionAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("Anonymous"),
            Self::Token(_) => f.write_str("Token([REDACTED])"),
            Self::Basic(creds) => f.debug_tuple("Basic").field(creds).finish(),
        }
    }
}

/// Session state.
///
/// Mutated only by authentication; read by every request.
#[derive(Debug)]
pub struct Session {
    endpoint: RedfishEndpoint,
    credentials: BmcCredentials,
    auth: SessionAuth,
}

impl Session {
    #[must_use]
    pub const fn new(endpoint: RedfishEndpoint, credentials: BmcCredentials) -> Self {
        Self {
            endpoint,
            credentials,
            auth: SessionAuth::Anonymous,
        }
    }

    #[must_use]
    pub const fn endpoint(&self) -> &RedfishEndpoint {
        &self.endpoint
    }

    #[must_use]
    pub const fn credentials(&self) -> &BmcCredentials {
        &self.credentials
    }

    #[must_use]
    pub const fn auth(&self) -> &SessionAuth {
        &self.auth
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match &self.auth {
            SessionAuth::Token(token) => Some(token),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !matches!(self.auth, SessionAuth::Anonymous)
    }

    pub(crate) fn set_token(&mut self, token: String) {
        self.auth = SessionAuth::Token(token);
    }

    pub(crate) fn fall_back_to_basic(&mut self) {
        self.auth = SessionAuth::Basic(self.credentials.clone());
    }
}
