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

use crate::HttpClient;
use crate::SessionAuth;
use crate::SessionError;
use crate::X_AUTH_TOKEN;
use http::StatusCode;
use redfish_conformance_core::RawResponse;
use redfish_conformance_core::ResponseError;
use serde::Serialize;
use std::time::Duration;
use url::ParseError;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum BmcError {
    #[error("HTTP client error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("HTTP status 401 Unauthorized for {path}: authentication rejected")]
    Unauthorized { path: String },
    #[error("unexpected HTTP status {status} for {path}")]
    InvalidResponse { status: StatusCode, path: String },
    #[error("JSON deserialization error for {path} at line {} column {}: {source}", .source.line(), .source.column())]
    JsonError {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid request path {path}: {source}")]
    InvalidPath { path: String, source: ParseError },
}

impl BmcError {
    /// Request did not complete within the configured timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::ReqwestError(err) if err.is_timeout())
    }
}

impl ResponseError for BmcError {
    fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            Self::InvalidResponse { status, .. } => Some(*status),
            Self::ReqwestError(err) => err.status(),
            Self::JsonError { .. } | Self::InvalidPath { .. } => None,
        }
    }
}

impl SessionError for BmcError {
    fn unexpected_status(status: StatusCode, path: &str) -> Self {
        if status == StatusCode::UNAUTHORIZED {
            Self::Unauthorized { path: path.into() }
        } else {
            Self::InvalidResponse {
                status,
                path: path.into(),
            }
        }
    }

    fn invalid_json(path: &str, source: serde_json::Error) -> Self {
        Self::JsonError {
            path: path.into(),
            source,
        }
    }

    fn invalid_path(path: &str, source: ParseError) -> Self {
        Self::InvalidPath {
            path: path.into(),
            source,
        }
    }
}

/// User-Agent sent with every request.
pub const USER_AGENT: &str = concat!("redfish-conformance/", env!("CARGO_PKG_VERSION"));

/// Configuration parameters for the reqwest HTTP client.
///
/// Certificate verification is on by default. Lab BMCs with self-signed
/// certificates need [`ClientParams::accept_invalid_certs`].
///
/// # Examples
///
/// ```rust
/// use redfish_conformance_bmc_http::reqwest::ClientParams;
/// use std::time::Duration;
///
/// let params = ClientParams::new()
///     .timeout(Duration::from_secs(10))
///     .accept_invalid_certs(true);
/// ```
#[derive(Debug, Clone)]
pub struct ClientParams {
    /// Timeout of a whole request, connection included
    pub timeout: Duration,
    /// Whether to accept invalid TLS certificates
    pub accept_invalid_certs: bool,
}

impl Default for ClientParams {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            accept_invalid_certs: false,
        }
    }
}

impl ClientParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

/// HTTP client implementation using the reqwest library.
///
/// Cloning is cheap and shares the connection pool. Authentication is not
/// part of the client: each [`crate::HttpBmc`] session attaches its own, so
/// sessions to different BMCs can share one client.
///
/// # Examples
///
/// ```rust,no_run
/// use redfish_conformance_bmc_http::reqwest::Client;
/// use redfish_conformance_bmc_http::reqwest::ClientParams;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let params = ClientParams::new().timeout(Duration::from_secs(60));
/// let client = Client::with_params(params)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
}

impl Client {
    /// Build the connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn with_params(params: ClientParams) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(params.timeout)
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(params.accept_invalid_certs)
            .build()?;
        Ok(Self { client })
    }
}

impl Client {
    fn authorize(request: reqwest::RequestBuilder, auth: &SessionAuth) -> reqwest::RequestBuilder {
        match auth {
            SessionAuth::Anonymous => request,
            SessionAuth::Token(token) => request.header(X_AUTH_TOKEN, token),
            SessionAuth::Basic(credentials) => {
                request.basic_auth(&credentials.username, Some(credentials.password()))
            }
        }
    }

    async fn into_raw(response: reqwest::Response) -> Result<RawResponse, BmcError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

impl HttpClient for Client {
    type Error = BmcError;

    async fn get(&self, url: Url, auth: &SessionAuth) -> Result<RawResponse, Self::Error> {
        let response = Self::authorize(self.client.get(url), auth).send().await?;
        Self::into_raw(response).await
    }

    async fn post<B>(
        &self,
        url: Url,
        body: &B,
        auth: &SessionAuth,
    ) -> Result<RawResponse, Self::Error>
    where
        B: Serialize + Send + Sync + ?Sized,
    {
        let response = Self::authorize(self.client.post(url), auth)
            .json(body)
            .send()
            .await?;
        Self::into_raw(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_status_gets_its_own_variant() {
        let err = BmcError::unexpected_status(StatusCode::UNAUTHORIZED, "/redfish/v1/Systems");
        assert!(matches!(err, BmcError::Unauthorized { .. }));
        assert!(err.is_unauthorized());
        assert_eq!(
            err.to_string(),
            "HTTP status 401 Unauthorized for /redfish/v1/Systems: authentication rejected"
        );

        let err = BmcError::unexpected_status(StatusCode::NOT_FOUND, "/redfish/v1/Nope");
        assert!(!err.is_unauthorized());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(
            err.to_string(),
            "unexpected HTTP status 404 Not Found for /redfish/v1/Nope"
        );
    }

    #[test]
    fn json_error_has_no_status() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = BmcError::invalid_json("/redfish/v1/", source);
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("JSON deserialization error for /redfish/v1/"));
    }

    #[test]
    fn default_params_verify_certificates_and_time_out() {
        let params = ClientParams::default();
        assert!(!params.accept_invalid_certs);
        assert_eq!(params.timeout, Duration::from_secs(30));
    }
}
