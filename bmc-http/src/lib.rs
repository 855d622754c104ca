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

pub mod session;

#[cfg(feature = "reqwest")]
pub mod reqwest;

use http::StatusCode;
use redfish_conformance_core::paths;
use redfish_conformance_core::Bmc;
use redfish_conformance_core::BmcCredentials;
use redfish_conformance_core::RawResponse;
use redfish_conformance_core::Resource;
use redfish_conformance_core::ResponseError;
use serde::Serialize;
use std::error::Error as StdError;
use std::future::Future;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;
use url::ParseError;
use url::Url;

#[doc(inline)]
pub use session::RedfishEndpoint;
#[doc(inline)]
pub use session::Session;
#[doc(inline)]
pub use session::SessionAuth;

/// Response header carrying the Redfish session token.
pub const X_AUTH_TOKEN: &str = "X-Auth-Token";

pub trait HttpClient: Send + Sync {
    type Error: Send + StdError;

    /// Perform an HTTP GET request.
    fn get(
        &self,
        url: Url,
        auth: &SessionAuth,
    ) -> impl Future<Output = Result<RawResponse, Self::Error>> + Send;

    /// Perform an HTTP POST request with a JSON body.
    fn post<B>(
        &self,
        url: Url,
        body: &B,
        auth: &SessionAuth,
    ) -> impl Future<Output = Result<RawResponse, Self::Error>> + Send
    where
        B: Serialize + Send + Sync + ?Sized;
}

/// Errors that the session layer itself has to produce on top of the
/// transport errors of an [`HttpClient`].
pub trait SessionError: ResponseError {
    /// Non-2xx status where success is required.
    fn unexpected_status(status: StatusCode, path: &str) -> Self;

    /// Body of a successful read is not JSON.
    fn invalid_json(path: &str, err: serde_json::Error) -> Self;

    /// Path does not form a valid URL together with the base URL.
    fn invalid_path(path: &str, err: ParseError) -> Self;
}

/// Body of the Redfish session creation request.
#[derive(Serialize)]
struct SessionCreate<'a> {
    #[serde(rename = "UserName")]
    user_name: &'a str,
    #[serde(rename = "Password")]
    password: &'a str,
}

/// HTTP-based BMC session that wraps an [`HttpClient`].
///
/// Holds one Redfish session: the base URL, the credentials and whatever
/// authentication [`Bmc::authenticate`] established. Every request carries
/// that authentication. Requests issued before authentication are anonymous.
///
/// # Examples
///
/// ```rust,no_run
/// use redfish_conformance_bmc_http::HttpBmc;
/// use redfish_conformance_bmc_http::RedfishEndpoint;
/// use redfish_conformance_bmc_http::reqwest::Client;
/// use redfish_conformance_bmc_http::reqwest::ClientParams;
/// use redfish_conformance_core::{Bmc, BmcCredentials};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::with_params(ClientParams::new().accept_invalid_certs(true))?;
/// let endpoint = RedfishEndpoint::parse("https://localhost:2443/")?;
/// let credentials = BmcCredentials::new("root".into(), "0penBmc".into());
///
/// let mut bmc = HttpBmc::new(client, endpoint, credentials);
/// bmc.authenticate().await?;
/// let system = bmc.get("/redfish/v1/Systems/system").await?;
/// println!("{}", system["PowerState"]);
/// # Ok(())
/// # }
/// ```
pub struct HttpBmc<C: HttpClient> {
    client: C,
    session: Session,
}

impl<C: HttpClient> HttpBmc<C> {
    /// Create an unauthenticated session.
    pub fn new(client: C, endpoint: RedfishEndpoint, credentials: BmcCredentials) -> Self {
        Self {
            client,
            session: Session::new(endpoint, credentials),
        }
    }
}

impl<C: HttpClient> HttpBmc<C>
where
    C::Error: SessionError,
{
    fn url(&self, path: &str) -> Result<Url, C::Error> {
        self.session
            .endpoint()
            .with_path(path)
            .map_err(|err| C::Error::invalid_path(path, err))
    }
}

impl<C: HttpClient> Bmc for HttpBmc<C>
where
    C::Error: SessionError + StdError + Sync + 'static,
{
    type Error = C::Error;

    async fn authenticate(&mut self) -> Result<Option<String>, Self::Error> {
        let url = self.url(paths::SESSIONS)?;
        let credentials = self.session.credentials();
        let body = SessionCreate {
            user_name: &credentials.username,
            password: credentials.password(),
        };
        let response = self
            .client
            .post(url, &body, &SessionAuth::Anonymous)
            .await?;
        info!(status = response.status.as_u16(), "authentication status");

        if response.status == StatusCode::UNAUTHORIZED {
            error!("authentication rejected: invalid credentials");
            return Err(C::Error::unexpected_status(response.status, paths::SESSIONS));
        }
        if !response.is_success() {
            error!(
                status = response.status.as_u16(),
                "authentication failed"
            );
            return Err(C::Error::unexpected_status(response.status, paths::SESSIONS));
        }

        let token = response
            .headers
            .get(X_AUTH_TOKEN)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(ToString::to_string);
        match token {
            Some(token) => {
                info!("session token obtained");
                self.session.set_token(token.clone());
                Ok(Some(token))
            }
            None => {
                warn!("no session token issued, falling back to basic authentication");
                self.session.fall_back_to_basic();
                Ok(None)
            }
        }
    }

    fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    fn token(&self) -> Option<&str> {
        self.session.token()
    }

    fn base_url(&self) -> &str {
        self.session.endpoint().as_str()
    }

    async fn get(&self, path: &str) -> Result<Resource, Self::Error> {
        let response = self.fetch(path).await?;
        if !response.is_success() {
            return Err(C::Error::unexpected_status(response.status, path));
        }
        serde_json::from_str(&response.body).map_err(|err| C::Error::invalid_json(path, err))
    }

    async fn fetch(&self, path: &str) -> Result<RawResponse, Self::Error> {
        let url = self.url(path)?;
        let response = self.client.get(url, self.session.auth()).await?;
        debug!(path, status = response.status.as_u16(), "GET");
        Ok(response)
    }

    async fn post<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<RawResponse, Self::Error> {
        let url = self.url(path)?;
        let response = self.client.post(url, body, self.session.auth()).await?;
        info!(path, status = response.status.as_u16(), "POST");
        Ok(response)
    }
}
