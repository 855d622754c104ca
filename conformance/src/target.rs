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

use crate::config::RunnerConfig;
use redfish_conformance_bmc_http::reqwest::Client;
use redfish_conformance_bmc_http::reqwest::ClientParams;
use redfish_conformance_bmc_http::HttpBmc;
use redfish_conformance_bmc_http::RedfishEndpoint;
use redfish_conformance_core::Bmc;
use redfish_conformance_core::BmcCredentials;
use std::convert::Infallible;
use std::error::Error as StdError;
use tracing::warn;
use url::ParseError;

/// Opens sessions to the BMC under test.
///
/// Most checks share the session of the fixtures. Checks that need a session
/// with other credentials (for example, to observe a rejected login) open
/// their own through [`BmcFactory::create`].
pub trait BmcFactory {
    type Bmc: Bmc;
    type Error: StdError + Send + Sync + 'static;

    /// Base URL of the BMC under test.
    fn base_url(&self) -> &str;

    /// Credentials configured for the run.
    fn credentials(&self) -> &BmcCredentials;

    /// Open a new, unauthenticated session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created.
    fn create(&self, credentials: BmcCredentials) -> Result<Self::Bmc, Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("invalid BMC URL {url}: {source}")]
    InvalidUrl { url: String, source: ParseError },
    #[error("cannot build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// BMC reachable over HTTPS.
///
/// All sessions share one connection pool.
pub struct HttpTarget {
    client: Client,
    endpoint: RedfishEndpoint,
    credentials: BmcCredentials,
}

impl HttpTarget {
    /// Build the HTTP client from the runner configuration.
    ///
    /// # Errors
    ///
    /// - `TargetError::InvalidUrl` if the BMC URL is not an absolute URL
    /// - `TargetError::Client` if the TLS backend cannot be initialized
    pub fn new(config: &RunnerConfig) -> Result<Self, TargetError> {
        let endpoint =
            RedfishEndpoint::parse(&config.bmc_url).map_err(|source| TargetError::InvalidUrl {
                url: config.bmc_url.clone(),
                source,
            })?;
        if config.insecure {
            warn!("TLS certificate verification is disabled");
        }
        let params = ClientParams::new()
            .timeout(config.timeout)
            .accept_invalid_certs(config.insecure);
        Ok(Self {
            client: Client::with_params(params)?,
            endpoint,
            credentials: config.credentials.clone(),
        })
    }
}

impl BmcFactory for HttpTarget {
    type Bmc = HttpBmc<Client>;
    type Error = Infallible;

    fn base_url(&self) -> &str {
        self.endpoint.as_str()
    }

    fn credentials(&self) -> &BmcCredentials {
        &self.credentials
    }

    fn create(&self, credentials: BmcCredentials) -> Result<Self::Bmc, Self::Error> {
        Ok(HttpBmc::new(
            self.client.clone(),
            self.endpoint.clone(),
            credentials,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_url_is_rejected() {
        let config = RunnerConfig {
            bmc_url: "/redfish/v1".into(),
            ..RunnerConfig::default()
        };
        assert!(matches!(
            HttpTarget::new(&config),
            Err(TargetError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn sessions_target_the_normalized_url() {
        let config = RunnerConfig {
            bmc_url: "https://bmc.lab:2443/".into(),
            ..RunnerConfig::default()
        };
        let target = HttpTarget::new(&config).unwrap();
        assert_eq!(target.base_url(), "https://bmc.lab:2443");

        let bmc = target
            .create(BmcCredentials::new("wrong_user".into(), "wrong_password".into()))
            .unwrap();
        assert_eq!(bmc.base_url(), "https://bmc.lab:2443");
        assert!(!bmc.is_authenticated());
    }
}
