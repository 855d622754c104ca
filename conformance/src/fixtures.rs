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

//! Fixtures shared by the checks of one run.
//!
//! Both fixtures are prepared once, before the first check. A fixture that
//! fails to prepare does not stop the run: every check that asks for it
//! gets [`CheckError::Setup`] and is reported as errored, while checks
//! that do not need it run normally.

use crate::error::CheckError;
use crate::target::BmcFactory;
use redfish_conformance_core::paths;
use redfish_conformance_core::Bmc;
use redfish_conformance_core::Resource;
use redfish_conformance_core::ResponseError as _;
use tracing::error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("cannot open session: {0}")]
    Session(String),
    #[error("authentication rejected: invalid credentials")]
    Unauthorized,
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("system information unavailable: {0}")]
    SystemInfo(String),
}

pub struct Fixtures<B> {
    session: Result<B, SetupError>,
    system_info: Result<Resource, SetupError>,
}

impl<B: Bmc> Fixtures<B> {
    /// Open and authenticate the session with the configured credentials,
    /// then read the computer system through it.
    pub async fn prepare<F>(target: &F) -> Self
    where
        F: BmcFactory<Bmc = B>,
    {
        let session = Self::open_session(target).await;
        let system_info = match &session {
            Ok(bmc) => bmc.get(paths::SYSTEM).await.map_err(|err| {
                error!(error = %err, "cannot read system information");
                SetupError::SystemInfo(err.to_string())
            }),
            Err(err) => Err(err.clone()),
        };
        Self {
            session,
            system_info,
        }
    }

    async fn open_session<F>(target: &F) -> Result<B, SetupError>
    where
        F: BmcFactory<Bmc = B>,
    {
        let mut bmc = target
            .create(target.credentials().clone())
            .map_err(|err| SetupError::Session(err.to_string()))?;
        match bmc.authenticate().await {
            Ok(token) => {
                info!(
                    user = %target.credentials().username,
                    token = token.is_some(),
                    "session established"
                );
                Ok(bmc)
            }
            Err(err) if err.is_unauthorized() => Err(SetupError::Unauthorized),
            Err(err) => Err(SetupError::Authentication(err.to_string())),
        }
    }

    /// Authenticated session.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Setup` if the session could not be established.
    pub fn session(&self) -> Result<&B, CheckError> {
        self.session.as_ref().map_err(|err| err.clone().into())
    }

    /// Computer system resource read right after authentication.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Setup` if the session or the read failed.
    pub fn system_info(&self) -> Result<&Resource, CheckError> {
        self.system_info.as_ref().map_err(|err| err.clone().into())
    }
}
