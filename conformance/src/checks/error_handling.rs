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

use crate::error::CheckError;
use crate::error::CheckResult;
use crate::fixtures::Fixtures;
use crate::fixtures::SetupError;
use crate::target::BmcFactory;
use http::StatusCode;
use redfish_conformance_core::paths;
use redfish_conformance_core::Bmc;
use redfish_conformance_core::BmcCredentials;
use redfish_conformance_core::ResponseError as _;
use tracing::info;
use tracing::warn;

pub const INVALID_USERNAME: &str = "wrong_user";
pub const INVALID_PASSWORD: &str = "wrong_password";

/// A fresh session with unknown credentials must not authenticate.
///
/// Any failure counts as a rejection. A failure other than 401 is logged,
/// since it may also mean the BMC is unreachable.
pub async fn invalid_authentication<F: BmcFactory>(target: &F) -> CheckResult {
    let credentials = BmcCredentials::new(INVALID_USERNAME.into(), INVALID_PASSWORD.into());
    let mut bmc = target
        .create(credentials)
        .map_err(|err| SetupError::Session(err.to_string()))?;
    match bmc.authenticate().await {
        Ok(_) => Err(CheckError::Assertion(
            "authentication with invalid credentials succeeded".into(),
        )),
        Err(err) => {
            if err.is_unauthorized() {
                info!("invalid credentials rejected");
            } else {
                warn!(error = %err, "authentication failed without 401");
            }
            ensure!(
                !bmc.is_authenticated(),
                "session is authenticated after a failed authentication"
            );
            Ok(())
        }
    }
}

/// A nonexistent resource answers 404. The error of `get` is inspected
/// here rather than failing the check.
pub async fn invalid_endpoint<B: Bmc>(fx: &Fixtures<B>) -> CheckResult {
    match fx.session()?.get(paths::INVALID_ENDPOINT).await {
        Ok(_) => Err(CheckError::Assertion(format!(
            "{} answered with a resource",
            paths::INVALID_ENDPOINT
        ))),
        Err(err) => {
            ensure!(
                err.status() == Some(StatusCode::NOT_FOUND),
                "expected 404, got: {err}"
            );
            Ok(())
        }
    }
}
