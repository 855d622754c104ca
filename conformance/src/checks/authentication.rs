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
use http::StatusCode;
use redfish_conformance_core::paths;
use redfish_conformance_core::Bmc;
use tracing::info;

/// The session fixture is authenticated, with a token or with Basic.
pub fn success<B: Bmc>(fx: &Fixtures<B>) -> CheckResult {
    let bmc = fx.session()?;
    ensure!(bmc.is_authenticated(), "session is not authenticated");
    if bmc.token().is_some() {
        info!("authenticated with session token");
    } else {
        info!("authenticated without session token, using basic authentication");
    }
    Ok(())
}

/// Authenticated read of the service root answers 200.
pub async fn response_code<B: Bmc>(fx: &Fixtures<B>) -> CheckResult {
    let response = fx
        .session()?
        .fetch(paths::SERVICE_ROOT)
        .await
        .map_err(CheckError::bmc)?;
    ensure!(
        response.status == StatusCode::OK,
        "service root answered {}",
        response.status
    );
    Ok(())
}
