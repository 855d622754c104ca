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
use redfish_conformance_core::odata::has_field;
use redfish_conformance_core::paths;
use redfish_conformance_core::Bmc;
use tracing::info;

/// Properties every computer system resource has to expose.
pub const REQUIRED_FIELDS: [&str; 5] = ["Id", "Name", "Status", "PowerState", "Actions"];

pub async fn status_code<B: Bmc>(fx: &Fixtures<B>) -> CheckResult {
    let response = fx
        .session()?
        .fetch(paths::SYSTEM)
        .await
        .map_err(CheckError::bmc)?;
    ensure!(
        response.status == StatusCode::OK,
        "system resource answered {}",
        response.status
    );
    Ok(())
}

pub fn status_and_power_state<B: Bmc>(fx: &Fixtures<B>) -> CheckResult {
    let system = fx.system_info()?;
    ensure!(has_field(system, "Status"), "missing Status");
    ensure!(has_field(system, "PowerState"), "missing PowerState");
    info!(status = %system["Status"], power_state = %system["PowerState"], "system state");
    Ok(())
}

/// Fails on the first missing required property.
pub fn structure<B: Bmc>(fx: &Fixtures<B>) -> CheckResult {
    let system = fx.system_info()?;
    if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !has_field(system, f)) {
        return Err(CheckError::Assertion(format!(
            "missing required field: {missing}"
        )));
    }
    Ok(())
}
