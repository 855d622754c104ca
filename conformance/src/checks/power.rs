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

//! Power state and `ComputerSystem.Reset` checks.
//!
//! The reset checks send real commands. Only [`ResetType::SAFE`] reset
//! types are used, which leave a running system running.

use crate::error::CheckError;
use crate::error::CheckResult;
use crate::fixtures::Fixtures;
use http::StatusCode;
use redfish_conformance_core::paths;
use redfish_conformance_core::power::ResetRequest;
use redfish_conformance_core::Bmc;
use redfish_conformance_core::PowerState;
use redfish_conformance_core::ResetType;
use tracing::info;

/// Statuses that accept a reset command.
pub const RESET_ACCEPTED: [StatusCode; 3] =
    [StatusCode::OK, StatusCode::ACCEPTED, StatusCode::NO_CONTENT];

/// Reads the system again instead of using the fixture, so the value is
/// current.
pub async fn state_reading<B: Bmc>(fx: &Fixtures<B>) -> CheckResult {
    let system = fx
        .session()?
        .get(paths::SYSTEM)
        .await
        .map_err(CheckError::bmc)?;
    let value = &system["PowerState"];
    let state: PowerState = value
        .as_str()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| CheckError::Assertion(format!("unknown power state: {value}")))?;
    info!(power_state = %state, "current power state");
    Ok(())
}

pub async fn control_endpoint<B: Bmc>(fx: &Fixtures<B>) -> CheckResult {
    let response = fx
        .session()?
        .post(paths::SYSTEM_RESET, &ResetRequest::from(ResetType::On))
        .await
        .map_err(CheckError::bmc)?;
    ensure!(
        RESET_ACCEPTED.contains(&response.status),
        "unexpected reset status: {}",
        response.status
    );
    info!(status = response.status.as_u16(), "reset endpoint accepts commands");
    Ok(())
}

/// Valid reset types are never rejected as a bad request.
pub async fn command_validation<B: Bmc>(fx: &Fixtures<B>) -> CheckResult {
    let bmc = fx.session()?;
    for reset_type in ResetType::SAFE {
        let response = bmc
            .post(paths::SYSTEM_RESET, &ResetRequest::from(reset_type))
            .await
            .map_err(CheckError::bmc)?;
        ensure!(
            response.status != StatusCode::BAD_REQUEST,
            "reset type {reset_type} rejected as invalid"
        );
        info!(%reset_type, status = response.status.as_u16(), "reset command accepted");
    }
    Ok(())
}
