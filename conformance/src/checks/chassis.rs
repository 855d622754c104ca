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
use redfish_conformance_core::odata::has_field;
use redfish_conformance_core::odata::members;
use redfish_conformance_core::odata::nav_link;
use redfish_conformance_core::odata::ODataId;
use redfish_conformance_core::paths;
use redfish_conformance_core::Bmc;
use redfish_conformance_core::Resource;
use redfish_conformance_core::ResponseError as _;
use serde_json::Value as JsonValue;
use tracing::info;

const THERMAL_SUBSYSTEM: &str = "ThermalSubsystem";

/// Links of every chassis in the collection. Empty collections are a
/// failure.
async fn chassis_links<B: Bmc>(bmc: &B) -> Result<Vec<ODataId>, CheckError> {
    let collection = bmc.get(paths::CHASSIS).await.map_err(CheckError::bmc)?;
    let links = members(&collection)?;
    ensure!(!links.is_empty(), "chassis collection is empty");
    Ok(links)
}

/// Detail resource behind `link`, which must carry a `Name`.
async fn chassis_detail<B: Bmc>(bmc: &B, link: &ODataId) -> Result<Resource, CheckError> {
    let chassis = bmc.get(link.as_str()).await.map_err(CheckError::bmc)?;
    ensure!(has_field(&chassis, "Name"), "chassis {link} has no Name");
    Ok(chassis)
}

fn array_len(v: &JsonValue, name: &str) -> Option<usize> {
    v.get(name).and_then(JsonValue::as_array).map(Vec::len)
}

pub async fn discovery<B: Bmc>(fx: &Fixtures<B>) -> CheckResult {
    let bmc = fx.session()?;
    for link in chassis_links(bmc).await? {
        let chassis = chassis_detail(bmc, &link).await?;
        info!(%link, name = %chassis["Name"], "chassis found");
    }
    Ok(())
}

/// Only the first chassis is inspected. Its thermal subsystem is optional.
/// When it is linked but the BMC answers with an error status, the check
/// still passes.
pub async fn thermal<B: Bmc>(fx: &Fixtures<B>) -> CheckResult {
    let bmc = fx.session()?;
    let links = chassis_links(bmc).await?;
    let chassis = chassis_detail(bmc, &links[0]).await?;
    if !has_field(&chassis, THERMAL_SUBSYSTEM) {
        info!("chassis has no thermal subsystem");
        return Ok(());
    }
    let Some(link) = nav_link(&chassis, THERMAL_SUBSYSTEM) else {
        return Err(CheckError::Assertion(format!(
            "{THERMAL_SUBSYSTEM} has no @odata.id"
        )));
    };
    match bmc.get(link.as_str()).await {
        Ok(thermal) => {
            info!(
                temperatures = array_len(&thermal, "Temperatures"),
                fans = array_len(&thermal, "Fans"),
                "thermal information available"
            );
            Ok(())
        }
        Err(err) if err.status().is_some() => {
            info!(error = %err, "thermal endpoint not available");
            Ok(())
        }
        Err(err) => Err(CheckError::bmc(err)),
    }
}
