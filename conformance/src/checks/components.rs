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
use redfish_conformance_core::odata::MEMBERS;
use redfish_conformance_core::paths;
use redfish_conformance_core::Bmc;
use tracing::info;

pub async fn processors<B: Bmc>(fx: &Fixtures<B>) -> CheckResult {
    let bmc = fx.session()?;
    let system = bmc.get(paths::SYSTEM).await.map_err(CheckError::bmc)?;
    let count = system
        .pointer("/ProcessorSummary/Count")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    info!(count, "processor summary");

    let collection = bmc.get(paths::PROCESSORS).await.map_err(CheckError::bmc)?;
    ensure!(
        has_field(&collection, MEMBERS),
        "processor collection has no {MEMBERS}"
    );
    Ok(())
}

pub async fn memory<B: Bmc>(fx: &Fixtures<B>) -> CheckResult {
    let bmc = fx.session()?;
    let system = bmc.get(paths::SYSTEM).await.map_err(CheckError::bmc)?;
    let total_gib = system
        .pointer("/MemorySummary/TotalSystemMemoryGiB")
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    info!(total_gib, "memory summary");

    let collection = bmc.get(paths::MEMORY).await.map_err(CheckError::bmc)?;
    ensure!(
        has_field(&collection, MEMBERS),
        "memory collection has no {MEMBERS}"
    );
    Ok(())
}
