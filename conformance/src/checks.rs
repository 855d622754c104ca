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

pub mod authentication;
pub mod chassis;
pub mod components;
pub mod error_handling;
pub mod power;
pub mod system_info;

use crate::error::CheckResult;
use crate::fixtures::Fixtures;
use crate::target::BmcFactory;
use serde::Serialize;
use std::fmt;

/// What a check may use.
pub struct Context<'a, F: BmcFactory> {
    pub target: &'a F,
    pub fixtures: &'a Fixtures<F::Bmc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    Authentication,
    SystemInfo,
    Power,
    Components,
    Chassis,
    ErrorHandling,
}

impl Group {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::SystemInfo => "system_info",
            Self::Power => "power",
            Self::Components => "components",
            Self::Chassis => "chassis",
            Self::ErrorHandling => "error_handling",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conformance check catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    AuthenticationSuccess,
    AuthenticationResponseCode,
    SystemInfoStatusCode,
    SystemInfoStatusAndPowerState,
    SystemInfoStructure,
    PowerStateReading,
    PowerControlEndpoint,
    PowerCommandValidation,
    Processors,
    Memory,
    ChassisDiscovery,
    ChassisThermal,
    InvalidAuthentication,
    InvalidEndpoint,
}

impl Check {
    /// All checks in execution order.
    pub const ALL: [Self; 14] = [
        Self::AuthenticationSuccess,
        Self::AuthenticationResponseCode,
        Self::SystemInfoStatusCode,
        Self::SystemInfoStatusAndPowerState,
        Self::SystemInfoStructure,
        Self::PowerStateReading,
        Self::PowerControlEndpoint,
        Self::PowerCommandValidation,
        Self::Processors,
        Self::Memory,
        Self::ChassisDiscovery,
        Self::ChassisThermal,
        Self::InvalidAuthentication,
        Self::InvalidEndpoint,
    ];

    #[must_use]
    pub const fn group(self) -> Group {
        match self {
            Self::AuthenticationSuccess | Self::AuthenticationResponseCode => Group::Authentication,
            Self::SystemInfoStatusCode
            | Self::SystemInfoStatusAndPowerState
            | Self::SystemInfoStructure => Group::SystemInfo,
            Self::PowerStateReading | Self::PowerControlEndpoint | Self::PowerCommandValidation => {
                Group::Power
            }
            Self::Processors | Self::Memory => Group::Components,
            Self::ChassisDiscovery | Self::ChassisThermal => Group::Chassis,
            Self::InvalidAuthentication | Self::InvalidEndpoint => Group::ErrorHandling,
        }
    }

    /// Name of the check within its group.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AuthenticationSuccess => "success",
            Self::AuthenticationResponseCode => "response_code",
            Self::SystemInfoStatusCode => "status_code",
            Self::SystemInfoStatusAndPowerState => "status_and_power_state",
            Self::SystemInfoStructure => "structure",
            Self::PowerStateReading => "state_reading",
            Self::PowerControlEndpoint => "control_endpoint",
            Self::PowerCommandValidation => "command_validation",
            Self::Processors => "processors",
            Self::Memory => "memory",
            Self::ChassisDiscovery => "discovery",
            Self::ChassisThermal => "thermal",
            Self::InvalidAuthentication => "invalid_authentication",
            Self::InvalidEndpoint => "invalid_endpoint",
        }
    }

    pub async fn run<F: BmcFactory>(self, cx: &Context<'_, F>) -> CheckResult {
        let fx = cx.fixtures;
        match self {
            Self::AuthenticationSuccess => authentication::success(fx),
            Self::AuthenticationResponseCode => authentication::response_code(fx).await,
            Self::SystemInfoStatusCode => system_info::status_code(fx).await,
            Self::SystemInfoStatusAndPowerState => system_info::status_and_power_state(fx),
            Self::SystemInfoStructure => system_info::structure(fx),
            Self::PowerStateReading => power::state_reading(fx).await,
            Self::PowerControlEndpoint => power::control_endpoint(fx).await,
            Self::PowerCommandValidation => power::command_validation(fx).await,
            Self::Processors => components::processors(fx).await,
            Self::Memory => components::memory(fx).await,
            Self::ChassisDiscovery => chassis::discovery(fx).await,
            Self::ChassisThermal => chassis::thermal(fx).await,
            Self::InvalidAuthentication => error_handling::invalid_authentication(cx.target).await,
            Self::InvalidEndpoint => error_handling::invalid_endpoint(fx).await,
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.group(), self.name())
    }
}
