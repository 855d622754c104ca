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

//! Power domain of `ComputerSystem`.

use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

/// Value of `ComputerSystem.PowerState` accepted by the checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerState {
    On,
    Off,
    PoweringOn,
    PoweringOff,
    Paused,
    Reset,
}

impl PowerState {
    pub const ALL: [Self; 6] = [
        Self::On,
        Self::Off,
        Self::PoweringOn,
        Self::PoweringOff,
        Self::Paused,
        Self::Reset,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "On",
            Self::Off => "Off",
            Self::PoweringOn => "PoweringOn",
            Self::PoweringOff => "PoweringOff",
            Self::Paused => "Paused",
            Self::Reset => "Reset",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Power state string outside of [`PowerState::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown power state: {0}")]
pub struct UnknownPowerState(pub String);

impl FromStr for PowerState {
    type Err = UnknownPowerState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| UnknownPowerState(s.into()))
    }
}

/// `ResetType` parameter of the `ComputerSystem.Reset` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResetType {
    On,
    ForceOff,
    GracefulShutdown,
    GracefulRestart,
    ForceRestart,
    Nmi,
    ForceOn,
    PushPowerButton,
    PowerCycle,
    Suspend,
    Pause,
    Resume,
}

impl ResetType {
    /// Reset types that must never be rejected as invalid by a healthy BMC.
    pub const SAFE: [Self; 2] = [Self::On, Self::GracefulRestart];
}

impl fmt::Display for ResetType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Body of a `ComputerSystem.Reset` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetRequest {
    #[serde(rename = "ResetType")]
    pub reset_type: ResetType,
}

impl From<ResetType> for ResetRequest {
    fn from(reset_type: ResetType) -> Self {
        Self { reset_type }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn power_state_parses_only_known_values() {
        for state in PowerState::ALL {
            assert_eq!(state.as_str().parse::<PowerState>(), Ok(state));
        }
        assert_eq!(
            "Standby".parse::<PowerState>(),
            Err(UnknownPowerState("Standby".into()))
        );
        assert!("on".parse::<PowerState>().is_err());
    }

    #[test]
    fn reset_request_uses_redfish_property_name() {
        let body = serde_json::to_value(ResetRequest::from(ResetType::GracefulRestart))
            .expect("serializable");
        assert_eq!(body, json!({ "ResetType": "GracefulRestart" }));
    }
}
