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

//! Resource paths exercised by the conformance checks. OpenBMC exposes a
//! single computer system with the id `system`.

pub const SERVICE_ROOT: &str = "/redfish/v1/";
pub const SESSIONS: &str = "/redfish/v1/SessionService/Sessions";
pub const SYSTEM: &str = "/redfish/v1/Systems/system";
pub const SYSTEM_RESET: &str = "/redfish/v1/Systems/system/Actions/ComputerSystem.Reset";
pub const PROCESSORS: &str = "/redfish/v1/Systems/system/Processors";
pub const MEMORY: &str = "/redfish/v1/Systems/system/Memory";
pub const CHASSIS: &str = "/redfish/v1/Chassis";
/// Path that no Redfish service implements.
pub const INVALID_ENDPOINT: &str = "/redfish/v1/InvalidEndpoint";
