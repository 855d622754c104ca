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

use crate::fixtures::SetupError;
use redfish_conformance_core::odata::ShapeError;
use std::error::Error as StdError;

/// Why a check did not pass.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The BMC answered, but not as required.
    #[error("{0}")]
    Assertion(String),
    /// A request that has to succeed failed.
    #[error("request failed: {0}")]
    Bmc(#[source] Box<dyn StdError + Send + Sync>),
    /// A fixture the check depends on is unavailable.
    #[error("setup failed: {0}")]
    Setup(#[from] SetupError),
}

impl CheckError {
    pub fn bmc<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Bmc(Box::new(err))
    }
}

impl From<ShapeError> for CheckError {
    fn from(err: ShapeError) -> Self {
        Self::Assertion(err.to_string())
    }
}

pub type CheckResult = Result<(), CheckError>;
