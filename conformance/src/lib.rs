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

//! Functional conformance checks for Redfish BMC services.
//!
//! A run authenticates one session against the BMC under test, prepares
//! the shared fixtures and then executes the [`Check`] catalogue in order.
//! Each check reports [`Outcome::Passed`], [`Outcome::Failed`] when an
//! assertion or a request inside the check fails, or [`Outcome::Errored`]
//! when a fixture it depends on could not be prepared.
//!
//! Checks only see the [`Bmc`](redfish_conformance_core::Bmc) trait, so the
//! same catalogue runs against a real BMC over HTTPS ([`HttpTarget`]) or
//! against any other [`BmcFactory`].

#[macro_use]
mod macros;

/// Check catalogue.
pub mod checks;
/// Command line interface.
pub mod cli;
/// Runner configuration.
pub mod config;
/// Check errors.
pub mod error;
/// Shared fixtures.
pub mod fixtures;
/// Tracing subscriber setup.
pub mod logging;
/// JSON report.
pub mod report;
/// Sequential suite runner.
pub mod runner;
/// BMC under test.
pub mod target;

#[doc(inline)]
pub use checks::Check;
#[doc(inline)]
pub use checks::Group;
#[doc(inline)]
pub use config::RunnerConfig;
#[doc(inline)]
pub use error::CheckError;
#[doc(inline)]
pub use fixtures::Fixtures;
#[doc(inline)]
pub use runner::run_suite;
#[doc(inline)]
pub use runner::CheckReport;
#[doc(inline)]
pub use runner::Outcome;
#[doc(inline)]
pub use runner::RunSummary;
#[doc(inline)]
pub use target::BmcFactory;
#[doc(inline)]
pub use target::HttpTarget;
