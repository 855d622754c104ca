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

use crate::checks::Check;
use crate::checks::Context;
use crate::checks::Group;
use crate::error::CheckError;
use crate::error::CheckResult;
use crate::fixtures::Fixtures;
use crate::target::BmcFactory;
use serde::Serialize;
use std::fmt;
use std::time::Instant;
use tracing::error;
use tracing::info;
use tracing::warn;

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    /// An assertion or a required request failed.
    Failed(String),
    /// A fixture the check depends on is unavailable.
    Errored(String),
}

impl Outcome {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed(_) => "FAILED",
            Self::Errored(_) => "ERROR",
        }
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

impl From<CheckResult> for Outcome {
    fn from(result: CheckResult) -> Self {
        match result {
            Ok(()) => Self::Passed,
            Err(err @ CheckError::Setup(_)) => Self::Errored(err.to_string()),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub group: Group,
    pub name: &'static str,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub base_url: String,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    pub checks: Vec<CheckReport>,
}

impl RunSummary {
    #[must_use]
    pub fn new(base_url: String, checks: Vec<CheckReport>) -> Self {
        let count = |f: fn(&Outcome) -> bool| checks.iter().filter(|r| f(&r.outcome)).count();
        Self {
            base_url,
            passed: count(|o| matches!(o, Outcome::Passed)),
            failed: count(|o| matches!(o, Outcome::Failed(_))),
            errored: count(|o| matches!(o, Outcome::Errored(_))),
            checks,
        }
    }

    /// True if every check passed.
    #[must_use]
    pub fn success(&self) -> bool {
        self.checks.iter().all(|r| r.outcome.is_passed())
    }

    /// Report of `check`, if it was run.
    #[must_use]
    pub fn outcome(&self, check: Check) -> Option<&Outcome> {
        self.checks
            .iter()
            .find(|r| r.group == check.group() && r.name == check.name())
            .map(|r| &r.outcome)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Redfish conformance run against {}", self.base_url)?;
        for report in &self.checks {
            write!(
                f,
                "{:<6} {}::{} ({} ms)",
                report.outcome.label(),
                report.group,
                report.name,
                report.elapsed_ms
            )?;
            match &report.outcome {
                Outcome::Passed => writeln!(f)?,
                Outcome::Failed(reason) | Outcome::Errored(reason) => writeln!(f, ": {reason}")?,
            }
        }
        writeln!(
            f,
            "{} passed, {} failed, {} errors",
            self.passed, self.failed, self.errored
        )
    }
}

/// Run `checks` in order against `target`.
pub async fn run_checks<F: BmcFactory>(target: &F, checks: &[Check]) -> RunSummary {
    info!(base_url = target.base_url(), "preparing fixtures");
    let fixtures = Fixtures::prepare(target).await;
    let cx = Context {
        target,
        fixtures: &fixtures,
    };

    let mut reports = Vec::with_capacity(checks.len());
    for &check in checks {
        let started = Instant::now();
        let outcome = Outcome::from(check.run(&cx).await);
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        match &outcome {
            Outcome::Passed => info!(%check, "PASSED"),
            Outcome::Failed(reason) => error!(%check, %reason, "FAILED"),
            Outcome::Errored(reason) => warn!(%check, %reason, "ERROR"),
        }
        reports.push(CheckReport {
            group: check.group(),
            name: check.name(),
            outcome,
            elapsed_ms,
        });
    }
    RunSummary::new(target.base_url().to_string(), reports)
}

/// Run the whole catalogue against `target`.
pub async fn run_suite<F: BmcFactory>(target: &F) -> RunSummary {
    run_checks(target, &Check::ALL).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::SetupError;

    fn report(check: Check, outcome: Outcome) -> CheckReport {
        CheckReport {
            group: check.group(),
            name: check.name(),
            outcome,
            elapsed_ms: 1,
        }
    }

    #[test]
    fn setup_errors_are_not_failures() {
        let outcome = Outcome::from(Err(CheckError::Setup(SetupError::Unauthorized)));
        assert!(matches!(outcome, Outcome::Errored(_)));
        let outcome = Outcome::from(Err(CheckError::Assertion("missing Name".into())));
        assert_eq!(outcome, Outcome::Failed("missing Name".into()));
    }

    #[test]
    fn summary_counts_and_renders() {
        let summary = RunSummary::new(
            "https://bmc".into(),
            vec![
                report(Check::AuthenticationSuccess, Outcome::Passed),
                report(Check::ChassisDiscovery, Outcome::Failed("chassis collection is empty".into())),
                report(Check::SystemInfoStructure, Outcome::Errored("setup failed".into())),
            ],
        );
        assert_eq!((summary.passed, summary.failed, summary.errored), (1, 1, 1));
        assert!(!summary.success());
        assert_eq!(
            summary.outcome(Check::AuthenticationSuccess),
            Some(&Outcome::Passed)
        );
        assert_eq!(summary.outcome(Check::Memory), None);

        let text = summary.to_string();
        assert!(text.contains("PASSED authentication::success (1 ms)"));
        assert!(text.contains("FAILED chassis::discovery (1 ms): chassis collection is empty"));
        assert!(text.ends_with("1 passed, 1 failed, 1 errors\n"));
    }

    #[test]
    fn empty_run_is_successful() {
        assert!(RunSummary::new("https://bmc".into(), Vec::new()).success());
    }
}
