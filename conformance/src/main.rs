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

use clap::Parser;
use redfish_conformance::cli::Cli;
use redfish_conformance::logging;
use redfish_conformance::report;
use redfish_conformance::run_suite;
use redfish_conformance::HttpTarget;
use std::process::ExitCode;
use tracing::error;
use tracing::info;

/// Exit code for configuration and startup errors.
const STARTUP_FAILURE: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    let config = match cli.runner_config() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid configuration");
            return ExitCode::from(STARTUP_FAILURE);
        }
    };
    let target = match HttpTarget::new(&config) {
        Ok(target) => target,
        Err(err) => {
            error!(error = %err, "cannot create BMC client");
            return ExitCode::from(STARTUP_FAILURE);
        }
    };

    let summary = run_suite(&target).await;
    print!("{summary}");

    if let Some(path) = &cli.report {
        if let Err(err) = report::write_json(path, &summary) {
            error!(error = %err, "cannot write report");
            return ExitCode::from(STARTUP_FAILURE);
        }
        info!(path = %path.display(), "report written");
    }

    if summary.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
