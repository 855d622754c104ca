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

use crate::config::ConfigError;
use crate::config::ConfigLayer;
use crate::config::RunnerConfig;
use crate::logging::LogFormat;
use clap::builder::BoolishValueParser;
use clap::Parser;
use std::path::PathBuf;

/// Conformance runner CLI.
#[derive(Parser, Debug)]
#[command(name = "redfish-conformance")]
#[command(about = "Run functional conformance checks against a Redfish BMC", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the BMC [default: https://localhost:2443]
    #[arg(long, env = "BMC_URL")]
    pub bmc_url: Option<String>,

    /// Username for session authentication [default: root]
    #[arg(long, env = "BMC_USERNAME")]
    pub username: Option<String>,

    /// Password for session authentication [default: 0penBmc]
    #[arg(long, env = "BMC_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Skip TLS certificate verification (self-signed lab BMCs only)
    #[arg(long, env = "BMC_INSECURE", value_parser = BoolishValueParser::new())]
    pub insecure: bool,

    /// Request timeout in seconds [default: 30]
    #[arg(long, env = "BMC_TIMEOUT_SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// TOML file with bmc_url, username, password, insecure and timeout_secs
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write a JSON report of the run to FILE
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Values given on the command line or in the environment.
    #[must_use]
    pub fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            bmc_url: self.bmc_url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            // An unset flag must not turn off `insecure` from the file.
            insecure: self.insecure.then_some(true),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Resolve the configuration: defaults, then the config file, then the
    /// command line.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn runner_config(&self) -> Result<RunnerConfig, ConfigError> {
        let mut config = RunnerConfig::default();
        if let Some(path) = &self.config {
            config = config.merge(ConfigLayer::read(path)?);
        }
        Ok(config.merge(self.layer()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use std::time::Duration;

    #[test]
    fn command_line_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "bmc_url = \"https://bmc.lab\"\nusername = \"admin\"\ninsecure = true"
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from([
            "redfish-conformance",
            "--config",
            path,
            "--username",
            "operator",
            "--timeout-secs",
            "3",
        ])
        .unwrap();
        let config = cli.runner_config().unwrap();
        assert_eq!(config.bmc_url, "https://bmc.lab");
        assert_eq!(config.credentials.username, "operator");
        assert_eq!(config.credentials.password(), "0penBmc");
        assert!(config.insecure);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["redfish-conformance", "--timeout-secs", "0"]).is_err());
    }

    #[test]
    fn insecure_env_accepts_boolish_values() {
        std::env::set_var("BMC_INSECURE", "1");
        let on = Cli::try_parse_from(["redfish-conformance"]).map(|cli| cli.insecure);
        std::env::set_var("BMC_INSECURE", "no");
        let off = Cli::try_parse_from(["redfish-conformance"]).map(|cli| cli.insecure);
        std::env::remove_var("BMC_INSECURE");
        assert!(on.unwrap());
        assert!(!off.unwrap());
    }

    #[test]
    fn log_format_is_parsed() {
        let cli =
            Cli::try_parse_from(["redfish-conformance", "--log-format", "json"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(Cli::try_parse_from(["redfish-conformance", "--log-format", "xml"]).is_err());
    }
}
