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

//! Runner configuration.
//!
//! Values come from three layers: built-in defaults, an optional TOML file
//! and the command line (which also reads the `BMC_*` environment
//! variables). Later layers override earlier ones key by key.
//!
//! ```toml
//! bmc_url = "https://bmc.lab:2443"
//! username = "root"
//! password = "0penBmc"
//! insecure = true
//! timeout_secs = 10
//! ```

use redfish_conformance_core::BmcCredentials;
use serde::Deserialize;
use std::io::Error as IoError;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;
use toml::de::Error as TomlError;

pub const DEFAULT_BMC_URL: &str = "https://localhost:2443";
pub const DEFAULT_USERNAME: &str = "root";
pub const DEFAULT_PASSWORD: &str = "0penBmc";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io { path: PathBuf, source: IoError },
    #[error("invalid config file {path}: {source}")]
    Toml { path: PathBuf, source: TomlError },
    #[error("invalid config file {path}: timeout_secs must be at least 1")]
    ZeroTimeout { path: PathBuf },
}

/// One configuration layer. Absent keys leave the lower layer untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub bmc_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub insecure: Option<bool>,
    pub timeout_secs: Option<u64>,
}

impl ConfigLayer {
    /// Read a layer from a TOML file.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Io` if failed to read file
    /// - `ConfigError::Toml` if the content is not valid TOML or has unknown keys
    /// - `ConfigError::ZeroTimeout` if `timeout_secs` is 0
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let layer: Self = toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        if layer.timeout_secs == Some(0) {
            return Err(ConfigError::ZeroTimeout {
                path: path.to_path_buf(),
            });
        }
        Ok(layer)
    }
}

/// Resolved configuration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub bmc_url: String,
    pub credentials: BmcCredentials,
    /// Accept invalid TLS certificates.
    pub insecure: bool,
    /// Timeout of every request.
    pub timeout: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            bmc_url: DEFAULT_BMC_URL.into(),
            credentials: BmcCredentials::new(DEFAULT_USERNAME.into(), DEFAULT_PASSWORD.into()),
            insecure: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RunnerConfig {
    /// Apply `layer` on top of this configuration.
    #[must_use]
    pub fn merge(self, layer: ConfigLayer) -> Self {
        let username = layer
            .username
            .unwrap_or_else(|| self.credentials.username.clone());
        let password = layer
            .password
            .unwrap_or_else(|| self.credentials.password().to_string());
        Self {
            bmc_url: layer.bmc_url.unwrap_or(self.bmc_url),
            credentials: BmcCredentials::new(username, password),
            insecure: layer.insecure.unwrap_or(self.insecure),
            timeout: layer
                .timeout_secs
                .map_or(self.timeout, Duration::from_secs),
        }
    }
}
