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

use crate::runner::RunSummary;
use std::fs::File;
use std::io::BufWriter;
use std::io::Error as IoError;
use std::io::Write as _;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("cannot write report {path}: {source}")]
    Io { path: PathBuf, source: IoError },
    #[error("cannot serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write `summary` as pretty-printed JSON to `path`.
///
/// # Errors
///
/// - `ReportError::Io` if the file cannot be created or written
/// - `ReportError::Json` if serialization fails
pub fn write_json(path: &Path, summary: &RunSummary) -> Result<(), ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut out, summary)?;
    out.write_all(b"\n").map_err(io_err)?;
    out.flush().map_err(io_err)
}
