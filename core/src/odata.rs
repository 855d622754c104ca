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

//! OData identifiers in untyped payloads
//!
//! Resources are handled as plain JSON; checks only need to follow links
//! and test that a handful of properties exist.
//! - [`ODataId`]: value of `@odata.id`, the canonical resource path (opaque string)
//! - [`ODataLink`]: a reference object `{ "@odata.id": ... }`
//! - [`members`]: links listed in a collection's `Members` array
//!
//! Example
//! ```rust
//! use redfish_conformance_core::odata::members;
//! use serde_json::json;
//!
//! let chassis = json!({
//!     "Members": [{ "@odata.id": "/redfish/v1/Chassis/chassis" }],
//!     "Members@odata.count": 1
//! });
//! let links = members(&chassis).unwrap();
//! assert_eq!(links[0].to_string(), "/redfish/v1/Chassis/chassis");
//! ```

use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Name of the `@odata.id` property.
pub const ODATA_ID: &str = "@odata.id";

/// Name of the collection members property.
pub const MEMBERS: &str = "Members";

/// Type for `@odata.id` identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ODataId(String);

impl ODataId {
    /// Identifier as a path suitable for `Bmc::get`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ODataId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ODataId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl Display for ODataId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

/// Reference to another resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ODataLink {
    /// Target of the reference.
    #[serde(rename = "@odata.id")]
    pub odata_id: ODataId,
}

/// Why a payload could not be read as expected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ShapeError {
    /// Property is absent.
    #[error("missing property: {0}")]
    Missing(String),
    /// Property has another JSON type.
    #[error("property {name} is not {expected}")]
    WrongType {
        /// Property name.
        name: String,
        /// Expected JSON type.
        expected: &'static str,
    },
    /// Array element is not a reference object.
    #[error("{name}[{index}] has no string @odata.id")]
    BadLink {
        /// Array property name.
        name: String,
        /// Position of the element.
        index: usize,
    },
}

/// Returns true if the JSON object contains property `name`.
#[must_use]
pub fn has_field(v: &JsonValue, name: &str) -> bool {
    v.as_object().is_some_and(|obj| obj.contains_key(name))
}

/// Links of the `Members` array of a collection.
///
/// # Errors
///
/// - `ShapeError::Missing` if there is no `Members` property
/// - `ShapeError::WrongType` if `Members` is not an array
/// - `ShapeError::BadLink` if an element has no string `@odata.id`
pub fn members(collection: &JsonValue) -> Result<Vec<ODataId>, ShapeError> {
    let items = collection
        .get(MEMBERS)
        .ok_or_else(|| ShapeError::Missing(MEMBERS.into()))?
        .as_array()
        .ok_or_else(|| ShapeError::WrongType {
            name: MEMBERS.into(),
            expected: "an array",
        })?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            link_of(item).ok_or_else(|| ShapeError::BadLink {
                name: MEMBERS.into(),
                index,
            })
        })
        .collect()
}

/// `@odata.id` of the reference object stored in property `name`, if any.
#[must_use]
pub fn nav_link(v: &JsonValue, name: &str) -> Option<ODataId> {
    v.get(name).and_then(link_of)
}

fn link_of(v: &JsonValue) -> Option<ODataId> {
    ODataLink::deserialize(v).ok().map(|link| link.odata_id)
}
