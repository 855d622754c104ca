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

//! Core contract shared by Redfish conformance clients.
//!
//! This crate holds everything that does not depend on a particular
//! transport: the [`Bmc`] trait used by conformance checks, credentials,
//! raw responses of action-style requests, and the small pieces of the
//! Redfish data model that checks reason about (`@odata.id` links,
//! power states, reset types, well-known resource paths).

/// BMC trait and credentials.
pub mod bmc;
/// Minimal OData helpers for untyped JSON payloads.
pub mod odata;
/// Well-known Redfish resource paths.
pub mod paths;
/// Power state and reset type domains.
pub mod power;
/// Raw HTTP response handed to callers of non-raising requests.
pub mod response;

#[doc(inline)]
pub use bmc::Bmc;
#[doc(inline)]
pub use bmc::BmcCredentials;
#[doc(inline)]
pub use bmc::ResponseError;
#[doc(inline)]
pub use odata::ODataId;
#[doc(inline)]
pub use odata::ODataLink;
#[doc(inline)]
pub use power::PowerState;
#[doc(inline)]
pub use power::ResetType;
#[doc(inline)]
pub use response::RawResponse;

/// Untyped JSON resource representation returned by `get`.
pub type Resource = serde_json::Value;
