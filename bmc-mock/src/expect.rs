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

//! Expectations for Bmc Mock.

use http::HeaderValue;
use http::StatusCode;
use redfish_conformance_core::paths;
use redfish_conformance_core::BmcCredentials;
use redfish_conformance_core::RawResponse;
use serde_json::from_str;
use serde_json::json;
use serde_json::Value as JsonValue;
use std::fmt::Display;

/// Canned response. `Err` simulates a transport failure with the given
/// reason.
pub type Response = Result<RawResponse, String>;

/// Request expected by BMC.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpectedRequest {
    /// Expected Get.
    Get { path: String },
    /// Expected Post. `None` accepts any body.
    Post {
        path: String,
        request: Option<JsonValue>,
    },
}

impl ExpectedRequest {
    pub(crate) fn matches(&self, in_path: &str, in_request: Option<&JsonValue>) -> bool {
        match (self, in_request) {
            (Self::Get { path }, None) => path == in_path,
            (Self::Post { path, request }, Some(in_request)) => {
                path == in_path && request.as_ref().map_or(true, |r| r == in_request)
            }
            _ => false,
        }
    }
}

/// Expectation for the tests.
#[derive(Debug, Clone)]
pub struct Expect {
    pub request: ExpectedRequest,
    pub response: Response,
}

fn json_response(status: StatusCode, response: impl Display) -> Response {
    let body: JsonValue = from_str(&response.to_string()).expect("invalid json");
    Ok(RawResponse::new(status, body.to_string()))
}

impl Expect {
    /// GET answered with 200 and a JSON body.
    pub fn get(uri: impl Display, response: impl Display) -> Self {
        Self::get_with_status(uri, StatusCode::OK, response)
    }

    /// GET answered with `status` and a JSON body.
    pub fn get_with_status(uri: impl Display, status: StatusCode, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Get {
                path: uri.to_string(),
            },
            response: json_response(status, response),
        }
    }

    /// GET answered with `status` and no body.
    pub fn get_status(uri: impl Display, status: StatusCode) -> Self {
        Expect {
            request: ExpectedRequest::Get {
                path: uri.to_string(),
            },
            response: Ok(RawResponse::new(status, "")),
        }
    }

    /// GET answered with a body that is not JSON.
    pub fn get_raw(uri: impl Display, body: impl Into<String>) -> Self {
        Expect {
            request: ExpectedRequest::Get {
                path: uri.to_string(),
            },
            response: Ok(RawResponse::new(StatusCode::OK, body)),
        }
    }

    /// GET that never reaches the service.
    pub fn get_unreachable(uri: impl Display, reason: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Get {
                path: uri.to_string(),
            },
            response: Err(reason.to_string()),
        }
    }

    /// POST of exactly `request`, answered with `status` and no body.
    pub fn post(uri: impl Display, request: impl Display, status: StatusCode) -> Self {
        Expect {
            request: ExpectedRequest::Post {
                path: uri.to_string(),
                request: Some(from_str(&request.to_string()).expect("invalid json")),
            },
            response: Ok(RawResponse::new(status, "")),
        }
    }

    /// POST of any body, answered with `status` and no body.
    pub fn post_any(uri: impl Display, status: StatusCode) -> Self {
        Expect {
            request: ExpectedRequest::Post {
                path: uri.to_string(),
                request: None,
            },
            response: Ok(RawResponse::new(status, "")),
        }
    }

    /// Session service accepting `credentials`. A `token` is returned in
    /// `X-Auth-Token`; without one the service issues no token.
    ///
    /// Returns two expectations: a 401 for any other credentials and the
    /// session creation itself.
    pub fn session(credentials: &BmcCredentials, token: Option<&str>) -> [Self; 2] {
        let mut created = RawResponse::new(
            StatusCode::CREATED,
            json!({
                "@odata.id": format!("{}/1", paths::SESSIONS),
                "Id": "1",
                "UserName": credentials.username,
            })
            .to_string(),
        );
        if let Some(token) = token {
            created.headers.insert(
                "X-Auth-Token",
                HeaderValue::from_str(token).expect("valid header value"),
            );
        }
        [
            Self::post_any(paths::SESSIONS, StatusCode::UNAUTHORIZED),
            Expect {
                request: ExpectedRequest::Post {
                    path: paths::SESSIONS.into(),
                    request: Some(json!({
                        "UserName": credentials.username,
                        "Password": credentials.password(),
                    })),
                },
                response: Ok(created),
            },
        ]
    }
}
