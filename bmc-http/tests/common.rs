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

#[cfg(feature = "reqwest")]
#[allow(dead_code)]
pub mod test_utils {
    use redfish_conformance_bmc_http::reqwest::Client;
    use redfish_conformance_bmc_http::reqwest::ClientParams;
    use redfish_conformance_bmc_http::HttpBmc;
    use redfish_conformance_bmc_http::RedfishEndpoint;
    use redfish_conformance_core::BmcCredentials;
    use serde_json::json;
    use serde_json::Value;
    use std::time::Duration;
    use wiremock::matchers::body_json;
    use wiremock::matchers::method;
    use wiremock::matchers::path;
    use wiremock::Mock;
    use wiremock::MockServer;
    use wiremock::ResponseTemplate;

    /// `root:password` in Basic authorization form.
    pub const BASIC_ROOT: &str = "Basic cm9vdDpwYXNzd29yZA==";
    pub const TOKEN: &str = "e4f1c2a7b9d0";

    pub fn create_test_credentials() -> BmcCredentials {
        BmcCredentials::new("root".to_string(), "password".to_string())
    }

    pub fn create_test_bmc(mock_server: &MockServer) -> HttpBmc<Client> {
        create_test_bmc_with_params(mock_server, ClientParams::new())
    }

    pub fn create_test_bmc_with_params(
        mock_server: &MockServer,
        params: ClientParams,
    ) -> HttpBmc<Client> {
        let client = Client::with_params(params).unwrap();
        let endpoint = RedfishEndpoint::parse(&format!("{}/", mock_server.uri())).unwrap();
        HttpBmc::new(client, endpoint, create_test_credentials())
    }

    pub fn quick_timeout() -> ClientParams {
        ClientParams::new().timeout(Duration::from_millis(200))
    }

    pub fn session_request() -> Value {
        json!({ "UserName": "root", "Password": "password" })
    }

    /// Session service that issues `TOKEN`.
    pub async fn mount_session_with_token(mock_server: &MockServer) {
        Mock::given(method("POST"))
            .and(path(paths::SESSIONS))
            .and(body_json(session_request()))
            .respond_with(
                ResponseTemplate::new(201)
                    .insert_header("X-Auth-Token", TOKEN)
                    .set_body_json(json!({
                        "@odata.id": "/redfish/v1/SessionService/Sessions/1",
                        "Id": "1",
                        "UserName": "root"
                    })),
            )
            .expect(1)
            .mount(mock_server)
            .await;
    }

    pub mod paths {
        pub const SESSIONS: &str = "/redfish/v1/SessionService/Sessions";
        pub const SYSTEM: &str = "/redfish/v1/Systems/system";
        pub const SYSTEM_RESET: &str = "/redfish/v1/Systems/system/Actions/ComputerSystem.Reset";
        pub const INVALID: &str = "/redfish/v1/InvalidEndpoint";
    }
}
