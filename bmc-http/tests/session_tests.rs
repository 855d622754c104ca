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

mod common;

#[cfg(feature = "reqwest")]
mod tests {
    use crate::common::test_utils::*;
    use redfish_conformance_bmc_http::reqwest::BmcError;
    use redfish_conformance_bmc_http::reqwest::USER_AGENT;
    use redfish_conformance_core::Bmc;
    use redfish_conformance_core::ResponseError;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::body_json;
    use wiremock::matchers::header;
    use wiremock::matchers::method;
    use wiremock::matchers::path;
    use wiremock::Mock;
    use wiremock::MockServer;
    use wiremock::Request;
    use wiremock::ResponseTemplate;

    fn system() -> serde_json::Value {
        json!({
            "@odata.id": paths::SYSTEM,
            "Id": "system",
            "Name": "system",
            "PowerState": "On",
            "Status": { "State": "Enabled", "Health": "OK" },
            "Actions": {
                "#ComputerSystem.Reset": { "target": paths::SYSTEM_RESET }
            }
        })
    }

    #[tokio::test]
    async fn test_authenticate_attaches_token_to_later_requests() {
        let mock_server = MockServer::start().await;
        mount_session_with_token(&mock_server).await;

        Mock::given(method("GET"))
            .and(path(paths::SYSTEM))
            .and(header("X-Auth-Token", TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(system()))
            .expect(2)
            .mount(&mock_server)
            .await;

        let mut bmc = create_test_bmc(&mock_server);
        let token = bmc.authenticate().await.expect("session created");

        assert_eq!(token.as_deref(), Some(TOKEN));
        assert!(bmc.is_authenticated());
        assert_eq!(bmc.token(), Some(TOKEN));

        for _ in 0..2 {
            let system = bmc.get(paths::SYSTEM).await.expect("system readable");
            assert_eq!(system["PowerState"], "On");
        }
    }

    #[tokio::test]
    async fn test_authenticate_without_token_falls_back_to_basic() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(paths::SESSIONS))
            .and(body_json(session_request()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Id": "1" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path(paths::SYSTEM))
            .and(header("authorization", BASIC_ROOT))
            .respond_with(ResponseTemplate::new(200).set_body_json(system()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut bmc = create_test_bmc(&mock_server);
        let token = bmc.authenticate().await.expect("degraded success");

        assert_eq!(token, None);
        assert!(bmc.is_authenticated());
        assert_eq!(bmc.token(), None);
        assert!(bmc.get(paths::SYSTEM).await.is_ok());
    }

    #[tokio::test]
    async fn test_authenticate_rejected_credentials() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(paths::SESSIONS))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut bmc = create_test_bmc(&mock_server);
        let err = bmc.authenticate().await.unwrap_err();

        assert!(err.is_unauthorized());
        assert!(matches!(err, BmcError::Unauthorized { .. }));
        assert!(!bmc.is_authenticated());
        assert_eq!(bmc.token(), None);
    }

    #[tokio::test]
    async fn test_authenticate_server_error_is_distinct_from_rejection() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(paths::SESSIONS))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut bmc = create_test_bmc(&mock_server);
        let err = bmc.authenticate().await.unwrap_err();

        assert!(!err.is_unauthorized());
        assert_eq!(err.status().map(|s| s.as_u16()), Some(503));
        assert!(!bmc.is_authenticated());
    }

    #[tokio::test]
    async fn test_requests_before_authentication_are_anonymous() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/redfish/v1/"))
            .and(|req: &Request| {
                !req.headers.contains_key("authorization") && !req.headers.contains_key("x-auth-token")
            })
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Id": "RootService" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let bmc = create_test_bmc(&mock_server);
        let root = bmc.get("/redfish/v1/").await.expect("anonymous service root");
        assert_eq!(root["Id"], "RootService");
    }

    #[tokio::test]
    async fn test_get_raises_status_error_with_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(paths::INVALID))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let bmc = create_test_bmc(&mock_server);
        let err = bmc.get(paths::INVALID).await.unwrap_err();

        assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
        assert!(err.to_string().contains(paths::INVALID));
    }

    #[tokio::test]
    async fn test_get_rejects_non_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(paths::SYSTEM))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let bmc = create_test_bmc(&mock_server);
        let err = bmc.get(paths::SYSTEM).await.unwrap_err();

        assert!(matches!(err, BmcError::JsonError { .. }));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_fetch_returns_error_status_as_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(paths::INVALID))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": { "code": "Base.1.8.ResourceNotFound" }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let bmc = create_test_bmc(&mock_server);
        let response = bmc.fetch(paths::INVALID).await.expect("no raise on 404");

        assert_eq!(response.status.as_u16(), 404);
        assert_eq!(
            response.json().expect("json error body")["error"]["code"],
            "Base.1.8.ResourceNotFound"
        );
    }

    #[tokio::test]
    async fn test_post_returns_rejection_without_raising() {
        let mock_server = MockServer::start().await;
        mount_session_with_token(&mock_server).await;

        Mock::given(method("POST"))
            .and(path(paths::SYSTEM_RESET))
            .and(header("X-Auth-Token", TOKEN))
            .and(body_json(json!({ "ResetType": "Nmi" })))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": { "code": "Base.1.8.ActionParameterNotSupported" }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut bmc = create_test_bmc(&mock_server);
        bmc.authenticate().await.expect("session created");
        let response = bmc
            .post(paths::SYSTEM_RESET, &json!({ "ResetType": "Nmi" }))
            .await
            .expect("status is data for post");

        assert_eq!(response.status.as_u16(), 400);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_post_accepts_no_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(paths::SYSTEM_RESET))
            .and(body_json(json!({ "ResetType": "On" })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let bmc = create_test_bmc(&mock_server);
        let response = bmc
            .post(paths::SYSTEM_RESET, &json!({ "ResetType": "On" }))
            .await
            .expect("no content");

        assert_eq!(response.status.as_u16(), 204);
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn test_hung_bmc_times_out() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(paths::SYSTEM))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(system())
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&mock_server)
            .await;

        let bmc = create_test_bmc_with_params(&mock_server, quick_timeout());
        let err = bmc.get(paths::SYSTEM).await.unwrap_err();

        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn test_base_url_is_normalized() {
        let mock_server = MockServer::start().await;
        let bmc = create_test_bmc(&mock_server);
        assert_eq!(bmc.base_url(), mock_server.uri());
    }

    #[tokio::test]
    async fn test_requests_identify_the_runner() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(paths::SYSTEM))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(system()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let bmc = create_test_bmc(&mock_server);
        assert!(bmc.get(paths::SYSTEM).await.is_ok());
    }
}
