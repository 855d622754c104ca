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

#[allow(dead_code)]
pub mod test_utils {
    use http::StatusCode;
    use redfish_conformance::BmcFactory;
    use redfish_conformance_bmc_mock::Bmc as MockBmc;
    use redfish_conformance_bmc_mock::Expect;
    use redfish_conformance_bmc_mock::Service;
    use redfish_conformance_bmc_mock::MOCK_BASE_URL;
    use redfish_conformance_core::BmcCredentials;
    use serde_json::json;
    use serde_json::Value;
    use std::convert::Infallible;

    pub use redfish_conformance_core::paths;

    pub const TOKEN: &str = "a8c3f07e21";
    pub const CHASSIS: &str = "/redfish/v1/Chassis/chassis";
    pub const THERMAL: &str = "/redfish/v1/Chassis/chassis/ThermalSubsystem";

    pub fn root() -> BmcCredentials {
        BmcCredentials::new("root".into(), "0penBmc".into())
    }

    /// Mock BMC with the credentials the run is configured with.
    pub struct MockTarget {
        pub service: Service,
        pub credentials: BmcCredentials,
    }

    impl MockTarget {
        pub fn new(service: Service) -> Self {
            Self {
                service,
                credentials: root(),
            }
        }

        pub fn with_credentials(service: Service, credentials: BmcCredentials) -> Self {
            Self {
                service,
                credentials,
            }
        }
    }

    impl BmcFactory for MockTarget {
        type Bmc = MockBmc;
        type Error = Infallible;

        fn base_url(&self) -> &str {
            MOCK_BASE_URL
        }

        fn credentials(&self) -> &BmcCredentials {
            &self.credentials
        }

        fn create(&self, credentials: BmcCredentials) -> Result<Self::Bmc, Self::Error> {
            Ok(self.service.session(credentials))
        }
    }

    pub fn system() -> Value {
        json!({
            "@odata.id": paths::SYSTEM,
            "Id": "system",
            "Name": "system",
            "PowerState": "On",
            "Status": { "State": "Enabled", "Health": "OK" },
            "ProcessorSummary": { "Count": 2 },
            "MemorySummary": { "TotalSystemMemoryGiB": 64 },
            "Actions": {
                "#ComputerSystem.Reset": { "target": paths::SYSTEM_RESET }
            }
        })
    }

    pub fn chassis_collection(ids: &[&str]) -> Value {
        let members: Vec<Value> = ids
            .iter()
            .map(|id| json!({ "@odata.id": format!("{}/{id}", paths::CHASSIS) }))
            .collect();
        json!({
            "@odata.id": paths::CHASSIS,
            "Members@odata.count": members.len(),
            "Members": members,
        })
    }

    /// Service that passes every check.
    pub fn healthy_service() -> Service {
        let service = Service::new();
        service.expect_all(Expect::session(&root(), Some(TOKEN)));
        service.expect(Expect::get(
            paths::SERVICE_ROOT,
            json!({ "Id": "RootService", "RedfishVersion": "1.17.0" }),
        ));
        service.expect(Expect::get(paths::SYSTEM, system()));
        service.expect(Expect::post_any(paths::SYSTEM_RESET, StatusCode::NO_CONTENT));
        service.expect(Expect::get(
            paths::PROCESSORS,
            json!({
                "Members": [
                    { "@odata.id": format!("{}/cpu0", paths::PROCESSORS) },
                    { "@odata.id": format!("{}/cpu1", paths::PROCESSORS) }
                ]
            }),
        ));
        service.expect(Expect::get(paths::MEMORY, json!({ "Members": [] })));
        service.expect(Expect::get(paths::CHASSIS, chassis_collection(&["chassis"])));
        service.expect(Expect::get(
            CHASSIS,
            json!({
                "@odata.id": CHASSIS,
                "Id": "chassis",
                "Name": "chassis",
                "ThermalSubsystem": { "@odata.id": THERMAL }
            }),
        ));
        service.expect(Expect::get(
            THERMAL,
            json!({
                "Temperatures": [{ "Name": "inlet", "ReadingCelsius": 23 }],
                "Fans": [{ "Name": "fan0" }, { "Name": "fan1" }]
            }),
        ));
        service.expect(Expect::get_status(
            paths::INVALID_ENDPOINT,
            StatusCode::NOT_FOUND,
        ));
        service
    }
}
