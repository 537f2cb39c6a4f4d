// Copyright 2024 HerbsTrace Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use chrono::Utc;

use crate::rest_api::resources::format_timestamp;

use super::payloads::HealthResponse;

pub const SERVICE_NAME: &str = "Herb Trace Backend";

pub fn get_health() -> HealthResponse {
    HealthResponse {
        status: "OK".to_string(),
        timestamp: format_timestamp(&Utc::now().naive_utc()),
        service: SERVICE_NAME.to_string(),
    }
}
