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

mod multipart;
mod routes;
mod run;
mod service_state;
mod store_state;

use actix_web_4::{http::StatusCode, HttpResponse};

use crate::rest_api::resources::error::ErrorResponse;

pub use multipart::FormPayload;
pub use routes::configure_routes;
pub use run::{run, RestApiSettings};
pub use service_state::{ServiceState, DEFAULT_MAX_UPLOAD_SIZE};
pub use store_state::StoreState;

fn error_response(err: &ErrorResponse) -> HttpResponse {
    HttpResponse::build(
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
    )
    .json(err)
}
