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

use actix_web_4::{web, HttpResponse};

use crate::rest_api::actix_web_4::{ServiceState, StoreState};
use crate::rest_api::resources::auth::v1::{self, LoginRequest, SignupRequest};

use super::respond;

pub async fn signup(
    store_state: web::Data<StoreState>,
    service_state: web::Data<ServiceState>,
    request: web::Json<SignupRequest>,
) -> HttpResponse {
    respond(
        v1::signup(
            store_state.user_store.clone(),
            service_state.password_hash_cost,
            request.into_inner(),
        )
        .await,
    )
}

pub async fn login(
    store_state: web::Data<StoreState>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    respond(v1::login(store_state.user_store.clone(), request.into_inner()).await)
}
