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

use crate::rest_api::actix_web_4::{FormPayload, ServiceState, StoreState};
use crate::rest_api::resources::batches::v1::{self, StatusUpdateRequest};

use super::respond;

pub async fn create_batch(
    store_state: web::Data<StoreState>,
    service_state: web::Data<ServiceState>,
    form: FormPayload,
) -> HttpResponse {
    respond(
        v1::create_batch(
            store_state.batch_store.clone(),
            &service_state.uploads,
            &*service_state.id_generator,
            form.into_inner(),
        )
        .await,
    )
}

pub async fn get_batch(
    store_state: web::Data<StoreState>,
    batch_id: web::Path<String>,
) -> HttpResponse {
    respond(v1::fetch_batch(store_state.batch_store.clone(), &batch_id).await)
}

pub async fn list_batches(store_state: web::Data<StoreState>) -> HttpResponse {
    respond(v1::list_batches(store_state.batch_store.clone()).await)
}

pub async fn count_batches(store_state: web::Data<StoreState>) -> HttpResponse {
    respond(v1::count_batches(store_state.batch_store.clone()).await)
}

pub async fn update_status(
    store_state: web::Data<StoreState>,
    batch_id: web::Path<String>,
    request: web::Json<StatusUpdateRequest>,
) -> HttpResponse {
    respond(
        v1::update_status(
            store_state.batch_store.clone(),
            &batch_id,
            request.into_inner(),
        )
        .await,
    )
}

pub async fn add_certification(
    store_state: web::Data<StoreState>,
    service_state: web::Data<ServiceState>,
    batch_id: web::Path<String>,
    form: FormPayload,
) -> HttpResponse {
    respond(
        v1::add_certification(
            store_state.batch_store.clone(),
            &service_state.uploads,
            &batch_id,
            form.into_inner(),
        )
        .await,
    )
}
