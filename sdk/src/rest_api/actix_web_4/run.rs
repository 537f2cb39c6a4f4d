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

use actix_cors::Cors;
use actix_files::Files;
use actix_web_4::{http::header, middleware::Logger, web::Data, App, HttpServer};

use crate::error::InternalError;
use crate::uploads::UPLOADS_URL_PREFIX;

use super::{configure_routes, ServiceState, StoreState};

/// Where the REST API listens and which browser origins may call it
#[derive(Clone, Debug)]
pub struct RestApiSettings {
    pub bind: String,
    pub allowed_origins: Vec<String>,
}

pub async fn run(
    settings: RestApiSettings,
    store_state: StoreState,
    service_state: ServiceState,
) -> Result<(), InternalError> {
    service_state
        .uploads
        .ensure_exists()
        .map_err(|err| InternalError::from_source(Box::new(err)))?;

    info!(
        "Serving uploads from {} at {}",
        service_state.uploads.path().display(),
        UPLOADS_URL_PREFIX
    );

    let allowed_origins = settings.allowed_origins.clone();

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(Data::new(store_state.clone()))
            .app_data(Data::new(service_state.clone()))
            .configure(configure_routes)
            .service(Files::new(
                UPLOADS_URL_PREFIX,
                service_state.uploads.path().to_path_buf(),
            ))
    })
    .bind(settings.bind.as_str())
    .map_err(|err| {
        InternalError::from_source_with_prefix(
            Box::new(err),
            format!("Unable to bind to {}", settings.bind),
        )
    })?
    .run()
    .await
    .map_err(|err| InternalError::from_source(Box::new(err)))
}
