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

mod auth;
mod batches;
mod health;
mod products;

use actix_web_4::{error, web, HttpResponse};

use crate::rest_api::resources::error::ErrorResponse;

use super::error_response;

/// Registers every `/api` route.
///
/// The app is expected to carry `web::Data<StoreState>` and `web::Data<ServiceState>`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _| {
        let response = error_response(&ErrorResponse::new(
            400,
            &format!("Invalid JSON body: {}", err),
        ));
        error::InternalError::from_response(err, response).into()
    }))
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::get_health))
            .route("/auth/signup", web::post().to(auth::signup))
            .route("/auth/login", web::post().to(auth::login))
            .route("/batch", web::post().to(batches::create_batch))
            .route("/batches", web::get().to(batches::list_batches))
            .route("/batch-count", web::get().to(batches::count_batches))
            .route("/batch/{id}", web::get().to(batches::get_batch))
            .route("/batch/{id}/status", web::put().to(batches::update_status))
            .route(
                "/batch/{id}/certification",
                web::post().to(batches::add_certification),
            )
            .route("/batch/{id}/product", web::post().to(products::submit_product))
            .route("/batch/{id}/product", web::get().to(products::get_product)),
    );
}

fn respond<T: serde::Serialize>(result: Result<T, ErrorResponse>) -> HttpResponse {
    match result {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(err) => error_response(&err),
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    use std::sync::Arc;

    use actix_web_4::{
        http::{header, StatusCode},
        test,
        web::Data,
        App,
    };
    use serde_json::{json, Value};
    use tempfile::TempDir;

    use crate::batches::BatchIdGenerator;
    use crate::migrations::run_sqlite_migrations;
    use crate::rest_api::actix_web_4::{ServiceState, StoreState};
    use crate::store::sqlite::create_sqlite_pool;
    use crate::uploads::UploadDirectory;

    const BOUNDARY: &str = "herbstrace-boundary";
    const BATCH_ID: i64 = 1_700_000_000_000;

    struct FixedBatchIdGenerator(i64);

    impl BatchIdGenerator for FixedBatchIdGenerator {
        fn next_id(&self) -> i64 {
            self.0
        }
    }

    enum Part<'a> {
        Text(&'a str, &'a str),
        File(&'a str, &'a str, &'a [u8]),
    }

    fn multipart_body(parts: &[Part]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            match part {
                Part::Text(name, value) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                        name, value
                    )
                    .as_bytes(),
                ),
                Part::File(name, file_name, content) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                             Content-Type: application/octet-stream\r\n\r\n",
                            name, file_name
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(content);
                    body.extend_from_slice(b"\r\n");
                }
            }
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn multipart_request(uri: &str, parts: &[Part]) -> test::TestRequest {
        test::TestRequest::post()
            .uri(uri)
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(multipart_body(parts))
    }

    fn intake_parts<'a>() -> Vec<Part<'a>> {
        vec![
            Part::Text("herbName", "Ashwagandha"),
            Part::Text("quantity", "12 kg"),
            Part::Text("geoLocation", "26.91,75.78"),
            Part::File("image", "root.jpg", b"jpeg bytes"),
            Part::File("certifications", "organic.pdf", b"pdf bytes"),
        ]
    }

    fn states(
        temp_dir: &TempDir,
    ) -> Result<(StoreState, ServiceState), Box<dyn std::error::Error>> {
        let pool = create_sqlite_pool(":memory:")?;
        run_sqlite_migrations(&*pool.get()?)?;
        let service_state = ServiceState::new(UploadDirectory::new(temp_dir.path()))
            .with_id_generator(Arc::new(FixedBatchIdGenerator(BATCH_ID)))
            .with_password_hash_cost(4);
        Ok((StoreState::with_sqlite_pool(pool), service_state))
    }

    /// Create a batch, move it through two statuses and read it back.
    #[actix_rt::test]
    async fn test_batch_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let (store_state, service_state) = states(&temp_dir)?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(store_state))
                .app_data(Data::new(service_state))
                .configure(configure_routes),
        )
        .await;

        let resp =
            test::call_service(&app, multipart_request("/api/batch", &intake_parts()).to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["success"], json!(true));
        assert_eq!(created["batchId"], json!("1700000000000"));
        assert_eq!(created["imageUrl"], json!("/uploads/1700000000000-root.jpg"));
        assert_eq!(created["certificationsCount"], json!(1));

        for (status, updated_by) in &[("Processing", "Mehta Herbals"), ("Packaged", "")] {
            let req = test::TestRequest::put()
                .uri("/api/batch/1700000000000/status")
                .set_json(json!({ "newStatus": status, "updatedBy": updated_by }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            let updated: Value = test::read_body_json(resp).await;
            assert_eq!(updated["message"], json!("Status updated successfully"));
        }

        let req = test::TestRequest::get()
            .uri("/api/batch/1700000000000")
            .to_request();
        let batch: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(batch["id"], json!("1700000000000"));
        assert_eq!(batch["farmerName"], json!("Unknown Farmer"));
        assert_eq!(batch["currentStatus"], json!("Packaged"));
        assert_eq!(batch["statusHistory"][0]["status"], json!("Collected"));
        assert_eq!(batch["statusHistory"][0].get("updatedBy"), None);
        assert_eq!(batch["statusHistory"][1]["updatedBy"], json!("Mehta Herbals"));
        assert_eq!(batch["statusHistory"][2]["updatedBy"], json!("manufacturer"));
        assert_eq!(batch["certifications"][0]["uploadedBy"], json!("farmer"));

        let req = test::TestRequest::get().uri("/api/batches").to_request();
        let batches: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(batches.as_array().map(Vec::len), Some(1));
        assert_eq!(batches[0]["currentStatus"], json!("Packaged"));

        let req = test::TestRequest::get().uri("/api/batch-count").to_request();
        let count: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(count, json!({ "count": 1 }));

        let resp = test::call_service(
            &app,
            multipart_request(
                "/api/batch/1700000000000/certification",
                &[
                    Part::Text("certificationName", "Heavy Metal Test"),
                    Part::File("certificate", "lab.pdf", b"pdf bytes"),
                ],
            )
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let uploaded: Value = test::read_body_json(resp).await;
        assert_eq!(uploaded["certification"]["name"], json!("Heavy Metal Test"));

        Ok(())
    }

    #[actix_rt::test]
    async fn test_create_batch_without_image() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let (store_state, service_state) = states(&temp_dir)?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(store_state))
                .app_data(Data::new(service_state))
                .configure(configure_routes),
        )
        .await;

        let req = multipart_request(
            "/api/batch",
            &[
                Part::Text("herbName", "Ashwagandha"),
                Part::Text("quantity", "12 kg"),
            ],
        )
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "statusCode": 400, "error": "Image is required" }));

        Ok(())
    }

    #[actix_rt::test]
    async fn test_oversized_upload() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let (store_state, service_state) = states(&temp_dir)?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(store_state))
                .app_data(Data::new(service_state.with_max_upload_size(16)))
                .configure(configure_routes),
        )
        .await;

        let image = [0u8; 64];
        let req = multipart_request(
            "/api/batch",
            &[
                Part::Text("herbName", "Tulsi"),
                Part::Text("quantity", "1 kg"),
                Part::File("image", "large.jpg", &image),
            ],
        )
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(std::fs::read_dir(temp_dir.path())?.count(), 0);

        Ok(())
    }

    /// Unknown batches answer 404 and malformed ids answer 400.
    #[actix_rt::test]
    async fn test_unknown_batch() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let (store_state, service_state) = states(&temp_dir)?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(store_state))
                .app_data(Data::new(service_state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/batch/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "statusCode": 404, "error": "Batch not found" }));

        let req = test::TestRequest::put()
            .uri("/api/batch/42/status")
            .set_json(json!({ "newStatus": "Processing" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );

        let req = test::TestRequest::get().uri("/api/batch/42/product").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );

        let req = test::TestRequest::get().uri("/api/batch/tulsi").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );

        let req = test::TestRequest::put()
            .uri("/api/batch/42/status")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["statusCode"], json!(400));

        Ok(())
    }

    /// A second product submission for a batch updates the first.
    #[actix_rt::test]
    async fn test_submit_product() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let (store_state, service_state) = states(&temp_dir)?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(store_state))
                .app_data(Data::new(service_state))
                .configure(configure_routes),
        )
        .await;

        let req = multipart_request(
            "/api/batch/7/product",
            &[
                Part::Text("productName", "Ashwagandha Capsules"),
                Part::Text("category", "Supplement"),
                Part::Text("price", "249.00"),
                Part::File("productImages", "box.png", b"png bytes"),
            ],
        )
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let saved: Value = test::read_body_json(resp).await;
        assert_eq!(saved["message"], json!("Product details saved successfully"));
        assert_eq!(saved["product"]["price"], json!(249.0));
        assert_eq!(saved["product"]["isPublished"], json!(false));

        let req = multipart_request(
            "/api/batch/7/product",
            &[
                Part::Text("productName", "Ashwagandha Tablets"),
                Part::Text("category", "Supplement"),
                Part::Text("isPublished", "true"),
            ],
        )
        .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/batch/7/product").to_request();
        let product: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(product["productName"], json!("Ashwagandha Tablets"));
        assert_eq!(product["isPublished"], json!(true));
        assert_eq!(product["productImages"], saved["product"]["productImages"]);

        Ok(())
    }

    #[actix_rt::test]
    async fn test_signup_and_login() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let (store_state, service_state) = states(&temp_dir)?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(store_state))
                .app_data(Data::new(service_state))
                .configure(configure_routes),
        )
        .await;

        let signup = json!({
            "name": "Kiran",
            "email": "kiran@example.com",
            "password": "tulsi-leaf",
            "userType": "manufacturer",
        });

        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(&signup)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let registered: Value = test::read_body_json(resp).await;
        assert_eq!(registered["user"]["userType"], json!("manufacturer"));
        assert_eq!(registered["user"].get("password"), None);

        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(&signup)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], json!("User already exists with this email"));

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "kiran@example.com", "password": "tulsi-leaf" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let logged_in: Value = test::read_body_json(resp).await;
        assert_eq!(logged_in["user"], registered["user"]);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "kiran@example.com", "password": "neem" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNAUTHORIZED
        );

        Ok(())
    }

    #[actix_rt::test]
    async fn test_health() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let health: Value = test::read_body_json(resp).await;
        assert_eq!(health["status"], json!("OK"));
        assert_eq!(health["service"], json!("Herb Trace Backend"));
    }
}
