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

use std::sync::Arc;

use chrono::Utc;

use crate::batches::store::{
    BatchBuilder, BatchStore, BatchStoreError, Certification, CertificationBuilder, StatusEntry,
};
use crate::batches::BatchIdGenerator;
use crate::rest_api::resources::{
    error::ErrorResponse,
    files::{original_file_name, save_files},
    form::MultipartForm,
};
use crate::uploads::{
    batch_certificate_file_name, batch_image_file_name, certificate_file_name, UploadDirectory,
};

use super::payloads::{
    BatchCountResponse, BatchCreatedResponse, BatchSlice, BatchSummarySlice, CertificationSlice,
    CertificationUploadedResponse, StatusUpdateRequest, StatusUpdatedResponse,
};

pub const MAX_INTAKE_CERTIFICATIONS: usize = 10;

const DEFAULT_INTAKE_UPLOADER: &str = "farmer";
const DEFAULT_CERTIFICATION_NAME: &str = "Quality Certificate";
const DEFAULT_UPDATER: &str = "manufacturer";

pub fn parse_batch_id(batch_id: &str) -> Result<i64, ErrorResponse> {
    batch_id
        .parse::<i64>()
        .map_err(|_| ErrorResponse::new(400, &format!("Invalid batch id: {}", batch_id)))
}

pub async fn create_batch(
    store: Arc<dyn BatchStore>,
    uploads: &UploadDirectory,
    id_generator: &dyn BatchIdGenerator,
    form: MultipartForm,
) -> Result<BatchCreatedResponse, ErrorResponse> {
    let image = match form.files("image").as_slice() {
        [] => return Err(ErrorResponse::new(400, "Image is required")),
        [image] => *image,
        _ => return Err(ErrorResponse::new(400, "Only one image may be uploaded")),
    };

    let certificate_files = form.files("certifications");
    if certificate_files.len() > MAX_INTAKE_CERTIFICATIONS {
        return Err(ErrorResponse::new(
            400,
            &format!(
                "At most {} certifications may be uploaded",
                MAX_INTAKE_CERTIFICATIONS
            ),
        ));
    }

    let (herb_name, quantity) = match (form.text("herbName"), form.text("quantity")) {
        (Some(herb_name), Some(quantity)) => (herb_name.to_string(), quantity.to_string()),
        _ => {
            return Err(ErrorResponse::new(
                400,
                "Herb name and quantity are required",
            ))
        }
    };

    let batch_id = id_generator.next_id();

    let mut pending = vec![(
        batch_image_file_name(batch_id, &original_file_name(image)?),
        image.content.as_slice(),
    )];
    let mut certification_names = Vec::with_capacity(certificate_files.len());
    for (index, file) in certificate_files.iter().enumerate() {
        let name = original_file_name(file)?;
        pending.push((
            batch_certificate_file_name(batch_id, index, &name),
            file.content.as_slice(),
        ));
        certification_names.push(name);
    }

    let stored = save_files(uploads, &pending)?;
    let (image_file, certificate_urls) = match stored.split_first() {
        Some((image_file, rest)) => (
            image_file.url().to_string(),
            rest.iter().map(|file| file.url().to_string()),
        ),
        None => {
            return Err(ErrorResponse::new(400, "Image is required"));
        }
    };

    let collected_at = Utc::now().naive_utc();
    let farmer_name = form.text("farmerName").map(ToString::to_string);
    let uploaded_by = farmer_name
        .clone()
        .unwrap_or_else(|| DEFAULT_INTAKE_UPLOADER.to_string());

    let certifications: Vec<Certification> = certification_names
        .into_iter()
        .zip(certificate_urls)
        .map(|(name, file_url)| Certification {
            name,
            file_url,
            uploaded_at: collected_at,
            uploaded_by: uploaded_by.clone(),
        })
        .collect();
    let certifications_count = certifications.len();

    let mut builder = BatchBuilder::new()
        .with_batch_id(batch_id)
        .with_herb_name(herb_name)
        .with_quantity(quantity)
        .with_image_url(image_file.clone())
        .with_collection_timestamp(collected_at)
        .with_certifications(certifications);
    if let Some(geo_location) = form.text("geoLocation") {
        builder = builder.with_geo_location(geo_location.to_string());
    }
    if let Some(farmer_name) = farmer_name {
        builder = builder.with_farmer_name(farmer_name);
    }
    if let Some(farmer_email) = form.text("farmerEmail") {
        builder = builder.with_farmer_email(farmer_email.to_string());
    }

    let result = builder
        .build()
        .map_err(|err| ErrorResponse::internal_error(Box::new(err)))
        .and_then(|batch| {
            store.add_batch(batch).map_err(|err| match err {
                BatchStoreError::ConstraintViolationError(_) => ErrorResponse::new(
                    409,
                    &format!("A batch with id {} already exists", batch_id),
                ),
                err => batch_store_error_response(err),
            })
        });

    if let Err(err) = result {
        uploads.remove_all(&stored);
        return Err(err);
    }

    info!(
        "Created batch {} with {} certification(s)",
        batch_id, certifications_count
    );

    Ok(BatchCreatedResponse {
        success: true,
        batch_id: batch_id.to_string(),
        image_url: image_file,
        certifications_count,
    })
}

pub async fn update_status(
    store: Arc<dyn BatchStore>,
    batch_id: &str,
    request: StatusUpdateRequest,
) -> Result<StatusUpdatedResponse, ErrorResponse> {
    let batch_id = parse_batch_id(batch_id)?;

    let status = request
        .new_status
        .filter(|status| !status.trim().is_empty())
        .ok_or_else(|| ErrorResponse::new(400, "New status is required"))?;
    let updated_by = request
        .updated_by
        .filter(|updated_by| !updated_by.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_UPDATER.to_string());

    debug!("Batch {} moves to {} ({})", batch_id, status, updated_by);

    store
        .add_status_entry(
            batch_id,
            StatusEntry {
                status,
                timestamp: Utc::now().naive_utc(),
                updated_by: Some(updated_by),
            },
        )
        .map_err(batch_store_error_response)?;

    Ok(StatusUpdatedResponse {
        success: true,
        message: "Status updated successfully".to_string(),
    })
}

pub async fn fetch_batch(
    store: Arc<dyn BatchStore>,
    batch_id: &str,
) -> Result<BatchSlice, ErrorResponse> {
    let batch_id = parse_batch_id(batch_id)?;
    match store.fetch_batch(batch_id) {
        Ok(Some(batch)) => Ok(BatchSlice::from(batch)),
        Ok(None) => Err(ErrorResponse::new(404, "Batch not found")),
        Err(err) => Err(batch_store_error_response(err)),
    }
}

pub async fn list_batches(
    store: Arc<dyn BatchStore>,
) -> Result<Vec<BatchSummarySlice>, ErrorResponse> {
    store
        .list_batches()
        .map(|batches| batches.into_iter().map(BatchSummarySlice::from).collect())
        .map_err(batch_store_error_response)
}

pub async fn count_batches(
    store: Arc<dyn BatchStore>,
) -> Result<BatchCountResponse, ErrorResponse> {
    store
        .count_batches()
        .map(|count| BatchCountResponse { count })
        .map_err(batch_store_error_response)
}

pub async fn add_certification(
    store: Arc<dyn BatchStore>,
    uploads: &UploadDirectory,
    batch_id: &str,
    form: MultipartForm,
) -> Result<CertificationUploadedResponse, ErrorResponse> {
    let batch_id = parse_batch_id(batch_id)?;

    let certificate = match form.files("certificate").as_slice() {
        [] => return Err(ErrorResponse::new(400, "Certificate file is required")),
        [certificate] => *certificate,
        _ => {
            return Err(ErrorResponse::new(
                400,
                "Only one certificate may be uploaded",
            ))
        }
    };

    let uploaded_at = Utc::now();
    let file_name = certificate_file_name(
        uploaded_at.timestamp_millis(),
        &original_file_name(certificate)?,
    );
    let stored = save_files(uploads, &[(file_name, certificate.content.as_slice())])?;

    let result = CertificationBuilder::new()
        .with_name(
            form.text("certificationName")
                .unwrap_or(DEFAULT_CERTIFICATION_NAME)
                .to_string(),
        )
        .with_file_url(
            stored
                .first()
                .map(|file| file.url().to_string())
                .unwrap_or_default(),
        )
        .with_uploaded_at(uploaded_at.naive_utc())
        .with_uploaded_by(
            form.text("uploadedBy")
                .unwrap_or(DEFAULT_UPDATER)
                .to_string(),
        )
        .build()
        .map_err(|err| ErrorResponse::internal_error(Box::new(err)))
        .and_then(|certification| {
            store
                .add_certification(batch_id, certification.clone())
                .map(|_| certification)
                .map_err(batch_store_error_response)
        });

    match result {
        Ok(certification) => {
            info!("Added certification {} to batch {}", certification.name, batch_id);
            Ok(CertificationUploadedResponse {
                success: true,
                message: "Certification uploaded successfully".to_string(),
                certification: CertificationSlice::from(certification),
            })
        }
        Err(err) => {
            uploads.remove_all(&stored);
            Err(err)
        }
    }
}

fn batch_store_error_response(err: BatchStoreError) -> ErrorResponse {
    match err {
        BatchStoreError::NotFoundError(_) => ErrorResponse::new(404, "Batch not found"),
        BatchStoreError::ConstraintViolationError(err) => {
            ErrorResponse::new(409, &format!("Batch could not be stored: {}", err))
        }
        BatchStoreError::ResourceTemporarilyUnavailableError(err) => {
            ErrorResponse::service_unavailable(Box::new(err))
        }
        BatchStoreError::InternalError(err) => ErrorResponse::internal_error(Box::new(err)),
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::batches::store::DieselBatchStore;
    use crate::migrations::run_sqlite_migrations;
    use crate::rest_api::resources::form::UploadedFile;
    use crate::store::sqlite::create_sqlite_pool;

    struct FixedBatchIdGenerator(i64);

    impl BatchIdGenerator for FixedBatchIdGenerator {
        fn next_id(&self) -> i64 {
            self.0
        }
    }

    fn batch_store() -> Result<Arc<dyn BatchStore>, Box<dyn std::error::Error>> {
        let pool = create_sqlite_pool(":memory:")?;
        run_sqlite_migrations(&*pool.get()?)?;
        Ok(Arc::new(DieselBatchStore::new(pool)))
    }

    fn file(field_name: &str, file_name: &str, content: &[u8]) -> UploadedFile {
        UploadedFile {
            field_name: field_name.to_string(),
            file_name: Some(file_name.to_string()),
            content: content.to_vec(),
        }
    }

    fn intake_form() -> MultipartForm {
        let mut form = MultipartForm::new();
        form.add_field("herbName".to_string(), "Tulsi".to_string());
        form.add_field("quantity".to_string(), "20 kg".to_string());
        form.add_field("farmerName".to_string(), "Ravi".to_string());
        form.add_file(file("image", "C:\\photos\\tulsi.jpg", b"jpeg"));
        form
    }

    /// A new batch starts with a single "Collected" entry and its files under /uploads.
    #[actix_rt::test]
    async fn test_create_batch() -> Result<(), Box<dyn std::error::Error>> {
        let store = batch_store()?;
        let temp_dir = TempDir::new()?;
        let uploads = UploadDirectory::new(temp_dir.path());

        let mut form = intake_form();
        form.add_file(file("certifications", "organic.pdf", b"pdf"));

        let response = create_batch(
            store.clone(),
            &uploads,
            &FixedBatchIdGenerator(1_700_000_000_000),
            form,
        )
        .await
        .map_err(|err| err.message().to_string())?;

        assert!(response.success);
        assert_eq!(response.batch_id, "1700000000000");
        assert_eq!(response.image_url, "/uploads/1700000000000-tulsi.jpg");
        assert_eq!(response.certifications_count, 1);
        assert!(temp_dir.path().join("1700000000000-tulsi.jpg").exists());
        assert!(temp_dir
            .path()
            .join("cert-1700000000000-0-organic.pdf")
            .exists());

        let batch = fetch_batch(store, "1700000000000")
            .await
            .map_err(|err| err.message().to_string())?;
        assert_eq!(batch.current_status, "Collected");
        assert_eq!(batch.status_history.len(), 1);
        assert_eq!(batch.farmer_email, "");
        assert_eq!(batch.certifications[0].name, "organic.pdf");
        assert_eq!(batch.certifications[0].uploaded_by, "Ravi");

        Ok(())
    }

    #[actix_rt::test]
    async fn test_create_batch_requires_image() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let mut form = MultipartForm::new();
        form.add_field("herbName".to_string(), "Tulsi".to_string());
        form.add_field("quantity".to_string(), "20 kg".to_string());

        let err = create_batch(
            batch_store()?,
            &UploadDirectory::new(temp_dir.path()),
            &FixedBatchIdGenerator(1),
            form,
        )
        .await
        .err()
        .ok_or("expected an error")?;

        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Image is required");

        Ok(())
    }

    /// A repeated id is rejected and the second request's files are removed.
    #[actix_rt::test]
    async fn test_create_batch_id_collision() -> Result<(), Box<dyn std::error::Error>> {
        let store = batch_store()?;
        let temp_dir = TempDir::new()?;
        let uploads = UploadDirectory::new(temp_dir.path());
        let generator = FixedBatchIdGenerator(42);

        create_batch(store.clone(), &uploads, &generator, intake_form())
            .await
            .map_err(|err| err.message().to_string())?;

        let mut second = MultipartForm::new();
        second.add_field("herbName".to_string(), "Neem".to_string());
        second.add_field("quantity".to_string(), "3 kg".to_string());
        second.add_file(file("image", "neem.jpg", b"jpeg"));

        let err = create_batch(store.clone(), &uploads, &generator, second)
            .await
            .err()
            .ok_or("expected an error")?;

        assert_eq!(err.status_code(), 409);
        assert!(!temp_dir.path().join("42-neem.jpg").exists());
        assert!(temp_dir.path().join("42-tulsi.jpg").exists());
        assert_eq!(store.count_batches()?, 1);

        Ok(())
    }

    /// Status updates are appended in call order and default the updater.
    #[actix_rt::test]
    async fn test_update_status() -> Result<(), Box<dyn std::error::Error>> {
        let store = batch_store()?;
        let temp_dir = TempDir::new()?;
        create_batch(
            store.clone(),
            &UploadDirectory::new(temp_dir.path()),
            &FixedBatchIdGenerator(7),
            intake_form(),
        )
        .await
        .map_err(|err| err.message().to_string())?;

        for status in &["Processing", "Packaged"] {
            update_status(
                store.clone(),
                "7",
                StatusUpdateRequest {
                    new_status: Some(status.to_string()),
                    updated_by: None,
                },
            )
            .await
            .map_err(|err| err.message().to_string())?;
        }

        let batch = fetch_batch(store, "7")
            .await
            .map_err(|err| err.message().to_string())?;
        let statuses: Vec<&str> = batch
            .status_history
            .iter()
            .map(|entry| entry.status.as_str())
            .collect();
        assert_eq!(statuses, vec!["Collected", "Processing", "Packaged"]);
        assert_eq!(batch.current_status, "Packaged");
        assert_eq!(
            batch.status_history[2].updated_by.as_deref(),
            Some("manufacturer")
        );

        Ok(())
    }

    #[actix_rt::test]
    async fn test_unknown_batch() -> Result<(), Box<dyn std::error::Error>> {
        let store = batch_store()?;

        let err = fetch_batch(store.clone(), "99")
            .await
            .err()
            .ok_or("expected an error")?;
        assert_eq!(err.status_code(), 404);

        let err = update_status(
            store.clone(),
            "99",
            StatusUpdateRequest {
                new_status: Some("Processing".to_string()),
                updated_by: None,
            },
        )
        .await
        .err()
        .ok_or("expected an error")?;
        assert_eq!(err.status_code(), 404);

        let err = fetch_batch(store, "not-a-number")
            .await
            .err()
            .ok_or("expected an error")?;
        assert_eq!(err.status_code(), 400);

        Ok(())
    }

    /// A certificate for a missing batch is answered with 404 and leaves no file behind.
    #[actix_rt::test]
    async fn test_add_certification() -> Result<(), Box<dyn std::error::Error>> {
        let store = batch_store()?;
        let temp_dir = TempDir::new()?;
        let uploads = UploadDirectory::new(temp_dir.path());
        create_batch(
            store.clone(),
            &uploads,
            &FixedBatchIdGenerator(8),
            intake_form(),
        )
        .await
        .map_err(|err| err.message().to_string())?;

        let mut form = MultipartForm::new();
        form.add_file(file("certificate", "lab.pdf", b"pdf"));
        let response = add_certification(store.clone(), &uploads, "8", form.clone())
            .await
            .map_err(|err| err.message().to_string())?;
        assert_eq!(response.certification.name, "Quality Certificate");
        assert_eq!(response.certification.uploaded_by, "manufacturer");

        let batch = fetch_batch(store.clone(), "8")
            .await
            .map_err(|err| err.message().to_string())?;
        assert_eq!(batch.certifications.len(), 1);

        let err = add_certification(store, &uploads, "9", form)
            .await
            .err()
            .ok_or("expected an error")?;
        assert_eq!(err.status_code(), 404);
        let remaining = std::fs::read_dir(temp_dir.path())?
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().starts_with("cert-"))
            .count();
        assert_eq!(remaining, 1);

        Ok(())
    }

    #[actix_rt::test]
    async fn test_list_and_count() -> Result<(), Box<dyn std::error::Error>> {
        let store = batch_store()?;
        let temp_dir = TempDir::new()?;
        let uploads = UploadDirectory::new(temp_dir.path());

        assert_eq!(count_batches(store.clone()).await.map(|c| c.count).ok(), Some(0));

        create_batch(store.clone(), &uploads, &FixedBatchIdGenerator(1), intake_form())
            .await
            .map_err(|err| err.message().to_string())?;

        let batches = list_batches(store.clone())
            .await
            .map_err(|err| err.message().to_string())?;
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].current_status, "Collected");
        assert_eq!(count_batches(store).await.map(|c| c.count).ok(), Some(1));

        Ok(())
    }
}
