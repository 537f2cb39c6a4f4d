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

use crate::products::store::{ProductStore, ProductStoreError, ProductSubmissionBuilder};
use crate::rest_api::resources::{
    batches::v1::parse_batch_id,
    error::ErrorResponse,
    files::{original_file_name, save_files},
    form::MultipartForm,
};
use crate::uploads::{product_image_file_name, UploadDirectory};

use super::payloads::{ProductSavedResponse, ProductSlice};

pub const MAX_PRODUCT_IMAGES: usize = 5;

pub async fn submit_product(
    store: Arc<dyn ProductStore>,
    uploads: &UploadDirectory,
    batch_id: &str,
    form: MultipartForm,
) -> Result<ProductSavedResponse, ErrorResponse> {
    let batch_id = parse_batch_id(batch_id)?;

    let (product_name, category) = match (form.text("productName"), form.text("category")) {
        (Some(product_name), Some(category)) => (product_name.to_string(), category.to_string()),
        _ => {
            return Err(ErrorResponse::new(
                400,
                "Product name and category are required",
            ))
        }
    };

    let images = form.files("productImages");
    if images.len() > MAX_PRODUCT_IMAGES {
        return Err(ErrorResponse::new(
            400,
            &format!("At most {} product images may be uploaded", MAX_PRODUCT_IMAGES),
        ));
    }

    let mut builder = ProductSubmissionBuilder::new()
        .with_batch_id(batch_id)
        .with_product_name(product_name)
        .with_category(category);

    if let Some(description) = form.text("description") {
        builder = builder.with_description(description.to_string());
    }
    if let Some(manufacturing_date) = form.text("manufacturingDate") {
        builder = builder.with_manufacturing_date(manufacturing_date.to_string());
    }
    if let Some(expiry_date) = form.text("expiryDate") {
        builder = builder.with_expiry_date(expiry_date.to_string());
    }
    if let Some(price) = form.text("price") {
        let price = price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .ok_or_else(|| ErrorResponse::new(400, &format!("Invalid price: {}", price)))?;
        builder = builder.with_price(price);
    }
    if let Some(manufacturer_name) = form.text("manufacturerName") {
        builder = builder.with_manufacturer_name(manufacturer_name.to_string());
    }
    if let Some(is_published) = form.text("isPublished") {
        let is_published = is_published.trim().parse::<bool>().map_err(|_| {
            ErrorResponse::new(400, &format!("Invalid isPublished value: {}", is_published))
        })?;
        builder = builder.with_is_published(is_published);
    }

    let submitted_at = Utc::now();
    let mut pending = Vec::with_capacity(images.len());
    for (index, image) in images.iter().enumerate() {
        pending.push((
            product_image_file_name(
                batch_id,
                submitted_at.timestamp_millis(),
                index,
                &original_file_name(image)?,
            ),
            image.content.as_slice(),
        ));
    }
    let stored = save_files(uploads, &pending)?;
    if !stored.is_empty() {
        builder = builder.with_product_images(
            stored.iter().map(|file| file.url().to_string()).collect(),
        );
    }

    let result = builder
        .with_submitted_at(submitted_at.naive_utc())
        .build()
        .map_err(|err| ErrorResponse::internal_error(Box::new(err)))
        .and_then(|submission| {
            store
                .upsert_product(submission)
                .map_err(product_store_error_response)
        });

    match result {
        Ok(product) => {
            info!(
                "Saved product {} for batch {} with {} image(s)",
                product.product_name,
                batch_id,
                product.product_images.len()
            );
            Ok(ProductSavedResponse {
                success: true,
                message: "Product details saved successfully".to_string(),
                product: ProductSlice::from(product),
            })
        }
        Err(err) => {
            uploads.remove_all(&stored);
            Err(err)
        }
    }
}

pub async fn fetch_product(
    store: Arc<dyn ProductStore>,
    batch_id: &str,
) -> Result<ProductSlice, ErrorResponse> {
    let batch_id = parse_batch_id(batch_id)?;
    match store.fetch_product(batch_id) {
        Ok(Some(product)) => Ok(ProductSlice::from(product)),
        Ok(None) => Err(ErrorResponse::new(404, "Product not found")),
        Err(err) => Err(product_store_error_response(err)),
    }
}

fn product_store_error_response(err: ProductStoreError) -> ErrorResponse {
    match err {
        ProductStoreError::NotFoundError(_) => ErrorResponse::new(404, "Product not found"),
        ProductStoreError::ConstraintViolationError(err) => {
            ErrorResponse::new(409, &format!("Product could not be stored: {}", err))
        }
        ProductStoreError::ResourceTemporarilyUnavailableError(err) => {
            ErrorResponse::service_unavailable(Box::new(err))
        }
        ProductStoreError::InternalError(err) => ErrorResponse::internal_error(Box::new(err)),
    }
}
