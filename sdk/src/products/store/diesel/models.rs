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

use chrono::NaiveDateTime;

use crate::products::store::{diesel::schema::*, Product, ProductSubmission};

#[derive(Insertable, Queryable, PartialEq, Debug)]
#[table_name = "product"]
pub struct ProductModel {
    pub batch_id: i64,
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub manufacturing_date: Option<String>,
    pub expiry_date: Option<String>,
    pub price: Option<f64>,
    pub manufacturer_name: String,
    pub is_published: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, PartialEq, Eq, Debug)]
#[table_name = "product_image"]
pub struct NewProductImageModel {
    pub batch_id: i64,
    pub image_index: i32,
    pub image_url: String,
}

#[derive(Queryable, PartialEq, Eq, Debug)]
pub struct ProductImageModel {
    pub id: i64,
    pub batch_id: i64,
    pub image_index: i32,
    pub image_url: String,
}

impl From<(ProductModel, Vec<ProductImageModel>)> for Product {
    fn from((model, image_models): (ProductModel, Vec<ProductImageModel>)) -> Self {
        Self {
            batch_id: model.batch_id,
            product_name: model.product_name,
            category: model.category,
            description: model.description,
            manufacturing_date: model.manufacturing_date,
            expiry_date: model.expiry_date,
            price: model.price,
            product_images: image_models
                .into_iter()
                .map(|image| image.image_url)
                .collect(),
            manufacturer_name: model.manufacturer_name,
            is_published: model.is_published,
            created_at: model.created_at,
        }
    }
}

impl From<&ProductSubmission> for ProductModel {
    fn from(submission: &ProductSubmission) -> Self {
        Self {
            batch_id: submission.batch_id,
            product_name: submission.product_name.clone(),
            category: submission.category.clone(),
            description: submission.description.clone(),
            manufacturing_date: submission.manufacturing_date.clone(),
            expiry_date: submission.expiry_date.clone(),
            price: submission.price,
            manufacturer_name: submission.manufacturer_name.clone(),
            is_published: submission.is_published.unwrap_or(false),
            created_at: submission.submitted_at,
        }
    }
}

/// Numbers the image urls in the order they were uploaded.
pub fn make_product_image_models(
    batch_id: i64,
    image_urls: &[String],
) -> Vec<NewProductImageModel> {
    image_urls
        .iter()
        .enumerate()
        .map(|(index, url)| NewProductImageModel {
            batch_id,
            image_index: index as i32,
            image_url: url.to_string(),
        })
        .collect()
}
