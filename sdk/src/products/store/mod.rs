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

mod builder;
#[cfg(any(feature = "postgres", feature = "sqlite"))]
pub mod diesel;
mod error;

use chrono::NaiveDateTime;

pub use builder::ProductSubmissionBuilder;
#[cfg(any(feature = "postgres", feature = "sqlite"))]
pub use self::diesel::DieselProductStore;
pub use error::{ProductBuilderError, ProductStoreError};

/// A product made from a batch. There is at most one product per batch id.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub batch_id: i64,
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub manufacturing_date: Option<String>,
    pub expiry_date: Option<String>,
    pub price: Option<f64>,
    pub product_images: Vec<String>,
    pub manufacturer_name: String,
    pub is_published: bool,
    pub created_at: NaiveDateTime,
}

/// The details a manufacturer submits for a batch's product.
///
/// Submitting for a batch that already has a product replaces the product's details. The
/// product's images are only replaced when `product_images` is set and its published flag is
/// only changed when `is_published` is set.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductSubmission {
    pub batch_id: i64,
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub manufacturing_date: Option<String>,
    pub expiry_date: Option<String>,
    pub price: Option<f64>,
    pub manufacturer_name: String,
    pub is_published: Option<bool>,
    pub product_images: Option<Vec<String>>,
    pub submitted_at: NaiveDateTime,
}

pub trait ProductStore: Send + Sync {
    /// Fetches the product made from a batch
    ///
    /// # Arguments
    ///
    ///  * `batch_id` - The id of the batch the product was made from
    fn fetch_product(&self, batch_id: i64) -> Result<Option<Product>, ProductStoreError>;

    /// Creates the product for the submission's batch, or updates the existing one in place
    ///
    /// Returns the product as stored.
    fn upsert_product(&self, submission: ProductSubmission)
        -> Result<Product, ProductStoreError>;
}

impl<PS> ProductStore for Box<PS>
where
    PS: ProductStore + ?Sized,
{
    fn fetch_product(&self, batch_id: i64) -> Result<Option<Product>, ProductStoreError> {
        (**self).fetch_product(batch_id)
    }

    fn upsert_product(
        &self,
        submission: ProductSubmission,
    ) -> Result<Product, ProductStoreError> {
        (**self).upsert_product(submission)
    }
}
