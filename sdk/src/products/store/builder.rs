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

use chrono::{NaiveDateTime, Utc};

use super::error::ProductBuilderError;
use super::ProductSubmission;

const DEFAULT_MANUFACTURER_NAME: &str = "manufacturer";

/// Builder used to create a ProductSubmission
#[derive(Clone, Debug, Default)]
pub struct ProductSubmissionBuilder {
    batch_id: Option<i64>,
    product_name: Option<String>,
    category: Option<String>,
    description: Option<String>,
    manufacturing_date: Option<String>,
    expiry_date: Option<String>,
    price: Option<f64>,
    manufacturer_name: Option<String>,
    is_published: Option<bool>,
    product_images: Option<Vec<String>>,
    submitted_at: Option<NaiveDateTime>,
}

impl ProductSubmissionBuilder {
    pub fn new() -> Self {
        ProductSubmissionBuilder::default()
    }

    /// Set the id of the batch the product is made from
    pub fn with_batch_id(mut self, batch_id: i64) -> Self {
        self.batch_id = Some(batch_id);
        self
    }

    pub fn with_product_name(mut self, product_name: String) -> Self {
        self.product_name = Some(product_name);
        self
    }

    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_manufacturing_date(mut self, manufacturing_date: String) -> Self {
        self.manufacturing_date = Some(manufacturing_date);
        self
    }

    pub fn with_expiry_date(mut self, expiry_date: String) -> Self {
        self.expiry_date = Some(expiry_date);
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_manufacturer_name(mut self, manufacturer_name: String) -> Self {
        self.manufacturer_name = Some(manufacturer_name);
        self
    }

    pub fn with_is_published(mut self, is_published: bool) -> Self {
        self.is_published = Some(is_published);
        self
    }

    /// Set the urls of the product images, replacing any stored images
    pub fn with_product_images(mut self, product_images: Vec<String>) -> Self {
        self.product_images = Some(product_images);
        self
    }

    pub fn with_submitted_at(mut self, submitted_at: NaiveDateTime) -> Self {
        self.submitted_at = Some(submitted_at);
        self
    }

    pub fn build(self) -> Result<ProductSubmission, ProductBuilderError> {
        let batch_id = self.batch_id.ok_or_else(|| {
            ProductBuilderError::MissingRequiredField("Missing batch_id".to_string())
        })?;
        let product_name = self.product_name.ok_or_else(|| {
            ProductBuilderError::MissingRequiredField("Missing product_name".to_string())
        })?;
        let category = self.category.ok_or_else(|| {
            ProductBuilderError::MissingRequiredField("Missing category".to_string())
        })?;

        Ok(ProductSubmission {
            batch_id,
            product_name,
            category,
            description: self.description.unwrap_or_default(),
            manufacturing_date: self.manufacturing_date,
            expiry_date: self.expiry_date,
            price: self.price,
            manufacturer_name: self
                .manufacturer_name
                .unwrap_or_else(|| DEFAULT_MANUFACTURER_NAME.to_string()),
            is_published: self.is_published,
            product_images: self.product_images,
            submitted_at: self.submitted_at.unwrap_or_else(|| Utc::now().naive_utc()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_submission_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let submission = ProductSubmissionBuilder::new()
            .with_batch_id(3)
            .with_product_name("Tulsi Tea".to_string())
            .with_category("Tea".to_string())
            .build()?;

        assert_eq!(submission.description, "");
        assert_eq!(submission.manufacturer_name, "manufacturer");
        assert_eq!(submission.is_published, None);
        assert_eq!(submission.product_images, None);

        Ok(())
    }

    #[test]
    fn test_build_submission_missing_category() {
        match ProductSubmissionBuilder::new()
            .with_batch_id(3)
            .with_product_name("Tulsi Tea".to_string())
            .build()
        {
            Err(ProductBuilderError::MissingRequiredField(field)) => {
                assert_eq!(field, "Missing category")
            }
            other => panic!("expected a missing field error, got {:?}", other),
        }
    }
}
