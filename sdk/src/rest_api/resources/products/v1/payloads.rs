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

use crate::products::store::Product;
use crate::rest_api::resources::format_timestamp;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSlice {
    pub batch_id: String,
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub manufacturing_date: Option<String>,
    pub expiry_date: Option<String>,
    pub price: Option<f64>,
    pub product_images: Vec<String>,
    pub manufacturer_name: String,
    pub is_published: bool,
    pub created_at: String,
}

impl From<Product> for ProductSlice {
    fn from(product: Product) -> Self {
        Self {
            batch_id: product.batch_id.to_string(),
            product_name: product.product_name,
            category: product.category,
            description: product.description,
            manufacturing_date: product.manufacturing_date,
            expiry_date: product.expiry_date,
            price: product.price,
            product_images: product.product_images,
            manufacturer_name: product.manufacturer_name,
            is_published: product.is_published,
            created_at: format_timestamp(&product.created_at),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductSavedResponse {
    pub success: bool,
    pub message: String,
    pub product: ProductSlice,
}
