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

use super::ProductStoreOperations;
use crate::products::store::{
    diesel::{
        models::{ProductImageModel, ProductModel},
        schema::{product, product_image},
    },
    Product, ProductStoreError,
};

use diesel::{prelude::*, result::Error::NotFound};

pub(in crate::products::store::diesel) trait FetchProductOperation {
    fn fetch_product(&self, batch_id: i64) -> Result<Option<Product>, ProductStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> FetchProductOperation for ProductStoreOperations<'a, diesel::pg::PgConnection> {
    fn fetch_product(&self, batch_id: i64) -> Result<Option<Product>, ProductStoreError> {
        self.conn.transaction::<_, ProductStoreError, _>(|| {
            let product_model = match product::table
                .filter(product::batch_id.eq(batch_id))
                .first::<ProductModel>(self.conn)
                .map(Some)
                .or_else(|err| if err == NotFound { Ok(None) } else { Err(err) })?
            {
                Some(product_model) => product_model,
                None => return Ok(None),
            };

            let image_models = product_image::table
                .filter(product_image::batch_id.eq(batch_id))
                .order(product_image::image_index.asc())
                .load::<ProductImageModel>(self.conn)?;

            Ok(Some(Product::from((product_model, image_models))))
        })
    }
}

#[cfg(feature = "sqlite")]
impl<'a> FetchProductOperation for ProductStoreOperations<'a, diesel::sqlite::SqliteConnection> {
    fn fetch_product(&self, batch_id: i64) -> Result<Option<Product>, ProductStoreError> {
        self.conn.transaction::<_, ProductStoreError, _>(|| {
            let product_model = match product::table
                .filter(product::batch_id.eq(batch_id))
                .first::<ProductModel>(self.conn)
                .map(Some)
                .or_else(|err| if err == NotFound { Ok(None) } else { Err(err) })?
            {
                Some(product_model) => product_model,
                None => return Ok(None),
            };

            let image_models = product_image::table
                .filter(product_image::batch_id.eq(batch_id))
                .order(product_image::image_index.asc())
                .load::<ProductImageModel>(self.conn)?;

            Ok(Some(Product::from((product_model, image_models))))
        })
    }
}
