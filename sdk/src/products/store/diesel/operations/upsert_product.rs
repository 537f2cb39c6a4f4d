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

use super::fetch_product::FetchProductOperation;
use super::ProductStoreOperations;
use crate::error::InternalError;
use crate::products::store::{
    diesel::{
        models::{make_product_image_models, ProductModel},
        schema::{product, product_image},
    },
    Product, ProductStoreError, ProductSubmission,
};

use diesel::{
    dsl::{delete, insert_into, update},
    prelude::*,
};

pub(in crate::products::store::diesel) trait UpsertProductOperation {
    fn upsert_product(&self, submission: ProductSubmission)
        -> Result<Product, ProductStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> UpsertProductOperation for ProductStoreOperations<'a, diesel::pg::PgConnection> {
    fn upsert_product(
        &self,
        submission: ProductSubmission,
    ) -> Result<Product, ProductStoreError> {
        let batch_id = submission.batch_id;

        self.conn.transaction::<_, ProductStoreError, _>(|| {
            insert_into(product::table)
                .values(ProductModel::from(&submission))
                .on_conflict(product::batch_id)
                .do_update()
                .set((
                    product::product_name.eq(&submission.product_name),
                    product::category.eq(&submission.category),
                    product::description.eq(&submission.description),
                    product::manufacturing_date.eq(&submission.manufacturing_date),
                    product::expiry_date.eq(&submission.expiry_date),
                    product::price.eq(submission.price),
                    product::manufacturer_name.eq(&submission.manufacturer_name),
                ))
                .execute(self.conn)?;

            if let Some(is_published) = submission.is_published {
                update(product::table.filter(product::batch_id.eq(batch_id)))
                    .set(product::is_published.eq(is_published))
                    .execute(self.conn)?;
            }

            if let Some(image_urls) = &submission.product_images {
                delete(product_image::table.filter(product_image::batch_id.eq(batch_id)))
                    .execute(self.conn)?;

                let image_models = make_product_image_models(batch_id, image_urls);
                if !image_models.is_empty() {
                    insert_into(product_image::table)
                        .values(&image_models)
                        .execute(self.conn)?;
                }
            }

            self.fetch_product(batch_id)?.ok_or_else(|| {
                ProductStoreError::InternalError(InternalError::with_message(format!(
                    "Product for batch {} missing after it was saved",
                    batch_id
                )))
            })
        })
    }
}

#[cfg(feature = "sqlite")]
impl<'a> UpsertProductOperation for ProductStoreOperations<'a, diesel::sqlite::SqliteConnection> {
    fn upsert_product(
        &self,
        submission: ProductSubmission,
    ) -> Result<Product, ProductStoreError> {
        let batch_id = submission.batch_id;

        self.conn.immediate_transaction::<_, ProductStoreError, _>(|| {
            let exists = product::table
                .filter(product::batch_id.eq(batch_id))
                .count()
                .get_result::<i64>(self.conn)?
                > 0;

            if exists {
                update(product::table.filter(product::batch_id.eq(batch_id)))
                    .set((
                        product::product_name.eq(&submission.product_name),
                        product::category.eq(&submission.category),
                        product::description.eq(&submission.description),
                        product::manufacturing_date.eq(&submission.manufacturing_date),
                        product::expiry_date.eq(&submission.expiry_date),
                        product::price.eq(submission.price),
                        product::manufacturer_name.eq(&submission.manufacturer_name),
                    ))
                    .execute(self.conn)?;

                if let Some(is_published) = submission.is_published {
                    update(product::table.filter(product::batch_id.eq(batch_id)))
                        .set(product::is_published.eq(is_published))
                        .execute(self.conn)?;
                }
            } else {
                insert_into(product::table)
                    .values(ProductModel::from(&submission))
                    .execute(self.conn)?;
            }

            if let Some(image_urls) = &submission.product_images {
                delete(product_image::table.filter(product_image::batch_id.eq(batch_id)))
                    .execute(self.conn)?;

                let image_models = make_product_image_models(batch_id, image_urls);
                if !image_models.is_empty() {
                    insert_into(product_image::table)
                        .values(&image_models)
                        .execute(self.conn)?;
                }
            }

            self.fetch_product(batch_id)?.ok_or_else(|| {
                ProductStoreError::InternalError(InternalError::with_message(format!(
                    "Product for batch {} missing after it was saved",
                    batch_id
                )))
            })
        })
    }
}
