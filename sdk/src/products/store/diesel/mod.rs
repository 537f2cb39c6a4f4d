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

pub(in crate) mod models;
mod operations;
pub(in crate) mod schema;

use diesel::r2d2::{ConnectionManager, Pool};

use super::{Product, ProductStore, ProductStoreError, ProductSubmission};

use operations::fetch_product::FetchProductOperation as _;
use operations::upsert_product::UpsertProductOperation as _;
use operations::ProductStoreOperations;

/// Manages products in a database
#[derive(Clone)]
pub struct DieselProductStore<C: diesel::Connection + 'static> {
    connection_pool: Pool<ConnectionManager<C>>,
}

impl<C: diesel::Connection> DieselProductStore<C> {
    /// Creates a new `DieselProductStore`
    ///
    /// # Arguments
    ///
    ///  * `connection_pool`: connection pool for the database
    pub fn new(connection_pool: Pool<ConnectionManager<C>>) -> Self {
        DieselProductStore { connection_pool }
    }
}

#[cfg(feature = "postgres")]
impl ProductStore for DieselProductStore<diesel::pg::PgConnection> {
    fn fetch_product(&self, batch_id: i64) -> Result<Option<Product>, ProductStoreError> {
        ProductStoreOperations::new(&*self.connection_pool.get()?).fetch_product(batch_id)
    }

    fn upsert_product(
        &self,
        submission: ProductSubmission,
    ) -> Result<Product, ProductStoreError> {
        ProductStoreOperations::new(&*self.connection_pool.get()?).upsert_product(submission)
    }
}

#[cfg(feature = "sqlite")]
impl ProductStore for DieselProductStore<diesel::sqlite::SqliteConnection> {
    fn fetch_product(&self, batch_id: i64) -> Result<Option<Product>, ProductStoreError> {
        ProductStoreOperations::new(&*self.connection_pool.get()?).fetch_product(batch_id)
    }

    fn upsert_product(
        &self,
        submission: ProductSubmission,
    ) -> Result<Product, ProductStoreError> {
        ProductStoreOperations::new(&*self.connection_pool.get()?).upsert_product(submission)
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::thread;

    use chrono::NaiveDate;
    use diesel::{prelude::*, sqlite::SqliteConnection};
    use tempfile::TempDir;

    use crate::migrations::run_sqlite_migrations;
    use crate::products::store::ProductSubmissionBuilder;
    use crate::store::sqlite::create_sqlite_pool;

    fn create_connection_pool_and_migrate(
    ) -> Result<Pool<ConnectionManager<SqliteConnection>>, Box<dyn std::error::Error>> {
        let connection_manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = Pool::builder().max_size(1).build(connection_manager)?;

        run_sqlite_migrations(&*pool.get()?)?;

        Ok(pool)
    }

    #[test]
    fn test_fetch_missing_product() -> Result<(), Box<dyn std::error::Error>> {
        let store = DieselProductStore::new(create_connection_pool_and_migrate()?);

        assert_eq!(store.fetch_product(1)?, None);

        Ok(())
    }

    /// A first submission creates the product with its defaults and images.
    #[test]
    fn test_create_product() -> Result<(), Box<dyn std::error::Error>> {
        let store = DieselProductStore::new(create_connection_pool_and_migrate()?);
        let submitted_at = NaiveDate::from_ymd(2024, 5, 1).and_hms(10, 0, 0);

        let product = store.upsert_product(
            ProductSubmissionBuilder::new()
                .with_batch_id(21)
                .with_product_name("Tulsi Tea".to_string())
                .with_category("Tea".to_string())
                .with_price(4.5)
                .with_product_images(vec![
                    "/uploads/product-21-1714557600000-0-front.jpg".to_string(),
                    "/uploads/product-21-1714557600000-1-back.jpg".to_string(),
                ])
                .with_submitted_at(submitted_at)
                .build()?,
        )?;

        assert_eq!(
            product,
            Product {
                batch_id: 21,
                product_name: "Tulsi Tea".to_string(),
                category: "Tea".to_string(),
                description: "".to_string(),
                manufacturing_date: None,
                expiry_date: None,
                price: Some(4.5),
                product_images: vec![
                    "/uploads/product-21-1714557600000-0-front.jpg".to_string(),
                    "/uploads/product-21-1714557600000-1-back.jpg".to_string(),
                ],
                manufacturer_name: "manufacturer".to_string(),
                is_published: false,
                created_at: submitted_at,
            }
        );
        assert_eq!(store.fetch_product(21)?, Some(product));

        Ok(())
    }

    /// A second submission for the same batch updates the existing product in place, keeping
    /// the images and published flag when the submission carries none.
    #[test]
    fn test_update_product_in_place() -> Result<(), Box<dyn std::error::Error>> {
        let store = DieselProductStore::new(create_connection_pool_and_migrate()?);
        let created_at = NaiveDate::from_ymd(2024, 5, 1).and_hms(10, 0, 0);

        store.upsert_product(
            ProductSubmissionBuilder::new()
                .with_batch_id(8)
                .with_product_name("Neem Soap".to_string())
                .with_category("Personal Care".to_string())
                .with_is_published(true)
                .with_product_images(vec!["/uploads/product-8-1-0-soap.jpg".to_string()])
                .with_submitted_at(created_at)
                .build()?,
        )?;

        let updated = store.upsert_product(
            ProductSubmissionBuilder::new()
                .with_batch_id(8)
                .with_product_name("Neem Soap Bar".to_string())
                .with_category("Personal Care".to_string())
                .with_description("Cold processed".to_string())
                .with_manufacturer_name("Green Leaf Co".to_string())
                .with_submitted_at(NaiveDate::from_ymd(2024, 6, 1).and_hms(10, 0, 0))
                .build()?,
        )?;

        assert_eq!(updated.product_name, "Neem Soap Bar");
        assert_eq!(updated.description, "Cold processed");
        assert_eq!(updated.manufacturer_name, "Green Leaf Co");
        assert_eq!(updated.product_images, vec!["/uploads/product-8-1-0-soap.jpg"]);
        assert!(updated.is_published);
        assert_eq!(updated.created_at, created_at);

        let replaced = store.upsert_product(
            ProductSubmissionBuilder::new()
                .with_batch_id(8)
                .with_product_name("Neem Soap Bar".to_string())
                .with_category("Personal Care".to_string())
                .with_is_published(false)
                .with_product_images(vec!["/uploads/product-8-2-0-new.jpg".to_string()])
                .build()?,
        )?;

        assert_eq!(replaced.product_images, vec!["/uploads/product-8-2-0-new.jpg"]);
        assert!(!replaced.is_published);

        let count = schema::product::table
            .count()
            .get_result::<i64>(&*store.connection_pool.get()?)?;
        assert_eq!(count, 1);

        Ok(())
    }

    /// Concurrent first submissions for one batch against a database file all succeed and
    /// leave a single product row.
    #[test]
    fn test_concurrent_first_submissions() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("herbstrace.db");
        let pool = create_sqlite_pool(&path.to_string_lossy())?;
        run_sqlite_migrations(&*pool.get()?)?;
        let store = Arc::new(DieselProductStore::new(pool));

        let handles: Vec<_> = (0..8)
            .map(|writer| {
                let store = store.clone();
                thread::spawn(move || -> Result<(), String> {
                    let submission = ProductSubmissionBuilder::new()
                        .with_batch_id(30)
                        .with_product_name(format!("Ashwagandha Powder {}", writer))
                        .with_category("Powder".to_string())
                        .build()
                        .map_err(|err| err.to_string())?;
                    store
                        .upsert_product(submission)
                        .map(|_| ())
                        .map_err(|err| err.to_string())
                })
            })
            .collect();

        for handle in handles {
            handle.join().map_err(|_| "writer thread panicked")??;
        }

        let count = schema::product::table
            .count()
            .get_result::<i64>(&*store.connection_pool.get()?)?;
        assert_eq!(count, 1);
        assert!(store
            .fetch_product(30)?
            .map(|product| product.product_name.starts_with("Ashwagandha Powder"))
            .unwrap_or(false));

        Ok(())
    }
}
