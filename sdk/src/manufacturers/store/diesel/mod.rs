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

use super::{Manufacturer, ManufacturerStore, ManufacturerStoreError};

use operations::add_manufacturer::AddManufacturerOperation as _;
use operations::fetch_manufacturer::FetchManufacturerOperation as _;
use operations::ManufacturerStoreOperations;

/// Manages manufacturers in a database
#[derive(Clone)]
pub struct DieselManufacturerStore<C: diesel::Connection + 'static> {
    connection_pool: Pool<ConnectionManager<C>>,
}

impl<C: diesel::Connection> DieselManufacturerStore<C> {
    /// Creates a new `DieselManufacturerStore`
    ///
    /// # Arguments
    ///
    ///  * `connection_pool`: connection pool for the database
    pub fn new(connection_pool: Pool<ConnectionManager<C>>) -> Self {
        DieselManufacturerStore { connection_pool }
    }
}

#[cfg(feature = "postgres")]
impl ManufacturerStore for DieselManufacturerStore<diesel::pg::PgConnection> {
    fn add_manufacturer(&self, manufacturer: Manufacturer) -> Result<(), ManufacturerStoreError> {
        ManufacturerStoreOperations::new(&*self.connection_pool.get()?)
            .add_manufacturer(manufacturer)
    }

    fn fetch_manufacturer(
        &self,
        license_number: &str,
    ) -> Result<Option<Manufacturer>, ManufacturerStoreError> {
        ManufacturerStoreOperations::new(&*self.connection_pool.get()?)
            .fetch_manufacturer(license_number)
    }
}

#[cfg(feature = "sqlite")]
impl ManufacturerStore for DieselManufacturerStore<diesel::sqlite::SqliteConnection> {
    fn add_manufacturer(&self, manufacturer: Manufacturer) -> Result<(), ManufacturerStoreError> {
        ManufacturerStoreOperations::new(&*self.connection_pool.get()?)
            .add_manufacturer(manufacturer)
    }

    fn fetch_manufacturer(
        &self,
        license_number: &str,
    ) -> Result<Option<Manufacturer>, ManufacturerStoreError> {
        ManufacturerStoreOperations::new(&*self.connection_pool.get()?)
            .fetch_manufacturer(license_number)
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use diesel::sqlite::SqliteConnection;

    use crate::error::ConstraintViolationType;
    use crate::manufacturers::store::ManufacturerBuilder;
    use crate::migrations::run_sqlite_migrations;

    fn create_connection_pool_and_migrate(
    ) -> Result<Pool<ConnectionManager<SqliteConnection>>, Box<dyn std::error::Error>> {
        let connection_manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = Pool::builder().max_size(1).build(connection_manager)?;

        run_sqlite_migrations(&*pool.get()?)?;

        Ok(pool)
    }

    fn manufacturer(license_number: &str, email: &str) -> Manufacturer {
        ManufacturerBuilder::new()
            .with_license_number(license_number.to_string())
            .with_name("Green Leaf Co".to_string())
            .with_email(email.to_string())
            .with_certifications(vec!["GMP".to_string(), "ISO 22000".to_string()])
            .with_products(vec!["Tulsi Tea".to_string()])
            .with_created_at(NaiveDate::from_ymd(2024, 1, 15).and_hms(0, 0, 0))
            .build()
            .expect("unable to build manufacturer")
    }

    #[test]
    fn test_add_and_fetch_manufacturer() -> Result<(), Box<dyn std::error::Error>> {
        let store = DieselManufacturerStore::new(create_connection_pool_and_migrate()?);
        let expected = manufacturer("LIC-001", "info@greenleaf.example");

        store.add_manufacturer(expected.clone())?;

        assert_eq!(store.fetch_manufacturer("LIC-001")?, Some(expected));
        assert_eq!(store.fetch_manufacturer("LIC-404")?, None);

        Ok(())
    }

    /// License numbers and emails are each unique across manufacturers.
    #[test]
    fn test_unique_license_number_and_email() -> Result<(), Box<dyn std::error::Error>> {
        let store = DieselManufacturerStore::new(create_connection_pool_and_migrate()?);
        store.add_manufacturer(manufacturer("LIC-001", "info@greenleaf.example"))?;

        for duplicate in vec![
            manufacturer("LIC-001", "other@greenleaf.example"),
            manufacturer("LIC-002", "info@greenleaf.example"),
        ] {
            match store.add_manufacturer(duplicate) {
                Err(ManufacturerStoreError::ConstraintViolationError(err)) => {
                    assert_eq!(err.violation_type(), &ConstraintViolationType::Unique)
                }
                other => panic!("expected a unique constraint violation, got {:?}", other),
            }
        }

        Ok(())
    }
}
