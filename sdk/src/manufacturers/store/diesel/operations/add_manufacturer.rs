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

use super::ManufacturerStoreOperations;
use crate::manufacturers::store::{
    diesel::{
        models::{
            ManufacturerModel, NewManufacturerCertificationModel, NewManufacturerProductModel,
        },
        schema::{manufacturer, manufacturer_certification, manufacturer_product},
    },
    Manufacturer, ManufacturerStoreError,
};

use diesel::{dsl::insert_into, prelude::*};

pub(in crate::manufacturers::store::diesel) trait AddManufacturerOperation {
    fn add_manufacturer(&self, manufacturer: Manufacturer) -> Result<(), ManufacturerStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> AddManufacturerOperation for ManufacturerStoreOperations<'a, diesel::pg::PgConnection> {
    fn add_manufacturer(&self, manufacturer: Manufacturer) -> Result<(), ManufacturerStoreError> {
        let (model, certification_models, product_models): (
            ManufacturerModel,
            Vec<NewManufacturerCertificationModel>,
            Vec<NewManufacturerProductModel>,
        ) = manufacturer.into();

        self.conn.transaction::<_, ManufacturerStoreError, _>(|| {
            insert_into(manufacturer::table)
                .values(&model)
                .execute(self.conn)?;

            if !certification_models.is_empty() {
                insert_into(manufacturer_certification::table)
                    .values(&certification_models)
                    .execute(self.conn)?;
            }

            if !product_models.is_empty() {
                insert_into(manufacturer_product::table)
                    .values(&product_models)
                    .execute(self.conn)?;
            }

            Ok(())
        })
    }
}

#[cfg(feature = "sqlite")]
impl<'a> AddManufacturerOperation
    for ManufacturerStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn add_manufacturer(&self, manufacturer: Manufacturer) -> Result<(), ManufacturerStoreError> {
        let (model, certification_models, product_models): (
            ManufacturerModel,
            Vec<NewManufacturerCertificationModel>,
            Vec<NewManufacturerProductModel>,
        ) = manufacturer.into();

        self.conn.immediate_transaction::<_, ManufacturerStoreError, _>(|| {
            insert_into(manufacturer::table)
                .values(&model)
                .execute(self.conn)?;

            if !certification_models.is_empty() {
                insert_into(manufacturer_certification::table)
                    .values(&certification_models)
                    .execute(self.conn)?;
            }

            if !product_models.is_empty() {
                insert_into(manufacturer_product::table)
                    .values(&product_models)
                    .execute(self.conn)?;
            }

            Ok(())
        })
    }
}
