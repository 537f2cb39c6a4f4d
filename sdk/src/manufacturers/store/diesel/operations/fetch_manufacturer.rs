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
        models::ManufacturerModel,
        schema::{manufacturer, manufacturer_certification, manufacturer_product},
    },
    Manufacturer, ManufacturerStoreError,
};

use diesel::{prelude::*, result::Error::NotFound};

pub(in crate::manufacturers::store::diesel) trait FetchManufacturerOperation {
    fn fetch_manufacturer(
        &self,
        license_number: &str,
    ) -> Result<Option<Manufacturer>, ManufacturerStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> FetchManufacturerOperation for ManufacturerStoreOperations<'a, diesel::pg::PgConnection> {
    fn fetch_manufacturer(
        &self,
        license_number: &str,
    ) -> Result<Option<Manufacturer>, ManufacturerStoreError> {
        self.conn.transaction::<_, ManufacturerStoreError, _>(|| {
            let model = match manufacturer::table
                .filter(manufacturer::license_number.eq(license_number))
                .first::<ManufacturerModel>(self.conn)
                .map(Some)
                .or_else(|err| if err == NotFound { Ok(None) } else { Err(err) })?
            {
                Some(model) => model,
                None => return Ok(None),
            };

            let certifications = manufacturer_certification::table
                .filter(manufacturer_certification::license_number.eq(license_number))
                .order(manufacturer_certification::id.asc())
                .select(manufacturer_certification::name)
                .load::<String>(self.conn)?;

            let products = manufacturer_product::table
                .filter(manufacturer_product::license_number.eq(license_number))
                .order(manufacturer_product::id.asc())
                .select(manufacturer_product::name)
                .load::<String>(self.conn)?;

            Ok(Some(Manufacturer::from((model, certifications, products))))
        })
    }
}

#[cfg(feature = "sqlite")]
impl<'a> FetchManufacturerOperation
    for ManufacturerStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn fetch_manufacturer(
        &self,
        license_number: &str,
    ) -> Result<Option<Manufacturer>, ManufacturerStoreError> {
        self.conn.transaction::<_, ManufacturerStoreError, _>(|| {
            let model = match manufacturer::table
                .filter(manufacturer::license_number.eq(license_number))
                .first::<ManufacturerModel>(self.conn)
                .map(Some)
                .or_else(|err| if err == NotFound { Ok(None) } else { Err(err) })?
            {
                Some(model) => model,
                None => return Ok(None),
            };

            let certifications = manufacturer_certification::table
                .filter(manufacturer_certification::license_number.eq(license_number))
                .order(manufacturer_certification::id.asc())
                .select(manufacturer_certification::name)
                .load::<String>(self.conn)?;

            let products = manufacturer_product::table
                .filter(manufacturer_product::license_number.eq(license_number))
                .order(manufacturer_product::id.asc())
                .select(manufacturer_product::name)
                .load::<String>(self.conn)?;

            Ok(Some(Manufacturer::from((model, certifications, products))))
        })
    }
}
