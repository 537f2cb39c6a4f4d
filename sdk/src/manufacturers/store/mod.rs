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

pub use builder::ManufacturerBuilder;
#[cfg(any(feature = "postgres", feature = "sqlite"))]
pub use self::diesel::DieselManufacturerStore;
pub use error::{ManufacturerBuilderError, ManufacturerStoreError};

#[derive(Clone, Debug, PartialEq)]
pub struct Manufacturer {
    pub license_number: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub certifications: Vec<String>,
    pub products: Vec<String>,
    pub created_at: NaiveDateTime,
}

pub trait ManufacturerStore: Send + Sync {
    /// Adds a manufacturer
    ///
    /// Returns a `ConstraintViolationError` if the license number or email is already registered.
    ///
    /// # Arguments
    ///
    ///  * `manufacturer` - The manufacturer to be added
    fn add_manufacturer(&self, manufacturer: Manufacturer) -> Result<(), ManufacturerStoreError>;

    /// Fetches a manufacturer by license number
    ///
    /// # Arguments
    ///
    ///  * `license_number` - The manufacturer's license number
    fn fetch_manufacturer(
        &self,
        license_number: &str,
    ) -> Result<Option<Manufacturer>, ManufacturerStoreError>;
}

impl<MS> ManufacturerStore for Box<MS>
where
    MS: ManufacturerStore + ?Sized,
{
    fn add_manufacturer(&self, manufacturer: Manufacturer) -> Result<(), ManufacturerStoreError> {
        (**self).add_manufacturer(manufacturer)
    }

    fn fetch_manufacturer(
        &self,
        license_number: &str,
    ) -> Result<Option<Manufacturer>, ManufacturerStoreError> {
        (**self).fetch_manufacturer(license_number)
    }
}
