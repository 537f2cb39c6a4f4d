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

use super::error::ManufacturerBuilderError;
use super::Manufacturer;

/// Builder used to create a Manufacturer
#[derive(Clone, Debug, Default)]
pub struct ManufacturerBuilder {
    license_number: Option<String>,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    certifications: Vec<String>,
    products: Vec<String>,
    created_at: Option<NaiveDateTime>,
}

impl ManufacturerBuilder {
    pub fn new() -> Self {
        ManufacturerBuilder::default()
    }

    pub fn with_license_number(mut self, license_number: String) -> Self {
        self.license_number = Some(license_number);
        self
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_email(mut self, email: String) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_phone(mut self, phone: String) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn with_address(mut self, address: String) -> Self {
        self.address = Some(address);
        self
    }

    /// Set the names of the certifications the manufacturer holds
    pub fn with_certifications(mut self, certifications: Vec<String>) -> Self {
        self.certifications = certifications;
        self
    }

    /// Set the names of the products the manufacturer makes
    pub fn with_products(mut self, products: Vec<String>) -> Self {
        self.products = products;
        self
    }

    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn build(self) -> Result<Manufacturer, ManufacturerBuilderError> {
        let license_number = self.license_number.ok_or_else(|| {
            ManufacturerBuilderError::MissingRequiredField("Missing license_number".to_string())
        })?;
        let name = self.name.ok_or_else(|| {
            ManufacturerBuilderError::MissingRequiredField("Missing name".to_string())
        })?;
        let email = self.email.ok_or_else(|| {
            ManufacturerBuilderError::MissingRequiredField("Missing email".to_string())
        })?;

        Ok(Manufacturer {
            license_number,
            name,
            email,
            phone: self.phone,
            address: self.address,
            certifications: self.certifications,
            products: self.products,
            created_at: self.created_at.unwrap_or_else(|| Utc::now().naive_utc()),
        })
    }
}
