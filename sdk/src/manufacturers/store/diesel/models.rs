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

use chrono::NaiveDateTime;

use crate::manufacturers::store::{diesel::schema::*, Manufacturer};

#[derive(Insertable, Queryable, PartialEq, Eq, Debug)]
#[table_name = "manufacturer"]
pub struct ManufacturerModel {
    pub license_number: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, PartialEq, Eq, Debug)]
#[table_name = "manufacturer_certification"]
pub struct NewManufacturerCertificationModel {
    pub license_number: String,
    pub name: String,
}

#[derive(Insertable, PartialEq, Eq, Debug)]
#[table_name = "manufacturer_product"]
pub struct NewManufacturerProductModel {
    pub license_number: String,
    pub name: String,
}

impl From<(ManufacturerModel, Vec<String>, Vec<String>)> for Manufacturer {
    fn from(
        (model, certifications, products): (ManufacturerModel, Vec<String>, Vec<String>),
    ) -> Self {
        Self {
            license_number: model.license_number,
            name: model.name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            certifications,
            products,
            created_at: model.created_at,
        }
    }
}

impl From<Manufacturer>
    for (
        ManufacturerModel,
        Vec<NewManufacturerCertificationModel>,
        Vec<NewManufacturerProductModel>,
    )
{
    fn from(manufacturer: Manufacturer) -> Self {
        let license_number = manufacturer.license_number;

        let certification_models = manufacturer
            .certifications
            .into_iter()
            .map(|name| NewManufacturerCertificationModel {
                license_number: license_number.clone(),
                name,
            })
            .collect();

        let product_models = manufacturer
            .products
            .into_iter()
            .map(|name| NewManufacturerProductModel {
                license_number: license_number.clone(),
                name,
            })
            .collect();

        let model = ManufacturerModel {
            license_number,
            name: manufacturer.name,
            email: manufacturer.email,
            phone: manufacturer.phone,
            address: manufacturer.address,
            created_at: manufacturer.created_at,
        };

        (model, certification_models, product_models)
    }
}
