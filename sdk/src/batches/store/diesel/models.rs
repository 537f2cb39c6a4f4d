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

use crate::batches::store::{diesel::schema::*, Batch, Certification, StatusEntry};

#[derive(Insertable, Queryable, PartialEq, Eq, Debug)]
#[table_name = "herb_batch"]
pub struct HerbBatchModel {
    pub batch_id: i64,
    pub herb_name: String,
    pub quantity: String,
    pub geo_location: String,
    pub image_url: String,
    pub farmer_name: String,
    pub farmer_email: String,
    pub collection_timestamp: NaiveDateTime,
}

#[derive(Insertable, PartialEq, Eq, Debug)]
#[table_name = "batch_status_entry"]
pub struct NewStatusEntryModel {
    pub batch_id: i64,
    pub status: String,
    pub updated_by: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(Queryable, PartialEq, Eq, Debug)]
pub struct StatusEntryModel {
    pub id: i64,
    pub batch_id: i64,
    pub status: String,
    pub updated_by: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, PartialEq, Eq, Debug)]
#[table_name = "batch_certification"]
pub struct NewCertificationModel {
    pub batch_id: i64,
    pub name: String,
    pub file_url: String,
    pub uploaded_at: NaiveDateTime,
    pub uploaded_by: String,
}

#[derive(Queryable, PartialEq, Eq, Debug)]
pub struct CertificationModel {
    pub id: i64,
    pub batch_id: i64,
    pub name: String,
    pub file_url: String,
    pub uploaded_at: NaiveDateTime,
    pub uploaded_by: String,
}

impl
    From<(
        HerbBatchModel,
        Vec<StatusEntryModel>,
        Vec<CertificationModel>,
    )> for Batch
{
    fn from(
        (batch_model, status_models, certification_models): (
            HerbBatchModel,
            Vec<StatusEntryModel>,
            Vec<CertificationModel>,
        ),
    ) -> Self {
        Self {
            batch_id: batch_model.batch_id,
            herb_name: batch_model.herb_name,
            quantity: batch_model.quantity,
            geo_location: batch_model.geo_location,
            image_url: batch_model.image_url,
            farmer_name: batch_model.farmer_name,
            farmer_email: batch_model.farmer_email,
            collection_timestamp: batch_model.collection_timestamp,
            status_history: status_models.into_iter().map(StatusEntry::from).collect(),
            certifications: certification_models
                .into_iter()
                .map(Certification::from)
                .collect(),
        }
    }
}

impl From<Batch>
    for (
        HerbBatchModel,
        Vec<NewStatusEntryModel>,
        Vec<NewCertificationModel>,
    )
{
    fn from(batch: Batch) -> Self {
        let batch_id = batch.batch_id;

        let status_models = batch
            .status_history
            .into_iter()
            .map(|entry| NewStatusEntryModel::from((batch_id, entry)))
            .collect();

        let certification_models = batch
            .certifications
            .into_iter()
            .map(|certification| NewCertificationModel::from((batch_id, certification)))
            .collect();

        let batch_model = HerbBatchModel {
            batch_id,
            herb_name: batch.herb_name,
            quantity: batch.quantity,
            geo_location: batch.geo_location,
            image_url: batch.image_url,
            farmer_name: batch.farmer_name,
            farmer_email: batch.farmer_email,
            collection_timestamp: batch.collection_timestamp,
        };

        (batch_model, status_models, certification_models)
    }
}

impl From<(i64, StatusEntry)> for NewStatusEntryModel {
    fn from((batch_id, entry): (i64, StatusEntry)) -> Self {
        Self {
            batch_id,
            status: entry.status,
            updated_by: entry.updated_by,
            updated_at: entry.timestamp,
        }
    }
}

impl From<StatusEntryModel> for StatusEntry {
    fn from(model: StatusEntryModel) -> Self {
        Self {
            status: model.status,
            timestamp: model.updated_at,
            updated_by: model.updated_by,
        }
    }
}

impl From<(i64, Certification)> for NewCertificationModel {
    fn from((batch_id, certification): (i64, Certification)) -> Self {
        Self {
            batch_id,
            name: certification.name,
            file_url: certification.file_url,
            uploaded_at: certification.uploaded_at,
            uploaded_by: certification.uploaded_by,
        }
    }
}

impl From<CertificationModel> for Certification {
    fn from(model: CertificationModel) -> Self {
        Self {
            name: model.name,
            file_url: model.file_url,
            uploaded_at: model.uploaded_at,
            uploaded_by: model.uploaded_by,
        }
    }
}
