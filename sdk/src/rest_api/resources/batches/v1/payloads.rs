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

use crate::batches::store::{Batch, Certification, StatusEntry};
use crate::rest_api::resources::format_timestamp;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchCreatedResponse {
    pub success: bool,
    pub batch_id: String,
    pub image_url: String,
    pub certifications_count: usize,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    #[serde(default)]
    pub new_status: Option<String>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StatusUpdatedResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusEntrySlice {
    pub status: String,
    pub timestamp: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl From<StatusEntry> for StatusEntrySlice {
    fn from(entry: StatusEntry) -> Self {
        Self {
            status: entry.status,
            timestamp: format_timestamp(&entry.timestamp),
            updated_by: entry.updated_by,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CertificationSlice {
    pub name: String,
    pub file_url: String,
    pub uploaded_at: String,
    pub uploaded_by: String,
}

impl From<Certification> for CertificationSlice {
    fn from(certification: Certification) -> Self {
        Self {
            name: certification.name,
            file_url: certification.file_url,
            uploaded_at: format_timestamp(&certification.uploaded_at),
            uploaded_by: certification.uploaded_by,
        }
    }
}

/// The full record of a batch
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchSlice {
    pub id: String,
    pub herb_name: String,
    pub quantity: String,
    pub image_url: String,
    pub geo_location: String,
    pub collection_timestamp: String,
    pub farmer_name: String,
    pub farmer_email: String,
    pub current_status: String,
    pub status_history: Vec<StatusEntrySlice>,
    pub certifications: Vec<CertificationSlice>,
}

impl From<Batch> for BatchSlice {
    fn from(batch: Batch) -> Self {
        let current_status = batch.current_status().to_string();
        Self {
            id: batch.batch_id.to_string(),
            herb_name: batch.herb_name,
            quantity: batch.quantity,
            image_url: batch.image_url,
            geo_location: batch.geo_location,
            collection_timestamp: format_timestamp(&batch.collection_timestamp),
            farmer_name: batch.farmer_name,
            farmer_email: batch.farmer_email,
            current_status,
            status_history: batch
                .status_history
                .into_iter()
                .map(StatusEntrySlice::from)
                .collect(),
            certifications: batch
                .certifications
                .into_iter()
                .map(CertificationSlice::from)
                .collect(),
        }
    }
}

/// A row of the batch listing
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummarySlice {
    pub id: String,
    pub herb_name: String,
    pub quantity: String,
    pub collection_timestamp: String,
    pub current_status: String,
    pub farmer_name: String,
    pub image_url: String,
}

impl From<Batch> for BatchSummarySlice {
    fn from(batch: Batch) -> Self {
        let current_status = batch.current_status().to_string();
        Self {
            id: batch.batch_id.to_string(),
            herb_name: batch.herb_name,
            quantity: batch.quantity,
            collection_timestamp: format_timestamp(&batch.collection_timestamp),
            current_status,
            farmer_name: batch.farmer_name,
            image_url: batch.image_url,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BatchCountResponse {
    pub count: i64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CertificationUploadedResponse {
    pub success: bool,
    pub message: String,
    pub certification: CertificationSlice,
}
