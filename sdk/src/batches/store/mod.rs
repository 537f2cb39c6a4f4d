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

//! Persistence for herb batches.

mod builder;
#[cfg(any(feature = "postgres", feature = "sqlite"))]
pub mod diesel;
mod error;

use chrono::NaiveDateTime;

pub use builder::{BatchBuilder, CertificationBuilder};
#[cfg(any(feature = "postgres", feature = "sqlite"))]
pub use self::diesel::DieselBatchStore;
pub use error::{BatchBuilderError, BatchStoreError};

/// The status every batch starts with when it is collected.
pub const INITIAL_STATUS: &str = "Collected";

/// One step in the life of a batch, e.g. "Processing" or "Shipping".
#[derive(Clone, Debug, PartialEq)]
pub struct StatusEntry {
    pub status: String,
    pub timestamp: NaiveDateTime,
    pub updated_by: Option<String>,
}

/// A certificate file attached to a batch.
#[derive(Clone, Debug, PartialEq)]
pub struct Certification {
    pub name: String,
    pub file_url: String,
    pub uploaded_at: NaiveDateTime,
    pub uploaded_by: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Batch {
    pub batch_id: i64,
    pub herb_name: String,
    pub quantity: String,
    pub geo_location: String,
    pub image_url: String,
    pub farmer_name: String,
    pub farmer_email: String,
    pub collection_timestamp: NaiveDateTime,
    pub status_history: Vec<StatusEntry>,
    pub certifications: Vec<Certification>,
}

impl Batch {
    /// Returns the status of the last entry in the history, which is the batch's current status.
    pub fn current_status(&self) -> &str {
        self.status_history
            .last()
            .map(|entry| entry.status.as_str())
            .unwrap_or(INITIAL_STATUS)
    }
}

pub trait BatchStore: Send + Sync {
    /// Adds a batch, including its initial status history and certifications
    ///
    /// # Arguments
    ///
    ///  * `batch` - The batch to be added
    fn add_batch(&self, batch: Batch) -> Result<(), BatchStoreError>;

    /// Fetches a batch by its id
    ///
    /// # Arguments
    ///
    ///  * `batch_id` - The id of the batch to fetch
    fn fetch_batch(&self, batch_id: i64) -> Result<Option<Batch>, BatchStoreError>;

    /// Lists every batch, most recently collected first
    fn list_batches(&self) -> Result<Vec<Batch>, BatchStoreError>;

    /// Returns the number of batches
    fn count_batches(&self) -> Result<i64, BatchStoreError>;

    /// Appends an entry to the status history of a batch
    ///
    /// Returns `BatchStoreError::NotFoundError` if the batch does not exist.
    fn add_status_entry(&self, batch_id: i64, entry: StatusEntry) -> Result<(), BatchStoreError>;

    /// Appends a certification to a batch
    ///
    /// Returns `BatchStoreError::NotFoundError` if the batch does not exist.
    fn add_certification(
        &self,
        batch_id: i64,
        certification: Certification,
    ) -> Result<(), BatchStoreError>;
}

impl<BS> BatchStore for Box<BS>
where
    BS: BatchStore + ?Sized,
{
    fn add_batch(&self, batch: Batch) -> Result<(), BatchStoreError> {
        (**self).add_batch(batch)
    }

    fn fetch_batch(&self, batch_id: i64) -> Result<Option<Batch>, BatchStoreError> {
        (**self).fetch_batch(batch_id)
    }

    fn list_batches(&self) -> Result<Vec<Batch>, BatchStoreError> {
        (**self).list_batches()
    }

    fn count_batches(&self) -> Result<i64, BatchStoreError> {
        (**self).count_batches()
    }

    fn add_status_entry(&self, batch_id: i64, entry: StatusEntry) -> Result<(), BatchStoreError> {
        (**self).add_status_entry(batch_id, entry)
    }

    fn add_certification(
        &self,
        batch_id: i64,
        certification: Certification,
    ) -> Result<(), BatchStoreError> {
        (**self).add_certification(batch_id, certification)
    }
}
