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

use super::{Batch, BatchStore, BatchStoreError, Certification, StatusEntry};

use operations::add_batch::AddBatchOperation as _;
use operations::add_certification::AddCertificationOperation as _;
use operations::add_status_entry::AddStatusEntryOperation as _;
use operations::count_batches::CountBatchesOperation as _;
use operations::fetch_batch::FetchBatchOperation as _;
use operations::list_batches::ListBatchesOperation as _;
use operations::BatchStoreOperations;

/// Manages batches, their status history and certifications in a database
#[derive(Clone)]
pub struct DieselBatchStore<C: diesel::Connection + 'static> {
    connection_pool: Pool<ConnectionManager<C>>,
}

impl<C: diesel::Connection> DieselBatchStore<C> {
    /// Creates a new `DieselBatchStore`
    ///
    /// # Arguments
    ///
    ///  * `connection_pool`: connection pool for the database
    pub fn new(connection_pool: Pool<ConnectionManager<C>>) -> Self {
        DieselBatchStore { connection_pool }
    }
}

#[cfg(feature = "postgres")]
impl BatchStore for DieselBatchStore<diesel::pg::PgConnection> {
    fn add_batch(&self, batch: Batch) -> Result<(), BatchStoreError> {
        BatchStoreOperations::new(&*self.connection_pool.get()?).add_batch(batch)
    }

    fn fetch_batch(&self, batch_id: i64) -> Result<Option<Batch>, BatchStoreError> {
        BatchStoreOperations::new(&*self.connection_pool.get()?).fetch_batch(batch_id)
    }

    fn list_batches(&self) -> Result<Vec<Batch>, BatchStoreError> {
        BatchStoreOperations::new(&*self.connection_pool.get()?).list_batches()
    }

    fn count_batches(&self) -> Result<i64, BatchStoreError> {
        BatchStoreOperations::new(&*self.connection_pool.get()?).count_batches()
    }

    fn add_status_entry(&self, batch_id: i64, entry: StatusEntry) -> Result<(), BatchStoreError> {
        BatchStoreOperations::new(&*self.connection_pool.get()?).add_status_entry(batch_id, entry)
    }

    fn add_certification(
        &self,
        batch_id: i64,
        certification: Certification,
    ) -> Result<(), BatchStoreError> {
        BatchStoreOperations::new(&*self.connection_pool.get()?)
            .add_certification(batch_id, certification)
    }
}

#[cfg(feature = "sqlite")]
impl BatchStore for DieselBatchStore<diesel::sqlite::SqliteConnection> {
    fn add_batch(&self, batch: Batch) -> Result<(), BatchStoreError> {
        BatchStoreOperations::new(&*self.connection_pool.get()?).add_batch(batch)
    }

    fn fetch_batch(&self, batch_id: i64) -> Result<Option<Batch>, BatchStoreError> {
        BatchStoreOperations::new(&*self.connection_pool.get()?).fetch_batch(batch_id)
    }

    fn list_batches(&self) -> Result<Vec<Batch>, BatchStoreError> {
        BatchStoreOperations::new(&*self.connection_pool.get()?).list_batches()
    }

    fn count_batches(&self) -> Result<i64, BatchStoreError> {
        BatchStoreOperations::new(&*self.connection_pool.get()?).count_batches()
    }

    fn add_status_entry(&self, batch_id: i64, entry: StatusEntry) -> Result<(), BatchStoreError> {
        BatchStoreOperations::new(&*self.connection_pool.get()?).add_status_entry(batch_id, entry)
    }

    fn add_certification(
        &self,
        batch_id: i64,
        certification: Certification,
    ) -> Result<(), BatchStoreError> {
        BatchStoreOperations::new(&*self.connection_pool.get()?)
            .add_certification(batch_id, certification)
    }
}
