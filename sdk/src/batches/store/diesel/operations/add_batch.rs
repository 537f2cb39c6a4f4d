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

use super::BatchStoreOperations;
use crate::batches::store::{
    diesel::{
        models::{HerbBatchModel, NewCertificationModel, NewStatusEntryModel},
        schema::{batch_certification, batch_status_entry, herb_batch},
    },
    Batch, BatchStoreError,
};

use diesel::{dsl::insert_into, prelude::*};

pub(in crate::batches::store::diesel) trait AddBatchOperation {
    fn add_batch(&self, batch: Batch) -> Result<(), BatchStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> AddBatchOperation for BatchStoreOperations<'a, diesel::pg::PgConnection> {
    fn add_batch(&self, batch: Batch) -> Result<(), BatchStoreError> {
        let (batch_model, status_models, certification_models): (
            HerbBatchModel,
            Vec<NewStatusEntryModel>,
            Vec<NewCertificationModel>,
        ) = batch.into();

        self.conn.transaction::<_, BatchStoreError, _>(|| {
            insert_into(herb_batch::table)
                .values(&batch_model)
                .execute(self.conn)?;

            if !status_models.is_empty() {
                insert_into(batch_status_entry::table)
                    .values(&status_models)
                    .execute(self.conn)?;
            }

            if !certification_models.is_empty() {
                insert_into(batch_certification::table)
                    .values(&certification_models)
                    .execute(self.conn)?;
            }

            Ok(())
        })
    }
}

#[cfg(feature = "sqlite")]
impl<'a> AddBatchOperation for BatchStoreOperations<'a, diesel::sqlite::SqliteConnection> {
    fn add_batch(&self, batch: Batch) -> Result<(), BatchStoreError> {
        let (batch_model, status_models, certification_models): (
            HerbBatchModel,
            Vec<NewStatusEntryModel>,
            Vec<NewCertificationModel>,
        ) = batch.into();

        self.conn.immediate_transaction::<_, BatchStoreError, _>(|| {
            insert_into(herb_batch::table)
                .values(&batch_model)
                .execute(self.conn)?;

            if !status_models.is_empty() {
                insert_into(batch_status_entry::table)
                    .values(&status_models)
                    .execute(self.conn)?;
            }

            if !certification_models.is_empty() {
                insert_into(batch_certification::table)
                    .values(&certification_models)
                    .execute(self.conn)?;
            }

            Ok(())
        })
    }
}
