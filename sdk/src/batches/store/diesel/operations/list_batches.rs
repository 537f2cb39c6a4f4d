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

use std::collections::HashMap;

use super::BatchStoreOperations;
use crate::batches::store::{
    diesel::{
        models::{CertificationModel, HerbBatchModel, StatusEntryModel},
        schema::{batch_certification, batch_status_entry, herb_batch},
    },
    Batch, BatchStoreError,
};

use diesel::prelude::*;

pub(in crate::batches::store::diesel) trait ListBatchesOperation {
    fn list_batches(&self) -> Result<Vec<Batch>, BatchStoreError>;
}

#[cfg(feature = "postgres")]
impl<'a> ListBatchesOperation for BatchStoreOperations<'a, diesel::pg::PgConnection> {
    fn list_batches(&self) -> Result<Vec<Batch>, BatchStoreError> {
        self.conn.transaction::<_, BatchStoreError, _>(|| {
            let batch_models = herb_batch::table
                .order((
                    herb_batch::collection_timestamp.desc(),
                    herb_batch::batch_id.desc(),
                ))
                .load::<HerbBatchModel>(self.conn)?;

            let status_models = batch_status_entry::table
                .order(batch_status_entry::id.asc())
                .load::<StatusEntryModel>(self.conn)?;

            let certification_models = batch_certification::table
                .order(batch_certification::id.asc())
                .load::<CertificationModel>(self.conn)?;

            Ok(assemble_batches(
                batch_models,
                status_models,
                certification_models,
            ))
        })
    }
}

#[cfg(feature = "sqlite")]
impl<'a> ListBatchesOperation for BatchStoreOperations<'a, diesel::sqlite::SqliteConnection> {
    fn list_batches(&self) -> Result<Vec<Batch>, BatchStoreError> {
        self.conn.transaction::<_, BatchStoreError, _>(|| {
            let batch_models = herb_batch::table
                .order((
                    herb_batch::collection_timestamp.desc(),
                    herb_batch::batch_id.desc(),
                ))
                .load::<HerbBatchModel>(self.conn)?;

            let status_models = batch_status_entry::table
                .order(batch_status_entry::id.asc())
                .load::<StatusEntryModel>(self.conn)?;

            let certification_models = batch_certification::table
                .order(batch_certification::id.asc())
                .load::<CertificationModel>(self.conn)?;

            Ok(assemble_batches(
                batch_models,
                status_models,
                certification_models,
            ))
        })
    }
}

// Groups the child rows by batch id, keeping their load order, and attaches them to each batch.
fn assemble_batches(
    batch_models: Vec<HerbBatchModel>,
    status_models: Vec<StatusEntryModel>,
    certification_models: Vec<CertificationModel>,
) -> Vec<Batch> {
    let mut statuses: HashMap<i64, Vec<StatusEntryModel>> = HashMap::new();
    for model in status_models {
        statuses.entry(model.batch_id).or_default().push(model);
    }

    let mut certifications: HashMap<i64, Vec<CertificationModel>> = HashMap::new();
    for model in certification_models {
        certifications.entry(model.batch_id).or_default().push(model);
    }

    batch_models
        .into_iter()
        .map(|batch_model| {
            let batch_id = batch_model.batch_id;
            Batch::from((
                batch_model,
                statuses.remove(&batch_id).unwrap_or_default(),
                certifications.remove(&batch_id).unwrap_or_default(),
            ))
        })
        .collect()
}
